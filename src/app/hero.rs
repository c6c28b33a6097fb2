use leptos::prelude::*;

use super::reveal::Reveal;
use crate::visibility::GateConfig;

/// Top-of-page banner. It is usually in the viewport on load, so the gate
/// uses a zero margin and still animates the entrance on first paint.
#[component]
pub fn Hero() -> impl IntoView {
    let config = GateConfig {
        threshold: 0.1,
        root_margin: "0px".to_string(),
        ..GateConfig::default()
    };

    view! {
        <Reveal config=config class="min-h-[60vh] flex items-center">
            <section class="py-16">
                <p class="text-green mb-2">"$ whoami"</p>
                <h1 class="text-4xl font-bold sm:text-5xl">
                    "Ari Voss"
                    <span class="text-cyan animate-pulse">"_"</span>
                </h1>
                <p class="mt-4 max-w-2xl text-lg text-muted">
                    "Creative developer building small games, odd tools, and fast web things - mostly in Rust."
                </p>
                <div class="mt-8 flex gap-4">
                    <a
                        href="#projects"
                        class="bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 px-6 py-3 font-medium"
                    >
                        "See the work"
                    </a>
                    <a
                        href="#contact"
                        class="rounded-md border border-muted/30 px-6 py-3 font-medium hover:border-cyan/50"
                    >
                        "Say hi"
                    </a>
                </div>
            </section>
        </Reveal>
    }
}
