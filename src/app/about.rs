use leptos::prelude::*;

use super::reveal::Reveal;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <Reveal>
            <section id="about" class="py-16">
                <h2 class="text-2xl font-bold mb-8">
                    <span class="text-muted">"$ "</span>
                    "cat about.md"
                </h2>
                <div class="flex flex-col gap-8 lg:flex-row">
                    <div class="w-full lg:max-w-2xl">
                        <p class="mb-4 text-base leading-relaxed">
                            "I spend my days somewhere between systems programming and play: shipping "
                            <strong>"browser games in Rust/WASM"</strong>
                            ", tinkering with embedded sensors, and over-engineering personal tools nobody asked for."
                        </p>
                        <p class="mb-4 text-base leading-relaxed">
                            "Before going independent I built realtime infrastructure for a multiplayer "
                            "games studio - matchmaking, replay storage, and the kind of latency budgets "
                            "that make you care about every allocation."
                        </p>
                    </div>
                    <div class="w-full lg:max-w-xl">
                        <div class="bg-brightBlack/30 rounded-md border-l-4 border-purple p-4">
                            <p class="mb-2 text-sm font-medium text-purple">"Currently"</p>
                            <p class="text-sm">
                                "Polishing NEON MEMORY for release and writing a devlog about shipping "
                                "a game where the netcode and the renderer share one language."
                            </p>
                        </div>
                    </div>
                </div>
            </section>
        </Reveal>
    }
}
