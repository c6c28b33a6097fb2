use leptos::prelude::*;

use super::reveal::Reveal;

const SKILL_GROUPS: [(&str, &str); 4] = [
    (
        "Languages",
        "Rust, TypeScript, Go, GLSL, a grudge against YAML",
    ),
    (
        "Web",
        "Leptos, WebAssembly, WebSockets, Canvas/WebGL, Axum, Tailwind",
    ),
    (
        "Games",
        "ECS design, netcode, tilemap tooling, juice (screenshake is a skill)",
    ),
    (
        "Ops & Hardware",
        "Docker, NixOS, edge deploys, ESP32 firmware, soldering that mostly holds",
    ),
];

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <Reveal>
            <section id="skills" class="py-16">
                <h2 class="text-2xl font-bold mb-8">
                    <span class="text-muted">"$ "</span>
                    "which --all skills"
                </h2>
                <div class="grid grid-cols-1 gap-6 sm:grid-cols-2">
                    {SKILL_GROUPS
                        .iter()
                        .map(|(group, items)| {
                            view! {
                                <div class="bg-brightBlack/30 rounded-md border border-muted/30 p-4">
                                    <h3 class="mb-2 font-bold text-cyan">{*group}</h3>
                                    <p class="text-sm leading-relaxed">{*items}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </Reveal>
    }
}
