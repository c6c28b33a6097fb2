use leptos::prelude::*;

use super::{DemoOverlay, Theme, ThemeContext};

const SECTIONS: [(&str, &str); 4] = [
    ("#about", "about"),
    ("#skills", "skills"),
    ("#projects", "projects"),
    ("#contact", "contact"),
];

/// Fixed top nav with smooth-scroll anchors and the theme toggle. The anchor
/// links hide while a demo modal is open so the overlay owns the screen.
#[component]
pub fn Header() -> impl IntoView {
    let overlay = expect_context::<DemoOverlay>();
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();

    view! {
        <header class="sticky top-0 z-40 shadow-lg backdrop-blur bg-background/80">
            <div class="mx-auto flex max-w-6xl items-center justify-between px-4 py-4 sm:px-6 lg:px-8">
                <a href="#top" class="text-xl font-bold">
                    <span class="text-cyan">"ari"</span>
                    <span class="text-muted">"@"</span>
                    <span class="text-purple">"voss.dev"</span>
                    <span class="text-green">" ~"</span>
                </a>
                <nav class="flex items-center gap-4">
                    {move || {
                        // Demo open: nav links step aside, toggle stays.
                        if overlay.0.get() {
                            None
                        } else {
                            Some(
                                SECTIONS
                                    .iter()
                                    .map(|(href, label)| {
                                        view! {
                                            <a
                                                href=*href
                                                class="text-sm text-muted hover:text-cyan transition-colors"
                                            >
                                                <span class="text-cyan">"./"</span>
                                                {*label}
                                            </a>
                                        }
                                    })
                                    .collect_view(),
                            )
                        }
                    }}
                    <button
                        class="rounded-md border border-muted/30 px-2 py-1 text-sm hover:border-cyan/50"
                        aria-label="Toggle color theme"
                        on:click=move |_| {
                            let next = match theme.get_untracked() {
                                Theme::Dark => Theme::Light,
                                Theme::Light => Theme::Dark,
                            };
                            set_theme.set(next);
                        }
                    >
                        {move || {
                            match theme.get() {
                                Theme::Dark => "☾",
                                Theme::Light => "☀",
                            }
                        }}
                    </button>
                </nav>
            </div>
        </header>
    }
}
