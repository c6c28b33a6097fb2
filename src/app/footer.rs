use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let deployed = env!("BUILD_TIME").split('T').next().unwrap_or_default();

    view! {
        <footer class="border-t border-muted/30 py-8 text-center text-sm text-muted">
            <div class="mb-2 flex items-center justify-center gap-4">
                <a
                    href="https://github.com/arivoss"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-white text-xl"
                    aria-label="GitHub profile"
                >
                    <i class="devicon-github-plain"></i>
                </a>
                <a
                    href="https://linkedin.com/in/arivoss"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="hover:text-brightBlue text-xl"
                    aria-label="LinkedIn profile"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
            </div>
            <p>
                "Built with Rust + Leptos · deployed " {deployed}
            </p>
        </footer>
    }
}
