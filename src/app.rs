mod about;
mod contact;
mod demo_modal;
mod footer;
mod gallery;
mod header;
mod hero;
mod reveal;
mod skills;
mod storage;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use about::About;
use contact::Contact;
use footer::Footer;
use gallery::Gallery;
use header::Header;
use hero::Hero;
use skills::Skills;

/// Process-wide UI flag: a demo modal is open, so the fixed nav should get
/// out of the way. Provided once at app start, mutated only by the gallery's
/// open/close actions.
#[derive(Clone, Copy)]
pub struct DemoOverlay(pub RwSignal<bool>);

/// Color theme preference, persisted per device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Signal<Theme>,
    pub set_theme: WriteSignal<Theme>,
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(DemoOverlay(RwSignal::new(false)));

    #[cfg(feature = "hydrate")]
    let (theme, set_theme, _) = use_local_storage::<Theme, FromToStringCodec>("theme");
    #[cfg(not(feature = "hydrate"))]
    let (theme, set_theme) = {
        let (theme, set_theme) = signal(Theme::default());
        (Signal::from(theme), set_theme)
    };
    provide_context(ThemeContext { theme, set_theme });

    view! {
        // sets the document title
        <Title formatter=|title| format!("Ari Voss - {title}") />

        <Router>
            <div
                id="top"
                class=move || {
                    if theme.get() == Theme::Light { "theme-light" } else { "" }
                }
            >
                <Header />
                <main class="flex flex-col flex-grow mx-auto w-full max-w-6xl px-4 sm:px-6 lg:px-8">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Creative Developer" />
        <Hero />
        <About />
        <Skills />
        <Gallery />
        <Contact />
        <Footer />
    }
}
