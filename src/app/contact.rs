use leptos::{html, prelude::*};

use super::reveal::Reveal;

const CONTACT_ADDRESS: &str = "hello@arivoss.dev";

/// Percent-encode a mailto query component. Hand-off only happens in the
/// browser, where `encodeURIComponent` is the reference behavior; the server
/// render only ever sees empty form fields.
fn encode_component(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::encode_uri_component(raw).into()
    }
    #[cfg(not(feature = "hydrate"))]
    raw.to_string()
}

/// Controlled contact form. Submitting never talks to a server: the form
/// composes a `mailto:` link and hands delivery to the visitor's mail client.
#[component]
pub fn Contact() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (mailto, set_mailto) = signal(None::<String>);

    let compose = move |_| {
        let name = name_ref.get_untracked().map(|el| el.value()).unwrap_or_default();
        let subject = subject_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();
        let message = message_ref
            .get_untracked()
            .map(|el| el.value())
            .unwrap_or_default();

        let subject = if subject.is_empty() {
            format!("Hello from {name}")
        } else {
            subject
        };
        let body = if name.is_empty() {
            message
        } else {
            format!("{message}\n\n- {name}")
        };
        set_mailto.set(Some(format!(
            "mailto:{CONTACT_ADDRESS}?subject={}&body={}",
            encode_component(&subject),
            encode_component(&body),
        )));
    };

    view! {
        <Reveal>
            <section id="contact" class="py-16">
                <h2 class="text-2xl font-bold mb-8">
                    <span class="text-muted">"$ "</span>
                    "mail -s \"hi\" " {CONTACT_ADDRESS}
                </h2>
                <div class="mx-auto w-full max-w-2xl">
                    <form
                        class="flex flex-col gap-4"
                        on:submit=move |ev| {
                            ev.prevent_default();
                        }
                    >
                        <input
                            node_ref=name_ref
                            type="text"
                            placeholder="Your name"
                            on:input=compose
                            class="w-full rounded-md border border-muted/30 bg-background px-4 py-2 focus:outline-none focus:ring-2 focus:ring-cyan/50"
                        />
                        <input
                            node_ref=subject_ref
                            type="text"
                            placeholder="Subject"
                            on:input=compose
                            class="w-full rounded-md border border-muted/30 bg-background px-4 py-2 focus:outline-none focus:ring-2 focus:ring-cyan/50"
                        />
                        <textarea
                            node_ref=message_ref
                            rows=5
                            placeholder="What's on your mind?"
                            on:input=compose
                            class="w-full rounded-md border border-muted/30 bg-background px-4 py-2 focus:outline-none focus:ring-2 focus:ring-cyan/50"
                        ></textarea>
                        {move || {
                            match mailto.get() {
                                Some(href) => {
                                    view! {
                                        <a
                                            href=href
                                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan self-start rounded-md border border-cyan/30 px-6 py-3 font-medium"
                                        >
                                            "✉ Open in your mail client"
                                        </a>
                                    }
                                        .into_any()
                                }
                                None => {
                                    view! {
                                        <span class="self-start rounded-md border border-muted/30 px-6 py-3 text-muted">
                                            "✉ Write something first"
                                        </span>
                                    }
                                        .into_any()
                                }
                            }
                        }}
                    </form>
                </div>
            </section>
        </Reveal>
    }
}
