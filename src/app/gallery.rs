use leptos::prelude::*;

use super::demo_modal::DemoModal;
use super::reveal::Reveal;
use super::DemoOverlay;
use crate::projects::{DemoEmbed, Project, PROJECTS};

/// Project gallery section. The wrapping visibility gate does double duty:
/// it drives the entrance animation and, on first reveal, warms the project
/// images so the cards pop in with their art already cached.
#[component]
pub fn Gallery() -> impl IntoView {
    let overlay = expect_context::<DemoOverlay>();
    let (open_demo, set_open_demo) = signal(None::<(String, DemoEmbed)>);

    let warm_images = Callback::new(move |_: ()| {
        #[cfg(feature = "hydrate")]
        for project in PROJECTS.iter() {
            if let Ok(img) = web_sys::HtmlImageElement::new() {
                img.set_src(&project.image);
            }
        }
    });

    let open = Callback::new(move |(title, embed): (String, DemoEmbed)| {
        set_open_demo.set(Some((title, embed)));
        overlay.0.set(true);
    });

    let close = Callback::new(move |_: ()| {
        set_open_demo.set(None);
        overlay.0.set(false);
    });

    view! {
        <Reveal on_visible=warm_images>
            <section id="projects" class="py-16">
                <h2 class="text-2xl font-bold mb-8">
                    <span class="text-muted">"$ "</span>
                    "ls ~/projects"
                </h2>
                <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! { <ProjectCard project=project.clone() on_play=open /> }
                        })
                        .collect_view()}
                </div>
            </section>
        </Reveal>
        {move || {
            open_demo
                .get()
                .map(|(title, embed)| {
                    view! { <DemoModal title=title embed=embed on_close=close /> }
                })
        }}
    }
}

#[component]
fn ProjectCard(project: Project, on_play: Callback<(String, DemoEmbed)>) -> impl IntoView {
    let Project {
        title,
        blurb,
        tags,
        image,
        repo,
        demo,
    } = project;
    let play_title = title.clone();

    view! {
        <article class="flex flex-col overflow-hidden rounded-lg border border-muted/30 bg-brightBlack/30 transition-transform hover:-translate-y-1">
            <img src=image alt=title.clone() loading="lazy" class="aspect-video w-full object-cover" />
            <div class="flex flex-1 flex-col gap-3 p-4">
                <h3 class="text-lg font-bold text-cyan">{title}</h3>
                <p class="flex-1 text-sm leading-relaxed">{blurb}</p>
                <div class="flex flex-wrap gap-2">
                    {tags
                        .into_iter()
                        .map(|tag| {
                            view! {
                                <span class="rounded-full bg-purple/10 px-2 py-0.5 text-xs text-purple">
                                    {tag}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3 pt-2">
                    {demo
                        .map(|embed| {
                            view! {
                                <button
                                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan rounded-md border border-cyan/30 px-4 py-2 text-sm font-medium"
                                    on:click=move |_| on_play.run((play_title.clone(), embed.clone()))
                                >
                                    "▶ Play demo"
                                </button>
                            }
                        })}
                    {repo
                        .map(|repo| {
                            view! {
                                <a
                                    href=repo
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm text-muted hover:text-white"
                                >
                                    <i class="devicon-github-plain"></i>
                                    " source"
                                </a>
                            }
                        })}
                </div>
            </div>
        </article>
    }
}
