use leptos::{html, prelude::*};

use crate::visibility::GateConfig;
#[cfg(feature = "hydrate")]
use crate::visibility::VisibilityLatch;

#[cfg(feature = "hydrate")]
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

/// Wire an intersection observer to `target` and return the gated visibility
/// signal. With `trigger_once` (the default) the signal latches on the first
/// intersection and the observation is stopped so no further callbacks fire.
/// Intersection is computed against `config.root`, or the browser viewport
/// when no root is given.
///
/// Server-side (and for a node that never attaches) the signal simply stays
/// `false`; callers must tolerate content staying hidden.
pub fn use_visibility(target: NodeRef<html::Div>, config: GateConfig) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let latch = StoredValue::new(VisibilityLatch::new(config.trigger_once));
        let release = StoredValue::new_local(None::<Box<dyn Fn()>>);

        let on_entries = move |entries: Vec<web_sys::IntersectionObserverEntry>,
                               _: web_sys::IntersectionObserver| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            latch.update_value(|latch| {
                let now = latch.observe_and_release(intersecting, || {
                    // Latched forever; drop the subscription.
                    release.update_value(|stop| {
                        if let Some(stop) = stop.take() {
                            stop();
                        }
                    });
                });
                set_visible.set(now);
            });
        };
        let options = UseIntersectionObserverOptions::default()
            .thresholds(vec![config.threshold])
            .root_margin(config.root_margin.clone());

        let stop: Box<dyn Fn()> = match config.root {
            Some(root) => {
                let UseIntersectionObserverReturn { stop, .. } =
                    use_intersection_observer_with_options(target, on_entries, options.root(Some(root)));
                Box::new(stop)
            }
            None => {
                let UseIntersectionObserverReturn { stop, .. } =
                    use_intersection_observer_with_options(target, on_entries, options);
                Box::new(stop)
            }
        };
        release.set_value(Some(stop));
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (target, config, set_visible);

    visible
}

/// One-shot viewport gate around a section: children render hidden and
/// animate in (`.section-content` -> `.is-visible`) once the wrapper scrolls
/// into view. `on_visible` fires on the first reveal and is the hook for
/// deferred work like image warm-up.
#[component]
pub fn Reveal(
    #[prop(optional, into)] config: Option<GateConfig>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] on_visible: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let target = NodeRef::<html::Div>::new();
    let visible = use_visibility(target, config);

    if let Some(on_visible) = on_visible {
        Effect::watch(
            move || visible.get(),
            move |now, prev, _| {
                let was = prev.copied().unwrap_or(false);
                if *now && !was {
                    on_visible.run(());
                }
            },
            false,
        );
    }

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if visible.get() { " is-visible" } else { "" };
                format!("section-content{state} {class}")
            }
        >
            {children()}
        </div>
    }
}
