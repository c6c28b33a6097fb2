use std::sync::{Arc, Mutex};
use std::time::Duration;

use leptos::{either::*, prelude::*};

use super::storage::DeviceFlags;
use crate::demo::{DemoSession, SessionState, DEFAULT_TIME_BUDGET_SECS};
use crate::projects::DemoEmbed;

/// Modal hosting one timed, single-use playthrough of an embedded demo.
///
/// The session state machine lives in [`crate::demo`]; this component owns
/// the 1-second interval and mirrors the machine into signals for rendering.
/// The interval is cancelled on every exit path: expiry, close, and unmount.
#[component]
pub fn DemoModal(
    /// Project title, doubling as the demo identifier / persistence key.
    title: String,
    embed: DemoEmbed,
    #[prop(default = DEFAULT_TIME_BUDGET_SECS)] time_budget_secs: u32,
    on_close: Callback<()>,
) -> impl IntoView {
    let session = StoredValue::new(Arc::new(Mutex::new(DemoSession::new(
        title.clone(),
        time_budget_secs,
        DeviceFlags,
    ))));
    let (state, set_state) = signal(SessionState::Closed);
    let (remaining, set_remaining) = signal(time_budget_secs);
    let ticker = StoredValue::new_local(None::<IntervalHandle>);

    let sync = move || {
        session.with_value(|session| {
            let session = session.lock().expect("should be able to lock demo session");
            set_state.set(session.state());
            set_remaining.set(session.time_remaining());
        });
    };

    let stop_ticker = move || {
        ticker.update_value(|handle| {
            if let Some(handle) = handle.take() {
                handle.clear();
            }
        });
    };

    // Resolve the persisted played flag once the modal is on the client.
    Effect::new(move |_| {
        session.with_value(|session| {
            session
                .lock()
                .expect("should be able to lock demo session")
                .open();
        });
        sync();
    });

    let handle_start = move |_| {
        let started = session.with_value(|session| {
            session
                .lock()
                .expect("should be able to lock demo session")
                .start()
        });
        sync();
        if !started {
            return;
        }
        let tick = move || {
            let now = session.with_value(|session| {
                session
                    .lock()
                    .expect("should be able to lock demo session")
                    .tick()
            });
            sync();
            if now == SessionState::Expired {
                stop_ticker();
            }
        };
        match set_interval_with_handle(tick, Duration::from_secs(1)) {
            Ok(handle) => ticker.set_value(Some(handle)),
            Err(err) => log::warn!("countdown interval could not be scheduled: {err:?}"),
        }
    };

    let handle_close = move |_| {
        stop_ticker();
        session.with_value(|session| {
            session
                .lock()
                .expect("should be able to lock demo session")
                .close();
        });
        on_close.run(());
    };

    // Modal torn down externally: the interval must not outlive us.
    on_cleanup(stop_ticker);

    let fallback_url = embed.fallback_url.clone();
    let game_url = embed.game_url.clone();
    let heading = title.clone();

    // The iframe mounts once on start and stays mounted through expiry (only
    // dimmed and made inert), so the embed is never reloaded mid-session.
    let show_frame = Memo::new(move |_| {
        matches!(
            state.get(),
            SessionState::Running | SessionState::Expired
        )
    });
    let expired = Memo::new(move |_| state.get() == SessionState::Expired);

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-background/90 p-4">
            <div class="w-full max-w-3xl rounded-lg border border-muted/30 bg-brightBlack/40 shadow-2xl">
                <div class="flex items-center justify-between border-b border-muted/30 px-4 py-3">
                    <h3 class="text-lg font-bold text-cyan">{heading}</h3>
                    <div class="flex items-center gap-4">
                        {move || {
                            if state.get() == SessionState::Running {
                                Some(
                                    view! {
                                        <span class="text-yellow font-bold tabular-nums">
                                            {move || format!("{}s", remaining.get())}
                                        </span>
                                    },
                                )
                            } else {
                                None
                            }
                        }}
                        <button
                            class="text-muted hover:text-white text-xl leading-none"
                            aria-label="Close demo"
                            on:click=handle_close
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <div class="relative aspect-video">
                    {move || {
                        show_frame
                            .get()
                            .then(|| {
                                view! {
                                    <iframe
                                        src=game_url.clone()
                                        title="Playable demo"
                                        class=move || {
                                            if expired.get() {
                                                "h-full w-full opacity-30 pointer-events-none"
                                            } else {
                                                "h-full w-full"
                                            }
                                        }
                                    ></iframe>
                                }
                            })
                    }}
                    {move || {
                        match state.get() {
                            SessionState::Closed | SessionState::Running => None,
                            SessionState::Idle => {
                                Some(
                                    EitherOf3::A(
                                        view! {
                                            <div class="flex h-full flex-col items-center justify-center gap-4 p-8 text-center">
                                                <p class="text-lg">
                                                    "One playthrough, " {time_budget_secs}
                                                    " seconds on the clock."
                                                </p>
                                                <p class="text-sm text-muted">
                                                    "Starting uses up this device's only run - make it count."
                                                </p>
                                                <button
                                                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30"
                                                    on:click=handle_start
                                                >
                                                    "▶ Start the demo"
                                                </button>
                                            </div>
                                        },
                                    ),
                                )
                            }
                            SessionState::Locked => {
                                Some(
                                    EitherOf3::B(
                                        view! {
                                            <div class="flex h-full flex-col items-center justify-center gap-4 p-8 text-center">
                                                <p class="text-lg">
                                                    "This device already had its playthrough."
                                                </p>
                                                <p class="text-sm text-muted">
                                                    "The preview is once per device, but the full game is a click away."
                                                </p>
                                                <a
                                                    href=fallback_url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="bg-purple/20 hover:bg-purple/30 text-purple px-6 py-3 rounded-md font-medium border border-purple/30"
                                                >
                                                    "Play the full version ↗"
                                                </a>
                                            </div>
                                        },
                                    ),
                                )
                            }
                            SessionState::Expired => {
                                Some(
                                    EitherOf3::C(
                                        view! {
                                            <div class="absolute inset-0 flex flex-col items-center justify-center gap-4 bg-background/80 p-8 text-center">
                                                <p class="text-xl font-bold">"Time's up!"</p>
                                                <p class="text-sm text-muted">
                                                    "Hope that was a taste - the full game has no timer."
                                                </p>
                                                <a
                                                    href=fallback_url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30"
                                                >
                                                    "Keep playing ↗"
                                                </a>
                                            </div>
                                        },
                                    ),
                                )
                            }
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
