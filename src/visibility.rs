//! Viewport visibility gating.
//!
//! Sections of the page stay hidden until they scroll into view, then animate
//! in exactly once. The latch here is the whole decision: it consumes raw
//! intersection notifications and produces the boolean the rendering layer
//! keys CSS classes (and deferred work like image warm-up) off of.
//!
//! The latch itself never touches the DOM so it can be driven in plain unit
//! tests; the observer wiring lives in `app::reveal`.

use leptos::{html, prelude::NodeRef};

/// Observer configuration for a gated section.
///
/// `root_margin` is intentionally generous so the reveal fires slightly
/// before the element is literally on-screen.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// Fraction of the element that must be visible before the gate fires.
    pub threshold: f64,
    /// Margin around the observation root used when computing intersection.
    pub root_margin: String,
    /// Ancestor whose bounds act as the viewport. `None` (the default)
    /// intersects against the browser viewport.
    pub root: Option<NodeRef<html::Div>>,
    /// When true (the default), the first intersection latches permanently
    /// and observation can be released.
    pub trigger_once: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            threshold: 0.15,
            root_margin: "80px".to_string(),
            root: None,
            trigger_once: true,
        }
    }
}

/// One-shot (by default) visibility latch.
///
/// Feed it intersection notifications via [`observe`](Self::observe); read the
/// UI-facing value via [`visible`](Self::visible). With `trigger_once`, once
/// the element has been seen the value freezes at `true` no matter what later
/// notifications say.
#[derive(Debug, Clone)]
pub struct VisibilityLatch {
    trigger_once: bool,
    has_triggered: bool,
    is_intersecting: bool,
}

impl VisibilityLatch {
    pub fn new(trigger_once: bool) -> Self {
        Self {
            trigger_once,
            has_triggered: false,
            is_intersecting: false,
        }
    }

    /// Record one intersection notification and return the value the UI
    /// signal should take.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.trigger_once && self.has_triggered {
            // Frozen; later notifications are ignored.
            return true;
        }
        self.is_intersecting = intersecting;
        if intersecting {
            self.has_triggered = true;
        }
        self.visible()
    }

    /// Current UI-facing value. Starts out `false` and stays there forever if
    /// no notification ever arrives (e.g. the target node was never attached).
    pub fn visible(&self) -> bool {
        if self.trigger_once && self.has_triggered {
            true
        } else {
            self.is_intersecting
        }
    }

    /// Record one notification and invoke `release` on the exact call that
    /// settles the latch, so the caller can drop its observation hook. Once
    /// settled (or in live mode, ever) `release` is never invoked again.
    pub fn observe_and_release(&mut self, intersecting: bool, release: impl FnOnce()) -> bool {
        let was_settled = self.is_settled();
        self.observe(intersecting);
        if self.is_settled() && !was_settled {
            release();
        }
        self.visible()
    }

    pub fn has_triggered(&self) -> bool {
        self.has_triggered
    }

    /// True once nothing can change the value anymore, i.e. the observation
    /// may be released.
    pub fn is_settled(&self) -> bool {
        self.trigger_once && self.has_triggered
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn starts_hidden_until_observed() {
        // A target that never attaches produces no notifications at all.
        let latch = VisibilityLatch::new(true);
        assert!(!latch.visible());
        assert!(!latch.has_triggered());
        assert!(!latch.is_settled());
    }

    #[test]
    fn one_shot_latch_never_reverts() {
        let mut latch = VisibilityLatch::new(true);
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        assert!(latch.is_settled());

        // Scrolling back out must not hide the section again.
        assert!(latch.observe(false));
        assert!(latch.visible());
        assert!(latch.observe(true));
        assert!(latch.observe(false));
        assert!(latch.visible());
    }

    #[test]
    fn live_mode_tracks_latest_notification() {
        let mut latch = VisibilityLatch::new(false);
        assert!(latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.observe(true));
        // Live mode never settles, so observation stays subscribed.
        assert!(!latch.is_settled());
        assert!(latch.has_triggered());
    }

    #[test]
    fn default_config_is_one_shot_with_early_margin() {
        let config = GateConfig::default();
        assert!(config.trigger_once);
        assert!(config.threshold > 0.0 && config.threshold < 1.0);
        assert_eq!(config.root_margin, "80px");
        // No custom root means the browser viewport is the root.
        assert!(config.root.is_none());
    }

    #[test]
    fn settling_releases_the_observation_exactly_once() {
        let releases = Cell::new(0u32);
        let mut latch = VisibilityLatch::new(true);

        // Not yet in view: still subscribed.
        assert!(!latch.observe_and_release(false, || releases.set(releases.get() + 1)));
        assert_eq!(releases.get(), 0);

        // The settling notification drops the subscription.
        assert!(latch.observe_and_release(true, || releases.set(releases.get() + 1)));
        assert_eq!(releases.get(), 1);

        // Anything after the release is ignored and never re-releases.
        assert!(latch.observe_and_release(false, || releases.set(releases.get() + 1)));
        assert!(latch.observe_and_release(true, || releases.set(releases.get() + 1)));
        assert_eq!(releases.get(), 1);
        assert!(latch.visible());
    }

    #[test]
    fn live_mode_never_releases_the_observation() {
        let releases = Cell::new(0u32);
        let mut latch = VisibilityLatch::new(false);

        assert!(latch.observe_and_release(true, || releases.set(releases.get() + 1)));
        assert!(!latch.observe_and_release(false, || releases.set(releases.get() + 1)));
        assert!(latch.observe_and_release(true, || releases.set(releases.get() + 1)));
        assert_eq!(releases.get(), 0);
        assert!(!latch.is_settled());
    }
}
