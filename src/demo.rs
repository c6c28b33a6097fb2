//! Demo session gating.
//!
//! A game project's embedded demo gets exactly one playthrough per device,
//! capped at a fixed time budget. The "already played" flag is persisted
//! through an injected [`FlagStore`] capability so the browser's localStorage
//! can be swapped for an in-memory map in tests. The state machine itself is
//! plain Rust; the modal, iframe, and 1-second interval live in
//! `app::demo_modal`.

use thiserror::Error;

/// Default playthrough budget in seconds.
pub const DEFAULT_TIME_BUDGET_SECS: u32 = 50;

/// Persistence key for a demo identifier (the project title).
pub fn played_key(identifier: &str) -> String {
    format!("demo-played-{identifier}")
}

#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("device storage is unavailable")]
    Unavailable,
    #[error("device storage rejected the write: {0}")]
    WriteFailed(String),
}

/// Key-value persistence surface for the played flag.
///
/// Values are the literal strings `"true"`/`"false"`; an absent key means
/// "not played". Implementations must not panic on storage failure - the
/// controller treats errors as "not played" (fail open) since this gates a
/// marketing demo, not an access-control boundary.
pub trait FlagStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Modal lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Modal not open (or already torn down).
    Closed,
    /// Modal open, demo not started, device has not played this demo yet.
    Idle,
    /// Modal open, but this device already consumed its playthrough.
    Locked,
    /// Countdown running, demo interactive.
    Running,
    /// Budget hit zero; demo stays mounted but dimmed and inert.
    Expired,
}

/// Single-use, time-budgeted demo session for one identifier.
///
/// Invariants:
/// - the persisted flag is monotonic: once a device starts a demo it can
///   never reach `Running` for that identifier again, and nothing here ever
///   clears the flag;
/// - `time_remaining` only decreases while `Running`, freezes at zero;
/// - closing resets the in-memory countdown but not the persisted flag.
pub struct DemoSession<S> {
    identifier: String,
    budget: u32,
    remaining: u32,
    state: SessionState,
    store: S,
}

impl<S: FlagStore> DemoSession<S> {
    pub fn new(identifier: impl Into<String>, budget: u32, store: S) -> Self {
        Self {
            identifier: identifier.into(),
            budget,
            remaining: budget,
            state: SessionState::Closed,
            store,
        }
    }

    /// Open the modal: resolve the persisted flag into `Idle` or `Locked`.
    /// No-op if the session is already open.
    pub fn open(&mut self) -> SessionState {
        if self.state != SessionState::Closed {
            return self.state;
        }
        self.state = if self.already_played() {
            SessionState::Locked
        } else {
            SessionState::Idle
        };
        self.state
    }

    /// Start the playthrough. Returns `false` (and changes nothing) unless
    /// the session is `Idle` - in particular, a `Locked` session refuses.
    ///
    /// Starting itself consumes the one allowed play: the flag is persisted
    /// before the first tick, so abandoning mid-run still counts.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        self.remaining = self.budget;
        let key = played_key(&self.identifier);
        if let Err(err) = self.store.set(&key, "true") {
            log::warn!("could not persist played flag for {:?}: {err}", self.identifier);
        }
        self.state = SessionState::Running;
        true
    }

    /// Deliver one 1-second tick. Only meaningful while `Running`; hitting
    /// zero transitions to `Expired` and freezes the countdown.
    pub fn tick(&mut self) -> SessionState {
        if self.state == SessionState::Running {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                self.state = SessionState::Expired;
            }
        }
        self.state
    }

    /// Close the modal from any state. The in-memory countdown resets so a
    /// reopen never resumes mid-run; the persisted flag is left alone, so a
    /// started-then-closed demo reopens as `Locked`.
    pub fn close(&mut self) {
        self.remaining = self.budget;
        self.state = SessionState::Closed;
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn time_remaining(&self) -> u32 {
        self.remaining
    }

    pub fn time_budget(&self) -> u32 {
        self.budget
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn is_expired(&self) -> bool {
        self.state == SessionState::Expired
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    fn already_played(&self) -> bool {
        match self.store.get(&played_key(&self.identifier)) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                // Fail open: a broken storage surface must never lock the
                // demo or crash the page.
                log::warn!(
                    "played flag unreadable for {:?}: {err} - treating as not played",
                    self.identifier
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::*;

    /// In-memory stand-in for the device storage surface. Shared via
    /// `Rc<RefCell<..>>` so tests can model several sessions on one device.
    #[derive(Default, Clone)]
    struct MemoryFlags(Rc<RefCell<HashMap<String, String>>>);

    impl FlagStore for MemoryFlags {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            Ok(self.0.borrow().get(key).cloned())
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.0.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Storage surface that always errors, to exercise the fail-open path.
    struct BrokenFlags;

    impl FlagStore for BrokenFlags {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Unavailable)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::WriteFailed("quota exceeded".to_string()))
        }
    }

    #[test]
    fn key_scheme_includes_identifier() {
        assert_eq!(played_key("NEON MEMORY"), "demo-played-NEON MEMORY");
    }

    #[test]
    fn open_resolves_flag_into_idle_or_locked() {
        let device = MemoryFlags::default();
        let mut session = DemoSession::new("Starfall", 50, device.clone());
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.open(), SessionState::Idle);

        let mut flagged = MemoryFlags::default();
        flagged.set("demo-played-Starfall", "true").unwrap();
        let mut session = DemoSession::new("Starfall", 50, flagged);
        assert_eq!(session.open(), SessionState::Locked);
    }

    #[test]
    fn start_persists_flag_before_first_tick() {
        let device = MemoryFlags::default();
        let mut session = DemoSession::new("Starfall", 50, device.clone());
        session.open();
        assert!(session.start());

        // Flag is already down even though no tick has elapsed.
        assert_eq!(
            device.get("demo-played-Starfall").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.time_remaining(), 50);
        assert!(session.is_active());
    }

    #[test]
    fn countdown_expires_exactly_at_budget() {
        let mut session = DemoSession::new("Starfall", 50, MemoryFlags::default());
        session.open();
        session.start();

        for _ in 0..49 {
            session.tick();
        }
        assert_eq!(session.time_remaining(), 1);
        assert!(!session.is_expired());

        assert_eq!(session.tick(), SessionState::Expired);
        assert_eq!(session.time_remaining(), 0);
        assert!(session.is_expired());
        assert!(!session.is_active());

        // Further ticks are frozen out.
        session.tick();
        session.tick();
        assert_eq!(session.time_remaining(), 0);
        assert_eq!(session.state(), SessionState::Expired);
    }

    #[test]
    fn closing_mid_run_locks_the_reopen() {
        let device = MemoryFlags::default();
        let mut session = DemoSession::new("Starfall", 50, device.clone());
        session.open();
        session.start();
        for _ in 0..20 {
            session.tick();
        }
        assert_eq!(session.time_remaining(), 30);

        session.close();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(session.time_remaining(), 50);
        assert!(!session.is_active());

        // Reopening never resumes the countdown - the play was consumed.
        let mut reopened = DemoSession::new("Starfall", 50, device);
        assert_eq!(reopened.open(), SessionState::Locked);
    }

    #[test]
    fn locked_session_refuses_start() {
        let mut flagged = MemoryFlags::default();
        flagged.set("demo-played-Starfall", "true").unwrap();
        let mut session = DemoSession::new("Starfall", 50, flagged);
        session.open();
        assert_eq!(session.state(), SessionState::Locked);

        assert!(!session.start());
        assert_eq!(session.state(), SessionState::Locked);
        assert_eq!(session.time_remaining(), 50);
    }

    #[test]
    fn flags_are_scoped_per_identifier() {
        let device = MemoryFlags::default();
        let mut first = DemoSession::new("Starfall", 50, device.clone());
        first.open();
        first.start();

        // A different demo on the same device is unaffected.
        let mut other = DemoSession::new("NEON MEMORY", 50, device);
        assert_eq!(other.open(), SessionState::Idle);
    }

    #[test]
    fn broken_storage_fails_open() {
        let mut session = DemoSession::new("Starfall", 50, BrokenFlags);
        assert_eq!(session.open(), SessionState::Idle);
        // The write also fails, but the run proceeds regardless.
        assert!(session.start());
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn full_single_playthrough_scenario() {
        let device = MemoryFlags::default();

        let mut session = DemoSession::new("NEON MEMORY", 50, device.clone());
        assert_eq!(session.open(), SessionState::Idle);
        assert!(session.start());
        assert_eq!(
            device.get("demo-played-NEON MEMORY").unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(session.time_remaining(), 50);

        for n in 1..=50 {
            session.tick();
            assert_eq!(session.time_remaining(), 50 - n);
        }
        assert_eq!(session.state(), SessionState::Expired);
        session.close();

        let mut reopened = DemoSession::new("NEON MEMORY", 50, device);
        assert_eq!(reopened.open(), SessionState::Locked);
        assert!(!reopened.start());
    }
}
