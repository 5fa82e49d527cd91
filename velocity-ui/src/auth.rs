//! Simulated Authentication
//!
//! There is no account system behind the site yet. The sign-in and
//! account-creation forms show a pending state for a fixed delay and then
//! return to the landing view, whatever was typed.

use gloo_timers::callback::Timeout;
use leptos::*;

/// How long the fake request "takes"
pub const SIMULATED_AUTH_DELAY_MS: u32 = 1500;

/// What `/signup` renders
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SignupMode {
    /// Lead capture into the `waitlist` table
    #[default]
    Waitlist,
    /// Simulated account creation
    Account,
}

impl SignupMode {
    /// `VELOCITY_SIGNUP_MODE` at build time
    pub fn from_build_env() -> Self {
        Self::parse(option_env!("VELOCITY_SIGNUP_MODE"))
    }

    pub fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("account") => SignupMode::Account,
            _ => SignupMode::Waitlist,
        }
    }
}

/// Pending flag for one simulated auth form
#[derive(Clone, Copy)]
pub struct SimulatedAuth {
    pending: RwSignal<bool>,
}

impl SimulatedAuth {
    pub fn new() -> Self {
        Self {
            pending: create_rw_signal(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Enter the pending state. Returns `false` if a submit is already running.
    pub fn begin(&self) -> bool {
        if self.pending.get_untracked() {
            return false;
        }
        self.pending.set(true);
        true
    }

    pub fn finish(&self) {
        self.pending.set(false);
    }

    /// Begin, wait out the delay, finish, then run `then`
    pub fn submit(&self, then: impl FnOnce() + 'static) {
        if !self.begin() {
            return;
        }
        let auth = *self;
        Timeout::new(SIMULATED_AUTH_DELAY_MS, move || {
            auth.finish();
            then();
        })
        .forget();
    }
}

impl Default for SimulatedAuth {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_mode_parse() {
        assert_eq!(SignupMode::parse(None), SignupMode::Waitlist);
        assert_eq!(SignupMode::parse(Some("waitlist")), SignupMode::Waitlist);
        assert_eq!(SignupMode::parse(Some(" Account ")), SignupMode::Account);
        assert_eq!(SignupMode::parse(Some("other")), SignupMode::Waitlist);
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let runtime = create_runtime();

        let auth = SimulatedAuth::new();
        assert!(!auth.is_pending());
        assert!(auth.begin());
        assert!(auth.is_pending());
        assert!(!auth.begin());
        auth.finish();
        assert!(!auth.is_pending());

        runtime.dispose();
    }
}
