//! Session Identifier
//!
//! A random token that groups the analytics events of one browser tab.
//! Not a security token: the randomness is `Math.random`, not a CSPRNG.

use crate::platform::{KeyValueStore, SESSION_ID_KEY};

/// Render a fraction in `[0, 1)` the way `Number.prototype.toString(36)`
/// does and keep the digits after `0.` (at most 13 of them).
fn base36_fraction(mut fraction: f64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut out = String::with_capacity(13);
    while out.len() < 13 && fraction > 0.0 {
        fraction *= 36.0;
        let digit = fraction.floor();
        out.push(DIGITS[digit as usize % 36] as char);
        fraction -= digit;
    }
    out
}

/// Build an identifier from two random fractions
pub fn generate_session_id(mut random: impl FnMut() -> f64) -> String {
    let mut id = base36_fraction(random());
    id.push_str(&base36_fraction(random()));
    id
}

/// `Math.random` in the browser
pub fn browser_random() -> f64 {
    js_sys::Math::random()
}

/// Hands out the tab's session identifier, creating it on first use
pub struct SessionIdProvider<S> {
    store: Option<S>,
    random: fn() -> f64,
}

impl<S: KeyValueStore> SessionIdProvider<S> {
    /// `store` is `None` when tab-scoped storage is unavailable
    pub fn new(store: Option<S>, random: fn() -> f64) -> Self {
        Self { store, random }
    }

    /// Stable for the lifetime of the tab when storage works. Without
    /// storage every call yields a fresh identifier.
    pub fn get(&self) -> String {
        let Some(store) = &self.store else {
            return generate_session_id(self.random);
        };

        if let Some(existing) = store.get(SESSION_ID_KEY).filter(|s| !s.is_empty()) {
            return existing;
        }

        let id = generate_session_id(self.random);
        if !store.set(SESSION_ID_KEY, &id) {
            tracing::debug!("Session storage refused write, session id will not persist");
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryStore;
    use std::cell::Cell;

    thread_local! {
        static SEED: Cell<u64> = Cell::new(1);
    }

    fn counting_random() -> f64 {
        SEED.with(|seed| {
            let n = seed.get();
            seed.set(n + 1);
            (n as f64 * 0.137).fract()
        })
    }

    #[test]
    fn test_base36_fraction() {
        assert_eq!(base36_fraction(0.5), "i");
        assert_eq!(base36_fraction(0.0), "");
        assert!(base36_fraction(0.123456789).len() <= 13);
        assert!(base36_fraction(0.987654321)
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_generate_concatenates_two_parts() {
        let mut values = vec![0.5, 0.25].into_iter();
        let id = generate_session_id(|| values.next().unwrap_or(0.0));
        assert_eq!(id, "i9");
    }

    #[test]
    fn test_same_id_within_tab() {
        let provider = SessionIdProvider::new(Some(MemoryStore::new()), counting_random);
        let first = provider.get();
        assert!(!first.is_empty());
        for _ in 0..5 {
            assert_eq!(provider.get(), first);
        }
    }

    #[test]
    fn test_existing_id_is_reused() {
        let store = MemoryStore::new().with(SESSION_ID_KEY, "abc123");
        let provider = SessionIdProvider::new(Some(store), counting_random);
        assert_eq!(provider.get(), "abc123");
    }

    #[test]
    fn test_fails_open_without_storage() {
        let provider = SessionIdProvider::<MemoryStore>::new(None, counting_random);
        let a = provider.get();
        let b = provider.get();
        assert!(!a.is_empty());
        assert_ne!(a, b);

        let provider = SessionIdProvider::new(Some(MemoryStore::read_only()), counting_random);
        assert_ne!(provider.get(), provider.get());
    }
}
