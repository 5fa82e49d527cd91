//! Theme State
//!
//! Light/dark preference. Resolved once at startup (stored value, then the
//! OS color scheme, then dark), flipped only by the user, and written back to
//! durable storage plus the `<html>` class list on every change.

use leptos::*;
use std::rc::Rc;

use crate::platform::{self, KeyValueStore, THEME_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored preference wins, then the OS signal, then dark
pub fn resolve_initial_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    match system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) => Theme::Light,
        None => Theme::Dark,
    }
}

/// Reflects the active theme somewhere CSS can see it
pub trait ThemeMarker {
    fn apply(&self, theme: Theme);
}

/// Sets `light` / `dark` on the document root element
pub struct DocumentRootMarker;

impl ThemeMarker for DocumentRootMarker {
    fn apply(&self, theme: Theme) {
        platform::set_root_class(theme.as_str(), &["light", "dark"]);
    }
}

/// Where theme changes are written
pub struct ThemePersistence {
    store: Option<Rc<dyn KeyValueStore>>,
    marker: Rc<dyn ThemeMarker>,
}

impl ThemePersistence {
    pub fn new(store: Option<Rc<dyn KeyValueStore>>, marker: Rc<dyn ThemeMarker>) -> Self {
        Self { store, marker }
    }

    /// `localStorage` and the live document
    pub fn browser() -> Self {
        let store = platform::BrowserStorage::local().map(|s| Rc::new(s) as Rc<dyn KeyValueStore>);
        Self::new(store, Rc::new(DocumentRootMarker))
    }

    fn stored(&self) -> Option<String> {
        self.store.as_ref()?.get(THEME_KEY)
    }

    fn commit(&self, theme: Theme) {
        self.marker.apply(theme);
        if let Some(store) = &self.store {
            if !store.set(THEME_KEY, theme.as_str()) {
                tracing::warn!(theme = theme.as_str(), "Failed to persist theme preference");
            }
        }
    }
}

/// Handle to the site-wide theme. Created once by the root component.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
    persistence: StoredValue<Rc<ThemePersistence>>,
}

impl ThemeContext {
    pub fn new(persistence: ThemePersistence, system_prefers_dark: Option<bool>) -> Self {
        let initial = resolve_initial_theme(persistence.stored().as_deref(), system_prefers_dark);
        persistence.commit(initial);

        Self {
            theme: create_rw_signal(initial),
            persistence: store_value(Rc::new(persistence)),
        }
    }

    /// Reactive read
    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.get() == Theme::Dark
    }

    /// Always flips, then persists and applies the new value
    pub fn toggle(&self) {
        let next = self.theme.get_untracked().toggled();
        self.theme.set(next);
        self.persistence.with_value(|p| p.commit(next));
    }
}

/// Create the theme state for the live browser and provide it to descendants
pub fn provide_theme() -> ThemeContext {
    let theme = ThemeContext::new(ThemePersistence::browser(), platform::system_prefers_dark());
    provide_context(theme);
    theme
}

/// Theme from context. Panics when called outside the root component's tree.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
        .expect("use_theme must be called inside the tree created by App (ThemeContext not provided)")
}
