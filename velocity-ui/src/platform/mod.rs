//! Browser Platform
//!
//! Everything that touches `window` / `document` lives behind the traits in
//! this module. The browser implementations are used by the mounted app;
//! tests substitute in-memory ones.

pub mod storage;

pub use storage::{BrowserStorage, KeyValueStore, SESSION_ID_KEY, THEME_KEY};

#[cfg(test)]
pub use storage::MemoryStore;

use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Where the user currently is
pub trait PageLocation {
    /// Path component of the current URL
    fn pathname(&self) -> String;
    /// `document.referrer`, empty when there is none
    fn referrer(&self) -> String;
}

/// Scroll control over the document
pub trait Viewport {
    /// Jump to the top of the page immediately
    fn scroll_to_top(&self);
    /// Smooth-scroll to the element with the given id.
    /// Returns `false` when no such element is attached.
    fn scroll_to_element(&self, id: &str) -> bool;
}

/// Reads location data from the live `window`
#[derive(Clone, Copy, Default)]
pub struct BrowserLocation;

impl PageLocation for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn referrer(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .map(|d| d.referrer())
            .unwrap_or_default()
    }
}

/// Scrolls the live document
#[derive(Clone, Copy, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id));

        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => false,
        }
    }
}

/// OS-level color scheme signal, `None` when `matchMedia` is unavailable
pub fn system_prefers_dark() -> Option<bool> {
    let query = web_sys::window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()??;
    Some(query.matches())
}

/// Current vertical scroll offset in pixels
pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Blocking user-facing notification
pub fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Toggle the theme class on the `<html>` element
pub fn set_root_class(active: &str, inactive: &[&str]) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());

    if let Some(root) = root {
        let classes = root.class_list();
        for class in inactive {
            let _ = classes.remove_1(class);
        }
        let _ = classes.add_1(active);
    }
}
