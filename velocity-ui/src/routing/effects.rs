//! Navigation Side Effects
//!
//! Every route change resets the scroll position and records a page view.
//! The scroll reset happens before this returns; the page view is handed to
//! the analytics sink's detached dispatcher and never delays the reset.

use std::rc::Rc;

use crate::analytics::Analytics;
use crate::platform::Viewport;

#[derive(Clone)]
pub struct NavigationEffects {
    viewport: Rc<dyn Viewport>,
    analytics: Analytics,
}

impl NavigationEffects {
    pub fn new(viewport: Rc<dyn Viewport>, analytics: Analytics) -> Self {
        Self {
            viewport,
            analytics,
        }
    }

    pub fn on_route_change(&self, path: &str) {
        self.viewport.scroll_to_top();
        self.analytics.track_page_view(path);
    }
}
