//! In-page Anchor Navigation
//!
//! "Features" / "Pricing" buttons live in the header, which is visible on
//! every route, but the sections only exist on the landing view. From another
//! route the target is parked here, the router navigates to `/`, and the
//! landing view reports back once it is attached to the document.

use std::cell::Cell;
use std::rc::Rc;

use super::{Route, Section};
use crate::platform::Viewport;

#[derive(Clone)]
pub struct AnchorNavigator {
    viewport: Rc<dyn Viewport>,
    pending: Rc<Cell<Option<Section>>>,
}

impl AnchorNavigator {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self {
            viewport,
            pending: Rc::new(Cell::new(None)),
        }
    }

    /// Scroll to `section`, navigating to the landing view first if needed
    pub fn go_to(&self, section: Section, current_path: &str, navigate: impl FnOnce(&str)) {
        if Route::from_path(current_path) == Route::Landing {
            self.pending.set(None);
            self.scroll(section);
        } else {
            self.pending.set(Some(section));
            navigate("/");
        }
    }

    /// Called by the landing view after its sections are in the document
    pub fn landing_mounted(&self) {
        if let Some(section) = self.pending.take() {
            self.scroll(section);
        }
    }

    pub fn pending(&self) -> Option<Section> {
        self.pending.get()
    }

    fn scroll(&self, section: Section) {
        if !self.viewport.scroll_to_element(section.element_id()) {
            tracing::debug!(section = section.element_id(), "Anchor target not in document");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingViewport;
    use std::cell::RefCell;

    fn navigator() -> (AnchorNavigator, Rc<RecordingViewport>) {
        let viewport = Rc::new(RecordingViewport::new());
        (AnchorNavigator::new(viewport.clone()), viewport)
    }

    #[test]
    fn test_on_landing_scrolls_immediately() {
        let (anchors, viewport) = navigator();
        viewport.attach("pricing");

        let navigated = RefCell::new(Vec::<String>::new());
        anchors.go_to(Section::Pricing, "/", |p| navigated.borrow_mut().push(p.to_string()));

        assert!(navigated.borrow().is_empty());
        assert_eq!(viewport.scrolled_to(), vec!["pricing"]);
        assert_eq!(anchors.pending(), None);
    }

    #[test]
    fn test_from_compare_waits_for_landing_mount() {
        let (anchors, viewport) = navigator();

        let navigated = RefCell::new(Vec::<String>::new());
        anchors.go_to(Section::Features, "/vs-jobber", |p| {
            navigated.borrow_mut().push(p.to_string())
        });

        assert_eq!(navigated.borrow().as_slice(), ["/"]);
        assert!(viewport.scrolled_to().is_empty());
        assert_eq!(anchors.pending(), Some(Section::Features));

        // Landing view finishes mounting
        viewport.attach("features");
        anchors.landing_mounted();

        assert_eq!(viewport.scrolled_to(), vec!["features"]);
        assert_eq!(anchors.pending(), None);

        // A later remount does not scroll again
        anchors.landing_mounted();
        assert_eq!(viewport.scrolled_to().len(), 1);
    }

    #[test]
    fn test_missing_target_is_dropped() {
        let (anchors, viewport) = navigator();
        anchors.go_to(Section::Pricing, "/login", |_| {});

        viewport.detach_all();
        anchors.landing_mounted();

        assert!(viewport.scrolled_to().is_empty());
        assert_eq!(anchors.pending(), None);
    }

    #[test]
    fn test_latest_request_wins() {
        let (anchors, viewport) = navigator();
        anchors.go_to(Section::Features, "/signup", |_| {});
        anchors.go_to(Section::Pricing, "/signup", |_| {});

        viewport.attach("features");
        viewport.attach("pricing");
        anchors.landing_mounted();

        assert_eq!(viewport.scrolled_to(), vec!["pricing"]);
    }
}
