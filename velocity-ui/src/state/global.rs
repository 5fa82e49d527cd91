//! Site Services
//!
//! Long-lived handles shared by every view: the remote store, the analytics
//! sink and the navigation helpers. Built once in `App` and provided through
//! context.

use leptos::*;
use std::rc::Rc;

use crate::analytics::Analytics;
use crate::api::{RemoteStore, SupabaseClient, SupabaseConfig};
use crate::auth::SignupMode;
use crate::platform::{BrowserViewport, Viewport};
use crate::routing::{AnchorNavigator, NavigationEffects};

#[derive(Clone)]
pub struct SiteServices {
    pub store: Rc<dyn RemoteStore>,
    pub analytics: Analytics,
    pub anchors: AnchorNavigator,
    pub navigation: NavigationEffects,
    pub signup_mode: SignupMode,
}

impl SiteServices {
    pub fn new(
        store: Rc<dyn RemoteStore>,
        analytics: Analytics,
        viewport: Rc<dyn Viewport>,
        signup_mode: SignupMode,
    ) -> Self {
        Self {
            store,
            anchors: AnchorNavigator::new(viewport.clone()),
            navigation: NavigationEffects::new(viewport, analytics.clone()),
            analytics,
            signup_mode,
        }
    }

    /// Services wired to the live browser and the build-time store settings
    pub fn browser() -> Self {
        let config = SupabaseConfig::from_build_env();
        if config.is_placeholder() {
            tracing::warn!("Supabase is not configured, inserts will fail");
        }
        let store: Rc<dyn RemoteStore> = Rc::new(SupabaseClient::new(config));
        let analytics = Analytics::browser(store.clone());

        Self::new(
            store,
            analytics,
            Rc::new(BrowserViewport),
            SignupMode::from_build_env(),
        )
    }
}

/// Provide site services to the component tree
pub fn provide_site_services(services: SiteServices) {
    provide_context(services);
}

pub fn use_site() -> SiteServices {
    use_context::<SiteServices>().expect("SiteServices not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{analytics_harness, RecordingViewport};

    #[test]
    fn test_services_share_one_sink() {
        let runtime = create_runtime();

        let h = analytics_harness();
        let viewport = Rc::new(RecordingViewport::new());
        let services = SiteServices::new(
            h.store.clone(),
            h.analytics.clone(),
            viewport.clone(),
            SignupMode::Waitlist,
        );
        provide_site_services(services);

        let site = use_site();
        site.navigation.on_route_change("/vs-jobber");
        site.analytics.track_cta("compare_switch");
        h.run();

        assert_eq!(viewport.top_resets(), 1);
        assert_eq!(h.analytics.stats().delivered, 2);

        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "SiteServices not found")]
    fn test_missing_services_fail_fast() {
        let _runtime = create_runtime();
        let _ = use_site();
    }
}
