//! Analytics Sink
//!
//! Fire-and-forget event tracking into the `analytics_events` table.
//!
//! Everything that describes the event (page path, referrer, session id) is
//! captured synchronously when `track_event` is called. Delivery happens on a
//! detached future; failures are logged and counted, never returned to the
//! caller and never retried. Delivery is at-most-once and unordered.

pub mod event;
pub mod session;

pub use event::{event_data, AnalyticsEvent};
pub use session::{browser_random, generate_session_id, SessionIdProvider};

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use serde_json::{Map, Value};
use std::cell::Cell;
use std::rc::Rc;

use crate::api::{RemoteStore, ANALYTICS_EVENTS_TABLE};
use crate::platform::{BrowserLocation, BrowserStorage, KeyValueStore, PageLocation};

/// Event names used across the site
pub mod names {
    pub const PAGE_VIEW: &str = "page_view";
    pub const CTA_CLICK: &str = "cta_click";
    pub const PRICING_SELECT: &str = "pricing_select";
    pub const WAITLIST_SIGNUP: &str = "waitlist_signup";
}

/// Delivery counters kept by the sink
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    /// Events handed to the dispatcher
    pub dispatched: u64,
    /// Inserts the store acknowledged
    pub delivered: u64,
    /// Inserts that failed (logged and dropped)
    pub failed: u64,
}

type Dispatcher = Box<dyn Fn(LocalBoxFuture<'static, ()>)>;

struct Inner {
    store: Rc<dyn RemoteStore>,
    location: Rc<dyn PageLocation>,
    session: SessionIdProvider<Rc<dyn KeyValueStore>>,
    dispatch: Dispatcher,
    stats: Rc<Cell<SinkStats>>,
}

/// Handle to the analytics sink. Cheap to clone.
#[derive(Clone)]
pub struct Analytics {
    inner: Rc<Inner>,
}

impl Analytics {
    pub fn new(
        store: Rc<dyn RemoteStore>,
        location: Rc<dyn PageLocation>,
        session_store: Option<Rc<dyn KeyValueStore>>,
        random: fn() -> f64,
        dispatch: impl Fn(LocalBoxFuture<'static, ()>) + 'static,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                store,
                location,
                session: SessionIdProvider::new(session_store, random),
                dispatch: Box::new(dispatch),
                stats: Rc::new(Cell::new(SinkStats::default())),
            }),
        }
    }

    /// Sink wired to the live browser: `sessionStorage`, `window.location`
    /// and `spawn_local` for delivery
    pub fn browser(store: Rc<dyn RemoteStore>) -> Self {
        let session_store = BrowserStorage::session().map(|s| Rc::new(s) as Rc<dyn KeyValueStore>);
        if session_store.is_none() {
            tracing::warn!("sessionStorage unavailable, analytics sessions will not persist");
        }

        Self::new(
            store,
            Rc::new(BrowserLocation),
            session_store,
            browser_random,
            |delivery| wasm_bindgen_futures::spawn_local(delivery),
        )
    }

    /// Record an interaction. Returns immediately.
    pub fn track_event(&self, name: &str, data: Map<String, Value>) {
        let event = self.capture(name, data);
        self.dispatch(event);
    }

    /// `page_view` with the given path in the payload
    pub fn track_page_view(&self, path: &str) {
        self.track_event(names::PAGE_VIEW, event_data([("path", path)]));
    }

    /// `cta_click` for a named button
    pub fn track_cta(&self, button: &str) {
        self.track_event(names::CTA_CLICK, event_data([("button", button)]));
    }

    /// Current delivery counters
    pub fn stats(&self) -> SinkStats {
        self.inner.stats.get()
    }

    fn capture(&self, name: &str, data: Map<String, Value>) -> AnalyticsEvent {
        AnalyticsEvent {
            event_name: name.to_string(),
            event_data: data,
            page_path: self.inner.location.pathname(),
            session_id: self.inner.session.get(),
            referrer: self.inner.location.referrer(),
        }
    }

    fn dispatch(&self, event: AnalyticsEvent) {
        let store = Rc::clone(&self.inner.store);
        let stats = Rc::clone(&self.inner.stats);
        bump(&stats, |s| s.dispatched += 1);

        let delivery = async move {
            let rows = match serde_json::to_value([&event]) {
                Ok(rows) => rows,
                Err(e) => {
                    tracing::warn!(event = %event.event_name, error = %e, "Analytics error");
                    bump(&stats, |s| s.failed += 1);
                    return;
                }
            };

            match store.insert(ANALYTICS_EVENTS_TABLE, rows).await {
                Ok(()) => bump(&stats, |s| s.delivered += 1),
                Err(e) => {
                    tracing::warn!(event = %event.event_name, error = %e, "Error tracking event");
                    bump(&stats, |s| s.failed += 1);
                }
            }
        };

        (self.inner.dispatch)(delivery.boxed_local());
    }
}

fn bump(stats: &Cell<SinkStats>, f: impl FnOnce(&mut SinkStats)) {
    let mut current = stats.get();
    f(&mut current);
    stats.set(current);
}
