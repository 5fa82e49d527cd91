//! In-memory doubles for the browser and the remote store

use async_trait::async_trait;
use futures::executor::LocalPool;
use futures::task::LocalSpawnExt;
use serde_json::Value;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::analytics::Analytics;
use crate::api::{RemoteStore, StoreError};
use crate::platform::{KeyValueStore, MemoryStore, PageLocation, Viewport};

/// Records inserted rows; can be switched into a failing mode
#[derive(Default)]
pub struct RecordingStore {
    inserts: RefCell<Vec<(String, Value)>>,
    failure: RefCell<Option<StoreError>>,
    attempts: Cell<usize>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every following insert fails with `error`
    pub fn fail_with(&self, error: StoreError) {
        *self.failure.borrow_mut() = Some(error);
    }

    /// Back to accepting inserts
    pub fn recover(&self) {
        *self.failure.borrow_mut() = None;
    }

    /// Insert calls made, successful or not
    pub fn attempts(&self) -> usize {
        self.attempts.get()
    }

    /// Rows stored in `table`, in insertion order
    pub fn rows(&self, table: &str) -> Vec<Value> {
        self.inserts
            .borrow()
            .iter()
            .filter(|(t, _)| t == table)
            .flat_map(|(_, rows)| match rows {
                Value::Array(items) => items.clone(),
                other => vec![other.clone()],
            })
            .collect()
    }
}

#[async_trait(?Send)]
impl RemoteStore for RecordingStore {
    async fn insert(&self, table: &str, rows: Value) -> Result<(), StoreError> {
        self.attempts.set(self.attempts.get() + 1);
        if let Some(error) = self.failure.borrow().clone() {
            return Err(error);
        }
        self.inserts.borrow_mut().push((table.to_string(), rows));
        Ok(())
    }
}

/// Location whose path the test controls
pub struct FixedLocation {
    path: RefCell<String>,
    referrer: RefCell<String>,
}

impl FixedLocation {
    pub fn new(path: &str) -> Self {
        Self {
            path: RefCell::new(path.to_string()),
            referrer: RefCell::new(String::new()),
        }
    }

    pub fn set_path(&self, path: &str) {
        *self.path.borrow_mut() = path.to_string();
    }

    pub fn set_referrer(&self, referrer: &str) {
        *self.referrer.borrow_mut() = referrer.to_string();
    }
}

impl PageLocation for FixedLocation {
    fn pathname(&self) -> String {
        self.path.borrow().clone()
    }

    fn referrer(&self) -> String {
        self.referrer.borrow().clone()
    }
}

/// Viewport that records scroll requests against a set of attached ids
#[derive(Default)]
pub struct RecordingViewport {
    attached: RefCell<HashSet<String>>,
    top_resets: Cell<usize>,
    scrolled_to: RefCell<Vec<String>>,
}

impl RecordingViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&self, id: &str) {
        self.attached.borrow_mut().insert(id.to_string());
    }

    pub fn detach_all(&self) {
        self.attached.borrow_mut().clear();
    }

    pub fn top_resets(&self) -> usize {
        self.top_resets.get()
    }

    pub fn scrolled_to(&self) -> Vec<String> {
        self.scrolled_to.borrow().clone()
    }
}

impl Viewport for RecordingViewport {
    fn scroll_to_top(&self) {
        self.top_resets.set(self.top_resets.get() + 1);
    }

    fn scroll_to_element(&self, id: &str) -> bool {
        if self.attached.borrow().contains(id) {
            self.scrolled_to.borrow_mut().push(id.to_string());
            true
        } else {
            false
        }
    }
}

thread_local! {
    static COUNTER: Cell<u64> = Cell::new(1);
}

/// Deterministic stand-in for `Math.random`
pub fn seeded_random() -> f64 {
    COUNTER.with(|c| {
        let n = c.get();
        c.set(n + 1);
        (n as f64 * 0.618_033_988_7).fract()
    })
}

/// Analytics sink whose deliveries queue on a local executor
pub struct AnalyticsHarness {
    pub analytics: Analytics,
    pub store: Rc<RecordingStore>,
    pub location: Rc<FixedLocation>,
    pool: RefCell<LocalPool>,
}

impl AnalyticsHarness {
    /// Drive every queued delivery to completion
    pub fn run(&self) {
        self.pool.borrow_mut().run();
    }
}

pub fn analytics_harness() -> AnalyticsHarness {
    let store = Rc::new(RecordingStore::new());
    let location = Rc::new(FixedLocation::new("/"));
    let pool = LocalPool::new();
    let spawner = pool.spawner();

    let session_store: Rc<dyn KeyValueStore> = Rc::new(MemoryStore::new());
    let analytics = Analytics::new(
        store.clone(),
        location.clone(),
        Some(session_store),
        seeded_random,
        move |delivery| {
            spawner
                .spawn_local(delivery)
                .expect("local pool accepts tasks");
        },
    );

    AnalyticsHarness {
        analytics,
        store,
        location,
        pool: RefCell::new(pool),
    }
}
