//! Remote Store Access

pub mod client;

pub use client::{
    RemoteStore, StoreError, SupabaseClient, SupabaseConfig, ANALYTICS_EVENTS_TABLE,
    WAITLIST_TABLE,
};
