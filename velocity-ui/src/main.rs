//! Velocity Logic Site
//!
//! Marketing site and lead-capture funnel built with Leptos (WASM).
//!
//! # Features
//!
//! - Landing, comparison, login and signup views with client-side routing
//! - Light/dark theme persisted in `localStorage`
//! - Anonymous analytics events and waitlist entries written to Supabase
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Browser APIs sit behind the traits in `platform`, and the
//! remote store behind `api::RemoteStore`, so the logic runs in native tests.

use leptos::*;

mod analytics;
mod api;
mod app;
mod auth;
mod components;
mod content;
mod pages;
mod platform;
mod routing;
mod state;
mod waitlist;

#[cfg(test)]
mod testing;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
