//! State Management
//!
//! Theme preference and the shared site services.

pub mod global;
pub mod theme;

pub use global::{provide_site_services, use_site, SiteServices};
pub use theme::{provide_theme, use_theme, Theme, ThemeContext};
