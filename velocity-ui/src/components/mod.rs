//! UI Components
//!
//! Site chrome and the reusable content cards.

pub mod cards;
pub mod footer;
pub mod header;
pub mod loading;

pub use cards::{ComparisonRowView, FeatureCard, PricingCard};
pub use footer::Footer;
pub use header::Header;
pub use loading::InlineLoading;
