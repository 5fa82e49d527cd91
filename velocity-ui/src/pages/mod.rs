//! Pages
//!
//! Top-level page components for each route.

pub mod compare;
pub mod landing;
pub mod login;
pub mod signup;

pub use compare::Compare;
pub use landing::Landing;
pub use login::Login;
pub use signup::Signup;
