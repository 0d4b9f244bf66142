//! This crate contains the sign-up form components, its state and submit pipeline.

pub mod app;
#[cfg(feature = "web")]
pub use app::SignupPage;

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
