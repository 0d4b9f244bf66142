//! Services behind the sign-up form
//!
//! - **client**: HTTP implementation of the sign-up action
//! - **config**: endpoint and presentation settings

pub mod client;
pub mod config;
