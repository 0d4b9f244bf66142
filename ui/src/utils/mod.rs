//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: timestamped logging that targets the browser console
//!   on WASM and `tracing` elsewhere

pub mod console_macros;
