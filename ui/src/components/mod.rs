//! User Interface Components
//!
//! Reusable Dioxus components for the sign-up page:
//!
//! - **forms**: the sign-up form itself
//! - **display**: loading indicator
//! - **input**: labelled inputs and their validation feedback

pub mod display;
pub mod forms;
pub mod input;
