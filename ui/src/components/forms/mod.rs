pub mod signup_form;

pub use signup_form::*;
