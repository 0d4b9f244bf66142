// Page wiring the HTTP transport into the form
#[cfg(feature = "web")]
pub mod signup_page;

#[cfg(feature = "web")]
pub use signup_page::SignupPage;
