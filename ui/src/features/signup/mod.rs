pub mod errors;
pub mod form_validation;
pub mod submission;
pub mod types;

pub use errors::*;
pub use form_validation::*;
pub use submission::*;
pub use types::*;
