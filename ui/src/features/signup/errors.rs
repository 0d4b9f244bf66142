//! Error types for the sign-up flow
//!
//! Two families exist: local validation problems that are computed from the
//! form state and never leave the browser, and errors produced by the submit
//! action itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Field-keyed validation messages, keyed by wire field name (`displayName`, ...)
pub type ValidationErrors = BTreeMap<String, String>;

/// Structured error body returned by the users endpoint on rejection
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub timestamp: Option<i64>,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub validation_errors: Option<ValidationErrors>,
}

impl ApiErrorBody {
    /// Body carrying only field-level validation errors
    pub fn with_validation_errors<I, K, V>(errors: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            validation_errors: Some(
                errors
                    .into_iter()
                    .map(|(field, message)| (field.into(), message.into()))
                    .collect(),
            ),
            ..Self::default()
        }
    }
}

/// Failure of the submit action
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignupError {
    #[error("Sign up rejected{}", status_suffix(.status))]
    Rejected {
        status: Option<u16>,
        body: ApiErrorBody,
    },

    #[error("Network error: {message}")]
    Network { message: String },
}

fn status_suffix(status: &Option<u16>) -> String {
    status
        .map(|code| format!(" with status {}", code))
        .unwrap_or_default()
}

impl SignupError {
    /// Rejection carrying only the given body, as produced by test doubles and
    /// hosts that do not expose an HTTP status
    pub fn rejected(body: ApiErrorBody) -> Self {
        SignupError::Rejected { status: None, body }
    }

    /// Field-level errors carried by the rejection, if any
    pub fn validation_errors(&self) -> Option<&ValidationErrors> {
        match self {
            SignupError::Rejected { body, .. } => body.validation_errors.as_ref(),
            SignupError::Network { .. } => None,
        }
    }
}

impl From<reqwest::Error> for SignupError {
    fn from(err: reqwest::Error) -> Self {
        SignupError::Network {
            message: err.to_string(),
        }
    }
}

/// Validation problems detected on the client before anything is sent
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalValidationError {
    #[error("Does not match to password")]
    PasswordMismatch,
}
