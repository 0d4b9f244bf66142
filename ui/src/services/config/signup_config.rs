//! Configuration for the sign-up page
//!
//! Groups the endpoint settings used by the HTTP transport and the few UI
//! strings the form lets a host override.

use serde::{Deserialize, Serialize};

/// Top-level sign-up configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SignupConfig {
    /// Backend endpoint settings
    pub api: ApiConfig,

    /// Presentation settings
    pub ui: UiConfig,
}

/// Backend endpoint configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Origin of the backend; empty means same origin as the page
    pub base_url: String,

    /// Path of the user registration endpoint
    pub users_path: String,

    /// Value for the `Accept-Language` header, if any
    pub accept_language: Option<String>,
}

/// Presentation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Accessible text of the spinner shown while a sign up is in flight
    pub loading_message: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            users_path: "/api/1.0/users".to_string(),
            accept_language: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_message: "Loading...".to_string(),
        }
    }
}

impl SignupConfig {
    /// Parse a configuration document; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Full URL of the registration endpoint
    pub fn users_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api.base_url.trim_end_matches('/'),
            self.api.users_path
        )
    }
}
