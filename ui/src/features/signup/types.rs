// Core types for the sign-up form - no dioxus imports needed here
use serde::{Deserialize, Serialize};

use super::errors::{LocalValidationError, SignupError, ValidationErrors};
use crate::{console_debug, console_info, console_warn};

/// The four inputs of the sign-up form
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum SignupField {
    DisplayName,
    Username,
    Password,
    PasswordRepeat,
}

impl SignupField {
    pub const ALL: [SignupField; 4] = [
        SignupField::DisplayName,
        SignupField::Username,
        SignupField::Password,
        SignupField::PasswordRepeat,
    ];

    /// Field name as used by the backend in payloads and validation errors
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupField::DisplayName => "displayName",
            SignupField::Username => "username",
            SignupField::Password => "password",
            SignupField::PasswordRepeat => "passwordRepeat",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SignupField::DisplayName => "Display Name",
            SignupField::Username => "Username",
            SignupField::Password => "Password",
            SignupField::PasswordRepeat => "Password Repeat",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SignupField::DisplayName => "Your display name",
            SignupField::Username => "Your username",
            SignupField::Password => "Your password",
            SignupField::PasswordRepeat => "Repeat your password",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, SignupField::Password | SignupField::PasswordRepeat)
    }
}

/// Body sent to the submit action; the password repeat never leaves the form
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignupPayload {
    pub username: String,
    pub display_name: String,
    pub password: String,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum SignupAction {
    SetField(SignupField, String),
    SubmitStarted,
    SubmitSucceeded,
    SubmitFailed(SignupError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupFormState {
    pub display_name: String,
    pub username: String,
    pub password: String,
    pub password_repeat: String,
    pub pending_api_call: bool,
    pub errors: ValidationErrors,
}

impl SignupFormState {
    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::DisplayName => &self.display_name,
            SignupField::Username => &self.username,
            SignupField::Password => &self.password,
            SignupField::PasswordRepeat => &self.password_repeat,
        }
    }

    fn value_mut(&mut self, field: SignupField) -> &mut String {
        match field {
            SignupField::DisplayName => &mut self.display_name,
            SignupField::Username => &mut self.username,
            SignupField::Password => &mut self.password,
            SignupField::PasswordRepeat => &mut self.password_repeat,
        }
    }

    /// Error to show under `field`: the server message if one is pending,
    /// otherwise the local mismatch warning for the repeat input
    pub fn error_for(&self, field: SignupField) -> Option<String> {
        if let Some(message) = self.errors.get(field.as_str()) {
            return Some(message.clone());
        }
        match (field, self.validate_passwords()) {
            (SignupField::PasswordRepeat, Err(local)) => Some(local.to_string()),
            _ => None,
        }
    }

    pub fn validate_passwords(&self) -> Result<(), LocalValidationError> {
        if self.password_repeat == self.password {
            Ok(())
        } else {
            Err(LocalValidationError::PasswordMismatch)
        }
    }

    pub fn password_mismatch(&self) -> bool {
        self.validate_passwords().is_err()
    }

    /// The submit button is enabled iff passwords match and nothing is in flight
    pub fn can_submit(&self) -> bool {
        !self.password_mismatch() && !self.pending_api_call
    }

    pub fn payload(&self) -> SignupPayload {
        SignupPayload {
            username: self.username.clone(),
            display_name: self.display_name.clone(),
            password: self.password.clone(),
        }
    }

    pub fn reduce_in_place(&mut self, action: SignupAction) {
        match action {
            SignupAction::SetField(field, value) => {
                *self.value_mut(field) = value;
                self.errors.remove(field.as_str());
            }
            SignupAction::SubmitStarted => {
                self.pending_api_call = true;
            }
            SignupAction::SubmitSucceeded => {
                console_info!("[Signup] Sign up completed for {}", self.username);
                self.pending_api_call = false;
            }
            SignupAction::SubmitFailed(error) => {
                self.pending_api_call = false;
                match error.validation_errors() {
                    Some(validation_errors) => {
                        console_debug!(
                            "[Signup] Received {} field error(s)",
                            validation_errors.len()
                        );
                        self.errors.extend(
                            validation_errors
                                .iter()
                                .map(|(field, message)| (field.clone(), message.clone())),
                        );
                    }
                    None => {
                        console_warn!("[Signup] Sign up failed without field errors: {}", error);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::signup::errors::ApiErrorBody;

    fn filled_state() -> SignupFormState {
        let mut state = SignupFormState::default();
        state.reduce_in_place(SignupAction::SetField(
            SignupField::DisplayName,
            "my-display-name".to_string(),
        ));
        state.reduce_in_place(SignupAction::SetField(
            SignupField::Username,
            "my-user-name".to_string(),
        ));
        state.reduce_in_place(SignupAction::SetField(
            SignupField::Password,
            "P4ssword".to_string(),
        ));
        state.reduce_in_place(SignupAction::SetField(
            SignupField::PasswordRepeat,
            "P4ssword".to_string(),
        ));
        state
    }

    fn rejected_with(field: &str, message: &str) -> SignupAction {
        SignupAction::SubmitFailed(SignupError::rejected(
            ApiErrorBody::with_validation_errors([(field, message)]),
        ))
    }

    #[test]
    fn test_initial_state_is_empty() {
        let state = SignupFormState::default();
        for field in SignupField::ALL {
            assert_eq!(state.value(field), "");
        }
        assert!(!state.pending_api_call);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_set_field_stores_exact_value() {
        let mut state = SignupFormState::default();
        for (field, value) in [
            (SignupField::DisplayName, "my-display-name"),
            (SignupField::Username, "my-user-name"),
            (SignupField::Password, "P4ssword"),
            (SignupField::PasswordRepeat, "P4ssword"),
        ] {
            state.reduce_in_place(SignupAction::SetField(field, value.to_string()));
            assert_eq!(state.value(field), value);
        }
    }

    #[test]
    fn test_can_submit_when_passwords_match() {
        let state = filled_state();
        assert!(!state.password_mismatch());
        assert!(state.can_submit());
        assert!(state.error_for(SignupField::PasswordRepeat).is_none());
    }

    #[test]
    fn test_cannot_submit_when_repeat_differs() {
        let mut state = filled_state();
        state.reduce_in_place(SignupAction::SetField(
            SignupField::PasswordRepeat,
            "new-pass".to_string(),
        ));
        assert!(!state.can_submit());
        assert_eq!(
            state.error_for(SignupField::PasswordRepeat).as_deref(),
            Some("Does not match to password")
        );
    }

    #[test]
    fn test_cannot_submit_when_password_differs() {
        let mut state = filled_state();
        state.reduce_in_place(SignupAction::SetField(
            SignupField::Password,
            "new-pass".to_string(),
        ));
        assert!(!state.can_submit());
        assert_eq!(
            state.error_for(SignupField::PasswordRepeat).as_deref(),
            Some("Does not match to password")
        );
    }

    #[test]
    fn test_cannot_submit_while_pending() {
        let mut state = filled_state();
        state.reduce_in_place(SignupAction::SubmitStarted);
        assert!(!state.can_submit());

        state.reduce_in_place(SignupAction::SubmitSucceeded);
        assert!(state.can_submit());
    }

    #[test]
    fn test_payload_excludes_password_repeat() {
        let state = filled_state();
        assert_eq!(
            state.payload(),
            SignupPayload {
                username: "my-user-name".to_string(),
                display_name: "my-display-name".to_string(),
                password: "P4ssword".to_string(),
            }
        );

        let json = serde_json::to_value(state.payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "my-user-name",
                "displayName": "my-display-name",
                "password": "P4ssword"
            })
        );
    }

    #[test]
    fn test_failure_merges_field_errors() {
        let mut state = filled_state();
        state.reduce_in_place(SignupAction::SubmitStarted);
        state.reduce_in_place(rejected_with("displayName", "Cannot be null"));

        assert!(!state.pending_api_call);
        assert_eq!(
            state.error_for(SignupField::DisplayName).as_deref(),
            Some("Cannot be null")
        );
        assert!(state.error_for(SignupField::Username).is_none());
    }

    #[test]
    fn test_failure_without_body_clears_pending() {
        let mut state = filled_state();
        state.reduce_in_place(SignupAction::SubmitStarted);
        state.reduce_in_place(SignupAction::SubmitFailed(SignupError::rejected(
            ApiErrorBody::default(),
        )));

        assert!(!state.pending_api_call);
        assert!(state.errors.is_empty());
        assert!(state.can_submit());
    }

    #[test]
    fn test_editing_field_clears_its_error() {
        for field in [
            SignupField::DisplayName,
            SignupField::Username,
            SignupField::Password,
        ] {
            let mut state = filled_state();
            state.reduce_in_place(rejected_with(field.as_str(), "Cannot be null"));
            assert_eq!(state.error_for(field).as_deref(), Some("Cannot be null"));

            // Cleared even when the new value is no better than the old one
            state.reduce_in_place(SignupAction::SetField(field, String::new()));
            assert!(state.errors.get(field.as_str()).is_none());
        }
    }

    #[test]
    fn test_editing_other_field_keeps_error() {
        let mut state = filled_state();
        state.reduce_in_place(rejected_with("username", "Username cannot be null"));
        state.reduce_in_place(SignupAction::SetField(
            SignupField::DisplayName,
            "name updated".to_string(),
        ));
        assert_eq!(
            state.error_for(SignupField::Username).as_deref(),
            Some("Username cannot be null")
        );
    }

    #[test]
    fn test_secret_fields() {
        assert!(SignupField::Password.is_secret());
        assert!(SignupField::PasswordRepeat.is_secret());
        assert!(!SignupField::DisplayName.is_secret());
        assert!(!SignupField::Username.is_secret());
    }
}
