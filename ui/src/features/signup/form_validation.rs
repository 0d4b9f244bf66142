use crate::features::signup::types::*;

/// Validates that the form can be handed to the submit action
pub fn validate_signup_ready(state: &SignupFormState) -> bool {
    state.can_submit()
}

/// Validates that `field` currently renders without an error message
pub fn validate_field(state: &SignupFormState, field: SignupField) -> bool {
    state.error_for(field).is_none()
}

/// Gets a user-friendly explanation of why the submit button is disabled
pub fn get_submit_hint(state: &SignupFormState) -> Option<String> {
    if state.pending_api_call {
        return Some("Sign up in progress".to_string());
    }

    match state.validate_passwords() {
        Ok(()) => None,
        Err(err) => Some(err.to_string()),
    }
}
