//! Submit pipeline for the sign-up form
//!
//! The submit action is injected as a [`SignupApi`] implementation wrapped in
//! [`SignupActions`]. [`begin_submit`] performs the synchronous half of a click:
//! it checks the form, flips the pending flag and returns the future that
//! performs the call. The caller spawns that future and reduces the
//! [`SignupAction`] it resolves to.

use async_trait::async_trait;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::fmt;
use std::rc::Rc;

use super::errors::SignupError;
use super::types::{SignupAction, SignupFormState, SignupPayload};
use crate::{console_debug, console_error, console_info};

/// Outbound sign-up call supplied by the host application
///
/// Browsers run everything on one thread, so implementations need not be `Send`.
#[async_trait(?Send)]
pub trait SignupApi {
    async fn post_signup(&self, payload: SignupPayload) -> Result<(), SignupError>;
}

/// Optional dependency of the sign-up form
#[derive(Clone)]
pub struct SignupActions {
    post_signup: Rc<dyn SignupApi>,
}

impl SignupActions {
    pub fn new<A: SignupApi + 'static>(api: A) -> Self {
        Self {
            post_signup: Rc::new(api),
        }
    }

    pub fn from_rc(api: Rc<dyn SignupApi>) -> Self {
        Self { post_signup: api }
    }
}

impl PartialEq for SignupActions {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Rc::as_ptr(&self.post_signup), Rc::as_ptr(&other.post_signup))
    }
}

impl fmt::Debug for SignupActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupActions").finish_non_exhaustive()
    }
}

/// In-flight submission, resolving to the action that settles it
pub type SubmitTask = LocalBoxFuture<'static, SignupAction>;

/// Start a submission if the form allows one.
///
/// Returns `None` without touching the state when the passwords differ, a call
/// is already pending, or no action is configured. Otherwise the pending flag
/// is set before this function returns, so a second click observes it.
pub fn begin_submit(
    state: &mut SignupFormState,
    actions: Option<&SignupActions>,
) -> Option<SubmitTask> {
    if !state.can_submit() {
        console_debug!(
            "[Signup] Submit ignored (pending: {}, mismatch: {})",
            state.pending_api_call,
            state.password_mismatch()
        );
        return None;
    }

    let Some(actions) = actions else {
        console_debug!("[Signup] Submit ignored, no sign-up action configured");
        return None;
    };

    let payload = state.payload();
    state.reduce_in_place(SignupAction::SubmitStarted);
    console_info!("[Signup] Submitting sign up for {}", payload.username);

    let api = Rc::clone(&actions.post_signup);
    Some(
        async move {
            match api.post_signup(payload).await {
                Ok(()) => SignupAction::SubmitSucceeded,
                Err(error) => {
                    console_error!("[Signup] Sign up failed: {}", error);
                    SignupAction::SubmitFailed(error)
                }
            }
        }
        .boxed_local(),
    )
}
