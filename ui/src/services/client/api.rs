//! HTTP transport for the sign-up action

use async_trait::async_trait;
use reqwest::header::ACCEPT_LANGUAGE;

use crate::features::signup::{ApiErrorBody, SignupApi, SignupError, SignupPayload};
use crate::services::config::SignupConfig;
use crate::{console_info, console_warn};

/// Posts sign-up payloads to the backend users endpoint
#[derive(Debug, Clone)]
pub struct HttpSignupApi {
    client: reqwest::Client,
    config: SignupConfig,
}

impl HttpSignupApi {
    pub fn new(config: SignupConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: SignupConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &SignupConfig {
        &self.config
    }

    fn build_request(&self, payload: &SignupPayload) -> reqwest::RequestBuilder {
        let request = self
            .client
            .post(self.config.users_endpoint())
            .json(payload);

        match &self.config.api.accept_language {
            Some(language) => request.header(ACCEPT_LANGUAGE, language),
            None => request,
        }
    }
}

/// Decode a rejection body, tolerating bodies that are not the expected shape
pub fn decode_error_body(bytes: &[u8]) -> ApiErrorBody {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        console_warn!("[SignupApi] Unstructured error body: {}", e);
        ApiErrorBody::default()
    })
}

#[async_trait(?Send)]
impl SignupApi for HttpSignupApi {
    async fn post_signup(&self, payload: SignupPayload) -> Result<(), SignupError> {
        let response = self.build_request(&payload).send().await?;
        let status = response.status();

        if status.is_success() {
            console_info!("[SignupApi] User {} created", payload.username);
            return Ok(());
        }

        let bytes = response.bytes().await?;
        Err(SignupError::Rejected {
            status: Some(status.as_u16()),
            body: decode_error_body(&bytes),
        })
    }
}
