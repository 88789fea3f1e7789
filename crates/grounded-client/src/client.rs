use std::time::Duration;

use reqwest::Client;

use grounded_types::protocol::{GenerateContentRequest, GenerateContentResponse};

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Client for the Gemini generateContent API.
#[derive(Debug)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a client with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client with the API key from the `GEMINI_API_KEY`
    /// environment variable.
    pub fn from_env() -> Result<Self, ClientError> {
        tracing::debug!("reading API key from GEMINI_API_KEY");
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        Self::new(api_key)
    }

    /// Creates a client against a non-default endpoint.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ClientError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        let base_url: String = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Issues one generateContent request. A single attempt: failures are
    /// returned to the caller, never retried.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ClientError> {
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);
        tracing::debug!(model, "sending generateContent request");

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        resp.json()
            .await
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
