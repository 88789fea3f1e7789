//! Error types for the Gemini client.

use thiserror::Error;

/// Errors that can occur when talking to the generative-language API.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No API key was provided and the environment variable is unset.
    #[error("GEMINI_API_KEY environment variable is required. Set it with: export GEMINI_API_KEY='your-api-key'")]
    MissingApiKey,

    /// HTTP request failed before a response was received.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error body returned by the API.
        message: String,
    },

    /// The API returned a body that could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}
