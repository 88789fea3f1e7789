//! Async client for the Gemini generateContent endpoint.
//!
//! A thin adapter: one authenticated POST per call, no retries, no
//! streaming. Authentication is an API key read from the `GEMINI_API_KEY`
//! environment variable at construction time.

mod client;
mod error;

pub use client::GeminiClient;
pub use error::ClientError;
