//! Error types for grounded-core.

use thiserror::Error;

/// Errors raised while executing a grounded query.
#[derive(Error, Debug)]
pub enum SearchError {
    /// The remote call failed or returned a reply that could not be
    /// interpreted. Carries the original error message.
    #[error("Query failed: {0}")]
    Query(String),
}
