//! Storage error types.
//!
//! These error types represent failures at the persistence boundary.
//! Defined in `quizforge-core` so the pipeline and its callers can
//! downcast and classify gateway failures without string matching.
//! Retrying is the gateway's business; the core only propagates.

use thiserror::Error;

/// Errors raised by a question store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The gateway refused the batch.
    #[error("store rejected batch (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// Authentication failed (invalid credentials).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// A record in the batch failed the gateway's validation.
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
