//! Core trait definition for the persistence gateway.
//!
//! This async trait is implemented by the `quizforge-store` crate; the
//! core only owns the record contract and the call boundary.

use async_trait::async_trait;

use crate::records::QuestionRecord;

/// Durable storage for generated questions.
///
/// Writes are atomic per batch on the gateway side: a batch lands whole or
/// not at all. The response carries the stored rows, server-populated
/// timestamps included.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Human-readable store name (e.g. "memory", "rest").
    fn name(&self) -> &str;

    /// Persist one batch of question records, returning the stored rows.
    async fn save_questions(&self, batch: &[QuestionRecord])
        -> anyhow::Result<Vec<QuestionRecord>>;

    /// Fetch all stored records for a source document.
    async fn list_questions(&self, content_id: &str) -> anyhow::Result<Vec<QuestionRecord>>;
}
