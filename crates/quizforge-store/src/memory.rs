//! In-memory store for tests and local runs.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use quizforge_core::error::StoreError;
use quizforge_core::records::QuestionRecord;
use quizforge_core::traits::QuestionStore;

/// A question store backed by a plain `Vec`, for exercising the pipeline
/// without a running gateway.
///
/// Mirrors the gateway's behavior where it matters: batches are validated
/// before anything is written, and row timestamps are stamped on save.
pub struct InMemoryStore {
    rows: Mutex<Vec<QuestionRecord>>,
    /// Number of save calls made.
    save_calls: AtomicU32,
    /// Error to return from the next save, if any.
    fail_next: Mutex<Option<StoreError>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            save_calls: AtomicU32::new(0),
            fail_next: Mutex::new(None),
        }
    }

    /// Make the next `save_questions` call fail with the given error.
    pub fn fail_next_save(&self, error: StoreError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// Get the number of save calls made to this store.
    pub fn save_calls(&self) -> u32 {
        self.save_calls.load(Ordering::Relaxed)
    }

    /// Snapshot of every stored row.
    pub fn rows(&self) -> Vec<QuestionRecord> {
        self.rows.lock().unwrap().clone()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn save_questions(
        &self,
        batch: &[QuestionRecord],
    ) -> anyhow::Result<Vec<QuestionRecord>> {
        self.save_calls.fetch_add(1, Ordering::Relaxed);

        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error.into());
        }

        // Validate the whole batch before touching the rows, so a bad
        // record never leaves a partial write behind.
        for record in batch {
            if record.question.trim().is_empty() {
                return Err(
                    StoreError::InvalidRecord(format!("record {} has no question", record.id))
                        .into(),
                );
            }
            if record.correct_answer.trim().is_empty() {
                return Err(StoreError::InvalidRecord(format!(
                    "record {} has no correct answer",
                    record.id
                ))
                .into());
            }
        }

        let now = Utc::now();
        let stored: Vec<QuestionRecord> = batch
            .iter()
            .cloned()
            .map(|mut record| {
                record.created_at = now;
                record.updated_at = now;
                record
            })
            .collect();

        self.rows.lock().unwrap().extend(stored.iter().cloned());
        Ok(stored)
    }

    async fn list_questions(&self, content_id: &str) -> anyhow::Result<Vec<QuestionRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|record| record.content_id == content_id)
            .cloned()
            .collect())
    }
}
