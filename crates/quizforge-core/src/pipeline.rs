//! Generation-to-storage orchestration.
//!
//! Parsing and generation run synchronously; the store call is the only
//! suspend point. Cancelling before the write starts therefore leaves no
//! trace anywhere.

use std::sync::Arc;

use anyhow::Result;
use rand::Rng;
use tracing::{debug, instrument};

use crate::generate::{generate_questions, GenerationRequest};
use crate::model::{GeneratedQuestion, ParsedDocument};
use crate::records::QuestionRecord;
use crate::traits::QuestionStore;

/// Drives one generation call through the persistence gateway.
pub struct QuestionPipeline {
    store: Arc<dyn QuestionStore>,
}

impl QuestionPipeline {
    pub fn new(store: Arc<dyn QuestionStore>) -> Self {
        Self { store }
    }

    /// Generate questions for a document and persist them in one batch
    /// write, returning the questions rebuilt from the gateway's response.
    ///
    /// An empty generation result skips the write entirely. A failed write
    /// propagates verbatim; retry policy belongs to the gateway, not here.
    #[instrument(skip_all, fields(store = self.store.name(), question_type = %request.question_type))]
    pub async fn generate_and_store<R: Rng + ?Sized + Send>(
        &self,
        rng: &mut R,
        document_id: &str,
        document: &ParsedDocument,
        request: &GenerationRequest,
    ) -> Result<Vec<GeneratedQuestion>> {
        let questions = generate_questions(rng, document_id, document, request);
        if questions.is_empty() {
            debug!(document_id, "nothing generated, skipping the store write");
            return Ok(questions);
        }

        let batch: Vec<QuestionRecord> = questions
            .iter()
            .map(|question| QuestionRecord::from_question(question, &request.created_by))
            .collect();

        let stored = self.store.save_questions(&batch).await?;
        let questions = stored
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    /// Fetch the previously stored questions for a document.
    pub async fn stored_questions(&self, content_id: &str) -> Result<Vec<GeneratedQuestion>> {
        let records = self.store.list_questions(content_id).await?;
        let questions = records
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }
}
