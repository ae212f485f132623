//! Storage record shapes and field mapping.
//!
//! A [`GeneratedQuestion`] maps 1:1 onto a snake_case [`QuestionRecord`]
//! row, and the inverse translation rebuilds the question from a stored
//! row. [`ContentRecord`] is the camelCase document shape the upload
//! collaborator persists, with the parsed document embedded as JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::model::{GeneratedQuestion, ParsedDocument};

/// One stored question row.
///
/// Enum-valued fields are stored as their string tags; the gateway knows
/// nothing about this crate's types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: Uuid,
    /// Source document id (`source_content_id` on the question).
    pub content_id: String,
    pub question: String,
    pub question_type: String,
    #[serde(default)]
    pub options: Option<Vec<String>>,
    pub correct_answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
    pub difficulty: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub language: String,
    /// User id recorded at write time; not part of the question itself.
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl QuestionRecord {
    /// Map a generated question onto its storage row.
    pub fn from_question(question: &GeneratedQuestion, created_by: &str) -> Self {
        Self {
            id: question.id,
            content_id: question.source_content_id.clone(),
            question: question.question.clone(),
            question_type: question.question_type.to_string(),
            options: question.options.clone(),
            correct_answer: question.correct_answer.clone(),
            explanation: question.explanation.clone(),
            difficulty: question.difficulty.to_string(),
            tags: question.tags.clone(),
            language: question.language.to_string(),
            created_by: created_by.to_string(),
            created_at: question.created_at,
            updated_at: question.updated_at,
        }
    }

    /// Inverse translation: rebuild the question from a stored row. The
    /// row's server-populated timestamps win over whatever the question
    /// carried before the write; `created_by` stays behind in storage.
    ///
    /// A row whose type, difficulty, or language tag no longer parses is a
    /// [`StoreError::InvalidRecord`].
    pub fn into_question(self) -> Result<GeneratedQuestion, StoreError> {
        let question_type = self
            .question_type
            .parse()
            .map_err(StoreError::InvalidRecord)?;
        let difficulty = self.difficulty.parse().map_err(StoreError::InvalidRecord)?;
        let language = self.language.parse().map_err(StoreError::InvalidRecord)?;

        Ok(GeneratedQuestion {
            id: self.id,
            question: self.question,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            difficulty,
            question_type,
            tags: self.tags,
            language,
            source_content_id: self.content_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Stored document shape used by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    /// Upload kind tag ("document", "video", ...). Named `type` in the
    /// stored JSON.
    #[serde(rename = "type")]
    pub content_kind: String,
    /// Upload size in bytes.
    pub size: u64,
    pub uploaded_by: String,
    /// Content-type tag the parser was invoked with.
    pub content_type: String,
    pub language: String,
    pub created_at: DateTime<Utc>,
    /// Serialized [`ParsedDocument`], once parsing has run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ContentRecord {
    /// Embed a parsed document in its serialized JSON form.
    pub fn with_parsed(mut self, document: &ParsedDocument) -> serde_json::Result<Self> {
        self.parsed_content = Some(serde_json::to_string(document)?);
        Ok(self)
    }

    /// Decode the embedded parsed document, if present.
    pub fn parsed_document(&self) -> Option<serde_json::Result<ParsedDocument>> {
        self.parsed_content.as_deref().map(serde_json::from_str)
    }
}
