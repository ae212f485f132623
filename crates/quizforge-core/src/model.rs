//! Core data model types for quizforge.
//!
//! These are the fundamental types that the entire quizforge system uses
//! to represent parsed documents and generated assessment items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Natural languages the pipeline can classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Italian,
    English,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Italian => write!(f, "italian"),
            Language::English => write!(f, "english"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "italian" | "it" => Ok(Language::Italian),
            "english" | "en" => Ok(Language::English),
            other => Err(format!("unknown language: {other}")),
        }
    }
}

/// The kinds of assessment items the generator can produce.
///
/// Parsing an unknown tag fails rather than defaulting to a strategy, so
/// an unsupported type never silently reaches the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    MultipleChoice,
    Flashcards,
    Writing,
    Speaking,
    Listening,
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multipleChoice"),
            QuestionType::Flashcards => write!(f, "flashcards"),
            QuestionType::Writing => write!(f, "writing"),
            QuestionType::Speaking => write!(f, "speaking"),
            QuestionType::Listening => write!(f, "listening"),
        }
    }
}

impl FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "multiplechoice" | "multiple_choice" | "multiple-choice" => {
                Ok(QuestionType::MultipleChoice)
            }
            "flashcards" | "flashcard" => Ok(QuestionType::Flashcards),
            "writing" => Ok(QuestionType::Writing),
            "speaking" => Ok(QuestionType::Speaking),
            "listening" => Ok(QuestionType::Listening),
            other => Err(format!("unknown question type: {other}")),
        }
    }
}

/// Difficulty grade attached to each generated question.
///
/// For the multiple-choice strategy the grade also controls sampling
/// breadth: beginner draws from the smallest fraction of candidate
/// sentences, advanced from the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" | "easy" => Ok(Difficulty::Beginner),
            "intermediate" | "medium" => Ok(Difficulty::Intermediate),
            "advanced" | "hard" => Ok(Difficulty::Advanced),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

/// A heading-delimited slice of a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with the marker stripped.
    pub title: String,
    /// Body lines accumulated under the heading.
    pub content: String,
    /// Heading depth: 1 for `# `, 2 for `## `.
    pub level: u8,
}

/// Metadata computed for a parsed document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentMetadata {
    /// First line of a plain-text upload.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page_count: Option<u32>,
    /// Whitespace-delimited token count of the raw input.
    pub word_count: usize,
    /// Up to 10 frequency-ranked key terms.
    #[serde(default)]
    pub key_terms: Vec<String>,
    /// Detected document language.
    pub language: Language,
}

/// Structured result of parsing one uploaded document.
///
/// A parsed document is a transient computed value. It is never stored
/// directly; the upload collaborator embeds its serialized form inside a
/// content record when it wants to keep it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedDocument {
    /// Full body text (everything after the title line for plain text).
    pub text: String,
    /// Computed metadata.
    pub metadata: DocumentMetadata,
    /// Heading-delimited sections, absent when no heading markers occur.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<Section>>,
}

impl ParsedDocument {
    /// The text the generation strategies operate on: concatenated section
    /// bodies when sections exist, the full body otherwise.
    pub fn content(&self) -> String {
        match &self.sections {
            Some(sections) if !sections.is_empty() => sections
                .iter()
                .map(|s| s.content.as_str())
                .collect::<Vec<_>>()
                .join("\n\n"),
            _ => self.text.clone(),
        }
    }
}

/// One assessment item produced by the generator.
///
/// Persisted exactly once via the question store and immutable thereafter;
/// the core defines no update or delete path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    /// Unique identifier, minted from the injected randomness source.
    pub id: Uuid,
    /// Question text shown to the learner.
    pub question: String,
    /// Exactly 4 unique answer options for multiple choice, absent for the
    /// other question types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// The expected answer.
    pub correct_answer: String,
    /// Fixed-template explanation, when the strategy produces one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    /// Key terms carried over from the source document.
    #[serde(default)]
    pub tags: Vec<String>,
    pub language: Language,
    /// Id of the parsed document this question was derived from.
    pub source_content_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
