//! Open-ended prompt synthesis for writing, speaking, and listening.
//!
//! The only strategy guaranteed to hit the requested count: paragraphs
//! are reused through modulo cycling when there are fewer of them than
//! questions asked for.

use tracing::warn;

use super::{paragraphs, Draft};
use crate::model::QuestionType;

/// Excerpt length used inside the prompt templates.
const EXCERPT_CHARS: usize = 120;

pub(super) fn generate(content: &str, question_type: QuestionType, count: usize) -> Vec<Draft> {
    let paragraphs = paragraphs(content);
    if paragraphs.is_empty() {
        return Vec::new();
    }

    (0..count)
        .filter_map(|i| {
            let excerpt = excerpt_of(paragraphs[i % paragraphs.len()]);
            let (question, correct_answer) = prompt_pair(question_type, &excerpt)?;
            Some(Draft {
                question,
                options: None,
                correct_answer,
                explanation: None,
            })
        })
        .collect()
}

/// Type-specific prompt and model answer. The non-prompt types warn and
/// yield `None`; the dispatcher never routes them here.
fn prompt_pair(question_type: QuestionType, excerpt: &str) -> Option<(String, String)> {
    match question_type {
        QuestionType::Writing => Some((
            format!("Write a paragraph expanding on the following idea: \"{excerpt}\""),
            "A well-structured paragraph that develops the given idea.".to_string(),
        )),
        QuestionType::Speaking => Some((
            format!("Read this passage aloud, then explain it in your own words: \"{excerpt}\""),
            "A spoken explanation covering the main points of the passage.".to_string(),
        )),
        QuestionType::Listening => Some((
            format!("Listen to this passage and identify its main topic: \"{excerpt}\""),
            "The main topic of the passage.".to_string(),
        )),
        QuestionType::MultipleChoice | QuestionType::Flashcards => {
            warn!(%question_type, "non-prompt question type routed to the prompt strategy");
            None
        }
    }
}

/// Fixed-length paragraph excerpt, cut on a char boundary, with a
/// trailing ellipsis when truncated.
fn excerpt_of(paragraph: &str) -> String {
    if paragraph.chars().count() <= EXCERPT_CHARS {
        return paragraph.to_string();
    }
    let cut: String = paragraph.chars().take(EXCERPT_CHARS).collect();
    format!("{}...", cut.trim_end())
}
