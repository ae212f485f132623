//! Flashcard synthesis.
//!
//! Builds term/definition cards from paragraphs, padding with
//! single-word concept cards when the paragraphs run out.

use std::collections::HashSet;

use super::{paragraphs, Draft};

/// Whitespace tokens taken from a paragraph's first sentence for the
/// card's front.
const TERM_TOKENS: usize = 3;

/// Padding cards come from content words strictly longer than this.
const PADDING_WORD_CHARS: usize = 5;

pub(super) fn generate(content: &str, count: usize) -> Vec<Draft> {
    let mut drafts = Vec::new();

    // Only the first `count` paragraphs are considered; a skipped
    // paragraph is not replaced by a later one.
    for paragraph in paragraphs(content).iter().take(count) {
        let sentences = split_sentences(paragraph);
        if sentences.len() < 2 {
            continue;
        }

        let term = sentences[0]
            .split_whitespace()
            .take(TERM_TOKENS)
            .collect::<Vec<_>>()
            .join(" ");
        let definition = sentences[1..].join(". ");

        drafts.push(Draft {
            question: format!("{term}..."),
            options: None,
            correct_answer: definition,
            explanation: None,
        });
    }

    if drafts.len() < count {
        pad_with_concepts(content, count, &mut drafts);
    }

    drafts
}

fn split_sentences(paragraph: &str) -> Vec<&str> {
    paragraph
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect()
}

/// Top the card list up with concept cards built from the distinct long
/// words of the content, in first-occurrence order. Runs out quietly when
/// the content has no more eligible words.
fn pad_with_concepts(content: &str, count: usize, drafts: &mut Vec<Draft>) {
    let mut seen = HashSet::new();

    for raw in content.split_whitespace() {
        if drafts.len() >= count {
            break;
        }
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.chars().count() <= PADDING_WORD_CHARS || !seen.insert(word.clone()) {
            continue;
        }
        drafts.push(Draft {
            question: format!("Define: {word}"),
            options: None,
            correct_answer: format!("Key concept from the material: {word}"),
            explanation: None,
        });
    }
}
