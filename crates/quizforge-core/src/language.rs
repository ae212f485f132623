//! Heuristic language detection.
//!
//! A closed two-way classifier: it counts whole-word matches against a
//! fixed list of common Italian function words and classifies the text as
//! Italian once more than three matches occur. Supporting further
//! languages would need a redesign, not a bigger word list.

use crate::model::Language;

/// Common Italian function words checked by the detector. Words that are
/// also everyday English words are left out so English prose cannot rack
/// up accidental matches.
const ITALIAN_FUNCTION_WORDS: &[&str] = &[
    "il", "lo", "la", "gli", "le", "uno", "una", "di", "da", "che", "non", "per", "con", "sono",
    "della", "delle", "dello", "degli", "nel", "nella", "sulla", "questo", "questa", "anche",
    "molto", "dove", "quando", "perché", "più", "essere", "avere",
];

/// Match count above which a text is classified as Italian.
const ITALIAN_MATCH_THRESHOLD: usize = 3;

/// Classify a text as Italian or English.
///
/// Matching is case-insensitive with word-boundary semantics: a function
/// word occurring inside a longer word does not count.
pub fn detect(text: &str) -> Language {
    let lowered = text.to_lowercase();
    let matches = lowered
        .split(|c: char| !c.is_alphabetic())
        .filter(|word| !word.is_empty())
        .filter(|word| ITALIAN_FUNCTION_WORDS.contains(word))
        .count();

    if matches > ITALIAN_MATCH_THRESHOLD {
        Language::Italian
    } else {
        Language::English
    }
}
