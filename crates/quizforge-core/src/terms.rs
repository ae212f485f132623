//! Frequency-based key-term extraction.
//!
//! Surfaces the most frequent content words of a document for tagging and
//! search. The ranking is fully deterministic: frequency descending, ties
//! broken by first occurrence in the text.

use std::collections::HashMap;

/// Maximum number of terms surfaced per document.
const MAX_KEY_TERMS: usize = 10;

/// Tokens shorter than this are never considered terms.
const MIN_TERM_CHARS: usize = 5;

/// Common words excluded from extraction regardless of frequency.
/// Entries shorter than [`MIN_TERM_CHARS`] would be filtered by the length
/// rule anyway, so the list only carries longer words.
const STOPWORDS: &[&str] = &[
    // English
    "about", "above", "after", "again", "their", "there", "these", "those", "which", "while",
    "would", "could", "should", "where", "being", "every", "other", "under", "because", "between",
    "through", "during", "before",
    // Italian
    "della", "delle", "dello", "degli", "nella", "sulla", "questo", "questa", "questi", "queste",
    "quello", "quella", "anche", "molto", "perché", "quando", "essere", "avere", "fatto",
];

/// Extract up to 10 frequency-ranked key terms from a text.
///
/// Tokens are lower-cased and stripped of punctuation; anything shorter
/// than 5 characters, in the stopword list, or occurring only once is
/// discarded.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    // term -> (frequency, first occurrence position)
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (position, raw) in text.to_lowercase().split_whitespace().enumerate() {
        let token: String = raw.chars().filter(|c| c.is_alphanumeric()).collect();
        if token.chars().count() < MIN_TERM_CHARS {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(String, usize, usize)> = counts
        .into_iter()
        .filter(|(term, (frequency, _))| *frequency > 1 && !STOPWORDS.contains(&term.as_str()))
        .map(|(term, (frequency, first_seen))| (term, frequency, first_seen))
        .collect();

    // The composite key never ties: first-seen positions are unique per
    // term, so map iteration order cannot leak into the result.
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(MAX_KEY_TERMS);
    ranked.into_iter().map(|(term, _, _)| term).collect()
}
