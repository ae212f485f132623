//! Fill-in-the-blank multiple-choice synthesis.
//!
//! Samples candidate sentences, blanks one content word per sentence, and
//! surrounds the answer with distractors drawn from the same sentence.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Difficulty;
use crate::sampler;

use super::{Draft, BLANK_MARKER};

/// A multiple-choice question always carries this many options.
const OPTION_COUNT: usize = 4;

/// Candidate sentences must fall in this trimmed length range.
const MIN_SENTENCE_CHARS: usize = 30;
const MAX_SENTENCE_CHARS: usize = 200;

/// Blank targets must be alphabetic-only and at least this long.
const MIN_BLANK_CHARS: usize = 5;

/// Distractors shorter than this are replaced by placeholders.
const MIN_DISTRACTOR_CHARS: usize = 4;

/// Fraction of candidate sentences sampled per difficulty grade.
fn sample_fraction(difficulty: Difficulty) -> f64 {
    match difficulty {
        Difficulty::Beginner => 0.2,
        Difficulty::Intermediate => 0.5,
        Difficulty::Advanced => 1.0,
    }
}

pub(super) fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    content: &str,
    count: usize,
    difficulty: Difficulty,
) -> Vec<Draft> {
    let sentences = split_sentences(content);
    if sentences.is_empty() || count == 0 {
        return Vec::new();
    }

    let sample_size = (sentences.len() as f64 * sample_fraction(difficulty)).ceil() as usize;
    let sample_size = sample_size.min(sentences.len());
    let drawn = sampler::sample_indexes(rng, sentences.len(), sample_size);

    let mut drafts = Vec::new();
    for index in drawn {
        if drafts.len() >= count {
            break;
        }
        // A sentence without an eligible word is skipped without consuming
        // one of the requested slots.
        if let Some(draft) = blank_out(rng, &sentences[index]) {
            drafts.push(draft);
        }
    }
    drafts
}

/// Split text on sentence terminators, keeping candidates whose trimmed
/// length is inside the candidate range.
fn split_sentences(content: &str) -> Vec<String> {
    content
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| {
            let chars = sentence.chars().count();
            (MIN_SENTENCE_CHARS..=MAX_SENTENCE_CHARS).contains(&chars)
        })
        .map(str::to_string)
        .collect()
}

/// Pick one eligible word, blank it, and assemble the options. Returns
/// `None` when the sentence has no eligible word.
fn blank_out<R: Rng + ?Sized>(rng: &mut R, sentence: &str) -> Option<Draft> {
    let tokens: Vec<&str> = sentence.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }

    // First and last tokens never become the blank.
    let eligible: Vec<usize> = (1..tokens.len() - 1)
        .filter(|&i| is_eligible(tokens[i]))
        .collect();
    let target = *eligible.choose(rng)?;

    let answer = tokens[target].to_string();
    let question = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| if i == target { BLANK_MARKER } else { token })
        .collect::<Vec<_>>()
        .join(" ");

    let options = build_options(rng, &tokens, target, &answer);
    let explanation = format!("The missing word is \"{answer}\".");

    Some(Draft {
        question,
        options: Some(options),
        correct_answer: answer,
        explanation: Some(explanation),
    })
}

fn is_eligible(token: &str) -> bool {
    token.chars().count() >= MIN_BLANK_CHARS && token.chars().all(|c| c.is_alphabetic())
}

/// Exactly 4 unique options: the answer plus 3 distractors drawn from the
/// other words of the sentence. A drawn word that duplicates an option or
/// is too short falls back to a numbered placeholder so the set always
/// holds 4 unique strings.
fn build_options<R: Rng + ?Sized>(
    rng: &mut R,
    tokens: &[&str],
    target: usize,
    answer: &str,
) -> Vec<String> {
    let pool: Vec<String> = tokens
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != target)
        .map(|(_, token)| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_string()
        })
        .collect();

    let mut options = vec![answer.to_string()];
    for slot in 1..OPTION_COUNT {
        let drawn = pool.choose(rng).cloned().unwrap_or_default();
        let accepted =
            drawn.chars().count() >= MIN_DISTRACTOR_CHARS && !options.contains(&drawn);
        if accepted {
            options.push(drawn);
        } else {
            options.push(placeholder(&options, slot));
        }
    }

    sampler::shuffle(rng, &mut options);
    options
}

/// Numbered placeholder that does not collide with the options so far.
fn placeholder(options: &[String], slot: usize) -> String {
    let mut n = slot;
    loop {
        let candidate = format!("option{n}");
        if !options.contains(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
