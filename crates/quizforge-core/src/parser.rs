//! Raw text document parsing.
//!
//! Turns already-decoded text plus a content-type tag into a
//! [`ParsedDocument`]. Plain text gets heading-driven section
//! segmentation; every other content type passes through whole. Decoding
//! binary formats (PDF, DOCX) is the upload collaborator's job, not ours.

use tracing::debug;

use crate::language;
use crate::model::{DocumentMetadata, ParsedDocument, Section};
use crate::terms;

/// Content-type tag that triggers structural segmentation.
pub const PLAIN_TEXT: &str = "text/plain";

/// Parse raw uploaded content into a structured document.
///
/// Identical `(raw_content, content_type)` inputs always yield an
/// identical document; nothing in here draws randomness.
pub fn parse(raw_content: &str, content_type: &str) -> ParsedDocument {
    let word_count = raw_content.split_whitespace().count();
    let detected = language::detect(raw_content);
    let key_terms = terms::extract_key_terms(raw_content);

    let (title, text, sections) = if content_type == PLAIN_TEXT {
        parse_plain_text(raw_content)
    } else {
        (None, raw_content.to_string(), None)
    };

    debug!(
        content_type,
        word_count,
        section_count = sections.as_ref().map_or(0, Vec::len),
        language = %detected,
        "parsed document"
    );

    ParsedDocument {
        text,
        metadata: DocumentMetadata {
            title,
            author: None,
            creation_date: None,
            page_count: None,
            word_count,
            key_terms,
            language: detected,
        },
        sections,
    }
}

/// Plain-text layout: first line is the title, the rest is the body. A
/// `# ` line opens a level-1 section, `## ` a level-2 section; other lines
/// accumulate under the current heading. Lines before the first heading
/// stay in the body text only.
fn parse_plain_text(raw: &str) -> (Option<String>, String, Option<Vec<Section>>) {
    let mut lines = raw.lines();
    let title = lines
        .next()
        .map(|line| line.trim().to_string())
        .filter(|title| !title.is_empty());

    let body_lines: Vec<&str> = lines.collect();
    let text = body_lines.join("\n");

    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<(String, u8, Vec<&str>)> = None;

    for &line in &body_lines {
        if let Some(heading) = line.strip_prefix("## ") {
            flush_section(&mut sections, current.take());
            current = Some((heading.trim().to_string(), 2, Vec::new()));
        } else if let Some(heading) = line.strip_prefix("# ") {
            flush_section(&mut sections, current.take());
            current = Some((heading.trim().to_string(), 1, Vec::new()));
        } else if let Some((_, _, content)) = current.as_mut() {
            content.push(line);
        }
    }
    flush_section(&mut sections, current.take());

    let sections = if sections.is_empty() {
        None
    } else {
        Some(sections)
    };
    (title, text, sections)
}

fn flush_section(sections: &mut Vec<Section>, current: Option<(String, u8, Vec<&str>)>) {
    if let Some((title, level, content)) = current {
        sections.push(Section {
            title,
            content: content.join("\n").trim().to_string(),
            level,
        });
    }
}
