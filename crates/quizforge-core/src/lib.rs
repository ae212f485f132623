//! Core library for quizforge: document parsing, key-term extraction,
//! question generation, and the pipeline that ties generation to a
//! persistence gateway.
//!
//! This crate is I/O-free apart from the [`traits::QuestionStore`]
//! abstraction; concrete gateways live in `quizforge-store`.

pub mod error;
pub mod generate;
pub mod language;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod records;
pub mod sampler;
pub mod terms;
pub mod traits;

pub use error::StoreError;
pub use generate::{generate_questions, GenerationRequest, BLANK_MARKER};
pub use model::{
    Difficulty, DocumentMetadata, GeneratedQuestion, Language, ParsedDocument, QuestionType,
    Section,
};
pub use parser::parse;
pub use pipeline::QuestionPipeline;
pub use records::{ContentRecord, QuestionRecord};
pub use traits::QuestionStore;
