//! End-to-end pipeline tests against the in-memory store.
//!
//! These tests verify the full flow (parse → generate → persist → list)
//! without a running gateway.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizforge_core::error::StoreError;
use quizforge_core::generate::{GenerationRequest, BLANK_MARKER};
use quizforge_core::model::{Difficulty, Language, QuestionType};
use quizforge_core::parser;
use quizforge_core::pipeline::QuestionPipeline;
use quizforge_store::InMemoryStore;

const STUDY_GUIDE: &str = "Cell Biology Study Guide\n\
# Membrane Structure\n\
Cell membranes are built from phospholipid molecules arranged in two facing layers. \
Embedded proteins carry signals and nutrients across the membrane boundary. \
Cholesterol molecules stiffen the membrane against temperature swings.\n\
# Energy Production\n\
Mitochondria convert chemical energy from nutrients into usable cellular fuel. \
The folded inner membrane multiplies the surface available for energy reactions. \
Defective mitochondria are recycled before they can damage the cell.\n\
# Protein Synthesis\n\
Ribosomes assemble proteins by reading messenger instructions one codon at a time. \
Finished proteins fold into their working shape inside the endoplasmic reticulum. \
Misfolded proteins are tagged and broken down for recycling.";

const ITALIAN_GUIDE: &str = "Guida di Biologia\n\
# La Cellula\n\
La cellula è la struttura fondamentale di ogni organismo vivente conosciuto. \
Ogni cellula contiene strutture interne che svolgono funzioni specializzate per la sopravvivenza. \
Le cellule si dividono quando il corpo ha bisogno di nuovi tessuti.";

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("quizforge=debug")
        .try_init();
}

fn make_pipeline() -> (Arc<InMemoryStore>, QuestionPipeline) {
    let store = Arc::new(InMemoryStore::new());
    let pipeline = QuestionPipeline::new(store.clone());
    (store, pipeline)
}

fn make_request(question_type: QuestionType, count: usize) -> GenerationRequest {
    GenerationRequest {
        question_type,
        count,
        difficulty: Difficulty::Advanced,
        created_by: "e2e-user".into(),
    }
}

// --- Happy paths ---

#[tokio::test]
async fn e2e_multiple_choice_persists() {
    init_tracing();
    let (store, pipeline) = make_pipeline();
    let document = parser::parse(STUDY_GUIDE, parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = pipeline
        .generate_and_store(
            &mut rng,
            "content-1",
            &document,
            &make_request(QuestionType::MultipleChoice, 4),
        )
        .await
        .unwrap();

    assert_eq!(questions.len(), 4, "every sampled sentence should yield a question");
    for question in &questions {
        assert!(question.question.contains(BLANK_MARKER));
        let options = question.options.as_ref().expect("cloze questions carry options");
        assert_eq!(options.len(), 4);
        assert!(options.contains(&question.correct_answer));
        let mut deduped = options.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), 4, "options should be unique");
    }

    let rows = store.rows();
    assert_eq!(rows.len(), 4);
    assert!(rows.iter().all(|row| row.content_id == "content-1"));

    let listed = pipeline.stored_questions("content-1").await.unwrap();
    assert_eq!(listed, questions);
}

#[tokio::test]
async fn e2e_flashcards_round_trip() {
    init_tracing();
    let (store, pipeline) = make_pipeline();
    let document = parser::parse(STUDY_GUIDE, parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = pipeline
        .generate_and_store(
            &mut rng,
            "content-2",
            &document,
            &make_request(QuestionType::Flashcards, 3),
        )
        .await
        .unwrap();

    assert_eq!(questions.len(), 3, "three multi-sentence paragraphs are available");
    for question in &questions {
        assert!(question.options.is_none());
        assert!(!question.correct_answer.is_empty());
        assert_eq!(question.tags.len(), 3);
        assert!(question.tags.contains(&"proteins".to_string()));
        assert!(question.tags.contains(&"membrane".to_string()));
    }

    assert!(store.rows().iter().all(|row| row.created_by == "e2e-user"));

    let listed = pipeline.stored_questions("content-2").await.unwrap();
    assert_eq!(listed, questions);
}

#[tokio::test]
async fn e2e_writing_prompts_cycle_to_exact_count() {
    init_tracing();
    let (_store, pipeline) = make_pipeline();
    let document = parser::parse(STUDY_GUIDE, parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = pipeline
        .generate_and_store(
            &mut rng,
            "content-3",
            &document,
            &make_request(QuestionType::Writing, 7),
        )
        .await
        .unwrap();

    assert_eq!(questions.len(), 7, "prompts cycle paragraphs to reach the count");
    assert!(questions
        .iter()
        .all(|q| q.question.starts_with("Write a paragraph")));
}

#[tokio::test]
async fn e2e_italian_document_is_tagged_as_italian() {
    init_tracing();
    let (_store, pipeline) = make_pipeline();
    let document = parser::parse(ITALIAN_GUIDE, parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = pipeline
        .generate_and_store(
            &mut rng,
            "content-4",
            &document,
            &make_request(QuestionType::Flashcards, 2),
        )
        .await
        .unwrap();

    assert!(!questions.is_empty());
    assert!(questions.iter().all(|q| q.language == Language::Italian));
    assert!(questions
        .iter()
        .all(|q| q.tags.contains(&"cellula".to_string())));
}

// --- Edge cases and failures ---

#[tokio::test]
async fn e2e_empty_document_writes_nothing() {
    init_tracing();
    let (store, pipeline) = make_pipeline();
    let document = parser::parse("", parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let questions = pipeline
        .generate_and_store(
            &mut rng,
            "content-5",
            &document,
            &make_request(QuestionType::MultipleChoice, 5),
        )
        .await
        .unwrap();

    assert!(questions.is_empty());
    assert_eq!(store.save_calls(), 0, "no batch should reach the store");
}

#[tokio::test]
async fn e2e_store_failure_propagates() {
    init_tracing();
    let (store, pipeline) = make_pipeline();
    store.fail_next_save(StoreError::Rejected {
        status: 503,
        message: "maintenance window".into(),
    });
    let document = parser::parse(STUDY_GUIDE, parser::PLAIN_TEXT);
    let mut rng = StdRng::seed_from_u64(11);

    let err = pipeline
        .generate_and_store(
            &mut rng,
            "content-6",
            &document,
            &make_request(QuestionType::Flashcards, 2),
        )
        .await
        .unwrap_err();

    match err.downcast_ref::<StoreError>() {
        Some(StoreError::Rejected { status, .. }) => assert_eq!(*status, 503),
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert!(store.rows().is_empty(), "a failed batch should leave no rows");
}

#[tokio::test]
async fn e2e_seeded_generation_is_reproducible() {
    init_tracing();
    let document = parser::parse(STUDY_GUIDE, parser::PLAIN_TEXT);

    let (_store_a, pipeline_a) = make_pipeline();
    let mut rng_a = StdRng::seed_from_u64(77);
    let first = pipeline_a
        .generate_and_store(
            &mut rng_a,
            "content-7",
            &document,
            &make_request(QuestionType::MultipleChoice, 3),
        )
        .await
        .unwrap();

    let (_store_b, pipeline_b) = make_pipeline();
    let mut rng_b = StdRng::seed_from_u64(77);
    let second = pipeline_b
        .generate_and_store(
            &mut rng_b,
            "content-7",
            &document,
            &make_request(QuestionType::MultipleChoice, 3),
        )
        .await
        .unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.id, b.id, "ids are drawn from the seeded generator");
        assert_eq!(a.question, b.question);
        assert_eq!(a.options, b.options);
        assert_eq!(a.correct_answer, b.correct_answer);
    }
}
