use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rand::rngs::StdRng;
use rand::SeedableRng;

use quizforge_core::generate::{generate_questions, GenerationRequest};
use quizforge_core::model::{Difficulty, QuestionType};
use quizforge_core::parser;

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    let raw = generate_document(50);
    let document = parser::parse(&raw, parser::PLAIN_TEXT);

    group.bench_function("multiple_choice", |b| {
        let request = request_for(QuestionType::MultipleChoice);
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            generate_questions(
                &mut rng,
                black_box("bench-doc"),
                black_box(&document),
                &request,
            )
        })
    });

    group.bench_function("flashcards", |b| {
        let request = request_for(QuestionType::Flashcards);
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            generate_questions(
                &mut rng,
                black_box("bench-doc"),
                black_box(&document),
                &request,
            )
        })
    });

    group.bench_function("writing_prompts", |b| {
        let request = request_for(QuestionType::Writing);
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            generate_questions(
                &mut rng,
                black_box("bench-doc"),
                black_box(&document),
                &request,
            )
        })
    });

    group.finish();
}

fn request_for(question_type: QuestionType) -> GenerationRequest {
    GenerationRequest {
        question_type,
        count: 10,
        difficulty: Difficulty::Intermediate,
        created_by: "bench".into(),
    }
}

fn generate_document(sections: usize) -> String {
    let mut s = String::from("Benchmark Study Guide\n");
    for i in 0..sections {
        s.push_str(&format!("# Section {i}\n"));
        s.push_str(&format!(
            "Mitochondria generate cellular energy through oxidative phosphorylation \
             reactions. Ribosomes translate messenger molecules into proteins inside \
             compartment {i}. Membranes regulate transport between cellular compartments \
             continuously.\n"
        ));
    }
    s
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
