use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::{language, parser, terms};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");

    // Generate plain-text documents of various sizes
    let small = generate_document(5);
    let medium = generate_document(50);
    let large = generate_document(200);

    group.bench_function("5_sections", |b| {
        b.iter(|| parser::parse(black_box(&small), black_box(parser::PLAIN_TEXT)))
    });

    group.bench_function("50_sections", |b| {
        b.iter(|| parser::parse(black_box(&medium), black_box(parser::PLAIN_TEXT)))
    });

    group.bench_function("200_sections", |b| {
        b.iter(|| parser::parse(black_box(&large), black_box(parser::PLAIN_TEXT)))
    });

    group.finish();
}

fn bench_language_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_language");

    let english = generate_document(20);
    let italian = "Questo documento descrive la struttura della cellula. \
        Le membrane regolano il trasporto dove serve, anche quando la pressione cambia molto. "
        .repeat(20);

    group.bench_function("english", |b| {
        b.iter(|| language::detect(black_box(&english)))
    });

    group.bench_function("italian", |b| {
        b.iter(|| language::detect(black_box(&italian)))
    });

    group.finish();
}

fn bench_key_terms(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_terms");

    let medium = generate_document(50);
    let large = generate_document(200);

    group.bench_function("50_sections", |b| {
        b.iter(|| terms::extract_key_terms(black_box(&medium)))
    });

    group.bench_function("200_sections", |b| {
        b.iter(|| terms::extract_key_terms(black_box(&large)))
    });

    group.finish();
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

criterion_group!(
    benches,
    bench_parse,
    bench_language_detection,
    bench_key_terms
);
criterion_main!(benches);
