//! Criterion benchmarks for the classification and mapping hot path.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use legal_case_analyzer::catalog::StatuteCatalog;
use legal_case_analyzer::classifier::CaseClassifier;
use legal_case_analyzer::mapper::StatuteMapper;
use std::sync::Arc;

fn bench_classify(c: &mut Criterion) {
    let classifier = CaseClassifier::new().unwrap();
    let texts = [
        "theft someone stole my bike from the parking lot",
        "he was stabbed during an argument but survived the attack",
        "someone hacked my instagram account and posted fake images",
        "my neighbor's dog barks loudly at night",
    ];

    c.bench_function("classify_mixed_cases", |b| {
        b.iter(|| {
            for text in &texts {
                black_box(classifier.classify(black_box(text)));
            }
        })
    });
}

fn bench_map_statutes(c: &mut Criterion) {
    let classifier = CaseClassifier::new().unwrap();
    let mapper = StatuteMapper::new(Arc::new(StatuteCatalog::builtin()));
    let categories =
        classifier.classify("robbers threatened me with a knife and stole my wallet");

    c.bench_function("map_statutes_multi_category", |b| {
        b.iter(|| black_box(mapper.map_statutes(black_box(&categories))))
    });
}

criterion_group!(benches, bench_classify, bench_map_statutes);
criterion_main!(benches);
