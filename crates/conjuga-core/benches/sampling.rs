use criterion::{black_box, criterion_group, criterion_main, Criterion};

use conjuga_core::quiz::{clean_answer, mask_first};
use conjuga_core::sampler::{Difficulty, DifficultySampler};

fn bench_sampling(c: &mut Criterion) {
    let difficulty = Difficulty::new(6).unwrap();

    c.bench_function("sample_10_of_1000", |b| {
        let mut sampler = DifficultySampler::with_seed(1);
        b.iter(|| sampler.sample(black_box(difficulty), 10, black_box(1000)))
    });

    c.bench_function("sample_1000_of_5000", |b| {
        let mut sampler = DifficultySampler::with_seed(1);
        b.iter(|| sampler.sample(black_box(difficulty), 1000, black_box(5000)))
    });
}

fn bench_answers(c: &mut Criterion) {
    c.bench_function("clean_answer", |b| {
        b.iter(|| clean_answer(black_box("¿¡Hablábamos, nosotros!?")))
    });

    c.bench_function("mask_first", |b| {
        b.iter(|| {
            mask_first(
                black_box("Nosotros hablábamos de todo cuando éramos niños."),
                black_box("hablábamos"),
            )
        })
    });
}

criterion_group!(benches, bench_sampling, bench_answers);
criterion_main!(benches);
