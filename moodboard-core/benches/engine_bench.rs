//! Criterion benchmarks for MoodBoard hot paths.
//!
//! Benchmarks:
//! 1. Single-title classification (hit and miss)
//! 2. Batch processing at increasing batch sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use moodboard_core::feed::fallback_headlines;
use moodboard_core::{classify, process, Lexicon, RawHeadline};

fn make_batch(n: usize) -> Vec<RawHeadline> {
    let base = fallback_headlines();
    (0..n).map(|i| base[i % base.len()].clone()).collect()
}

fn bench_classify(c: &mut Criterion) {
    let lexicon = Lexicon::builtin();
    let mut group = c.benchmark_group("classify");
    group.bench_function("hit", |b| {
        b.iter(|| classify(lexicon, black_box("焦點股》信驊：外資上修目標價 噴出再創高")))
    });
    group.bench_function("miss", |b| {
        b.iter(|| classify(lexicon, black_box("川普啟動「創世紀任務」 攜手輝達、超微等巨頭加速聯邦AI研究")))
    });
    group.finish();
}

fn bench_process(c: &mut Criterion) {
    let lexicon = Lexicon::builtin();
    let mut group = c.benchmark_group("process");
    for n in [10usize, 100, 1_000] {
        let batch = make_batch(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &batch, |b, batch| {
            b.iter(|| process(lexicon, black_box(batch)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_process);
criterion_main!(benches);
