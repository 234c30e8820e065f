//! Benchmarks pour le score de propension

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gluco_core::{GeneRanker, GeneRecord, PropensityScorer};
use std::time::Duration;

fn synthetic_genes(count: usize, promoter_len: usize) -> Vec<GeneRecord> {
    let motif_rich = "gataaggaccgacaaaccctaaacggg";
    (0..count)
        .map(|i| {
            let promoter: String = motif_rich.chars().cycle().skip(i % 7).take(promoter_len).collect();
            GeneRecord::new(format!("AT{i:05}"), format!("{promoter}ATGGCCTAA"))
        })
        .collect()
}

fn benchmark_scoring(c: &mut Criterion) {
    let scorer = PropensityScorer::default();
    let test_data = vec![
        ("short", 100),   // 100 pb
        ("medium", 1000), // 1 kb
        ("long", 3000),   // 3 kb
    ];

    let mut group = c.benchmark_group("Propensity Scoring");
    group.measurement_time(Duration::from_secs(5));

    for (name, len) in test_data {
        let gene = &synthetic_genes(1, len)[0];
        group.bench_function(format!("score_{}", name), |b| {
            b.iter(|| scorer.score_sequence(black_box(gene.sequence())));
        });
    }

    group.finish();
}

fn benchmark_sequential_vs_parallel(c: &mut Criterion) {
    let scorer = PropensityScorer::default();
    let genes = synthetic_genes(2000, 1000);

    let mut group = c.benchmark_group("Database Scoring");
    group.sample_size(10);

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let mut batch = genes.clone();
            scorer.score_all(black_box(&mut batch), false);
        });
    });

    group.bench_function("parallel", |b| {
        b.iter(|| {
            let mut batch = genes.clone();
            scorer.score_all(black_box(&mut batch), true);
        });
    });

    group.bench_function("score_and_rank_top20", |b| {
        b.iter(|| {
            let mut batch = genes.clone();
            scorer.score_all(&mut batch, true);
            GeneRanker::new(20).select(black_box(batch))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_scoring, benchmark_sequential_vs_parallel);
criterion_main!(benches);
