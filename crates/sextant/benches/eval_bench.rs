//! Benchmarks for expression evaluation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use sextant_eval::EvalContext;

fn bench_evaluate(c: &mut Criterion) {
    let ctx = EvalContext::new();
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("arithmetic", |b| {
        b.iter(|| ctx.evaluate(black_box("2^10 + 17*3 - 128/4")))
    });

    group.bench_function("scientific", |b| {
        b.iter(|| ctx.evaluate(black_box("sin(pi/6) + sqrt(2) * log(e^2)")))
    });

    group.bench_function("long_chain", |b| {
        let expr = format!("1+2*3-4/5+6^2 mod 7{}", "+sqrt(16)".repeat(20));
        b.iter(|| ctx.evaluate(black_box(&expr)))
    });

    group.finish();
}

fn bench_context_construction(c: &mut Criterion) {
    c.bench_function("context_new", |b| b.iter(EvalContext::new));
}

criterion_group!(benches, bench_evaluate, bench_context_construction);
criterion_main!(benches);
