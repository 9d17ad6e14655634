//! Producer/consumer overhead benchmarks
//!
//! Every variant is measured four ways, mirroring the driver: discarding each
//! value or summing them, through the bulk methods or through a count down
//! loop of single pulls. Throughput is reported per produced value.
//!
//! The multiplier defaults to 0.001 so one sample stays short; set
//! `FIBGEN_MULTIPLIER` to scale it up.

use criterion::{criterion_group, criterion_main, BenchmarkGroup, Criterion, Throughput};
use criterion::measurement::WallTime;
use fibgen::driver::*;
use fibgen::variant::{Baseline, Continuation, Flow, Sequence};
use fibgen::{BenchConfig, Variant};

const BENCH_MULTIPLIER: f64 = 0.001;

fn config() -> BenchConfig {
    BenchConfig::new(BENCH_MULTIPLIER)
        .and_then(BenchConfig::apply_env)
        .expect("invalid benchmark configuration")
}

fn bench_variant<V, F>(group: &mut BenchmarkGroup<WallTime>, n: u64, new: F)
where
    V: Variant,
    F: Fn() -> V,
{
    group.throughput(Throughput::Elements(n));

    // creating the producer is part of every invocation, as in the driver
    group.bench_function("each", |b| {
        b.iter(|| drain_discard(&mut new(), n).unwrap())
    });
    group.bench_function("each_with_loop", |b| {
        b.iter(|| drain_discard_countdown(&mut new(), n).unwrap())
    });
    group.bench_function("sum", |b| {
        b.iter(|| std::hint::black_box(drain_sum(&mut new(), n).unwrap()))
    });
    group.bench_function("sum_with_loop", |b| {
        b.iter(|| std::hint::black_box(drain_sum_countdown(&mut new(), n).unwrap()))
    });
}

fn baseline(c: &mut Criterion) {
    let n = config().iterations(fibgen::VariantKind::Baseline).get();
    let mut group = c.benchmark_group(Baseline::NAME);
    bench_variant(&mut group, n, Baseline::new);
    group.finish();
}

fn continuation(c: &mut Criterion) {
    let n = config().iterations(fibgen::VariantKind::Continuation).get();
    let mut group = c.benchmark_group(<Continuation>::NAME);
    bench_variant(&mut group, n, Continuation::new);
    group.finish();
}

fn sequence(c: &mut Criterion) {
    let n = config().iterations(fibgen::VariantKind::Sequence).get();
    let mut group = c.benchmark_group(Sequence::NAME);
    bench_variant(&mut group, n, Sequence::new);
    group.finish();
}

fn flow(c: &mut Criterion) {
    let n = config().iterations(fibgen::VariantKind::Flow).get();
    let mut group = c.benchmark_group(Flow::NAME);
    bench_variant(&mut group, n, || Flow::new().unwrap());
    group.finish();
}

// resume cost on a generator that is already running
fn single_resume(c: &mut Criterion) {
    let mut g = fibgen::fib::fibonacci();
    c.bench_function("single_resume", |b| {
        b.iter(|| std::hint::black_box(g.resume().unwrap()))
    });
}

criterion_group!(benches, baseline, continuation, sequence, flow, single_resume);
criterion_main!(benches);
