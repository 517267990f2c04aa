//! Criterion micro-benchmarks for each dgemv kernel and the reference.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dgemv::harness::RandomFiller;
use dgemv::{Avx2Kernel, DgemvKernel, ScalarKernel, UnrolledKernel, reference_dgemv};

fn inputs(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let mut filler = RandomFiller::seeded(0x5eed);
    let mut a = vec![0.0; n * n];
    let mut x = vec![0.0; n];
    let mut y = vec![0.0; n];
    filler.fill(&mut a);
    filler.fill(&mut x);
    filler.fill(&mut y);
    (a, x, y)
}

fn bench_kernel<K: DgemvKernel>(c: &mut Criterion, kernel: K) {
    let mut group = c.benchmark_group(format!("dgemv/{}", kernel.name()));

    for &n in &[64usize, 256, 1023, 1024] {
        let (a, x, mut y) = inputs(n);
        group.throughput(Throughput::Elements((2 * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| kernel.dgemv(n, black_box(&a), black_box(&x), black_box(&mut y)))
        });
    }

    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    bench_kernel(c, ScalarKernel);
    bench_kernel(c, UnrolledKernel);
    bench_kernel(c, Avx2Kernel);
}

fn bench_reference(c: &mut Criterion) {
    let mut group = c.benchmark_group("dgemv/reference");

    for &n in &[64usize, 256, 1024] {
        let (a, x, mut y) = inputs(n);
        group.throughput(Throughput::Elements((2 * n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| reference_dgemv(n, black_box(&a), black_box(&x), black_box(&mut y)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_kernels, bench_reference);
criterion_main!(benches);
