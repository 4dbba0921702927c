//! Benchmarks for tiered segmentation and assembly

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mdfic_core::{assemble, segment};
use std::hint::black_box;

/// Generate a manuscript of roughly `size_kb` kilobytes
fn generate_manuscript(size_kb: usize) -> String {
    let paragraph = "The wind turned at dusk, and the boats came in one by one. \
                     Nobody spoke on the dock! Who would, with the sky like that? \
                     Old Tom coiled his rope, slowly, carefully, the way he always had.\n\n";
    paragraph.repeat((size_kb * 1024) / paragraph.len() + 1)
}

fn benchmark_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("segment");

    for size_kb in [1, 16, 256] {
        let text = generate_manuscript(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("post_budget", size_kb), &text, |b, text| {
            b.iter(|| segment(black_box(text), 272));
        });
        group.bench_with_input(BenchmarkId::new("edit_budget", size_kb), &text, |b, text| {
            b.iter(|| segment(black_box(text), 11_992));
        });
    }

    group.finish();
}

fn benchmark_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble");
    let text = generate_manuscript(64);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("thread_64KB", |b| {
        b.iter(|| assemble(black_box(&text), 280, "\\n#fiction").unwrap());
    });

    group.finish();
}

fn benchmark_unsplittable(c: &mut Criterion) {
    let text = "x".repeat(1024 * 1024);
    c.bench_function("unsplittable_1MB", |b| {
        b.iter(|| segment(black_box(&text), 272));
    });
}

criterion_group!(
    benches,
    benchmark_segment,
    benchmark_assemble,
    benchmark_unsplittable
);
criterion_main!(benches);
