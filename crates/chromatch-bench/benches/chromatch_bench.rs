//! Benchmarks for chromatch operations.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chromatch_color::{convert, convert_chain, merge, ChannelStats, Pipeline, TransferOptions};
use chromatch_core::{codec, BgrBuffer, ColorSpaceTag};

fn test_buffer(width: u32, height: u32, seed: u8) -> BgrBuffer {
    let data = (0..width as usize * height as usize * 3)
        .map(|i| (i.wrapping_mul(31) as u8).wrapping_add(seed))
        .collect();
    BgrBuffer::new(data, width, height).unwrap()
}

/// Benchmark the pixel codec.
fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for size in [64u32, 256, 1024] {
        let buf = test_buffer(size, size, 0);
        let img = codec::decode(&buf, false);
        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(BenchmarkId::new("decode", size), &buf, |b, buf| {
            b.iter(|| codec::decode(black_box(buf), true))
        });
        group.bench_with_input(BenchmarkId::new("encode", size), &img, |b, img| {
            b.iter(|| codec::encode(black_box(img)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark single conversion edges and chains.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");

    let img = codec::decode(&test_buffer(512, 512, 7), true);
    let lms = convert(&img, ColorSpaceTag::Lms).unwrap();
    let lab = convert(&lms, ColorSpaceTag::Lab).unwrap();
    group.throughput(Throughput::Elements(img.len() as u64));

    group.bench_function("rgb_to_lms", |b| {
        b.iter(|| convert(black_box(&img), ColorSpaceTag::Lms).unwrap())
    });
    group.bench_function("lms_to_lab", |b| {
        b.iter(|| convert(black_box(&lms), ColorSpaceTag::Lab).unwrap())
    });
    group.bench_function("lab_to_rgb_chain", |b| {
        b.iter(|| convert_chain(black_box(&lab), &[ColorSpaceTag::Lms], ColorSpaceTag::Rgb).unwrap())
    });
    group.bench_function("rgb_to_hsl", |b| {
        b.iter(|| convert(black_box(&img), ColorSpaceTag::Hsl).unwrap())
    });

    group.finish();
}

/// Benchmark statistics reduction.
fn bench_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("stats");

    for size in [64u32, 512, 1024] {
        let img = codec::decode(&test_buffer(size, size, 3), false);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("compute", size), &img, |b, img| {
            b.iter(|| ChannelStats::compute(black_box(img)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark complete merges.
fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    group.sample_size(20);

    let source = test_buffer(512, 512, 11);
    let target = test_buffer(512, 512, 97);
    group.throughput(Throughput::Elements(512 * 512));

    for pipeline in Pipeline::ALL {
        let options = TransferOptions::only(pipeline);
        group.bench_function(BenchmarkId::new("pipeline", pipeline), |b| {
            b.iter(|| merge(black_box(&source), black_box(&target), &options))
        });
    }
    group.bench_function("both", |b| {
        b.iter(|| merge(black_box(&source), black_box(&target), &TransferOptions::default()))
    });

    group.finish();
}

criterion_group!(benches, bench_codec, bench_convert, bench_stats, bench_merge);
criterion_main!(benches);
