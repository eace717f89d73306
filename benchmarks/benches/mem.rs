// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Memory primitive benchmarks: checked copy / set / move against the
//! unchecked slice operations.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

// Fast mode: FAST_BENCH=1 cargo bench -p benchmarks --bench mem
fn is_fast_mode() -> bool {
    std::env::var("FAST_BENCH")
        .map(|v| v == "1")
        .unwrap_or(false)
}

fn configure_group(group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>) {
    if is_fast_mode() {
        group.measurement_time(std::time::Duration::from_millis(500));
        group.sample_size(10);
    } else {
        group.measurement_time(std::time::Duration::from_secs(3));
        group.sample_size(50);
    }
}

const SIZES: [usize; 4] = [16, 256, 4_096, 65_536];

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem_copy");
    configure_group(&mut group);

    for size in SIZES {
        let src = vec![0x5Au8; size];
        let mut dest = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("copy_from_slice", size), &size, |b, &s| {
            b.iter(|| dest[..s].copy_from_slice(black_box(&src[..s])));
        });

        group.bench_with_input(BenchmarkId::new("securec", size), &size, |b, &s| {
            b.iter(|| securec_mem::copy(&mut dest, black_box(&src), s).expect("failed to copy"));
        });
    }

    group.finish();
}

fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem_set");
    configure_group(&mut group);

    for size in SIZES {
        let mut dest = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("fill", size), &size, |b, _| {
            b.iter(|| dest.fill(black_box(0xAB)));
        });

        group.bench_with_input(BenchmarkId::new("securec", size), &size, |b, &s| {
            b.iter(|| securec_mem::set(&mut dest, black_box(0xAB), s).expect("failed to set"));
        });
    }

    group.finish();
}

fn bench_move_within(c: &mut Criterion) {
    let mut group = c.benchmark_group("mem_move_within");
    configure_group(&mut group);

    for size in SIZES {
        let mut buf = vec![0x11u8; size + 8];
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::new("securec", size), &size, |b, &s| {
            b.iter(|| securec_mem::move_within(&mut buf, 8, 0, s).expect("failed to move"));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_copy, bench_set, bench_move_within);
criterion_main!(benches);
