// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use criterion::{BenchmarkId, Criterion, Throughput};
use eddy_stream::{from_iter, ZipWithExt};
use futures::executor::block_on;
use futures::StreamExt;
use std::hint::black_box;

pub fn bench_zip_with(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_with");
    let sizes = [100usize, 1_000, 10_000];

    for &size in &sizes {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |bencher, &size| {
            bencher.iter(|| {
                block_on(async {
                    let left = from_iter(0..size);
                    let right = from_iter((0..size).map(|n| n as u64 * 2));

                    let count = left.zip_with(right).count().await;
                    black_box(count);
                });
            });
        });
    }

    group.finish();
}
