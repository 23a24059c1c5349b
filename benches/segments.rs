//
// Copyright 2025 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

use criterion::{black_box, BenchmarkId, Criterion};
use intensity_segments::IntensitySegments;

pub fn bench_add(c: &mut Criterion) {
    c.bench_function("add 1000 scattered ranges", |b| {
        b.iter(|| {
            let mut segments = IntensitySegments::new();
            for i in 0..1000 {
                let base = (i * 7) % 1000;
                segments.add(black_box(base), black_box(base + 20), 1);
            }
        });
    });
}

pub fn bench_add_and_undo(c: &mut Criterion) {
    c.bench_function("add + subtract 1000 ranges", |b| {
        b.iter(|| {
            let mut segments = IntensitySegments::new();
            for i in 0..1000 {
                let base = (i * 7) % 1000;
                segments.add(base, base + 20, 1);
            }
            for i in 0..1000 {
                let base = (i * 7) % 1000;
                segments.add(base, base + 20, -1);
            }
            assert!(segments.is_empty());
        });
    });
}

pub fn bench_dense_adds(c: &mut Criterion) {
    c.bench_function("dense overlapping adds", |b| {
        b.iter(|| {
            let mut segments = IntensitySegments::new();
            for _ in 0..500 {
                segments.add(black_box(0), black_box(1000), 1);
            }
        });
    });
}

pub fn bench_sparse_adds(c: &mut Criterion) {
    c.bench_function("sparse adds", |b| {
        b.iter(|| {
            let mut segments = IntensitySegments::new();
            for i in 0..1000 {
                segments.add(black_box(i * 100), black_box(i * 100 + 10), 1);
            }
        });
    });
}

pub fn bench_set_over_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    // A set that supersedes `size` breakpoints at once
    for size in [10i64, 100, 1000].iter() {
        group.bench_with_input(BenchmarkId::new("supersede", size), size, |b, &size| {
            let mut base = IntensitySegments::new();
            for i in 0..size {
                base.add(i * 10, i * 10 + 5, 1);
            }
            b.iter(|| {
                let mut segments = base.clone();
                segments.set(black_box(-1), black_box(size * 10 + 1), 2);
                black_box(segments.len());
            });
        });
    }

    group.finish();
}

pub fn bench_serialize(c: &mut Criterion) {
    let mut segments = IntensitySegments::new();
    for i in 0..1000 {
        segments.add(i * 10, i * 10 + 15, (i % 5) - 2);
    }
    c.bench_function("serialize 1000 breakpoints", |b| {
        b.iter(|| black_box(segments.serialize()));
    });
}
