// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use triton::store::{FolderSlots, SessionStore};

mod fixtures;
mod profiler;

use fixtures::TempDir;

// Benchmark identity (keep stable):
// - Group name in this file: `store.envelope`
// - Case IDs (the string after the `/`) must remain stable across refactors
//   so results stay comparable over time (e.g. `compute_only_small`,
//   `io_medium`).
fn benches_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("store.envelope");

    group.bench_function("compute_only_small", |b| {
        let graph = fixtures::small_graph();
        let mut store = SessionStore::in_memory();
        b.iter(|| {
            store.save_graph(black_box(&graph)).expect("save graph");
            black_box(store.load_graph())
        });
    });

    group.bench_function("compute_only_medium", |b| {
        let graph = fixtures::medium_graph();
        let mut store = SessionStore::in_memory();
        b.iter(|| {
            store.save_graph(black_box(&graph)).expect("save graph");
            black_box(store.load_graph())
        });
    });

    group.bench_function("io_medium", |b| {
        let graph = fixtures::medium_graph();
        b.iter_batched(
            || {
                let tmp = TempDir::new("store_io");
                let store =
                    SessionStore::new(Box::new(FolderSlots::new(tmp.path().join("session"))));
                (tmp, store)
            },
            |(tmp, mut store)| {
                store.save_graph(black_box(&graph)).expect("save graph");
                black_box(store.load_graph());
                drop(tmp);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_store
}
criterion_main!(benches);
