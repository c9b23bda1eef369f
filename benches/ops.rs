// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use fqlbench::model::{Session, TabId, TabOverrides};
use fqlbench::ops::{apply_op, Delta, TabOp};
use fqlbench::store::{MemoryStore, SessionStore};

mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `ops.apply`, `store.session`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn checksum_delta(delta: &Delta) -> u64 {
    let mut acc = 0u64;
    acc = acc.wrapping_mul(131).wrapping_add(delta.created.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(delta.updated.len() as u64);
    acc = acc.wrapping_mul(131).wrapping_add(delta.removed.len() as u64);
    acc.wrapping_mul(131).wrapping_add(delta.activated.is_some() as u64)
}

fn session_with_tabs(count: usize) -> Session {
    let mut session = Session::new();
    for idx in 0..count {
        let overrides = TabOverrides::with_content(format!("Orders.byId(\"{idx}\")"));
        apply_op(&mut session, TabOp::CreateTab(overrides)).expect("create tab");
    }
    session
}

fn tab_ids(session: &Session) -> Vec<TabId> {
    session.tabs().iter().map(|tab| tab.tab_id().clone()).collect()
}

fn edit_ops(ids: &[TabId], count: usize) -> Vec<TabOp> {
    (0..count)
        .map(|idx| {
            let tab_id = ids[idx % ids.len()].clone();
            match idx % 4 {
                0 => TabOp::SetActiveTab(tab_id),
                1 => TabOp::UpdateContent {
                    tab_id,
                    content: format!("Users.all().reverse() // {idx}"),
                },
                2 => TabOp::RenameTab {
                    tab_id,
                    label: format!("Tab {idx}"),
                },
                _ => TabOp::ReorderTab {
                    dragged: tab_id,
                    target: ids[(idx + 1) % ids.len()].clone(),
                },
            }
        })
        .collect()
}

fn benches_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("ops.apply");
    for (case, tabs) in [("small", 4usize), ("many_tabs", 64)] {
        let session = session_with_tabs(tabs);
        let ops = edit_ops(&tab_ids(&session), 256);
        group.throughput(Throughput::Elements(ops.len() as u64));
        group.bench_function(case, |b| {
            b.iter_batched(
                || (session.clone(), ops.clone()),
                |(mut session, ops)| {
                    let mut acc = 0u64;
                    for op in ops {
                        if let Ok(delta) = apply_op(&mut session, op) {
                            acc = acc.wrapping_add(checksum_delta(&delta));
                        }
                    }
                    black_box(acc)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.bench_function("open_or_create_dedup", |b| {
        let session = session_with_tabs(64);
        b.iter_batched(
            || session.clone(),
            |mut session| {
                let overrides = TabOverrides::with_content("Orders.byId(\"63\")");
                let delta = apply_op(&mut session, TabOp::OpenOrCreateTab(overrides))
                    .expect("open or create");
                black_box(checksum_delta(&delta))
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();

    let mut group = c.benchmark_group("store.session");
    for (case, tabs) in [("small", 4usize), ("many_tabs", 64)] {
        let session = session_with_tabs(tabs);
        let store = SessionStore::new(MemoryStore::new());
        group.bench_function(case, |b| {
            b.iter(|| {
                store.save(black_box(&session)).expect("save");
                let loaded = store.load().expect("load");
                black_box(loaded.tabs().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ops
}
criterion_main!(benches);
