// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fqlbench::format::fql::{format_fql, to_fql, DEFAULT_PRINT_WIDTH};
use fqlbench::model::ExecutionResult;
use fqlbench::render::{highlight, render_result};

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.result`, `render.literal`, `render.highlight`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render.result");
    for case in fixtures::Case::all() {
        let result = fixtures::result(case);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let rendered = render_result(black_box(&result));
                black_box(rendered.body.lines.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.literal");
    for case in fixtures::Case::all() {
        let ExecutionResult::Success(success) = fixtures::result(case) else {
            panic!("fixture {} must be a success", case.id());
        };
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let source = to_fql(black_box(&success.data));
                let formatted = format_fql(&source.text, DEFAULT_PRINT_WIDTH);
                black_box(formatted.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("render.highlight");
    for case in fixtures::Case::all() {
        let ExecutionResult::Success(success) = fixtures::result(case) else {
            panic!("fixture {} must be a success", case.id());
        };
        let formatted = format_fql(&to_fql(&success.data).text, DEFAULT_PRINT_WIDTH);
        group.bench_function(case.id(), move |b| {
            b.iter(|| {
                let highlighted = highlight(black_box(&formatted));
                black_box(highlighted.references().len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);
