// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use fqlbench::model::ExecutionResult;
use serde_json::{json, Value as Json};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// One order document with a handful of references.
    Small,
    /// A page of documents, each with nested references and arrays.
    WidePage,
    /// Deeply nested objects with long string values.
    DeepNested,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::WidePage => "wide_page",
            Self::DeepNested => "deep_nested",
        }
    }

    pub fn all() -> [Case; 3] {
        [Self::Small, Self::WidePage, Self::DeepNested]
    }
}

fn doc_ref(collection: &str, id: usize) -> Json {
    json!({ "coll": { "name": collection }, "id": id.to_string() })
}

fn order(idx: usize) -> Json {
    let items = (0..4)
        .map(|item| {
            json!({
                "product": doc_ref("Products", 300 + (idx + item) % 50),
                "quantity": item + 1,
                "discounts": [],
            })
        })
        .collect::<Vec<_>>();
    json!({
        "id": (1000 + idx).to_string(),
        "coll": { "name": "Orders" },
        "ts": { "isoString": "2023-06-14T09:12:44.530Z" },
        "customer": doc_ref("Users", 100 + idx % 20),
        "items": items,
        "total": 12.5 * (idx as f64 + 1.0),
        "shipped": idx % 2 == 0,
        "note": null,
    })
}

fn nested(depth: usize) -> Json {
    if depth == 0 {
        return json!({
            "text": "lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod",
            "owner": doc_ref("Users", depth),
        });
    }
    json!({
        "level": depth,
        "label": format!("level {depth} with a label that is long enough to force breaks"),
        "child": nested(depth - 1),
        "siblings": [nested_leaf(depth), nested_leaf(depth + 1)],
    })
}

fn nested_leaf(idx: usize) -> Json {
    json!({ "idx": idx, "ref": doc_ref("Products", idx) })
}

pub fn response(case: Case) -> Json {
    let data = match case {
        Case::Small => order(0),
        Case::WidePage => {
            let data = (0..200).map(order).collect::<Vec<_>>();
            json!({ "data": data, "after": "next-page-cursor" })
        }
        Case::DeepNested => nested(12),
    };
    json!({
        "data": data,
        "static_type": "Any",
        "stats": {
            "query_time_ms": 42,
            "compute_ops": 3,
            "read_ops": 200,
            "write_ops": 0,
            "storage_bytes_read": 1_048_576,
            "storage_bytes_write": 0,
        },
    })
}

pub fn result(case: Case) -> ExecutionResult {
    ExecutionResult::from_response(response(case))
}
