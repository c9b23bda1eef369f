// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::{json, Value as Json};

const TS: &str = "2023-06-14T09:12:44.530Z";

fn ts() -> Json {
    json!({ "isoString": TS })
}

fn doc_ref(collection: &str, id: &str) -> Json {
    json!({ "coll": { "name": collection }, "id": id })
}

/// Demo collections as `(name, documents)`, in driver JSON shape.
pub(crate) fn demo_collections() -> Vec<(&'static str, Vec<Json>)> {
    vec![
        (
            "Users",
            vec![
                json!({
                    "id": "101",
                    "coll": { "name": "Users" },
                    "ts": ts(),
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "roles": ["admin", "analyst"],
                    "address": { "city": "London", "street": "12 St James's Square" },
                    "tags": [],
                }),
                json!({
                    "id": "102",
                    "coll": { "name": "Users" },
                    "ts": ts(),
                    "name": "Grace Hopper",
                    "email": "grace@example.com",
                    "roles": ["analyst"],
                    "address": {},
                    "manager": doc_ref("Users", "101"),
                }),
            ],
        ),
        (
            "Products",
            vec![
                json!({
                    "id": "301",
                    "coll": { "name": "Products" },
                    "ts": ts(),
                    "name": "Difference Engine",
                    "price": 19.75,
                    "stock": 4,
                }),
                json!({
                    "id": "302",
                    "coll": { "name": "Products" },
                    "ts": ts(),
                    "name": "Punch Cards \"Deluxe\"",
                    "price": 2.5,
                    "stock": 1200,
                }),
            ],
        ),
        (
            "Orders",
            vec![json!({
                "id": "201",
                "coll": { "name": "Orders" },
                "ts": ts(),
                "customer": doc_ref("Users", "101"),
                "items": [
                    { "product": doc_ref("Products", "301"), "quantity": 2 },
                    { "product": doc_ref("Products", "302"), "quantity": 10 },
                ],
                "total": 64.5,
                "shipped": false,
                "note": null,
                "placedAt": ts(),
            })],
        ),
    ]
}

/// A page of `Collection.all()` results: one named document per collection.
pub(crate) fn demo_collection_page() -> Json {
    let data = demo_collections()
        .into_iter()
        .map(|(name, _)| {
            json!({
                "coll": { "name": "Collection" },
                "name": name,
                "ts": ts(),
                "indexes": {},
                "constraints": [],
            })
        })
        .collect::<Vec<_>>();
    json!({ "data": data })
}

#[cfg(test)]
pub(crate) fn order_response() -> Json {
    let (_, orders) = demo_collections()
        .into_iter()
        .find(|(name, _)| *name == "Orders")
        .expect("orders fixture");
    json!({
        "data": orders[0].clone(),
        "stats": {
            "query_time_ms": 14,
            "compute_ops": 1,
            "read_ops": 1,
            "write_ops": 0,
            "storage_bytes_read": 2560,
            "storage_bytes_write": 0,
        },
    })
}
