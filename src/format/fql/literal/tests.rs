// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::json;

use super::{to_fql, RenderDiagnostic};
use crate::format::fql::reference::decode_reference;
use crate::model::{DocumentRef, Value};

fn render(json: serde_json::Value) -> String {
    to_fql(&Value::from_json(json)).text
}

#[test]
fn empty_fields_are_omitted() {
    assert_eq!(render(json!({ "name": "Ada", "age": 30, "tags": [] })), r#"{name: "Ada", age: 30}"#);
    assert_eq!(render(json!({ "a": {}, "b": null, "c": false })), "{c: false}");
}

#[test]
fn nested_reference_becomes_clickable_lookup() {
    let text = render(json!({ "owner": { "coll": { "name": "Users" }, "id": "123" } }));
    let start = text.find("Users.byId(\"").expect("lookup expression");
    let token_start = start + "Users.byId(\"".len();
    let token_len = text[token_start..].find('"').expect("closing quote");
    let token = &text[token_start..token_start + token_len];
    assert_eq!(decode_reference(token), Some(DocumentRef::new("Users", "123")));
}

#[test]
fn top_level_reference_is_a_lookup_too() {
    assert_eq!(
        render(json!({ "coll": { "name": "Users" }, "id": "9" })),
        r#"Users.byId("collection:Users:9")"#
    );
}

#[test]
fn top_level_document_is_spelled_out_with_bare_collection() {
    let text = render(json!({
        "id": "1",
        "coll": { "name": "Users" },
        "ts": { "isoString": "2023-01-01T00:00:00Z" },
        "name": "Ada",
    }));
    assert_eq!(text, r#"{coll: Users, id: "1", ts: Time("2023-01-01T00:00:00Z"), name: "Ada"}"#);
}

#[test]
fn documents_inside_arrays_stay_expanded_but_nested_documents_collapse() {
    let text = render(json!({
        "data": [{
            "id": "1",
            "coll": { "name": "Orders" },
            "customer": {
                "id": "7",
                "coll": { "name": "Users" },
                "name": "Grace",
            },
        }],
    }));
    assert_eq!(
        text,
        r#"{data: [{coll: Orders, id: "1", customer: Users.byId("collection:Users:7")}]}"#
    );
}

#[test]
fn arrays_render_every_element_in_order() {
    assert_eq!(render(json!([1, "two", true, null, [3]])), r#"[1, "two", true, null, [3]]"#);
}

#[test]
fn strings_and_keys_are_escaped() {
    assert_eq!(
        render(json!({ "first name": "a \"quoted\"\nline", "ok_1": "\\" })),
        r#"{"first name": "a \"quoted\"\nline", ok_1: "\\"}"#
    );
}

#[test]
fn named_documents_keep_module_identifier() {
    assert_eq!(
        render(json!({ "coll": { "name": "Collection" }, "name": "Users" })),
        r#"{coll: Collection, name: "Users"}"#
    );
}

#[test]
fn unsupported_values_are_skipped_and_reported() {
    let source = to_fql(&Value::from_json(json!({
        "a": 1,
        "blob": { "@bytes": "AAEC" },
        "list": [{ "@stream": "x" }, 2],
    })));
    assert_eq!(source.text, "{a: 1, list: [2]}");
    assert_eq!(
        source.diagnostics,
        vec![
            RenderDiagnostic { path: "$.blob".to_owned(), shape: "@bytes".to_owned() },
            RenderDiagnostic { path: "$.list[0]".to_owned(), shape: "@stream".to_owned() },
        ]
    );
}

#[test]
fn primitives_render_as_literals() {
    assert_eq!(render(json!(2)), "2");
    assert_eq!(render(json!(1.5)), "1.5");
    assert_eq!(render(json!("hi")), "\"hi\"");
    assert_eq!(render(json!(null)), "null");
    assert_eq!(render(json!({})), "{}");
}
