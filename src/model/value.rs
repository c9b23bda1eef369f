// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structured query results as an explicit variant type.
//!
//! The engine answers with JSON in one of two dialects: the "decoded" shape produced by the
//! JavaScript driver (`{ isoString }`, `{ coll: { name }, id }`) and the tagged wire format
//! (`{ "@time": .. }`, `{ "@ref": .. }`). Both are folded into [`Value`] here so the renderer can
//! match exhaustively instead of probing keys.

use serde_json::{Map, Number};

/// A pointer to a record: collection name plus document id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentRef {
    collection: String,
    id: String,
}

impl DocumentRef {
    pub fn new(collection: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            id: id.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The query that looks this document up, e.g. `Users.byId("123")`.
    pub fn lookup_query(&self) -> String {
        format!("{}.byId(\"{}\")", self.collection, self.id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    /// Field order is the order the engine sent them in.
    Object(Vec<(String, Value)>),
    /// ISO-8601 timestamp or date.
    Time(String),
    Ref(DocumentRef),
    /// A full document: its reference plus the remaining fields (excluding `coll`/`id`).
    Document {
        reference: DocumentRef,
        fields: Vec<(String, Value)>,
    },
    /// A bare module/collection identifier, e.g. the `coll` of a document.
    Module(String),
    /// A shape this workbench does not know how to show.
    Unsupported { shape: String },
}

impl Value {
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(value) => Self::Bool(value),
            serde_json::Value::Number(value) => Self::Number(value),
            serde_json::Value::String(value) => Self::String(value),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => classify_object(map),
        }
    }

    /// Whether a field holding this value is left out of a rendered object literal.
    pub fn is_omitted_field(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Object(fields) => fields.is_empty(),
            Self::Array(items) => items.is_empty(),
            _ => false,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Self::from_json(json)
    }
}

fn classify_object(mut map: Map<String, serde_json::Value>) -> Value {
    if map.len() == 1 {
        if let Some(tag) = map.keys().next().filter(|key| key.starts_with('@')).cloned() {
            let inner = map.remove(&tag).unwrap_or(serde_json::Value::Null);
            return classify_tagged(&tag, inner);
        }
    }

    if let Some(iso) = map.get("isoString") {
        if map.len() == 1 {
            return match iso {
                serde_json::Value::String(iso) => Value::Time(iso.clone()),
                _ => Value::Unsupported {
                    shape: "isoString".to_owned(),
                },
            };
        }
    }

    let collection = map.get("coll").and_then(module_name);
    let id = map.get("id").and_then(|id| id.as_str()).map(str::to_owned);
    if let (Some(collection), Some(id)) = (collection, id) {
        map.remove("coll");
        map.remove("id");
        let reference = DocumentRef::new(collection, id);
        // A bare reference may still carry its timestamp.
        if map.keys().all(|key| key == "ts") {
            return Value::Ref(reference);
        }
        return Value::Document {
            reference,
            fields: convert_fields(map),
        };
    }

    Value::Object(convert_fields(map))
}

fn classify_tagged(tag: &str, inner: serde_json::Value) -> Value {
    match (tag, inner) {
        ("@time" | "@date", serde_json::Value::String(iso)) => Value::Time(iso),
        ("@int" | "@long", serde_json::Value::String(raw)) => raw
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or_else(|_| unsupported(tag)),
        ("@double", serde_json::Value::String(raw)) => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or_else(|| unsupported(tag)),
        ("@mod", serde_json::Value::String(name)) => Value::Module(name),
        ("@ref", serde_json::Value::Object(inner)) => {
            let collection = inner.get("coll").and_then(module_name);
            let id = inner.get("id").and_then(|id| id.as_str());
            match (collection, id) {
                (Some(collection), Some(id)) => Value::Ref(DocumentRef::new(collection, id)),
                _ => unsupported(tag),
            }
        }
        ("@doc" | "@set", serde_json::Value::Object(inner)) => classify_object(inner),
        ("@object", serde_json::Value::Object(inner)) => Value::Object(convert_fields(inner)),
        _ => unsupported(tag),
    }
}

fn convert_fields(map: Map<String, serde_json::Value>) -> Vec<(String, Value)> {
    map.into_iter()
        .map(|(key, value)| {
            let value = match (key.as_str(), module_name(&value)) {
                ("coll", Some(name)) => Value::Module(name),
                _ => Value::from_json(value),
            };
            (key, value)
        })
        .collect()
}

/// `{ name: "Users" }` (driver shape) or `{ "@mod": "Users" }` (tagged shape).
fn module_name(value: &serde_json::Value) -> Option<String> {
    let object = value.as_object()?;
    object
        .get("name")
        .or_else(|| object.get("@mod"))
        .and_then(|name| name.as_str())
        .map(str::to_owned)
}

fn unsupported(shape: &str) -> Value {
    Value::Unsupported {
        shape: shape.to_owned(),
    }
}
