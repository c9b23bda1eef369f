// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! An offline engine over a handful of fixture collections.
//!
//! It understands just enough FQL to browse: `Collection.all()`, `<C>.all()`,
//! `<C>.all().reverse()` and `<C>.byId("<id>")`.

use std::sync::OnceLock;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use regex::Regex;
use serde_json::{json, Value as Json};

use crate::model::fixtures::{demo_collection_page, demo_collections};

use super::{ExecError, QueryExecutor};

#[derive(Debug, Clone, PartialEq, Eq)]
enum DemoQuery {
    Collections,
    All { collection: String, reverse: bool },
    ById { collection: String, id: String },
}

fn all_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\.all\(\)(\.reverse\(\))?$").expect("valid regex")
    })
}

fn by_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"^([A-Za-z_][A-Za-z0-9_]*)\.byId\(\s*"([^"\\]*)"\s*\)$"#).expect("valid regex")
    })
}

fn parse_query(query: &str) -> Option<DemoQuery> {
    let query = query.trim().trim_end_matches(';').trim_end();
    if let Some(captures) = all_pattern().captures(query) {
        let collection = captures[1].to_owned();
        if collection == "Collection" {
            return captures
                .get(2)
                .is_none()
                .then_some(DemoQuery::Collections);
        }
        return Some(DemoQuery::All {
            collection,
            reverse: captures.get(2).is_some(),
        });
    }
    let captures = by_id_pattern().captures(query)?;
    Some(DemoQuery::ById {
        collection: captures[1].to_owned(),
        id: captures[2].to_owned(),
    })
}

#[derive(Debug, Clone)]
pub struct DemoExecutor {
    collections: Vec<(String, Vec<Json>)>,
    latency: Duration,
}

impl Default for DemoExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoExecutor {
    pub fn new() -> Self {
        Self {
            collections: demo_collections()
                .into_iter()
                .map(|(name, docs)| (name.to_owned(), docs))
                .collect(),
            latency: Duration::ZERO,
        }
    }

    /// Delays every response, so the running state is visible in the UI.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn documents(&self, collection: &str) -> Option<&[Json]> {
        self.collections
            .iter()
            .find(|(name, _)| name == collection)
            .map(|(_, docs)| docs.as_slice())
    }

    fn answer(&self, query: &str) -> Json {
        let Some(parsed) = parse_query(query) else {
            return failure(
                "invalid_query",
                "the demo engine only understands Collection.all(), <C>.all(), <C>.all().reverse() and <C>.byId(\"<id>\")",
            );
        };

        match parsed {
            DemoQuery::Collections => {
                let page = demo_collection_page();
                let reads = page["data"].as_array().map_or(0, Vec::len);
                success(page, reads)
            }
            DemoQuery::All {
                collection,
                reverse,
            } => match self.documents(&collection) {
                Some(docs) => {
                    let mut docs = docs.to_vec();
                    if reverse {
                        docs.reverse();
                    }
                    let reads = docs.len();
                    success(json!({ "data": docs }), reads)
                }
                None => unknown_collection(&collection),
            },
            DemoQuery::ById { collection, id } => match self.documents(&collection) {
                Some(docs) => {
                    let doc = docs
                        .iter()
                        .find(|doc| doc["id"].as_str() == Some(id.as_str()))
                        .cloned()
                        .unwrap_or(Json::Null);
                    success(doc, 1)
                }
                None => unknown_collection(&collection),
            },
        }
    }
}

fn success(data: Json, reads: usize) -> Json {
    let bytes_read = serde_json::to_vec(&data).map_or(0, |bytes| bytes.len());
    json!({
        "data": data,
        "static_type": "Any",
        "stats": {
            "compute_ops": 1,
            "read_ops": reads,
            "write_ops": 0,
            "query_time_ms": 0,
            "storage_bytes_read": bytes_read,
            "storage_bytes_write": 0,
        },
    })
}

fn failure(code: &str, message: &str) -> Json {
    json!({ "error": { "code": code, "message": message } })
}

fn unknown_collection(collection: &str) -> Json {
    failure(
        "invalid_query",
        &format!("The query failed 1 validation check: unbound variable `{collection}`"),
    )
}

#[async_trait]
impl QueryExecutor for DemoExecutor {
    async fn execute(&self, query: &str) -> Result<Json, ExecError> {
        let started = Instant::now();
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let mut body = self.answer(query);
        if let Some(stats) = body.get_mut("stats") {
            stats["query_time_ms"] = json!(started.elapsed().as_millis() as u64);
        }
        Ok(body)
    }
}
