// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{ExecutionResult, Value};

use super::QueryExecutor;

pub const LIST_COLLECTIONS_QUERY: &str = "Collection.all()";

/// Names of the collections in the connected database, for the sidebar.
///
/// Any failure is logged and yields an empty list; the workbench stays usable without it.
pub async fn fetch_collection_names(executor: &dyn QueryExecutor) -> Vec<String> {
    let body = match executor.execute(LIST_COLLECTIONS_QUERY).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(error = %err, "failed to list collections");
            return Vec::new();
        }
    };

    match ExecutionResult::from_response(body) {
        ExecutionResult::Success(success) => page_names(&success.data),
        ExecutionResult::Failure(failure) => {
            tracing::warn!(error = %failure.error, "collection listing query failed");
            Vec::new()
        }
    }
}

/// `name` of every entry on a set page, in either the decoded or the tagged wire shape.
fn page_names(page: &Value) -> Vec<String> {
    let Some(Value::Array(entries)) = field(page, "data") else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match field(entry, "name") {
            Some(Value::String(name)) => Some(name.clone()),
            _ => None,
        })
        .collect()
}

fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    let fields = match value {
        Value::Object(fields) | Value::Document { fields, .. } => fields,
        _ => return None,
    };
    fields
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}
