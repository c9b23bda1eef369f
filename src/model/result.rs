// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Deserialize;
use serde_json::json;

use super::value::Value;

/// Counters the engine reports alongside a successful query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct QueryStats {
    pub query_time_ms: f64,
    pub compute_ops: u64,
    pub read_ops: u64,
    pub write_ops: u64,
    pub storage_bytes_read: u64,
    pub storage_bytes_write: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySuccess {
    pub data: Value,
    pub stats: QueryStats,
}

/// The engine's (or the transport's) description of what went wrong. Kept as raw JSON so it can
/// be shown verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryFailure {
    pub error: serde_json::Value,
}

impl QueryFailure {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: json!({ "code": code, "message": message.into() }),
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.error.get("code").and_then(|code| code.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionResult {
    Success(QuerySuccess),
    Failure(QueryFailure),
}

impl ExecutionResult {
    /// Interprets one response body from the query-execution endpoint.
    pub fn from_response(body: serde_json::Value) -> Self {
        let serde_json::Value::Object(mut map) = body else {
            return Self::Failure(QueryFailure::new(
                "invalid_response",
                "expected a JSON object response",
            ));
        };

        if let Some(error) = map.remove("error") {
            return Self::Failure(QueryFailure { error });
        }

        let Some(data) = map.remove("data") else {
            return Self::Failure(QueryFailure::new(
                "invalid_response",
                "response has neither `data` nor `error`",
            ));
        };

        let stats = map
            .remove("stats")
            .and_then(|stats| serde_json::from_value::<QueryStats>(stats).ok())
            .unwrap_or_default();

        Self::Success(QuerySuccess {
            data: Value::from_json(data),
            stats,
        })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    pub fn stats(&self) -> Option<&QueryStats> {
        match self {
            Self::Success(success) => Some(&success.stats),
            Self::Failure(_) => None,
        }
    }
}
