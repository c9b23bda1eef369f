// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use super::{ExecError, QueryExecutor};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Posts `{ "query": ... }` to an HTTP endpoint.
pub struct HttpExecutor {
    client: reqwest::Client,
    endpoint: String,
    secret: Option<String>,
}

impl fmt::Debug for HttpExecutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpExecutor")
            .field("endpoint", &self.endpoint)
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl HttpExecutor {
    pub fn new(endpoint: impl Into<String>, secret: Option<String>) -> Result<Self, ExecError> {
        Self::with_timeout(endpoint, secret, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        secret: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ExecError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ExecError::Transport {
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            secret: secret.filter(|secret| !secret.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryExecutor for HttpExecutor {
    async fn execute(&self, query: &str) -> Result<serde_json::Value, ExecError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query });
        if let Some(secret) = &self.secret {
            request = request.bearer_auth(secret);
        }

        let response = request.send().await.map_err(|err| ExecError::Transport {
            message: err.to_string(),
        })?;
        let status = response.status().as_u16();
        tracing::debug!(status, endpoint = %self.endpoint, "query response received");

        // Engine failures come back as 4xx with an `error` body, so the status is not checked.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| ExecError::InvalidBody {
                status,
                message: err.to_string(),
            })
    }
}
