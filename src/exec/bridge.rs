// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::model::{ExecutionResult, QueryFailure, TabId};

use super::{ExecError, QueryExecutor};

/// The outcome of one submission, addressed to the tab that submitted it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub tab_id: TabId,
    pub result: ExecutionResult,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("tab {tab_id} already has a query running")]
    AlreadyRunning { tab_id: TabId },
    #[error("tab {tab_id} has no query to run")]
    EmptyQuery { tab_id: TabId },
}

/// Runs queries as tasks and funnels their results back through one channel.
///
/// Must be used from inside a tokio runtime. A tab stays "running" until its completion has been
/// taken out of the bridge, so a caller that processes completions one at a time never sees a
/// tab that is both idle and about to receive a result.
pub struct ExecutionBridge {
    executor: Arc<dyn QueryExecutor>,
    running: HashSet<TabId>,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
}

impl ExecutionBridge {
    pub fn new(executor: Arc<dyn QueryExecutor>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            executor,
            running: HashSet::new(),
            tx,
            rx,
        }
    }

    pub fn executor(&self) -> Arc<dyn QueryExecutor> {
        Arc::clone(&self.executor)
    }

    pub fn is_running(&self, tab_id: &TabId) -> bool {
        self.running.contains(tab_id)
    }

    pub fn running_count(&self) -> usize {
        self.running.len()
    }

    pub fn submit(&mut self, tab_id: TabId, query: &str) -> Result<(), SubmitError> {
        if query.trim().is_empty() {
            return Err(SubmitError::EmptyQuery { tab_id });
        }
        if self.running.contains(&tab_id) {
            return Err(SubmitError::AlreadyRunning { tab_id });
        }

        tracing::info!(tab_id = %tab_id, query_len = query.len(), "submitting query");
        self.running.insert(tab_id.clone());

        let executor = Arc::clone(&self.executor);
        let query = query.to_owned();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            // The inner task isolates executor panics so they still produce a completion.
            let outcome = tokio::spawn(async move { executor.execute(&query).await }).await;
            let result = match outcome {
                Ok(Ok(body)) => ExecutionResult::from_response(body),
                Ok(Err(err)) => ExecutionResult::Failure(failure_for(&err)),
                Err(join_err) => {
                    tracing::warn!(error = %join_err, "query task did not finish");
                    ExecutionResult::Failure(QueryFailure::new(
                        "internal_error",
                        "the query task stopped before producing a result",
                    ))
                }
            };
            // The receiver lives as long as the bridge; a dropped bridge has nobody to tell.
            let _ = tx.send(Completion { tab_id, result });
        });
        Ok(())
    }

    /// Waits for the next completion.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        let completion = self.rx.recv().await?;
        Some(self.finish(completion))
    }

    /// A completion that is already waiting, if any.
    pub fn try_next_completion(&mut self) -> Option<Completion> {
        let completion = self.rx.try_recv().ok()?;
        Some(self.finish(completion))
    }

    fn finish(&mut self, completion: Completion) -> Completion {
        self.running.remove(&completion.tab_id);
        tracing::info!(
            tab_id = %completion.tab_id,
            failed = completion.result.is_failure(),
            "query finished"
        );
        completion
    }
}

fn failure_for(err: &ExecError) -> QueryFailure {
    match err {
        ExecError::Transport { message } => QueryFailure::new("transport_error", message.clone()),
        ExecError::InvalidBody { .. } => QueryFailure::new("invalid_response", err.to_string()),
    }
}
