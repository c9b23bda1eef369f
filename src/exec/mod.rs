// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query execution.
//!
//! A [`QueryExecutor`] turns query text into one response body. The [`ExecutionBridge`] runs
//! executors as tasks, one in flight per tab, and reports every submission exactly once as a
//! [`Completion`].

use async_trait::async_trait;

pub mod bridge;
pub mod collections;
pub mod demo;
pub mod http;

pub use bridge::{Completion, ExecutionBridge, SubmitError};
pub use collections::fetch_collection_names;
pub use demo::DemoExecutor;
pub use http::HttpExecutor;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecError {
    #[error("transport error: {message}")]
    Transport { message: String },
    #[error("undecodable response (status {status}): {message}")]
    InvalidBody { status: u16, message: String },
}

#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Runs `query` and returns the engine's raw response body.
    ///
    /// Engine-side failures are `Ok` bodies carrying an `error` key; `Err` is reserved for
    /// transport problems.
    async fn execute(&self, query: &str) -> Result<serde_json::Value, ExecError>;
}
