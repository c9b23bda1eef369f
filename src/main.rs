// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Fqlbench CLI entrypoint.
//!
//! Runs the interactive workbench against an FQL endpoint (`--endpoint`, secret from
//! `FQLBENCH_SECRET`) or against the built-in offline demo engine (`--demo`).

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fqlbench::exec::{
    fetch_collection_names, DemoExecutor, ExecutionBridge, HttpExecutor, QueryExecutor,
};
use fqlbench::store::{FileStore, KeyValueStore, MemoryStore, SessionStore, WriteDurability};
use fqlbench::workbench::Workbench;
use tracing_subscriber::EnvFilter;

const DEFAULT_STATE_DIR: &str = ".fqlbench";
const LOG_FILE_NAME: &str = "fqlbench.log";
const DEFAULT_LOG_FILTER: &str = "fqlbench=info";
const SECRET_ENV: &str = "FQLBENCH_SECRET";
const ENDPOINT_ENV: &str = "FQLBENCH_ENDPOINT";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --endpoint <url> [--connection <name>] [--state-dir <dir>] [--durable-writes] [--log-file <path>]\n  {program} --demo [--state-dir <dir>] [--log-file <path>]\n\nThe secret is read from {SECRET_ENV}; {ENDPOINT_ENV} supplies a default endpoint.\n--demo runs against a built-in offline engine and cannot be combined with --endpoint.\n\n--state-dir holds the saved session and the log file (default {DEFAULT_STATE_DIR}).\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    endpoint: Option<String>,
    connection: Option<String>,
    state_dir: Option<String>,
    log_file: Option<String>,
    durable_writes: bool,
}

impl CliOptions {
    fn state_dir(&self) -> PathBuf {
        PathBuf::from(self.state_dir.as_deref().unwrap_or(DEFAULT_STATE_DIR))
    }

    fn log_path(&self) -> PathBuf {
        match &self.log_file {
            Some(path) => PathBuf::from(path),
            None => self.state_dir().join(LOG_FILE_NAME),
        }
    }

    fn connection_label(&self) -> String {
        if let Some(connection) = &self.connection {
            return connection.clone();
        }
        match &self.endpoint {
            Some(endpoint) if !self.demo => endpoint_host(endpoint).to_owned(),
            _ => "demo".to_owned(),
        }
    }
}

/// Host part of an endpoint URL, or the whole string when it has no recognisable scheme.
fn endpoint_host(endpoint: &str) -> &str {
    let Some((_, rest)) = endpoint.split_once("://") else {
        return endpoint;
    };
    rest.split(|ch: char| ch == '/' || ch == '?').next().unwrap_or(rest)
}

fn take_value(
    args: &mut impl Iterator<Item = String>,
    slot: &mut Option<String>,
) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    let value = args.next().ok_or(())?;
    if value.starts_with("--") {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn parse_options(
    mut args: impl Iterator<Item = String>,
    default_endpoint: Option<String>,
) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "--endpoint" => take_value(&mut args, &mut options.endpoint)?,
            "--connection" => take_value(&mut args, &mut options.connection)?,
            "--state-dir" => take_value(&mut args, &mut options.state_dir)?,
            "--log-file" => take_value(&mut args, &mut options.log_file)?,
            _ => return Err(()),
        }
    }

    if options.demo {
        if options.endpoint.is_some() {
            return Err(());
        }
        return Ok(options);
    }

    if options.endpoint.is_none() {
        options.endpoint = default_endpoint.filter(|endpoint| !endpoint.trim().is_empty());
    }
    if options.endpoint.is_none() {
        return Err(());
    }

    Ok(options)
}

fn init_logging(path: &Path) -> Result<tracing_appender::non_blocking::WorkerGuard, Box<dyn Error>> {
    let dir = path.parent().filter(|dir| !dir.as_os_str().is_empty()).unwrap_or(Path::new("."));
    let file_name = path.file_name().ok_or("log file path has no file name")?;
    std::fs::create_dir_all(dir)?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|err| err as Box<dyn Error>)?;
    Ok(guard)
}

async fn run_workbench<S: KeyValueStore>(
    store: S,
    executor: Arc<dyn QueryExecutor>,
    connection: String,
) -> Result<(), Box<dyn Error>> {
    let collections = fetch_collection_names(executor.as_ref()).await;
    tracing::info!(count = collections.len(), connection = %connection, "loaded collections");

    let bridge = ExecutionBridge::new(executor);
    let mut workbench = Workbench::restore(SessionStore::new(store), bridge, connection);
    workbench.set_collections(collections);
    fqlbench::tui::run(workbench).await
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "fqlbench".to_owned());

        let options = match parse_options(args, std::env::var(ENDPOINT_ENV).ok()) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let _log_guard = init_logging(&options.log_path())?;
        let connection = options.connection_label();
        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

        if options.demo {
            tracing::info!("starting in demo mode");
            let executor: Arc<dyn QueryExecutor> = Arc::new(DemoExecutor::new());
            return runtime.block_on(run_workbench(MemoryStore::new(), executor, connection));
        }

        let endpoint = options.endpoint.clone().ok_or("missing endpoint")?;
        let secret = std::env::var(SECRET_ENV).ok().filter(|secret| !secret.is_empty());
        if secret.is_none() {
            tracing::warn!("{SECRET_ENV} is not set; sending queries without authorization");
        }
        let executor: Arc<dyn QueryExecutor> = Arc::new(HttpExecutor::new(endpoint, secret)?);

        let store = if options.durable_writes {
            FileStore::new(options.state_dir()).with_durability(WriteDurability::Durable)
        } else {
            FileStore::new(options.state_dir())
        };
        runtime.block_on(run_workbench(store, executor, connection))
    })();

    if let Err(err) = result {
        eprintln!("fqlbench: {err}");
        std::process::exit(1);
    }
}
