// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The workbench controller.
//!
//! Owns the session and is the only place transitions are applied: each one is reduced with
//! [`apply_op`], written through to the store, and followed by the autorun check.

use std::collections::HashMap;

use crate::exec::{Completion, ExecutionBridge, SubmitError};
use crate::model::{Session, TabId, TabOverrides};
use crate::ops::{apply_op, ApplyError, Delta, TabOp};
use crate::render::{render_result, RenderedResult};
use crate::store::{KeyValueStore, SessionStore};
use crate::ui::WorkbenchEvent;

pub struct Workbench<S> {
    session: Session,
    store: SessionStore<S>,
    bridge: ExecutionBridge,
    collections: Vec<String>,
    connection: String,
    rendered: HashMap<TabId, RenderedResult>,
    status: Option<String>,
}

impl<S: KeyValueStore> Workbench<S> {
    pub fn new(
        session: Session,
        store: SessionStore<S>,
        bridge: ExecutionBridge,
        connection: impl Into<String>,
    ) -> Self {
        Self {
            session,
            store,
            bridge,
            collections: Vec::new(),
            connection: connection.into(),
            rendered: HashMap::new(),
            status: None,
        }
    }

    /// Starts from the saved session, or a fresh one when nothing usable is stored.
    pub fn restore(
        store: SessionStore<S>,
        bridge: ExecutionBridge,
        connection: impl Into<String>,
    ) -> Self {
        let session = match store.load() {
            Some(session) => {
                tracing::info!(tabs = session.tabs().len(), "restored saved session");
                session
            }
            None => Session::new(),
        };
        Self::new(session, store, bridge, connection)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn collections(&self) -> &[String] {
        &self.collections
    }

    pub fn set_collections(&mut self, collections: Vec<String>) {
        self.collections = collections;
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = Some(status.into());
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn bridge(&self) -> &ExecutionBridge {
        &self.bridge
    }

    pub fn is_running(&self, tab_id: &TabId) -> bool {
        self.bridge.is_running(tab_id)
    }

    /// Applies one transition, saves the session if it changed, then runs any pending autorun.
    pub fn apply(&mut self, op: TabOp) -> Result<Delta, ApplyError> {
        let kind = op.kind();
        let persisted = !matches!(op, TabOp::AttachResult { .. } | TabOp::ConsumeAutoRun(_));
        let attached_to = match &op {
            TabOp::AttachResult { tab_id, .. } => Some(tab_id.clone()),
            _ => None,
        };

        let delta = match apply_op(&mut self.session, op) {
            Ok(delta) => delta,
            Err(err) => {
                tracing::debug!(op = kind, error = %err, "rejected transition");
                return Err(err);
            }
        };

        for removed in &delta.removed {
            self.rendered.remove(removed);
        }
        if let Some(tab_id) = attached_to {
            self.rendered.remove(&tab_id);
        }
        if persisted && !delta.is_empty() {
            self.save();
        }
        self.run_pending_auto_run();
        Ok(delta)
    }

    fn save(&mut self) {
        if let Err(err) = self.store.save(&self.session) {
            tracing::warn!(error = %err, "failed to save session");
            self.status = Some(format!("Could not save session: {err}"));
        }
    }

    fn run_pending_auto_run(&mut self) {
        let active = self.session.active_tab();
        if !active.auto_run_on_first_activation() {
            return;
        }
        let tab_id = active.tab_id().clone();
        if self.bridge.is_running(&tab_id) {
            return;
        }

        let content = active.content().to_owned();
        if let Err(err) = self.bridge.submit(tab_id.clone(), &content) {
            tracing::debug!(error = %err, "autorun skipped");
        }
        if let Err(err) = apply_op(&mut self.session, TabOp::ConsumeAutoRun(tab_id)) {
            tracing::debug!(error = %err, "failed to clear autorun flag");
        }
    }

    /// Runs the active tab's query.
    pub fn submit_active(&mut self) -> Result<(), SubmitError> {
        let tab_id = self.session.active_tab_id().clone();
        self.submit(tab_id)
    }

    pub fn submit(&mut self, tab_id: TabId) -> Result<(), SubmitError> {
        let content = self
            .session
            .tab(&tab_id)
            .map(|tab| tab.content().to_owned())
            .unwrap_or_default();
        self.bridge.submit(tab_id, &content)
    }

    pub fn handle_event(&mut self, event: WorkbenchEvent) -> Result<Delta, ApplyError> {
        match event {
            WorkbenchEvent::ReferenceActivated(reference) => self.apply(TabOp::OpenOrCreateTab(
                TabOverrides::document_lookup(&reference),
            )),
            WorkbenchEvent::CollectionActivated(collection) => self.apply(TabOp::OpenOrCreateTab(
                TabOverrides::recent_documents(&collection),
            )),
            WorkbenchEvent::ExecutionFinished(Completion { tab_id, result }) => {
                self.apply(TabOp::AttachResult { tab_id, result })
            }
        }
    }

    /// Attaches every completion that has already arrived. Returns how many were handled.
    pub fn drain_completions(&mut self) -> usize {
        let mut handled = 0;
        while let Some(completion) = self.bridge.try_next_completion() {
            let _ = self.handle_event(WorkbenchEvent::ExecutionFinished(completion));
            handled += 1;
        }
        handled
    }

    /// Waits for the next completion without attaching it.
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.bridge.next_completion().await
    }

    /// The rendered result for a tab, rendered on first request and cached until it changes.
    pub fn rendered(&mut self, tab_id: &TabId) -> Option<&RenderedResult> {
        let result = self.session.tab(tab_id)?.result()?;
        if !self.rendered.contains_key(tab_id) {
            self.rendered.insert(tab_id.clone(), render_result(result));
        }
        self.rendered.get(tab_id)
    }
}

#[cfg(test)]
mod tests;
