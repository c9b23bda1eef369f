// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session transitions.
//!
//! Every transition is a [`TabOp`] reduced against a [`Session`] by [`apply_op`]. A transition either
//! runs to completion or is rejected with an [`ApplyError`] before anything is touched, and it
//! reports a small [`Delta`] the controller uses to decide what to persist, re-render or autorun.

use crate::model::{ExecutionResult, Session, Tab, TabId, TabOverrides, DEFAULT_TAB_LABEL};

#[derive(Debug, Clone, PartialEq)]
pub enum TabOp {
    /// Append a tab, or reuse the active tab in place when its content is empty.
    CreateTab(TabOverrides),
    /// Activate the first tab whose content equals `overrides.content`, else `CreateTab`.
    OpenOrCreateTab(TabOverrides),
    CloseTab(TabId),
    CloseOthers(TabId),
    RenameTab {
        tab_id: TabId,
        label: String,
    },
    /// Move `dragged` to the position `target` holds before the move.
    ReorderTab {
        dragged: TabId,
        target: TabId,
    },
    SetActiveTab(TabId),
    UpdateContent {
        tab_id: TabId,
        content: String,
    },
    /// Late results for closed tabs are dropped.
    AttachResult {
        tab_id: TabId,
        result: ExecutionResult,
    },
    ConsumeAutoRun(TabId),
}

impl TabOp {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CreateTab(_) => "create_tab",
            Self::OpenOrCreateTab(_) => "open_or_create_tab",
            Self::CloseTab(_) => "close_tab",
            Self::CloseOthers(_) => "close_others",
            Self::RenameTab { .. } => "rename_tab",
            Self::ReorderTab { .. } => "reorder_tab",
            Self::SetActiveTab(_) => "set_active_tab",
            Self::UpdateContent { .. } => "update_content",
            Self::AttachResult { .. } => "attach_result",
            Self::ConsumeAutoRun(_) => "consume_auto_run",
        }
    }
}

/// What a transition changed. An empty delta means the session is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub created: Vec<TabId>,
    pub removed: Vec<TabId>,
    /// The new active tab, when the active pointer moved.
    pub activated: Option<TabId>,
    pub updated: Vec<TabId>,
}

impl Delta {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
            && self.removed.is_empty()
            && self.activated.is_none()
            && self.updated.is_empty()
    }
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    created: Vec<TabId>,
    removed: Vec<TabId>,
    activated: Option<TabId>,
    updated: Vec<TabId>,
}

impl DeltaBuilder {
    fn record_created(&mut self, tab_id: &TabId) {
        self.created.push(tab_id.clone());
    }

    fn record_removed(&mut self, tab_id: &TabId) {
        self.updated.retain(|id| id != tab_id);
        self.removed.push(tab_id.clone());
    }

    fn record_updated(&mut self, tab_id: &TabId) {
        if self.created.contains(tab_id) || self.updated.contains(tab_id) {
            return;
        }
        self.updated.push(tab_id.clone());
    }

    fn record_activated(&mut self, tab_id: &TabId) {
        self.activated = Some(tab_id.clone());
    }

    fn finish(self) -> Delta {
        Delta {
            created: self.created,
            removed: self.removed,
            activated: self.activated,
            updated: self.updated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApplyError {
    #[error("tab not found (id={tab_id})")]
    UnknownTab { tab_id: TabId },
    #[error("cannot close the last tab (id={tab_id})")]
    LastTab { tab_id: TabId },
}

/// Applies one transition. On error the session is left exactly as it was.
pub fn apply_op(session: &mut Session, op: TabOp) -> Result<Delta, ApplyError> {
    let mut delta = DeltaBuilder::default();
    match op {
        TabOp::CreateTab(overrides) => create_tab(session, overrides, &mut delta),
        TabOp::OpenOrCreateTab(overrides) => open_or_create_tab(session, overrides, &mut delta),
        TabOp::CloseTab(tab_id) => close_tab(session, &tab_id, &mut delta)?,
        TabOp::CloseOthers(tab_id) => close_others(session, &tab_id, &mut delta)?,
        TabOp::RenameTab { tab_id, label } => {
            let tab = existing_tab_mut(session, &tab_id)?;
            if tab.label() != label {
                tab.set_label(label);
                delta.record_updated(&tab_id);
            }
        }
        TabOp::ReorderTab { dragged, target } => reorder_tab(session, &dragged, &target, &mut delta),
        TabOp::SetActiveTab(tab_id) => {
            if !session.contains_tab(&tab_id) {
                return Err(ApplyError::UnknownTab { tab_id });
            }
            activate(session, &tab_id, &mut delta);
        }
        TabOp::UpdateContent { tab_id, content } => {
            let tab = existing_tab_mut(session, &tab_id)?;
            if tab.content() != content {
                tab.set_content(content);
                delta.record_updated(&tab_id);
            }
        }
        TabOp::AttachResult { tab_id, result } => match session.tab_mut(&tab_id) {
            Some(tab) => {
                tab.set_result(Some(result));
                delta.record_updated(&tab_id);
            }
            None => {
                tracing::debug!(tab_id = %tab_id, "discarding result for closed tab");
            }
        },
        TabOp::ConsumeAutoRun(tab_id) => {
            let tab = existing_tab_mut(session, &tab_id)?;
            if tab.auto_run_on_first_activation() {
                tab.set_auto_run_on_first_activation(false);
                delta.record_updated(&tab_id);
            }
        }
    }
    Ok(delta.finish())
}

/// Label given to a tab created while `tab_count` tabs are open.
pub fn default_tab_label(tab_count: usize) -> String {
    format!("{DEFAULT_TAB_LABEL} ({})", tab_count + 1)
}

// Per-transition helpers used by `apply_op`.
include!("ops_impl.rs");
