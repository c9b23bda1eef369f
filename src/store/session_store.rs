// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::{Session, Tab, TabId};

use super::kv::{KeyValueStore, StoreError};

/// Storage key holding the serialized session.
pub const SESSION_KEY: &str = "tabs";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedSession {
    tabs: Vec<PersistedTab>,
    #[serde(rename = "activeTab")]
    active_tab: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct PersistedTab {
    id: String,
    label: String,
    #[serde(default)]
    content: String,
}

impl From<&Session> for PersistedSession {
    fn from(session: &Session) -> Self {
        Self {
            tabs: session
                .tabs()
                .iter()
                .map(|tab| PersistedTab {
                    id: tab.tab_id().as_str().to_owned(),
                    label: tab.label().to_owned(),
                    content: tab.content().to_owned(),
                })
                .collect(),
            active_tab: session.active_tab_id().as_str().to_owned(),
        }
    }
}

/// Saves and restores a [`Session`] under [`SESSION_KEY`].
///
/// Results and the transient autorun flag are never written.
#[derive(Debug, Clone)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        let json = serde_json::to_string(&PersistedSession::from(session))?;
        self.store.set(SESSION_KEY, &json)
    }

    /// The saved session, or `None` when nothing usable is stored.
    pub fn load(&self) -> Option<Session> {
        let raw = match self.store.get(SESSION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read saved session");
                return None;
            }
        };

        let persisted = match serde_json::from_str::<PersistedSession>(&raw) {
            Ok(persisted) => persisted,
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed saved session");
                return None;
            }
        };

        let session = restore(persisted);
        if session.is_none() {
            tracing::debug!("ignoring structurally invalid saved session");
        }
        session
    }
}

fn restore(persisted: PersistedSession) -> Option<Session> {
    let mut seen = HashSet::new();
    let mut tabs = Vec::with_capacity(persisted.tabs.len());
    for persisted_tab in persisted.tabs {
        if !seen.insert(persisted_tab.id.clone()) {
            return None;
        }
        let tab_id = TabId::new(persisted_tab.id).ok()?;
        let mut tab = Tab::new(tab_id, persisted_tab.label);
        tab.set_content(persisted_tab.content);
        tabs.push(tab);
    }

    let active = TabId::new(persisted.active_tab)
        .ok()
        .or_else(|| tabs.first().map(|tab| tab.tab_id().clone()))?;
    Session::from_parts(tabs, active)
}
