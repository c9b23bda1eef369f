// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use super::ids::TabId;
use super::tab::Tab;

pub const DEFAULT_TAB_LABEL: &str = "New Query";

/// The whole workbench state: ordered tabs plus the active tab pointer.
///
/// `tabs` is never empty and `active_tab_id` always names one of them. Constructors and the
/// mutators here keep that true; `ops::apply_op` is the only caller of the `_mut` accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    tabs: Vec<Tab>,
    active_tab_id: TabId,
}

impl Session {
    /// A session holding one empty tab.
    pub fn new() -> Self {
        let tab_id = fresh_tab_id(&[]);
        Self {
            tabs: vec![Tab::new(tab_id.clone(), DEFAULT_TAB_LABEL)],
            active_tab_id: tab_id,
        }
    }

    /// Builds a session from restored tabs. Returns `None` when `tabs` is empty; a dangling
    /// `active_tab_id` falls back to the first tab.
    pub fn from_parts(tabs: Vec<Tab>, active_tab_id: TabId) -> Option<Self> {
        let first = tabs.first()?.tab_id().clone();
        let active_tab_id = if tabs.iter().any(|tab| tab.tab_id() == &active_tab_id) {
            active_tab_id
        } else {
            first
        };
        Some(Self {
            tabs,
            active_tab_id,
        })
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub(crate) fn tabs_mut(&mut self) -> &mut Vec<Tab> {
        &mut self.tabs
    }

    pub fn tab(&self, tab_id: &TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.tab_id() == tab_id)
    }

    pub(crate) fn tab_mut(&mut self, tab_id: &TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|tab| tab.tab_id() == tab_id)
    }

    pub fn tab_index(&self, tab_id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|tab| tab.tab_id() == tab_id)
    }

    pub fn contains_tab(&self, tab_id: &TabId) -> bool {
        self.tab_index(tab_id).is_some()
    }

    pub fn active_tab_id(&self) -> &TabId {
        &self.active_tab_id
    }

    pub(crate) fn set_active_tab_id(&mut self, tab_id: TabId) {
        debug_assert!(self.contains_tab(&tab_id));
        self.active_tab_id = tab_id;
    }

    pub fn active_tab(&self) -> &Tab {
        // Invariant: active_tab_id always resolves.
        self.tab(&self.active_tab_id)
            .unwrap_or_else(|| &self.tabs[0])
    }

    pub(crate) fn active_tab_mut(&mut self) -> &mut Tab {
        let index = self.tab_index(&self.active_tab_id).unwrap_or(0);
        &mut self.tabs[index]
    }

    /// An id not used by any tab in this session.
    pub fn fresh_tab_id(&self) -> TabId {
        fresh_tab_id(&self.tabs)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Last id handed out in this process. Ids never repeat, so a result still in flight for a closed
/// tab can not land on a newer tab.
static LAST_TAB_ID: AtomicU64 = AtomicU64::new(0);

fn fresh_tab_id(tabs: &[Tab]) -> TabId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    loop {
        let previous = LAST_TAB_ID.load(Ordering::Relaxed);
        let candidate = millis.max(previous + 1);
        if LAST_TAB_ID
            .compare_exchange(previous, candidate, Ordering::Relaxed, Ordering::Relaxed)
            .is_err()
        {
            continue;
        }
        let candidate = candidate.to_string();
        if !tabs.iter().any(|tab| tab.tab_id().as_str() == candidate) {
            return TabId::new(candidate).expect("decimal digits are a valid id");
        }
    }
}
