// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::TabId;
use super::result::ExecutionResult;

/// One query editing/execution unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    tab_id: TabId,
    label: String,
    content: String,
    result: Option<ExecutionResult>,
    auto_run_on_first_activation: bool,
}

impl Tab {
    pub fn new(tab_id: TabId, label: impl Into<String>) -> Self {
        Self {
            tab_id,
            label: label.into(),
            content: String::new(),
            result: None,
            auto_run_on_first_activation: false,
        }
    }

    pub fn tab_id(&self) -> &TabId {
        &self.tab_id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub fn result(&self) -> Option<&ExecutionResult> {
        self.result.as_ref()
    }

    pub fn set_result(&mut self, result: Option<ExecutionResult>) {
        self.result = result;
    }

    pub fn auto_run_on_first_activation(&self) -> bool {
        self.auto_run_on_first_activation
    }

    pub fn set_auto_run_on_first_activation(&mut self, auto_run: bool) {
        self.auto_run_on_first_activation = auto_run;
    }
}

/// Partial tab used by `CreateTab`/`OpenOrCreateTab`. Unset fields fall back to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabOverrides {
    pub label: Option<String>,
    pub content: Option<String>,
    pub auto_run_on_first_activation: Option<bool>,
}

impl TabOverrides {
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Lists the most recent documents of a collection; used by the sidebar.
    pub fn recent_documents(collection: &str) -> Self {
        Self {
            label: Some(format!("Recent {collection}")),
            content: Some(format!("{collection}.all().reverse()")),
            auto_run_on_first_activation: Some(true),
        }
    }

    /// Looks a single referenced document up; used when a reference is activated.
    pub fn document_lookup(reference: &super::DocumentRef) -> Self {
        Self {
            label: Some(format!("{} - {}", reference.collection(), reference.id())),
            content: Some(reference.lookup_query()),
            auto_run_on_first_activation: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TabOverrides;
    use crate::model::DocumentRef;

    #[test]
    fn document_lookup_overrides() {
        let overrides = TabOverrides::document_lookup(&DocumentRef::new("Users", "123"));
        assert_eq!(overrides.label.as_deref(), Some("Users - 123"));
        assert_eq!(overrides.content.as_deref(), Some("Users.byId(\"123\")"));
        assert_eq!(overrides.auto_run_on_first_activation, Some(true));
    }

    #[test]
    fn recent_documents_overrides() {
        let overrides = TabOverrides::recent_documents("Orders");
        assert_eq!(overrides.label.as_deref(), Some("Recent Orders"));
        assert_eq!(overrides.content.as_deref(), Some("Orders.all().reverse()"));
    }
}
