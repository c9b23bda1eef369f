// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use crate::exec::{DemoExecutor, ExecutionBridge, SubmitError};
use crate::model::{DocumentRef, ExecutionResult, TabOverrides};
use crate::ops::TabOp;
use crate::store::{KeyValueStore, MemoryStore, SessionStore, StoreError, SESSION_KEY};
use crate::ui::WorkbenchEvent;

use super::Workbench;

fn workbench() -> (Workbench<MemoryStore>, MemoryStore) {
    let memory = MemoryStore::new();
    let bridge = ExecutionBridge::new(Arc::new(DemoExecutor::new()));
    let workbench = Workbench::restore(SessionStore::new(memory.clone()), bridge, "demo");
    (workbench, memory)
}

fn saved(memory: &MemoryStore) -> serde_json::Value {
    let raw = memory.get(SESSION_KEY).unwrap().expect("saved session");
    serde_json::from_str(&raw).unwrap()
}

#[tokio::test]
async fn edits_are_written_through() {
    let (mut wb, memory) = workbench();
    let tab_id = wb.session().active_tab_id().clone();
    wb.apply(TabOp::UpdateContent { tab_id: tab_id.clone(), content: "Users.all()".to_owned() })
        .unwrap();

    let json = saved(&memory);
    assert_eq!(json["tabs"][0]["content"], "Users.all()");
    assert_eq!(json["activeTab"], tab_id.as_str());
}

#[tokio::test]
async fn result_for_closed_tab_is_discarded() {
    let (mut wb, _memory) = workbench();
    let first = wb.session().active_tab_id().clone();
    wb.apply(TabOp::UpdateContent { tab_id: first.clone(), content: "Users.all()".to_owned() })
        .unwrap();
    wb.submit_active().unwrap();
    assert!(wb.is_running(&first));

    wb.apply(TabOp::CreateTab(TabOverrides::with_content("Orders.all()"))).unwrap();
    wb.apply(TabOp::CloseTab(first.clone())).unwrap();
    let before = wb.session().clone();

    let completion = wb.next_completion().await.expect("completion");
    assert_eq!(completion.tab_id, first);
    let delta = wb.handle_event(WorkbenchEvent::ExecutionFinished(completion)).unwrap();

    assert!(delta.is_empty());
    assert_eq!(wb.session(), &before);
    assert!(!wb.is_running(&first));
}

#[tokio::test]
async fn second_submission_is_rejected_while_running() {
    let (mut wb, _memory) = workbench();
    let tab_id = wb.session().active_tab_id().clone();
    wb.apply(TabOp::UpdateContent { tab_id: tab_id.clone(), content: "Users.all()".to_owned() })
        .unwrap();
    wb.submit_active().unwrap();
    assert_eq!(wb.submit_active(), Err(SubmitError::AlreadyRunning { tab_id }));
}

#[tokio::test]
async fn collection_activation_autoruns_once() {
    let (mut wb, memory) = workbench();
    wb.apply(TabOp::UpdateContent {
        tab_id: wb.session().active_tab_id().clone(),
        content: "Products.all()".to_owned(),
    })
    .unwrap();

    wb.handle_event(WorkbenchEvent::CollectionActivated("Users".to_owned())).unwrap();
    let tab_id = wb.session().active_tab_id().clone();
    let tab = wb.session().active_tab();
    assert_eq!(tab.label(), "Recent Users");
    assert!(!tab.auto_run_on_first_activation());
    assert!(wb.is_running(&tab_id));
    assert_eq!(saved(&memory)["tabs"].as_array().map(Vec::len), Some(2));

    let completion = wb.next_completion().await.expect("completion");
    wb.handle_event(WorkbenchEvent::ExecutionFinished(completion)).unwrap();
    let rendered = wb.rendered(&tab_id).expect("rendered").clone();
    assert!(!rendered.is_failure());
    assert_eq!(rendered.body.references().len(), 1);

    // Re-activating the same collection focuses the tab without running it again.
    let other = wb.session().tabs()[0].tab_id().clone();
    wb.apply(TabOp::SetActiveTab(other)).unwrap();
    wb.handle_event(WorkbenchEvent::CollectionActivated("Users".to_owned())).unwrap();
    assert_eq!(wb.session().active_tab_id(), &tab_id);
    assert!(!wb.is_running(&tab_id));
    assert_eq!(wb.session().tabs().len(), 2);
}

#[tokio::test]
async fn reference_activation_opens_lookup_tab() {
    let (mut wb, _memory) = workbench();
    wb.handle_event(WorkbenchEvent::ReferenceActivated(DocumentRef::new("Orders", "201")))
        .unwrap();
    assert_eq!(wb.session().tabs().len(), 1, "empty active tab is reused");
    assert_eq!(wb.session().active_tab().content(), "Orders.byId(\"201\")");

    let completion = wb.next_completion().await.expect("completion");
    wb.handle_event(WorkbenchEvent::ExecutionFinished(completion)).unwrap();
    let tab_id = wb.session().active_tab_id().clone();
    let refs = wb
        .rendered(&tab_id)
        .expect("rendered")
        .body
        .references()
        .into_iter()
        .map(|(_, _, reference)| reference.clone())
        .collect::<Vec<_>>();
    assert_eq!(refs.first(), Some(&DocumentRef::new("Users", "101")));
}

#[tokio::test]
async fn rendered_cache_follows_new_results() {
    let (mut wb, _memory) = workbench();
    let tab_id = wb.session().active_tab_id().clone();
    assert!(wb.rendered(&tab_id).is_none());

    let first = ExecutionResult::from_response(serde_json::json!({ "data": 1 }));
    wb.apply(TabOp::AttachResult { tab_id: tab_id.clone(), result: first }).unwrap();
    assert_eq!(wb.rendered(&tab_id).map(|r| r.body.plain_text()), Some("1".to_owned()));

    let second = ExecutionResult::from_response(serde_json::json!({ "data": 2 }));
    wb.apply(TabOp::AttachResult { tab_id: tab_id.clone(), result: second }).unwrap();
    assert_eq!(wb.rendered(&tab_id).map(|r| r.body.plain_text()), Some("2".to_owned()));
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::InvalidKey { key: key.to_owned() })
    }
}

#[tokio::test]
async fn save_failures_surface_as_status() {
    let bridge = ExecutionBridge::new(Arc::new(DemoExecutor::new()));
    let mut wb = Workbench::restore(SessionStore::new(ReadOnlyStore), bridge, "demo");
    let tab_id = wb.session().active_tab_id().clone();

    wb.apply(TabOp::RenameTab { tab_id, label: "Scratch".to_owned() }).unwrap();

    assert_eq!(wb.session().active_tab().label(), "Scratch");
    assert!(wb.status().is_some_and(|status| status.starts_with("Could not save session")));
}
