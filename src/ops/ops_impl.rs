// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Tab transition helpers used by `apply_op`.
/// Keeps `ops::mod` focused on the op type, the delta and dispatch.
fn existing_tab_mut<'a>(session: &'a mut Session, tab_id: &TabId) -> Result<&'a mut Tab, ApplyError> {
    session
        .tab_mut(tab_id)
        .ok_or_else(|| ApplyError::UnknownTab { tab_id: tab_id.clone() })
}

fn activate(session: &mut Session, tab_id: &TabId, delta: &mut DeltaBuilder) {
    if session.active_tab_id() != tab_id {
        session.set_active_tab_id(tab_id.clone());
        delta.record_activated(tab_id);
    }
}

fn create_tab(session: &mut Session, overrides: TabOverrides, delta: &mut DeltaBuilder) {
    let label = overrides
        .label
        .unwrap_or_else(|| default_tab_label(session.tabs().len()));
    let content = overrides.content.unwrap_or_default();

    if session.active_tab().content().is_empty() {
        // Only the active tab is considered for reuse, even if another tab is empty.
        let tab = session.active_tab_mut();
        tab.set_label(label);
        tab.set_content(content);
        if let Some(auto_run) = overrides.auto_run_on_first_activation {
            tab.set_auto_run_on_first_activation(auto_run);
        }
        let tab_id = tab.tab_id().clone();
        delta.record_updated(&tab_id);
        return;
    }

    let tab_id = session.fresh_tab_id();
    let mut tab = Tab::new(tab_id.clone(), label);
    tab.set_content(content);
    tab.set_auto_run_on_first_activation(overrides.auto_run_on_first_activation.unwrap_or(false));
    session.tabs_mut().push(tab);
    delta.record_created(&tab_id);
    activate(session, &tab_id, delta);
}

fn open_or_create_tab(session: &mut Session, overrides: TabOverrides, delta: &mut DeltaBuilder) {
    let existing = overrides.content.as_deref().and_then(|content| {
        session
            .tabs()
            .iter()
            .find(|tab| tab.content() == content)
            .map(|tab| tab.tab_id().clone())
    });

    match existing {
        Some(tab_id) => activate(session, &tab_id, delta),
        None => create_tab(session, overrides, delta),
    }
}

fn close_tab(session: &mut Session, tab_id: &TabId, delta: &mut DeltaBuilder) -> Result<(), ApplyError> {
    let Some(index) = session.tab_index(tab_id) else {
        return Err(ApplyError::UnknownTab { tab_id: tab_id.clone() });
    };
    if session.tabs().len() == 1 {
        return Err(ApplyError::LastTab { tab_id: tab_id.clone() });
    }

    let was_active = session.active_tab_id() == tab_id;
    session.tabs_mut().remove(index);
    delta.record_removed(tab_id);

    if was_active {
        let first = session.tabs()[0].tab_id().clone();
        activate(session, &first, delta);
    }
    Ok(())
}

fn close_others(
    session: &mut Session,
    tab_id: &TabId,
    delta: &mut DeltaBuilder,
) -> Result<(), ApplyError> {
    if !session.contains_tab(tab_id) {
        return Err(ApplyError::UnknownTab { tab_id: tab_id.clone() });
    }

    let removed = session
        .tabs()
        .iter()
        .filter(|tab| tab.tab_id() != tab_id)
        .map(|tab| tab.tab_id().clone())
        .collect::<Vec<_>>();
    session.tabs_mut().retain(|tab| tab.tab_id() == tab_id);
    for removed_id in &removed {
        delta.record_removed(removed_id);
    }
    activate(session, tab_id, delta);
    Ok(())
}

fn reorder_tab(session: &mut Session, dragged: &TabId, target: &TabId, delta: &mut DeltaBuilder) {
    if dragged == target {
        return;
    }
    let (Some(from), Some(to)) = (session.tab_index(dragged), session.tab_index(target)) else {
        tracing::debug!(dragged = %dragged, target = %target, "ignoring reorder with unknown tab");
        return;
    };

    let tabs = session.tabs_mut();
    let tab = tabs.remove(from);
    tabs.insert(to, tab);
    delta.record_updated(dragged);
}
