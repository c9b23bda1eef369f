// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Messages a front end sends to the workbench controller.
//!
//! Front ends never mutate the session for navigation themselves: a click on a reference span or
//! a sidebar entry becomes a [`WorkbenchEvent`], and the controller turns it into a transition.

use crate::exec::Completion;
use crate::model::DocumentRef;
use crate::render::HighlightSpan;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkbenchEvent {
    /// A rendered reference was activated; opens (or focuses) a lookup tab for it.
    ReferenceActivated(DocumentRef),
    /// A sidebar collection was activated; opens (or focuses) its recent-documents tab.
    CollectionActivated(String),
    ExecutionFinished(Completion),
}

impl WorkbenchEvent {
    /// The navigation event for a highlighted span, when it is a reference.
    pub fn from_span(span: &HighlightSpan) -> Option<Self> {
        span.reference.clone().map(Self::ReferenceActivated)
    }
}

#[cfg(test)]
mod tests {
    use super::WorkbenchEvent;
    use crate::model::DocumentRef;
    use crate::render::highlight;

    #[test]
    fn only_reference_spans_emit_navigation() {
        let highlighted = highlight(r#"{ a: Users.byId("collection:Users:1"), b: "x" }"#);
        let events = highlighted.lines[0]
            .spans
            .iter()
            .filter_map(WorkbenchEvent::from_span)
            .collect::<Vec<_>>();
        assert_eq!(
            events,
            vec![WorkbenchEvent::ReferenceActivated(DocumentRef::new("Users", "1"))]
        );
    }
}
