// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Reference tokens embedded in rendered FQL.
//!
//! A token looks like `collection:<collection>:<id>` with both parts percent-encoded, so it is
//! always a safe payload inside a double-quoted FQL string and the `:` delimiter cannot collide
//! with anything inside the parts.

use crate::model::DocumentRef;

pub const REFERENCE_TOKEN_PREFIX: &str = "collection:";

pub fn encode_reference(collection: &str, id: &str) -> String {
    format!(
        "{REFERENCE_TOKEN_PREFIX}{}:{}",
        urlencoding::encode(collection),
        urlencoding::encode(id)
    )
}

/// Decodes a token produced by [`encode_reference`].
///
/// Returns `None` for anything else, including strings that merely look similar but are not in
/// canonical encoded form.
pub fn decode_reference(token: &str) -> Option<DocumentRef> {
    let rest = token.strip_prefix(REFERENCE_TOKEN_PREFIX)?;
    let (collection, id) = rest.split_once(':')?;
    if collection.is_empty() {
        return None;
    }

    let collection = urlencoding::decode(collection).ok()?.into_owned();
    let id = urlencoding::decode(id).ok()?.into_owned();
    if encode_reference(&collection, &id) != token {
        return None;
    }

    Some(DocumentRef::new(collection, id))
}
