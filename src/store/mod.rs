// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Client-side persistence.
//!
//! [`kv`] provides the key/value storage the workbench writes through; [`session_store`] maps a
//! [`crate::model::Session`] onto one key of it, dropping results on the way out.

pub mod kv;
pub mod session_store;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError, WriteDurability};
pub use session_store::{SessionStore, SESSION_KEY};
