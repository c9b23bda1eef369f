// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A session is an ordered list of query tabs plus the active tab pointer; tabs carry their last
//! execution result as a typed structured value.

pub(crate) mod fixtures;
pub mod ids;
pub mod result;
pub mod session;
pub mod tab;
pub mod value;

pub use ids::{Id, IdError, TabId};
pub use result::{ExecutionResult, QueryFailure, QueryStats, QuerySuccess};
pub use session::{Session, DEFAULT_TAB_LABEL};
pub use tab::{Tab, TabOverrides};
pub use value::{DocumentRef, Value};
