// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Fqlbench: a terminal FQL query workbench.
//!
//! Tabs hold independent queries, results render as highlighted FQL literals, and document
//! references inside a result open their own lookup tab. The session survives restarts.

pub mod exec;
pub mod format;
pub mod model;
pub mod ops;
pub mod render;
pub mod store;
pub mod tui;
pub mod ui;
pub mod workbench;
