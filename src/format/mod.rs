// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Query-language source formats.
//!
//! Currently this module covers FQL: rendering structured results as FQL literals, reference
//! tokens, and reflowing the rendered text.

pub mod fql;
