// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! FQL literal rendering and reformatting.

pub mod literal;
pub mod pretty;
pub mod reference;

pub use literal::{to_fql, FqlSource, RenderDiagnostic};
pub use pretty::{format_fql, DEFAULT_PRINT_WIDTH};
pub(crate) use pretty::string_end;
pub use reference::{decode_reference, encode_reference, REFERENCE_TOKEN_PREFIX};
