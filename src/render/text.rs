// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_len` terminal cells, marking the cut with `…`.
pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if max_len == 0 {
        return String::new();
    }

    let len = display_width(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len == 1 {
        return "…".to_owned();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > max_len - 1 {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Terminal cells `text` occupies, measured the way ratatui lays out spans.
pub(crate) fn display_width(text: &str) -> usize {
    text.width()
}

/// Inserts `,` thousands separators into a non-negative integer.
pub(crate) fn group_thousands(value: u64) -> String {
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(value);

    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
