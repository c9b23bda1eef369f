// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Fqlbench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Fqlbench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::QueryStats;

use super::text::group_thousands;

const BYTE_UNITS: [&str; 4] = ["bytes", "KB", "MB", "GB"];

/// Human-readable byte count in 1024 steps, rounded to whole units.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0".to_owned();
    }

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < BYTE_UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{} {}", size.round(), BYTE_UNITS[unit_index])
}

/// Label/value pairs shown above a successful result.
pub fn stats_entries(stats: &QueryStats) -> Vec<(&'static str, String)> {
    let query_time_ms = if stats.query_time_ms.is_finite() && stats.query_time_ms > 0.0 {
        stats.query_time_ms.round() as u64
    } else {
        0
    };

    vec![
        ("Query time", format!("{} ms", group_thousands(query_time_ms))),
        ("Compute", group_thousands(stats.compute_ops)),
        (
            "Reads",
            format!(
                "{} - {}",
                group_thousands(stats.read_ops),
                format_bytes(stats.storage_bytes_read)
            ),
        ),
        (
            "Writes",
            format!(
                "{} - {}",
                group_thousands(stats.write_ops),
                format_bytes(stats.storage_bytes_write)
            ),
        ),
    ]
}

pub fn stats_line(stats: &QueryStats) -> String {
    stats_entries(stats)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect::<Vec<_>>()
        .join(" | ")
}
