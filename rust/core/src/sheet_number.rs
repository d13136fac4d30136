// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sheet-number sequencing.
//!
//! Bulk sheet creation numbers new sheets `"{prefix} - {n}"`, continuing
//! from the highest sequence number already present. Extraction accepts
//! the current format, the legacy `"{prefix}- {n}"` spacing, and falls
//! back to the text after the last hyphen.

/// Format a sheet number from a prefix and sequence number.
///
/// An empty prefix yields `"- {n}"` so that renumbering by prefix later
/// still finds the separator.
pub fn format_sheet_number(prefix: &str, number: u32) -> String {
    if prefix.is_empty() {
        format!("- {number}")
    } else {
        format!("{prefix} - {number}")
    }
}

/// Extract the sequence part of a sheet number as a string.
///
/// Tried in order: `"{prefix} - "`, the bare `"- "` form, the legacy
/// `"{prefix}- "` form, then the text after the last hyphen with leading
/// zeros stripped, then the whole string with leading zeros stripped.
/// An all-zero or empty remainder reads as "1".
pub fn extract_sequence_number(sheet_number: &str, prefix: &str) -> String {
    if !prefix.is_empty() {
        let current = format!("{prefix} - ");
        if let Some(rest) = sheet_number.strip_prefix(&current) {
            return rest.trim().to_string();
        }
    }

    if let Some(rest) = sheet_number.strip_prefix("- ") {
        return rest.trim().to_string();
    }

    if !prefix.is_empty() {
        let legacy = format!("{prefix}- ");
        if let Some(rest) = sheet_number.strip_prefix(&legacy) {
            return rest.trim().to_string();
        }
    }

    if let Some(hyphen) = sheet_number.rfind('-') {
        let after = sheet_number[hyphen + 1..].trim();
        let trimmed = after.trim_start_matches('0');
        return if trimmed.is_empty() { "1".to_string() } else { trimmed.to_string() };
    }

    let trimmed = sheet_number.trim_start_matches('0');
    if trimmed.is_empty() {
        "1".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Next free sequence number for a prefix, given the existing sheet
/// numbers. Numbers whose sequence part does not parse are ignored.
pub fn next_sheet_number<S: AsRef<str>>(existing: &[S], prefix: &str) -> u32 {
    let mut max = 0u32;
    for sheet_number in existing {
        let part = extract_sequence_number(sheet_number.as_ref(), prefix);
        if let Ok(number) = part.parse::<u32>() {
            max = max.max(number);
        }
    }
    max + 1
}
