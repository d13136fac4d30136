// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Token-level label comparison.
//!
//! Splits labels on the delimiter set used by sheet naming conventions and
//! extracts the tokens two labels share. Used both as the pattern-match
//! fallback tier and by floor matching to compare base names.

use rustc_hash::FxHashSet;

/// Delimiters that separate name segments. Includes the full-width
/// middle dot and slash common in Japanese view names.
const DELIMITERS: &[char] = &[' ', '-', '_', '・', '／', '('];

/// Minimum token length (in chars) considered significant.
const MIN_TOKEN_LEN: usize = 3;

/// Case-insensitive string equality with full Unicode folding.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive substring containment.
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Extract tokens shared between two labels, case-insensitively.
///
/// Both labels are split on the delimiter set; only tokens of at least
/// three chars count. Shared tokens are returned in the order they appear
/// in `a`, deduplicated, using `a`'s spelling.
pub fn shared_tokens<'a>(a: &'a str, b: &str) -> Vec<&'a str> {
    let b_tokens: Vec<&str> = b
        .split(DELIMITERS)
        .filter(|t| !t.is_empty())
        .collect();

    let mut seen: FxHashSet<String> = FxHashSet::default();
    let mut shared = Vec::new();

    for token in a.split(DELIMITERS).filter(|t| !t.is_empty()) {
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }
        if b_tokens.iter().any(|t| eq_ignore_case(token, t)) && seen.insert(token.to_lowercase()) {
            shared.push(token);
        }
    }

    shared
}
