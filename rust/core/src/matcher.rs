// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Best-match search over candidate labels.
//!
//! Candidates are scanned in caller order and the first one satisfying
//! the active mode's predicate wins. There is no scoring and no ranking;
//! input order is a correctness-relevant contract, not an implementation
//! detail.

use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::category::category_match;
use crate::error::Error;
use crate::floor::floor_match;
use crate::number::number_pattern_match;
use crate::tokens::{eq_ignore_case, shared_tokens};

/// Matching strategy. Modes are mutually exclusive; the caller picks one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MatchMode {
    /// Case-insensitive full-string equality.
    Exact,
    /// Numbering conventions, view categories, shared-token fallback.
    Pattern,
    /// Floor-designator correspondence.
    Floor,
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchMode::Exact => "exact",
            MatchMode::Pattern => "pattern",
            MatchMode::Floor => "floor",
        };
        f.write_str(s)
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchMode::Exact),
            "pattern" => Ok(MatchMode::Pattern),
            "floor" => Ok(MatchMode::Floor),
            other => Err(Error::InvalidArgument(format!(
                "unknown match mode {other:?} (expected exact, pattern or floor)"
            ))),
        }
    }
}

/// A source label paired with the candidate it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    /// Index of the matched candidate in the caller's sequence. Labels
    /// are not unique, so the index is the reliable handle.
    pub index: usize,
    /// The matched candidate label.
    pub target: String,
    /// Human-readable explanation of why the match was accepted.
    /// Diagnostics only, not part of the correctness contract.
    pub reason: String,
}

/// One pairing produced by [`find_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchPair {
    pub source: String,
    pub target: String,
    pub reason: String,
}

/// Find the first candidate matching `source` under `mode`.
///
/// Candidates are scanned in the order supplied; the first satisfying
/// candidate is returned immediately. An empty candidate list yields
/// `None`, as does a source no candidate relates to; absence of a match
/// is an expected outcome, not an error.
pub fn find_best_match<S: AsRef<str>>(
    source: &str,
    candidates: &[S],
    mode: MatchMode,
) -> Option<MatchResult> {
    for (index, candidate) in candidates.iter().enumerate() {
        let target = candidate.as_ref();
        let reason = match mode {
            MatchMode::Exact => {
                if eq_ignore_case(source, target) {
                    Some("exact".to_string())
                } else {
                    None
                }
            }
            MatchMode::Pattern => pattern_match(source, target),
            MatchMode::Floor => floor_match(source, target),
        };

        if let Some(reason) = reason {
            tracing::debug!(source, target, %mode, %reason, "label matched");
            return Some(MatchResult {
                index,
                target: target.to_string(),
                reason,
            });
        }
    }

    None
}

/// Pair each source label with its first match among `targets`.
///
/// Greedy, first-match-wins per source: sources that find no match are
/// skipped, and a target is never reserved, so two sources may pair with
/// the same target. Duplicate pairings are logged but preserved.
pub fn find_matches<S: AsRef<str>, T: AsRef<str>>(
    sources: &[S],
    targets: &[T],
    mode: MatchMode,
) -> Vec<MatchPair> {
    let mut pairs = Vec::new();
    let mut taken: FxHashSet<usize> = FxHashSet::default();

    for source in sources {
        let source = source.as_ref();
        let Some(found) = find_best_match(source, targets, mode) else {
            continue;
        };

        if !taken.insert(found.index) {
            tracing::warn!(
                source,
                target = %found.target,
                "target already paired with another source"
            );
        }

        pairs.push(MatchPair {
            source: source.to_string(),
            target: found.target,
            reason: found.reason,
        });
    }

    pairs
}

/// Pattern-mode cascade: numbering conventions, then view categories,
/// then the shared-token fallback.
fn pattern_match(source: &str, target: &str) -> Option<String> {
    if let Some(reason) = number_pattern_match(source, target) {
        return Some(reason);
    }

    if let Some(reason) = category_match(source, target) {
        return Some(reason);
    }

    let shared = shared_tokens(source, target);
    if shared.len() >= 2 {
        return Some(format!("shared tokens: {}", shared.join(", ")));
    }

    None
}
