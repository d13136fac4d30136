// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Multi-sheet match planning.
//!
//! Given a set of sheets (each a named, ordered list of view labels) and
//! a source sheet, plans which target view each source view corresponds
//! to on every other sheet. The plan is what a consumer applies to its
//! live objects; this module never touches any document model.

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::matcher::{find_matches, MatchMode, MatchPair};

/// Matches planned for a single target sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetMatches {
    /// Target sheet name.
    pub sheet: String,
    /// Pairings in source order.
    pub matches: Vec<MatchPair>,
}

/// Full plan across all target sheets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    /// Source sheet name.
    pub source_sheet: String,
    /// Mode the plan was computed under.
    pub mode: MatchMode,
    /// Per-sheet pairings; sheets with no pairings are omitted.
    pub sheets: Vec<SheetMatches>,
    /// Total pairings across all sheets.
    pub total_matched: usize,
    /// Source-label/target-sheet combinations that found no pairing.
    pub total_unmatched: usize,
}

/// Plan matches from `source_sheet` to every other sheet in `sheets`.
///
/// Sheet iteration follows the map's key order so the report is
/// deterministic. The source sheet itself is skipped. Fails fast when
/// the input names no sheets or the source sheet is absent.
pub fn plan_sheet_matches(
    sheets: &BTreeMap<String, Vec<String>>,
    source_sheet: &str,
    mode: MatchMode,
) -> Result<MatchReport> {
    if sheets.is_empty() {
        return Err(Error::InvalidArgument("no sheets supplied".into()));
    }

    let sources = sheets.get(source_sheet).ok_or_else(|| {
        Error::InvalidArgument(format!("source sheet {source_sheet:?} not found"))
    })?;

    let mut report = MatchReport {
        source_sheet: source_sheet.to_string(),
        mode,
        sheets: Vec::new(),
        total_matched: 0,
        total_unmatched: 0,
    };

    for (sheet, targets) in sheets {
        if sheet == source_sheet {
            continue;
        }

        let matches = find_matches(sources, targets, mode);
        tracing::debug!(
            sheet = %sheet,
            matched = matches.len(),
            of = sources.len(),
            "planned sheet matches"
        );

        report.total_matched += matches.len();
        report.total_unmatched += sources.len() - matches.len();

        if !matches.is_empty() {
            report.sheets.push(SheetMatches {
                sheet: sheet.clone(),
                matches,
            });
        }
    }

    Ok(report)
}
