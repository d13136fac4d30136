// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Viewmatch Core
//!
//! View-name correspondence matching for BIM sheet workflows, built on
//! [regex](https://docs.rs/regex) pattern tables.
//!
//! ## Overview
//!
//! When view state (camera, crop regions, viewport positions) is copied
//! between sheets, the views involved are identified only by display
//! name. This crate decides which target view a source view corresponds
//! to:
//!
//! - **Exact**: case-insensitive name equality
//! - **Pattern**: numbering conventions ("test1"/"test2"), view
//!   categories (平面図/PLAN, 断面図/SECTION, ...), shared-token fallback
//! - **Floor**: floor designators ("3F", "B1", "RF", "2階") with an
//!   adjacent-storey relation
//!
//! Matching is greedy and first-match-wins: candidates are scanned in
//! caller order and the first satisfying candidate is returned. Every
//! match carries a human-readable reason string for diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use viewmatch_core::{find_best_match, MatchMode};
//!
//! let result = find_best_match(
//!     "Floor Plan 3F",
//!     &["Floor Plan 4F", "Section 3F"],
//!     MatchMode::Floor,
//! )
//! .unwrap();
//! assert_eq!(result.target, "Floor Plan 4F");
//! ```
//!
//! Matching is a pure function of its inputs: no shared state, no
//! caching, safe to call from any thread.
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialization of match results and reports

mod category;
mod number;

pub mod error;
pub mod floor;
pub mod matcher;
pub mod report;
pub mod sheet_number;
pub mod tokens;

pub use error::{Error, Result};
pub use floor::{extract_floor_info, FloorInfo, FloorKind};
pub use matcher::{find_best_match, find_matches, MatchMode, MatchPair, MatchResult};
pub use report::{plan_sheet_matches, MatchReport, SheetMatches};
pub use sheet_number::{extract_sequence_number, format_sheet_number, next_sheet_number};
pub use tokens::shared_tokens;
