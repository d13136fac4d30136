// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end matching behavior over the public API.

use viewmatch_core::{
    extract_floor_info, find_best_match, find_matches, plan_sheet_matches, FloorInfo, FloorKind,
    MatchMode,
};

#[test]
fn exact_mode_matches_identity() {
    for label in ["Floor Plan 1F", "平面図-A棟", "", "a b c"] {
        let result = find_best_match(label, &[label], MatchMode::Exact).unwrap();
        assert_eq!(result.target, label);
        assert_eq!(result.reason, "exact");
    }
}

#[test]
fn empty_candidates_never_match() {
    let none: &[&str] = &[];
    for mode in [MatchMode::Exact, MatchMode::Pattern, MatchMode::Floor] {
        assert!(find_best_match("Floor Plan 1F", none, mode).is_none());
    }
}

#[test]
fn floor_mode_pairs_adjacent_storeys_of_same_series() {
    let result = find_best_match(
        "Floor Plan 3F",
        &["Floor Plan 4F", "Section 3F"],
        MatchMode::Floor,
    )
    .unwrap();

    // "Floor Plan 4F" wins: same kind, equal base name. "Section 3F" has
    // a different base name and is never reached.
    assert_eq!(result.index, 0);
    assert_eq!(result.target, "Floor Plan 4F");
    assert!(result.reason.starts_with("floor kind:"), "got: {}", result.reason);
}

#[test]
fn pattern_mode_stops_at_first_satisfying_candidate() {
    let result = find_best_match("test1", &["test2", "other3"], MatchMode::Pattern).unwrap();
    assert_eq!(result.target, "test2");
    assert!(result.reason.contains("test[1→2]"), "got: {}", result.reason);
}

#[test]
fn category_match_does_not_count_differing_wing_qualifiers() {
    let result = find_best_match("平面図-A棟", &["平面図-B棟"], MatchMode::Pattern).unwrap();
    assert_eq!(result.reason, "category: floor plan");
}

#[test]
fn matching_is_deterministic() {
    let candidates = ["test2", "other3", "Floor Plan 4F"];
    for mode in [MatchMode::Exact, MatchMode::Pattern, MatchMode::Floor] {
        let a = find_best_match("test1", &candidates, mode);
        let b = find_best_match("test1", &candidates, mode);
        assert_eq!(a, b);
    }
}

#[test]
fn bulk_matching_keeps_source_order_and_skips_unmatched() {
    let sources = ["Plan 1F", "Unrelated View", "Section その1"];
    let targets = ["Section その2", "Plan 2F"];

    let pairs = find_matches(&sources, &targets, MatchMode::Pattern);
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].source, "Plan 1F");
    assert_eq!(pairs[1].source, "Section その1");
    assert_eq!(pairs[1].target, "Section その2");
}

#[test]
fn floor_parse_roundtrip_is_stable() {
    let first = extract_floor_info("平面図 3階 A棟");
    let second = extract_floor_info("平面図 3階 A棟");
    assert_eq!(first, second);

    match first {
        FloorInfo::Floor { kind, number, .. } => {
            assert_eq!(kind, FloorKind::Above);
            assert_eq!(number, Some(3));
        }
        FloorInfo::NoFloor => panic!("expected a floor designator"),
    }
}

#[test]
fn sheet_plan_reports_totals() {
    let mut sheets = std::collections::BTreeMap::new();
    sheets.insert(
        "A-101".to_string(),
        vec!["Floor Plan 1F".to_string(), "Elevation North".to_string()],
    );
    sheets.insert(
        "A-102".to_string(),
        vec!["Floor Plan 2F".to_string(), "Elevation South".to_string()],
    );

    let report = plan_sheet_matches(&sheets, "A-101", MatchMode::Pattern).unwrap();
    assert_eq!(report.total_matched, 2);
    assert_eq!(report.total_unmatched, 0);
    assert_eq!(report.sheets.len(), 1);
}
