// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Floor-designator extraction and floor-level matching.
//!
//! A view label like "Floor Plan 3F" carries a floor designator ("3F")
//! and a base name ("Floor Plan"). Designator patterns are tried in a
//! fixed order and the first hit wins; the base name is the label with
//! the matched token removed and surrounding delimiters trimmed.
//!
//! Floor info is computed fresh per call and never cached.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::tokens::{eq_ignore_case, shared_tokens};

/// Which part of the building a floor designator refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorKind {
    /// Above-ground storey (3F, 2階, 1st)
    Above,
    /// Basement storey (B1, 地下2階)
    Below,
    /// Roof level (RF, 屋上)
    Roof,
    /// Penthouse (PH)
    Penthouse,
}

impl fmt::Display for FloorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FloorKind::Above => "above ground",
            FloorKind::Below => "basement",
            FloorKind::Roof => "roof",
            FloorKind::Penthouse => "penthouse",
        };
        f.write_str(s)
    }
}

/// Result of parsing a label for a floor designator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FloorInfo {
    /// The label carries no recognizable floor designator.
    NoFloor,
    /// The label carries a floor designator.
    Floor {
        kind: FloorKind,
        /// Storey number, when the designator contains one (RF and 屋上
        /// do not).
        number: Option<i32>,
        /// Raw matched designator, e.g. "3F" or "地下1階".
        raw: String,
        /// Label with the designator removed and delimiters trimmed.
        base_name: String,
    },
}

impl FloorInfo {
    /// Whether the label carried a floor designator.
    #[inline]
    pub fn has_floor(&self) -> bool {
        matches!(self, FloorInfo::Floor { .. })
    }
}

struct FloorPattern {
    pattern: Regex,
    kind: FloorKind,
}

impl FloorPattern {
    fn new(pattern: &str, kind: FloorKind) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("invalid floor designator pattern"),
            kind,
        }
    }
}

// Ordered: the first pattern that matches decides. "3F" must be tried
// before "B\d+" so that "B1F" reads as an above-ground token, matching
// established behavior.
static FLOOR_PATTERNS: LazyLock<Vec<FloorPattern>> = LazyLock::new(|| {
    vec![
        FloorPattern::new(r"(?i)\d+F", FloorKind::Above),
        FloorPattern::new(r"(?i)\d+階", FloorKind::Above),
        FloorPattern::new(r"(?i)B\d+", FloorKind::Below),
        FloorPattern::new(r"(?i)地下\d+階", FloorKind::Below),
        FloorPattern::new(r"(?i)RF", FloorKind::Roof),
        FloorPattern::new(r"(?i)屋上", FloorKind::Roof),
        FloorPattern::new(r"(?i)PH", FloorKind::Penthouse),
        FloorPattern::new(r"(?i)\d+FL", FloorKind::Above),
        FloorPattern::new(r"(?i)GL", FloorKind::Above),
        FloorPattern::new(r"(?i)\d+st", FloorKind::Above),
        FloorPattern::new(r"(?i)\d+nd", FloorKind::Above),
        FloorPattern::new(r"(?i)\d+rd", FloorKind::Above),
        FloorPattern::new(r"(?i)\d+th", FloorKind::Above),
    ]
});

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("invalid digit pattern"));

/// Parse a label for its floor designator.
///
/// Tries the fixed pattern list in order; the first match produces the
/// designator, its kind, the storey number when present, and the base
/// name with every occurrence of the designator removed.
pub fn extract_floor_info(label: &str) -> FloorInfo {
    for fp in FLOOR_PATTERNS.iter() {
        let Some(m) = fp.pattern.find(label) else {
            continue;
        };

        let raw = m.as_str().to_string();
        let base_name = label
            .replace(&raw, "")
            .trim()
            .trim_matches(|c| matches!(c, '-' | '_' | ' '))
            .to_string();

        let number = DIGITS
            .find(&raw)
            .and_then(|d| d.as_str().parse::<i32>().ok());

        return FloorInfo::Floor {
            kind: fp.kind,
            number,
            raw,
            base_name,
        };
    }

    FloorInfo::NoFloor
}

/// Try to relate two labels through their floor designators.
///
/// Both labels must carry a designator. Acceptance, in priority order:
/// same kind with equal base names; same kind with at least one token
/// shared between base names; adjacent storeys (numbers differing by
/// exactly one) with equal base names.
pub(crate) fn floor_match(source: &str, target: &str) -> Option<String> {
    let src = extract_floor_info(source);
    let tgt = extract_floor_info(target);

    let (
        FloorInfo::Floor {
            kind: src_kind,
            number: src_number,
            raw: src_raw,
            base_name: src_base,
        },
        FloorInfo::Floor {
            kind: tgt_kind,
            number: tgt_number,
            raw: tgt_raw,
            base_name: tgt_base,
        },
    ) = (src, tgt)
    else {
        return None;
    };

    if src_kind == tgt_kind {
        if eq_ignore_case(&src_base, &tgt_base) {
            return Some(format!("floor kind: {src_kind} ({src_raw} → {tgt_raw})"));
        }

        let common = shared_tokens(&src_base, &tgt_base);
        if !common.is_empty() {
            return Some(format!(
                "floor kind: {src_kind} + shared:{}",
                common.join(",")
            ));
        }
    }

    if let (Some(a), Some(b)) = (src_number, tgt_number) {
        if (a - b).abs() == 1 && eq_ignore_case(&src_base, &tgt_base) {
            return Some(format!("adjacent floor: {src_raw} ⇔ {tgt_raw}"));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(label: &str) -> (FloorKind, Option<i32>, String, String) {
        match extract_floor_info(label) {
            FloorInfo::Floor {
                kind,
                number,
                raw,
                base_name,
            } => (kind, number, raw, base_name),
            FloorInfo::NoFloor => panic!("expected floor info for {label:?}"),
        }
    }

    #[test]
    fn test_above_ground_suffix() {
        let (kind, number, raw, base) = floor("Floor Plan 3F");
        assert_eq!(kind, FloorKind::Above);
        assert_eq!(number, Some(3));
        assert_eq!(raw, "3F");
        assert_eq!(base, "Floor Plan");
    }

    #[test]
    fn test_japanese_storey() {
        let (kind, number, _, base) = floor("平面図 2階");
        assert_eq!(kind, FloorKind::Above);
        assert_eq!(number, Some(2));
        assert_eq!(base, "平面図");
    }

    #[test]
    fn test_basement() {
        let (kind, number, _, _) = floor("B1 機械室");
        assert_eq!(kind, FloorKind::Below);
        assert_eq!(number, Some(1));

    }

    #[test]
    fn test_storey_pattern_shadows_basement_prefix() {
        // `\d+階` is tried before `地下\d+階`, so 地下2階 reads as the
        // above-ground token 2階
        let (kind, number, raw, _) = floor("地下2階 平面図");
        assert_eq!(kind, FloorKind::Above);
        assert_eq!(number, Some(2));
        assert_eq!(raw, "2階");
    }

    #[test]
    fn test_roof_and_penthouse() {
        let (kind, number, _, _) = floor("RF 平面図");
        assert_eq!(kind, FloorKind::Roof);
        assert_eq!(number, None);

        let (kind, _, _, _) = floor("屋上 配置図");
        assert_eq!(kind, FloorKind::Roof);

        let (kind, _, _, _) = floor("PH 詳細");
        assert_eq!(kind, FloorKind::Penthouse);
    }

    #[test]
    fn test_ordinal_suffix() {
        let (kind, number, _, base) = floor("2nd Level Plan");
        assert_eq!(kind, FloorKind::Above);
        assert_eq!(number, Some(2));
        assert_eq!(base, "Level Plan");
    }

    #[test]
    fn test_no_floor() {
        assert_eq!(extract_floor_info("Site Overview"), FloorInfo::NoFloor);
        assert_eq!(extract_floor_info(""), FloorInfo::NoFloor);
    }

    #[test]
    fn test_base_name_trims_delimiters() {
        let (_, _, _, base) = floor("平面図-3階");
        assert_eq!(base, "平面図");
    }

    #[test]
    fn test_equal_base_takes_priority_over_adjacent() {
        // Same kind and equal base names hit the first branch even when
        // the storeys are also adjacent
        let reason = floor_match("Floor Plan 3F", "Floor Plan 4F").unwrap();
        assert!(reason.starts_with("floor kind:"), "got: {reason}");
    }

    #[test]
    fn test_shared_base_tokens() {
        let reason = floor_match("Floor Plan East 1F", "Floor Layout East 2F").unwrap();
        assert!(reason.contains("shared:"), "got: {reason}");
    }

    #[test]
    fn test_adjacent_floor_different_kind_path() {
        // 3F vs B1: kinds differ and numbers are not adjacent in the
        // required sense, no match
        assert!(floor_match("Plan 3F", "Plan B1").is_none());
    }

    #[test]
    fn test_no_designator_no_match() {
        assert!(floor_match("Floor Plan 3F", "Site Overview").is_none());
    }
}
