// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! View-category matching.
//!
//! Two labels correspond when they name the same drawing category
//! (floor plan, section, elevation, ...). Keyword sets carry both the
//! Japanese terms used in domestic projects and their English equivalents.
//!
//! Once a category is shared the match is accepted; shared orientation
//! tokens, numeric tokens and qualifier keywords are appended to the
//! reason for diagnostics but never change the decision.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::SmallVec;

use crate::tokens::contains_ignore_case;

struct ViewCategory {
    name: &'static str,
    keywords: &'static [&'static str],
}

static VIEW_CATEGORIES: &[ViewCategory] = &[
    ViewCategory {
        name: "floor plan",
        keywords: &["平面図", "平面", "PLAN", "フロアプラン", "FLOOR PLAN"],
    },
    ViewCategory {
        name: "section",
        keywords: &["断面図", "断面", "SECTION", "セクション", "矩計図", "矩計", "WALL SECTION"],
    },
    ViewCategory {
        name: "elevation",
        keywords: &["立面図", "立面", "ELEVATION", "エレベーション", "外観図"],
    },
    ViewCategory {
        name: "detail",
        keywords: &["詳細図", "詳細", "DETAIL", "ディテール", "部分詳細", "拡大図"],
    },
    ViewCategory {
        name: "ceiling",
        keywords: &["天井伏図", "天井", "CEILING", "天井プラン", "CEILING PLAN"],
    },
    ViewCategory {
        name: "site",
        keywords: &["配置図", "配置", "SITE", "サイトプラン", "SITE PLAN", "外構図"],
    },
    ViewCategory {
        name: "interior elevation",
        keywords: &["展開図", "展開", "INTERIOR", "内観図", "室内展開"],
    },
    ViewCategory {
        name: "structural",
        keywords: &["構造図", "構造", "STRUCTURAL", "梁伏図", "基礎図", "躯体図"],
    },
    ViewCategory {
        name: "mep",
        keywords: &["設備図", "設備", "MEP", "機械図", "電気図", "空調図", "衛生図"],
    },
];

/// Orientation tokens, matched as substrings like the category keywords.
const ORIENTATION_TOKENS: &[&str] = &[
    "東", "西", "南", "北", "E", "W", "S", "N", "EAST", "WEST", "SOUTH", "NORTH",
];

/// Numbering tokens shared between two labels of the same category
/// (01, A, ①, その1, TYPE A). Matched case-sensitively; the raw token
/// must be identical on both sides.
static NUMBER_TOKEN_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"\d+", r"[A-Z]", r"[①-⑩]", r"その\d+", r"TYPE\s*[A-Z]", r"タイプ\s*[A-Z]"]
        .iter()
        .map(|p| Regex::new(p).expect("invalid number token pattern"))
        .collect()
});

/// Qualifier keywords frequently shared within a drawing set.
const QUALIFIER_KEYWORDS: &[&str] = &[
    "既存", "新設", "改修", "撤去",
    "before", "after",
    "現況", "計画", "将来",
    "共用", "専用", "住戸", "店舗",
    "エントランス", "ロビー", "廊下", "階段",
    "A棟", "B棟", "C棟", "本館", "別館",
    "ZONE", "ゾーン", "エリア", "AREA",
];

/// Try to relate two labels through a shared view category.
///
/// Returns the match reason, e.g. `"category: floor plan + orientation:N"`,
/// or `None` when the labels share no category.
pub(crate) fn category_match(source: &str, target: &str) -> Option<String> {
    for category in VIEW_CATEGORIES {
        let source_has = category
            .keywords
            .iter()
            .any(|k| contains_ignore_case(source, k));
        let target_has = category
            .keywords
            .iter()
            .any(|k| contains_ignore_case(target, k));

        if !(source_has && target_has) {
            continue;
        }

        // Reason-only commonalities from here on.
        let mut common: SmallVec<[String; 8]> = SmallVec::new();

        for orientation in ORIENTATION_TOKENS {
            if contains_ignore_case(source, orientation)
                && contains_ignore_case(target, orientation)
            {
                common.push(format!("orientation:{orientation}"));
            }
        }

        for pattern in NUMBER_TOKEN_PATTERNS.iter() {
            if let (Some(src), Some(tgt)) = (pattern.find(source), pattern.find(target)) {
                if src.as_str() == tgt.as_str() {
                    common.push(format!("number:{}", src.as_str()));
                }
            }
        }

        for keyword in QUALIFIER_KEYWORDS {
            if contains_ignore_case(source, keyword) && contains_ignore_case(target, keyword) {
                common.push(format!("keyword:{keyword}"));
            }
        }

        let mut reason = format!("category: {}", category.name);
        if !common.is_empty() {
            reason.push_str(" + ");
            reason.push_str(&common.join(", "));
        }
        return Some(reason);
    }

    None
}
