// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numbering-convention matching.
//!
//! View series are commonly numbered: "Detail 1" / "Detail 2",
//! "test-01" / "test-02", "平面図その1" / "平面図その2". Each convention
//! extracts a `(base, number)` pair from a label; two labels correspond
//! when the same convention matches both, the bases are equal and the
//! numbers differ.
//!
//! Conventions are tried in a fixed order and the first hit on both
//! labels decides, so ordering is part of the contract.

use std::sync::LazyLock;

use regex::Regex;

/// How a convention's capture groups map onto `(base, number)`.
///
/// Keeping this explicit avoids deciding the branch by counting groups.
#[derive(Debug, Clone, Copy)]
enum GroupShape {
    /// `(base)(number)`: base is group 1, number group 2.
    BaseNumber,
    /// `(head)(number)(tail)`: base is groups 1+3, number group 2.
    SplitBase,
    /// `(head)(marker)(number)(tail)`: base is groups 1+2+4, number group 3.
    MarkedNumber,
}

struct NumberConvention {
    name: &'static str,
    pattern: Regex,
    shape: GroupShape,
}

impl NumberConvention {
    fn new(name: &'static str, pattern: &str, shape: GroupShape) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("invalid numbering convention pattern"),
            shape,
        }
    }

    /// Extract the `(base, number)` pair, or `None` if the label does not
    /// follow this convention. Numbers stay as raw strings so that "01"
    /// and "1" remain distinct.
    fn extract(&self, label: &str) -> Option<(String, String)> {
        let caps = self.pattern.captures(label)?;
        let group = |i: usize| caps.get(i).map(|m| m.as_str()).unwrap_or("");
        match self.shape {
            GroupShape::BaseNumber => Some((group(1).to_string(), group(2).to_string())),
            GroupShape::SplitBase => {
                Some((format!("{}{}", group(1), group(3)), group(2).to_string()))
            }
            GroupShape::MarkedNumber => Some((
                format!("{}{}{}", group(1), group(2), group(4)),
                group(3).to_string(),
            )),
        }
    }
}

static CONVENTIONS: LazyLock<Vec<NumberConvention>> = LazyLock::new(|| {
    vec![
        // test1, test2
        NumberConvention::new("trailing number", r"(?i)^(.+?)(\d+)$", GroupShape::BaseNumber),
        // test-1, test_2, test 3
        NumberConvention::new(
            "delimited number",
            r"(?i)^(.+?)[-_\s]+(\d+)$",
            GroupShape::BaseNumber,
        ),
        // test(1), test(2)
        NumberConvention::new(
            "parenthesized number",
            r"(?i)^(.+?)\((\d+)\)(.*)$",
            GroupShape::SplitBase,
        ),
        // test1view, test2view
        NumberConvention::new(
            "embedded number",
            r"(?i)^(.+?)(\d+)(.+)$",
            GroupShape::SplitBase,
        ),
        // testA, testB
        NumberConvention::new("letter suffix", r"(?i)^(.+?)([A-Z])$", GroupShape::BaseNumber),
        // testⅠ, testⅡ
        NumberConvention::new(
            "roman numeral",
            r"(?i)^(.+?)([ⅠⅡⅢⅣⅤⅥⅦⅧⅨⅩⅰⅱⅲⅳⅴⅵⅶⅷⅸⅹ]+)$",
            GroupShape::BaseNumber,
        ),
        // test01, test02
        NumberConvention::new(
            "zero-padded number",
            r"(?i)^(.+?)(\d{2,})$",
            GroupShape::BaseNumber,
        ),
        // その1, 第2, No.3
        NumberConvention::new(
            "ordinal marker",
            r"(?i)^(.+?)(その|第|No\.?|№)(\d+)(.*)$",
            GroupShape::MarkedNumber,
        ),
    ]
});

// Transposed layout: a leading number on one label, trailing on the other
// ("1-test" vs "test-2").
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)[-_\s]*(.+)$").expect("invalid leading-number pattern"));
static TRAILING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)[-_\s]*(\d+)$").expect("invalid trailing-number pattern"));

/// Try to relate two labels through a shared numbering convention.
///
/// Returns the match reason, e.g. `"trailing number: test[1→2]"`, or `None`
/// when no convention relates the labels.
pub(crate) fn number_pattern_match(source: &str, target: &str) -> Option<String> {
    for conv in CONVENTIONS.iter() {
        let (Some((src_base, src_num)), Some((tgt_base, tgt_num))) =
            (conv.extract(source), conv.extract(target))
        else {
            continue;
        };

        // Same series, different position in it. Identical numbers are an
        // exact-name concern, not a series correspondence.
        if crate::tokens::eq_ignore_case(&src_base, &tgt_base) && src_num != tgt_num {
            return Some(format!(
                "{}: {}[{}→{}]",
                conv.name, src_base, src_num, tgt_num
            ));
        }
    }

    let lead = LEADING_NUMBER.captures(source)?;
    let trail = TRAILING_NUMBER.captures(target)?;
    let lead_rest = lead.get(2).map(|m| m.as_str())?;
    let trail_rest = trail.get(1).map(|m| m.as_str())?;
    if crate::tokens::eq_ignore_case(lead_rest, trail_rest) {
        return Some(format!("transposed number: {lead_rest}"));
    }

    None
}
