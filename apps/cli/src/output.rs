// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable rendering of match results and reports.

use viewmatch_core::{format_sheet_number, MatchReport, MatchResult};

pub fn print_match(source: &str, result: Option<&MatchResult>) {
    match result {
        Some(result) => {
            println!("{source} → {} ({})", result.target, result.reason);
        }
        None => println!("{source}: no match"),
    }
}

pub fn print_report(report: &MatchReport) {
    println!(
        "source sheet: {} (mode: {})",
        report.source_sheet, report.mode
    );

    for sheet in &report.sheets {
        println!("{}:", sheet.sheet);
        for pair in &sheet.matches {
            println!("  {} → {} ({})", pair.source, pair.target, pair.reason);
        }
    }

    println!(
        "{} matched, {} unmatched",
        report.total_matched, report.total_unmatched
    );
}

pub fn print_next_number(prefix: &str, next: u32) {
    println!("{}", format_sheet_number(prefix, next));
}
