// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn viewmatch() -> Command {
    Command::cargo_bin("viewmatch").expect("binary built")
}

#[test]
fn match_reports_first_satisfying_candidate() {
    viewmatch()
        .args(["match", "test1", "--candidates", "test2", "other3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("test1 → test2"))
        .stdout(predicate::str::contains("test[1→2]"));
}

#[test]
fn match_without_result_is_not_an_error() {
    viewmatch()
        .args(["match", "alpha", "--candidates", "beta"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no match"));
}

#[test]
fn match_json_output() {
    viewmatch()
        .args([
            "--json",
            "match",
            "Floor Plan 3F",
            "--candidates",
            "Floor Plan 4F",
            "--mode",
            "floor",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"target\": \"Floor Plan 4F\""));
}

#[test]
fn unknown_mode_fails_fast() {
    viewmatch()
        .args(["match", "a", "--candidates", "b", "--mode", "fuzzy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown match mode"));
}

#[test]
fn batch_plans_across_sheets() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "sheets": {{
                "A-101": ["Floor Plan 1F", "Elevation North"],
                "A-102": ["Floor Plan 2F", "Elevation South"]
            }}
        }}"#
    )
    .expect("write batch input");

    viewmatch()
        .args(["batch"])
        .arg(file.path())
        .args(["--source-sheet", "A-101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A-102:"))
        .stdout(predicate::str::contains("2 matched, 0 unmatched"));
}

#[test]
fn batch_rejects_unknown_source_sheet() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "sheets": {{ "A-101": [] }} }}"#).expect("write batch input");

    viewmatch()
        .args(["batch"])
        .arg(file.path())
        .args(["--source-sheet", "A-999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("A-999"));
}

#[test]
fn batch_rejects_malformed_input() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "not json").expect("write batch input");

    viewmatch()
        .args(["batch"])
        .arg(file.path())
        .args(["--source-sheet", "A-101"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid batch input"));
}

#[test]
fn next_number_continues_sequence() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "A - 1\nA - 2\nA - 9").expect("write sheet numbers");

    viewmatch()
        .args(["next-number"])
        .arg(file.path())
        .args(["--prefix", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A - 10"));
}
