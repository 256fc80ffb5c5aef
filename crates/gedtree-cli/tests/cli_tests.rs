// gedtree - GEDCOM lineage-linked document toolkit
//
// Copyright (c) 2026 gedtree contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for the gedtree binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

fn gedtree_cmd() -> Command {
    Command::cargo_bin("gedtree").expect("Failed to find gedtree binary")
}

const SAMPLE: &str = "0 HEAD\n\
1 SOUR GEDTREE\n\
0 @I1@ INDI\n\
1 NAME John /Doe/\n\
1 SEX M\n\
1 BIRT\n\
2 DATE 1 JAN 1900\n\
0 @I2@ INDI\n\
1 NAME Jane /Roe/\n\
0 @F1@ FAM\n\
1 HUSB @I1@\n\
1 WIFE @I2@\n\
1 CHIL @I3@\n\
0 TRLR\n";

fn write_sample(dir: &TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path.to_str().unwrap().to_string()
}

// ==================== validate tests ====================

#[test]
fn test_validate_valid_file() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    gedtree_cmd()
        .args(["validate", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Persons: 2"))
        .stdout(predicate::str::contains("Families: 1"));
}

#[test]
fn test_validate_malformed_level_fails() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "bad.ged", "0 HEAD\nX NAME John\n");

    gedtree_cmd()
        .args(["validate", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MalformedLevelError"));
}

#[test]
fn test_validate_missing_file_fails() {
    gedtree_cmd()
        .args(["validate", "/nonexistent/file.ged"])
        .assert()
        .failure();
}

#[test]
fn test_validate_max_level_enforced() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "deep.ged", SAMPLE);

    gedtree_cmd()
        .args(["validate", &file, "--max-level", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SecurityError"));
}

// ==================== convert tests ====================

#[test]
fn test_convert_to_ged_normalizes() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    gedtree_cmd()
        .args(["convert", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 @I1@ INDI\r\n1 NAME John /Doe/"))
        .stdout(predicate::str::contains("0 TRLR"));
}

#[test]
fn test_convert_to_tsv() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    gedtree_cmd()
        .args(["convert", &file, "--to", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1\tNAME\tJohn /Doe/"));
}

#[test]
fn test_convert_to_json_and_back() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);
    let json_path = dir.path().join("family.json");
    let json_path = json_path.to_str().unwrap();

    gedtree_cmd()
        .args(["convert", &file, "--to", "json", "--output", json_path])
        .assert()
        .success();

    let json = fs::read_to_string(json_path).unwrap();
    assert!(json.contains("\"kind\": \"INDI\""));

    gedtree_cmd()
        .args(["from-json", json_path])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 NAME John /Doe/"))
        .stdout(predicate::str::contains("0 TRLR"));
}

#[test]
fn test_convert_json_compact() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    let output = gedtree_cmd()
        .args(["convert", &file, "--to", "json", "--compact"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    // One line of JSON plus the trailing newline
    assert_eq!(stdout.trim_end().lines().count(), 1);
}

#[test]
fn test_from_json_rejects_bad_shape() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "bad.json", r#"{"I1": {"line": "0 @I1@ INDI"}}"#);

    gedtree_cmd()
        .args(["from-json", &file])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid context shape"));
}

// ==================== persons tests ====================

#[test]
fn test_persons_lists_individuals() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    gedtree_cmd()
        .args(["persons", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("John /Doe/"))
        .stdout(predicate::str::contains("Jane /Roe/"))
        .stdout(predicate::str::contains("2 persons"));
}

// ==================== stats tests ====================

#[test]
fn test_stats_summary() {
    let dir = tempdir().unwrap();
    let file = write_sample(&dir, "family.ged", SAMPLE);

    gedtree_cmd()
        .args(["stats", &file])
        .assert()
        .success()
        .stdout(predicate::str::contains("Records: 4"))
        .stdout(predicate::str::contains("Max depth: 2"));
}
