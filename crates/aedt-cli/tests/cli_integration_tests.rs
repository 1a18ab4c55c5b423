// Dweve AEDT - Electronics Desktop project codec
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
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

//! CLI integration tests

use aedt_test::fixtures;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{NamedTempFile, TempDir};

fn aedt_cmd() -> Command {
    Command::cargo_bin("aedt").expect("Failed to find aedt binary")
}

fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn maxwell_file() -> NamedTempFile {
    create_temp_file(fixtures::maxwell_project(), ".aedt")
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    aedt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Electronics Desktop project toolkit"))
        .stdout(predicate::str::contains("set-variable"));
}

#[test]
fn test_no_subcommand_fails() {
    aedt_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_fixture() {
    let file = maxwell_file();
    aedt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Designs: 2"))
        .stdout(predicate::str::contains("Trailer lines: 6"));
}

#[test]
fn test_validate_invalid_files() {
    for (_, text, _) in fixtures::errors::invalid_samples() {
        let file = create_temp_file(text, ".aedt");
        aedt_cmd()
            .arg("validate")
            .arg(file.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("Error:"))
            .stdout(predicate::str::contains("✗"));
    }
}

#[test]
fn test_validate_strict_rejects_unknown_lines() {
    let file = create_temp_file(
        "$begin 'AnsoftProject'\nnot a record\n$end 'AnsoftProject'\n",
        ".aedt",
    );
    aedt_cmd()
        .arg("validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped lines: 1"));
    aedt_cmd()
        .args(["validate", "--strict"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_file_size_limit_from_env() {
    let file = maxwell_file();
    aedt_cmd()
        .env("AEDT_MAX_FILE_SIZE", "16")
        .arg("validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("byte limit"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_lists_designs() {
    let file = maxwell_file();
    aedt_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Maxwell3DDesign1"))
        .stdout(predicate::str::contains("RMxprtDesign1"))
        .stdout(predicate::str::contains("3mm"))
        .stdout(predicate::str::contains("Flux Plot"));
}

#[test]
fn test_inspect_verbose_prints_tree() {
    let file = maxwell_file();
    aedt_cmd()
        .args(["inspect", "--verbose"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Editor3D Doc Preferences"));
}

// ===== Format Command Tests =====

#[test]
fn test_format_check_indented_fixture() {
    let file = maxwell_file();
    aedt_cmd()
        .args(["format", "--indent", "--check"])
        .arg(file.path())
        .assert()
        .success();
    aedt_cmd()
        .args(["format", "--check"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in normalized form"));
}

#[test]
fn test_format_flat_to_stdout() {
    let file = create_temp_file(fixtures::minimal_project(), ".aedt");
    aedt_cmd()
        .arg("format")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("$begin 'AnsoftProject'\n"))
        .stdout(predicate::str::contains("\n\t").not());
}

// ===== Set-Variable Command Tests =====

#[test]
fn test_set_variable_writes_output() {
    let file = maxwell_file();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("edited.aedt");

    aedt_cmd()
        .args(["set-variable"])
        .arg(file.path())
        .args(["Maxwell3DDesign1", "width", "8mm", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("3mm -> 8mm"));

    let text = fs::read_to_string(&out).unwrap();
    assert!(text.contains("VariableProp('width', 'UD', '', '8mm')"));
    assert!(text.contains("VariableProp('height', 'UD', '', '10mm')"));
}

#[test]
fn test_set_variable_unknown_design() {
    let file = maxwell_file();
    let dir = TempDir::new().unwrap();
    aedt_cmd()
        .arg("set-variable")
        .arg(file.path())
        .args(["NoSuchDesign", "width", "8mm", "-o"])
        .arg(dir.path().join("out.aedt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("NoSuchDesign"));
}

#[test]
fn test_set_variable_rejects_extension() {
    let file = maxwell_file();
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.txt");
    aedt_cmd()
        .arg("set-variable")
        .arg(file.path())
        .args(["Maxwell3DDesign1", "width", "8mm", "-o"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output"));
    assert!(!out.exists());
}

// ===== Conversion Command Tests =====

#[test]
fn test_xml_round_trip_through_files() {
    let file = maxwell_file();
    let dir = TempDir::new().unwrap();
    let xml = dir.path().join("motor.xml");
    let back = dir.path().join("motor.aedt");

    aedt_cmd()
        .arg("to-xml")
        .arg(file.path())
        .arg("-o")
        .arg(&xml)
        .assert()
        .success();
    assert!(fs::read_to_string(&xml).unwrap().starts_with("<?xml"));

    aedt_cmd()
        .arg("from-xml")
        .arg(&xml)
        .arg("-o")
        .arg(&back)
        .assert()
        .success();

    // The XML form carries the project block only; the trailer is not part
    // of the tree.
    let expected: String = fixtures::maxwell_project()
        .split_inclusive('\n')
        .take_while(|line| *line != "$end 'AnsoftProject'\n")
        .chain(std::iter::once("$end 'AnsoftProject'\n"))
        .collect();
    assert_eq!(fs::read_to_string(&back).unwrap(), expected);
}

#[test]
fn test_from_xml_rejects_bad_xml() {
    let file = create_temp_file("<aedt><A type=\"blob\" value=\"1\"/></aedt>", ".xml");
    let dir = TempDir::new().unwrap();
    aedt_cmd()
        .arg("from-xml")
        .arg(file.path())
        .arg("-o")
        .arg(dir.path().join("out.aedt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("XML bridge error"));
}

#[test]
fn test_to_xml_compact_to_stdout() {
    let file = create_temp_file(
        "$begin 'AnsoftProject'\nFoo='bar'\n$end 'AnsoftProject'\n",
        ".aedt",
    );
    aedt_cmd()
        .args(["to-xml", "--compact"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#"<AnsoftProject><Foo type="value" value="__APOSTROPHE__bar__APOSTROPHE__"/></AnsoftProject>"#,
        ));
}

#[test]
fn test_to_json_decoded() {
    let file = maxwell_file();
    let output = aedt_cmd()
        .args(["to-json", "--decode"])
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value["AnsoftProject"]["Maxwell3DModel"]["Name"]["@value"],
        "'Maxwell3DDesign1'"
    );
}
