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

//! Round-trip tests: AEDT text -> records -> tree -> AEDT text.

use aedt_core::lex::classify;
use aedt_core::preprocess::reassemble;
use aedt_core::{
    build, flatten, lines_to_text, parse, parse_with_options, unparse, unparse_document,
    LeafKind, Limits, ParseOptions, Record, UnparseConfig,
};
use aedt_test::fixtures;

fn records_of(text: &str) -> Vec<Record> {
    let input = reassemble(text, &Limits::default()).unwrap();
    let lexed = aedt_core::lex::lex(&input, &Limits::default(), false).unwrap();
    lexed.records
}

fn round_trip_text(text: &str, config: &UnparseConfig) -> String {
    let doc = parse(text.as_bytes()).unwrap();
    lines_to_text(&unparse_document(&doc, config))
}

// ==================== Fixture round trips ====================

#[test]
fn test_all_fixtures_relex_to_identical_records() {
    for (name, text) in fixtures::all() {
        let original = records_of(text);
        let output = round_trip_text(text, &UnparseConfig::flat());
        assert_eq!(records_of(&output), original, "fixture {}", name);
    }
}

#[test]
fn test_indented_output_relexes_to_identical_records() {
    for (name, text) in fixtures::all() {
        let output = round_trip_text(text, &UnparseConfig::tabs());
        assert_eq!(records_of(&output), records_of(text), "fixture {}", name);
    }
}

#[test]
fn test_tab_indented_fixture_reproduced_exactly() {
    let text = fixtures::minimal_project();
    assert_eq!(round_trip_text(text, &UnparseConfig::tabs()), text);
}

#[test]
fn test_flat_output_has_no_indentation() {
    let output = round_trip_text(fixtures::minimal_project(), &UnparseConfig::flat());
    assert!(output.lines().all(|line| !line.starts_with('\t')));
}

#[test]
fn test_second_round_trip_is_stable() {
    let text = fixtures::maxwell_project();
    let once = round_trip_text(text, &UnparseConfig::flat());
    let twice = round_trip_text(&once, &UnparseConfig::flat());
    assert_eq!(once, twice);
}

#[test]
fn test_build_flatten_preserves_records() {
    let records = records_of(fixtures::maxwell_project());
    let doc = build(&records, &Limits::default()).unwrap();
    assert_eq!(flatten(&doc), records);
}

// ==================== Worked examples ====================

#[test]
fn test_quoted_scalar() {
    let record = classify("Foo='bar'").unwrap();
    assert_eq!(
        record,
        Record::ScalarAssign {
            key: "Foo".to_string(),
            value: "__APOSTROPHE__bar__APOSTROPHE__".to_string(),
        }
    );

    let doc = build(std::slice::from_ref(&record), &Limits::default()).unwrap();
    assert_eq!(doc.nodes[0].leaf_kind(), Some(LeafKind::Value));
    assert_eq!(
        unparse(&flatten(&doc), &UnparseConfig::flat()),
        vec!["Foo='bar'"]
    );
}

#[test]
fn test_empty_block_pair() {
    let text = "$begin 'Setup1'\n$end 'Setup1'\n";
    let doc = parse(text.as_bytes()).unwrap();
    assert_eq!(doc.nodes.len(), 1);
    assert!(doc.nodes[0].children.is_empty());
    assert_eq!(round_trip_text(text, &UnparseConfig::flat()), text);
}

#[test]
fn test_array_index_verbatim() {
    let text = "Pos[3: 1, 2, 3]\nPos[3]=1.5\n";
    let records = records_of(text);
    assert_eq!(
        records[0],
        Record::ArrayAssign {
            key: "Pos".to_string(),
            index: "3: 1, 2, 3".to_string(),
        }
    );
    assert_eq!(
        records[1],
        Record::ScalarAssign {
            key: "Pos__LBRACKET__3__RBRACKET__".to_string(),
            value: "1.5".to_string(),
        }
    );
    assert_eq!(round_trip_text(text, &UnparseConfig::flat()), text);
}

#[test]
fn test_material_value() {
    let text = "MaterialValue='\"copper\"'\n";
    let doc = parse(text.as_bytes()).unwrap();
    assert_eq!(doc.nodes[0].value(), Some("copper"));
    assert_eq!(round_trip_text(text, &UnparseConfig::flat()), text);
}

#[test]
fn test_continuation_markers_preserved() {
    let text = fixtures::continuation_project();
    let records = records_of(text);
    assert_eq!(records.len(), 6);

    let output = round_trip_text(text, &UnparseConfig::flat());
    assert!(output.contains("ImageFile='abc\\\ndef\\\nghi'\n"));
    assert_eq!(output.matches("\\\n").count(), 2);
}

#[test]
fn test_maxwell_continuation_preserved() {
    let output = round_trip_text(fixtures::maxwell_project(), &UnparseConfig::tabs());
    assert!(output.contains(
        "\t\tImageFile='iVBORw0KGgoAAAANSUhE\\\nUgAAAAEAAAABCAYAAAAf\\\nFcSJAAAADUlEQVR42mNk'\n"
    ));
}

// ==================== Trailer ====================

#[test]
fn test_trailer_not_in_object_model() {
    let out = parse_with_options(
        fixtures::maxwell_project().as_bytes(),
        &ParseOptions::default(),
    )
    .unwrap();
    assert!(out.terminated);
    assert_eq!(out.document.nodes.len(), 1);
    assert_eq!(out.trailer.len(), fixtures::maxwell_trailer_len());
    assert_eq!(out.trailer[0], "$begin 'AllReferencedFilesForProject'");
}
