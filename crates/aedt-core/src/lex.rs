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

//! Line classification into records.
//!
//! Each logical line is matched against five shapes in a fixed order:
//!
//! 1. `$begin '<name>'`
//! 2. `$end '<name>'`
//! 3. `name(args)`
//! 4. `key=value` (split at the first `=`)
//! 5. `key[index]`
//!
//! The order is significant. `VariableProp('w', 'UD', '', '1=2')` is claimed by
//! the function shape before the scalar shape can split it at the `=`, and
//! `Pos[3]=1.5` is a scalar with key `Pos[3]` rather than an array.

use crate::error::{AedtError, AedtResult};
use crate::escape::{encode, encode_value_for, EscapeContext};
use crate::limits::Limits;
use crate::preprocess::{is_blank_line, PreprocessedInput};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Name of the root block; its `$end` terminates the object model.
pub const ROOT_BLOCK: &str = "AnsoftProject";

static BEGIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$begin '(.*)'$").expect("valid regex"));

static END_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\$end '(.*)'$").expect("valid regex"));

static FUNCTION_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(\w+)(\(.*\))$").expect("valid regex"));

static SCALAR_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.[^=]*)=(.*)$").expect("valid regex"));

static ARRAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(\S+)\[(.+)\]$").expect("valid regex"));

/// One classified AEDT line. All payloads are in escaped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// `$begin '<name>'`, name encoded as a tag name.
    BlockBegin(String),
    /// `$end '<name>'`, name encoded as a tag name.
    BlockEnd(String),
    /// `name(args)`; `args` keeps its parentheses.
    FunctionCall { name: String, args: String },
    /// `key=value`.
    ScalarAssign { key: String, value: String },
    /// `key[index]`; `index` is the bracketed text.
    ArrayAssign { key: String, index: String },
}

/// Discriminant of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    BlockBegin,
    BlockEnd,
    FunctionCall,
    ScalarAssign,
    ArrayAssign,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BlockBegin => "begin",
            Self::BlockEnd => "end",
            Self::FunctionCall => "function",
            Self::ScalarAssign => "value",
            Self::ArrayAssign => "array",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::BlockBegin(_) => RecordKind::BlockBegin,
            Self::BlockEnd(_) => RecordKind::BlockEnd,
            Self::FunctionCall { .. } => RecordKind::FunctionCall,
            Self::ScalarAssign { .. } => RecordKind::ScalarAssign,
            Self::ArrayAssign { .. } => RecordKind::ArrayAssign,
        }
    }

    /// The element name this record maps to (block name or leaf key).
    pub fn tag(&self) -> &str {
        match self {
            Self::BlockBegin(name) | Self::BlockEnd(name) => name.as_str(),
            Self::FunctionCall { name, .. } => name.as_str(),
            Self::ScalarAssign { key, .. } | Self::ArrayAssign { key, .. } => key.as_str(),
        }
    }

    /// Leaf payload, `None` for block delimiters.
    pub fn payload(&self) -> Option<&str> {
        match self {
            Self::BlockBegin(_) | Self::BlockEnd(_) => None,
            Self::FunctionCall { args, .. } => Some(args.as_str()),
            Self::ScalarAssign { value, .. } => Some(value.as_str()),
            Self::ArrayAssign { index, .. } => Some(index.as_str()),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.payload().is_some()
    }

    /// Build a block-begin record from a raw block name.
    pub fn begin(name: &str) -> Self {
        Self::BlockBegin(encode(EscapeContext::TagName, name))
    }

    /// Build a block-end record from a raw block name.
    pub fn end(name: &str) -> Self {
        Self::BlockEnd(encode(EscapeContext::TagName, name))
    }

    /// Build a function-call record from raw text; `args` includes parentheses.
    pub fn function(name: &str, args: &str) -> Self {
        Self::FunctionCall {
            name: encode(EscapeContext::AttributeKey, name),
            args: encode(EscapeContext::AttributeValue, args),
        }
    }

    /// Build a scalar record from raw text.
    pub fn scalar(key: &str, value: &str) -> Self {
        Self::ScalarAssign {
            key: encode(EscapeContext::AttributeKey, key),
            value: encode_value_for(key, value),
        }
    }

    /// Build an array record from raw text.
    pub fn array(key: &str, index: &str) -> Self {
        Self::ArrayAssign {
            key: encode(EscapeContext::AttributeKey, key),
            index: encode(EscapeContext::AttributeValue, index),
        }
    }
}

/// Classify one logical line.
///
/// Leading and trailing whitespace is ignored. Returns `None` when the line
/// matches none of the five shapes.
pub fn classify(line: &str) -> Option<Record> {
    let line = line.trim();

    if let Some(caps) = BEGIN_REGEX.captures(line) {
        return Some(Record::begin(&caps[1]));
    }
    if let Some(caps) = END_REGEX.captures(line) {
        return Some(Record::end(&caps[1]));
    }
    if let Some(caps) = FUNCTION_REGEX.captures(line) {
        return Some(Record::function(&caps[1], &caps[2]));
    }
    if let Some(caps) = SCALAR_REGEX.captures(line) {
        return Some(Record::scalar(&caps[1], &caps[2]));
    }
    if let Some(caps) = ARRAY_REGEX.captures(line) {
        return Some(Record::array(&caps[1], &caps[2]));
    }
    None
}

/// Output of [`lex`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lexed {
    /// Records in source order.
    pub records: Vec<Record>,
    /// First physical line number of each record, parallel to `records`.
    pub lines: Vec<usize>,
    /// Number of non-blank lines that matched no shape.
    pub dropped: usize,
    /// Raw logical lines after the root terminator.
    pub trailer: Vec<String>,
    /// Whether `$end 'AnsoftProject'` was seen.
    pub terminated: bool,
}

/// Lex preprocessed input into records.
///
/// Unrecognized lines are dropped and counted. With `strict` set they fail
/// with `MalformedLine` instead.
pub fn lex(input: &PreprocessedInput, limits: &Limits, strict: bool) -> AedtResult<Lexed> {
    let mut out = Lexed::default();
    let mut lines = input.lines();

    for (line_num, line) in lines.by_ref() {
        if is_blank_line(line) {
            continue;
        }

        let Some(record) = classify(line) else {
            if strict {
                return Err(AedtError::malformed_line(
                    format!("unrecognized line: {}", preview(line)),
                    line_num,
                ));
            }
            tracing::debug!(line = line_num, text = %preview(line), "dropping unrecognized line");
            out.dropped += 1;
            continue;
        };

        if out.records.len() >= limits.max_records {
            return Err(AedtError::security(
                format!("too many records: exceeds limit of {}", limits.max_records),
                line_num,
            ));
        }

        let is_root_end = matches!(&record, Record::BlockEnd(name) if name == ROOT_BLOCK);
        out.records.push(record);
        out.lines.push(line_num);

        if is_root_end {
            out.terminated = true;
            break;
        }
    }

    out.trailer = lines.map(|(_, line)| line.to_string()).collect();

    if out.dropped > 0 {
        tracing::debug!(dropped = out.dropped, "lexing finished with dropped lines");
    }

    Ok(out)
}

/// Shorten a line for diagnostics.
fn preview(line: &str) -> String {
    const MAX: usize = 60;
    let line = line.trim();
    match line.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &line[..cut]),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::reassemble;
    use crate::AedtErrorKind;

    fn lex_text(text: &str) -> Lexed {
        let input = reassemble(text, &Limits::default()).unwrap();
        lex(&input, &Limits::default(), false).unwrap()
    }

    // ==================== Shape tests ====================

    #[test]
    fn test_block_begin_and_end() {
        assert_eq!(
            classify("$begin 'AnsoftProject'"),
            Some(Record::BlockBegin("AnsoftProject".to_string()))
        );
        assert_eq!(
            classify("\t\t$end 'Setup1'"),
            Some(Record::BlockEnd("Setup1".to_string()))
        );
    }

    #[test]
    fn test_block_names_are_escaped() {
        assert_eq!(
            classify("$begin '1'"),
            Some(Record::BlockBegin("__DIGI__1".to_string()))
        );
        assert_eq!(
            classify("$begin '-1'"),
            Some(Record::BlockBegin("__NEG__1".to_string()))
        );
        assert_eq!(
            classify("$begin 'Editor3D Doc Preferences'"),
            Some(Record::BlockBegin(
                "Editor3D__BLANK__Doc__BLANK__Preferences".to_string()
            ))
        );
    }

    #[test]
    fn test_scalar_with_quoted_value() {
        assert_eq!(
            classify("Foo='bar'"),
            Some(Record::ScalarAssign {
                key: "Foo".to_string(),
                value: "__APOSTROPHE__bar__APOSTROPHE__".to_string(),
            })
        );
    }

    #[test]
    fn test_scalar_splits_at_first_equals() {
        assert_eq!(
            classify("Expr='a=b'"),
            Some(Record::ScalarAssign {
                key: "Expr".to_string(),
                value: "__APOSTROPHE__a=b__APOSTROPHE__".to_string(),
            })
        );
    }

    #[test]
    fn test_function_call() {
        assert_eq!(
            classify("Version(2019, 1)"),
            Some(Record::FunctionCall {
                name: "Version".to_string(),
                args: "(2019, 1)".to_string(),
            })
        );
    }

    #[test]
    fn test_function_claims_before_scalar() {
        let record = classify("VariableProp('w', 'UD', '', 'a=b')").unwrap();
        assert_eq!(record.kind(), RecordKind::FunctionCall);
        assert_eq!(record.tag(), "VariableProp");
    }

    #[test]
    fn test_array_assignment() {
        assert_eq!(
            classify("Pos[3: 1, 2, 3]"),
            Some(Record::ArrayAssign {
                key: "Pos".to_string(),
                index: "3: 1, 2, 3".to_string(),
            })
        );
    }

    #[test]
    fn test_scalar_claims_before_array() {
        let record = classify("Pos[3]=1.5").unwrap();
        assert_eq!(
            record,
            Record::ScalarAssign {
                key: "Pos__LBRACKET__3__RBRACKET__".to_string(),
                value: "1.5".to_string(),
            }
        );
    }

    #[test]
    fn test_material_value_stripped() {
        assert_eq!(
            classify("MaterialValue='\"copper\"'"),
            Some(Record::ScalarAssign {
                key: "MaterialValue".to_string(),
                value: "copper".to_string(),
            })
        );
    }

    #[test]
    fn test_continued_value_matches() {
        let record = classify("ImageFile='abc\\\ndef\\\nghi'").unwrap();
        assert_eq!(record.kind(), RecordKind::ScalarAssign);
        assert_eq!(
            record.payload(),
            Some("__APOSTROPHE__abc\\__LF__def\\__LF__ghi__APOSTROPHE__")
        );
    }

    #[test]
    fn test_unrecognized_shapes() {
        assert_eq!(classify("just some words"), None);
        assert_eq!(classify("$begin"), None);
        assert_eq!(classify("   "), None);
    }

    // ==================== Stream tests ====================

    #[test]
    fn test_lex_stops_at_root_terminator() {
        let lexed = lex_text(
            "$begin 'AnsoftProject'\nA=1\n$end 'AnsoftProject'\n$begin 'AllReferencedFilesForProject'\n$end 'AllReferencedFilesForProject'\n",
        );
        assert!(lexed.terminated);
        assert_eq!(lexed.records.len(), 3);
        assert_eq!(
            lexed.trailer,
            vec![
                "$begin 'AllReferencedFilesForProject'".to_string(),
                "$end 'AllReferencedFilesForProject'".to_string(),
            ]
        );
    }

    #[test]
    fn test_lex_counts_dropped_lines() {
        let lexed = lex_text("$begin 'A'\nnot a record\n\n$end 'A'\n");
        assert_eq!(lexed.dropped, 1);
        assert_eq!(lexed.records.len(), 2);
        assert_eq!(lexed.lines, vec![1, 4]);
        assert!(!lexed.terminated);
    }

    #[test]
    fn test_lex_strict_rejects_unrecognized() {
        let input = reassemble("A=1\nnot a record\n", &Limits::default()).unwrap();
        let err = lex(&input, &Limits::default(), true).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::MalformedLine);
        assert_eq!(err.line, 2);
    }

    #[test]
    fn test_lex_record_limit() {
        let input = reassemble("A=1\nB=2\nC=3\n", &Limits::default()).unwrap();
        let limits = Limits {
            max_records: 2,
            ..Limits::default()
        };
        let err = lex(&input, &limits, false).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::Security);
    }

    #[test]
    fn test_record_kind_names() {
        assert_eq!(RecordKind::ScalarAssign.as_str(), "value");
        assert_eq!(RecordKind::FunctionCall.to_string(), "function");
        assert_eq!(RecordKind::ArrayAssign.as_str(), "array");
    }

    #[test]
    fn test_preview_truncates() {
        let long = "x".repeat(100);
        assert_eq!(preview(&long).len(), 63);
        assert_eq!(preview("short"), "short");
    }
}
