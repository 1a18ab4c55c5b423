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

//! AEDT text generation from records.

use crate::build::flatten;
use crate::document::Document;
use crate::escape::{decode, decode_value_for, EscapeContext};
use crate::lex::Record;

/// Output configuration for [`unparse`].
#[derive(Debug, Clone, Default)]
pub struct UnparseConfig {
    /// Per-level indentation. `None` writes flat output.
    pub indent: Option<String>,
}

impl UnparseConfig {
    /// Flat output, no indentation.
    pub fn flat() -> Self {
        Self::default()
    }

    /// One tab per nesting level, as AEDT writers produce.
    pub fn tabs() -> Self {
        Self {
            indent: Some("\t".to_string()),
        }
    }
}

/// Turn records back into AEDT lines.
///
/// A block with no content comes out as its `$begin` line directly followed
/// by its `$end` line. Multi-line logical lines (continued values) are
/// returned as one entry with embedded line breaks.
pub fn unparse(records: &[Record], config: &UnparseConfig) -> Vec<String> {
    let mut lines = Vec::with_capacity(records.len());
    let mut depth = 0usize;

    for record in records {
        if matches!(record, Record::BlockEnd(_)) {
            depth = depth.saturating_sub(1);
        }

        let mut line = String::new();
        if let Some(indent) = &config.indent {
            for _ in 0..depth {
                line.push_str(indent);
            }
        }
        write_record(record, &mut line);
        lines.push(line);

        if matches!(record, Record::BlockBegin(_)) {
            depth += 1;
        }
    }

    lines
}

/// Flatten a document and unparse it.
pub fn unparse_document(doc: &Document, config: &UnparseConfig) -> Vec<String> {
    unparse(&flatten(doc), config)
}

/// Join lines into file text with a trailing newline.
pub fn lines_to_text(lines: &[String]) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn write_record(record: &Record, out: &mut String) {
    match record {
        Record::BlockBegin(name) => {
            out.push_str("$begin '");
            out.push_str(&decode(EscapeContext::TagName, name));
            out.push('\'');
        }
        Record::BlockEnd(name) => {
            out.push_str("$end '");
            out.push_str(&decode(EscapeContext::TagName, name));
            out.push('\'');
        }
        Record::FunctionCall { name, args } => {
            out.push_str(&decode(EscapeContext::AttributeKey, name));
            out.push_str(&decode(EscapeContext::AttributeValue, args));
        }
        Record::ScalarAssign { key, value } => {
            let key = decode(EscapeContext::AttributeKey, key);
            out.push_str(&key);
            out.push('=');
            out.push_str(&decode_value_for(&key, value));
        }
        Record::ArrayAssign { key, index } => {
            out.push_str(&decode(EscapeContext::AttributeKey, key));
            out.push('[');
            out.push_str(&decode(EscapeContext::AttributeValue, index));
            out.push(']');
        }
    }
}
