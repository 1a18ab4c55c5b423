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

//! Input preprocessing: byte decoding and line reassembly.
//!
//! AEDT writers split long records across physical lines by ending a line
//! with a backslash. Reassembly joins those lines back into one logical line
//! and keeps the marker and the line break in the joined text, so the exact
//! bytes of the continued record can be written out again.

use crate::error::{AedtError, AedtResult};
use crate::limits::Limits;
use std::borrow::Cow;

/// Continuation marker: a backslash immediately before the line terminator.
pub const CONTINUATION: &str = "\\\n";

/// Preprocessed input ready for lexing.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedInput {
    /// Logical lines as (first physical line number, text).
    lines: Vec<(usize, String)>,
}

impl PreprocessedInput {
    /// Get logical lines as (line_num, &str).
    #[inline]
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(|(num, text)| (*num, text.as_str()))
    }

    /// Number of logical lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Decode raw bytes into text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected,
/// a leading BOM is skipped and CRLF line endings are normalized to LF.
pub fn decode_input(input: &[u8]) -> Cow<'_, str> {
    let text = String::from_utf8_lossy(input);
    let text = match text {
        Cow::Borrowed(s) => Cow::Borrowed(s.strip_prefix('\u{FEFF}').unwrap_or(s)),
        Cow::Owned(s) => match s.strip_prefix('\u{FEFF}') {
            Some(rest) => Cow::Owned(rest.to_string()),
            None => Cow::Owned(s),
        },
    };

    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        text
    }
}

/// Join continued physical lines into logical lines.
///
/// Fails with `EmptyInput` when no logical line has any content.
pub fn reassemble(text: &str, limits: &Limits) -> AedtResult<PreprocessedInput> {
    if text.len() > limits.max_file_size {
        return Err(AedtError::security(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }

    let mut lines = Vec::new();
    let mut pending = String::new();
    let mut pending_start = 1;

    for (index, physical) in text.split_inclusive('\n').enumerate() {
        let line_num = index + 1;
        if pending.is_empty() {
            pending_start = line_num;
        }
        pending.push_str(physical);

        if physical.ends_with(CONTINUATION) {
            check_line_length(&pending, pending_start, limits)?;
            continue;
        }

        push_logical(&mut lines, &mut pending, pending_start, limits)?;
    }

    // A continuation marker on the very last line has nothing to join with.
    if !pending.is_empty() {
        push_logical(&mut lines, &mut pending, pending_start, limits)?;
    }

    if lines.iter().all(|(_, line): &(usize, String)| is_blank_line(line)) {
        return Err(AedtError::empty_input("no readable content in AEDT input"));
    }

    Ok(PreprocessedInput { lines })
}

/// Decode and reassemble in one step.
pub fn preprocess(input: &[u8], limits: &Limits) -> AedtResult<PreprocessedInput> {
    if input.len() > limits.max_file_size {
        return Err(AedtError::security(
            format!("file too large: exceeds limit of {} bytes", limits.max_file_size),
            0,
        ));
    }
    reassemble(&decode_input(input), limits)
}

fn push_logical(
    lines: &mut Vec<(usize, String)>,
    pending: &mut String,
    start: usize,
    limits: &Limits,
) -> AedtResult<()> {
    if pending.ends_with('\n') {
        pending.pop();
    }
    check_line_length(pending, start, limits)?;
    lines.push((start, std::mem::take(pending)));
    Ok(())
}

fn check_line_length(line: &str, line_num: usize, limits: &Limits) -> AedtResult<()> {
    if line.len() > limits.max_line_length {
        return Err(AedtError::security(
            format!(
                "line too long: exceeds limit of {} bytes",
                limits.max_line_length
            ),
            line_num,
        ));
    }
    Ok(())
}

/// Check if a line is blank (empty or whitespace only).
pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}
