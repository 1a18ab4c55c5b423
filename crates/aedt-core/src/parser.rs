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

//! Main AEDT parser.

use crate::build::build_with_lines;
use crate::document::Document;
use crate::error::AedtResult;
use crate::lex::lex;
use crate::limits::Limits;
use crate::preprocess::preprocess;

/// Parsing options.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
    /// Fail on lines that match no record shape instead of dropping them.
    pub strict: bool,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    ///
    /// # Examples
    ///
    /// ```
    /// use aedt_core::ParseOptions;
    ///
    /// let opts = ParseOptions::builder().max_block_depth(64).strict(true).build();
    /// assert!(opts.strict);
    /// assert_eq!(opts.limits.max_block_depth, 64);
    /// ```
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    limits: Limits,
    strict: bool,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum `$begin` nesting depth (default: 512).
    pub fn max_block_depth(mut self, depth: usize) -> Self {
        self.limits.max_block_depth = depth;
        self
    }

    /// Set the maximum input size in bytes (default: 1GB).
    pub fn max_file_size(mut self, size: usize) -> Self {
        self.limits.max_file_size = size;
        self
    }

    /// Set the maximum logical line length in bytes (default: 256MB).
    pub fn max_line_length(mut self, length: usize) -> Self {
        self.limits.max_line_length = length;
        self
    }

    /// Set the maximum number of records (default: 50M).
    pub fn max_records(mut self, count: usize) -> Self {
        self.limits.max_records = count;
        self
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Reject unrecognized lines with `MalformedLine`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn build(self) -> ParseOptions {
        ParseOptions {
            limits: self.limits,
            strict: self.strict,
        }
    }
}

/// Everything a parse produces besides the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    pub document: Document,
    /// Raw logical lines after `$end 'AnsoftProject'`.
    pub trailer: Vec<String>,
    /// Non-blank lines that matched no record shape.
    pub dropped_lines: usize,
    /// Whether the root terminator was seen.
    pub terminated: bool,
}

/// Parse AEDT bytes into a document.
pub fn parse(input: &[u8]) -> AedtResult<Document> {
    parse_with_options(input, &ParseOptions::default()).map(|out| out.document)
}

/// Parse AEDT bytes with custom options.
pub fn parse_with_options(input: &[u8], options: &ParseOptions) -> AedtResult<ParseOutput> {
    // Phase 1: decode and join continued lines
    let preprocessed = preprocess(input, &options.limits)?;

    // Phase 2: classify lines
    let lexed = lex(&preprocessed, &options.limits, options.strict)?;

    // Phase 3: build the tree
    let document = build_with_lines(&lexed.records, &lexed.lines, &options.limits)?;

    tracing::debug!(
        records = lexed.records.len(),
        dropped = lexed.dropped,
        trailer = lexed.trailer.len(),
        "parsed AEDT input"
    );

    Ok(ParseOutput {
        document,
        trailer: lexed.trailer,
        dropped_lines: lexed.dropped,
        terminated: lexed.terminated,
    })
}
