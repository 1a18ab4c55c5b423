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

//! Validate command - AEDT structure validation

use super::{parse_options, read_file};
use crate::error::CliError;
use aedt::codec::{flatten, RecordKind};
use aedt::{parse_with_options, ProjectIndex};
use colored::Colorize;

/// Parse a project file and report its structure.
///
/// Prints a summary with record counts by kind, the number of designs, and
/// how many lines were dropped or kept after the root block. In strict mode
/// any unrecognized line fails the validation.
pub fn validate(file: &str, strict: bool) -> Result<(), CliError> {
    let bytes = read_file(file)?;

    let out = match parse_with_options(&bytes, &parse_options(strict)) {
        Ok(out) => out,
        Err(e) => {
            println!("{} {}", "✗".red().bold(), file);
            return Err(e.into());
        }
    };

    let records = flatten(&out.document);
    let count = |kind: RecordKind| records.iter().filter(|r| r.kind() == kind).count();
    let designs = ProjectIndex::build(&out.document).designs.len();

    println!("{} {}", "✓".green().bold(), file);
    println!(
        "  Blocks: {}  Values: {}  Functions: {}  Arrays: {}",
        count(RecordKind::BlockBegin),
        count(RecordKind::ScalarAssign),
        count(RecordKind::FunctionCall),
        count(RecordKind::ArrayAssign)
    );
    println!("  Designs: {}", designs);
    println!("  Dropped lines: {}", out.dropped_lines);
    println!("  Trailer lines: {}", out.trailer.len());
    if !out.terminated {
        println!(
            "  {}",
            "warning: no $end 'AnsoftProject' terminator".yellow()
        );
    }
    if strict {
        println!("  Mode: strict (unrecognized lines are errors)");
    }
    Ok(())
}
