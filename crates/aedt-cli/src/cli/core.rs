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

//! Core commands operating on a single project file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum CoreCommands {
    /// Validate an AEDT file
    ///
    /// Parses the file and reports record counts, designs, dropped lines and
    /// trailing lines after the project block.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Fail on lines that match no record shape
        #[arg(short, long)]
        strict: bool,
    },

    /// Show designs, variables, setups and reports
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Also print the whole document tree
        #[arg(short, long)]
        verbose: bool,
    },

    /// Normalize an AEDT file through a parse and re-write
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Indent nested lines with tabs
        #[arg(short, long)]
        indent: bool,

        /// Check only (exit 1 if not normalized)
        #[arg(short, long)]
        check: bool,
    },

    /// Change a design variable and save the result
    SetVariable {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Design name, as given by its `Name` entry
        #[arg(value_name = "DESIGN")]
        design: String,

        /// Variable name
        #[arg(value_name = "NAME")]
        name: String,

        /// New value expression, e.g. 5mm
        #[arg(value_name = "VALUE")]
        value: String,

        /// Output .aedt file
        #[arg(short, long)]
        output: String,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Validate { file, strict } => commands::validate(&file, strict),
            CoreCommands::Inspect { file, verbose } => commands::inspect(&file, verbose),
            CoreCommands::Format {
                file,
                output,
                indent,
                check,
            } => commands::format(&file, output.as_deref(), indent, check),
            CoreCommands::SetVariable {
                file,
                design,
                name,
                value,
                output,
            } => commands::set_variable(&file, &design, &name, &value, &output),
        }
    }
}
