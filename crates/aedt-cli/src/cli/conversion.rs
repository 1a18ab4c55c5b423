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

//! Format conversion commands.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Conversion commands.
///
/// `to-xml` and `from-xml` are exact inverses for any project; `to-json` is
/// an export only.
#[derive(Subcommand)]
pub enum ConversionCommands {
    /// Convert AEDT to XML
    ToXml {
        /// Input AEDT file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Single line, no XML declaration
        #[arg(long)]
        compact: bool,
    },

    /// Convert XML back to AEDT
    FromXml {
        /// Input XML file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output .aedt file
        #[arg(short, long)]
        output: String,
    },

    /// Export AEDT as JSON
    ToJson {
        /// Input AEDT file
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,

        /// Show names and values as written in the AEDT file
        #[arg(short, long)]
        decode: bool,
    },
}

impl ConversionCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToXml {
                file,
                output,
                compact,
            } => commands::to_xml(&file, output.as_deref(), compact),
            ConversionCommands::FromXml { file, output } => commands::from_xml(&file, &output),
            ConversionCommands::ToJson {
                file,
                output,
                pretty,
                decode,
            } => commands::to_json(&file, output.as_deref(), pretty, decode),
        }
    }
}
