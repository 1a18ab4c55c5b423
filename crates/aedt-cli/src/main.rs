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

//! AEDT Command Line Interface

use aedt_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// AEDT - Electronics Desktop project toolkit
///
/// # Examples
///
/// ```bash
/// # Check that a project parses
/// aedt validate Motor.aedt
///
/// # Change a variable
/// aedt set-variable Motor.aedt Maxwell3DDesign1 width 5mm -o Motor_5mm.aedt
///
/// # XML round trip
/// aedt to-xml Motor.aedt -o motor.xml
/// aedt from-xml motor.xml -o Motor_copy.aedt
/// ```
#[derive(Parser)]
#[command(name = "aedt")]
#[command(author, version, about = "AEDT - Electronics Desktop project toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Logging to stderr, quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
