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

//! Set-variable command - edit one design variable

use super::load_project;
use crate::error::CliError;
use colored::Colorize;
use std::path::Path;

/// Change a design variable and save the project to `output`.
pub fn set_variable(
    file: &str,
    design: &str,
    name: &str,
    value: &str,
    output: &str,
) -> Result<(), CliError> {
    // Fail on the extension before doing any work.
    aedt::check_extension(Path::new(output))?;

    let mut project = load_project(file, false)?;
    let old = project.variable(design, name)?.to_string();
    project.change_variable(design, name, value)?;
    project.save(output)?;

    println!(
        "{} {}/{}: {} -> {}",
        "✓".green().bold(),
        design,
        name.yellow(),
        old,
        value
    );
    Ok(())
}
