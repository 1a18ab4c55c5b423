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

//! Format command - normalize a project through a full round trip

use super::{load_project, write_aedt, write_output};
use crate::error::CliError;
use aedt::UnparseConfig;

/// Re-write a project file from its parsed tree.
///
/// With `indent`, nested lines get one tab per level, as AEDT writes them;
/// otherwise the output is flat. With `check`, nothing is written and the
/// command fails when the file differs from its normalized form.
pub fn format(
    file: &str,
    output: Option<&str>,
    indent: bool,
    check: bool,
) -> Result<(), CliError> {
    let project = load_project(file, false)?;
    let config = if indent {
        UnparseConfig::tabs()
    } else {
        UnparseConfig::flat()
    };
    let text = project.to_text_with(&config);

    if check {
        let original = super::read_file(file)?;
        if original != text.as_bytes() {
            return Err(CliError::NotNormalized);
        }
        println!("File is normalized");
        return Ok(());
    }

    match output {
        Some(path) => write_aedt(&text, path),
        None => write_output(&text, None),
    }
}
