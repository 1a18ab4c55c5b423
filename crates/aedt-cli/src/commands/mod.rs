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

//! CLI command implementations

mod convert;
mod format;
mod inspect;
mod set_variable;
mod validate;

pub use convert::{from_xml, to_json, to_xml};
pub use format::format;
pub use inspect::inspect;
pub use set_variable::set_variable;
pub use validate::validate;

use crate::error::CliError;
use aedt::{ParseOptions, Project};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum file size (1 GB).
/// Can be overridden via the `AEDT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable holding the file size limit in bytes.
pub const MAX_FILE_SIZE_ENV: &str = "AEDT_MAX_FILE_SIZE";

/// Maximum file size from the environment, or [`DEFAULT_MAX_FILE_SIZE`] when
/// unset or not a number.
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Parse options carrying the file size limit.
pub fn parse_options(strict: bool) -> ParseOptions {
    let max = usize::try_from(max_file_size()).unwrap_or(usize::MAX);
    ParseOptions::builder()
        .max_file_size(max)
        .strict(strict)
        .build()
}

/// Read a file from disk after checking its size against the limit.
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }

    fs::read(path).map_err(|e| CliError::io_error(path, e))
}

/// Read a UTF-8 text file (XML input).
pub fn read_text(path: &str) -> Result<String, CliError> {
    let bytes = read_file(path)?;
    String::from_utf8(bytes).map_err(|e| CliError::invalid_input(format!("'{}': {}", path, e)))
}

/// Load a project with the CLI's parse options.
pub fn load_project(path: &str, strict: bool) -> Result<Project, CliError> {
    let bytes = read_file(path)?;
    let project = Project::from_bytes_with_options(&bytes, &parse_options(strict))?;
    tracing::debug!(path, designs = project.designs().len(), "loaded project");
    Ok(project)
}

/// Write content to a file, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Write AEDT text, refusing paths that do not end in `.aedt`.
pub fn write_aedt(content: &str, path: &str) -> Result<(), CliError> {
    aedt::check_extension(Path::new(path))?;
    write_output(content, Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/definitely/not/here.aedt").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_write_aedt_checks_extension() {
        let err = write_aedt("", "/tmp/out.txt").unwrap_err();
        assert!(matches!(err, CliError::UnsupportedExtension(_)));
    }

    #[test]
    fn test_parse_options_strict_flag() {
        assert!(parse_options(true).strict);
        assert!(!parse_options(false).strict);
    }
}
