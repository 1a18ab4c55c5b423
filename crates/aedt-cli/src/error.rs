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

//! Structured error types for the AEDT CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure status.

use aedt::{AedtError, AedtErrorKind};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for AEDT CLI operations.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Reading or writing a project, XML or JSON file failed.
    #[error("cannot access '{path}': {message}")]
    Io {
        path: PathBuf,
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error("'{path}' is {actual} bytes, over the {max} byte limit ({max_mb} MB); raise AEDT_MAX_FILE_SIZE to allow it")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The project text could not be parsed.
    #[error("AEDT parse error: {0}")]
    Parse(String),

    /// XML conversion error in either direction.
    #[error("XML bridge error: {0}")]
    XmlConversion(String),

    /// JSON export error.
    #[error("JSON export error: {0}")]
    JsonConversion(String),

    /// A design or variable named on the command line does not exist.
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Output path does not end in `.aedt`.
    #[error("Unsupported output: {0}")]
    UnsupportedExtension(String),

    /// Returned by `format --check`.
    #[error("File is not in normalized form")]
    NotNormalized,

    /// Project file access that failed inside the library.
    #[error("{0}")]
    Project(String),

    /// Bad command-line arguments.
    #[error("invalid arguments: {0}")]
    InvalidInput(String),
}

impl CliError {
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<AedtError> for CliError {
    fn from(err: AedtError) -> Self {
        let message = match &err.context {
            Some(context) => format!("{} ({})", err, context),
            None => err.to_string(),
        };
        match err.kind {
            AedtErrorKind::UnknownDesign | AedtErrorKind::UnknownVariable => Self::Lookup(message),
            AedtErrorKind::UnsupportedExtension => Self::UnsupportedExtension(message),
            AedtErrorKind::Conversion => Self::XmlConversion(message),
            AedtErrorKind::IO => Self::Project(message),
            _ => Self::Parse(message),
        }
    }
}

impl From<aedt::xml::XmlError> for CliError {
    fn from(err: aedt::xml::XmlError) -> Self {
        Self::XmlConversion(err.to_string())
    }
}
