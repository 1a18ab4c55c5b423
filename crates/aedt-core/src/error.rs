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

//! Error types for AEDT conversion.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred during conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AedtErrorKind {
    /// The input had no readable content.
    EmptyInput,
    /// A logical line matched none of the record shapes.
    MalformedLine,
    /// `$end` without a matching open `$begin`.
    UnbalancedBlock,
    /// Input ended while blocks were still open.
    UnterminatedProject,
    /// Save target does not carry the `.aedt` extension.
    UnsupportedExtension,
    /// Lookup of a design that the project does not contain.
    UnknownDesign,
    /// Lookup of a variable that the design does not declare.
    UnknownVariable,
    /// Security limit exceeded.
    Security,
    /// Error during format conversion (XML, JSON).
    Conversion,
    /// I/O error.
    IO,
}

impl fmt::Display for AedtErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "EmptyInputError"),
            Self::MalformedLine => write!(f, "MalformedLineError"),
            Self::UnbalancedBlock => write!(f, "UnbalancedBlockError"),
            Self::UnterminatedProject => write!(f, "UnterminatedProjectError"),
            Self::UnsupportedExtension => write!(f, "UnsupportedExtensionError"),
            Self::UnknownDesign => write!(f, "UnknownDesignError"),
            Self::UnknownVariable => write!(f, "UnknownVariableError"),
            Self::Security => write!(f, "SecurityError"),
            Self::Conversion => write!(f, "ConversionError"),
            Self::IO => write!(f, "IOError"),
        }
    }
}

/// An error that occurred while reading, converting or querying a project.
#[derive(Debug, Clone, Error)]
#[error("{kind} at line {line}: {message}")]
pub struct AedtError {
    /// The kind of error.
    pub kind: AedtErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// Line number (1-based, 0 when not tied to a line).
    pub line: usize,
    /// Additional context (e.g., "while loading Motor.aedt").
    pub context: Option<String>,
}

impl AedtError {
    /// Create a new error.
    pub fn new(kind: AedtErrorKind, message: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            line,
            context: None,
        }
    }

    /// Add context information.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::new(AedtErrorKind::EmptyInput, message, 0)
    }

    pub fn malformed_line(message: impl Into<String>, line: usize) -> Self {
        Self::new(AedtErrorKind::MalformedLine, message, line)
    }

    pub fn unbalanced_block(message: impl Into<String>, line: usize) -> Self {
        Self::new(AedtErrorKind::UnbalancedBlock, message, line)
    }

    pub fn unterminated_project(message: impl Into<String>, line: usize) -> Self {
        Self::new(AedtErrorKind::UnterminatedProject, message, line)
    }

    pub fn unsupported_extension(message: impl Into<String>) -> Self {
        Self::new(AedtErrorKind::UnsupportedExtension, message, 0)
    }

    pub fn unknown_design(design: &str) -> Self {
        Self::new(
            AedtErrorKind::UnknownDesign,
            format!("design '{}' not found", design),
            0,
        )
    }

    pub fn unknown_variable(design: &str, variable: &str) -> Self {
        Self::new(
            AedtErrorKind::UnknownVariable,
            format!("variable '{}' not found in design '{}'", variable, design),
            0,
        )
    }

    pub fn security(message: impl Into<String>, line: usize) -> Self {
        Self::new(AedtErrorKind::Security, message, line)
    }

    pub fn conversion(message: impl Into<String>) -> Self {
        Self::new(AedtErrorKind::Conversion, message, 0)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(AedtErrorKind::IO, message, 0)
    }

    /// Structural errors abort a conversion; lookup errors are recoverable.
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            AedtErrorKind::EmptyInput
                | AedtErrorKind::UnbalancedBlock
                | AedtErrorKind::UnterminatedProject
        )
    }
}

/// Result type for AEDT operations.
pub type AedtResult<T> = Result<T, AedtError>;
