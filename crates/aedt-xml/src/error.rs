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

//! Error types for XML conversion

use aedt_core::AedtError;
use thiserror::Error;

/// Errors that can occur while writing or reading the XML form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum XmlError {
    /// The input is not well-formed XML.
    #[error("XML parse error at position {pos}: {message}")]
    Parse {
        /// Byte offset where the reader stopped.
        pos: usize,
        message: String,
    },

    /// Serialization failed.
    #[error("Failed to write {context}: {message}")]
    Write { context: String, message: String },

    /// Element nesting exceeds `FromXmlConfig::max_depth`.
    #[error("XML recursion depth exceeded (max: {max}, found: {current})")]
    RecursionLimitExceeded { max: usize, current: usize },

    /// An attribute holds something the record model cannot carry, such as
    /// an unknown leaf `type`.
    #[error("Invalid value: {message}")]
    InvalidValue { message: String },

    /// Elements are well-formed XML but not a valid record tree.
    #[error("Invalid XML structure: {message}")]
    Structure { message: String },
}

impl XmlError {
    pub(crate) fn structure(message: impl Into<String>) -> Self {
        Self::Structure {
            message: message.into(),
        }
    }

    pub(crate) fn write(context: &str, err: impl std::fmt::Display) -> Self {
        Self::Write {
            context: context.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<XmlError> for AedtError {
    fn from(err: XmlError) -> Self {
        AedtError::conversion(err.to_string())
    }
}
