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

//! Error context helpers.
//!
//! Extension methods on `Result` that attach a context string to an
//! [`AedtError`] as it travels up the call stack, and turn I/O failures into
//! [`AedtErrorKind::IO`](crate::AedtErrorKind::IO) errors on the way.
//!
//! ```rust
//! use aedt::{AedtResultExt, Project};
//!
//! fn open(path: &str) -> aedt::AedtResult<Project> {
//!     let text = std::fs::read_to_string(path).context(format!("reading {}", path))?;
//!     Project::from_text(&text).with_context(|| format!("parsing {}", path))
//! }
//! ```

use crate::AedtError;
use std::fmt;

/// Extension trait for adding context to results.
pub trait AedtResultExt<T> {
    /// Add context to an error.
    ///
    /// Context added later is placed in front of existing context.
    fn context<C>(self, context: C) -> Result<T, AedtError>
    where
        C: fmt::Display;

    /// Add context computed only when an error occurs.
    fn with_context<C, F>(self, f: F) -> Result<T, AedtError>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T> AedtResultExt<T> for Result<T, AedtError> {
    fn context<C>(self, context: C) -> Result<T, AedtError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| add_context_to_error(e, context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AedtError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| add_context_to_error(e, f().to_string()))
    }
}

impl<T> AedtResultExt<T> for Result<T, std::io::Error> {
    fn context<C>(self, context: C) -> Result<T, AedtError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| AedtError::io(e.to_string()).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AedtError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| AedtError::io(e.to_string()).with_context(f().to_string()))
    }
}

impl<T> AedtResultExt<T> for Result<T, aedt_xml::XmlError> {
    fn context<C>(self, context: C) -> Result<T, AedtError>
    where
        C: fmt::Display,
    {
        self.map_err(|e| AedtError::from(e).with_context(context.to_string()))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, AedtError>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| AedtError::from(e).with_context(f().to_string()))
    }
}

/// Format: "new context; existing context". Empty context is ignored.
fn add_context_to_error(mut error: AedtError, new_context: String) -> AedtError {
    if new_context.is_empty() {
        return error;
    }

    error.context = Some(match error.context {
        Some(existing) => format!("{}; {}", new_context, existing),
        None => new_context,
    });

    error
}
