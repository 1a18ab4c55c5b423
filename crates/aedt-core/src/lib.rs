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

//! Core codec and data model for AEDT project files.
//!
//! The pipeline is split into small, independently testable stages:
//!
//! - [`preprocess`]: decodes raw bytes and joins continued physical lines
//!   into logical lines
//! - [`escape`]: the sentinel escape codec that makes names and values safe
//!   to carry through an XML-shaped tree
//! - [`lex`]: classifies logical lines into [`Record`]s
//! - [`build`]: builds a [`Document`] tree from records and flattens it back
//! - [`unparse`]: turns records into AEDT text again
//!
//! [`parse`] and [`parse_with_options`] run the forward stages in one call.

pub mod build;
mod document;
mod error;
pub mod escape;
pub mod lex;
mod limits;
mod parser;
pub mod preprocess;
pub mod unparse;

pub use build::{build, flatten};
pub use document::{Document, LeafKind, Node, TYPE_ATTR, VALUE_ATTR};
pub use error::{AedtError, AedtErrorKind, AedtResult};
pub use escape::{decode, encode, EscapeContext};
pub use lex::{Lexed, Record, RecordKind, ROOT_BLOCK};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, ParseOutput};
pub use unparse::{lines_to_text, unparse, unparse_document, UnparseConfig};
