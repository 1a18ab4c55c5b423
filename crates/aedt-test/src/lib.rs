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

//! Shared test fixtures and utilities for the AEDT codec crates.
//!
//! This crate provides sample project files, invalid inputs with the error
//! each one must produce, and small counting helpers used by the tests of
//! every crate in the workspace.
//!
//! # Quick Start
//!
//! ```rust
//! use aedt_test::fixtures;
//!
//! let text = fixtures::maxwell_project();
//! let doc = aedt_core::parse(text.as_bytes()).unwrap();
//! assert_eq!(aedt_test::count_blocks(&doc), fixtures::maxwell_block_count());
//!
//! for (name, text, kind) in fixtures::errors::invalid_samples() {
//!     let err = aedt_core::parse(text.as_bytes()).unwrap_err();
//!     assert_eq!(err.kind, kind, "fixture {}", name);
//! }
//! ```

pub mod counts;
pub mod fixtures;

pub use counts::*;

/// Type alias for a list of fixtures as (name, AEDT text).
pub type FixtureList = Vec<(&'static str, &'static str)>;
