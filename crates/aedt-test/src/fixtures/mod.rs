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

//! Canonical AEDT sample projects.
//!
//! - **documents**: complete projects, from minimal to a realistic Maxwell
//!   project with two designs, setups, reports and a trailer
//! - **errors**: invalid inputs paired with the error kind they produce

mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Returns all valid fixtures for iteration.
///
/// Useful for running the same round-trip test across every sample.
pub fn all() -> FixtureList {
    vec![
        ("minimal", minimal_project()),
        ("maxwell", maxwell_project()),
        ("escaping", escaping_project()),
        ("continuation", continuation_project()),
    ]
}
