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

//! Security limits for AEDT parsing.

/// Configurable limits for parser security.
///
/// Project files routinely reach hundreds of megabytes (embedded geometry and
/// preview images travel as continued lines), so the defaults are generous.
#[derive(Debug, Clone)]
pub struct Limits {
    /// Maximum input size in bytes (default: 1GB).
    pub max_file_size: usize,
    /// Maximum logical line length in bytes (default: 256MB).
    pub max_line_length: usize,
    /// Maximum `$begin` nesting depth (default: 512).
    pub max_block_depth: usize,
    /// Maximum number of records (default: 50M).
    pub max_records: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_file_size: 1024 * 1024 * 1024,  // 1GB
            max_line_length: 256 * 1024 * 1024,    // 256MB
            max_block_depth: 512,
            max_records: 50_000_000,
        }
    }
}
