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

//! AEDT CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **validate**: parse a project and report its structure
//! - **inspect**: list designs, variables, setups and reports
//! - **format**: normalize a project through a full round trip
//! - **set-variable**: edit one design variable and save
//! - **to-xml** / **from-xml**: the XML form, in both directions
//! - **to-json**: JSON export
//!
//! The input size limit defaults to 1 GB and can be changed with the
//! `AEDT_MAX_FILE_SIZE` environment variable (bytes). Log output goes to
//! stderr and is filtered by `RUST_LOG`.

pub mod cli;
pub mod commands;
pub mod error;
