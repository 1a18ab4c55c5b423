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

//! Invalid inputs and the error each one must produce.

use aedt_core::AedtErrorKind;

/// Invalid AEDT samples as (name, text, expected error kind).
pub fn invalid_samples() -> Vec<(&'static str, &'static str, AedtErrorKind)> {
    vec![
        ("empty", "", AedtErrorKind::EmptyInput),
        ("whitespace_only", " \n\t\n\n", AedtErrorKind::EmptyInput),
        (
            "end_without_begin",
            "$end 'Desktop'\n",
            AedtErrorKind::UnbalancedBlock,
        ),
        (
            "mismatched_end",
            "$begin 'AnsoftProject'\n$begin 'Desktop'\n$end 'Setup1'\n$end 'AnsoftProject'\n",
            AedtErrorKind::UnbalancedBlock,
        ),
        (
            "root_closed_early",
            "$begin 'AnsoftProject'\n$begin 'Desktop'\n$end 'AnsoftProject'\n",
            AedtErrorKind::UnbalancedBlock,
        ),
        (
            "missing_root_end",
            "$begin 'AnsoftProject'\n$begin 'Desktop'\n$end 'Desktop'\n",
            AedtErrorKind::UnterminatedProject,
        ),
        (
            "missing_inner_end",
            "$begin 'AnsoftProject'\n$begin 'Desktop'\nVersion(2019, 1)\n",
            AedtErrorKind::UnterminatedProject,
        ),
    ]
}

/// Lines that match no record shape. A lenient parse drops them.
pub fn unrecognized_lines() -> Vec<&'static str> {
    vec![
        "just some words",
        "$begin",
        "$end Desktop",
        "!!!",
        "(orphan args)",
    ]
}
