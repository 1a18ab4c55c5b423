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

//! Complete sample projects.

/// Smallest useful project: one `Desktop` block with a version call.
pub fn minimal_project() -> &'static str {
    include_str!("data/minimal.aedt")
}

/// A Maxwell project with two designs.
///
/// Contents that tests rely on:
///
/// - designs `Maxwell3DDesign1` (variables `width`, `height`) and
///   `RMxprtDesign1` (variable `poles`, declared under `MachineSetup`)
/// - one solve setup and one parametric setup on the Maxwell design, next to
///   the `NextUniqueID` / `MoveBackwards` bookkeeping entries
/// - a `Flux Plot` report on the Maxwell design and an empty report list on
///   the RMxprt design
/// - an `ImageFile` value continued over three physical lines
/// - six trailing lines after `$end 'AnsoftProject'`
pub fn maxwell_project() -> &'static str {
    include_str!("data/maxwell.aedt")
}

/// Names and values that exercise every escape rule.
pub fn escaping_project() -> &'static str {
    include_str!("data/escaping.aedt")
}

/// A value continued across three physical lines.
pub fn continuation_project() -> &'static str {
    include_str!("data/continuation.aedt")
}

/// Block count of [`maxwell_project`] (object model only).
pub fn maxwell_block_count() -> usize {
    36
}

/// Leaf count of [`maxwell_project`] (object model only).
pub fn maxwell_leaf_count() -> usize {
    46
}

/// Number of logical lines after the root terminator in [`maxwell_project`].
pub fn maxwell_trailer_len() -> usize {
    6
}

/// A project with `depth` nested blocks inside the root.
pub fn deeply_nested_project(depth: usize) -> String {
    let mut text = String::from("$begin 'AnsoftProject'\n");
    for i in 0..depth {
        text.push_str(&format!("$begin 'Level{}'\n", i));
    }
    text.push_str("Leaf=1\n");
    for i in (0..depth).rev() {
        text.push_str(&format!("$end 'Level{}'\n", i));
    }
    text.push_str("$end 'AnsoftProject'\n");
    text
}

/// A project with `width` sibling scalars in one block.
pub fn wide_project(width: usize) -> String {
    let mut text = String::from("$begin 'AnsoftProject'\n\t$begin 'Wide'\n");
    for i in 0..width {
        text.push_str(&format!("\t\tKey{}='value {}'\n", i, i));
    }
    text.push_str("\t$end 'Wide'\n$end 'AnsoftProject'\n");
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_start_with_root() {
        for text in [
            minimal_project(),
            maxwell_project(),
            escaping_project(),
            continuation_project(),
        ] {
            assert!(text.starts_with("$begin 'AnsoftProject'\n"));
        }
    }

    #[test]
    fn test_maxwell_uses_tab_indentation() {
        assert!(maxwell_project().contains("\n\t$begin 'Maxwell3DModel'\n"));
    }

    #[test]
    fn test_generated_projects_are_balanced() {
        let deep = deeply_nested_project(5);
        assert_eq!(deep.matches("$begin").count(), 6);
        assert_eq!(deep.matches("$end").count(), 6);
        assert_eq!(wide_project(3).matches("Key").count(), 3);
    }
}
