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

//! Fixture counting utilities.

use aedt_core::{Document, LeafKind, Node};

/// Count block nodes in a document.
pub fn count_blocks(doc: &Document) -> usize {
    doc.nodes.iter().map(count_blocks_in).sum()
}

fn count_blocks_in(node: &Node) -> usize {
    if !node.is_block() {
        return 0;
    }
    1 + node.children.iter().map(count_blocks_in).sum::<usize>()
}

/// Count leaf nodes in a document.
pub fn count_leaves(doc: &Document) -> usize {
    doc.node_count() - count_blocks(doc)
}

/// Count leaf nodes of one kind.
pub fn count_leaves_of(doc: &Document, kind: LeafKind) -> usize {
    fn walk(node: &Node, kind: LeafKind) -> usize {
        let own = usize::from(node.leaf_kind() == Some(kind));
        own + node.children.iter().map(|c| walk(c, kind)).sum::<usize>()
    }
    doc.nodes.iter().map(|n| walk(n, kind)).sum()
}
