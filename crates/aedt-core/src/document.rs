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

//! Document structure for parsed AEDT projects.

use crate::escape::{decode, decode_value_for, encode, encode_value_for, EscapeContext};
use crate::lex::ROOT_BLOCK;
use std::collections::BTreeMap;

/// Attribute holding the leaf discriminator.
pub const TYPE_ATTR: &str = "type";
/// Attribute holding the escaped leaf payload.
pub const VALUE_ATTR: &str = "value";

/// The kind of leaf record a node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeafKind {
    /// `key=value`
    Value,
    /// `name(args)`
    Function,
    /// `key[index]`
    Array,
}

impl LeafKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Function => "function",
            Self::Array => "array",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "value" => Some(Self::Value),
            "function" => Some(Self::Function),
            "array" => Some(Self::Array),
            _ => None,
        }
    }
}

/// A node in the project tree.
///
/// Blocks carry no `type` attribute and own ordered children. Leaves are
/// childless and carry `type` and `value`. The tag and all attribute values
/// are stored in escaped form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Escaped element name.
    pub tag: String,
    /// Attributes (`type`, `value` for leaves).
    pub attributes: BTreeMap<String, String>,
    /// Children in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty block with an already escaped tag.
    pub fn block(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a leaf with an already escaped tag and payload.
    pub fn leaf(tag: impl Into<String>, kind: LeafKind, value: impl Into<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(TYPE_ATTR.to_string(), kind.as_str().to_string());
        attributes.insert(VALUE_ATTR.to_string(), value.into());
        Self {
            tag: tag.into(),
            attributes,
            children: Vec::new(),
        }
    }

    /// Leaf kind, `None` for blocks or unknown discriminators.
    pub fn leaf_kind(&self) -> Option<LeafKind> {
        self.attributes
            .get(TYPE_ATTR)
            .and_then(|kind| LeafKind::parse(kind))
    }

    pub fn is_block(&self) -> bool {
        !self.attributes.contains_key(TYPE_ATTR)
    }

    /// Escaped payload of a leaf.
    pub fn value(&self) -> Option<&str> {
        self.attributes.get(VALUE_ATTR).map(String::as_str)
    }

    /// Decoded name: block name, key or function name.
    pub fn name(&self) -> String {
        if self.is_block() {
            decode(EscapeContext::TagName, &self.tag)
        } else {
            decode(EscapeContext::AttributeKey, &self.tag)
        }
    }

    /// Payload as it appears in AEDT text.
    ///
    /// Material values get their `'"…"'` quoting back.
    pub fn decoded_value(&self) -> Option<String> {
        let token = self.value()?;
        match self.leaf_kind() {
            Some(LeafKind::Value) => Some(decode_value_for(&self.name(), token)),
            _ => Some(decode(EscapeContext::AttributeValue, token)),
        }
    }

    /// Replace a leaf payload with raw AEDT text.
    ///
    /// Returns `false` on blocks, which carry no payload.
    pub fn set_value(&mut self, raw: &str) -> bool {
        let Some(kind) = self.leaf_kind() else {
            return false;
        };
        let token = match kind {
            LeafKind::Value => encode_value_for(&self.name(), raw),
            LeafKind::Function | LeafKind::Array => encode(EscapeContext::AttributeValue, raw),
        };
        self.attributes.insert(VALUE_ATTR.to_string(), token);
        true
    }

    /// First child with the given escaped tag.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn child_mut(&mut self, tag: &str) -> Option<&mut Node> {
        self.children.iter_mut().find(|c| c.tag == tag)
    }

    /// All children with the given escaped tag, in order.
    pub fn children_named<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Follow a `/`-separated path of escaped tags, taking the first match at
    /// each step. An empty path returns `self`.
    pub fn find(&self, path: &str) -> Option<&Node> {
        path.split('/')
            .filter(|segment| !segment.is_empty())
            .try_fold(self, |node, segment| node.child(segment))
    }

    pub fn find_mut(&mut self, path: &str) -> Option<&mut Node> {
        let mut node = self;
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            node = node.child_mut(segment)?;
        }
        Some(node)
    }

    /// Append a child.
    pub fn push(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Total node count including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Maximum block nesting below and including `self`.
    pub fn depth(&self) -> usize {
        if self.is_block() {
            1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
        } else {
            0
        }
    }
}

/// A parsed AEDT document: the ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// The `AnsoftProject` block, if present.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.tag == ROOT_BLOCK)
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.tag == ROOT_BLOCK)
    }

    /// Resolve a path whose first segment names a top-level node.
    pub fn select(&self, path: &str) -> Option<&Node> {
        let path = path.trim_start_matches('/');
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        self.nodes.iter().find(|n| n.tag == head)?.find(rest)
    }

    pub fn select_mut(&mut self, path: &str) -> Option<&mut Node> {
        let path = path.trim_start_matches('/');
        let (head, rest) = path.split_once('/').unwrap_or((path, ""));
        self.nodes.iter_mut().find(|n| n.tag == head)?.find_mut(rest)
    }

    /// Node at a child-index path, starting at the top level.
    pub fn node_at(&self, indices: &[usize]) -> Option<&Node> {
        let (first, rest) = indices.split_first()?;
        rest.iter()
            .try_fold(self.nodes.get(*first)?, |node, &i| node.children.get(i))
    }

    pub fn node_at_mut(&mut self, indices: &[usize]) -> Option<&mut Node> {
        let (first, rest) = indices.split_first()?;
        let mut node = self.nodes.get_mut(*first)?;
        for &i in rest {
            node = node.children.get_mut(i)?;
        }
        Some(node)
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.iter().map(Node::node_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut setup = Node::block("Setup1");
        setup.push(Node::leaf("Enabled", LeafKind::Value, "true"));

        let mut solve = Node::block("SolveSetups");
        solve.push(setup);
        solve.push(Node::leaf("NextUniqueID", LeafKind::Value, "2"));

        let mut root = Node::block("AnsoftProject");
        root.push(Node::leaf("Version", LeafKind::Function, "(2019, 1)"));
        root.push(solve);
        root.push(Node::block("__DIGI__1"));

        Document { nodes: vec![root] }
    }

    #[test]
    fn test_leaf_and_block() {
        let leaf = Node::leaf("Foo", LeafKind::Value, "__APOSTROPHE__bar__APOSTROPHE__");
        assert!(!leaf.is_block());
        assert_eq!(leaf.leaf_kind(), Some(LeafKind::Value));
        assert_eq!(leaf.decoded_value().as_deref(), Some("'bar'"));

        let block = Node::block("Setup1");
        assert!(block.is_block());
        assert_eq!(block.leaf_kind(), None);
        assert_eq!(block.value(), None);
    }

    #[test]
    fn test_names_are_decoded_per_context() {
        assert_eq!(Node::block("__DIGI__1").name(), "1");
        assert_eq!(Node::block("a__SEP__b").name(), "a/b");
        let key = Node::leaf("a__SLASH__b", LeafKind::Value, "1");
        assert_eq!(key.name(), "a/b");
    }

    #[test]
    fn test_set_value_keeps_material_quoting() {
        let mut leaf = Node::leaf("MaterialValue", LeafKind::Value, "copper");
        assert_eq!(leaf.decoded_value().as_deref(), Some("'\"copper\"'"));
        assert!(leaf.set_value("'\"steel\"'"));
        assert_eq!(leaf.value(), Some("steel"));
    }

    #[test]
    fn test_set_value_on_block_is_rejected() {
        let mut block = Node::block("Setup1");
        assert!(!block.set_value("x"));
        assert!(block.attributes.is_empty());
    }

    #[test]
    fn test_find_path() {
        let doc = sample();
        let root = doc.root().unwrap();
        let enabled = root.find("SolveSetups/Setup1/Enabled").unwrap();
        assert_eq!(enabled.value(), Some("true"));
        assert!(root.find("SolveSetups/Missing").is_none());
        assert_eq!(root.find("").unwrap().tag, "AnsoftProject");
    }

    #[test]
    fn test_select_from_document() {
        let doc = sample();
        assert_eq!(
            doc.select("AnsoftProject/SolveSetups/NextUniqueID")
                .and_then(Node::value),
            Some("2")
        );
        assert!(doc.select("Other/SolveSetups").is_none());
        assert_eq!(doc.select("/AnsoftProject").unwrap().tag, "AnsoftProject");
    }

    #[test]
    fn test_select_mut_edits_in_place() {
        let mut doc = sample();
        doc.select_mut("AnsoftProject/SolveSetups/Setup1/Enabled")
            .unwrap()
            .set_value("false");
        assert_eq!(
            doc.select("AnsoftProject/SolveSetups/Setup1/Enabled")
                .unwrap()
                .value(),
            Some("false")
        );
    }

    #[test]
    fn test_children_named_preserves_order() {
        let mut block = Node::block("Props");
        block.push(Node::leaf("VariableProp", LeafKind::Function, "(a)"));
        block.push(Node::leaf("Other", LeafKind::Value, "x"));
        block.push(Node::leaf("VariableProp", LeafKind::Function, "(b)"));
        let values: Vec<_> = block
            .children_named("VariableProp")
            .filter_map(Node::value)
            .collect();
        assert_eq!(values, vec!["(a)", "(b)"]);
    }

    #[test]
    fn test_node_at() {
        let mut doc = sample();
        assert_eq!(doc.node_at(&[0, 1, 0]).unwrap().tag, "Setup1");
        assert!(doc.node_at(&[0, 9]).is_none());
        assert!(doc.node_at(&[]).is_none());
        doc.node_at_mut(&[0, 2]).unwrap().push(Node::block("Inner"));
        assert_eq!(doc.node_at(&[0, 2, 0]).unwrap().tag, "Inner");
    }

    #[test]
    fn test_counts() {
        let doc = sample();
        assert_eq!(doc.node_count(), 7);
        assert_eq!(doc.root().unwrap().depth(), 3);
    }
}
