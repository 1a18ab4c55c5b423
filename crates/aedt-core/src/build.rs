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

//! Tree building from records and the inverse flattening.

use crate::document::{Document, LeafKind, Node};
use crate::error::{AedtError, AedtResult};
use crate::escape::{decode, EscapeContext};
use crate::lex::Record;
use crate::limits::Limits;

/// Build a document from a record stream.
///
/// Leaf records outside any block become top-level nodes.
pub fn build(records: &[Record], limits: &Limits) -> AedtResult<Document> {
    build_with_lines(records, &[], limits)
}

/// Like [`build`], reporting errors at the given source line numbers.
///
/// `lines` runs parallel to `records`; missing entries report line 0.
pub fn build_with_lines(
    records: &[Record],
    lines: &[usize],
    limits: &Limits,
) -> AedtResult<Document> {
    let mut top = Vec::new();
    // Open blocks with the line of their `$begin`.
    let mut stack: Vec<(Node, usize)> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let line = lines.get(i).copied().unwrap_or(0);

        match record {
            Record::BlockBegin(name) => {
                if stack.len() >= limits.max_block_depth {
                    return Err(AedtError::security(
                        format!(
                            "block nesting too deep: exceeds limit of {}",
                            limits.max_block_depth
                        ),
                        line,
                    ));
                }
                stack.push((Node::block(name.as_str()), line));
            }
            Record::BlockEnd(name) => {
                let Some((node, _)) = stack.pop() else {
                    return Err(AedtError::unbalanced_block(
                        format!("unexpected $end '{}' with no open block", display(name)),
                        line,
                    ));
                };
                if node.tag != *name {
                    return Err(AedtError::unbalanced_block(
                        format!(
                            "expected $end '{}', found $end '{}'",
                            display(&node.tag),
                            display(name)
                        ),
                        line,
                    ));
                }
                attach(&mut stack, &mut top, node);
            }
            Record::FunctionCall { name, args } => {
                let leaf = Node::leaf(name.as_str(), LeafKind::Function, args.as_str());
                attach(&mut stack, &mut top, leaf);
            }
            Record::ScalarAssign { key, value } => {
                let leaf = Node::leaf(key.as_str(), LeafKind::Value, value.as_str());
                attach(&mut stack, &mut top, leaf);
            }
            Record::ArrayAssign { key, index } => {
                let leaf = Node::leaf(key.as_str(), LeafKind::Array, index.as_str());
                attach(&mut stack, &mut top, leaf);
            }
        }
    }

    if let Some((open, line)) = stack.last() {
        return Err(AedtError::unterminated_project(
            format!(
                "block '{}' is never closed ({} open)",
                display(&open.tag),
                stack.len()
            ),
            *line,
        ));
    }

    Ok(Document { nodes: top })
}

fn attach(stack: &mut [(Node, usize)], top: &mut Vec<Node>, node: Node) {
    match stack.last_mut() {
        Some((parent, _)) => parent.push(node),
        None => top.push(node),
    }
}

fn display(tag: &str) -> String {
    decode(EscapeContext::TagName, tag)
}

/// Flatten a document back into its record stream (pre-order).
///
/// A leaf with an unrecognized `type` is emitted as a scalar.
pub fn flatten(doc: &Document) -> Vec<Record> {
    let mut out = Vec::new();
    for node in &doc.nodes {
        flatten_node(node, &mut out);
    }
    out
}

/// Flatten a single subtree.
pub fn flatten_node(node: &Node, out: &mut Vec<Record>) {
    if node.is_block() {
        out.push(Record::BlockBegin(node.tag.clone()));
        for child in &node.children {
            flatten_node(child, out);
        }
        out.push(Record::BlockEnd(node.tag.clone()));
        return;
    }

    let tag = node.tag.clone();
    let payload = node.value().unwrap_or_default().to_string();
    out.push(match node.leaf_kind() {
        Some(LeafKind::Function) => Record::FunctionCall {
            name: tag,
            args: payload,
        },
        Some(LeafKind::Array) => Record::ArrayAssign {
            key: tag,
            index: payload,
        },
        Some(LeafKind::Value) | None => Record::ScalarAssign {
            key: tag,
            value: payload,
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AedtErrorKind;

    fn records() -> Vec<Record> {
        vec![
            Record::begin("AnsoftProject"),
            Record::function("Version", "(2019, 1)"),
            Record::begin("Setup1"),
            Record::end("Setup1"),
            Record::scalar("Foo", "'bar'"),
            Record::array("Pos", "3: 1, 2, 3"),
            Record::end("AnsoftProject"),
        ]
    }

    #[test]
    fn test_build_tree_shape() {
        let doc = build(&records(), &Limits::default()).unwrap();
        assert_eq!(doc.nodes.len(), 1);
        let root = doc.root().unwrap();
        let tags: Vec<_> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["Version", "Setup1", "Foo", "Pos"]);
        assert!(root.child("Setup1").unwrap().children.is_empty());
        assert_eq!(
            root.child("Pos").unwrap().leaf_kind(),
            Some(LeafKind::Array)
        );
    }

    #[test]
    fn test_flatten_inverts_build() {
        let input = records();
        let doc = build(&input, &Limits::default()).unwrap();
        assert_eq!(flatten(&doc), input);
    }

    #[test]
    fn test_top_level_leaves() {
        let input = vec![Record::scalar("A", "1"), Record::begin("B"), Record::end("B")];
        let doc = build(&input, &Limits::default()).unwrap();
        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(flatten(&doc), input);
    }

    #[test]
    fn test_end_without_begin() {
        let input = vec![Record::end("Setup1")];
        let err = build_with_lines(&input, &[7], &Limits::default()).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::UnbalancedBlock);
        assert_eq!(err.line, 7);
    }

    #[test]
    fn test_mismatched_end() {
        let input = vec![Record::begin("A"), Record::begin("B"), Record::end("A")];
        let err = build(&input, &Limits::default()).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::UnbalancedBlock);
        assert!(err.message.contains("expected $end 'B'"));
    }

    #[test]
    fn test_unterminated_block() {
        let input = vec![Record::begin("AnsoftProject"), Record::begin("Inner")];
        let err = build_with_lines(&input, &[1, 2], &Limits::default()).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::UnterminatedProject);
        assert_eq!(err.line, 2);
        assert!(err.message.contains("'Inner'"));
    }

    #[test]
    fn test_error_messages_use_decoded_names() {
        let input = vec![Record::begin("1"), Record::end("-1")];
        let err = build(&input, &Limits::default()).unwrap_err();
        assert!(err.message.contains("'1'"));
        assert!(err.message.contains("'-1'"));
    }

    #[test]
    fn test_depth_limit() {
        let limits = Limits {
            max_block_depth: 2,
            ..Limits::default()
        };
        let input = vec![Record::begin("A"), Record::begin("B"), Record::begin("C")];
        let err = build(&input, &limits).unwrap_err();
        assert_eq!(err.kind, AedtErrorKind::Security);
    }

    #[test]
    fn test_flatten_unknown_leaf_type_as_scalar() {
        let mut node = Node::leaf("K", LeafKind::Value, "v");
        node.attributes
            .insert(crate::TYPE_ATTR.to_string(), "other".to_string());
        let doc = Document { nodes: vec![node] };
        assert_eq!(
            flatten(&doc),
            vec![Record::ScalarAssign {
                key: "K".to_string(),
                value: "v".to_string()
            }]
        );
    }
}
