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

//! Per-project index of designs, variables, setups and reports.
//!
//! The index stores child-index paths into the [`Document`] rather than
//! references, so it can live next to the document it describes and be
//! rebuilt after every load.

use crate::variable::VariableArgs;
use aedt_core::{Document, LeafKind, Node, ROOT_BLOCK};

/// Block tags that hold one design each.
pub const MODEL_TYPES: [&str; 3] = ["Maxwell2DModel", "Maxwell3DModel", "RMxprtDesign"];

/// Block tags under `DataInstances/Instance` that hold a design's reports.
pub const INSTANCE_TYPES: [&str; 4] = [
    "Maxwell2DDesignInstance",
    "Maxwell3DDesignInstance",
    "MaxwellDesignInstance",
    "RMxprtDesignInstance",
];

/// Bookkeeping entries inside setup containers that are not setups.
pub const EXCLUDED_SETUP_KEYS: [&str; 2] = ["NextUniqueID", "MoveBackwards"];

/// Child-index path from the document's top level.
pub(crate) type NodePath = Vec<usize>;

/// One design variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    /// Value expression, e.g. `3mm`.
    pub value: String,
    pub(crate) path: NodePath,
}

/// One design found in the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Design {
    pub name: String,
    /// The block tag the design lives in, one of [`MODEL_TYPES`].
    pub model_type: String,
    pub variables: Vec<Variable>,
    pub(crate) path: NodePath,
    pub(crate) setups: Vec<NodePath>,
    pub(crate) parametric_setups: Vec<NodePath>,
    pub(crate) reports: Option<NodePath>,
}

impl Design {
    pub fn variable(&self, name: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.name == name)
    }

    pub(crate) fn variable_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.iter_mut().find(|v| v.name == name)
    }
}

/// Designs of one project in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectIndex {
    pub designs: Vec<Design>,
}

impl ProjectIndex {
    /// Scan a document. Designs without a `Name` leaf are skipped.
    pub fn build(doc: &Document) -> Self {
        let Some(root_index) = doc.nodes.iter().position(|n| n.tag == ROOT_BLOCK) else {
            tracing::debug!("no {} block, project index is empty", ROOT_BLOCK);
            return Self::default();
        };
        let root = &doc.nodes[root_index];

        let mut designs = Vec::new();
        for (i, node) in root.children.iter().enumerate() {
            if !node.is_block() || !MODEL_TYPES.contains(&node.tag.as_str()) {
                continue;
            }
            let path = vec![root_index, i];
            match index_design(node, path) {
                Some(design) => designs.push(design),
                None => tracing::warn!(model = %node.tag, "design block without a Name"),
            }
        }

        let mut index = Self { designs };
        index.attach_reports(root, root_index);
        tracing::debug!(designs = index.designs.len(), "indexed project");
        index
    }

    pub fn design(&self, name: &str) -> Option<&Design> {
        self.designs.iter().find(|d| d.name == name)
    }

    pub(crate) fn design_mut(&mut self, name: &str) -> Option<&mut Design> {
        self.designs.iter_mut().find(|d| d.name == name)
    }

    pub fn design_names(&self) -> Vec<&str> {
        self.designs.iter().map(|d| d.name.as_str()).collect()
    }

    /// Link each `DataInstances/Instance` to the design named by its
    /// `DesignEditor`.
    fn attach_reports(&mut self, root: &Node, root_index: usize) {
        let Some(data_index) = child_index(root, "DataInstances") else {
            return;
        };
        let data = &root.children[data_index];

        for (i, instance) in data.children.iter().enumerate() {
            if instance.tag != "Instance" || !instance.is_block() {
                continue;
            }
            let Some(editor) = instance.child("DesignEditor").and_then(leaf_text) else {
                continue;
            };
            let Some(design) = self.design_mut(&editor) else {
                tracing::debug!(editor = %editor, "instance for unknown design");
                continue;
            };

            let mut path = vec![root_index, data_index, i];
            let Some(kind_index) = instance
                .children
                .iter()
                .position(|c| INSTANCE_TYPES.contains(&c.tag.as_str()))
            else {
                continue;
            };
            path.push(kind_index);
            let kind = &instance.children[kind_index];
            if let Some(reports) = descend(kind, &["ReportSetup", "Reports"]) {
                path.extend(reports);
                design.reports = Some(path);
            }
        }
    }
}

fn index_design(node: &Node, path: NodePath) -> Option<Design> {
    let name = node.child("Name").and_then(leaf_text)?;

    // ModelSetup wins over MachineSetup even when it has no Properties.
    let variables = ["ModelSetup", "MachineSetup"]
        .into_iter()
        .find(|tag| child_index(node, tag).is_some())
        .and_then(|tag| descend(node, &[tag, "Properties"]))
        .map(|rel| {
            let mut props_path = path.clone();
            props_path.extend(&rel);
            index_variables(resolve(node, &rel), &props_path)
        })
        .unwrap_or_default();

    let setups = entries(node, &path, &["AnalysisSetup", "SolveSetups"]);
    let parametric_setups = entries(node, &path, &["Optimetrics", "OptimetricsSetups"]);

    Some(Design {
        name,
        model_type: node.tag.clone(),
        variables,
        path,
        setups,
        parametric_setups,
        reports: None,
    })
}

fn index_variables(props: Option<&Node>, props_path: &[usize]) -> Vec<Variable> {
    let Some(props) = props else {
        return Vec::new();
    };
    props
        .children
        .iter()
        .enumerate()
        .filter(|(_, c)| c.tag == "VariableProp" && c.leaf_kind() == Some(LeafKind::Function))
        .filter_map(|(i, c)| {
            let text = c.decoded_value()?;
            let Some(args) = VariableArgs::parse(&text) else {
                tracing::debug!(args = %text, "unreadable VariableProp");
                return None;
            };
            let mut path = props_path.to_vec();
            path.push(i);
            Some(Variable {
                name: args.name().to_string(),
                value: args.value().to_string(),
                path,
            })
        })
        .collect()
}

/// Paths of the children of a container, minus bookkeeping entries.
fn entries(node: &Node, path: &[usize], container: &[&str]) -> Vec<NodePath> {
    let Some(rel) = descend(node, container) else {
        return Vec::new();
    };
    let Some(parent) = resolve(node, &rel) else {
        return Vec::new();
    };
    parent
        .children
        .iter()
        .enumerate()
        .filter(|(_, c)| !EXCLUDED_SETUP_KEYS.contains(&c.tag.as_str()))
        .map(|(i, _)| {
            let mut full = path.to_vec();
            full.extend(&rel);
            full.push(i);
            full
        })
        .collect()
}

fn child_index(node: &Node, tag: &str) -> Option<usize> {
    node.children.iter().position(|c| c.tag == tag)
}

/// Relative child-index path following `tags` from `node`.
fn descend(node: &Node, tags: &[&str]) -> Option<NodePath> {
    let mut current = node;
    let mut rel = Vec::with_capacity(tags.len());
    for tag in tags {
        let i = child_index(current, tag)?;
        rel.push(i);
        current = &current.children[i];
    }
    Some(rel)
}

fn resolve<'a>(node: &'a Node, rel: &[usize]) -> Option<&'a Node> {
    rel.iter().try_fold(node, |n, &i| n.children.get(i))
}

/// Decoded leaf payload with one layer of single quotes removed.
pub(crate) fn leaf_text(node: &Node) -> Option<String> {
    let value = node.decoded_value()?;
    let trimmed = value.trim();
    Some(
        trimmed
            .strip_prefix('\'')
            .and_then(|v| v.strip_suffix('\''))
            .unwrap_or(trimmed)
            .to_string(),
    )
}
