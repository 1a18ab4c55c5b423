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

//! Project files on disk.

use crate::design::{Design, NodePath, ProjectIndex, Variable};
use crate::error_ext::AedtResultExt;
use crate::variable::VariableArgs;
use aedt_core::{
    lines_to_text, parse_with_options, unparse_document, AedtError, AedtResult, Document, Node,
    ParseOptions, UnparseConfig,
};
use aedt_json::ToJsonConfig;
use aedt_xml::ToXmlConfig;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// The only extension [`Project::save`] writes.
pub const AEDT_EXTENSION: &str = "aedt";

/// A loaded AEDT project.
///
/// Holds the parsed document, the lines that followed the root block in the
/// source text, and an index of the designs found in it.
#[derive(Debug, Clone)]
pub struct Project {
    path: Option<PathBuf>,
    document: Document,
    trailer: Vec<String>,
    dropped_lines: usize,
    index: ProjectIndex,
    options: ParseOptions,
}

impl Project {
    /// Load a project file with default options.
    pub fn load(path: impl AsRef<Path>) -> AedtResult<Self> {
        Self::load_with_options(path, &ParseOptions::default())
    }

    pub fn load_with_options(path: impl AsRef<Path>, options: &ParseOptions) -> AedtResult<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        let mut project = Self::from_bytes_with_options(&bytes, options)
            .with_context(|| format!("loading {}", path.display()))?;
        project.path = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            designs = project.index.designs.len(),
            "loaded project"
        );
        Ok(project)
    }

    pub fn from_text(text: &str) -> AedtResult<Self> {
        Self::from_bytes(text.as_bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> AedtResult<Self> {
        Self::from_bytes_with_options(bytes, &ParseOptions::default())
    }

    pub fn from_bytes_with_options(bytes: &[u8], options: &ParseOptions) -> AedtResult<Self> {
        let out = parse_with_options(bytes, options)?;
        if !out.terminated {
            tracing::warn!("no $end 'AnsoftProject' terminator found");
        }
        let index = ProjectIndex::build(&out.document);
        Ok(Self {
            path: None,
            document: out.document,
            trailer: out.trailer,
            dropped_lines: out.dropped_lines,
            index,
            options: options.clone(),
        })
    }

    /// Read the file this project was loaded from again, discarding edits.
    pub fn reload(&mut self) -> AedtResult<()> {
        let Some(path) = self.path.clone() else {
            return Err(AedtError::io("project was not loaded from a file"));
        };
        *self = Self::load_with_options(&path, &self.options)?;
        Ok(())
    }

    /// Write the project as AEDT text. The path must end in `.aedt`.
    ///
    /// Lines are indented with one tab per nesting level, the layout
    /// Electronics Desktop itself writes, so an unedited project saves back
    /// byte for byte. The codec default is flat ([`UnparseConfig::flat`]);
    /// use [`Project::save_with`] to write that layout instead.
    pub fn save(&self, path: impl AsRef<Path>) -> AedtResult<()> {
        self.save_with(path, &UnparseConfig::tabs())
    }

    /// Write the project as AEDT text with the given layout.
    pub fn save_with(&self, path: impl AsRef<Path>, config: &UnparseConfig) -> AedtResult<()> {
        let path = path.as_ref();
        check_extension(path)?;
        let text = self.to_text_with(config);
        fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
        tracing::info!(path = %path.display(), "saved project");
        Ok(())
    }

    /// AEDT text with tab indentation.
    pub fn to_text(&self) -> String {
        self.to_text_with(&UnparseConfig::tabs())
    }

    /// AEDT text with the given layout. Trailing lines are written unchanged.
    pub fn to_text_with(&self, config: &UnparseConfig) -> String {
        let mut lines = unparse_document(&self.document, config);
        lines.extend(self.trailer.iter().cloned());
        lines_to_text(&lines)
    }

    pub fn to_json(&self, config: &ToJsonConfig) -> AedtResult<String> {
        aedt_json::to_json(&self.document, config)
    }

    /// Write the JSON export. Any extension is accepted.
    pub fn save_json(&self, path: impl AsRef<Path>, config: &ToJsonConfig) -> AedtResult<()> {
        let path = path.as_ref();
        let json = self.to_json(config)?;
        fs::write(path, json).with_context(|| format!("writing {}", path.display()))
    }

    pub fn to_xml(&self, config: &ToXmlConfig) -> AedtResult<String> {
        aedt_xml::document_to_xml(&self.document, config).context("writing XML")
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Lines after `$end 'AnsoftProject'`.
    pub fn trailer(&self) -> &[String] {
        &self.trailer
    }

    /// Lines that matched no record shape during the load.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn designs(&self) -> &[Design] {
        &self.index.designs
    }

    pub fn design_names(&self) -> Vec<&str> {
        self.index.design_names()
    }

    pub fn design(&self, name: &str) -> AedtResult<&Design> {
        self.index
            .design(name)
            .ok_or_else(|| AedtError::unknown_design(name))
    }

    /// Variables of every design, keyed by design name.
    pub fn variables(&self) -> BTreeMap<&str, &[Variable]> {
        self.index
            .designs
            .iter()
            .map(|d| (d.name.as_str(), d.variables.as_slice()))
            .collect()
    }

    pub fn design_variables(&self, design: &str) -> AedtResult<&[Variable]> {
        Ok(&self.design(design)?.variables)
    }

    /// Current value expression of one variable.
    pub fn variable(&self, design: &str, name: &str) -> AedtResult<&str> {
        self.design(design)?
            .variable(name)
            .map(|v| v.value.as_str())
            .ok_or_else(|| AedtError::unknown_variable(design, name))
    }

    /// Solve setups of every design, keyed by design name.
    pub fn setups(&self) -> BTreeMap<&str, Vec<&Node>> {
        self.collect(|d| &d.setups)
    }

    pub fn design_setup(&self, design: &str) -> AedtResult<Vec<&Node>> {
        Ok(self.nodes(&self.design(design)?.setups))
    }

    /// Parametric (Optimetrics) setups of every design.
    pub fn parametric_setups(&self) -> BTreeMap<&str, Vec<&Node>> {
        self.collect(|d| &d.parametric_setups)
    }

    pub fn design_parametric_setup(&self, design: &str) -> AedtResult<Vec<&Node>> {
        Ok(self.nodes(&self.design(design)?.parametric_setups))
    }

    /// The `Reports` block of every design that has one.
    pub fn reports(&self) -> BTreeMap<&str, &Node> {
        self.index
            .designs
            .iter()
            .filter_map(|d| {
                let path = d.reports.as_ref()?;
                Some((d.name.as_str(), self.document.node_at(path)?))
            })
            .collect()
    }

    /// The design's `Reports` block, `None` when no instance refers to it.
    pub fn design_reports(&self, design: &str) -> AedtResult<Option<&Node>> {
        let design = self.design(design)?;
        Ok(design
            .reports
            .as_ref()
            .and_then(|path| self.document.node_at(path)))
    }

    /// Set a design variable's value expression in the document.
    ///
    /// Only the fourth `VariableProp` argument is rewritten. The new text shows
    /// up in [`to_text`](Self::to_text) and in every later save.
    pub fn change_variable(&mut self, design: &str, name: &str, value: &str) -> AedtResult<()> {
        let entry = self
            .index
            .design_mut(design)
            .ok_or_else(|| AedtError::unknown_design(design))?
            .variable_mut(name)
            .ok_or_else(|| AedtError::unknown_variable(design, name))?;

        let node = self.document.node_at_mut(&entry.path).ok_or_else(|| {
            AedtError::conversion(format!("variable '{}' is no longer in the document", name))
        })?;
        let mut args = node
            .decoded_value()
            .as_deref()
            .and_then(VariableArgs::parse)
            .ok_or_else(|| {
                AedtError::conversion(format!("cannot read VariableProp for '{}'", name))
            })?;
        args.set_value(value);
        node.set_value(&args.render());

        tracing::debug!(
            design,
            variable = name,
            old = %entry.value,
            new = value,
            "changed variable"
        );
        entry.value = value.to_string();
        Ok(())
    }

    fn collect<'a>(
        &'a self,
        pick: impl Fn(&'a Design) -> &'a Vec<NodePath>,
    ) -> BTreeMap<&'a str, Vec<&'a Node>> {
        self.index
            .designs
            .iter()
            .map(|d| (d.name.as_str(), self.nodes(pick(d))))
            .collect()
    }

    fn nodes(&self, paths: &[NodePath]) -> Vec<&Node> {
        paths
            .iter()
            .filter_map(|p| self.document.node_at(p))
            .collect()
    }
}

/// Fail with `UnsupportedExtension` unless `path` ends in `.aedt`.
pub fn check_extension(path: &Path) -> AedtResult<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(AEDT_EXTENSION) => Ok(()),
        other => Err(AedtError::unsupported_extension(format!(
            "cannot save to '{}': expected a .{} file, got {}",
            path.display(),
            AEDT_EXTENSION,
            other.map_or_else(|| "no extension".to_string(), |e| format!(".{}", e))
        ))),
    }
}
