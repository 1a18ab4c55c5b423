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

//! Conversion commands - XML in both directions, JSON export

use super::{load_project, read_text, write_aedt, write_output};
use crate::error::CliError;
use aedt::codec::{lines_to_text, unparse_document};
use aedt::json::ToJsonConfig;
use aedt::xml::{xml_to_document, FromXmlConfig, ToXmlConfig};
use aedt::UnparseConfig;

/// Convert an AEDT project to its XML form.
pub fn to_xml(file: &str, output: Option<&str>, compact: bool) -> Result<(), CliError> {
    let project = load_project(file, false)?;
    let config = if compact {
        ToXmlConfig::compact()
    } else {
        ToXmlConfig::default()
    };
    let mut xml = project.to_xml(&config)?;
    if !xml.ends_with('\n') {
        xml.push('\n');
    }
    write_output(&xml, output)
}

/// Convert the XML form back into a tab-indented `.aedt` file.
pub fn from_xml(file: &str, output: &str) -> Result<(), CliError> {
    let xml = read_text(file)?;
    let doc = xml_to_document(&xml, &FromXmlConfig::default())?;
    let text = lines_to_text(&unparse_document(&doc, &UnparseConfig::tabs()));
    tracing::debug!(nodes = doc.node_count(), "converted XML to AEDT");
    write_aedt(&text, output)
}

/// Export an AEDT project as JSON.
pub fn to_json(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    decode: bool,
) -> Result<(), CliError> {
    let project = load_project(file, false)?;
    let config = ToJsonConfig { pretty, decode };
    let mut json = project
        .to_json(&config)
        .map_err(|e| CliError::JsonConversion(e.to_string()))?;
    json.push('\n');
    write_output(&json, output)
}
