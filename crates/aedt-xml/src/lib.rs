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

//! AEDT XML Conversion
//!
//! Writes AEDT record streams as XML and reads them back.
//!
//! Every block becomes an element named by its escaped tag. Every leaf
//! becomes an empty element carrying two attributes: `type` (one of
//! `value`, `function` or `array`) and `value` (the escaped payload). The
//! whole stream is wrapped in a single root element, `<aedt>` by default.
//!
//! Names and payloads are already escaped by the lexer, so every tag is a
//! valid XML name and every value fits on one line.
//!
//! # Examples
//!
//! ```rust
//! use aedt_core::parse;
//! use aedt_xml::{document_to_xml, xml_to_document, FromXmlConfig, ToXmlConfig};
//!
//! let doc = parse(b"$begin 'AnsoftProject'\nVersion(2019, 1)\n$end 'AnsoftProject'\n")?;
//! let xml = document_to_xml(&doc, &ToXmlConfig::default())?;
//! assert!(xml.contains(r#"<Version type="function" value="(2019, 1)"/>"#));
//!
//! let back = xml_to_document(&xml, &FromXmlConfig::default())?;
//! assert_eq!(back, doc);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod from_xml;
mod to_xml;

pub use error::XmlError;
pub use from_xml::{from_xml, FromXmlConfig, DEFAULT_MAX_DEPTH};
pub use to_xml::{to_xml, ToXmlConfig};

use aedt_core::{build, flatten, Document, Limits};

/// Write a document's records as XML.
pub fn document_to_xml(doc: &Document, config: &ToXmlConfig) -> Result<String, XmlError> {
    to_xml(&flatten(doc), config)
}

/// Read XML into records and assemble them into a document.
pub fn xml_to_document(xml: &str, config: &FromXmlConfig) -> Result<Document, XmlError> {
    let records = from_xml(xml, config)?;
    let limits = Limits {
        max_block_depth: config.max_depth,
        ..Limits::default()
    };
    build(&records, &limits).map_err(|e| XmlError::structure(e.to_string()))
}
