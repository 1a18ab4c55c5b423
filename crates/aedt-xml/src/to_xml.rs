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

//! Records to XML conversion

use crate::error::XmlError;
use aedt_core::{LeafKind, Record, TYPE_ATTR, VALUE_ATTR};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Indentation unit (e.g., "  " or "\t")
    pub indent: String,
    /// Wrapper element holding the top-level records
    pub root_element: String,
    /// Write the `<?xml ...?>` declaration
    pub declaration: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            root_element: "aedt".to_string(),
            declaration: true,
        }
    }
}

impl ToXmlConfig {
    /// Single-line output without declaration.
    pub fn compact() -> Self {
        Self {
            pretty: false,
            declaration: false,
            ..Self::default()
        }
    }
}

/// Convert a record stream to an XML string.
///
/// A block whose `$begin` is directly followed by its `$end` is written as a
/// self-closing element. Leaves are written as
/// `<key type="value|function|array" value="..."/>`.
pub fn to_xml(records: &[Record], config: &ToXmlConfig) -> Result<String, XmlError> {
    let mut writer = if config.pretty {
        let indent_char = config.indent.as_bytes().first().copied().unwrap_or(b' ');
        Writer::new_with_indent(Cursor::new(Vec::new()), indent_char, config.indent.len())
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    if config.declaration {
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| XmlError::write("XML declaration", e))?;
    }

    writer
        .write_event(Event::Start(BytesStart::new(config.root_element.as_str())))
        .map_err(|e| XmlError::write("root element", e))?;

    write_records(&mut writer, records)?;

    writer
        .write_event(Event::End(BytesEnd::new(config.root_element.as_str())))
        .map_err(|e| XmlError::write("root element end", e))?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).map_err(|e| XmlError::write("XML output", e))
}

fn write_records<W: std::io::Write>(
    writer: &mut Writer<W>,
    records: &[Record],
) -> Result<(), XmlError> {
    let mut open: Vec<&str> = Vec::new();
    let mut iter = records.iter().peekable();

    while let Some(record) = iter.next() {
        match record {
            Record::BlockBegin(name) => {
                if matches!(iter.peek(), Some(Record::BlockEnd(end)) if end == name) {
                    iter.next();
                    writer
                        .write_event(Event::Empty(BytesStart::new(name.as_str())))
                        .map_err(|e| XmlError::write("empty block", e))?;
                } else {
                    open.push(name);
                    writer
                        .write_event(Event::Start(BytesStart::new(name.as_str())))
                        .map_err(|e| XmlError::write("block start", e))?;
                }
            }
            Record::BlockEnd(name) => {
                match open.pop() {
                    Some(expected) if expected == name => {}
                    Some(expected) => {
                        return Err(XmlError::structure(format!(
                            "block end '{}' does not match open block '{}'",
                            name, expected
                        )))
                    }
                    None => {
                        return Err(XmlError::structure(format!(
                            "block end '{}' without open block",
                            name
                        )))
                    }
                }
                writer
                    .write_event(Event::End(BytesEnd::new(name.as_str())))
                    .map_err(|e| XmlError::write("block end", e))?;
            }
            Record::FunctionCall { name, args } => {
                write_leaf(writer, name, LeafKind::Function, args)?;
            }
            Record::ScalarAssign { key, value } => {
                write_leaf(writer, key, LeafKind::Value, value)?;
            }
            Record::ArrayAssign { key, index } => {
                write_leaf(writer, key, LeafKind::Array, index)?;
            }
        }
    }

    if let Some(name) = open.last() {
        return Err(XmlError::structure(format!(
            "block '{}' is never closed",
            name
        )));
    }
    Ok(())
}

fn write_leaf<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    kind: LeafKind,
    value: &str,
) -> Result<(), XmlError> {
    let mut elem = BytesStart::new(tag);
    elem.push_attribute((TYPE_ATTR, kind.as_str()));
    elem.push_attribute((VALUE_ATTR, value));
    writer
        .write_event(Event::Empty(elem))
        .map_err(|e| XmlError::write("leaf element", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compact(records: &[Record]) -> String {
        to_xml(records, &ToXmlConfig::compact()).unwrap()
    }

    #[test]
    fn test_leaf_element() {
        let xml = compact(&[Record::scalar("Foo", "'bar'")]);
        assert_eq!(
            xml,
            r#"<aedt><Foo type="value" value="__APOSTROPHE__bar__APOSTROPHE__"/></aedt>"#
        );
    }

    #[test]
    fn test_empty_block_self_closes() {
        let xml = compact(&[Record::begin("Setup1"), Record::end("Setup1")]);
        assert_eq!(xml, "<aedt><Setup1/></aedt>");
    }

    #[test]
    fn test_nested_blocks() {
        let xml = compact(&[
            Record::begin("A"),
            Record::function("Version", "(2019, 1)"),
            Record::end("A"),
        ]);
        assert_eq!(
            xml,
            r#"<aedt><A><Version type="function" value="(2019, 1)"/></A></aedt>"#
        );
    }

    #[test]
    fn test_ampersand_entity_escaped() {
        let xml = compact(&[Record::function("Fn", "(a & b)")]);
        assert!(xml.contains(r#"value="(a &amp; b)""#));
    }

    #[test]
    fn test_declaration_and_custom_root() {
        let config = ToXmlConfig {
            root_element: "project".to_string(),
            ..ToXmlConfig::default()
        };
        let xml = to_xml(&[Record::array("Pos", "3: 1, 2, 3")], &config).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<project>"));
        assert!(xml.contains(r#"<Pos type="array" value="3: 1, 2, 3"/>"#));
    }

    #[test]
    fn test_pretty_output_is_indented() {
        let config = ToXmlConfig {
            declaration: false,
            ..ToXmlConfig::default()
        };
        let xml = to_xml(&[Record::begin("A"), Record::scalar("X", "1"), Record::end("A")], &config)
            .unwrap();
        assert!(xml.contains("\n    <X type=\"value\" value=\"1\"/>"));
    }

    #[test]
    fn test_unbalanced_records_rejected() {
        let err = to_xml(&[Record::begin("A"), Record::end("B")], &ToXmlConfig::compact())
            .unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));

        let err = to_xml(&[Record::begin("A")], &ToXmlConfig::compact()).unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));

        let err = to_xml(&[Record::end("A")], &ToXmlConfig::compact()).unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }
}
