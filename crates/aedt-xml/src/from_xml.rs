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

//! XML to records conversion

use crate::error::XmlError;
use aedt_core::{LeafKind, Record, TYPE_ATTR, VALUE_ATTR};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Default maximum element nesting accepted by [`from_xml`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Configuration for XML import
#[derive(Debug, Clone)]
pub struct FromXmlConfig {
    /// Maximum block nesting depth
    pub max_depth: usize,
    /// Expected wrapper element. With `None` there is no wrapper: every
    /// top-level element is read as a record.
    pub root_element: Option<String>,
}

impl Default for FromXmlConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            root_element: Some("aedt".to_string()),
        }
    }
}

/// Open element on the reader stack.
#[derive(Debug)]
enum Frame {
    Wrapper,
    Block(String),
    Leaf(String),
}

/// Convert an XML string back into the record stream.
pub fn from_xml(xml: &str, config: &FromXmlConfig) -> Result<Vec<Record>, XmlError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut records = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    // Wrapper name still to be matched against the first element.
    let mut pending_wrapper = config.root_element.as_deref();
    let mut wrapper_closed = false;

    loop {
        let event = reader.read_event().map_err(|e| XmlError::Parse {
            pos: reader.buffer_position(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(e) => {
                let name = element_name(&e);
                if let Some(root) = pending_wrapper.take() {
                    expect_wrapper(&name, root)?;
                    stack.push(Frame::Wrapper);
                    continue;
                }
                check_open(&stack, wrapper_closed, &name)?;
                match leaf_attributes(&e, &name)? {
                    Some((kind, value)) => {
                        records.push(leaf_record(name.clone(), kind, value));
                        stack.push(Frame::Leaf(name));
                    }
                    None => {
                        check_depth(&stack, config)?;
                        records.push(Record::BlockBegin(name.clone()));
                        stack.push(Frame::Block(name));
                    }
                }
            }
            Event::Empty(e) => {
                let name = element_name(&e);
                if let Some(root) = pending_wrapper.take() {
                    expect_wrapper(&name, root)?;
                    wrapper_closed = true;
                    continue;
                }
                check_open(&stack, wrapper_closed, &name)?;
                match leaf_attributes(&e, &name)? {
                    Some((kind, value)) => records.push(leaf_record(name, kind, value)),
                    None => {
                        check_depth(&stack, config)?;
                        records.push(Record::BlockBegin(name.clone()));
                        records.push(Record::BlockEnd(name));
                    }
                }
            }
            Event::End(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match stack.pop() {
                    Some(Frame::Wrapper) => wrapper_closed = true,
                    Some(Frame::Block(open)) if open == name => {
                        records.push(Record::BlockEnd(name));
                    }
                    Some(Frame::Leaf(open)) if open == name => {}
                    Some(Frame::Block(open)) | Some(Frame::Leaf(open)) => {
                        return Err(XmlError::structure(format!(
                            "end tag </{}> does not match <{}>",
                            name, open
                        )))
                    }
                    None => {
                        return Err(XmlError::structure(format!(
                            "end tag </{}> without open element",
                            name
                        )))
                    }
                }
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| XmlError::Parse {
                    pos: reader.buffer_position(),
                    message: e.to_string(),
                })?;
                if !text.trim().is_empty() {
                    return Err(XmlError::structure(format!(
                        "unexpected text content '{}'",
                        text.trim()
                    )));
                }
            }
            Event::CData(_) => {
                return Err(XmlError::structure("unexpected CDATA section"));
            }
            Event::Eof => break,
            // Declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(XmlError::structure(format!(
            "document ended with {} open element(s)",
            stack.len()
        )));
    }
    if let Some(root) = pending_wrapper {
        return Err(XmlError::structure(format!(
            "missing root element <{}>",
            root
        )));
    }

    Ok(records)
}

fn element_name(e: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(e.name().as_ref()).into_owned()
}

fn expect_wrapper(name: &str, root: &str) -> Result<(), XmlError> {
    if name != root {
        return Err(XmlError::structure(format!(
            "expected root element <{}>, found <{}>",
            root, name
        )));
    }
    Ok(())
}

fn check_open(stack: &[Frame], wrapper_closed: bool, name: &str) -> Result<(), XmlError> {
    if wrapper_closed {
        return Err(XmlError::structure(format!(
            "element <{}> after the root element",
            name
        )));
    }
    if let Some(Frame::Leaf(leaf)) = stack.last() {
        return Err(XmlError::structure(format!(
            "leaf element <{}> cannot contain <{}>",
            leaf, name
        )));
    }
    Ok(())
}

fn check_depth(stack: &[Frame], config: &FromXmlConfig) -> Result<(), XmlError> {
    let depth = stack
        .iter()
        .filter(|frame| matches!(frame, Frame::Block(_)))
        .count()
        + 1;
    if depth > config.max_depth {
        return Err(XmlError::RecursionLimitExceeded {
            max: config.max_depth,
            current: depth,
        });
    }
    Ok(())
}

/// Read `type`/`value`; `None` when the element is a block.
fn leaf_attributes(e: &BytesStart<'_>, name: &str) -> Result<Option<(LeafKind, String)>, XmlError> {
    let mut kind = None;
    let mut value = None;

    for attr in e.attributes() {
        let attr = attr.map_err(|err| XmlError::Parse {
            pos: 0,
            message: err.to_string(),
        })?;
        let key = attr.key.as_ref();
        if key == TYPE_ATTR.as_bytes() {
            let raw = attr.unescape_value().map_err(|err| invalid(name, err))?;
            kind = Some(LeafKind::parse(&raw).ok_or_else(|| XmlError::InvalidValue {
                message: format!("element <{}> has unknown type '{}'", name, raw),
            })?);
        } else if key == VALUE_ATTR.as_bytes() {
            let raw = attr.unescape_value().map_err(|err| invalid(name, err))?;
            value = Some(raw.into_owned());
        }
    }

    match (kind, value) {
        (Some(kind), Some(value)) => Ok(Some((kind, value))),
        (Some(_), None) => Err(XmlError::InvalidValue {
            message: format!("leaf element <{}> has no value attribute", name),
        }),
        (None, _) => Ok(None),
    }
}

fn invalid(name: &str, err: impl std::fmt::Display) -> XmlError {
    XmlError::InvalidValue {
        message: format!("element <{}>: {}", name, err),
    }
}

fn leaf_record(tag: String, kind: LeafKind, value: String) -> Record {
    match kind {
        LeafKind::Value => Record::ScalarAssign { key: tag, value },
        LeafKind::Function => Record::FunctionCall {
            name: tag,
            args: value,
        },
        LeafKind::Array => Record::ArrayAssign { key: tag, index: value },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(xml: &str) -> Result<Vec<Record>, XmlError> {
        from_xml(xml, &FromXmlConfig::default())
    }

    #[test]
    fn test_read_leaf_and_blocks() {
        let records = read(
            r#"<?xml version="1.0"?>
<aedt>
  <A>
    <Foo type="value" value="__APOSTROPHE__bar__APOSTROPHE__"/>
    <Setup1/>
  </A>
</aedt>"#,
        )
        .unwrap();
        assert_eq!(
            records,
            vec![
                Record::BlockBegin("A".to_string()),
                Record::ScalarAssign {
                    key: "Foo".to_string(),
                    value: "__APOSTROPHE__bar__APOSTROPHE__".to_string(),
                },
                Record::BlockBegin("Setup1".to_string()),
                Record::BlockEnd("Setup1".to_string()),
                Record::BlockEnd("A".to_string()),
            ]
        );
    }

    #[test]
    fn test_entities_unescaped() {
        let records = read(r#"<aedt><Fn type="function" value="(a &amp; b)"/></aedt>"#).unwrap();
        assert_eq!(
            records,
            vec![Record::FunctionCall {
                name: "Fn".to_string(),
                args: "(a & b)".to_string(),
            }]
        );
    }

    #[test]
    fn test_leaf_written_with_end_tag() {
        let records = read(r#"<aedt><Pos type="array" value="3: 1"></Pos></aedt>"#).unwrap();
        assert_eq!(
            records,
            vec![Record::ArrayAssign {
                key: "Pos".to_string(),
                index: "3: 1".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_wrapper() {
        assert_eq!(read("<aedt/>").unwrap(), Vec::<Record>::new());
        assert_eq!(read("<aedt></aedt>").unwrap(), Vec::<Record>::new());
    }

    #[test]
    fn test_without_wrapper() {
        let config = FromXmlConfig {
            root_element: None,
            ..FromXmlConfig::default()
        };
        let records = from_xml("<A/><B/>", &config).unwrap();
        assert_eq!(records.len(), 4);

        // Any element name is a record here, the default wrapper included.
        let records = from_xml("<aedt><A/></aedt>", &config).unwrap();
        assert_eq!(
            records,
            vec![
                Record::begin("aedt"),
                Record::begin("A"),
                Record::end("A"),
                Record::end("aedt"),
            ]
        );
    }

    #[test]
    fn test_wrapper_name_must_match_exactly() {
        let config = FromXmlConfig {
            root_element: Some("project".to_string()),
            ..FromXmlConfig::default()
        };
        assert!(from_xml("<project><A/></project>", &config).is_ok());
        let err = from_xml("<aedt><A/></aedt>", &config).unwrap_err();
        assert!(err.to_string().contains("<project>"));
    }

    #[test]
    fn test_wrong_wrapper() {
        let err = read("<other/>").unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }

    #[test]
    fn test_missing_wrapper() {
        let err = read("").unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }

    #[test]
    fn test_unknown_type_rejected() {
        let err = read(r#"<aedt><X type="blob" value="1"/></aedt>"#).unwrap_err();
        assert!(matches!(err, XmlError::InvalidValue { .. }));
    }

    #[test]
    fn test_missing_value_rejected() {
        let err = read(r#"<aedt><X type="value"/></aedt>"#).unwrap_err();
        assert!(matches!(err, XmlError::InvalidValue { .. }));
    }

    #[test]
    fn test_text_content_rejected() {
        let err = read("<aedt><A>hello</A></aedt>").unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }

    #[test]
    fn test_leaf_with_children_rejected() {
        let err = read(r#"<aedt><X type="value" value="1"><Y/></X></aedt>"#).unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }

    #[test]
    fn test_content_after_wrapper_rejected() {
        let err = read("<aedt/><A/>").unwrap_err();
        assert!(matches!(err, XmlError::Structure { .. }));
    }

    #[test]
    fn test_unclosed_element_rejected() {
        assert!(read("<aedt><A>").is_err());
    }

    #[test]
    fn test_depth_limit() {
        let config = FromXmlConfig {
            max_depth: 2,
            ..FromXmlConfig::default()
        };
        let err = from_xml("<aedt><A><B><C/></B></A></aedt>", &config).unwrap_err();
        assert_eq!(err, XmlError::RecursionLimitExceeded { max: 2, current: 3 });
    }
}
