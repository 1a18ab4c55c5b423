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

//! Document to JSON conversion

use aedt_core::{AedtError, AedtResult, Document, Node};
use serde_json::{json, Map, Value as JsonValue};

/// Key holding a leaf's kind.
pub const TYPE_KEY: &str = "@type";
/// Key holding a leaf's payload.
pub const VALUE_KEY: &str = "@value";

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Pretty-print the serialized string
    pub pretty: bool,
    /// Decode tags and payloads back to their AEDT spelling
    pub decode: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            decode: false,
        }
    }
}

/// Convert a document to a JSON string.
pub fn to_json(doc: &Document, config: &ToJsonConfig) -> AedtResult<String> {
    let value = to_json_value(doc, config);
    let result = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    result.map_err(|e| AedtError::conversion(format!("JSON serialization error: {}", e)))
}

/// Convert a document to a `serde_json::Value`.
pub fn to_json_value(doc: &Document, config: &ToJsonConfig) -> JsonValue {
    nodes_to_json(&doc.nodes, config)
}

fn nodes_to_json(nodes: &[Node], config: &ToJsonConfig) -> JsonValue {
    let mut map = Map::with_capacity(nodes.len());

    for node in nodes {
        let key = if config.decode {
            node.name()
        } else {
            node.tag.clone()
        };
        let value = node_to_json(node, config);

        match map.get_mut(&key) {
            // Node values are never arrays, so an array here is a group.
            Some(JsonValue::Array(items)) => items.push(value),
            Some(existing) => {
                let first = existing.take();
                *existing = JsonValue::Array(vec![first, value]);
            }
            None => {
                map.insert(key, value);
            }
        }
    }

    JsonValue::Object(map)
}

fn node_to_json(node: &Node, config: &ToJsonConfig) -> JsonValue {
    if node.is_block() {
        if node.children.is_empty() {
            return JsonValue::Null;
        }
        return nodes_to_json(&node.children, config);
    }

    let kind = node.leaf_kind().map(|k| k.as_str()).unwrap_or_default();
    let value = if config.decode {
        node.decoded_value().unwrap_or_default()
    } else {
        node.value().unwrap_or_default().to_string()
    };
    json!({ TYPE_KEY: kind, VALUE_KEY: value })
}
