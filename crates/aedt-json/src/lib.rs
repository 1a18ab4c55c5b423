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

//! AEDT JSON Export
//!
//! Renders a parsed project tree as JSON using the usual XML-to-JSON
//! attribute convention:
//!
//! - a block becomes an object keyed by its children's tags, or `null` when
//!   it has no children;
//! - siblings sharing a tag are collected into an array at the position of
//!   the first one;
//! - a leaf becomes `{"@type": ..., "@value": ...}`.
//!
//! Keys and values stay in escaped form unless [`ToJsonConfig::decode`] is
//! set, in which case they read as in the AEDT text.
//!
//! # Examples
//!
//! ```rust
//! use aedt_json::{to_json_value, ToJsonConfig};
//!
//! let doc = aedt_core::parse(b"$begin 'AnsoftProject'\nFoo='bar'\n$end 'AnsoftProject'\n")?;
//! let config = ToJsonConfig { decode: true, ..ToJsonConfig::default() };
//! let json = to_json_value(&doc, &config);
//! assert_eq!(json["AnsoftProject"]["Foo"]["@value"], "'bar'");
//! # Ok::<(), aedt_core::AedtError>(())
//! ```

mod to_json;

pub use to_json::{to_json, to_json_value, ToJsonConfig, TYPE_KEY, VALUE_KEY};
