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

//! # AEDT
//!
//! Read, query, edit and write Ansys Electronics Desktop project files
//! (`.aedt`) without losing a byte of what the tool wrote.
//!
//! ## Quick Start
//!
//! ```rust
//! use aedt::Project;
//!
//! let text = "\
//! $begin 'AnsoftProject'
//! \t$begin 'Maxwell3DModel'
//! \t\tName='Motor'
//! \t\t$begin 'ModelSetup'
//! \t\t\t$begin 'Properties'
//! \t\t\t\tVariableProp('width', 'UD', '', '3mm')
//! \t\t\t$end 'Properties'
//! \t\t$end 'ModelSetup'
//! \t$end 'Maxwell3DModel'
//! $end 'AnsoftProject'
//! ";
//!
//! let mut project = Project::from_text(text)?;
//! assert_eq!(project.design_names(), vec!["Motor"]);
//!
//! project.change_variable("Motor", "width", "5mm")?;
//! assert!(project.to_text().contains("'5mm')"));
//! # Ok::<(), aedt::AedtError>(())
//! ```
//!
//! ## Modules
//!
//! - [`codec`]: the line codec, escape rules and document tree
//! - [`xml`]: the XML form of the record stream
//! - [`json`]: JSON export

// Re-export core types
pub use aedt_core::{
    parse, parse_with_options, AedtError, AedtErrorKind, AedtResult, Document, LeafKind, Limits,
    Node, ParseOptions, ParseOutput, Record, UnparseConfig,
};

mod design;
mod error_ext;
mod project;
mod variable;

pub use design::{Design, ProjectIndex, Variable, EXCLUDED_SETUP_KEYS, INSTANCE_TYPES, MODEL_TYPES};
pub use error_ext::AedtResultExt;
pub use project::{check_extension, Project, AEDT_EXTENSION};
pub use variable::VariableArgs;

pub mod codec {
    //! Core codec
    pub use aedt_core::*;
}

pub mod xml {
    //! XML conversion
    pub use aedt_xml::{
        document_to_xml, from_xml, to_xml, xml_to_document, FromXmlConfig, ToXmlConfig, XmlError,
    };
}

pub mod json {
    //! JSON export
    pub use aedt_json::{to_json, to_json_value, ToJsonConfig};
}
