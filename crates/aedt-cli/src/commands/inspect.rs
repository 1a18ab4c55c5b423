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

//! Inspect command - designs, variables, setups and reports

use super::load_project;
use crate::error::CliError;
use aedt::{Node, Project};
use colored::Colorize;

/// Print the designs of a project with their variables, setups and reports.
///
/// With `verbose`, the whole document tree follows, one node per line, with
/// names and values as they appear in the AEDT text.
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let project = load_project(file, false)?;

    println!("{}", "AEDT Project".bold().underline());
    println!();
    println!("{}  {}", "File:".cyan(), file);
    println!("{}  {}", "Designs:".cyan(), project.designs().len());

    for design in project.designs() {
        println!();
        println!("{} ({})", design.name.green().bold(), design.model_type);
        print_design(&project, &design.name)?;
    }

    if verbose {
        println!();
        println!("{}", "Tree:".cyan());
        for node in &project.document().nodes {
            print_node(node, 1);
        }
    }

    Ok(())
}

fn print_design(project: &Project, name: &str) -> Result<(), CliError> {
    let variables = project.design_variables(name)?;
    if !variables.is_empty() {
        println!("  {}", "Variables:".cyan());
        for var in variables {
            println!("    {} = {}", var.name.yellow(), var.value);
        }
    }

    print_names("Setups:", &project.design_setup(name)?);
    print_names("Parametric setups:", &project.design_parametric_setup(name)?);

    if let Some(reports) = project.design_reports(name)? {
        let names: Vec<_> = reports.children.iter().collect();
        print_names("Reports:", &names);
    }
    Ok(())
}

fn print_names(label: &str, nodes: &[&Node]) {
    if nodes.is_empty() {
        return;
    }
    let names: Vec<_> = nodes.iter().map(|n| n.name()).collect();
    println!("  {} {}", label.cyan(), names.join(", "));
}

fn print_node(node: &Node, indent: usize) {
    let prefix = "  ".repeat(indent);
    match node.leaf_kind() {
        None => {
            println!("{}{}", prefix, node.name().yellow());
            for child in &node.children {
                print_node(child, indent + 1);
            }
        }
        Some(kind) => {
            let value = node.decoded_value().unwrap_or_default();
            println!("{}{} [{}] {}", prefix, node.name(), kind.as_str(), value);
        }
    }
}
