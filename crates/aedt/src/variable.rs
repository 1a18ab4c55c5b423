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

//! `VariableProp` argument lists.
//!
//! A design variable is stored as a function record such as
//! `VariableProp('width', 'UD', '', '3mm')`. The first argument is the
//! variable name and the fourth its value expression.

/// Index of the variable name in the argument list.
const NAME_ARG: usize = 0;
/// Index of the value expression in the argument list.
const VALUE_ARG: usize = 3;

/// A split `VariableProp` argument list.
///
/// Arguments keep their original spacing, so rendering an unmodified list
/// reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableArgs {
    args: Vec<String>,
}

impl VariableArgs {
    /// Split a parenthesized argument list. Returns `None` when the text is
    /// not wrapped in parentheses or has fewer than four arguments.
    ///
    /// ```rust
    /// use aedt::VariableArgs;
    ///
    /// let args = VariableArgs::parse("('width', 'UD', '', '3mm')").unwrap();
    /// assert_eq!(args.name(), "width");
    /// assert_eq!(args.value(), "3mm");
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
        let args = split_args(inner);
        if args.len() <= VALUE_ARG {
            return None;
        }
        Some(Self { args })
    }

    pub fn name(&self) -> &str {
        unquote(&self.args[NAME_ARG])
    }

    pub fn value(&self) -> &str {
        unquote(&self.args[VALUE_ARG])
    }

    /// Replace the value expression, quoting it the way AEDT writes it.
    pub fn set_value(&mut self, value: &str) {
        let slot = &mut self.args[VALUE_ARG];
        let lead = slot.len() - slot.trim_start().len();
        let mut replaced = slot[..lead].to_string();
        replaced.push('\'');
        replaced.push_str(value);
        replaced.push('\'');
        *slot = replaced;
    }

    /// Render back to `(...)` form.
    pub fn render(&self) -> String {
        format!("({})", self.args.join(","))
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

/// Split on commas outside quotes and brackets.
fn split_args(inner: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut depth = 0usize;

    for c in inner.chars() {
        match c {
            '\'' => quoted = !quoted,
            '(' | '[' if !quoted => depth += 1,
            ')' | ']' if !quoted => depth = depth.saturating_sub(1),
            ',' if !quoted && depth == 0 => {
                args.push(std::mem::take(&mut current));
                continue;
            }
            _ => {}
        }
        current.push(c);
    }
    args.push(current);
    args
}

fn unquote(arg: &str) -> &str {
    let arg = arg.trim();
    arg.strip_prefix('\'')
        .and_then(|a| a.strip_suffix('\''))
        .unwrap_or(arg)
}
