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

//! Sentinel escape codec.
//!
//! AEDT block names and keys are free text (`'Editor3D Doc Preferences'`,
//! `'1'`, `'-1'`), but the tree form stores them as element names, and values
//! as attribute text. The codec replaces every character or condition that is
//! unsafe in the target position with a sentinel token.
//!
//! # Sentinel shape
//!
//! Every sentinel is `__` + an uppercase letter + `[A-Z0-9]*` + `__`, for
//! example `__APOSTROPHE__`, `__NEG__` or the hex fallback `__X2A__`. Literal
//! text never contains two adjacent underscores after encoding: an `_` that
//! is immediately followed by another `_` is written as `__US__`. This makes
//! [`encode`] injective and lets [`decode`] scan a token in a single
//! left-to-right pass.
//!
//! # Contexts
//!
//! | Condition                  | TagName        | AttributeKey     | AttributeValue |
//! |----------------------------|----------------|------------------|----------------|
//! | empty string               | `__EMPTY__`    | `__EMPTY__`      | `__EMPTY__`    |
//! | `-` then digit at start    | `__NEG__`      | -                | -              |
//! | `'`                        | `__APOSTROPHE__` | `__APOSTROPHE__` | `__APOSTROPHE__` |
//! | digit at start             | `__DIGI__`     | `__DIGI__`       | -              |
//! | space                      | `__BLANK__`    | `__BLANK__`      | -              |
//! | `/`                        | `__SEP__`      | `__SLASH__`      | -              |
//! | `.`                        | `__DOT__`      | `__PERIOD__`     | -              |
//! | line break, tab            | hex            | hex              | `__LF__` `__CR__` `__TAB__` |
//!
//! Names additionally map `( ) + - [ ] : , " = &` to named sentinels. Any
//! other character that is not ASCII alphanumeric, `_` or a non-ASCII XML
//! name-start character (so not `µ` or `ª`) takes the hex fallback.
//! Values only escape control characters besides the named ones; XML entity
//! escaping of values is left to the XML writer.
//!
//! # Examples
//!
//! ```
//! use aedt_core::{decode, encode, EscapeContext};
//!
//! let tag = encode(EscapeContext::TagName, "Editor3D Doc Preferences");
//! assert_eq!(tag, "Editor3D__BLANK__Doc__BLANK__Preferences");
//! assert_eq!(decode(EscapeContext::TagName, &tag), "Editor3D Doc Preferences");
//!
//! assert_eq!(encode(EscapeContext::TagName, "-1"), "__NEG__1");
//! assert_eq!(encode(EscapeContext::AttributeValue, "'bar'"), "__APOSTROPHE__bar__APOSTROPHE__");
//! ```

/// Where an escaped token is going to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeContext {
    /// Block names, stored as element names of block nodes.
    TagName,
    /// Leaf keys and function names, stored as element names of leaf nodes.
    AttributeKey,
    /// Leaf payloads, stored as the `value` attribute.
    AttributeValue,
}

const EMPTY: &str = "__EMPTY__";
const NEG: &str = "__NEG__";
const DIGI: &str = "__DIGI__";
const VERBATIM: &str = "__VERBATIM__";

/// Key marker for the quoted material-value field class.
pub const MATERIAL_MARKER: &str = "MaterialValue";

/// Encode `text` for the given context.
pub fn encode(ctx: EscapeContext, text: &str) -> String {
    if text.is_empty() {
        return EMPTY.to_string();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut body = text;

    match ctx {
        EscapeContext::TagName if starts_negative(text) => {
            out.push_str(NEG);
            body = &text[1..];
        }
        EscapeContext::TagName | EscapeContext::AttributeKey if starts_with_digit(text) => {
            out.push_str(DIGI);
        }
        _ => {}
    }

    encode_body(ctx, body, &mut out);
    out
}

/// Decode a token produced by [`encode`] in the same context.
///
/// Decoding is total: text that is not a known sentinel is copied through.
pub fn decode(ctx: EscapeContext, token: &str) -> String {
    if token == EMPTY {
        return String::new();
    }

    match ctx {
        EscapeContext::TagName => {
            if let Some(rest) = token.strip_prefix(NEG) {
                let mut out = String::with_capacity(rest.len() + 1);
                out.push('-');
                decode_body(ctx, rest, &mut out);
                return out;
            }
            decode_prefixed(ctx, token)
        }
        EscapeContext::AttributeKey => decode_prefixed(ctx, token),
        EscapeContext::AttributeValue => {
            let mut out = String::with_capacity(token.len());
            decode_body(ctx, token, &mut out);
            out
        }
    }
}

fn decode_prefixed(ctx: EscapeContext, token: &str) -> String {
    let rest = token.strip_prefix(DIGI).unwrap_or(token);
    let mut out = String::with_capacity(rest.len());
    decode_body(ctx, rest, &mut out);
    out
}

fn starts_negative(text: &str) -> bool {
    let mut chars = text.chars();
    chars.next() == Some('-') && chars.next().is_some_and(|c| c.is_ascii_digit())
}

fn starts_with_digit(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
}

fn encode_body(ctx: EscapeContext, text: &str, out: &mut String) {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '_' {
            if chars.peek() == Some(&'_') {
                out.push_str("__US__");
            } else {
                out.push('_');
            }
            continue;
        }

        if let Some(name) = sentinel_for(ctx, c) {
            push_sentinel(out, name);
        } else if needs_hex(ctx, c) {
            out.push_str(&format!("__X{:X}__", c as u32));
        } else {
            out.push(c);
        }
    }
}

fn push_sentinel(out: &mut String, name: &str) {
    out.push_str("__");
    out.push_str(name);
    out.push_str("__");
}

/// Named sentinel for a character in the given context.
fn sentinel_for(ctx: EscapeContext, c: char) -> Option<&'static str> {
    match ctx {
        EscapeContext::AttributeValue => match c {
            '\'' => Some("APOSTROPHE"),
            '\n' => Some("LF"),
            '\r' => Some("CR"),
            '\t' => Some("TAB"),
            _ => None,
        },
        EscapeContext::TagName | EscapeContext::AttributeKey => {
            let tag = ctx == EscapeContext::TagName;
            match c {
                '\'' => Some("APOSTROPHE"),
                ' ' => Some("BLANK"),
                // Block names use path-safe markers so `/` stays a pure separator
                // in `Node::find` paths.
                '/' if tag => Some("SEP"),
                '/' => Some("SLASH"),
                '.' if tag => Some("DOT"),
                '.' => Some("PERIOD"),
                '(' => Some("LPAREN"),
                ')' => Some("RPAREN"),
                '+' => Some("PLUS"),
                '-' => Some("MINUS"),
                '[' => Some("LBRACKET"),
                ']' => Some("RBRACKET"),
                ':' => Some("COLON"),
                ',' => Some("COMMA"),
                '"' => Some("QUOTE"),
                '=' => Some("EQUALS"),
                '&' => Some("AMP"),
                _ => None,
            }
        }
    }
}

fn needs_hex(ctx: EscapeContext, c: char) -> bool {
    match ctx {
        EscapeContext::AttributeValue => c.is_control(),
        EscapeContext::TagName | EscapeContext::AttributeKey => !is_name_char(c),
    }
}

/// Characters that may appear unescaped in an encoded name.
///
/// Non-ASCII characters pass only when they are valid anywhere in an XML 1.0
/// element name, so a name may start with any character that passes.
fn is_name_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '_';
    }
    is_xml_name_start(c)
}

/// Non-ASCII part of the XML 1.0 `NameStartChar` production.
fn is_xml_name_start(c: char) -> bool {
    matches!(c,
        '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

/// Reverse lookup of a sentinel name.
fn char_for(ctx: EscapeContext, name: &str) -> Option<char> {
    let named = match (ctx, name) {
        (_, "US") => Some('_'),
        (_, "APOSTROPHE") => Some('\''),
        (EscapeContext::AttributeValue, "LF") => Some('\n'),
        (EscapeContext::AttributeValue, "CR") => Some('\r'),
        (EscapeContext::AttributeValue, "TAB") => Some('\t'),
        (EscapeContext::AttributeValue, _) => None,
        (EscapeContext::TagName, "SEP") => Some('/'),
        (EscapeContext::TagName, "DOT") => Some('.'),
        (EscapeContext::AttributeKey, "SLASH") => Some('/'),
        (EscapeContext::AttributeKey, "PERIOD") => Some('.'),
        (_, "BLANK") => Some(' '),
        (_, "LPAREN") => Some('('),
        (_, "RPAREN") => Some(')'),
        (_, "PLUS") => Some('+'),
        (_, "MINUS") => Some('-'),
        (_, "LBRACKET") => Some('['),
        (_, "RBRACKET") => Some(']'),
        (_, "COLON") => Some(':'),
        (_, "COMMA") => Some(','),
        (_, "QUOTE") => Some('"'),
        (_, "EQUALS") => Some('='),
        (_, "AMP") => Some('&'),
        _ => None,
    };

    named.or_else(|| hex_char(name))
}

fn hex_char(name: &str) -> Option<char> {
    let digits = name.strip_prefix('X')?;
    if digits.is_empty() || digits.len() > 6 {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}

/// Parse a sentinel name at the start of `rest` (just past the opening `__`).
///
/// Returns the name and the number of bytes consumed including the closing
/// `__`.
fn sentinel_name(rest: &str) -> Option<(&str, usize)> {
    let bytes = rest.as_bytes();
    if !bytes.first().is_some_and(u8::is_ascii_uppercase) {
        return None;
    }
    let len = bytes
        .iter()
        .take_while(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        .count();
    if rest[len..].starts_with("__") {
        Some((&rest[..len], len + 2))
    } else {
        None
    }
}

fn decode_body(ctx: EscapeContext, token: &str, out: &mut String) {
    let mut i = 0;
    while i < token.len() {
        let rest = &token[i..];
        if let Some(after) = rest.strip_prefix("__") {
            if let Some((name, consumed)) = sentinel_name(after) {
                if let Some(c) = char_for(ctx, name) {
                    out.push(c);
                    i += 2 + consumed;
                    continue;
                }
            }
        }

        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        i += c.len_utf8();
    }
}

// ==================== MaterialValue field class ====================

/// Whether a (decoded) key belongs to the material-value field class.
pub fn is_material_key(key: &str) -> bool {
    key.contains(MATERIAL_MARKER)
}

/// Encode a material value, dropping its `'"…"'` quoting.
///
/// Values that are not quoted that way are kept verbatim behind a marker so
/// the reverse pass reproduces them exactly.
pub fn encode_material_value(raw: &str) -> String {
    match strip_material_quotes(raw) {
        Some(inner) => encode(EscapeContext::AttributeValue, inner),
        None => {
            let mut out = String::from(VERBATIM);
            out.push_str(&encode(EscapeContext::AttributeValue, raw));
            out
        }
    }
}

/// Reverse of [`encode_material_value`]; re-adds the `'"…"'` quoting.
pub fn decode_material_value(token: &str) -> String {
    if let Some(rest) = token.strip_prefix(VERBATIM) {
        return decode(EscapeContext::AttributeValue, rest);
    }
    format!("'\"{}\"'", decode(EscapeContext::AttributeValue, token))
}

fn strip_material_quotes(raw: &str) -> Option<&str> {
    if raw.len() < 4 {
        return None;
    }
    raw.strip_prefix("'\"")?.strip_suffix("\"'")
}

/// Encode a scalar value, honouring the material-value class of `key`.
pub fn encode_value_for(key: &str, raw: &str) -> String {
    if is_material_key(key) {
        encode_material_value(raw)
    } else {
        encode(EscapeContext::AttributeValue, raw)
    }
}

/// Decode a scalar value, honouring the material-value class of `key`.
pub fn decode_value_for(key: &str, token: &str) -> String {
    if is_material_key(key) {
        decode_material_value(token)
    } else {
        decode(EscapeContext::AttributeValue, token)
    }
}
