// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! PHP language adapter.
//!
//! Provides PHP-specific behavior for scanning:
//! - String literal discovery and decoding
//! - Call-site detection for `preg_*` pattern arguments
//! - Fully-qualified function name resolution
//!
//! The call-site rules only look at the literal's neighbouring tokens and
//! the brackets around it. A literal counts as an argument only when it is
//! the whole argument expression, so `'/a/' . $suffix` is not a site.

use std::ops::Range;

use memchr::memmem;

pub mod lexer;
pub mod literal;

use lexer::{Token, TokenKind, tokenize};

use super::{Adapter, HostLiteral};
use crate::classify::CallSite;

/// Default file extensions handled as PHP.
pub const DEFAULT_EXTENSIONS: &[&str] = &["php", "phtml", "inc"];

/// Names followed by `(` that are language constructs, not function calls.
const CONSTRUCTS: &[&str] = &[
    "and",
    "array",
    "catch",
    "clone",
    "declare",
    "die",
    "echo",
    "elseif",
    "empty",
    "eval",
    "exit",
    "fn",
    "for",
    "foreach",
    "function",
    "if",
    "include",
    "include_once",
    "instanceof",
    "isset",
    "list",
    "match",
    "new",
    "or",
    "print",
    "require",
    "require_once",
    "return",
    "switch",
    "unset",
    "use",
    "while",
    "xor",
];

/// PHP language adapter.
pub struct PhpAdapter {
    extensions: Vec<String>,
}

impl PhpAdapter {
    /// Create a PHP adapter with the default extensions.
    pub fn new() -> Self {
        Self::with_extensions(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect())
    }

    /// Create a PHP adapter for the given extensions (without leading dots).
    pub fn with_extensions(extensions: Vec<String>) -> Self {
        Self { extensions }
    }
}

impl Default for PhpAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl Adapter for PhpAdapter {
    fn name(&self) -> &'static str {
        "php"
    }

    fn extensions(&self) -> &[String] {
        &self.extensions
    }

    fn may_contain_calls(&self, content: &str) -> bool {
        memmem::find(content.as_bytes(), b"preg_").is_some()
    }

    fn literals(&self, content: &str) -> Vec<HostLiteral> {
        let tokens = tokenize(content);
        let brackets = Brackets::new(content, &tokens);
        let mut namespace = String::new();
        let mut literals = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            if let Some(ns) = namespace_declaration(content, &tokens, i) {
                namespace = ns;
                continue;
            }

            let decoded = match token.kind {
                TokenKind::SingleQuoted => {
                    literal::decode_single_quoted(content, contents(&token.span))
                }
                TokenKind::DoubleQuoted => {
                    literal::decode_double_quoted(content, contents(&token.span))
                }
                _ => continue,
            };

            let sites = SiteFinder {
                src: content,
                tokens: &tokens,
                brackets: &brackets,
                namespace: &namespace,
            };

            literals.push(HostLiteral {
                span: contents(&token.span),
                value: decoded.value,
                offsets: decoded.offsets,
                site: sites.call_site(i),
                interpolated: decoded.interpolated,
            });
        }

        literals
    }
}

/// Range between the quotes of a string token.
fn contents(span: &Range<usize>) -> Range<usize> {
    span.start + 1..span.end - 1
}

/// If token `i` starts a `namespace` declaration, return the declared name.
///
/// `namespace {` declares the global namespace, returned as an empty name.
fn namespace_declaration(src: &str, tokens: &[Token], i: usize) -> Option<String> {
    if !tokens[i].is_keyword(src, "namespace") {
        return None;
    }
    let next = tokens.get(i + 1)?;
    if next.is_punct(src, "{") {
        return Some(String::new());
    }
    let after = tokens.get(i + 2)?;
    if next.kind == TokenKind::Name && (after.is_punct(src, ";") || after.is_punct(src, "{")) {
        return Some(next.text(src).trim_start_matches('\\').to_string());
    }
    None
}

/// Resolve a called function name to its fully-qualified form.
///
/// Unqualified names resolve to the global namespace, which is where PHP
/// falls back to for functions.
pub fn resolve_function_name(name: &str, namespace: &str) -> String {
    if name.starts_with('\\') {
        return name.to_string();
    }
    let relative = name
        .get(..10)
        .filter(|p| p.eq_ignore_ascii_case("namespace\\"))
        .map(|_| &name[10..]);
    let qualified = relative.is_some() || name.contains('\\');
    let local = relative.unwrap_or(name);

    if qualified && !namespace.is_empty() {
        format!("\\{namespace}\\{local}")
    } else {
        format!("\\{local}")
    }
}

/// Bracket matching over the token stream.
struct Brackets {
    /// Index of the matching bracket for every bracket token.
    matching: Vec<Option<usize>>,
    /// Index of the innermost open bracket around every token.
    enclosing: Vec<Option<usize>>,
}

impl Brackets {
    fn new(src: &str, tokens: &[Token]) -> Self {
        let mut matching = vec![None; tokens.len()];
        let mut enclosing = vec![None; tokens.len()];
        let mut stack: Vec<usize> = Vec::new();

        for (i, token) in tokens.iter().enumerate() {
            enclosing[i] = stack.last().copied();
            if token.kind != TokenKind::Punct {
                continue;
            }
            match token.text(src) {
                "(" | "[" | "{" | "#[" => stack.push(i),
                closer @ (")" | "]" | "}") => {
                    let Some(&open) = stack.last() else {
                        continue;
                    };
                    let opener = tokens[open].text(src);
                    let pairs = matches!(
                        (opener, closer),
                        ("(", ")") | ("[", "]") | ("#[", "]") | ("{", "}")
                    );
                    if pairs {
                        stack.pop();
                        matching[open] = Some(i);
                        matching[i] = Some(open);
                    }
                }
                _ => {}
            }
        }

        Self {
            matching,
            enclosing,
        }
    }
}

/// Call-site detection for one file.
struct SiteFinder<'a> {
    src: &'a str,
    tokens: &'a [Token],
    brackets: &'a Brackets,
    namespace: &'a str,
}

impl SiteFinder<'_> {
    fn punct_at(&self, i: usize, p: &str) -> bool {
        self.tokens.get(i).is_some_and(|t| t.is_punct(self.src, p))
    }

    /// The literal at `i` is followed by the end of an argument or element.
    fn ends_element(&self, i: usize, closer: &str) -> bool {
        self.punct_at(i + 1, ",") || self.punct_at(i + 1, closer)
    }

    fn call_site(&self, i: usize) -> CallSite {
        if let Some(paren) = i.checked_sub(1)
            && self.punct_at(paren, "(")
            && self.ends_element(i, ")")
            && let Some(function) = self.called_function(paren)
        {
            return CallSite::Argument { function };
        }

        if let Some(function) = self.array_call(i) {
            return CallSite::ArrayElement { function };
        }

        CallSite::Other
    }

    /// Function called by the `(` at `paren`, if it is a call paren.
    fn called_function(&self, paren: usize) -> Option<String> {
        let name = self.tokens.get(paren.checked_sub(1)?)?;
        if name.kind != TokenKind::Name {
            return None;
        }
        let text = name.text(self.src);
        if CONSTRUCTS.iter().any(|c| c.eq_ignore_ascii_case(text)) {
            return None;
        }

        if let Some(before) = paren.checked_sub(2).and_then(|b| self.tokens.get(b)) {
            let member = ["->", "?->", "::"].iter().any(|p| before.is_punct(self.src, p));
            let declaration = ["function", "fn", "new"]
                .iter()
                .any(|k| before.is_keyword(self.src, k));
            if member || declaration {
                return None;
            }
        }

        Some(resolve_function_name(text, self.namespace))
    }

    /// Function receiving the array whose value element is the literal at `i`.
    fn array_call(&self, i: usize) -> Option<String> {
        let open = self.brackets.enclosing[i]?;
        let close = self.brackets.matching[open]?;

        let (array_start, closer) = if self.punct_at(open, "[") {
            (open, "]")
        } else if self.punct_at(open, "(")
            && open
                .checked_sub(1)
                .is_some_and(|n| self.tokens[n].is_keyword(self.src, "array"))
        {
            (open - 1, ")")
        } else {
            return None;
        };

        let prev = i.checked_sub(1)?;
        let value_position =
            prev == open || self.punct_at(prev, ",") || self.punct_at(prev, "=>");
        if !value_position || !self.ends_element(i, closer) {
            return None;
        }

        let paren = array_start.checked_sub(1)?;
        if !self.punct_at(paren, "(") || !self.ends_element(close, ")") {
            return None;
        }
        self.called_function(paren)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
