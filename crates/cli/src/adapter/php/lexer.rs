// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Minimal PHP tokenizer.
//!
//! Produces only the significant tokens needed to locate string literals and
//! the calls that receive them. Whitespace, comments and inline HTML are
//! dropped. Spans are byte offsets into the source.

use std::ops::Range;

/// Kind of a significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or namespaced name (`foo`, `\foo\bar`, `namespace\foo`).
    Name,
    /// `$name`.
    Variable,
    Number,
    /// `'...'`, span includes the quotes.
    SingleQuoted,
    /// `"..."`, span includes the quotes.
    DoubleQuoted,
    /// `` `...` `` shell execution string.
    Backtick,
    /// Heredoc or nowdoc, including the `<<<` header and closing marker.
    Heredoc,
    /// Operator or punctuation.
    Punct,
    /// `?>`, which also ends a statement.
    CloseTag,
}

/// A significant token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    pub fn text<'a>(&self, src: &'a str) -> &'a str {
        &src[self.span.clone()]
    }

    /// True if this is punctuation spelled exactly `p`.
    pub fn is_punct(&self, src: &str, p: &str) -> bool {
        self.kind == TokenKind::Punct && self.text(src) == p
    }

    /// True if this is a name equal to `keyword`, ignoring ASCII case.
    pub fn is_keyword(&self, src: &str, keyword: &str) -> bool {
        self.kind == TokenKind::Name && self.text(src).eq_ignore_ascii_case(keyword)
    }
}

/// Multi-byte punctuation, longest first.
const MULTI_PUNCT: &[&str] = &["?->", "->", "::", "=>", "#["];

/// Tokenize PHP source.
pub fn tokenize(src: &str) -> Vec<Token> {
    Lexer::new(src).run()
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token> {
        self.skip_inline_html();

        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            match b {
                b' ' | b'\t' | b'\n' | b'\r' | b'\x0B' | b'\x0C' => self.pos += 1,
                b'#' if self.peek(1) != Some(b'[') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'/') => self.skip_line_comment(),
                b'/' if self.peek(1) == Some(b'*') => self.skip_block_comment(),
                b'?' if self.peek(1) == Some(b'>') => {
                    self.push(TokenKind::CloseTag, self.pos, self.pos + 2);
                    self.pos += 2;
                    self.skip_inline_html();
                }
                b'\'' => {
                    if !self.quoted(TokenKind::SingleQuoted, b'\'') {
                        break;
                    }
                }
                b'"' => {
                    if !self.quoted(TokenKind::DoubleQuoted, b'"') {
                        break;
                    }
                }
                b'`' => {
                    if !self.quoted(TokenKind::Backtick, b'`') {
                        break;
                    }
                }
                b'<' if self.src[self.pos..].starts_with("<<<") => self.heredoc(),
                b'$' if self.peek(1).is_some_and(is_name_start) => {
                    let start = self.pos;
                    self.pos += 1;
                    self.eat_name_chars();
                    self.push(TokenKind::Variable, start, self.pos);
                }
                b'0'..=b'9' => {
                    let start = self.pos;
                    while self
                        .bytes
                        .get(self.pos)
                        .is_some_and(|&c| c.is_ascii_alphanumeric() || c == b'_' || c == b'.')
                    {
                        self.pos += 1;
                    }
                    self.push(TokenKind::Number, start, self.pos);
                }
                _ if is_name_start(b) || (b == b'\\' && self.peek(1).is_some_and(is_name_start)) => {
                    self.name();
                }
                _ => self.punct(),
            }
        }

        self.tokens
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.tokens.push(Token {
            kind,
            span: start..end,
        });
    }

    /// Move past inline HTML up to and including the next open tag.
    fn skip_inline_html(&mut self) {
        let rest = &self.src[self.pos..];
        match rest.find("<?") {
            Some(idx) => {
                self.pos += idx + 2;
                let after = &self.bytes[self.pos..];
                if after.len() >= 3 && after[..3].eq_ignore_ascii_case(b"php") {
                    self.pos += 3;
                } else if after.first() == Some(&b'=') {
                    self.pos += 1;
                }
            }
            None => self.pos = self.bytes.len(),
        }
    }

    /// Line comments end at a newline or just before `?>`.
    fn skip_line_comment(&mut self) {
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'\n' => return,
                b'?' if self.peek(1) == Some(b'>') => return,
                _ => self.pos += 1,
            }
        }
    }

    fn skip_block_comment(&mut self) {
        match self.src[self.pos + 2..].find("*/") {
            Some(idx) => self.pos += 2 + idx + 2,
            None => self.pos = self.bytes.len(),
        }
    }

    /// Lex a quoted string. Returns false if it runs off the end of the source.
    fn quoted(&mut self, kind: TokenKind, quote: u8) -> bool {
        let start = self.pos;
        self.pos += 1;

        while self.pos < self.bytes.len() {
            let b = self.bytes[self.pos];
            if b == b'\\' {
                self.pos += 2;
            } else if b == quote {
                self.pos += 1;
                self.push(kind, start, self.pos);
                return true;
            } else if quote != b'\'' && b == b'{' && self.peek(1) == Some(b'$') {
                self.skip_interpolation();
            } else {
                self.pos += 1;
            }
        }

        tracing::debug!("unterminated string literal at byte {}", start);
        self.pos = self.bytes.len();
        false
    }

    /// Skip a `{$...}` interpolation, which may contain nested strings.
    fn skip_interpolation(&mut self) {
        let mut depth = 0usize;
        while self.pos < self.bytes.len() {
            match self.bytes[self.pos] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.pos += 1;
                        return;
                    }
                }
                q @ (b'\'' | b'"') => {
                    self.pos += 1;
                    while self.pos < self.bytes.len() && self.bytes[self.pos] != q {
                        if self.bytes[self.pos] == b'\\' {
                            self.pos += 1;
                        }
                        self.pos += 1;
                    }
                }
                _ => {}
            }
            self.pos += 1;
        }
    }

    /// Lex a heredoc or nowdoc as one opaque token.
    fn heredoc(&mut self) {
        let start = self.pos;
        let mut p = self.pos + 3;
        while matches!(self.bytes.get(p), Some(b' ' | b'\t')) {
            p += 1;
        }
        let quote = match self.bytes.get(p) {
            Some(&q @ (b'\'' | b'"')) => {
                p += 1;
                Some(q)
            }
            _ => None,
        };
        let label_start = p;
        while self.bytes.get(p).is_some_and(|&c| is_name_char(c)) {
            p += 1;
        }
        let label = &self.src[label_start..p];
        if label.is_empty() || label.as_bytes()[0].is_ascii_digit() {
            self.punct();
            return;
        }
        if let Some(q) = quote {
            if self.bytes.get(p) != Some(&q) {
                self.punct();
                return;
            }
            p += 1;
        }

        // The closing marker starts a line, optionally indented, and is not
        // followed by another name character.
        let mut line_start = match self.src[p..].find('\n') {
            Some(idx) => p + idx + 1,
            None => self.bytes.len(),
        };
        while line_start < self.bytes.len() {
            let line = &self.src[line_start..];
            let trimmed = line.trim_start_matches([' ', '\t']);
            let marker = line_start + (line.len() - trimmed.len());
            if trimmed.starts_with(label)
                && !trimmed
                    .as_bytes()
                    .get(label.len())
                    .is_some_and(|&c| is_name_char(c))
            {
                self.pos = marker + label.len();
                self.push(TokenKind::Heredoc, start, self.pos);
                return;
            }
            line_start = match line.find('\n') {
                Some(idx) => line_start + idx + 1,
                None => self.bytes.len(),
            };
        }

        tracing::debug!("unterminated heredoc at byte {}", start);
        self.pos = self.bytes.len();
    }

    fn name(&mut self) {
        let start = self.pos;
        loop {
            if self.bytes.get(self.pos) == Some(&b'\\') {
                self.pos += 1;
            }
            self.eat_name_chars();
            let continues = self.bytes.get(self.pos) == Some(&b'\\')
                && self.peek(1).is_some_and(is_name_start);
            if !continues {
                break;
            }
        }

        // Binary string prefix: b'...' and b"..." are plain strings.
        let text = &self.src[start..self.pos];
        if text.eq_ignore_ascii_case("b") && matches!(self.peek(0), Some(b'\'' | b'"')) {
            return;
        }
        self.push(TokenKind::Name, start, self.pos);
    }

    fn eat_name_chars(&mut self) {
        while self.bytes.get(self.pos).is_some_and(|&c| is_name_char(c)) {
            self.pos += 1;
        }
    }

    fn punct(&mut self) {
        let start = self.pos;
        let rest = &self.src[start..];
        let len = MULTI_PUNCT
            .iter()
            .find(|p| rest.starts_with(**p))
            .map_or_else(|| rest.chars().next().map_or(1, char::len_utf8), |p| p.len());
        self.pos += len;
        self.push(TokenKind::Punct, start, self.pos);
    }
}

fn is_name_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_name_char(b: u8) -> bool {
    is_name_start(b) || b.is_ascii_digit()
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
