//! Lexer for Brook source text
//!
//! Converts an in-memory source buffer into a [`TokenBuffer`] with a
//! maximal-munch scan. Tokenization is total: every input produces a
//! complete buffer whose last token is EOF. An unrecognised character is
//! reported into the injected [`DiagnosticEngine`] and skipped, so lexing
//! never stops early and error tokens never reach the parser.

pub mod diagnostics;

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use crate::basic::SourceLocation;
use crate::diagnostics::engine::DiagnosticEngine;
use crate::token::buffer::TokenBuffer;
use crate::token::{Token, TokenKind};

static KEYWORDS: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
static TYPES: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();

/// The reserved words of the language. Fixed before the first lex and never
/// mutated.
fn keywords() -> &'static FxHashMap<&'static str, TokenKind> {
    KEYWORDS.get_or_init(|| {
        FxHashMap::from_iter([
            ("func", TokenKind::KeywordFunc),
            ("return", TokenKind::KeywordReturn),
        ])
    })
}

/// The built-in type names of the language.
fn types() -> &'static FxHashMap<&'static str, TokenKind> {
    TYPES.get_or_init(|| FxHashMap::from_iter([("int", TokenKind::Type)]))
}

/// Lexer for Brook source text. The source buffer must outlive the lexer
/// and the token buffer it produces, since tokens derive their spelling
/// from it.
pub struct Lexer<'src> {
    src: &'src str,
    chars: Vec<(usize, char)>,
    position: usize,
    line: u32,
    column: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenizes the entire input. The returned buffer always ends with an
    /// EOF token; lexical errors are reported into `diagnostics` and their
    /// tokens are filtered out of the buffer.
    pub fn tokenize(mut self, diagnostics: &mut DiagnosticEngine) -> TokenBuffer {
        let mut buffer = TokenBuffer::new();

        loop {
            self.skip_whitespace();

            let start = self.current_location();
            let kind = match self.advance() {
                None => {
                    buffer.push(Token::new(TokenKind::Eof, start.to(start), 0));
                    break;
                }
                Some(c) if is_identifier_start(c) => self.identifier_or_keyword(start),
                Some(c) if c.is_ascii_digit() => self.numeric_literal(),
                Some('{') => TokenKind::LeftBrace,
                Some('}') => TokenKind::RightBrace,
                Some('(') => TokenKind::LeftParen,
                Some(')') => TokenKind::RightParen,
                Some(';') => TokenKind::Semicolon,
                Some('-') if self.peek() == Some('>') => {
                    self.advance();
                    TokenKind::Arrow
                }
                // A lone '-' falls through here: there are no operators in
                // the language, so it is an unrecognised character like any
                // other.
                Some(_) => TokenKind::Error,
            };

            let end = self.current_location();
            let length = (end.offset() - start.offset()) as u32;
            let token = Token::new(kind, start.to(end), length);

            if kind == TokenKind::Error {
                diagnostics.diagnose(diagnostics::unrecognised_token(&token, self.src));
            } else {
                buffer.push(token);
            }
        }

        buffer
    }

    /// Scans the remainder of an identifier whose first character has been
    /// consumed, then re-tags it as a keyword or type name on an exact
    /// match.
    fn identifier_or_keyword(&mut self, start: SourceLocation) -> TokenKind {
        while matches!(self.peek(), Some(c) if is_identifier_char(c)) {
            self.advance();
        }

        let text = &self.src[start.offset()..self.current_offset()];
        keywords()
            .get(text)
            .or_else(|| types().get(text))
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Scans the maximal run of ASCII digits; no sign, no floating point.
    fn numeric_literal(&mut self) -> TokenKind {
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }

        TokenKind::NumericLiteral
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).map(|&(_, c)| c)
    }

    fn advance(&mut self) -> Option<char> {
        let &(_, c) = self.chars.get(self.position)?;
        self.position += 1;

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// The byte offset of the next unconsumed character, or the buffer
    /// length at the end of input.
    fn current_offset(&self) -> usize {
        self.chars
            .get(self.position)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.src.len())
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.current_offset())
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}
