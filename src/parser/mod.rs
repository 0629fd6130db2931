//! Recursive-descent parser for Brook
//!
//! One method per grammar rule, a single forward pass over a
//! [`TokenCursor`], one token of lookahead:
//!
//! ```text
//! SourceFile    := Decl* EOF
//! Decl          := FuncDecl
//! FuncDecl      := 'func' Signature Block
//! Signature     := Identifier ParameterList ReturnType
//! ParameterList := '(' ')'
//! ReturnType    := '->' Type
//! Block         := '{' Stmt* '}'
//! Stmt          := Block | ReturnStmt
//! ReturnStmt    := 'return' Expr ';'
//! Expr          := NUMERIC_LITERAL
//! Type          := 'int'
//! ```
//!
//! Each production either returns its node with the parser positioned just
//! past the construct, or diagnoses exactly one error naming the expected
//! construct and returns `None`. A `None` child is already diagnosed, so
//! callers recover by skipping to the nearest synchronizing token instead
//! of re-reporting it.
//!
//! The rule methods are split across `impl Parser` blocks:
//! - this module: parser state, helpers, and `SourceFile`/leaf rules
//! - [`decl`]: declarations and signatures
//! - [`stmt`]: blocks and return statements
//! - [`expr`]: expressions

pub mod decl;
pub mod diagnostics;
pub mod expr;
pub mod stmt;

use crate::ast::{Identifier, SourceFile, Type};
use crate::diagnostics::engine::DiagnosticEngine;
use crate::diagnostics::{Diagnostic, Error, ErrorKind};
use crate::parser::diagnostics::ParserErrorKind;
use crate::token::buffer::TokenBuffer;
use crate::token::cursor::TokenCursor;
use crate::token::{Token, TokenKind};

/// Tokens that end panic-mode recovery at declaration level.
const DECL_SYNCHRONIZING_TOKENS: &[TokenKind] = &[TokenKind::KeywordFunc];

/// Tokens that end panic-mode recovery at statement level.
const STMT_SYNCHRONIZING_TOKENS: &[TokenKind] = &[TokenKind::RightBrace, TokenKind::KeywordReturn];

/// Recursive-descent parser over a lexed token buffer.
///
/// Borrows the source text (for token spellings), the token buffer, and the
/// file's diagnostic engine for the duration of one parse.
pub struct Parser<'a> {
    src: &'a str,
    cursor: TokenCursor<'a>,
    token: Token,
    diagnostics: &'a mut DiagnosticEngine,
}

impl<'a> Parser<'a> {
    pub fn new(
        src: &'a str,
        tokens: &'a TokenBuffer,
        diagnostics: &'a mut DiagnosticEngine,
    ) -> Self {
        let mut parser = Self {
            src,
            cursor: TokenCursor::new(tokens),
            token: Token::dummy(),
            diagnostics,
        };

        parser.advance();
        parser
    }

    /// Parses the whole file. Always returns a `SourceFile`: a malformed
    /// declaration is diagnosed and skipped to the next `func` keyword, and
    /// the remaining well-formed declarations are still collected.
    pub fn parse_source_file(&mut self) -> SourceFile {
        let start = self.token.range().start();
        let mut decls = Vec::new();

        while !self.check(TokenKind::Eof) {
            match self.parse_decl() {
                Some(decl) => decls.push(decl),
                None => self.synchronize(DECL_SYNCHRONIZING_TOKENS),
            }
        }

        SourceFile {
            decls,
            range: start.to(self.token.range().end()),
        }
    }

    /// Parses an identifier leaf.
    pub fn parse_identifier(&mut self) -> Option<Identifier> {
        if !self.check(TokenKind::Identifier) {
            self.error_expected(ParserErrorKind::ExpectedIdentifier);
            return None;
        }

        let identifier = Identifier {
            name: self.token.value(self.src).to_string(),
            range: self.token.range(),
        };
        self.advance();

        Some(identifier)
    }

    /// Parses a type leaf.
    pub fn parse_type(&mut self) -> Option<Type> {
        if !self.check(TokenKind::Type) {
            self.error_expected(ParserErrorKind::ExpectedType);
            return None;
        }

        let ty = Type {
            name: self.token.value(self.src).to_string(),
            range: self.token.range(),
        };
        self.advance();

        Some(ty)
    }

    // ===== Helper methods =====

    pub(crate) fn advance(&mut self) {
        self.token = self.cursor.next().unwrap_or_else(Token::dummy);
    }

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.token.kind() == kind
    }

    /// Consumes the current token if it has the expected kind; otherwise
    /// diagnoses `error` against it and leaves it in place.
    pub(crate) fn expect(&mut self, kind: TokenKind, error: ParserErrorKind) -> Option<Token> {
        if !self.check(kind) {
            self.error_expected(error);
            return None;
        }

        let token = self.token;
        self.advance();
        Some(token)
    }

    /// Reports a parser error of `kind` against the current token.
    pub(crate) fn error_expected(&mut self, kind: ParserErrorKind) {
        let error = Error::new(
            ErrorKind::Parser(kind),
            self.token.range().start(),
            self.token.value(self.src),
        );
        self.diagnostics.diagnose(Diagnostic::Error(error));
    }

    /// Panic-mode recovery: discards tokens until the current token is one
    /// of the synchronizing kinds, or EOF.
    pub(crate) fn synchronize(&mut self, synchronizing_tokens: &[TokenKind]) {
        while !self.check(TokenKind::Eof) {
            if synchronizing_tokens.contains(&self.token.kind()) {
                return;
            }

            self.advance();
        }
    }
}
