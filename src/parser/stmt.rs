//! Statement rules
//!
//! Blocks own statement-level recovery: a malformed statement inside a
//! block is diagnosed once, then the parser skips to the next `return`
//! keyword or closing brace and keeps collecting statements, so one bad
//! statement does not discard its siblings.

use crate::ast::{Block, ReturnStmt, Stmt};
use crate::parser::diagnostics::ParserErrorKind;
use crate::parser::{Parser, STMT_SYNCHRONIZING_TOKENS};
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses a statement, dispatching on the current token.
    pub fn parse_stmt(&mut self) -> Option<Stmt> {
        match self.token.kind() {
            TokenKind::LeftBrace => Some(Stmt::Block(self.parse_block()?)),
            TokenKind::KeywordReturn => Some(Stmt::Return(self.parse_return_stmt()?)),
            _ => {
                self.error_expected(ParserErrorKind::ExpectedStatement);
                None
            }
        }
    }

    /// Parses `'{' Stmt* '}'`.
    pub fn parse_block(&mut self) -> Option<Block> {
        let left = self.expect(
            TokenKind::LeftBrace,
            ParserErrorKind::ExpectedLeftBraceBlock,
        )?;

        let mut stmts = Vec::new();
        while !self.check(TokenKind::RightBrace) && !self.check(TokenKind::Eof) {
            match self.parse_stmt() {
                Some(stmt) => stmts.push(stmt),
                None => self.synchronize(STMT_SYNCHRONIZING_TOKENS),
            }
        }

        let right = self.expect(
            TokenKind::RightBrace,
            ParserErrorKind::ExpectedRightBraceBlock,
        )?;

        Some(Block {
            stmts,
            range: left.range().start().to(right.range().end()),
        })
    }

    /// Parses `'return' Expr ';'`.
    pub fn parse_return_stmt(&mut self) -> Option<ReturnStmt> {
        let keyword = self.expect(
            TokenKind::KeywordReturn,
            ParserErrorKind::ExpectedKeywordReturn,
        )?;
        let expr = self.parse_expr()?;
        let semicolon = self.expect(TokenKind::Semicolon, ParserErrorKind::ExpectedSemicolon)?;

        Some(ReturnStmt {
            expr,
            range: keyword.range().start().to(semicolon.range().end()),
        })
    }
}
