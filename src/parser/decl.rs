//! Declaration rules
//!
//! `Decl := FuncDecl` is the only production today; the dispatch in
//! [`Parser::parse_decl`] is where further declaration kinds would branch.

use crate::ast::{Decl, FuncDecl, ParameterList, Signature, Type};
use crate::parser::diagnostics::ParserErrorKind;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses a top-level declaration, dispatching on the current token.
    pub fn parse_decl(&mut self) -> Option<Decl> {
        match self.token.kind() {
            TokenKind::KeywordFunc => Some(Decl::Func(self.parse_func_decl()?)),
            _ => {
                self.error_expected(ParserErrorKind::ExpectedDeclaration);
                None
            }
        }
    }

    /// Parses `'func' Signature Block`.
    pub fn parse_func_decl(&mut self) -> Option<FuncDecl> {
        let signature = self.parse_signature()?;
        let body = self.parse_block()?;

        let range = signature.range.start().to(body.range.end());
        Some(FuncDecl {
            signature,
            body,
            range,
        })
    }

    /// Parses `'func' Identifier ParameterList ReturnType`. The `func`
    /// keyword is consumed here so the signature's range covers it.
    pub fn parse_signature(&mut self) -> Option<Signature> {
        let keyword = self.expect(TokenKind::KeywordFunc, ParserErrorKind::ExpectedKeywordFunc)?;
        let name = self.parse_identifier()?;
        let parameters = self.parse_parameter_list()?;
        let return_type = self.parse_return_type()?;

        let range = keyword.range().start().to(return_type.range.end());
        Some(Signature {
            name,
            parameters,
            return_type,
            range,
        })
    }

    /// Parses `'(' ')'`. The grammar accepts no parameters yet, so the list
    /// is always empty; the node still records the parenthesized range.
    pub fn parse_parameter_list(&mut self) -> Option<ParameterList> {
        let left = self.expect(
            TokenKind::LeftParen,
            ParserErrorKind::ExpectedLeftParenParameterList,
        )?;
        let right = self.expect(
            TokenKind::RightParen,
            ParserErrorKind::ExpectedRightParenParameterList,
        )?;

        Some(ParameterList {
            parameters: Vec::new(),
            range: left.range().start().to(right.range().end()),
        })
    }

    /// Parses `'->' Type`.
    pub fn parse_return_type(&mut self) -> Option<Type> {
        self.expect(TokenKind::Arrow, ParserErrorKind::ExpectedArrow)?;
        self.parse_type()
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::tests::parse_source;

    #[test]
    fn test_missing_identifier_is_one_diagnostic() {
        let (source_file, diagnostics) = parse_source("func () -> int {}");

        assert!(source_file.decls.is_empty());
        assert_eq!(diagnostics.count(), 1);
        assert_eq!(
            diagnostics.get(0).unwrap().message(),
            "error @ 1:6: expected identifier, found '('"
        );
    }

    #[test]
    fn test_missing_arrow_is_one_diagnostic() {
        let (source_file, diagnostics) = parse_source("func f() int {}");

        assert!(source_file.decls.is_empty());
        assert_eq!(diagnostics.count(), 1);
        assert_eq!(
            diagnostics.get(0).unwrap().message(),
            "error @ 1:10: expected '->', found 'int'"
        );
    }

    #[test]
    fn test_missing_parameter_list_parens() {
        let (_, diagnostics) = parse_source("func f -> int {}");
        assert_eq!(diagnostics.count(), 1);
        assert!(diagnostics
            .get(0)
            .unwrap()
            .message()
            .contains("expected '(' to begin parameter list"));

        let (_, diagnostics) = parse_source("func f( -> int {}");
        assert_eq!(diagnostics.count(), 1);
        assert!(diagnostics
            .get(0)
            .unwrap()
            .message()
            .contains("expected ')' to end parameter list"));
    }

    #[test]
    fn test_signature_failure_does_not_cascade() {
        // The broken signature produces exactly one diagnostic, then
        // recovery resumes at the next 'func'.
        let (source_file, diagnostics) = parse_source("func () -> int {}\nfunc ok() -> int {}");

        assert_eq!(source_file.decls.len(), 1);
        assert_eq!(diagnostics.count(), 1);
    }

    #[test]
    fn test_missing_return_type_name() {
        let (_, diagnostics) = parse_source("func f() -> {}");

        assert_eq!(diagnostics.count(), 1);
        assert_eq!(
            diagnostics.get(0).unwrap().message(),
            "error @ 1:13: expected type, found '{'"
        );
    }
}
