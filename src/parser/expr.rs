//! Expression rules

use crate::ast::{Expr, NumericLiteralExpr};
use crate::parser::diagnostics::ParserErrorKind;
use crate::parser::Parser;
use crate::token::TokenKind;

impl Parser<'_> {
    /// Parses an expression, dispatching on the current token.
    pub fn parse_expr(&mut self) -> Option<Expr> {
        match self.token.kind() {
            TokenKind::NumericLiteral => {
                Some(Expr::NumericLiteral(self.parse_numeric_literal_expr()?))
            }
            _ => {
                self.error_expected(ParserErrorKind::ExpectedExpression);
                None
            }
        }
    }

    /// Parses a numeric literal. The token is a maximal run of ASCII digits,
    /// so the conversion only fails on overflow.
    pub fn parse_numeric_literal_expr(&mut self) -> Option<NumericLiteralExpr> {
        let token = self.expect(
            TokenKind::NumericLiteral,
            ParserErrorKind::ExpectedIntegerLiteral,
        )?;

        // TODO: diagnose literals that overflow i64 instead of saturating.
        let value = token.value(self.src).parse::<i64>().unwrap_or(i64::MAX);

        Some(NumericLiteralExpr {
            value,
            range: token.range(),
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::ast::{Decl, Expr, Stmt};
    use crate::parser::tests::parse_source;

    fn returned_value(src: &str) -> i64 {
        let (source_file, diagnostics) = parse_source(src);
        assert!(!diagnostics.has_problems());

        let Decl::Func(func_decl) = &source_file.decls[0];
        match &func_decl.body.stmts[0] {
            Stmt::Return(return_stmt) => match &return_stmt.expr {
                Expr::NumericLiteral(literal) => literal.value,
            },
            other => panic!("expected return, got {:?}", other),
        }
    }

    #[test]
    fn test_numeric_literal_value() {
        assert_eq!(returned_value("func f() -> int { return 0; }"), 0);
        assert_eq!(returned_value("func f() -> int { return 1234; }"), 1234);
    }

    #[test]
    fn test_overflowing_literal_saturates() {
        let src = "func f() -> int { return 99999999999999999999; }";
        assert_eq!(returned_value(src), i64::MAX);
    }

    #[test]
    fn test_missing_expression_is_one_diagnostic() {
        let (_, diagnostics) = parse_source("func f() -> int { return ; }");

        assert_eq!(diagnostics.count(), 1);
        assert_eq!(
            diagnostics.get(0).unwrap().message(),
            "error @ 1:26: expected expression, found ';'"
        );
    }
}
