//! Parser diagnostics
//!
//! One kind per expected grammar token or construct, so a test (or a user)
//! can tell exactly which production rejected the input.

/// The kinds of error the parser diagnoses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErrorKind {
    // Reserved tokens
    ExpectedKeywordFunc,
    ExpectedKeywordReturn,
    ExpectedType,

    // Literal tokens
    ExpectedIdentifier,
    ExpectedIntegerLiteral,

    // Symbol tokens
    ExpectedArrow,
    ExpectedLeftBraceBlock,
    ExpectedLeftParenParameterList,
    ExpectedRightBraceBlock,
    ExpectedRightParenParameterList,
    ExpectedSemicolon,

    // AST constructs
    ExpectedDeclaration,
    ExpectedExpression,
    ExpectedStatement,
}

impl ParserErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            ParserErrorKind::ExpectedKeywordFunc => "expected keyword 'func'",
            ParserErrorKind::ExpectedKeywordReturn => "expected keyword 'return'",
            ParserErrorKind::ExpectedType => "expected type",
            ParserErrorKind::ExpectedIdentifier => "expected identifier",
            ParserErrorKind::ExpectedIntegerLiteral => "expected integer literal",
            ParserErrorKind::ExpectedArrow => "expected '->'",
            ParserErrorKind::ExpectedLeftBraceBlock => "expected '{' to begin block",
            ParserErrorKind::ExpectedLeftParenParameterList => {
                "expected '(' to begin parameter list"
            }
            ParserErrorKind::ExpectedRightBraceBlock => "expected '}' to end block",
            ParserErrorKind::ExpectedRightParenParameterList => {
                "expected ')' to end parameter list"
            }
            ParserErrorKind::ExpectedSemicolon => "expected ';'",
            ParserErrorKind::ExpectedDeclaration => "expected declaration",
            ParserErrorKind::ExpectedExpression => "expected expression",
            ParserErrorKind::ExpectedStatement => "expected statement",
        }
    }
}
