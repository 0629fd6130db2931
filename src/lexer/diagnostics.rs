//! Lexer diagnostics

use crate::diagnostics::{Diagnostic, Error, ErrorKind};
use crate::token::Token;

/// The kinds of error the lexer diagnoses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexerErrorKind {
    UnrecognisedToken,
}

impl LexerErrorKind {
    pub fn description(self) -> &'static str {
        match self {
            LexerErrorKind::UnrecognisedToken => "unrecognised token",
        }
    }
}

/// A diagnostic for a character the lexer does not recognise, reported
/// against exactly that character's location.
pub(crate) fn unrecognised_token(token: &Token, src: &str) -> Diagnostic {
    Diagnostic::Error(Error::new(
        ErrorKind::Lexer(LexerErrorKind::UnrecognisedToken),
        token.range().start(),
        token.value(src),
    ))
}
