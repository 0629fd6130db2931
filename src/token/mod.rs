//! Lexical tokens
//!
//! A [`Token`] is a kind, a source range, and a length. The textual value is
//! derived lazily from the range against the source buffer rather than being
//! stored in the token, so the buffer of a whole file stays small and the
//! source text remains the single copy of every spelling.
//!
//! - [`buffer::TokenBuffer`]: append-only storage, produced once by the
//!   lexer and then read-only.
//! - [`cursor::TokenCursor`]: forward-only read cursor with bounded
//!   lookahead, borrowed by the parser for one parse.

pub mod buffer;
pub mod cursor;

use crate::basic::SourceRange;

/// All token kinds of the Brook language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    KeywordFunc,
    KeywordReturn,
    /// A type name, e.g. `int`.
    Type,

    // Literals
    Identifier,
    NumericLiteral,

    // One-character tokens
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    Semicolon,

    // Two-character tokens
    Arrow,

    // Miscellaneous
    Eof,
    /// An unrecognised character. Diagnosed by the lexer and filtered out of
    /// the token buffer before it reaches the parser.
    Error,
}

/// A lexical unit of Brook source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    range: SourceRange,
    length: u32,
}

impl Token {
    pub fn new(kind: TokenKind, range: SourceRange, length: u32) -> Self {
        Self {
            kind,
            range,
            length,
        }
    }

    /// An EOF token with an invalid range, used where the parser needs a
    /// token before it has read one.
    pub fn dummy() -> Self {
        Self::new(TokenKind::Eof, SourceRange::default(), 0)
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn range(&self) -> SourceRange {
        self.range
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    /// The spelling of this token, sliced out of the source buffer it was
    /// lexed from. Dummy and EOF tokens have an empty spelling.
    pub fn value<'src>(&self, src: &'src str) -> &'src str {
        if !self.range.start().is_valid() {
            return "";
        }

        let start = self.range.start().offset();
        &src[start..start + self.length as usize]
    }
}
