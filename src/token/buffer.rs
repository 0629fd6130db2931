//! Append-only token storage
//!
//! The lexer pushes tokens into a [`TokenBuffer`] exactly once per compiled
//! file; afterwards the buffer is only ever read, through indexed access or
//! a [`cursor::TokenCursor`](super::cursor::TokenCursor).

use crate::token::Token;

/// An ordered, append-only sequence of tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenBuffer {
    tokens: Vec<Token>,
}

impl TokenBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a token to the end of the buffer.
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// The token at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<Token> {
        self.tokens.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    #[test]
    fn test_push_and_get() {
        let mut buffer = TokenBuffer::new();
        assert!(buffer.is_empty());

        buffer.push(Token::dummy());
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.get(0).map(|t| t.kind()), Some(TokenKind::Eof));
    }

    #[test]
    fn test_get_past_end_is_none() {
        let mut buffer = TokenBuffer::new();
        buffer.push(Token::dummy());

        assert!(buffer.get(1).is_none());
        assert!(buffer.get(100).is_none());
    }
}
