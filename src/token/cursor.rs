//! Forward-only token cursor
//!
//! A [`TokenCursor`] borrows a [`TokenBuffer`] for the lifetime of one parse
//! and hands out tokens strictly front to back. Reads past the end return
//! `None` rather than failing, so the parser never has to special-case the
//! final token.

use crate::token::buffer::TokenBuffer;
use crate::token::Token;

/// A forward-only read cursor over a [`TokenBuffer`].
#[derive(Debug)]
pub struct TokenCursor<'buf> {
    buffer: &'buf TokenBuffer,
    consumed: usize,
}

impl<'buf> TokenCursor<'buf> {
    pub fn new(buffer: &'buf TokenBuffer) -> Self {
        Self {
            buffer,
            consumed: 0,
        }
    }

    /// Consumes and returns the next token, or `None` past the end.
    pub fn next(&mut self) -> Option<Token> {
        let token = self.buffer.get(self.consumed);
        if token.is_some() {
            self.consumed += 1;
        }

        token
    }

    /// Peeks `n` tokens ahead without consuming anything; `peek_ahead(1)` is
    /// the token the next call to [`next`](Self::next) would return.
    pub fn peek_ahead(&self, n: usize) -> Option<Token> {
        self.buffer.get(self.consumed + n - 1)
    }

    /// The number of tokens consumed so far.
    pub fn index(&self) -> usize {
        self.consumed
    }
}
