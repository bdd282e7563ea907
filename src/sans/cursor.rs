//! Sequential, exactly-once access to a list of tokens.

use thiserror::Error;

/// The cursor was asked for a token past the end of its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unexpectedly reached the end of the tokens after {position} tokens.")]
pub struct ExhaustedInputError {
    /// Number of tokens available (and consumed) when the request was made.
    pub position: usize,
}

/// A position in a list of tokens.
///
/// The position only ever moves forward, one token per call to
/// [`next`](Self::next). A cursor is not `Clone`: duplicating it would let two
/// decoders consume the same token.
#[derive(Debug)]
pub struct Cursor<'a> {
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the first of a list of tokens.
    pub fn new(tokens: &'a [&'a str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Take the token at the current position, advancing past it.
    pub fn next(&mut self) -> Result<&'a str, ExhaustedInputError> {
        let token = self.tokens.get(self.position).ok_or(ExhaustedInputError {
            position: self.position,
        })?;

        self.position += 1;

        Ok(*token)
    }

    /// Number of tokens consumed so far, which is also the index of the next
    /// token.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of tokens not yet consumed.
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.position
    }

    /// Whether every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }
}
