//! Token-level machinery for implementing decoders.
//!
//! This module is intended for applications that assemble decoders by hand.
//! See [`crate::avec`] for entry points and the derive macro covering common
//! decoding patterns.
//!
//! # Architecture
//!
//! Input is a flat list of string tokens, held by a [`Cursor`]. The cursor
//! hands out each token exactly once, in order, and never rewinds.
//!
//! A [`Decoder`] is a small strategy value that drains some number of tokens
//! from a cursor and assembles a value from them. Leaf decoders in the
//! [`primitive`] module consume exactly one token. The [`Seq`] decoder reads a
//! count token and then runs its element decoder that many times. Records are
//! decoded by calling the decoders of their fields one after another, all on
//! the same cursor; see [`crate::records`] for two hand-written examples.
//!
//! The cursor must always be passed down by mutable reference. Decoders never
//! look ahead and never backtrack, so the first failing sub-decoder aborts the
//! whole decode and its error is returned unchanged.
//!
//! Supporting a new type means writing a new decoder. The cursor and the
//! existing decoders stay untouched.

use alloc::string::String;

use thiserror::Error;

pub mod cursor;
pub mod primitive;
pub mod sequence;

pub use cursor::{Cursor, ExhaustedInputError};
pub use primitive::{Int, Str};
pub use sequence::Seq;

/// An error decoding a value from a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The cursor ran out of tokens.
    #[error(transparent)]
    Exhausted(#[from] ExhaustedInputError),
    /// A token did not have the expected form.
    #[error(transparent)]
    Format(#[from] FormatError),
}

/// A token that exists but cannot be read as the expected value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The token could not be parsed.
    #[error("Token {token:?} at position {position} is not a valid {expected}.")]
    Malformed {
        position: usize,
        token: String,
        expected: &'static str,
    },
    /// A sequence count was below zero.
    #[error("Negative sequence count ({count}) at position {position}.")]
    NegativeCount { position: usize, count: i64 },
}

/// A strategy for decoding one value from a cursor.
///
/// Implementations consume exactly the tokens that make up their value and
/// leave the cursor positioned on the first token after it. Decoders are
/// plain values: they can be stored, passed to constructors (as [`Seq::new`]
/// takes its element decoder) and nested arbitrarily deep.
///
/// Closures taking `&mut Cursor<'_>` and returning `Result<T, DecodeError>`
/// are decoders too; wrap them in [`from_fn`] to have their signature
/// inferred.
pub trait Decoder {
    /// The decoded value.
    type Output;

    /// Decode one value, advancing the cursor past its tokens.
    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Self::Output, DecodeError>;
}

impl<T, F> Decoder for F
where
    F: Fn(&mut Cursor<'_>) -> Result<T, DecodeError>,
{
    type Output = T;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<T, DecodeError> {
        self(cursor)
    }
}

/// Use a closure as a decoder.
///
/// ```
/// let len = from_fn(|cursor| Ok(cursor.next()?.len()));
/// ```
pub fn from_fn<T, F>(f: F) -> F
where
    F: Fn(&mut Cursor<'_>) -> Result<T, DecodeError>,
{
    f
}
