//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module split a source string into tokens and run a
//! [`Decoder`] over them. Types implementing [`FromTokens`] know their own
//! decoder, which can be named with [`Auto`].
//!
//! In many cases (when a record is a plain struct decoded field by field),
//! [`FromTokens`] can be derived. See the [`FromTokens`](macro@FromTokens)
//! macro for details.

#[cfg(feature = "std")]
pub mod reader;
pub mod text;

#[cfg(feature = "std")]
pub use reader::decode as decode_reader;
pub use text::{DELIMITER, decode as decode_str, decode_with as decode_str_with};

use alloc::{string::String, vec::Vec};
use core::{fmt, marker::PhantomData};

use crate::sans::{
    Cursor, DecodeError, Decoder, Seq,
    primitive::{F32, F64, I8, I16, I32, I64, I128, Isize, Str, U8, U16, U32, U64, U128, Usize},
};

/// Derive [`FromTokens`] for a struct with named fields.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Fields are decoded in declaration order, each with the [`FromTokens`]
/// implementation of its type.
///
/// ```
/// #[derive(Debug, FromTokens)]
/// struct Cat {
///     name: String,
///     age: i32,
///     toys: Vec<String>,
/// }
///
/// let cat: Cat = decode_str("tama/5/2/ball/mouse", Auto::new())?;
/// ```
///
/// To decode a field with a specific decoder, supply it with the `decode`
/// attribute. Any expression evaluating to a [`Decoder`] is accepted.
///
/// ```
/// #[derive(Debug, FromTokens)]
/// struct Litter {
///     #[decode(Seq::new(Str).collect::<ArrayVec<[String; 8]>>())]
///     names: ArrayVec<[String; 8]>,
///     #[decode(U8)]
///     weeks: u8,
/// }
/// ```
#[cfg(feature = "derive")]
pub use loadable_derive::FromTokens;

/// A type that knows how to decode itself from a cursor.
///
/// See the [`FromTokens`](macro@FromTokens) derive macro for an automatic
/// implementation of this trait.
pub trait FromTokens: Sized {
    /// Decode a value, advancing the cursor past its tokens.
    fn from_tokens(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError>;
}

macro_rules! from_tokens {
    ($($into:ty => $decoder:expr),* $(,)?) => {
        $(
            impl FromTokens for $into {
                fn from_tokens(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
                    $decoder.decode(cursor)
                }
            }
        )*
    };
}

from_tokens! {
    i8 => I8, i16 => I16, i32 => I32, i64 => I64, i128 => I128, isize => Isize,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64, u128 => U128, usize => Usize,
    f32 => F32, f64 => F64,
    String => Str,
}

impl<T: FromTokens> FromTokens for Vec<T> {
    fn from_tokens(cursor: &mut Cursor<'_>) -> Result<Self, DecodeError> {
        Seq::new(Auto::<T>::new()).decode(cursor)
    }
}

/// Decoder delegating to a type's [`FromTokens`] implementation.
pub struct Auto<T>(PhantomData<fn() -> T>);

impl<T> Auto<T> {
    /// Create a decoder for `T`.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for Auto<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Auto<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Auto<T> {}

impl<T> fmt::Debug for Auto<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Auto<{}>", core::any::type_name::<T>())
    }
}

impl<T: FromTokens> Decoder for Auto<T> {
    type Output = T;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<T, DecodeError> {
        T::from_tokens(cursor)
    }
}
