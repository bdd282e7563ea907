//! Leaf decoders, each consuming exactly one token.

use alloc::string::{String, ToString};
use core::str::FromStr;

use super::{Cursor, DecodeError, Decoder, FormatError};

/// Take one token and parse it with [`FromStr`], naming the expected form in
/// the error.
fn parse<T: FromStr>(cursor: &mut Cursor<'_>, expected: &'static str) -> Result<T, DecodeError> {
    let position = cursor.position();
    let token = cursor.next()?;

    token.parse().map_err(|_| {
        FormatError::Malformed {
            position,
            token: token.to_string(),
            expected,
        }
        .into()
    })
}

macro_rules! primitive {
    ($t:ident, $into:ident, $expected:literal, $(#[$attr:meta])*) => {
        $(#[$attr])*
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct $t;

        impl Decoder for $t {
            type Output = $into;

            fn decode(&self, cursor: &mut Cursor<'_>) -> Result<$into, DecodeError> {
                parse(cursor, $expected)
            }
        }
    };
}

primitive!(I8, i8, "8-bit signed integer", /** Base-10 `i8`, with an optional sign. */);
primitive!(I16, i16, "16-bit signed integer", /** Base-10 `i16`, with an optional sign. */);
primitive!(I32, i32, "32-bit signed integer", /** Base-10 `i32`, with an optional sign. */);
primitive!(I64, i64, "64-bit signed integer", /** Base-10 `i64`, with an optional sign. */);
primitive!(I128, i128, "128-bit signed integer", /** Base-10 `i128`, with an optional sign. */);
primitive!(Isize, isize, "pointer-sized signed integer", /** Base-10 `isize`, with an optional sign. */);

primitive!(U8, u8, "8-bit unsigned integer", /** Base-10 `u8`. */);
primitive!(U16, u16, "16-bit unsigned integer", /** Base-10 `u16`. */);
primitive!(U32, u32, "32-bit unsigned integer", /** Base-10 `u32`. */);
primitive!(U64, u64, "64-bit unsigned integer", /** Base-10 `u64`. */);
primitive!(U128, u128, "128-bit unsigned integer", /** Base-10 `u128`. */);
primitive!(Usize, usize, "pointer-sized unsigned integer", /** Base-10 `usize`. */);

primitive!(F32, f32, "32-bit float", /** Decimal or scientific `f32`. */);
primitive!(F64, f64, "64-bit float", /** Decimal or scientific `f64`. */);

/// The default integer decoder, reading an `i32`.
pub use self::I32 as Int;

/// Decoder returning a token verbatim.
///
/// No trimming or unescaping is applied, and an empty token decodes to an
/// empty string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Str;

impl Decoder for Str {
    type Output = String;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<String, DecodeError> {
        Ok(cursor.next()?.to_string())
    }
}
