//! String-based decoder entry points.

use alloc::vec::Vec;

use crate::sans::{Cursor, DecodeError, Decoder};

/// The token delimiter used by [`decode`].
pub const DELIMITER: char = '/';

/// Decode a value from a `/`-delimited source string.
///
/// Tokens left over once the decoder returns are ignored. To require that the
/// whole source is consumed, drive a [`Cursor`] directly and check
/// [`Cursor::is_empty`] afterward.
///
/// This method is also re-exported as `loadable::avec::decode_str`.
pub fn decode<D: Decoder>(source: &str, decoder: D) -> Result<D::Output, DecodeError> {
    decode_with(source, DELIMITER, decoder)
}

/// Decode a value from a source string split on another delimiter.
///
/// This method is also re-exported as `loadable::avec::decode_str_with`.
pub fn decode_with<D: Decoder>(
    source: &str,
    delimiter: char,
    decoder: D,
) -> Result<D::Output, DecodeError> {
    // An empty source still yields one (empty) token.
    let tokens: Vec<&str> = source.split(delimiter).collect();
    let mut cursor = Cursor::new(&tokens);

    #[cfg(feature = "tracing")]
    tracing::trace!(tokens = tokens.len(), "decoding");

    let result = decoder.decode(&mut cursor);

    #[cfg(feature = "tracing")]
    match &result {
        Ok(_) => tracing::trace!(
            consumed = cursor.position(),
            ignored = cursor.remaining(),
            "decoded"
        ),
        Err(err) => tracing::debug!(%err, consumed = cursor.position(), "decode failed"),
    }

    result
}
