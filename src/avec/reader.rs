//! Reader-based decoder entry point.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, string::String};

use thiserror::Error;

use crate::sans::{DecodeError, Decoder};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader, including invalid UTF-8.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The tokens read could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Read a `/`-delimited source to its end and decode a value from it.
///
/// A single trailing line ending (`\n` or `\r\n`) is dropped before the source
/// is split, so files and piped input written with a final newline decode the
/// same as the bare string.
///
/// This method is also re-exported as `loadable::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode<D: Decoder>(r: &mut impl Read, decoder: D) -> Result<D::Output, Error> {
    let mut source = String::new();
    r.read_to_string(&mut source)?;

    let source = source
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(&source);

    Ok(super::text::decode(source, decoder)?)
}
