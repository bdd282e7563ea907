#![no_std]

//! Composable decoders for typed values carried in delimiter-separated token
//! strings.
//!
//! A source such as `CatWorld/3/tama/5/mike/6/kuro/7` is split on `/` into a
//! flat list of tokens. A [`Decoder`](sans::Decoder) then drains tokens from a
//! shared [`Cursor`](sans::cursor::Cursor), left to right, to build a value.
//! Decoders compose: a sequence decoder wraps an element decoder, and a record
//! decoder calls the decoders of its fields in declaration order.
//!
//! Most users should begin with the entry points and the derive macro in the
//! [`avec`] module. To write a decoder by hand, or to combine the primitive and
//! sequence decoders directly, see the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable derive macros (default).
//! - `std`: enable reader-based decoding (default).
//! - `tracing`: emit `tracing` events from the entry points.

extern crate alloc;

pub mod avec;
pub mod records;
pub mod sans;
