//! Length-prefixed sequences.

use alloc::{string::ToString, vec::Vec};
use core::{iter, marker::PhantomData};

use super::{Cursor, DecodeError, Decoder, FormatError, primitive::Int};

/// Decoder for a count token followed by that many elements.
///
/// The element decoder runs once per element, on the same cursor, and the
/// results are kept in token order. By default elements are collected into a
/// [`Vec`]; use [`collect`](Self::collect) to target any other collection
/// implementing [`Default`] and [`Extend`].
///
/// The count is read with [`Int`], so it fails exactly as that decoder does.
/// A count of zero yields an empty collection without consuming further
/// tokens. A negative count fails with [`FormatError::NegativeCount`] before
/// any element is read.
#[derive(Debug, Clone)]
pub struct Seq<D: Decoder, C = Vec<<D as Decoder>::Output>> {
    element: D,
    _phantom: PhantomData<fn() -> C>,
}

impl<D: Decoder> Seq<D> {
    /// Create a sequence decoder collecting elements into a [`Vec`].
    pub fn new(element: D) -> Self {
        Self {
            element,
            _phantom: PhantomData,
        }
    }
}

impl<D: Decoder, C> Seq<D, C> {
    /// Collect elements into another type of collection.
    pub fn collect<E>(self) -> Seq<D, E>
    where
        E: Default + Extend<D::Output>,
    {
        Seq {
            element: self.element,
            _phantom: PhantomData,
        }
    }

    /// The decoder applied to each element.
    pub fn element(&self) -> &D {
        &self.element
    }
}

impl<D, C> Decoder for Seq<D, C>
where
    D: Decoder,
    C: Default + Extend<D::Output>,
{
    type Output = C;

    fn decode(&self, cursor: &mut Cursor<'_>) -> Result<C, DecodeError> {
        let position = cursor.position();
        let count = Int.decode(cursor)?;

        if count < 0 {
            Err(FormatError::NegativeCount {
                position,
                count: count.into(),
            })?;
        }

        let count = usize::try_from(count).map_err(|_| FormatError::Malformed {
            position,
            token: count.to_string(),
            expected: "sequence count",
        })?;

        // Nothing is reserved up front; the count is untrusted input.
        let mut elements = C::default();

        for _ in 0..count {
            let element = self.element.decode(cursor)?;
            elements.extend(iter::once(element));
        }

        Ok(elements)
    }
}
