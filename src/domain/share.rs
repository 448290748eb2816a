//! A single decoded share

use num_bigint::BigInt;

use crate::codec;
use crate::error::RecoverError;

use super::ShareIndex;

/// One (index, value) data point of the shared polynomial
///
/// Immutable once constructed. The encoded numeral and its radix are
/// consumed during decoding and not retained; decode failures carry them
/// in the error instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Share {
    index: ShareIndex,
    value: BigInt,
}

impl Share {
    /// Creates a share from an already-decoded value
    #[must_use]
    pub fn new(index: ShareIndex, value: BigInt) -> Self {
        Self { index, value }
    }

    /// Decodes a raw radix-encoded record into a share
    ///
    /// # Errors
    /// Returns [`RecoverError::MalformedValue`] if the numeral does not
    /// parse in the given base
    pub fn decode(index: ShareIndex, raw: &str, base: u32) -> Result<Self, RecoverError> {
        Ok(Self {
            index,
            value: codec::decode_value(raw, base)?,
        })
    }

    /// The share's index
    #[must_use]
    pub fn index(&self) -> ShareIndex {
        self.index
    }

    /// The share's decoded value
    #[must_use]
    pub fn value(&self) -> &BigInt {
        &self.value
    }

    /// The index as an unbounded integer, the x-coordinate for interpolation
    #[must_use]
    pub fn x(&self) -> BigInt {
        BigInt::from(*self.index)
    }
}
