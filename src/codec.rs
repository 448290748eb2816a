//! Radix numeral codec for share values
//!
//! Share values arrive as digit strings in an arbitrary radix. This module
//! converts them to exact [`BigInt`]s (no precision loss regardless of
//! magnitude) and re-encodes integers to their canonical lowercase numeral.
//!
//! # Examples
//!
//! ```rust
//! use num_bigint::BigInt;
//! use shamend::codec::{decode_value, encode_value};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(decode_value("111", 2)?, BigInt::from(7));
//! assert_eq!(decode_value("213", 4)?, BigInt::from(39));
//!
//! // Digits above 9 are letters, either case
//! assert_eq!(decode_value("FF", 16)?, decode_value("ff", 16)?);
//!
//! // Re-encoding produces the canonical lowercase numeral
//! assert_eq!(encode_value(&BigInt::from(255), 16)?, "ff");
//! # Ok(())
//! # }
//! ```

use num_bigint::BigInt;
use num_traits::Num;

use crate::error::RecoverError;

/// Smallest radix accepted for encoded share values
pub const MIN_BASE: u32 = 2;

/// Largest radix accepted for encoded share values (digits 0-9 then a-z)
pub const MAX_BASE: u32 = 36;

/// Decodes a radix-`base` numeral into an exact integer
///
/// Accepts an optional leading sign and case-insensitive digit letters.
///
/// # Errors
/// Returns [`RecoverError::MalformedValue`] if `base` is outside 2..=36 or
/// `text` contains a character that is not a valid digit in that radix.
pub fn decode_value(text: &str, base: u32) -> Result<BigInt, RecoverError> {
    let malformed = || RecoverError::MalformedValue {
        value: text.to_string(),
        base,
    };

    // from_str_radix panics on radices outside 2..=36, so gate first
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(malformed());
    }

    BigInt::from_str_radix(text, base).map_err(|_| malformed())
}

/// Encodes an integer as its canonical numeral in radix `base`
///
/// The output uses lowercase digit letters and no leading zeros, so
/// `decode_value(&encode_value(v, b)?, b)` always reproduces `v`.
///
/// # Errors
/// Returns [`RecoverError::MalformedValue`] if `base` is outside 2..=36.
pub fn encode_value(value: &BigInt, base: u32) -> Result<String, RecoverError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(RecoverError::MalformedValue {
            value: value.to_string(),
            base,
        });
    }

    Ok(value.to_str_radix(base))
}
