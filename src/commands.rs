use anyhow::{Context, Result};
use num_bigint::BigInt;

use crate::codec;
use crate::input;
use crate::reconstruct::{Mode, reconstruct_secret};

/// Recover the secret from one JSON share instance
///
/// Returns the reconstructed secret as an exact integer.
///
/// # Errors
/// Returns an error if the instance fails to parse, violates a repository
/// invariant, or no majority candidate can be produced
pub fn recover_instance(text: &str, mode: Mode) -> Result<BigInt> {
    let set = input::parse_instance(text)?;

    let secret = reconstruct_secret(&set, mode).context("Failed to reconstruct secret")?;

    Ok(secret)
}

/// Decode a single radix-encoded value to an exact integer
///
/// # Errors
/// Returns an error if the base is out of range or the value does not
/// parse in it
pub fn decode_value(value: &str, base: u32) -> Result<BigInt> {
    codec::decode_value(value, base).context("Failed to decode value")
}
