//! Reconstruction orchestrator
//!
//! Wires the pipeline together for one instance: enumerate every
//! threshold-sized subset, interpolate each at x = 0, and return the
//! candidate the most subsets agree on. Corrupted shares are never
//! identified directly; they are outvoted, because every subset avoiding
//! them reconstructs the same true secret.

use num_bigint::BigInt;

use crate::combinations::k_subsets;
use crate::domain::ShareSet;
use crate::error::RecoverError;
use crate::interpolate::interpolate_at_zero;
use crate::majority::FrequencyTally;

/// How to treat a subset whose interpolation is not an integer
///
/// Such a subset necessarily contains corrupted shares: honest shares all
/// lie on one integer-coefficient polynomial, and that polynomial's value
/// at 0 is an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Drop the subset's vote and keep counting. The corrupted shares are
    /// outvoted by the subsets that exclude them.
    #[default]
    Tolerant,
    /// Surface [`RecoverError::InexactDivision`] immediately.
    Strict,
}

/// Recovers the secret the share set agrees on
///
/// # Errors
/// Propagates sub-component failures unchanged:
/// [`RecoverError::DegenerateInterpolation`] on duplicate x-coordinates,
/// [`RecoverError::InexactDivision`] in [`Mode::Strict`], and
/// [`RecoverError::EmptyInput`] if no subset produced a countable
/// candidate.
pub fn reconstruct_secret(set: &ShareSet, mode: Mode) -> Result<BigInt, RecoverError> {
    let mut tally = FrequencyTally::new();

    for subset in k_subsets(set.shares(), *set.threshold()) {
        let points: Vec<(BigInt, BigInt)> = subset
            .iter()
            .map(|share| (share.x(), share.value().clone()))
            .collect();

        match interpolate_at_zero(&points) {
            Ok(candidate) => tally.record(candidate),
            Err(RecoverError::InexactDivision) if mode == Mode::Tolerant => {}
            Err(err) => return Err(err),
        }
    }

    let (secret, _votes) = tally.winner()?;
    Ok(secret)
}
