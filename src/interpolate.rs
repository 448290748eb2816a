//! Lagrange interpolation at x = 0 over exact integer arithmetic
//!
//! Given k points of a degree-(k-1) polynomial, the constant term is
//!
//! ```text
//! f(0) = sum_i  y_i * prod_{j != i} (-x_j) / prod_{j != i} (x_i - x_j)
//! ```
//!
//! The sum is accumulated as one exact fraction and divided once at the
//! end. Individual terms are often not integers even when every point is
//! honest (the products only cancel across the whole sum), so dividing
//! term by term would corrupt the result.

use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::RecoverError;

/// Evaluates the unique polynomial through `points` at x = 0
///
/// Pure and order-independent: permuting `points` never changes the
/// result.
///
/// # Errors
/// Returns [`RecoverError::DegenerateInterpolation`] if two points share
/// an x-coordinate (excluded upstream by the repository, re-checked here),
/// and [`RecoverError::InexactDivision`] if the accumulated sum is not an
/// integer, which proves the points are not k samples of one
/// integer-coefficient polynomial.
pub fn interpolate_at_zero(points: &[(BigInt, BigInt)]) -> Result<BigInt, RecoverError> {
    if points.is_empty() {
        return Err(RecoverError::EmptyInput);
    }

    // Running sum as an exact fraction acc_num / acc_den
    let mut acc_num = BigInt::zero();
    let mut acc_den = BigInt::one();

    for (i, (xi, yi)) in points.iter().enumerate() {
        let mut numerator = BigInt::one();
        let mut denominator = BigInt::one();

        for (j, (xj, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator *= -xj;
            denominator *= xi - xj;
        }

        if denominator.is_zero() {
            return Err(RecoverError::DegenerateInterpolation);
        }

        // acc += y_i * numerator / denominator, kept exact
        acc_num = acc_num * &denominator + yi * numerator * &acc_den;
        acc_den *= denominator;
    }

    if !(&acc_num % &acc_den).is_zero() {
        return Err(RecoverError::InexactDivision);
    }

    Ok(acc_num / acc_den)
}
