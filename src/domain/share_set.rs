//! Share repository for one reconstruction instance

use crate::error::RecoverError;

use super::{Share, Threshold};

/// The parsed set of shares for one reconstruction instance
///
/// Shares are held sorted by index so subset enumeration is deterministic
/// regardless of input record order. The declared total `n` is kept for
/// reporting only; reconstruction works off the shares actually present.
#[derive(Debug, Clone)]
pub struct ShareSet {
    declared: usize,
    threshold: Threshold,
    shares: Vec<Share>,
}

impl ShareSet {
    /// Builds a share set, enforcing the repository invariants
    ///
    /// # Errors
    /// Returns [`RecoverError::DuplicateIndex`] if two shares carry the
    /// same index (interpolation over them would divide by zero), and
    /// [`RecoverError::InsufficientShares`] if fewer than `threshold`
    /// shares are present (no subset of that size exists).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use num_bigint::BigInt;
    /// use shamend::domain::{Share, ShareIndex, ShareSet, Threshold};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let shares = vec![
    ///     Share::new(ShareIndex::new(2)?, BigInt::from(11)),
    ///     Share::new(ShareIndex::new(1)?, BigInt::from(7)),
    /// ];
    /// let set = ShareSet::new(2, Threshold::new(2)?, shares)?;
    ///
    /// // Held sorted by index, whatever order they arrived in
    /// assert_eq!(*set.shares()[0].index(), 1);
    ///
    /// // Three required but only two present is rejected
    /// let shares = vec![
    ///     Share::new(ShareIndex::new(1)?, BigInt::from(7)),
    ///     Share::new(ShareIndex::new(2)?, BigInt::from(11)),
    /// ];
    /// assert!(ShareSet::new(3, Threshold::new(3)?, shares).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        declared: usize,
        threshold: Threshold,
        mut shares: Vec<Share>,
    ) -> Result<Self, RecoverError> {
        shares.sort_by_key(|share| *share.index());

        if let Some(pair) = shares.windows(2).find(|w| w[0].index() == w[1].index()) {
            return Err(RecoverError::DuplicateIndex {
                index: *pair[0].index(),
            });
        }

        if shares.len() < *threshold {
            return Err(RecoverError::InsufficientShares {
                threshold: *threshold,
                got: shares.len(),
            });
        }

        Ok(Self {
            declared,
            threshold,
            shares,
        })
    }

    /// The declared total share count `n` from the input record
    #[must_use]
    pub fn declared_count(&self) -> usize {
        self.declared
    }

    /// The reconstruction threshold `k`
    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The shares, sorted by index
    #[must_use]
    pub fn shares(&self) -> &[Share] {
        &self.shares
    }
}
