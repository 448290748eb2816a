//! `ShareIndex` newtype for secret reconstruction

use anyhow::{Result, bail};

/// Share index: the x-coordinate a share was evaluated at
///
/// Indices start at 1. Index 0 is the evaluation point of the secret
/// itself, so a share there would short-circuit interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShareIndex(u64);

impl ShareIndex {
    /// Smallest valid share index
    pub const MIN: u64 = 1;

    /// Creates a new share index
    ///
    /// # Errors
    /// Returns an error if the index is 0 (reserved as the evaluation point)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamend::domain::ShareIndex;
    ///
    /// let index = ShareIndex::new(ShareIndex::MIN).unwrap();
    /// assert_eq!(*index, 1);
    ///
    /// // Index 0 is where the secret lives
    /// assert!(ShareIndex::new(0).is_err());
    /// ```
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            bail!("Share index 0 is reserved as the evaluation point");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for ShareIndex {
    type Target = u64;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
