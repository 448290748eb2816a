//! Threshold newtype for secret reconstruction

use anyhow::Result;

/// Reconstruction threshold: the subset size `k` handed to interpolation
///
/// Invariant: threshold >= 1 (enforced at construction)
/// A threshold of 0 would make the empty set a reconstruction subset, which
/// interpolates to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(usize);

impl Threshold {
    /// Creates a new threshold, returning an error if value is 0
    ///
    /// # Errors
    /// Returns an error if the threshold is 0
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shamend::domain::Threshold;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// assert_eq!(*threshold, 3);
    ///
    /// // k = 1 is legal: a constant polynomial, no redundancy
    /// assert!(Threshold::new(1).is_ok());
    ///
    /// // k = 0 is not
    /// assert!(Threshold::new(0).is_err());
    /// ```
    pub fn new(value: usize) -> Result<Self> {
        if value == 0 {
            anyhow::bail!("Threshold must be at least 1 (got {value})");
        }
        Ok(Self(value))
    }
}

impl std::ops::Deref for Threshold {
    type Target = usize;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
