//! Lazy k-subset enumeration over the share list

use itertools::Itertools;

use crate::domain::Share;

/// All size-`k` subsets of `shares`, in lexicographic position order
///
/// Each subset appears exactly once (no permutations of the same subset),
/// and re-calling yields the same deterministic sequence. [`crate::domain::ShareSet`]
/// keeps its shares sorted by index, so position order is index order.
pub fn k_subsets(shares: &[Share], k: usize) -> impl Iterator<Item = Vec<&Share>> {
    shares.iter().combinations(k)
}
