//! Majority vote over candidate secrets

use std::collections::HashMap;

use num_bigint::BigInt;

use crate::error::RecoverError;

/// Occurrence tally over the candidates produced by every subset
///
/// Counts per distinct value, plus the order values were first seen. The
/// order fixes the tie-break: scanning first-seen order, a later value
/// takes the lead only with a strictly greater count, never an equal one.
#[derive(Debug, Default)]
pub struct FrequencyTally {
    counts: HashMap<BigInt, usize>,
    order: Vec<BigInt>,
}

impl FrequencyTally {
    /// Creates an empty tally
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one candidate secret
    pub fn record(&mut self, candidate: BigInt) {
        match self.counts.get_mut(&candidate) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(candidate.clone(), 1);
                self.order.push(candidate);
            }
        }
    }

    /// Total number of votes recorded so far
    #[must_use]
    pub fn votes(&self) -> usize {
        self.counts.values().sum()
    }

    /// The most frequent candidate and its count
    ///
    /// # Errors
    /// Returns [`RecoverError::EmptyInput`] if nothing was recorded.
    pub fn winner(&self) -> Result<(BigInt, usize), RecoverError> {
        let mut best: Option<(&BigInt, usize)> = None;

        for value in &self.order {
            let count = self.counts[value];
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((value, count)),
            }
        }

        best.map(|(value, count)| (value.clone(), count))
            .ok_or(RecoverError::EmptyInput)
    }
}
