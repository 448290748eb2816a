//! Property tests for subset interpolation and majority recovery

use num_bigint::BigInt;
use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

use shamend::combinations::k_subsets;
use shamend::domain::{Share, ShareIndex, ShareSet, Threshold};
use shamend::interpolate::interpolate_at_zero;
use shamend::majority::FrequencyTally;
use shamend::reconstruct::{Mode, reconstruct_secret};

/// A random integer polynomial plus a share count covering it
///
/// `coeffs[0]` is the secret; the threshold is `coeffs.len()`.
#[derive(Clone, Debug)]
struct ConsistentShares {
    coeffs: Vec<i64>,
    n: usize,
}

impl ConsistentShares {
    fn k(&self) -> usize {
        self.coeffs.len()
    }

    fn secret(&self) -> BigInt {
        BigInt::from(self.coeffs[0])
    }

    fn shares(&self) -> Vec<Share> {
        (1..=self.n as u64)
            .map(|x| Share::new(ShareIndex::new(x).unwrap(), eval(&self.coeffs, x)))
            .collect()
    }
}

impl Arbitrary for ConsistentShares {
    fn arbitrary(g: &mut Gen) -> Self {
        // Keep instances small; C(7, 3) = 35 subsets at most here
        let k = usize::arbitrary(g) % 3 + 1; // 1..=3
        let n = k + usize::arbitrary(g) % 5; // k..=k+4
        let coeffs = (0..k).map(|_| i64::from(i32::arbitrary(g))).collect();
        ConsistentShares { coeffs, n }
    }
}

/// Like [`ConsistentShares`] but with enough redundancy (n > 2k) that a
/// single corrupted share is mathematically guaranteed to lose the vote,
/// plus the corruption to apply
#[derive(Clone, Debug)]
struct CorruptibleShares {
    base: ConsistentShares,
    victim: usize,
    delta: i64,
}

impl Arbitrary for CorruptibleShares {
    fn arbitrary(g: &mut Gen) -> Self {
        let k = usize::arbitrary(g) % 3 + 1; // 1..=3
        let n = 2 * k + 1 + usize::arbitrary(g) % 2; // 2k+1..=2k+2
        let coeffs = (0..k).map(|_| i64::from(i32::arbitrary(g))).collect();
        let victim = usize::arbitrary(g) % n;
        let delta = match i64::from(i32::arbitrary(g)) {
            0 => 1,
            nonzero => nonzero,
        };
        CorruptibleShares {
            base: ConsistentShares { coeffs, n },
            victim,
            delta,
        }
    }
}

/// Evaluates the polynomial at x (Horner, exact)
fn eval(coeffs: &[i64], x: u64) -> BigInt {
    let x = BigInt::from(x);
    coeffs
        .iter()
        .rev()
        .fold(BigInt::from(0), |acc, &c| acc * &x + BigInt::from(c))
}

/// Binomial coefficient for the small instances generated here
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// With every share honest, each subset interpolates to the same secret
/// and the winner carries the full C(n, k) count
#[quickcheck]
fn prop_every_subset_yields_the_secret(input: ConsistentShares) -> bool {
    let shares = input.shares();
    let mut tally = FrequencyTally::new();

    for subset in k_subsets(&shares, input.k()) {
        let points: Vec<(BigInt, BigInt)> = subset
            .iter()
            .map(|s| (s.x(), s.value().clone()))
            .collect();

        let Ok(candidate) = interpolate_at_zero(&points) else {
            return false;
        };
        if candidate != input.secret() {
            return false;
        }
        tally.record(candidate);
    }

    tally.winner().unwrap() == (input.secret(), binomial(input.n, input.k()))
}

/// The full pipeline recovers the secret from honest shares, even with
/// strict division checking
#[quickcheck]
fn prop_reconstruct_recovers_secret(input: ConsistentShares) -> bool {
    let set = ShareSet::new(
        input.n,
        Threshold::new(input.k()).unwrap(),
        input.shares(),
    )
    .unwrap();

    reconstruct_secret(&set, Mode::Strict).unwrap() == input.secret()
}

/// One corrupted share never changes the outcome when n > 2k: the honest
/// subsets (C(n-1, k) of them) outnumber every subset touching the victim
/// (C(n-1, k-1))
#[quickcheck]
fn prop_single_corrupted_share_is_outvoted(input: CorruptibleShares) -> bool {
    let mut shares = input.base.shares();
    let corrupted = {
        let victim = &shares[input.victim];
        Share::new(victim.index(), victim.value() + BigInt::from(input.delta))
    };
    shares[input.victim] = corrupted;

    let set = ShareSet::new(
        input.base.n,
        Threshold::new(input.base.k()).unwrap(),
        shares,
    )
    .unwrap();

    reconstruct_secret(&set, Mode::Tolerant).unwrap() == input.base.secret()
}

/// Interpolation is a pure function of the point set, not its order
#[quickcheck]
fn prop_interpolation_is_order_invariant(input: ConsistentShares, seed: u64) -> bool {
    let shares = input.shares();
    let mut points: Vec<(BigInt, BigInt)> = shares[..input.k()]
        .iter()
        .map(|s| (s.x(), s.value().clone()))
        .collect();
    let reference = interpolate_at_zero(&points).unwrap();

    // Deterministic shuffle driven by the seed
    let mut seed = seed;
    for i in 0..points.len() {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let remaining = (points.len() - i) as u64;
        let j = i + usize::try_from(seed % remaining).unwrap_or(0);
        points.swap(i, j);
    }

    interpolate_at_zero(&points).unwrap() == reference
}

/// Fewer than k shares can never form a repository
#[quickcheck]
fn prop_insufficient_shares_fail(input: ConsistentShares) -> bool {
    let shares: Vec<Share> = input.shares().into_iter().take(input.k() - 1).collect();

    ShareSet::new(input.n, Threshold::new(input.k()).unwrap(), shares).is_err()
}
