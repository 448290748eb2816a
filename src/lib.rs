//! Threshold secret recovery by subset majority vote
//!
//! Reconstructs a secret from radix-encoded threshold shares: every
//! threshold-sized subset is interpolated at x = 0 with exact arithmetic,
//! and the candidate the most subsets agree on wins; corrupted shares are
//! outvoted rather than detected.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod combinations;
pub mod commands;
pub mod domain;
pub mod error;
pub mod input;
pub mod interpolate;
pub mod majority;
pub mod reconstruct;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use domain::{Share, ShareIndex, ShareSet, Threshold};
pub use error::RecoverError;
pub use reconstruct::{Mode, reconstruct_secret};
