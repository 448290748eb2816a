use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::codec::{MAX_BASE, MIN_BASE};

/// Validates that a radix falls in the supported 2..=36 range
fn validate_base(s: &str) -> Result<u32, String> {
    let value: u32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !(MIN_BASE..=MAX_BASE).contains(&value) {
        return Err(format!(
            "base must be between {MIN_BASE} and {MAX_BASE} (got {value})"
        ));
    }
    Ok(value)
}

#[derive(Parser)]
#[command(name = "shamend")]
#[command(about = "Recover a shared secret from threshold shares by subset majority vote")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recover the secret from JSON share instances
    Recover {
        /// Instance files to process; reads stdin when omitted
        files: Vec<PathBuf>,

        /// Fail outright when any subset does not interpolate to an integer
        #[arg(long)]
        strict: bool,
    },
    /// Decode a single radix-encoded share value
    Decode {
        /// Radix of the encoded value (2-36)
        #[arg(short, long, value_parser = validate_base)]
        base: u32,

        /// The encoded digits
        value: String,
    },
}
