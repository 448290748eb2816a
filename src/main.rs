use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use shamend::cli::{Cli, Commands};
use shamend::commands::{decode_value, recover_instance};
use shamend::reconstruct::Mode;

/// Read one instance document from stdin (prompting when interactive)
fn read_instance() -> Result<String> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Paste the share instance JSON, then end input (Ctrl-D):");
    }

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read instance from stdin")?;
    Ok(text)
}

/// Read one instance document from a file
fn read_instance_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Recover { files, strict } => {
            let mode = if strict { Mode::Strict } else { Mode::Tolerant };

            if files.is_empty() {
                let text = Zeroizing::new(read_instance()?);
                let secret = recover_instance(&text, mode)?;
                println!("{secret}");
            } else {
                for path in files {
                    let text = Zeroizing::new(read_instance_file(&path)?);
                    let secret = recover_instance(&text, mode)
                        .with_context(|| format!("Failed to recover {}", path.display()))?;
                    println!("{secret}");
                }
            }
        }
        Commands::Decode { base, value } => {
            println!("{}", decode_value(&value, base)?);
        }
    }

    Ok(())
}
