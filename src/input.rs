//! Instance input glue
//!
//! One reconstruction instance is a JSON object: a `"keys"` control field
//! carrying the declared share count `n` and the threshold `k`, plus one
//! field per share keyed by its decimal index:
//!
//! ```json
//! {
//!   "keys": { "n": 4, "k": 3 },
//!   "1": { "base": "10", "value": "4" },
//!   "2": { "base": "2", "value": "111" },
//!   "3": { "base": "10", "value": "12" },
//!   "6": { "base": "4", "value": "213" }
//! }
//! ```
//!
//! Producers are inconsistent about whether `n`, `k` and `base` are JSON
//! numbers or digit strings; both are accepted. Share values are always
//! strings (a JSON number cannot hold them exactly).

use anyhow::{Context, Result, bail};
use serde_json::Value;

use crate::domain::{Share, ShareIndex, ShareSet, Threshold};

/// Field name of the control record
pub const CONTROL_KEY: &str = "keys";

/// Parses one JSON instance into a validated [`ShareSet`]
///
/// # Errors
/// Returns an error on malformed JSON, a missing or incomplete control
/// field, an unparseable share record, or any repository invariant
/// violation (duplicate index, insufficient shares).
pub fn parse_instance(text: &str) -> Result<ShareSet> {
    let root: Value = serde_json::from_str(text).context("Failed to parse instance JSON")?;
    let Value::Object(fields) = root else {
        bail!("Instance must be a JSON object");
    };

    let control = fields
        .get(CONTROL_KEY)
        .with_context(|| format!("Missing {CONTROL_KEY:?} control field"))?;
    let declared = usize::try_from(integer_field(control, "n")?).context("n out of range")?;
    let k = usize::try_from(integer_field(control, "k")?).context("k out of range")?;
    let threshold = Threshold::new(k)?;

    let mut shares = Vec::with_capacity(fields.len().saturating_sub(1));
    for (key, record) in &fields {
        if key == CONTROL_KEY {
            continue;
        }

        let index = key
            .parse::<u64>()
            .ok()
            .with_context(|| format!("Share key {key:?} is not an integer index"))?;
        let index = ShareIndex::new(index)?;

        let base = u32::try_from(integer_field(record, "base")?)
            .with_context(|| format!("Share #{key} base out of range"))?;
        let raw = string_field(record, "value")?;

        let share = Share::decode(index, &raw, base)
            .with_context(|| format!("Failed to decode share #{key}"))?;
        shares.push(share);
    }

    Ok(ShareSet::new(declared, threshold, shares)?)
}

/// Reads a field that may be a JSON number or a decimal digit string
fn integer_field(record: &Value, name: &str) -> Result<u64> {
    let field = record
        .get(name)
        .with_context(|| format!("Missing field {name:?}"))?;

    match field {
        Value::Number(number) => number
            .as_u64()
            .with_context(|| format!("Field {name:?} is not a non-negative integer")),
        Value::String(text) => text
            .trim()
            .parse::<u64>()
            .ok()
            .with_context(|| format!("Field {name:?} is not a numeric string")),
        _ => bail!("Field {name:?} must be a number or a numeric string"),
    }
}

/// Reads a field that must be a string (numbers are tolerated when exact)
fn string_field(record: &Value, name: &str) -> Result<String> {
    let field = record
        .get(name)
        .with_context(|| format!("Missing field {name:?}"))?;

    match field {
        Value::String(text) => Ok(text.clone()),
        // A small integer literal loses nothing; anything with a decimal
        // point or exponent already has
        Value::Number(number) if number.is_u64() || number.is_i64() => Ok(number.to_string()),
        _ => bail!("Field {name:?} must be a string"),
    }
}
