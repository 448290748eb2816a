//! WASM bindings for shamend
//!
//! This module provides JavaScript-friendly bindings for the core recover
//! functionality.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::codec;
use crate::input;
use crate::reconstruct::{Mode, reconstruct_secret};

/// Initialize panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Use wee_alloc as the global allocator for smaller WASM binary size
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Result of a recover operation (for JSON serialization)
#[derive(Serialize, Deserialize)]
pub struct RecoverResult {
    /// The reconstructed secret as a decimal string (JS numbers overflow)
    pub secret: String,
    /// Number of shares actually supplied
    pub share_count: usize,
    /// Threshold used for reconstruction
    pub threshold: usize,
}

/// Recover a secret from a JSON share instance
///
/// # Arguments
/// * `instance_json` - One instance document (see the input format docs)
/// * `strict` - Fail outright when any subset does not interpolate to an
///   integer, instead of letting the majority outvote it
///
/// # Returns
/// JSON string containing the secret and instance metadata, or an error
/// message
///
/// # Example (JavaScript)
/// ```javascript
/// const result = wasm_recover(instanceJson, false);
/// const data = JSON.parse(result);
/// console.log(`Secret: ${data.secret} (from ${data.share_count} shares)`);
/// ```
#[wasm_bindgen]
pub fn wasm_recover(instance_json: &str, strict: bool) -> Result<String, JsValue> {
    let mode = if strict { Mode::Strict } else { Mode::Tolerant };

    let set = input::parse_instance(instance_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid instance: {e}")))?;

    let secret = reconstruct_secret(&set, mode)
        .map_err(|e| JsValue::from_str(&format!("Recover failed: {e}")))?;

    let result = RecoverResult {
        secret: secret.to_string(),
        share_count: set.shares().len(),
        threshold: *set.threshold(),
    };

    serde_json::to_string(&result)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {e}")))
}

/// Decode a single radix-encoded share value
///
/// # Arguments
/// * `value` - The encoded digits
/// * `base` - Radix of the encoded value (2-36)
///
/// # Returns
/// The decoded value as a decimal string, or an error message
///
/// # Example (JavaScript)
/// ```javascript
/// const decoded = wasm_decode_value("111", 2);
/// console.log(`Decoded: ${decoded}`); // "7"
/// ```
#[wasm_bindgen]
pub fn wasm_decode_value(value: &str, base: u32) -> Result<String, JsValue> {
    codec::decode_value(value, base)
        .map(|v| v.to_string())
        .map_err(|e| JsValue::from_str(&format!("Decode failed: {e}")))
}
