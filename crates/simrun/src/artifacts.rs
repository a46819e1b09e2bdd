use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{ExecutorError, Result};

/// Raw stdout of the scenario app, byte-for-byte.
pub const RAW_FILE: &str = "output.txt";
/// JSON result envelope.
pub const ENVELOPE_FILE: &str = "output.json";

/// Fixed-shape success envelope written as `output.json`.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub status: String,
    pub results: EnvelopeResults,
}

#[derive(Debug, Serialize)]
pub struct EnvelopeResults {
    pub product: f64,
}

impl Envelope {
    pub fn ok(product: f64) -> Self {
        Self {
            status: "ok".to_string(),
            results: EnvelopeResults { product },
        }
    }
}

/// Write the captured payload verbatim to `<dir>/output.txt`.
pub fn write_raw(dir: &Path, payload: &[u8]) -> Result<()> {
    let path = dir.join(RAW_FILE);
    fs::write(&path, payload).map_err(|source| ExecutorError::Io {
        op: "writing",
        path,
        source,
    })
}

/// Interpret the captured payload as a decimal number.
///
/// Surrounding whitespace (the usual trailing newline) is tolerated; anything
/// else is a format error carrying the offending text.
pub fn parse_product(payload: &[u8]) -> Result<f64> {
    let text = String::from_utf8_lossy(payload);
    let trimmed = text.trim();
    trimmed.parse::<f64>().map_err(|_| ExecutorError::Format {
        text: trimmed.to_string(),
    })
}

/// Serialize the success envelope for `product` to `<dir>/output.json`.
pub fn write_envelope(dir: &Path, product: f64) -> Result<()> {
    let path = dir.join(ENVELOPE_FILE);
    let doc = serde_json::to_vec(&Envelope::ok(product)).map_err(|source| {
        ExecutorError::Encode {
            path: path.clone(),
            source,
        }
    })?;
    fs::write(&path, doc).map_err(|source| ExecutorError::Io {
        op: "writing",
        path,
        source,
    })
}
