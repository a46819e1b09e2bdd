use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ExecutorError, Result};

/// Name of the parameter file expected in the run directory.
pub const INPUT_FILE: &str = "input.json";

/// Parameters for one simulation run.
///
/// Both fields are opaque strings handed to the scenario executable as-is.
/// Keys beyond the two required ones are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RunInput {
    pub parameter1: String,
    pub parameter2: String,
}

/// Read and parse `<dir>/input.json`.
///
/// A missing file, malformed JSON, and a missing or non-string key are all
/// fatal; nothing downstream runs on a bad input record.
pub fn load(dir: &Path) -> Result<RunInput> {
    let path = dir.join(INPUT_FILE);
    let bytes = fs::read(&path).map_err(|source| ExecutorError::InputRead {
        path: path.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ExecutorError::InputParse { path, source })
}
