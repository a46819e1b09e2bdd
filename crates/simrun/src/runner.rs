use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{ExecutorError, Result};

/// Captured stdout of the scenario app, tagged by how the child exited.
///
/// A non-zero exit does not abort the pipeline: whatever the child managed to
/// print is still the result payload. A spawn that never produced a child is
/// an [`ExecutorError::Launch`] instead; there is nothing to salvage there.
#[derive(Debug)]
pub enum RunOutcome {
    /// Child exited with status zero.
    Completed(Vec<u8>),
    /// Child ran but exited non-zero; holds whatever stdout it produced.
    Failed(Vec<u8>),
}

impl RunOutcome {
    pub fn stdout(&self) -> &[u8] {
        match self {
            RunOutcome::Completed(bytes) | RunOutcome::Failed(bytes) => bytes,
        }
    }

    pub fn into_stdout(self) -> Vec<u8> {
        match self {
            RunOutcome::Completed(bytes) | RunOutcome::Failed(bytes) => bytes,
        }
    }
}

/// Run the scenario executable with the two run parameters and capture stdout.
///
/// Blocks until the child exits. Stderr stays attached to ours; only stdout
/// is the result channel.
pub fn run_app(app: &Path, parameter1: &str, parameter2: &str) -> Result<RunOutcome> {
    tracing::debug!(app = %app.display(), parameter1, parameter2, "spawning scenario app");
    let output = Command::new(app)
        .arg(parameter1)
        .arg(parameter2)
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ExecutorError::Launch {
            app: app.to_path_buf(),
            source,
        })?;

    if output.status.success() {
        Ok(RunOutcome::Completed(output.stdout))
    } else {
        tracing::warn!(
            app = %app.display(),
            code = ?output.status.code(),
            "scenario app exited non-zero; keeping captured output"
        );
        Ok(RunOutcome::Failed(output.stdout))
    }
}
