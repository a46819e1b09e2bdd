use std::path::Path;

use crate::error::Result;
use crate::{archive, artifacts, input, runner};

/// Execute one full run in `dir`: load input, run `app`, write artifacts,
/// pack the archive. Returns the product reported by the scenario app.
///
/// Steps run strictly in order and the first error aborts the rest, with one
/// deliberate exception: the raw output is written before the numeric parse,
/// so a malformed payload still leaves `output.txt` behind for inspection
/// while `output.json` and the archive are never produced.
pub fn execute(dir: &Path, app: &Path) -> Result<f64> {
    let params = input::load(dir)?;
    tracing::info!(
        parameter1 = %params.parameter1,
        parameter2 = %params.parameter2,
        "input loaded"
    );

    let outcome = runner::run_app(app, &params.parameter1, &params.parameter2)?;
    let payload = outcome.into_stdout();
    tracing::info!(bytes = payload.len(), "app output captured");

    artifacts::write_raw(dir, &payload)?;
    let product = artifacts::parse_product(&payload)?;
    artifacts::write_envelope(dir, product)?;
    tracing::info!(product, "results written");

    archive::pack(dir)?;
    tracing::info!("archive packed");

    Ok(product)
}
