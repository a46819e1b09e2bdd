use std::fs::File;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::artifacts::RAW_FILE;
use crate::error::{ExecutorError, Result};

/// Gzip-compressed tarball of the raw output.
pub const ARCHIVE_FILE: &str = "output.tar.gz";

/// Pack `<dir>/output.txt` into `<dir>/output.tar.gz`.
///
/// The archive holds exactly one entry, named `output.txt`. Any archive
/// already at the target path is truncated, never appended to. Both the tar
/// builder and the gzip encoder are finished explicitly so the trailer hits
/// disk before we report success.
pub fn pack(dir: &Path) -> Result<()> {
    let src = dir.join(RAW_FILE);
    let dst = dir.join(ARCHIVE_FILE);

    let mut source = File::open(&src).map_err(|source| ExecutorError::Io {
        op: "opening",
        path: src.clone(),
        source,
    })?;
    let target = File::create(&dst).map_err(|source| ExecutorError::Io {
        op: "creating",
        path: dst.clone(),
        source,
    })?;

    let encoder = GzEncoder::new(target, Compression::default());
    let mut builder = tar::Builder::new(encoder);
    builder
        .append_file(RAW_FILE, &mut source)
        .map_err(|source| ExecutorError::Io {
            op: "archiving",
            path: dst.clone(),
            source,
        })?;
    let encoder = builder.into_inner().map_err(|source| ExecutorError::Io {
        op: "finishing",
        path: dst.clone(),
        source,
    })?;
    encoder.finish().map_err(|source| ExecutorError::Io {
        op: "finishing",
        path: dst,
        source,
    })?;
    Ok(())
}
