use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run, grouped by pipeline stage.
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("reading input {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing input {path}: {source}")]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("launching {app}: {source}")]
    Launch {
        app: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("app output is not a number: {text:?}")]
    Format { text: String },

    #[error("encoding {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{op} {path}: {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExecutorError>;
