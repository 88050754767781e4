use std::path::PathBuf;
use thiserror::Error;

/// Everything that can abort a report run. All variants are fatal; the binary
/// surfaces them through `anyhow` and exits non-zero.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cannot read logo image {path}: {source}")]
    LogoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode logo image {path}: {source}")]
    LogoDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot read database config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid database config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write report to {path}: {message}")]
    Save { path: PathBuf, message: String },
}
