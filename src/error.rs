use std::path::PathBuf;
use thiserror::Error;

/// Failures that abort reading a payments file.
///
/// Problems inside individual records never surface here: malformed fields fall
/// back to defaults during coercion and rule violations become rejections.
#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("IO error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Total does not fit when scaled by {scale}")]
    TotalOverflow { scale: i64 },
}

pub type Result<T> = std::result::Result<T, PaymentError>;
