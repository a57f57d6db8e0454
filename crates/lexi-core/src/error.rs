use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Unsupported file type: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Malformed word list {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
