use std::path::PathBuf;
use thiserror::Error;

/// The main error type for reidset operations.
#[derive(Debug, Error)]
pub enum ReidsetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Required path does not exist: {}", path.display())]
    MissingPath { path: PathBuf },

    #[error("Failed to list directory {}: {message}", path.display())]
    DirectoryTraversal { path: PathBuf, message: String },

    #[error("File name does not contain '<identity>_c<camera>': {}", path.display())]
    FilenamePatternMismatch { path: PathBuf },

    #[error("Invalid identity code '{raw}' in {}", path.display())]
    InvalidIdentity { path: PathBuf, raw: String },

    #[error("Camera code {camera} out of range 1..=8 in {}", path.display())]
    CameraOutOfRange { path: PathBuf, camera: u32 },

    #[error("Failed to write JSON output: {source}")]
    JsonWrite {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write CSV output: {source}")]
    CsvWrite {
        #[source]
        source: csv::Error,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown split '{0}' (expected train, query or gallery)")]
    UnknownSplit(String),
}
