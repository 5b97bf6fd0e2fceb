use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read price data from {}: {source}", path.display())]
    DataRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid price data in {}: {source}", path.display())]
    DataParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Cannot locate the executable directory: {0}")]
    ExeDir(std::io::Error),

    #[error("Failed to read filter from stdin: {0}")]
    Prompt(std::io::Error),
}
