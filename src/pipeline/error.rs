//! Per-document errors. None of these abort the batch.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to read `{}`", .0.display())]
    Read(PathBuf, #[source] std::io::Error),

    #[error("failed to write `{}`", .0.display())]
    Write(PathBuf, #[source] std::io::Error),

    #[error("failed to encode color map for `{0}`")]
    Encode(String, #[source] serde_json::Error),
}

impl DocumentError {
    /// Error message including the underlying cause.
    pub fn detail(&self) -> String {
        match std::error::Error::source(self) {
            Some(source) => format!("{self}: {source}"),
            None => self.to_string(),
        }
    }
}
