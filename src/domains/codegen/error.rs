//! Codegen-specific error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or writing the generated module.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A structured value could not be serialized.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// The generated module could not be written.
    #[error("Cannot write '{}': {source}", .path.display())]
    WriteOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CodegenError {
    /// Create a new "write output" error.
    pub fn write_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::WriteOutput {
            path: path.into(),
            source,
        }
    }
}
