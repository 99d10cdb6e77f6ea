//! Prompt-specific error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling the prompt catalog.
#[derive(Debug, Error)]
pub enum PromptError {
    /// A template file could not be read as UTF-8 text.
    #[error("Cannot read template '{}': {source}", .path.display())]
    TemplateRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two catalog entries share the same id.
    #[error("Duplicate prompt id: {0}")]
    DuplicateId(String),

    /// A required descriptor key is empty.
    #[error("Prompt '{prompt}' has an empty {key}")]
    EmptyKey { prompt: String, key: &'static str },

    /// A non-select field declares options.
    #[error("Field '{field}' of prompt '{prompt}' declares options but is not a select")]
    OptionsOnNonSelect { prompt: String, field: String },
}

impl PromptError {
    /// Create a new "template read" error.
    pub fn template_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Create a new "duplicate id" error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }
}
