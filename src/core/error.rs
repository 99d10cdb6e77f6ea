//! Error types and handling for the prompt generator.
//!
//! This module defines a unified error type that wraps the errors of every
//! domain, so the binary can propagate any failure with a single `?`.

use thiserror::Error;

/// A specialized Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the prompt generator.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the prompts domain (catalog or template loading).
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error originating from the codegen domain.
    #[error("Codegen error: {0}")]
    Codegen(#[from] crate::domains::codegen::CodegenError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
