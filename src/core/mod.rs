//! Core module containing shared infrastructure components.
//!
//! This module provides configuration and the crate-wide error type.

pub mod config;
pub mod error;

pub use config::{Config, GeneratorConfig, LoggingConfig};
pub use error::{Error, Result};
