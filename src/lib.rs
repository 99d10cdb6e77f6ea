//! Prompt module generator.
//!
//! This crate builds the `PROMPTS` JavaScript module consumed by the prompt
//! evaluator front-end. It merges a compiled-in catalog of prompt metadata
//! with markdown templates read from disk.
//!
//! # Architecture
//!
//! - **core**: Configuration and the crate-wide error type
//! - **domains**: Logic organized by concern
//!   - **prompts**: Prompt descriptors, definitions, and template loading
//!   - **codegen**: JavaScript emission and the generation run
//!
//! # Example
//!
//! ```rust,no_run
//! use prompt_codegen::{Config, Generator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let report = Generator::new(config.generator).generate()?;
//!     println!("Successfully updated {}", report.target_file.display());
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result};
pub use domains::codegen::{GenerationReport, Generator};
