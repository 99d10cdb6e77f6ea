//! Codegen domain module.
//!
//! Turns the prompt catalog into the front-end `PROMPTS` JavaScript module.
//!
//! ## Architecture
//!
//! - `emitter.rs` - Object literal rendering and module layout
//! - `json.rs` - `json.dumps`-compatible rendering of structured values
//! - `generator.rs` - The batch job that loads templates and writes the module

mod emitter;
mod error;
mod generator;
pub mod json;

pub use emitter::{
    DATE_EXPRESSION, render_field, render_module, render_prompt, render_string_literal,
};
pub use error::CodegenError;
pub use generator::{GenerationReport, Generator, RenderedModule, SkippedPrompt};
pub use json::to_python_json;
