//! Prompts domain module.
//!
//! This module holds the compiled-in catalog of prompts: their metadata, the
//! form fields each one needs, and the loading of their markdown templates.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `descriptor.rs` - Prompt and field descriptor types
//! - `registry.rs` - Central prompt registration and catalog checks
//! - `templates.rs` - Template loading and escaping
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file in `definitions/` (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify the generator!**

pub mod definitions;
pub mod descriptor;
mod error;
mod registry;
pub mod templates;

pub use definitions::PromptDefinition;
pub use descriptor::{
    DATE_SENTINEL, DefaultValue, FieldAttribute, FieldDescriptor, FieldType, PromptDescriptor,
    SelectOption,
};
pub use error::PromptError;
pub use registry::{catalog, prompt_ids, validate_catalog};
pub use templates::{TemplateContent, escape_template_literal};
