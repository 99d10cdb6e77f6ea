//! Domains module containing the generator's logic organized by concern.
//!
//! - **prompts**: the compiled-in catalog and template loading
//! - **codegen**: rendering and writing the generated module

pub mod codegen;
pub mod prompts;
