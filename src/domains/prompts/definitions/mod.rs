//! Prompt definitions module.
//!
//! Each prompt is defined in its own file with:
//! - Metadata (id, name, description)
//! - The markdown template filename
//! - The input fields the front-end renders
//!
//! ## Adding a New Prompt
//!
//! 1. Create a new file (e.g., `my_prompt.rs`)
//! 2. Implement the `PromptDefinition` trait
//! 3. Export it here
//! 4. Register in `registry.rs`

mod compression;
mod pr_to_news;
mod proofreading;
mod summarization;

pub use compression::CompressionPrompt;
pub use pr_to_news::PrToNewsPrompt;
pub use proofreading::ProofreadingPrompt;
pub use summarization::SummarizationPrompt;

use super::descriptor::{FieldDescriptor, FieldType};

/// Trait for prompt definitions.
pub trait PromptDefinition {
    /// The unique, stable id of the prompt.
    const ID: &'static str;

    /// The display name of the prompt.
    const NAME: &'static str;

    /// A one-line description of what the prompt does.
    const DESCRIPTION: &'static str;

    /// The markdown template file, relative to the templates directory.
    const FILENAME: &'static str;

    /// The input fields, in render order.
    fn inputs() -> Vec<FieldDescriptor>;
}

/// The main text field shared by every prompt.
fn user_question(label: &str, placeholder: &str) -> FieldDescriptor {
    FieldDescriptor::builder("user_question", label, FieldType::Textarea)
        .placeholder(placeholder)
        .build()
}

/// The date field prefilled with today's date.
fn current_date() -> FieldDescriptor {
    FieldDescriptor::builder("current_date", "Current Date", FieldType::Text)
        .default_today()
        .build()
}
