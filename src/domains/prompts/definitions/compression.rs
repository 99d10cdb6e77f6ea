//! Article compression prompt definition.

use super::{PromptDefinition, current_date, user_question};
use crate::domains::prompts::descriptor::{FieldDescriptor, FieldType};

/// Compresses an article to a percentage of its length.
pub struct CompressionPrompt;

impl PromptDefinition for CompressionPrompt {
    const ID: &'static str = "compression";
    const NAME: &'static str = "Article Compression";
    const DESCRIPTION: &'static str = "Compresses articles to a specific percentage.";
    const FILENAME: &'static str = "amar_ujala_compression.md";

    fn inputs() -> Vec<FieldDescriptor> {
        vec![
            user_question("Original Article", "Paste article here..."),
            FieldDescriptor::builder("compression_percent", "Compression %", FieldType::Number)
                .placeholder("e.g., 50")
                .build(),
            current_date(),
        ]
    }
}
