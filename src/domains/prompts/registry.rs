//! Prompt Registry - central registration of all prompts.
//!
//! The order of `catalog()` is the order of the generated `PROMPTS` array.
//! When adding a new prompt:
//! 1. Create the prompt file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `catalog()` and `prompt_ids()`

use std::collections::HashSet;

use super::definitions::{
    CompressionPrompt, PrToNewsPrompt, PromptDefinition, ProofreadingPrompt, SummarizationPrompt,
};
use super::descriptor::{FieldAttribute, FieldType, PromptDescriptor};
use super::error::PromptError;

/// Build a PromptDescriptor from a PromptDefinition.
fn build_descriptor<P: PromptDefinition>() -> PromptDescriptor {
    PromptDescriptor {
        id: P::ID.to_string(),
        name: P::NAME.to_string(),
        description: P::DESCRIPTION.to_string(),
        filename: P::FILENAME.to_string(),
        inputs: P::inputs(),
    }
}

/// Get all registered prompts, in catalog order.
pub fn catalog() -> Vec<PromptDescriptor> {
    vec![
        build_descriptor::<PrToNewsPrompt>(),
        build_descriptor::<CompressionPrompt>(),
        build_descriptor::<ProofreadingPrompt>(),
        build_descriptor::<SummarizationPrompt>(),
    ]
}

/// Get the ids of all registered prompts, in catalog order.
pub fn prompt_ids() -> Vec<&'static str> {
    vec![
        PrToNewsPrompt::ID,
        CompressionPrompt::ID,
        ProofreadingPrompt::ID,
        SummarizationPrompt::ID,
    ]
}

/// Check the catalog invariants.
///
/// Ids must be unique, `id` and `filename` must be non-empty, and only
/// select fields may declare options.
pub fn validate_catalog(catalog: &[PromptDescriptor]) -> Result<(), PromptError> {
    let mut seen = HashSet::new();

    for prompt in catalog {
        if prompt.id.is_empty() {
            return Err(PromptError::EmptyKey {
                prompt: prompt.name.clone(),
                key: "id",
            });
        }
        if prompt.filename.is_empty() {
            return Err(PromptError::EmptyKey {
                prompt: prompt.id.clone(),
                key: "filename",
            });
        }
        if !seen.insert(prompt.id.as_str()) {
            return Err(PromptError::duplicate_id(&prompt.id));
        }

        for field in &prompt.inputs {
            let has_options = field
                .attributes
                .iter()
                .any(|attr| matches!(attr, FieldAttribute::Options(_)));
            if has_options && field.field_type != FieldType::Select {
                return Err(PromptError::OptionsOnNonSelect {
                    prompt: prompt.id.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    Ok(())
}
