//! Proofreading prompt definition.

use super::{PromptDefinition, current_date, user_question};
use crate::domains::prompts::descriptor::FieldDescriptor;

pub struct ProofreadingPrompt;

impl PromptDefinition for ProofreadingPrompt {
    const ID: &'static str = "proofreading";
    const NAME: &'static str = "Proofreading";
    const DESCRIPTION: &'static str = "Strict pattern matching for spelling corrections.";
    const FILENAME: &'static str = "amar_ujala_proofreading.md";

    fn inputs() -> Vec<FieldDescriptor> {
        vec![
            user_question("Article Text", "Paste text to proofread..."),
            current_date(),
        ]
    }
}
