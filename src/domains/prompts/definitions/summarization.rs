//! Summarization prompt definition.

use super::{PromptDefinition, current_date, user_question};
use crate::domains::prompts::descriptor::{FieldDescriptor, FieldType};

/// Summarizes an article within a word budget, optionally with prior context.
pub struct SummarizationPrompt;

impl PromptDefinition for SummarizationPrompt {
    const ID: &'static str = "summarization";
    const NAME: &'static str = "Summarization";
    const DESCRIPTION: &'static str = "Generates strict summaries with word count limits.";
    const FILENAME: &'static str = "amar_ujala_summarization.md";

    fn inputs() -> Vec<FieldDescriptor> {
        vec![
            user_question("Article Text", "Paste article..."),
            FieldDescriptor::builder("word_count", "Target Word Count", FieldType::Select)
                .default_value("200")
                .options([
                    ("100", "100 words"),
                    ("200", "200 words"),
                    ("300", "300 words"),
                    ("400", "400 words"),
                    ("500", "500 words"),
                    ("800", "800 words"),
                ])
                .build(),
            current_date(),
            FieldDescriptor::builder("chat_history", "Chat History (Optional)", FieldType::Textarea)
                .placeholder("Previous context...")
                .build(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarization_metadata() {
        let inputs = SummarizationPrompt::inputs();
        let names: Vec<_> = inputs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(
            names,
            ["user_question", "word_count", "current_date", "chat_history"]
        );
        assert_eq!(inputs[1].options().map(<[_]>::len), Some(6));
    }
}
