//! Press release to news article prompt definition.

use super::{PromptDefinition, current_date, user_question};
use crate::domains::prompts::descriptor::{FieldDescriptor, FieldType};

/// Rewrites a press release as a news article of a chosen length.
pub struct PrToNewsPrompt;

impl PromptDefinition for PrToNewsPrompt {
    const ID: &'static str = "pr-to-news";
    const NAME: &'static str = "PR to News";
    const DESCRIPTION: &'static str = "Converts press releases into news articles.";
    const FILENAME: &'static str = "amar_ujala_pr_to_news.md";

    fn inputs() -> Vec<FieldDescriptor> {
        vec![
            user_question("Press Release Text", "Paste press release here..."),
            FieldDescriptor::builder("word_count", "Target Word Count", FieldType::Select)
                .default_value("300")
                .options([
                    ("100", "100 (Flash News)"),
                    ("150", "150 (Brief)"),
                    ("250", "250 (Quick)"),
                    ("350", "350 (Policy/Public)"),
                    ("500", "500 (Authority)"),
                    ("650", "650 (Detailed)"),
                    ("800", "800 (Comprehensive)"),
                    ("1000", "1000+ (Deep Feature)"),
                ])
                .build(),
            current_date(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::descriptor::DefaultValue;

    #[test]
    fn test_pr_to_news_metadata() {
        assert_eq!(PrToNewsPrompt::ID, "pr-to-news");
        assert_eq!(PrToNewsPrompt::FILENAME, "amar_ujala_pr_to_news.md");

        let inputs = PrToNewsPrompt::inputs();
        let names: Vec<_> = inputs.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["user_question", "word_count", "current_date"]);

        let word_count = &inputs[1];
        assert_eq!(
            word_count.default_value(),
            Some(&DefaultValue::Literal("300".to_string()))
        );
        let options = word_count.options().unwrap();
        assert_eq!(options.len(), 8);
        assert_eq!(options[7].value, "1000");
        assert_eq!(inputs[2].default_value(), Some(&DefaultValue::Today));
    }
}
