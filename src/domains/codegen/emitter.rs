//! JavaScript source emission.
//!
//! Renders descriptors as object literals of the `PROMPTS` module. The layout
//! (indentation, trailing commas on field keys, key order) is part of the
//! output contract and must stay byte-stable.

use std::fmt::Write;

use super::error::CodegenError;
use super::json::to_python_json;
use crate::domains::prompts::{
    DefaultValue, FieldAttribute, FieldDescriptor, PromptDescriptor, TemplateContent,
};

/// Expression the front-end evaluates in place of a `Today` default.
pub const DATE_EXPRESSION: &str = "new Date().toLocaleDateString('en-IN')";

/// Opening line of the generated module.
pub const MODULE_HEADER: &str = "export const PROMPTS = [\n";

/// Closing line of the generated module.
pub const MODULE_FOOTER: &str = "];\n";

/// Render a double-quoted JavaScript string literal.
///
/// Only `\`, `"` and line breaks are escaped, so ordinary catalog text is
/// emitted verbatim.
pub fn render_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out.push('"');
    out
}

fn render_attribute(attribute: &FieldAttribute) -> Result<String, CodegenError> {
    let value = match attribute {
        FieldAttribute::Placeholder(text) => render_string_literal(text),
        FieldAttribute::DefaultValue(DefaultValue::Literal(text)) => render_string_literal(text),
        FieldAttribute::DefaultValue(DefaultValue::Today) => DATE_EXPRESSION.to_string(),
        FieldAttribute::Options(options) => to_python_json(options)?,
    };
    Ok(value)
}

/// Render one field object, without a trailing separator.
pub fn render_field(field: &FieldDescriptor) -> Result<String, CodegenError> {
    let mut out = String::from("      {\n");
    let mut key_line = |key: &str, value: &str| {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "        {key}: {value},");
    };

    key_line("name", &render_string_literal(&field.name));
    key_line("label", &render_string_literal(&field.label));
    key_line("type", &render_string_literal(field.field_type.as_str()));
    for attribute in &field.attributes {
        key_line(attribute.key(), &render_attribute(attribute)?);
    }

    out.push_str("      }");
    Ok(out)
}

/// Render one prompt object, without a trailing separator.
///
/// Keys are emitted as `id, name, description, inputs, template`.
pub fn render_prompt(
    prompt: &PromptDescriptor,
    template: &TemplateContent,
) -> Result<String, CodegenError> {
    let mut out = String::from("  {\n");
    let _ = writeln!(out, "    id: {},", render_string_literal(&prompt.id));
    let _ = writeln!(out, "    name: {},", render_string_literal(&prompt.name));
    let _ = writeln!(
        out,
        "    description: {},",
        render_string_literal(&prompt.description)
    );

    out.push_str("    inputs: [\n");
    let count = prompt.inputs.len();
    for (idx, field) in prompt.inputs.iter().enumerate() {
        out.push_str(&render_field(field)?);
        if idx + 1 < count {
            out.push(',');
        }
        out.push('\n');
    }
    out.push_str("    ],\n");

    let _ = writeln!(out, "    template: `{}`", template.escaped());
    out.push_str("  }");
    Ok(out)
}

/// Wrap rendered prompt objects into the `PROMPTS` module.
pub fn render_module(entries: &[String]) -> String {
    let mut out = String::from(MODULE_HEADER);
    out.push_str(&entries.join(",\n"));
    if !entries.is_empty() {
        out.push('\n');
    }
    out.push_str(MODULE_FOOTER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::{FieldType, catalog};

    fn proofreading() -> PromptDescriptor {
        catalog()
            .into_iter()
            .find(|p| p.id == "proofreading")
            .unwrap()
    }

    #[test]
    fn test_string_literal_plain_text_is_verbatim() {
        assert_eq!(
            render_string_literal("Paste press release here..."),
            "\"Paste press release here...\""
        );
    }

    #[test]
    fn test_string_literal_escapes_quotes() {
        assert_eq!(render_string_literal(r#"say "hi" \o/"#), r#""say \"hi\" \\o/""#);
    }

    #[test]
    fn test_field_with_sentinel_default() {
        let field = FieldDescriptor::builder("current_date", "Current Date", FieldType::Text)
            .default_value("DATE_PLACEHOLDER")
            .build();

        let rendered = render_field(&field).unwrap();
        assert_eq!(
            rendered,
            "      {\n\
             \x20       name: \"current_date\",\n\
             \x20       label: \"Current Date\",\n\
             \x20       type: \"text\",\n\
             \x20       defaultValue: new Date().toLocaleDateString('en-IN'),\n\
             \x20     }"
        );
        assert!(!rendered.contains("\"DATE_PLACEHOLDER\""));
    }

    #[test]
    fn test_field_with_options() {
        let field = FieldDescriptor::builder("word_count", "Target Word Count", FieldType::Select)
            .default_value("200")
            .options([("100", "100 words")])
            .build();

        let rendered = render_field(&field).unwrap();
        assert!(rendered.contains("        defaultValue: \"200\",\n"));
        assert!(
            rendered.contains("        options: [{\"value\": \"100\", \"label\": \"100 words\"}],\n")
        );
    }

    #[test]
    fn test_prompt_layout() {
        let template = TemplateContent::new("Fix `this`.");
        let rendered = render_prompt(&proofreading(), &template).unwrap();

        let expected = concat!(
            "  {\n",
            "    id: \"proofreading\",\n",
            "    name: \"Proofreading\",\n",
            "    description: \"Strict pattern matching for spelling corrections.\",\n",
            "    inputs: [\n",
            "      {\n",
            "        name: \"user_question\",\n",
            "        label: \"Article Text\",\n",
            "        type: \"textarea\",\n",
            "        placeholder: \"Paste text to proofread...\",\n",
            "      },\n",
            "      {\n",
            "        name: \"current_date\",\n",
            "        label: \"Current Date\",\n",
            "        type: \"text\",\n",
            "        defaultValue: new Date().toLocaleDateString('en-IN'),\n",
            "      }\n",
            "    ],\n",
            "    template: `Fix \\`this\\`.`\n",
            "  }",
        );
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_prompt_without_inputs() {
        let mut prompt = proofreading();
        prompt.inputs.clear();

        let rendered = render_prompt(&prompt, &TemplateContent::new("")).unwrap();
        assert!(rendered.contains("    inputs: [\n    ],\n    template: ``\n"));
    }

    #[test]
    fn test_module_wrapping() {
        assert_eq!(render_module(&[]), "export const PROMPTS = [\n];\n");

        let entries = vec!["  {\n  }".to_string(), "  {\n  }".to_string()];
        assert_eq!(
            render_module(&entries),
            "export const PROMPTS = [\n  {\n  },\n  {\n  }\n];\n"
        );
    }
}
