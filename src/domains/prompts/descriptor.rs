//! Prompt and field descriptors.
//!
//! A [`PromptDescriptor`] is the compiled-in metadata of one prompt. Its
//! [`FieldDescriptor`]s describe the form the front-end renders, in order.

use serde::Serialize;

/// Reserved default value meaning "today's date when the module is evaluated".
pub const DATE_SENTINEL: &str = "DATE_PLACEHOLDER";

/// Static metadata describing one prompt of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDescriptor {
    /// Stable identifier of the prompt type.
    pub id: String,

    /// Human-readable display name.
    pub name: String,

    /// One-line summary.
    pub description: String,

    /// Markdown template file, relative to the templates directory.
    pub filename: String,

    /// Form fields, in render order.
    pub inputs: Vec<FieldDescriptor>,
}

/// Kind of form control the front-end renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Textarea,
    Text,
    Select,
    Number,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Textarea => "textarea",
            Self::Text => "text",
            Self::Select => "select",
            Self::Number => "number",
        }
    }
}

/// One `{value, label}` choice of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Pre-filled value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// Emitted verbatim as a string.
    Literal(String),
    /// Computed by the front-end as the current date in the `en-IN` locale.
    Today,
}

impl DefaultValue {
    /// Interpret a raw default, recognizing [`DATE_SENTINEL`].
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw == DATE_SENTINEL {
            Self::Today
        } else {
            Self::Literal(raw)
        }
    }
}

/// Optional attribute of a field. Attributes keep their declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAttribute {
    Placeholder(String),
    DefaultValue(DefaultValue),
    Options(Vec<SelectOption>),
}

impl FieldAttribute {
    /// Key of the attribute in the generated object.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Placeholder(_) => "placeholder",
            Self::DefaultValue(_) => "defaultValue",
            Self::Options(_) => "options",
        }
    }
}

/// One form field of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Key the value is bound to in the template.
    pub name: String,

    /// Human-readable prompt text.
    pub label: String,

    /// Form control kind.
    pub field_type: FieldType,

    /// Optional attributes, in declaration order.
    pub attributes: Vec<FieldAttribute>,
}

impl FieldDescriptor {
    /// Start building a field with its three mandatory keys.
    pub fn builder(
        name: impl Into<String>,
        label: impl Into<String>,
        field_type: FieldType,
    ) -> FieldDescriptorBuilder {
        FieldDescriptorBuilder {
            field: Self {
                name: name.into(),
                label: label.into(),
                field_type,
                attributes: Vec::new(),
            },
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.attributes.iter().find_map(|attr| match attr {
            FieldAttribute::Placeholder(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn default_value(&self) -> Option<&DefaultValue> {
        self.attributes.iter().find_map(|attr| match attr {
            FieldAttribute::DefaultValue(value) => Some(value),
            _ => None,
        })
    }

    pub fn options(&self) -> Option<&[SelectOption]> {
        self.attributes.iter().find_map(|attr| match attr {
            FieldAttribute::Options(options) => Some(options.as_slice()),
            _ => None,
        })
    }
}

/// Builder for [`FieldDescriptor`]. Each call appends one attribute.
pub struct FieldDescriptorBuilder {
    field: FieldDescriptor,
}

impl FieldDescriptorBuilder {
    /// Add hint text shown while the field is empty.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.field
            .attributes
            .push(FieldAttribute::Placeholder(text.into()));
        self
    }

    /// Add a default value. [`DATE_SENTINEL`] becomes [`DefaultValue::Today`].
    pub fn default_value(mut self, raw: impl Into<String>) -> Self {
        self.field
            .attributes
            .push(FieldAttribute::DefaultValue(DefaultValue::parse(raw)));
        self
    }

    /// Default the field to the current date.
    pub fn default_today(mut self) -> Self {
        self.field
            .attributes
            .push(FieldAttribute::DefaultValue(DefaultValue::Today));
        self
    }

    /// Add the choices of a select field from `(value, label)` pairs.
    pub fn options<V, L>(mut self, options: impl IntoIterator<Item = (V, L)>) -> Self
    where
        V: Into<String>,
        L: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(value, label)| SelectOption::new(value, label))
            .collect();
        self.field.attributes.push(FieldAttribute::Options(options));
        self
    }

    /// Build the field descriptor.
    pub fn build(self) -> FieldDescriptor {
        self.field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_recognized_as_today() {
        assert_eq!(DefaultValue::parse(DATE_SENTINEL), DefaultValue::Today);
        assert_eq!(
            DefaultValue::parse("300"),
            DefaultValue::Literal("300".to_string())
        );
    }

    #[test]
    fn test_sentinel_on_placeholder_stays_literal() {
        let field = FieldDescriptor::builder("d", "Date", FieldType::Text)
            .placeholder(DATE_SENTINEL)
            .build();
        assert_eq!(field.placeholder(), Some(DATE_SENTINEL));
        assert!(field.default_value().is_none());
    }

    #[test]
    fn test_builder_preserves_attribute_order() {
        let field = FieldDescriptor::builder("word_count", "Words", FieldType::Select)
            .default_value("200")
            .options([("100", "100 words"), ("200", "200 words")])
            .placeholder("pick one")
            .build();

        let keys: Vec<_> = field.attributes.iter().map(FieldAttribute::key).collect();
        assert_eq!(keys, ["defaultValue", "options", "placeholder"]);
        assert_eq!(field.options().map(<[_]>::len), Some(2));
        assert_eq!(field.options().unwrap()[1].label, "200 words");
    }

    #[test]
    fn test_field_type_names() {
        assert_eq!(FieldType::Textarea.as_str(), "textarea");
        assert_eq!(FieldType::Number.as_str(), "number");
    }
}
