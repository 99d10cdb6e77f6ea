//! Prompt template loading.
//!
//! Templates are markdown files read whole from disk and embedded in the
//! generated module inside a JavaScript template literal, so two sequences
//! must be escaped: backticks and `${`.

use std::path::Path;
use tracing::debug;

use super::error::PromptError;

/// Raw text of a markdown template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContent {
    text: String,
}

impl TemplateContent {
    /// Wrap already-loaded text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: normalize_newlines(&text.into()),
        }
    }

    /// Read a template file as UTF-8 text.
    ///
    /// Missing files, permission errors and invalid UTF-8 all surface as
    /// [`PromptError::TemplateRead`].
    pub fn load(path: &Path) -> Result<Self, PromptError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PromptError::template_read(path, e))?;
        debug!("Loaded template {} ({} bytes)", path.display(), text.len());
        Ok(Self::new(text))
    }

    /// The text as loaded, before escaping.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The text escaped for embedding in a template literal.
    pub fn escaped(&self) -> String {
        escape_template_literal(&self.text)
    }
}

/// Escape text for a JavaScript template literal.
///
/// Backticks are escaped first, then every `${`. No other character is touched.
pub fn escape_template_literal(text: &str) -> String {
    text.replace('`', "\\`").replace("${", "\\${")
}

/// Translate `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
