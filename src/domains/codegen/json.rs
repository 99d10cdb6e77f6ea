//! JSON rendering compatible with Python's `json.dumps` defaults.
//!
//! Options arrays in the generated module have always been written by
//! `json.dumps`, so the output keeps its separators (`", "` and `": "`) and
//! its ASCII-only escaping.

use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

use super::error::CodegenError;

/// Serialize a value as `json.dumps(value)` would.
pub fn to_python_json<T>(value: &T) -> Result<String, CodegenError>
where
    T: ?Sized + Serialize,
{
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PythonFormatter);
    value.serialize(&mut serializer)?;
    // Every non-ASCII character was escaped by the formatter.
    Ok(buf.into_iter().map(char::from).collect())
}

/// `serde_json` formatter reproducing Python's default separators and
/// `ensure_ascii` escaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonFormatter;

impl Formatter for PythonFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (idx, ch) in fragment.char_indices() {
            if (' '..='~').contains(&ch) {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..idx])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = idx + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::prompts::SelectOption;

    #[test]
    fn test_options_use_python_separators() {
        let options = vec![
            SelectOption::new("100", "100 words"),
            SelectOption::new("200", "200 words"),
        ];
        assert_eq!(
            to_python_json(&options).unwrap(),
            r#"[{"value": "100", "label": "100 words"}, {"value": "200", "label": "200 words"}]"#
        );
    }

    #[test]
    fn test_empty_array() {
        let options: Vec<SelectOption> = Vec::new();
        assert_eq!(to_python_json(&options).unwrap(), "[]");
    }

    #[test]
    fn test_non_ascii_is_escaped() {
        assert_eq!(to_python_json("खबर").unwrap(), r#""\u0916\u092c\u0930""#);
        assert_eq!(to_python_json("é\u{7f}").unwrap(), r#""\u00e9\u007f""#);
    }

    #[test]
    fn test_astral_characters_use_surrogate_pairs() {
        assert_eq!(to_python_json("🙂").unwrap(), r#""\ud83d\ude42""#);
    }

    #[test]
    fn test_quotes_and_controls_are_escaped() {
        assert_eq!(to_python_json("a\"b\\c\n").unwrap(), r#""a\"b\\c\n""#);
    }
}
