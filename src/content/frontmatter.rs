//! Front-matter parsing
//!
//! A content file may open with a fenced YAML block:
//!
//! ```text
//! ---
//! title: Hello World
//! date: 2023-01-01
//! ---
//!
//! Markdown body...
//! ```
//!
//! The block is only recognized when the opening fence is the very first
//! line of the file. Keys keep their file order, and values stay verbatim
//! strings where YAML allows it (`2023-01-01` is a string, not a date).

use indexmap::IndexMap;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Errors from reading a front-matter block
#[derive(Error, Debug)]
pub enum ParseError {
    /// An opening fence without a matching closing fence
    #[error("Unterminated front-matter block: missing closing `---` fence")]
    Unterminated,
    /// A mapping key that is not a plain string
    #[error("Front-matter key is not a string: {0}")]
    InvalidKey(String),
    /// The block is not valid YAML, or not a mapping at all
    #[error("Invalid front-matter YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Front-matter data from a content file
///
/// Schema-free: any keys are allowed, and insertion order matches the
/// order they appear in the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    data: IndexMap<String, Value>,
}

impl FrontMatter {
    /// Parse front-matter from a raw content string.
    ///
    /// Returns the metadata and the remaining Markdown body. A file
    /// without a block yields empty metadata and the full text as body.
    /// A block that opens but never closes, or whose YAML is malformed,
    /// is an error.
    pub fn parse(raw: &str) -> Result<(Self, &str), ParseError> {
        let Some(rest) = raw.strip_prefix("---") else {
            return Ok((Self::default(), raw));
        };

        // A longer dash run is a thematic break, not a fence
        if rest.starts_with('-') {
            return Ok((Self::default(), raw));
        }

        // The opening fence must be alone on its line
        let rest = match rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) {
            Some(rest) => rest,
            None => return Ok((Self::default(), raw)),
        };

        let (yaml, body) = split_at_closing_fence(rest).ok_or(ParseError::Unterminated)?;
        let body = body.trim_start_matches(['\n', '\r']);

        if yaml.trim().is_empty() {
            return Ok((Self::default(), body));
        }

        // serde_yaml rejects duplicate keys while building the mapping
        let mapping: Mapping = serde_yaml::from_str(yaml)?;
        let mut data = IndexMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            match key {
                Value::String(key) => {
                    data.insert(key, value);
                }
                other => return Err(ParseError::InvalidKey(format!("{:?}", other))),
            }
        }

        Ok((Self { data }, body))
    }

    /// Look up a key and render its value as text.
    ///
    /// Strings come back verbatim; numbers and booleans are formatted.
    /// Null and structured values have no single text form and yield
    /// `None`, the same as an absent key.
    pub fn get_str(&self, key: &str) -> Option<String> {
        self.data.get(key).and_then(value_to_string)
    }

    /// Iterate renderable entries in file order
    pub fn scalars(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.data
            .iter()
            .filter_map(|(k, v)| value_to_string(v).map(|s| (k.as_str(), s)))
    }

    /// Number of keys in the block
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the file had no metadata (or an empty block)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Find the first line that is exactly `---` and split around it.
///
/// Returns the YAML text before the fence and the body after it.
fn split_at_closing_fence(text: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return Some((&text[..offset], &text[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let content = "---\ntitle: Hello World\ndate: 2023-01-01\n---\n\n# Hi\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Hello World".to_string()));
        assert_eq!(fm.get_str("date"), Some("2023-01-01".to_string()));
        assert_eq!(body, "# Hi\n");
    }

    #[test]
    fn test_keys_keep_file_order() {
        let content = "---\nzebra: one\napple: two\nmango: three\n---\nbody";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        let keys: Vec<&str> = fm.scalars().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_no_block_returns_full_body() {
        let content = "# Just Markdown\n\nNo metadata here.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_block_must_open_on_first_line() {
        let content = "\n---\ntitle: Late\n---\nbody";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_thematic_break_is_not_a_fence() {
        let content = "----\n\nA ruled page.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_opening_fence_with_trailing_text_is_prose() {
        let content = "--- draft notes\n\nbody\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, content);
    }

    #[test]
    fn test_empty_block() {
        let content = "---\n---\nThe body.\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert!(fm.is_empty());
        assert_eq!(body, "The body.\n");
    }

    #[test]
    fn test_unterminated_block_is_an_error() {
        let content = "---\ntitle: Never closed\n\nbody body body\n";

        let err = FrontMatter::parse(content).unwrap_err();
        assert!(matches!(err, ParseError::Unterminated));
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let content = "---\ntitle: [unclosed\n---\nbody";

        assert!(matches!(
            FrontMatter::parse(content),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_non_mapping_yaml_is_an_error() {
        let content = "---\njust a sentence, not a mapping\n---\nbody";

        assert!(matches!(
            FrontMatter::parse(content),
            Err(ParseError::Yaml(_))
        ));
    }

    #[test]
    fn test_duplicate_keys_are_an_error() {
        let content = "---\ntitle: First\ntitle: Second\n---\nbody";

        assert!(FrontMatter::parse(content).is_err());
    }

    #[test]
    fn test_scalar_values_render_as_text() {
        let content = "---\ntitle: \"Quoted: with colon\"\nyear: 2023\ndraft: false\n---\n";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Quoted: with colon".to_string()));
        assert_eq!(fm.get_str("year"), Some("2023".to_string()));
        assert_eq!(fm.get_str("draft"), Some("false".to_string()));
    }

    #[test]
    fn test_null_and_structured_values_have_no_text_form() {
        let content = "---\nsubtitle:\ntags:\n  - a\n  - b\ntitle: Real\n---\n";

        let (fm, _) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("subtitle"), None);
        assert_eq!(fm.get_str("tags"), None);
        assert_eq!(fm.len(), 3);

        let rendered: Vec<&str> = fm.scalars().map(|(k, _)| k).collect();
        assert_eq!(rendered, vec!["title"]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "---\r\ntitle: Windows\r\n---\r\nbody\r\n";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Windows".to_string()));
        assert_eq!(body, "body\r\n");
    }

    #[test]
    fn test_fence_at_end_of_file() {
        let content = "---\ntitle: Tail\n---";

        let (fm, body) = FrontMatter::parse(content).unwrap();
        assert_eq!(fm.get_str("title"), Some("Tail".to_string()));
        assert_eq!(body, "");
    }
}
