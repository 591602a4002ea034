// propfile/src/entry.rs

//! A single logical line of a properties file.

use crate::error::{PropertiesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker that starts a comment line.
pub const COMMENT_PREFIX: char = '#';

/// Separator between key and value.
pub const SEPARATOR: char = '=';

/// One line of a properties document, either a comment or a key-value pair.
///
/// Blank and malformed lines have no representation: they are dropped on
/// read and never written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// Comment text without the leading `#` and the single space after it.
    Comment { text: String },
    /// A `key=value` pair, neither side trimmed.
    KeyValue { key: String, value: String },
}

impl Entry {
    /// Create a comment entry.
    pub fn comment<S: Into<String>>(text: S) -> Self {
        Entry::Comment { text: text.into() }
    }

    /// Create a key-value entry.
    pub fn key_value<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Entry::KeyValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Classify one line (without its line terminator).
    ///
    /// Returns `None` for lines that are neither a comment nor a pair with a
    /// non-empty key: blank lines, `=value`, and text without any `=`.
    ///
    /// ```
    /// use propfile::Entry;
    ///
    /// assert_eq!(Entry::parse_line("# hello"), Some(Entry::comment("hello")));
    /// assert_eq!(Entry::parse_line("url=a=b"), Some(Entry::key_value("url", "a=b")));
    /// assert_eq!(Entry::parse_line("justtext"), None);
    /// ```
    pub fn parse_line(line: &str) -> Option<Entry> {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(rest) = line.strip_prefix(COMMENT_PREFIX) {
            let text = rest.strip_prefix(' ').unwrap_or(rest);
            return Some(Entry::comment(text));
        }

        match line.split_once(SEPARATOR) {
            Some((key, value)) if !key.is_empty() => Some(Entry::key_value(key, value)),
            _ => None,
        }
    }

    /// Check whether this is a comment.
    pub fn is_comment(&self) -> bool {
        matches!(self, Entry::Comment { .. })
    }

    /// Key of a key-value entry.
    pub fn key(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { key, .. } => Some(key),
            Entry::Comment { .. } => None,
        }
    }

    /// Value of a key-value entry.
    pub fn value(&self) -> Option<&str> {
        match self {
            Entry::KeyValue { value, .. } => Some(value),
            Entry::Comment { .. } => None,
        }
    }

    /// Check that the entry is written as one line that parses back to itself.
    pub fn validate(&self) -> Result<()> {
        match self {
            Entry::Comment { text } => validate_comment(text),
            Entry::KeyValue { key, value } => validate_pair(key, value),
        }
    }
}

/// Renders the entry as it is written to disk, without the trailing newline.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Comment { text } => write!(f, "{} {}", COMMENT_PREFIX, text),
            Entry::KeyValue { key, value } => write!(f, "{}{}{}", key, SEPARATOR, value),
        }
    }
}

/// Check that comment text fits on a single line.
pub fn validate_comment(text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(PropertiesError::invalid_argument(
            format!("{}{}", COMMENT_PREFIX, text),
            "comment must not contain a line break",
        ));
    }
    Ok(())
}

/// Check that a pair survives a save and reload as the same single entry.
pub fn validate_pair(key: &str, value: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PropertiesError::invalid_argument(key, "key must not be empty"));
    }
    if key.starts_with(COMMENT_PREFIX) {
        return Err(PropertiesError::invalid_argument(
            key,
            "key must not start with '#'",
        ));
    }
    if key.contains(SEPARATOR) {
        return Err(PropertiesError::invalid_argument(
            key,
            "key must not contain '='",
        ));
    }
    if key.contains(['\n', '\r']) {
        return Err(PropertiesError::invalid_argument(
            key,
            "key must not contain a line break",
        ));
    }
    if value.contains(['\n', '\r']) {
        return Err(PropertiesError::invalid_argument(
            key,
            "value must not contain a line break",
        ));
    }
    Ok(())
}
