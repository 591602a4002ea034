// propfile/src/lib.rs

//! A small library for Java-style `.properties` files.
//!
//! This library provides functionality to:
//! - Load `key=value` lines and `#` comments in their original order
//! - Query single values or the merged key-value mapping
//! - Update or add values without reordering untouched lines
//! - Rewrite the bound file from the in-memory entries
//!
//! Blank lines, `=value` lines and lines without `=` are dropped on read.
//! Inline comments, multi-line values and escape sequences are not interpreted.

pub mod entry;
pub mod error;
pub mod parser;
pub mod store;

use std::io::Write;
use std::path::Path;

pub use entry::Entry;
pub use error::{PropertiesError, Result};
pub use store::{PropertiesStore, ReloadMode};

/// Open a properties file and bind a store to it.
///
/// # Examples
///
/// ```no_run
/// fn main() -> Result<(), propfile::PropertiesError> {
///     let mut store = propfile::read("app.properties")?;
///     store.set_one("debug", "true")?;
///     store.save()?;
///     Ok(())
/// }
/// ```
pub fn read<P: AsRef<Path>>(path: P) -> Result<PropertiesStore> {
    PropertiesStore::open(path)
}

/// Parse properties text into entries.
///
/// # Examples
///
/// ```
/// use propfile::Entry;
///
/// let entries = propfile::reads("# hello\nfoo=bar\n");
/// assert_eq!(entries, vec![Entry::comment("hello"), Entry::key_value("foo", "bar")]);
/// ```
pub fn reads(content: &str) -> Vec<Entry> {
    parser::parse_str(content)
}

/// Render entries as properties text, one newline-terminated line each.
///
/// Fails with [`PropertiesError::InvalidArgument`] if an entry would not
/// parse back as itself, e.g. a comment containing a line break.
pub fn to_string(entries: &[Entry]) -> Result<String> {
    parser::render(entries)
}

/// Write entries to any writer implementing the Write trait.
pub fn write_to_writer<W: Write>(entries: &[Entry], writer: &mut W) -> Result<()> {
    writer.write_all(parser::render(entries)?.as_bytes())?;
    Ok(())
}

#[cfg(feature = "json")]
/// Convert entries to a JSON string.
pub fn to_json(entries: &[Entry]) -> Result<String> {
    serde_json::to_string_pretty(entries).map_err(PropertiesError::from)
}

#[cfg(feature = "json")]
/// Parse entries from a JSON string.
pub fn from_json(json: &str) -> Result<Vec<Entry>> {
    serde_json::from_str(json).map_err(PropertiesError::from)
}
