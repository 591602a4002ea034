// propfile/src/store.rs

//! The file-backed properties store.

use crate::entry::{validate_pair, Entry};
use crate::error::{PropertiesError, Result};
use crate::parser::{parse_reader, render};
use linked_hash_map::LinkedHashMap;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// How freshly parsed entries are combined with the ones already loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReloadMode {
    /// Discard current entries, including unsaved changes
    #[default]
    Replace,
    /// Keep current entries and add the parsed ones after them
    Append,
}

/// An ordered list of comments and key-value pairs bound to one file.
///
/// The entry order is the document order. Lookups resolve duplicate keys to
/// the last occurrence, updates touch the first occurrence, and nothing is
/// written back until [`PropertiesStore::save`] is called.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertiesStore {
    path: PathBuf,
    entries: Vec<Entry>,
}

impl PropertiesStore {
    /// Bind a store to `path` and load its contents.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// fn main() -> Result<(), propfile::PropertiesError> {
    ///     let store = propfile::PropertiesStore::open("app.properties")?;
    ///     println!("{}", store);
    ///     Ok(())
    /// }
    /// ```
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut store = Self {
            path: path.as_ref().to_path_buf(),
            entries: Vec::new(),
        };
        store.reload(ReloadMode::Replace)?;
        Ok(store)
    }

    /// Re-read the bound file.
    pub fn reload(&mut self, mode: ReloadMode) -> Result<&[Entry]> {
        let path = self.path.clone();
        self.reload_from(path, mode)
    }

    /// Read entries from `path` without changing the bound path.
    ///
    /// With [`ReloadMode::Append`], reading the same file twice yields every
    /// entry twice.
    pub fn reload_from<P: AsRef<Path>>(&mut self, path: P, mode: ReloadMode) -> Result<&[Entry]> {
        let path = path.as_ref();
        let file = fs_err::File::open(path)?;
        let parsed = parse_reader(BufReader::new(file))?;

        debug!(
            "Read {} entries from {} ({:?})",
            parsed.len(),
            path.display(),
            mode
        );

        match mode {
            ReloadMode::Replace => self.entries = parsed,
            ReloadMode::Append => self.entries.extend(parsed),
        }
        Ok(&self.entries)
    }

    /// Overwrite the bound file with the current entries.
    ///
    /// Every entry is followed by `\n`; an empty store produces an empty file.
    /// The file is truncated and rewritten in place. Entries that would not
    /// reload as themselves fail with [`PropertiesError::InvalidArgument`]
    /// before the file is touched.
    pub fn save(&self) -> Result<()> {
        let content = render(&self.entries)?;
        fs_err::write(&self.path, content)?;
        debug!(
            "Wrote {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }

    /// All key-value pairs, with later duplicates overriding earlier ones.
    ///
    /// Keys are ordered by their first occurrence.
    pub fn get_all(&self) -> LinkedHashMap<String, String> {
        let mut all: LinkedHashMap<String, String> = LinkedHashMap::new();
        for entry in &self.entries {
            if let Entry::KeyValue { key, value } = entry {
                // insert() would move an existing key to the back
                match all.get_mut(key) {
                    Some(slot) => *slot = value.clone(),
                    None => {
                        all.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        all
    }

    /// Value of `key`. With duplicate keys the last occurrence wins, same as
    /// [`PropertiesStore::get_all`].
    pub fn get(&self, key: &str) -> Result<&str> {
        self.entries
            .iter()
            .rev()
            .find_map(|entry| match entry {
                Entry::KeyValue { key: k, value } if k == key => Some(value.as_str()),
                _ => None,
            })
            .ok_or_else(|| PropertiesError::key_not_found(key))
    }

    /// Check whether any entry has `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|entry| entry.key() == Some(key))
    }

    /// Update or add several pairs and return how many were processed.
    ///
    /// For each pair the first entry with a matching key is updated in place;
    /// unknown keys are appended at the end. All pairs are checked before any
    /// is applied, so an invalid pair leaves the store untouched.
    ///
    /// ```
    /// # fn main() -> Result<(), propfile::PropertiesError> {
    /// let mut store = propfile::PropertiesStore::from_entries(
    ///     "app.properties",
    ///     propfile::reads("port=80\n"),
    /// );
    /// let count = store.set([("port", "8080"), ("host", "localhost")])?;
    ///
    /// assert_eq!(count, 2);
    /// assert_eq!(store.get("port")?, "8080");
    /// assert_eq!(store.len(), 2);
    /// # Ok(())
    /// # }
    /// ```
    pub fn set<I, K, V>(&mut self, pairs: I) -> Result<usize>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let pairs: Vec<(String, String)> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, value) in &pairs {
            validate_pair(key, value)?;
        }

        let count = pairs.len();
        for (key, value) in pairs {
            self.apply(key, value);
        }
        Ok(count)
    }

    /// Update or add a single pair.
    pub fn set_one<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) -> Result<()> {
        self.set([(key, value)]).map(|_| ())
    }

    fn apply(&mut self, key: String, value: String) {
        let existing = self.entries.iter_mut().find_map(|entry| match entry {
            Entry::KeyValue { key: k, value: v } if *k == key => Some(v),
            _ => None,
        });

        match existing {
            Some(slot) => {
                trace!("Updating '{}'", key);
                *slot = value;
            }
            None => {
                trace!("Appending '{}'", key);
                self.entries.push(Entry::KeyValue { key, value });
            }
        }
    }

    /// Build a store from already parsed entries without touching the disk.
    pub fn from_entries<P: AsRef<Path>>(path: P, entries: Vec<Entry>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            entries,
        }
    }

    /// The bound file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries, comments included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the store holds no entries, comments included.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Shows the merged key-value mapping, e.g. `{a: 1, b: 2}`.
impl fmt::Display for PropertiesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.get_all().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}
