//! Loading and parsing of `.properties` configuration files.
//!
//! The dialect is the minimal key/value subset: one entry per line, key and
//! value separated by the first `=` or `:`, surrounding whitespace trimmed,
//! blank lines and lines starting with `#` or `!` skipped. Later entries for
//! the same key overwrite earlier ones.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use crate::error::MultabError;
use crate::Result;

/// An in-memory view of a parsed properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    entries: HashMap<String, String>,
}

impl Properties {
    /// Read and parse the properties file at `path`.
    ///
    /// A file missing at read time is reported as
    /// [`MultabError::ConfigNotFound`]; any other read failure is
    /// [`MultabError::ConfigRead`] with the io error attached.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(source) if source.kind() == io::ErrorKind::NotFound => {
                return Err(MultabError::ConfigNotFound(path.to_path_buf()));
            }
            Err(source) => {
                return Err(MultabError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        text.parse()
    }

    /// Look up a key, returning `None` if it is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key that the caller cannot proceed without.
    pub fn require(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| MultabError::MissingKey(key.to_string()))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromStr for Properties {
    type Err = MultabError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut entries = HashMap::new();
        for (index, raw_line) in s.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            let separator = line
                .find(['=', ':'])
                .ok_or_else(|| MultabError::ConfigParse {
                    line: index + 1,
                    text: line.to_string(),
                })?;
            let key = line[..separator].trim().to_string();
            let value = line[separator + 1..].trim().to_string();
            entries.insert(key, value);
        }
        Ok(Properties { entries })
    }
}
