//! Data model for extracted strings and their usage metadata.
//!
//! The extraction step (an external tool) leaves behind a JSON object mapping
//! each raw string to its usage metadata:
//!
//! ```json
//! {
//!     "Hello %s": {
//!         "uses": [
//!             {"file": "src/greeting.c", "line": 12}
//!         ]
//!     }
//! }
//! ```
//!
//! [`Catalog`] reads that file and preserves its entry order, so diagnostics
//! and processing follow the order the extractor discovered the strings in.

use std::{
    fs::File,
    io::{BufRead, BufReader, Cursor},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// One recorded occurrence of a string in the source tree.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UsageSite {
    /// Path of the file, relative to the library root.
    pub file: String,
    /// 1-based line number.
    pub line: u32,
}

/// Usage metadata recorded for one extracted string.
///
/// Sites are kept in discovery order and are not deduplicated; a string used
/// twice on the same line legitimately appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringUses {
    #[serde(default)]
    pub uses: Vec<UsageSite>,
}

/// The ordered mapping of raw strings to usage metadata produced by the
/// extraction step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<(String, StringUses)>,
}

impl Catalog {
    /// Reads a catalog from the extraction output file.
    ///
    /// A missing file is reported as [`Error::MissingExtraction`] naming the
    /// path, since it almost always means the extraction step did not run.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::MissingExtraction(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Parses a catalog from any reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        // serde_json is built with `preserve_order`, so the map iterates in
        // the order entries appear in the file.
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_reader(reader)?;

        let mut entries = Vec::with_capacity(raw.len());
        for (string, value) in raw {
            let uses: StringUses =
                serde_json::from_value(value).map_err(|e| Error::InvalidCatalog {
                    string: string.clone(),
                    message: e.to_string(),
                })?;
            entries.push((string, uses));
        }

        Ok(Catalog { entries })
    }

    /// Parses a catalog from a string.
    pub fn from_str(s: &str) -> Result<Self, Error> {
        Self::from_reader(Cursor::new(s))
    }

    /// Number of distinct strings in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in the order they appeared in the input.
    pub fn iter(&self) -> std::slice::Iter<'_, (String, StringUses)> {
        self.entries.iter()
    }
}

impl FromIterator<(String, StringUses)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, StringUses)>>(iter: T) -> Self {
        Catalog {
            entries: iter.into_iter().collect(),
        }
    }
}
