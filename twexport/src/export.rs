//! The export pass: catalog in, three aligned dictionaries out.

use std::collections::BTreeMap;

use crate::{
    context::build_context,
    key::string_key,
    rewrite::{Unsupported, rewrite},
    types::Catalog,
};

/// The three dictionaries produced by an export run, all keyed by the same
/// content-derived string keys.
///
/// Invariant: the three maps always have identical key sets. A string that
/// cannot be rewritten is left out of all three, so an entry present under a
/// key in one artifact is always present under that key in the others.
///
/// `BTreeMap` keeps keys in ascending order, so serializing an artifact
/// yields the same bytes on every run over the same input. Exported files are
/// kept under version control, and stable ordering is what keeps their diffs
/// readable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportBundle {
    /// Translatable strings in positional-placeholder form (`en.json`).
    pub strings: BTreeMap<String, String>,
    /// "Used in:" help blocks for translators (`qqq.json`).
    pub context: BTreeMap<String, String>,
    /// The raw original strings (`raw.json`).
    pub raw: BTreeMap<String, String>,
}

/// One artifact of an [`ExportBundle`], paired with its output file name and
/// a short description for progress output.
#[derive(Debug, Clone, Copy)]
pub struct Artifact<'a> {
    pub name: &'static str,
    pub help: &'static str,
    pub data: &'a BTreeMap<String, String>,
}

impl ExportBundle {
    /// The bundle's artifacts in the order they are written to disk.
    pub fn artifacts(&self) -> [Artifact<'_>; 3] {
        [
            Artifact {
                name: "en.json",
                help: "English strings",
                data: &self.strings,
            },
            Artifact {
                name: "qqq.json",
                help: "Context strings",
                data: &self.context,
            },
            Artifact {
                name: "raw.json",
                help: "Raw strings",
                data: &self.raw,
            },
        ]
    }
}

/// A catalog record dropped from the export, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedString {
    /// The raw string as it appeared in the catalog.
    pub string: String,
    pub reason: Unsupported,
}

/// Outcome of one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub bundle: ExportBundle,
    /// Number of catalog records read, before any were skipped.
    pub total_read: usize,
    /// Records dropped as unsupported, in catalog order. These belong in the
    /// run's diagnostic output; dropping a string silently would hide it from
    /// translators with no trace.
    pub skipped: Vec<SkippedString>,
}

/// Runs the export pass over a catalog.
///
/// Each record is processed independently: compute its key, rewrite its
/// placeholders, build its context block, and insert all three results under
/// the same key. An unsupported string skips the whole record and is recorded
/// in [`ExportReport::skipped`] instead.
pub fn export(catalog: &Catalog, browse_uri: Option<&str>) -> ExportReport {
    let mut bundle = ExportBundle::default();
    let mut skipped = Vec::new();

    for (string, meta) in catalog.iter() {
        let key = string_key(string);

        match rewrite(string) {
            Ok(rewritten) => {
                bundle.strings.insert(key.clone(), rewritten);
                bundle
                    .context
                    .insert(key.clone(), build_context(&meta.uses, browse_uri));
                bundle.raw.insert(key, string.clone());
            }
            Err(reason) => skipped.push(SkippedString {
                string: string.clone(),
                reason,
            }),
        }
    }

    ExportReport {
        bundle,
        total_read: catalog.len(),
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{StringUses, UsageSite};

    fn catalog(strings: &[&str]) -> Catalog {
        strings
            .iter()
            .map(|s| {
                (
                    s.to_string(),
                    StringUses {
                        uses: vec![UsageSite {
                            file: format!("src/{}.c", s.len()),
                            line: 1,
                        }],
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_all_three_maps_share_one_key_set() {
        let catalog = catalog(&[
            "Hello %s",
            "Cost: $5",     // skipped: contains "$"
            "Value: %f",    // skipped: unrecognized token
            "100%% done",
            "plain",
        ]);
        let report = export(&catalog, None);

        let keys: Vec<&String> = report.bundle.strings.keys().collect();
        assert_eq!(keys, report.bundle.context.keys().collect::<Vec<_>>());
        assert_eq!(keys, report.bundle.raw.keys().collect::<Vec<_>>());
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_skipped_records_are_reported_with_reasons() {
        let catalog = catalog(&["Cost: $5", "Value: %f", "ok"]);
        let report = export(&catalog, None);

        assert_eq!(report.total_read, 3);
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].string, "Cost: $5");
        assert_eq!(report.skipped[0].reason, Unsupported::PlaceholderMarker);
        assert_eq!(report.skipped[1].string, "Value: %f");
        assert_eq!(
            report.skipped[1].reason,
            Unsupported::UnrecognizedToken("%f".to_string())
        );
    }

    #[test]
    fn test_entries_line_up_under_their_key() {
        let catalog = catalog(&["Hello %s, you have %d items"]);
        let report = export(&catalog, None);

        let key = crate::key::string_key("Hello %s, you have %d items");
        assert_eq!(
            report.bundle.strings.get(&key).unwrap(),
            "Hello $1, you have $2 items"
        );
        assert_eq!(
            report.bundle.raw.get(&key).unwrap(),
            "Hello %s, you have %d items"
        );
        assert!(report.bundle.context.get(&key).unwrap().starts_with("Used in:"));
    }

    #[test]
    fn test_browse_uri_reaches_context_entries() {
        let catalog = catalog(&["Hello"]);
        let report = export(&catalog, Some("https://example.com/browse/"));
        let context = report.bundle.context.values().next().unwrap();
        assert!(context.contains("[https://example.com/browse/src/5.c$1 5.c:1]"));
    }

    #[test]
    fn test_serialization_is_key_sorted_and_repeatable() {
        let catalog = catalog(&["banana %s", "apple", "cherry %d"]);

        let first = export(&catalog, None);
        let second = export(&catalog, None);
        let bytes_first = serde_json::to_string_pretty(&first.bundle.strings).unwrap();
        let bytes_second = serde_json::to_string_pretty(&second.bundle.strings).unwrap();
        assert_eq!(bytes_first, bytes_second);

        let keys: Vec<&String> = first.bundle.strings.keys().collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_empty_catalog_exports_empty_bundle() {
        let report = export(&Catalog::default(), None);
        assert_eq!(report.total_read, 0);
        assert!(report.bundle.strings.is_empty());
        assert!(report.bundle.context.is_empty());
        assert!(report.bundle.raw.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_artifact_order_and_names() {
        let bundle = ExportBundle::default();
        let names: Vec<&str> = bundle.artifacts().iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["en.json", "qqq.json", "raw.json"]);
    }
}
