#![forbid(unsafe_code)]
//! Export translatable strings from a source library into a
//! translatewiki-ready project.
//!
//! The library turns a catalog of extracted strings (raw literal plus the
//! file/line sites where it is used) into three aligned JSON dictionaries:
//! the translatable strings with printf-style placeholders rewritten to
//! positional `$1`/`$2` form, contextual "Used in:" help for translators,
//! and the raw originals. All three are keyed by a short content digest of
//! the raw string, so entries under the same key always describe the same
//! original string.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use twexport::{Catalog, export};
//!
//! let catalog = Catalog::read_from("mylib/.cache/i18n_strings.json")?;
//! let report = export(&catalog, Some("https://example.com/browse/"));
//! for artifact in report.bundle.artifacts() {
//!     println!("{}: {} entries", artifact.name, artifact.data.len());
//! }
//! # Ok::<(), twexport::Error>(())
//! ```
//!
//! Strings using placeholders this engine cannot translate (anything other
//! than `%s`, `%d`, and the literal `%%`), or already containing the `$`
//! marker the target platform reserves, are skipped whole and reported in
//! [`ExportReport::skipped`]; they never appear in any of the three outputs.

pub mod context;
pub mod error;
pub mod export;
pub mod key;
pub mod rewrite;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    context::build_context,
    error::Error,
    export::{Artifact, ExportBundle, ExportReport, SkippedString, export},
    key::string_key,
    rewrite::{Unsupported, rewrite},
    types::{Catalog, StringUses, UsageSite},
};
