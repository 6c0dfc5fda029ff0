//! Rewriting of printf-style format strings into positional-placeholder form.
//!
//! The target platform expects `$1`, `$2`, ... where the source uses `%s` and
//! `%d`, and a literal `%` where the source writes `%%`. Because `$` is the
//! platform's own placeholder introducer, an input that already contains `$`
//! would be ambiguous after rewriting and is rejected whole.

use thiserror::Error;

/// Why a string could not be rewritten.
///
/// This is a per-string, recoverable condition: the caller skips the string
/// and keeps going. Run-aborting failures live in [`crate::error::Error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Unsupported {
    /// A `%`-escape this engine does not know how to translate, e.g. `%f`.
    /// Carries the offending token text.
    #[error("unrecognized \"%\" pattern \"{0}\"")]
    UnrecognizedToken(String),

    /// The input already contains the `$` placeholder marker.
    #[error("string contains \"$\" symbol")]
    PlaceholderMarker,
}

/// Rewrites `input` into the platform's positional-placeholder dialect.
///
/// In a single left-to-right pass over the original string:
///
/// - `%%` becomes a literal `%`
/// - `%s` and `%d` become `$1`, `$2`, ... numbered in order of occurrence
/// - any other `%`-escape aborts the whole string (all-or-nothing; a string
///   is never partially translated)
/// - any `$` in the input aborts the whole string, so the only `$` characters
///   in a successful result are the ones this routine introduced
///
/// A trailing lone `%` cannot form a complete escape token and is rejected
/// the same way as an unrecognized one.
///
/// # Examples
///
/// ```rust
/// use twexport::rewrite;
///
/// assert_eq!(
///     rewrite("Hello %s, you have %d items").unwrap(),
///     "Hello $1, you have $2 items"
/// );
/// assert_eq!(rewrite("100%% done").unwrap(), "100% done");
/// assert!(rewrite("Cost: $5").is_err());
/// ```
pub fn rewrite(input: &str) -> Result<String, Unsupported> {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars();
    let mut n = 1u32;

    while let Some(c) = chars.next() {
        match c {
            '%' => match chars.next() {
                Some('%') => out.push('%'),
                Some('s') | Some('d') => {
                    out.push('$');
                    out.push_str(&n.to_string());
                    n += 1;
                }
                Some(other) => {
                    return Err(Unsupported::UnrecognizedToken(format!("%{other}")));
                }
                None => return Err(Unsupported::UnrecognizedToken("%".to_string())),
            },
            '$' => return Err(Unsupported::PlaceholderMarker),
            _ => out.push(c),
        }
    }

    Ok(out)
}
