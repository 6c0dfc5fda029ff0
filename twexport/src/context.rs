//! Contextual help blocks for translators.

use std::path::Path;

use crate::types::UsageSite;

/// Renders the "Used in:" help block for one string's usage sites.
///
/// Returns an empty string when there are no sites. Otherwise the block is a
/// `Used in:` header, a blank line, and one line per site in discovery order,
/// newline-terminated.
///
/// Without a browse URI each line is `basename(file):line`. With a non-empty
/// browse URI the line becomes a wiki link, `[<uri> <label>]`, whose target is
/// `<browse_uri><file>$<line>` (the `$` is the line-fragment convention of
/// the browse interface) and whose label is still `basename(file):line`.
pub fn build_context(uses: &[UsageSite], browse_uri: Option<&str>) -> String {
    if uses.is_empty() {
        return String::new();
    }

    let browse_uri = browse_uri.filter(|uri| !uri.is_empty());

    let lines: Vec<String> = uses
        .iter()
        .map(|site| {
            let name = basename(&site.file);
            match browse_uri {
                Some(base) => format!("[{base}{}${} {name}:{}]", site.file, site.line, site.line),
                None => format!("{name}:{}", site.line),
            }
        })
        .collect();

    format!("Used in:\n\n{}\n", lines.join("\n"))
}

fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}
