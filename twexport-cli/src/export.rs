//! The `export` subcommand: extract, transform, and write project files.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, bail};
use twexport::{Catalog, Unsupported, export};

/// Relative path, inside the library, of the extraction output.
const STRINGS_CACHE_PATH: &str = ".cache/i18n_strings.json";

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub library: PathBuf,
    pub project: String,
    pub browse_uri: Option<String>,
    pub output_root: PathBuf,
    pub extractor: Option<String>,
}

pub fn run_export_command(options: ExportOptions) -> anyhow::Result<()> {
    if options.project.trim().is_empty() {
        bail!("provide a project name to export strings under with \"--as\"");
    }

    if let Some(extractor) = &options.extractor {
        println!("Extracting library strings...");
        let status = Command::new(extractor)
            .arg("extract")
            .arg(&options.library)
            .status()
            .with_context(|| format!("failed to run extractor \"{extractor}\""))?;
        if !status.success() {
            bail!("extractor \"{extractor}\" failed with {status}");
        }
    }

    let strings_path = options.library.join(STRINGS_CACHE_PATH);
    let catalog = Catalog::read_from(&strings_path)?;

    println!("Read {} string(s).", catalog.len());

    let report = export(&catalog, options.browse_uri.as_deref());
    for skipped in &report.skipped {
        match &skipped.reason {
            Unsupported::UnrecognizedToken(token) => eprintln!(
                "Unable to extract string with unrecognized \"%\" pattern, \"{token}\": {}.",
                skipped.string
            ),
            Unsupported::PlaceholderMarker => eprintln!(
                "Unable to extract string containing \"$\" symbol: {}",
                skipped.string
            ),
        }
    }

    let project_root = options.output_root.join(&options.project);
    fs::create_dir_all(&project_root)
        .with_context(|| format!("failed to create \"{}\"", project_root.display()))?;

    for artifact in report.bundle.artifacts() {
        let path = project_root.join(artifact.name);
        println!("Writing data ({}) to \"{}\"...", artifact.help, path.display());

        let mut data = serde_json::to_string_pretty(artifact.data)?;
        data.push('\n');
        fs::write(&path, data)
            .with_context(|| format!("failed to write \"{}\"", path.display()))?;
    }

    println!("Done.");

    Ok(())
}
