mod export;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::export::ExportOptions;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Export translation strings from a library.
    Export {
        /// Path to the library to export translations from
        library: PathBuf,

        /// Name for the project being exported. Exported files are written
        /// under the output root using this name.
        #[arg(long = "as", value_name = "NAME")]
        project: String,

        /// Base URI for browsing files in the project being exported
        #[arg(long, value_name = "URI")]
        browse_uri: Option<String>,

        /// Root directory exported projects are written to
        #[arg(long, value_name = "DIR", default_value = "projects")]
        output_root: PathBuf,

        /// Extractor command to run as `<CMD> extract <LIBRARY>` before
        /// reading. When omitted, the extraction output must already exist.
        #[arg(long, value_name = "CMD")]
        extractor: Option<String>,
    },
}

fn main() {
    let args = Args::parse();

    match args.commands {
        Commands::Export {
            library,
            project,
            browse_uri,
            output_root,
            extractor,
        } => {
            let options = ExportOptions {
                library,
                project,
                browse_uri,
                output_root,
                extractor,
            };
            if let Err(e) = export::run_export_command(options) {
                eprintln!("Error: {e:#}");
                std::process::exit(1);
            }
        }
    }
}
