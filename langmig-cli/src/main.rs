mod scan;
mod update;

use clap::{Parser, Subcommand};
use langmig::MigrationProfile;

use crate::scan::run_scan;
use crate::update::run_update;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan the source tree for Turkish strings and write the scan report.
    Scan {
        /// Project root containing the source directories
        #[arg(short, long, default_value = ".")]
        root: String,

        /// File to write the scan report to
        #[arg(short, long, default_value = "turkish_strings.json")]
        output: String,
    },

    /// Rewrite Turkish strings to English from a scan report and patch the
    /// default-language constants.
    Update {
        /// Project root containing the source directories
        #[arg(short, long, default_value = ".")]
        root: String,

        /// Scan report produced by `scan`
        #[arg(short, long, default_value = "turkish_strings.json")]
        input: String,

        /// File to write the run summary to
        #[arg(short, long, default_value = "update_summary.json")]
        summary: String,
    },
}

fn main() {
    let args = Args::parse();
    let profile = MigrationProfile::default();

    let result = match args.commands {
        Commands::Scan { root, output } => run_scan(&root, &output, &profile),
        Commands::Update {
            root,
            input,
            summary,
        } => run_update(&root, &input, &summary, &profile),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
