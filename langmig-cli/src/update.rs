//! The `update` subcommand: load the scan report, rewrite the project and
//! persist the run summary.

use std::path::Path;

use langmig::{Error, MigrationProfile, ScanReport, traits::Artifact, update_project};

pub fn run_update(
    root: &str,
    input: &str,
    summary_path: &str,
    profile: &MigrationProfile,
) -> Result<(), Error> {
    // A missing or malformed report is fatal before any file is touched;
    // operating on a partial mapping is never acceptable.
    let report = ScanReport::read_from(input)
        .map_err(|e| Error::artifact_error(format!("cannot load scan report {}: {}", input, e)))?;

    let outcome = update_project(Path::new(root), profile, &report.translations)?;

    for dir in &outcome.skipped_roots {
        println!("Directory {} does not exist, skipping...", dir);
    }
    for file in &outcome.summary.files_updated {
        println!("Updated {}", file);
    }
    for issue in &outcome.issues {
        eprintln!("Error updating {}: {}", issue.path, issue.message);
    }

    outcome.summary.write_to(summary_path)?;

    println!();
    println!("Update complete!");
    println!(
        "Changed default language in {} files",
        outcome.summary.language_files_updated.len()
    );
    println!(
        "Updated Turkish strings in {} files",
        outcome.summary.files_updated.len()
    );
    println!("Summary saved to {}", summary_path);
    Ok(())
}
