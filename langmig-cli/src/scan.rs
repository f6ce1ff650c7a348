//! The `scan` subcommand: run the scan pass and persist the report.

use std::path::Path;

use langmig::{Error, MigrationProfile, scan_project, traits::Artifact};

pub fn run_scan(root: &str, output: &str, profile: &MigrationProfile) -> Result<(), Error> {
    println!("Scanning translation files...");
    let outcome = scan_project(Path::new(root), profile)?;
    println!(
        "Found {} Turkish translations with English equivalents",
        outcome.mined_pairs
    );

    for dir in &outcome.skipped_roots {
        println!("Directory {} does not exist, skipping...", dir);
    }
    for finding in &outcome.report.findings {
        println!(
            "Found {} Turkish strings in {}",
            finding.strings.len(),
            finding.file
        );
    }
    for issue in &outcome.issues {
        eprintln!("Error scanning {}: {}", issue.path, issue.message);
    }

    outcome.report.write_to(output)?;

    println!();
    println!("Scan complete!");
    println!(
        "Found Turkish strings in {} files",
        outcome.report.findings.len()
    );
    println!(
        "Total unique Turkish strings: {}",
        outcome.report.translations.len()
    );
    println!("Results saved to {}", output);
    Ok(())
}
