use anyhow::{Context, Result};
use std::path::Path;

use crate::core::line_replacer::{ReplaceOptions, ReplaceReport, replace_in_file_with};

pub fn execute(
    path: &Path,
    search: &str,
    replacement: &str,
    options: ReplaceOptions,
    json: bool,
) -> Result<()> {
    let report = replace_in_file_with(path, search, replacement, &options)?;

    if json {
        let rendered = serde_json::to_string(&report).context("Failed to encode report")?;
        println!("{}", rendered);
        return Ok(());
    }

    if options.dry_run {
        print_preview(path, &report);
    }

    println!(
        "{}: {} occurrences replaced on {} lines",
        path.display(),
        report.occurrences,
        report.lines_changed
    );

    Ok(())
}

fn print_preview(path: &Path, report: &ReplaceReport) {
    println!("\n--- File: {} ---", path.display());
    for change in &report.changes {
        println!("@@ line {} @@", change.line);
        println!("- {}", change.old);
        println!("+ {}", change.new);
    }
}
