use anyhow::Result;
use std::path::Path;
use tracing::info;

use crate::config::DEMO_LINES;
use crate::core::line_replacer::replace_in_file;
use crate::io::file_operations::{read_lines, write_lines};

/// Runs the demonstration flow. Failures are reported but never turned into
/// an error exit.
pub fn execute(path: &Path, search: &str, replacement: &str) -> Result<()> {
    if let Err(e) = run(path, search, replacement) {
        eprintln!("Error: {:?}", e);
    }

    Ok(())
}

fn run(path: &Path, search: &str, replacement: &str) -> Result<()> {
    write_lines(path, DEMO_LINES)?;

    let content = read_lines(path)?;
    println!("File content before modification:");
    print_lines(&content);

    let report = replace_in_file(path, search, replacement)?;
    info!(
        "Replaced {} occurrences of '{}' with '{}'",
        report.occurrences, search, replacement
    );

    let content = read_lines(path)?;
    println!("\nFile content after modification:");
    print_lines(&content);

    Ok(())
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
