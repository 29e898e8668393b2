use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::Path;
use tracing::info;

use crate::io::file_operations::{write_lines, write_lines_atomic};

pub fn execute(path: &Path, lines: Vec<String>, stdin: bool, atomic: bool) -> Result<()> {
    let lines = if stdin {
        let stdin = io::stdin();
        let read: Result<Vec<_>, _> = stdin.lock().lines().collect();
        read.context("Failed to read from stdin")?
    } else {
        lines
    };

    if atomic {
        write_lines_atomic(path, &lines)?;
    } else {
        write_lines(path, &lines)?;
    }

    info!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}
