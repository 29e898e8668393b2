use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::io::file_operations::read_lines;

pub fn execute(path: &Path, json: bool) -> Result<()> {
    let lines = read_lines(path)?;
    info!("Read {} lines from {}", lines.len(), path.display());

    if json {
        let rendered = serde_json::to_string_pretty(&lines).context("Failed to encode lines")?;
        println!("{}", rendered);
    } else {
        for line in &lines {
            println!("{}", line);
        }
    }

    Ok(())
}
