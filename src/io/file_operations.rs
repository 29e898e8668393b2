use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::utils::text_processing::{LINE_SEPARATOR, split_lines};

/// Reads a UTF-8 text file and returns its lines without terminators.
#[instrument]
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let lines = split_lines(&content);
    debug!("Read {} lines from {}", lines.len(), path.display());
    Ok(lines)
}

/// Creates or truncates `path` and writes each line followed by the
/// platform line separator. Nothing is rolled back if a write fails midway.
#[instrument(skip(lines))]
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to write {}", path.display()))?;

    write_all_lines(file, lines).with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("Wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

/// Like [`write_lines`], but stages the content in a temporary file next to
/// `path` and renames it into place once fully written. An existing
/// target's permissions carry over to the replacement.
#[instrument(skip(lines))]
pub fn write_lines_atomic<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;

    write_all_lines(temp.as_file_mut(), lines)
        .with_context(|| format!("Failed to write {}", temp.path().display()))?;

    match fs::metadata(path) {
        Ok(existing) => temp
            .as_file()
            .set_permissions(existing.permissions())
            .with_context(|| format!("Failed to set permissions on {}", temp.path().display()))?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", path.display())),
    }

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to replace {}", path.display()))?;

    debug!("Atomically wrote {} lines to {}", lines.len(), path.display());
    Ok(())
}

fn write_all_lines<W: Write, S: AsRef<str>>(sink: W, lines: &[S]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(sink);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(LINE_SEPARATOR.as_bytes())?;
    }
    writer.flush()
}
