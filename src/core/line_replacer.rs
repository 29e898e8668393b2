use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::config::BACKUP_SUFFIX;
use crate::io::file_operations::{read_lines, write_lines, write_lines_atomic};

/// Counts gathered while rewriting a line sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplaceReport {
    pub occurrences: usize,
    pub lines_changed: usize,
    /// Every line whose text differs after replacement, in file order.
    #[serde(default)]
    pub changes: Vec<LineChange>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct LineChange {
    /// 1-based line number.
    pub line: usize,
    pub old: String,
    pub new: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ReplaceOptions {
    /// Compute and preview the result without touching the file.
    pub dry_run: bool,
    /// Copy the original file to `<path>.backup` before rewriting it.
    pub backup: bool,
    /// Write through a temporary file renamed over the target.
    pub atomic: bool,
}

/// Replaces every non-overlapping literal occurrence of `search` in each
/// line. Matches never span line boundaries.
pub fn replace_in_lines<S: AsRef<str>>(
    lines: &[S],
    search: &str,
    replacement: &str,
) -> (Vec<String>, ReplaceReport) {
    let mut report = ReplaceReport::default();

    let replaced = lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            let line = line.as_ref();
            let occurrences = line.matches(search).count();
            if occurrences == 0 {
                return line.to_string();
            }

            report.occurrences += occurrences;
            let updated = line.replace(search, replacement);
            if updated != line {
                report.lines_changed += 1;
                report.changes.push(LineChange {
                    line: index + 1,
                    old: line.to_string(),
                    new: updated.clone(),
                });
            }
            updated
        })
        .collect();

    (replaced, report)
}

/// Reads `path`, replaces `search` with `replacement` on every line and
/// writes the result back.
pub fn replace_in_file(path: &Path, search: &str, replacement: &str) -> Result<ReplaceReport> {
    replace_in_file_with(path, search, replacement, &ReplaceOptions::default())
}

#[instrument(skip(options))]
pub fn replace_in_file_with(
    path: &Path,
    search: &str,
    replacement: &str,
    options: &ReplaceOptions,
) -> Result<ReplaceReport> {
    let original = read_lines(path)?;
    let (updated, report) = replace_in_lines(&original, search, replacement);

    debug!(
        "{} occurrences on {} lines in {}",
        report.occurrences,
        report.lines_changed,
        path.display()
    );

    if options.dry_run {
        info!(
            "DRY RUN: Would replace {} occurrences in {}",
            report.occurrences,
            path.display()
        );

        return Ok(report);
    }

    if options.backup {
        let backup_path = backup_path_for(path);
        fs::copy(path, &backup_path)
            .with_context(|| format!("Failed to create backup: {}", backup_path.display()))?;
        debug!("Created backup: {}", backup_path.display());
    }

    if options.atomic {
        write_lines_atomic(path, &updated)?;
    } else {
        write_lines(path, &updated)?;
    }

    info!(
        "Replaced {} occurrences in {}",
        report.occurrences,
        path.display()
    );
    Ok(report)
}

/// `<path>.backup`, built on the raw OS string so non-UTF-8 names survive.
pub fn backup_path_for(path: &Path) -> PathBuf {
    let mut backup = path.as_os_str().to_owned();
    backup.push(BACKUP_SUFFIX);
    PathBuf::from(backup)
}
