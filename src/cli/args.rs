use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{DEMO_PATH, DEMO_REPLACEMENT, DEMO_SEARCH};

#[derive(Parser)]
#[command(name = "linefile")]
#[command(version, about = "Read, write and rewrite text files line by line")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write sample lines, replace a substring and print the file before and after (default)
    Demo {
        /// File to write the sample lines to
        #[arg(long, default_value = DEMO_PATH)]
        path: PathBuf,

        /// Literal text to search for
        #[arg(long, default_value = DEMO_SEARCH)]
        search: String,

        /// Literal text to substitute
        #[arg(long, default_value = DEMO_REPLACEMENT)]
        replace: String,
    },
    /// Print the lines of a file
    Read {
        /// File to read
        path: PathBuf,

        /// Print the lines as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Overwrite a file with the given lines
    Write {
        /// File to write
        path: PathBuf,

        /// Lines to write, in order
        lines: Vec<String>,

        /// Read the lines from stdin instead
        #[arg(long, conflicts_with = "lines")]
        stdin: bool,

        /// Write through a temporary file renamed into place
        #[arg(long)]
        atomic: bool,
    },
    /// Replace every literal occurrence of a substring on each line of a file
    Replace {
        /// File to modify
        path: PathBuf,

        /// Literal text to search for
        search: String,

        /// Literal text to substitute
        replacement: String,

        /// Show what would change without modifying the file
        #[arg(long)]
        dry_run: bool,

        /// Create a backup file before rewriting
        #[arg(short = 'b', long)]
        backup: bool,

        /// Write through a temporary file renamed into place
        #[arg(long)]
        atomic: bool,

        /// Print the replacement report as JSON
        #[arg(long)]
        json: bool,
    },
}
