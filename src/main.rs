use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use linefile::cli::args::{Args, Commands};
use linefile::cli::commands;
use linefile::config::{DEMO_PATH, DEMO_REPLACEMENT, DEMO_SEARCH};
use linefile::core::line_replacer::ReplaceOptions;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match args.command {
        None => commands::demo::execute(
            &PathBuf::from(DEMO_PATH),
            DEMO_SEARCH,
            DEMO_REPLACEMENT,
        ),
        Some(Commands::Demo {
            path,
            search,
            replace,
        }) => commands::demo::execute(&path, &search, &replace),
        Some(Commands::Read { path, json }) => commands::read::execute(&path, json),
        Some(Commands::Write {
            path,
            lines,
            stdin,
            atomic,
        }) => commands::write::execute(&path, lines, stdin, atomic),
        Some(Commands::Replace {
            path,
            search,
            replacement,
            dry_run,
            backup,
            atomic,
            json,
        }) => commands::replace::execute(
            &path,
            &search,
            &replacement,
            ReplaceOptions {
                dry_run,
                backup,
                atomic,
            },
            json,
        ),
    }
}
