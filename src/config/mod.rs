pub mod demo;

pub use demo::{DEMO_LINES, DEMO_PATH, DEMO_REPLACEMENT, DEMO_SEARCH};

/// Appended to a file's path to name its backup copy.
pub const BACKUP_SUFFIX: &str = ".backup";
