pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod utils;

pub use crate::core::line_replacer::{
    LineChange, ReplaceOptions, ReplaceReport, backup_path_for, replace_in_file,
    replace_in_file_with, replace_in_lines,
};
pub use crate::io::file_operations::{read_lines, write_lines, write_lines_atomic};
