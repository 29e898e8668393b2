pub mod line_replacer;
