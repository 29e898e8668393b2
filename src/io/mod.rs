pub mod file_operations;
