pub const DEMO_PATH: &str = "example.txt";

pub const DEMO_LINES: &[&str] = &["Hello, World!", "Welcome to Java file operations."];

pub const DEMO_SEARCH: &str = "World";

pub const DEMO_REPLACEMENT: &str = "Java";
