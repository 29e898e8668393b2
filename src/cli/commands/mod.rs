pub mod demo;
pub mod read;
pub mod replace;
pub mod write;
