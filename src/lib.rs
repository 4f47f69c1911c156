pub mod analyzer;
pub mod checks;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod report;
