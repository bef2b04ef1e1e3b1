//! Presentation layer for luagen
//!
//! CLI argument definitions and console report formatting.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use output::console::ConsoleReporter;
