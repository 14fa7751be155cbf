//! # League Library
//!
//! Exposes the league manager's CLI and shell modules for testing.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod error;
pub mod prompt;
pub mod shell;

pub use error::ShellError;

// Re-export league_core for convenience
pub use league_core;
