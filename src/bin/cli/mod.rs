//! CLI module organization
//!
//! - args: CLI argument structures
//! - commands: command execution logic
//! - output: display and formatting helpers

pub mod args;
pub mod commands;
pub mod output;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
