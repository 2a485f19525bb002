//! Interactive shell and script runner for the planner.

pub mod commands;
pub mod help;
pub mod output;
pub mod registry;
pub mod render;
pub mod shell;
pub mod shell_context;
pub mod table;

pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
