//! CLI library surface.
//!
//! `main.rs` is the composition root; everything else is reusable and
//! testable: the parser, the command definitions and the handlers.

pub mod commands;
pub mod context;
pub mod handlers;
pub mod parser;

pub use commands::{AgentsCommand, Commands, ConfigCommand, ConfigSetArgs};
pub use context::CliContext;
pub use parser::Cli;
