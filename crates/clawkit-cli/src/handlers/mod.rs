//! Command handlers.
//!
//! Each handler takes its dependencies (ports, context) as arguments;
//! construction happens only in `main.rs`.

pub mod agents;
pub mod config;
pub mod fit;
pub mod probe;
