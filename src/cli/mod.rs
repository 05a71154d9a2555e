//! Command Line Interface (CLI) layer for cg-trace.
//!
//! `args` turns the raw token vector into [`crate::ParsedArguments`];
//! `runner` launches the traced program and writes the requested exports.
pub mod args;
pub mod runner;

pub use args::{CliArgs, parse};
pub use runner::{init_logging, run};
