//! Command line front end for the Tally calculator.
//!
//! The `tally` binary is a thin driver: argument parsing and log setup live here so
//! they can be exercised from tests without spawning a process.

pub mod cli;
pub mod config;
pub mod demo;
pub mod output;

pub use cli::{Cli, Commands};
pub use config::{CliConfig, LogFormat, init_tracing};
