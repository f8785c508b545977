//! casebench CLI library
//!
//! Command-line front end for the casebench benchmark harness: argument
//! parsing, output formatting, and the run/curves/list commands.

pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
