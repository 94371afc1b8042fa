//! # Jenkins Freestyle CLI
//!
//! This is the binary entry point for the `jenkins-freestyle` command-line
//! tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Initializing logging from the global `--log-level` flag.
//! - Executing the selected command and reporting top-level errors.
//!
//! The document building logic lives in the `jenkins_freestyle` library crate;
//! the binary is a thin wrapper around it.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
