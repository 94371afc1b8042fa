//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `jenkins-freestyle` command-line tool. Each subcommand lives in its own
//! file and provides:
//! - An `Args` struct that defines the command-specific arguments, derived
//!   using `clap`.
//! - An `execute` function that performs the command by calling into the
//!   `jenkins_freestyle` library.

pub mod completions;
pub mod render;
pub mod tree;
pub mod validate;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use jenkins_freestyle::params::{self, JobParams};

/// Default parameter file name.
pub const DEFAULT_PARAMS_FILE: &str = "job.yaml";

/// Loads job parameters from `path`, or from stdin (as YAML) when it is `-`.
pub fn load_params(path: &Path) -> Result<JobParams> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read job parameters from stdin")?;
        return params::parse(&content).context("Failed to parse job parameters from stdin");
    }

    params::from_file(path)
        .with_context(|| format!("Failed to load job parameters from {}", path.display()))
}
