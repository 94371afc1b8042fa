//! # Validate Command Implementation
//!
//! This module implements the `validate` subcommand, which normalizes a job
//! parameter file without rendering it and prints a summary of the job the
//! parameters describe.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use jenkins_freestyle::job::{builders, triggers, wrappers};
use jenkins_freestyle::output::{OutputConfig, Status};
use jenkins_freestyle::params::JobConfig;

use super::{load_params, DEFAULT_PARAMS_FILE};

/// Check a job parameter file without rendering it
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the job parameter file (YAML, JSON or TOML), or `-` for stdin.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_PARAMS_FILE,
        env = "JENKINS_FREESTYLE_PARAMS"
    )]
    pub params: PathBuf,
}

/// Execute the `validate` command.
///
/// `color_flag` is the value of the global `--color` flag.
pub fn execute(args: ValidateArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    println!(
        "{} Validating job parameters: {}",
        out.marker(Status::Info),
        args.params.display()
    );

    let params = load_params(&args.params)?;
    let config = match params.normalize() {
        Ok(config) => config,
        Err(e) => {
            println!("{} Validation failed: {}", out.marker(Status::Error), e);
            return Err(anyhow::anyhow!("Validation failed: {}", e));
        }
    };

    println!("{} Parameters are valid", out.marker(Status::Ok));
    for line in summary(&config, &out) {
        println!("   {}", line);
    }

    Ok(())
}

/// Describes the job a validated record produces.
fn summary(config: &JobConfig, out: &OutputConfig) -> Vec<String> {
    let provider = config.scm_provider();
    let node = config.assigned_node().name().unwrap_or("(any)");
    vec![
        format!(
            "SCM: {} ({})",
            provider.name(),
            out.highlight(provider.class())
        ),
        format!("Triggers: {}", triggers::triggers(config).len()),
        format!("Build steps: {}", builders::steps(config).len()),
        format!("Build wrappers: {}", wrappers::wrappers(config).len()),
        format!("Assigned node: {}", node),
        format!("Can roam: {}", config.can_roam()),
    ]
}
