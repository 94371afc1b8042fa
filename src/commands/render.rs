//! # Render Command Implementation
//!
//! This module implements the `render` subcommand, which builds the job
//! `config.xml` for a parameter file and writes it to stdout or a file. The
//! output is ready to be posted to the server's create-item or update-config
//! endpoint.

use anyhow::{Context, Result};
use clap::Args;
use log::info;
use std::path::PathBuf;

use jenkins_freestyle::{job, xml};

use super::{load_params, DEFAULT_PARAMS_FILE};

/// Render the job config.xml for a parameter file
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Path to the job parameter file (YAML, JSON or TOML), or `-` for stdin.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_PARAMS_FILE,
        env = "JENKINS_FREESTYLE_PARAMS"
    )]
    pub params: PathBuf,

    /// Write the XML to this file instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Prepend an XML declaration.
    #[arg(long)]
    pub declaration: bool,
}

/// Execute the `render` command.
pub fn execute(args: RenderArgs) -> Result<()> {
    let params = load_params(&args.params)?;
    let project = job::build_document(params).context("Invalid job parameters")?;

    let text = if args.declaration {
        xml::to_xml_document(&project)?
    } else {
        xml::to_xml(&project)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{}\n", text))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote job config to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}
