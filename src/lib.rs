//! # Jenkins Freestyle Job Library
//!
//! This library turns a flat set of job parameters into the `config.xml`
//! document a Jenkins server accepts for a freestyle job. It is used by the
//! `jenkins-freestyle` command-line tool and can be embedded in any client
//! that creates or updates jobs over the server's HTTP API.
//!
//! ## Quick Example
//!
//! ```
//! use jenkins_freestyle::params;
//! use jenkins_freestyle::{job, xml};
//!
//! let params = params::parse(r#"
//! scm_provider: git
//! scm_url: https://example.com/repo.git
//! shell_command: make test
//! "#).unwrap();
//!
//! let project = job::build_document(params).unwrap();
//! assert_eq!(
//!     project.child_element("scm").unwrap().type_class(),
//!     Some("hudson.plugins.git.GitSCM")
//! );
//!
//! let xml = xml::to_xml(&project).unwrap();
//! assert!(xml.contains("<canRoam>true</canRoam>"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Parameters (`params`)**: the partial parameter mapping, its file
//!   loaders, and the normalizer that produces a validated `JobConfig`.
//! - **Document (`document`)**: the ordered, typed tree a job document is
//!   built as.
//! - **Job (`job`)**: the SCM, trigger, build step and wrapper builders, and
//!   the assembler that fixes the order of the `<project>` children.
//! - **XML (`xml`)**: encoding the finished tree as text.
//!
//! ## Execution Flow
//!
//! 1.  **Normalize**: merge parameters over the defaults and validate them.
//! 2.  **Build sections**: SCM, triggers, build steps and wrappers, each from
//!     the record alone.
//! 3.  **Assemble**: place flags and sections under `<project>`.
//! 4.  **Encode**: serialize the tree to XML.
//!
//! Every step is a pure, synchronous function of its input.

pub mod defaults;
pub mod document;
pub mod error;
pub mod job;
pub mod output;
pub mod params;
pub mod xml;

#[cfg(test)]
mod job_proptest;

use crate::error::Result;
use crate::params::JobParams;

/// Normalizes `params`, builds the job document and encodes it as XML.
pub fn render(params: JobParams) -> Result<String> {
    let project = job::build_document(params)?;
    xml::to_xml(&project)
}
