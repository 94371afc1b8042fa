//! # Freestyle Job Document Assembly
//!
//! Turns a validated [`JobConfig`] into the `<project>` document tree the
//! server expects for a freestyle job.
//!
//! ## Sections
//!
//! Each variable part of the document is built by its own module:
//!
//! - [`scm`]: the `<scm>` block for one of the four SCM variants.
//! - [`triggers`]: the `<triggers class="vector">` collection.
//! - [`builders`]: the `<builders>` list of build steps.
//! - [`wrappers`]: the `<buildWrappers>` list.
//!
//! The sections are independent of each other and only read the record.
//! [`assemble`] then places them, together with the record's flags, at
//! fixed positions under `<project>`:
//!
//! ```text
//! actions, description, keepDependencies, properties, scm, disabled,
//! blockBuildWhenDownstreamBuilding, blockBuildWhenUpstreamBuilding,
//! triggers, concurrentBuild, publishers, buildWrappers, builders,
//! assignedNode, canRoam
//! ```
//!
//! The server parses this document positionally, so the order above must not
//! change.

pub mod builders;
pub mod scm;
pub mod triggers;
pub mod wrappers;

use log::debug;

use crate::defaults::PROJECT_ELEMENT;
use crate::document::{Element, Node};
use crate::error::Result;
use crate::params::{AssignedNode, JobConfig, JobParams};

/// The independently built sections of a job document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSections {
    pub scm: Element,
    pub triggers: Element,
    pub builders: Element,
    pub wrappers: Element,
}

impl JobSections {
    /// Builds every section from the record.
    pub fn build(config: &JobConfig) -> Self {
        Self {
            scm: scm::build(config),
            triggers: triggers::build(config),
            builders: builders::build(config),
            wrappers: wrappers::build(config),
        }
    }
}

/// Places the record's flags and the built sections under `<project>`.
pub fn assemble(config: &JobConfig, sections: JobSections) -> Element {
    let JobSections {
        scm,
        triggers,
        builders,
        wrappers,
    } = sections;

    let assigned_node = match config.assigned_node() {
        AssignedNode::Named(name) => Node::value("assignedNode", name.as_str()),
        AssignedNode::Anywhere => Node::empty("assignedNode"),
    };

    let project = Element::new(PROJECT_ELEMENT)
        .with(Node::empty("actions"))
        .with(Node::empty("description"))
        .with(Node::value("keepDependencies", config.keep_dependencies()))
        .with(Node::empty("properties"))
        .with(scm)
        .with(Node::value("disabled", false))
        .with(Node::value(
            "blockBuildWhenDownstreamBuilding",
            config.block_downstream(),
        ))
        .with(Node::value(
            "blockBuildWhenUpstreamBuilding",
            config.block_upstream(),
        ))
        .with(triggers)
        .with(Node::value("concurrentBuild", config.concurrent_build()))
        .with(Node::empty("publishers"))
        .with(wrappers)
        .with(builders)
        .with(assigned_node)
        .with(Node::value("canRoam", config.can_roam()));

    debug!(
        "Assembled job document with {} top-level elements",
        project.children().len()
    );
    project
}

/// Builds the document for an already validated record.
pub fn build(config: &JobConfig) -> Element {
    assemble(config, JobSections::build(config))
}

/// Normalizes `params` and builds the job document.
///
/// Fails only when the parameters do not validate; no document is produced
/// in that case.
pub fn build_document(params: JobParams) -> Result<Element> {
    let config = params.normalize()?;
    Ok(build(&config))
}
