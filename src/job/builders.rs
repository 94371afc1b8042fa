//! Build steps
//!
//! Builds the `<builders>` list. New step kinds are appended after the
//! existing ones so the order of earlier entries never changes.

use crate::defaults::element;
use crate::document::{Element, Node};
use crate::params::JobConfig;

/// An action executed as part of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStep {
    /// Run a command in the node's shell.
    Shell(String),
}

impl BuildStep {
    pub fn to_node(&self) -> Node {
        match self {
            BuildStep::Shell(command) => Element::new(element::SHELL_BUILDER)
                .with(Node::value("command", command.as_str()))
                .into(),
        }
    }
}

/// The build steps configured by the record.
pub fn steps(config: &JobConfig) -> Vec<BuildStep> {
    let mut steps = Vec::new();
    if let Some(command) = config.shell_command() {
        steps.push(BuildStep::Shell(command.to_string()));
    }
    steps
}

/// Builds the `<builders>` element.
pub fn build(config: &JobConfig) -> Element {
    Element::new("builders").with_children(steps(config).iter().map(BuildStep::to_node))
}
