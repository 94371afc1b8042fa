//! Build wrappers
//!
//! Builds the `<buildWrappers>` list. The only wrapper today injects
//! environment variables, written as `KEY=value` lines in the order the
//! caller supplied them.

use crate::defaults::element;
use crate::document::{Element, Node};
use crate::params::{EnvVars, JobConfig};

/// An action wrapping the build execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWrapper {
    /// Inject the given variables into the build environment.
    EnvInject(EnvVars),
}

impl BuildWrapper {
    pub fn to_node(&self) -> Node {
        match self {
            BuildWrapper::EnvInject(vars) => Element::new(element::ENV_INJECT_WRAPPER)
                .with(
                    Element::new("info")
                        .with(Node::value("propertiesContent", properties_content(vars)))
                        .with(Node::value("loadFilesFromMaster", false)),
                )
                .into(),
        }
    }
}

/// Renders variables as `KEY=value` lines, each terminated by a newline.
pub fn properties_content(vars: &EnvVars) -> String {
    vars.iter()
        .map(|(key, value)| format!("{}={}\n", key, value))
        .collect()
}

/// The wrappers configured by the record.
pub fn wrappers(config: &JobConfig) -> Vec<BuildWrapper> {
    let mut wrappers = Vec::new();
    if !config.env_inject().is_empty() {
        wrappers.push(BuildWrapper::EnvInject(config.env_inject().clone()));
    }
    wrappers
}

/// Builds the `<buildWrappers>` element.
pub fn build(config: &JobConfig) -> Element {
    Element::new("buildWrappers")
        .with_children(wrappers(config).iter().map(BuildWrapper::to_node))
}
