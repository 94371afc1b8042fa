//! Schedule triggers
//!
//! Builds the `<triggers class="vector">` collection. The collection marker
//! is present even when no trigger is configured. Schedule strings are passed
//! through untouched; the server interprets them.

use crate::defaults::{class, element};
use crate::document::{Element, Node};
use crate::params::JobConfig;

/// A schedule-driven way of starting the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Build periodically.
    Timer(String),
    /// Poll the SCM for changes and build when there are any.
    Poll(String),
}

impl Trigger {
    /// The element name of this trigger's entry.
    pub fn element_name(&self) -> &'static str {
        match self {
            Trigger::Timer(_) => element::TIMER_TRIGGER,
            Trigger::Poll(_) => element::SCM_TRIGGER,
        }
    }

    pub fn spec(&self) -> &str {
        match self {
            Trigger::Timer(spec) | Trigger::Poll(spec) => spec,
        }
    }

    pub fn to_node(&self) -> Node {
        Element::new(self.element_name())
            .with(Node::value("spec", self.spec()))
            .into()
    }
}

/// The triggers configured by the record: timer first, then polling.
pub fn triggers(config: &JobConfig) -> Vec<Trigger> {
    let timer = config.timer_spec().map(|spec| Trigger::Timer(spec.to_string()));
    let poll = config.poll_spec().map(|spec| Trigger::Poll(spec.to_string()));
    timer.into_iter().chain(poll).collect()
}

/// Builds the `<triggers>` element.
pub fn build(config: &JobConfig) -> Element {
    Element::typed("triggers", class::VECTOR)
        .with_children(triggers(config).iter().map(Trigger::to_node))
}
