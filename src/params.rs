//! # Job Parameters and Normalization
//!
//! This module defines the flat parameter mapping callers use to describe a
//! freestyle job, the loaders that read it from YAML, JSON or TOML, and the
//! normalizer that turns it into an immutable [`JobConfig`] record.
//!
//! ## Parameter Format
//!
//! ```yaml
//! keep_dependencies: false
//! block_build_when_downstream_building: false
//! block_build_when_upstream_building: false
//! concurrent_build: false
//! scm_provider: git            # git | svn | cvs
//! scm_url: https://example.com/repo.git
//! scm_module: core             # cvs only
//! scm_branch: master
//! scm_tag: v1                  # cvs only
//! scm_use_head_if_tag_not_found: false
//! timer: "H 2 * * *"
//! polling: "H/15 * * * *"
//! shell_command: make test
//! assigned_node: linux         # a node name, or {} for anywhere
//! env_inject:
//!   FOO: bar
//! ```
//!
//! Every key is optional. Defaults only fill keys that are missing; a key the
//! caller sets is honored even when it holds `false` or an empty value.
//!
//! ## Validation
//!
//! Exactly one rule is enforced: a named `scm_provider` requires a non-empty
//! `scm_url`. Everything else is accepted as given, including provider names
//! the builder does not know (those fall back to the null SCM).

use std::fmt;
use std::path::Path;

use log::debug;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::defaults;
use crate::error::{Error, Result};
use crate::job::scm::ScmProvider;

/// The node restriction of a job.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AssignedNode {
    /// No restriction; the job may run on any node.
    #[default]
    Anywhere,
    /// The job is pinned to the named node.
    Named(String),
}

impl AssignedNode {
    /// Pins to `name`, or leaves the job unrestricted when `name` is empty.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            AssignedNode::Anywhere
        } else {
            AssignedNode::Named(name)
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AssignedNode::Anywhere => None,
            AssignedNode::Named(name) => Some(name),
        }
    }
}

impl<'de> Deserialize<'de> for AssignedNode {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Mapping(std::collections::BTreeMap<String, de::IgnoredAny>),
        }

        match Repr::deserialize(deserializer).map_err(|_| {
            de::Error::custom("assigned_node must be a node name or a mapping")
        })? {
            Repr::Name(name) => Ok(AssignedNode::from_name(name)),
            Repr::Mapping(_) => Ok(AssignedNode::Anywhere),
        }
    }
}

/// Environment variables injected into the build, in the order supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(Vec<(String, String)>);

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<'de> Deserialize<'de> for EnvVars {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EnvVarsVisitor;

        impl<'de> Visitor<'de> for EnvVarsVisitor {
            type Value = EnvVars;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of environment variable names to scalar values")
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<EnvVars, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut vars = EnvVars::new();
                while let Some((key, value)) = map.next_entry::<String, serde_yaml::Value>()? {
                    let value = match value {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Null => String::new(),
                        _ => {
                            return Err(de::Error::custom(format!(
                                "env_inject value for '{}' must be a scalar",
                                key
                            )))
                        }
                    };
                    vars.push(key, value);
                }
                Ok(vars)
            }
        }

        deserializer.deserialize_map(EnvVarsVisitor)
    }
}

/// The caller-supplied, partial parameter mapping.
///
/// A field left as `None` receives its default during [`JobParams::normalize`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct JobParams {
    pub keep_dependencies: Option<bool>,
    pub block_build_when_downstream_building: Option<bool>,
    pub block_build_when_upstream_building: Option<bool>,
    pub concurrent_build: Option<bool>,
    /// `git`, `svn` or `cvs`. Any other non-empty name still requires
    /// `scm_url` but produces the null SCM.
    pub scm_provider: Option<String>,
    pub scm_url: Option<String>,
    /// CVS module to check out.
    pub scm_module: Option<String>,
    pub scm_branch: Option<String>,
    /// CVS tag to check out.
    pub scm_tag: Option<String>,
    pub scm_use_head_if_tag_not_found: Option<bool>,
    /// Cron-style schedule for periodic builds.
    pub timer: Option<String>,
    /// Cron-style schedule for SCM polling.
    pub polling: Option<String>,
    pub shell_command: Option<String>,
    pub assigned_node: Option<AssignedNode>,
    pub env_inject: Option<EnvVars>,
}

impl JobParams {
    /// Merges the parameters over the defaults and validates the result.
    ///
    /// Fails with [`Error::Validation`] when `scm_provider` is set and
    /// `scm_url` is missing or empty; no record is produced in that case.
    pub fn normalize(self) -> Result<JobConfig> {
        let JobParams {
            keep_dependencies,
            block_build_when_downstream_building,
            block_build_when_upstream_building,
            concurrent_build,
            scm_provider,
            scm_url,
            scm_module,
            scm_branch,
            scm_tag,
            scm_use_head_if_tag_not_found,
            timer,
            polling,
            shell_command,
            assigned_node,
            env_inject,
        } = self;

        let provider_name = scm_provider.filter(|name| !name.is_empty());
        let scm_url = scm_url.filter(|url| !url.is_empty());

        if let Some(provider) = &provider_name {
            if scm_url.is_none() {
                return Err(Error::scm_url_required(provider));
            }
        }

        let scm_provider = provider_name
            .as_deref()
            .map(ScmProvider::from_name)
            .unwrap_or_default();

        let config = JobConfig {
            keep_dependencies: keep_dependencies.unwrap_or(defaults::DEFAULT_KEEP_DEPENDENCIES),
            block_downstream: block_build_when_downstream_building
                .unwrap_or(defaults::DEFAULT_BLOCK_DOWNSTREAM),
            block_upstream: block_build_when_upstream_building
                .unwrap_or(defaults::DEFAULT_BLOCK_UPSTREAM),
            concurrent_build: concurrent_build.unwrap_or(defaults::DEFAULT_CONCURRENT_BUILD),
            scm_provider,
            scm_url,
            scm_module,
            scm_branch,
            scm_tag,
            scm_use_head_if_tag_not_found: scm_use_head_if_tag_not_found
                .unwrap_or(defaults::DEFAULT_USE_HEAD_IF_TAG_NOT_FOUND),
            timer_spec: timer.filter(|spec| !spec.is_empty()),
            poll_spec: polling.filter(|spec| !spec.is_empty()),
            shell_command: shell_command.filter(|command| !command.is_empty()),
            assigned_node: assigned_node.unwrap_or_default(),
            env_inject: env_inject.unwrap_or_default(),
        };

        debug!(
            "Normalized job parameters: scm={}, triggers={}, roaming={}",
            config.scm_provider.name(),
            usize::from(config.timer_spec.is_some()) + usize::from(config.poll_spec.is_some()),
            config.can_roam()
        );

        Ok(config)
    }
}

/// The complete, validated job configuration record.
///
/// Only [`JobParams::normalize`] creates one, so every record satisfies the
/// SCM URL invariant. Records are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    keep_dependencies: bool,
    block_downstream: bool,
    block_upstream: bool,
    concurrent_build: bool,
    scm_provider: ScmProvider,
    scm_url: Option<String>,
    scm_module: Option<String>,
    scm_branch: Option<String>,
    scm_tag: Option<String>,
    scm_use_head_if_tag_not_found: bool,
    timer_spec: Option<String>,
    poll_spec: Option<String>,
    shell_command: Option<String>,
    assigned_node: AssignedNode,
    env_inject: EnvVars,
}

impl JobConfig {
    pub fn keep_dependencies(&self) -> bool {
        self.keep_dependencies
    }

    pub fn block_downstream(&self) -> bool {
        self.block_downstream
    }

    pub fn block_upstream(&self) -> bool {
        self.block_upstream
    }

    pub fn concurrent_build(&self) -> bool {
        self.concurrent_build
    }

    pub fn scm_provider(&self) -> ScmProvider {
        self.scm_provider
    }

    /// Always `Some` and non-empty unless the provider is [`ScmProvider::None`].
    pub fn scm_url(&self) -> Option<&str> {
        self.scm_url.as_deref()
    }

    pub fn scm_module(&self) -> Option<&str> {
        self.scm_module.as_deref()
    }

    /// The branch to build, `master` unless the caller named one.
    pub fn scm_branch(&self) -> &str {
        self.scm_branch
            .as_deref()
            .unwrap_or(defaults::DEFAULT_SCM_BRANCH)
    }

    /// The branch as supplied by the caller, without the default applied.
    pub fn explicit_scm_branch(&self) -> Option<&str> {
        self.scm_branch.as_deref()
    }

    pub fn scm_tag(&self) -> Option<&str> {
        self.scm_tag.as_deref()
    }

    pub fn scm_use_head_if_tag_not_found(&self) -> bool {
        self.scm_use_head_if_tag_not_found
    }

    pub fn timer_spec(&self) -> Option<&str> {
        self.timer_spec.as_deref()
    }

    pub fn poll_spec(&self) -> Option<&str> {
        self.poll_spec.as_deref()
    }

    pub fn shell_command(&self) -> Option<&str> {
        self.shell_command.as_deref()
    }

    pub fn assigned_node(&self) -> &AssignedNode {
        &self.assigned_node
    }

    pub fn env_inject(&self) -> &EnvVars {
        &self.env_inject
    }

    /// `false` only when the job is pinned to a named node.
    pub fn can_roam(&self) -> bool {
        matches!(self.assigned_node, AssignedNode::Anywhere)
    }
}

/// Parses job parameters from YAML. JSON documents are accepted too.
///
/// An empty document yields the empty parameter set.
pub fn parse(yaml_content: &str) -> Result<JobParams> {
    let value: serde_yaml::Value = serde_yaml::from_str(yaml_content).map_err(Error::Yaml)?;
    match value {
        serde_yaml::Value::Null => Ok(JobParams::default()),
        serde_yaml::Value::Mapping(_) => serde_yaml::from_str(yaml_content).map_err(Error::Yaml),
        _ => Err(Error::ConfigParse {
            message: "Expected a mapping of job parameters".to_string(),
        }),
    }
}

/// Parses job parameters from a JSON object.
pub fn parse_json(json_content: &str) -> Result<JobParams> {
    serde_json::from_str(json_content).map_err(Error::Json)
}

/// Parses job parameters from a TOML table.
pub fn parse_toml(toml_content: &str) -> Result<JobParams> {
    toml::from_str(toml_content).map_err(Error::Toml)
}

/// Loads job parameters from a file, choosing the format by extension.
///
/// `.json` and `.toml` files use their own parsers; anything else is read as
/// YAML.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<JobParams> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(Error::Io)?;
    debug!("Loading job parameters from {}", path.display());
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&content),
        Some("toml") => parse_toml(&content),
        _ => parse(&content),
    }
}
