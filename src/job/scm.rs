//! SCM block construction
//!
//! A job checks out its sources through exactly one SCM implementation. Each
//! [`ScmProvider`] variant builds its own `<scm>` element, tagged with the
//! class the server dispatches on. The fixed scalar children are the values
//! the server's schema expects and are not derived from the parameters.

use log::warn;

use crate::defaults::{self, class, element};
use crate::document::{Element, Node, TypeTag};
use crate::params::JobConfig;

/// The closed set of SCM implementations a job can use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ScmProvider {
    /// No source checkout.
    #[default]
    None,
    Git,
    Subversion,
    Cvs,
}

impl ScmProvider {
    /// Maps a provider name from the parameters to a variant.
    ///
    /// Unknown names map to [`ScmProvider::None`] rather than failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "git" => ScmProvider::Git,
            "svn" => ScmProvider::Subversion,
            "cvs" => ScmProvider::Cvs,
            "" => ScmProvider::None,
            other => {
                warn!(
                    "Unknown scm_provider '{}', the job will have no SCM configured",
                    other
                );
                ScmProvider::None
            }
        }
    }

    /// The parameter name of this provider.
    pub fn name(self) -> &'static str {
        match self {
            ScmProvider::None => "none",
            ScmProvider::Git => "git",
            ScmProvider::Subversion => "svn",
            ScmProvider::Cvs => "cvs",
        }
    }

    /// The implementation class written on the `<scm>` element.
    pub fn class(self) -> &'static str {
        match self {
            ScmProvider::None => class::NULL_SCM,
            ScmProvider::Git => class::GIT_SCM,
            ScmProvider::Subversion => class::SUBVERSION_SCM,
            ScmProvider::Cvs => class::CVS_SCM,
        }
    }

    /// Builds this provider's `<scm>` element from the record.
    pub fn build(self, config: &JobConfig) -> Element {
        match self {
            ScmProvider::None => null_scm(),
            ScmProvider::Git => git_scm(config),
            ScmProvider::Subversion => subversion_scm(config),
            ScmProvider::Cvs => cvs_scm(config),
        }
    }
}

/// Builds the `<scm>` element selected by the record's provider.
pub fn build(config: &JobConfig) -> Element {
    config.scm_provider().build(config)
}

fn scm_url(config: &JobConfig) -> &str {
    config.scm_url().unwrap_or_default()
}

fn null_scm() -> Element {
    Element::typed("scm", class::NULL_SCM)
}

fn git_scm(config: &JobConfig) -> Element {
    let remote = Element::new(element::GIT_REMOTE_CONFIG)
        .with(Node::empty("name"))
        .with(Node::empty("refspec"))
        .with(Node::value("url", scm_url(config)));

    let branch =
        Element::new(element::GIT_BRANCH_SPEC).with(Node::value("name", config.scm_branch()));

    Element::typed("scm", class::GIT_SCM)
        .with(Node::value("configVersion", defaults::GIT_CONFIG_VERSION))
        .with(Element::new("userRemoteConfigs").with(remote))
        .with(Element::new("branches").with(branch))
        .with(Node::value("disableSubmodules", false))
        .with(Node::value("recursiveSubmodules", true))
        .with(Node::value("doGenerateSubmoduleConfigurations", false))
        .with(Node::value("authorOrCommitter", false))
        .with(Node::value("clean", false))
        .with(Node::value("wipeOutWorkspace", false))
        .with(Node::value("pruneBranches", false))
        .with(Node::value("remotePoll", false))
        .with(Node::value("ignoreNotifyCommit", false))
        .with(Node::value("useShallowClone", false))
        .with(Element::typed(
            "buildChooser",
            class::GIT_DEFAULT_BUILD_CHOOSER,
        ))
        .with(Node::value("gitTool", defaults::GIT_TOOL))
        .with(Element::typed("submoduleCfg", class::LIST))
        .with(Node::empty("relativeTargetDir"))
        .with(Node::empty("reference"))
        .with(Node::empty("includedRegions"))
        .with(Node::empty("excludedRegions"))
        .with(Node::empty("excludedUsers"))
        .with(Node::empty("gitConfigName"))
        .with(Node::empty("gitConfigEmail"))
        .with(Node::value("skipTag", false))
        .with(Node::empty("scmName"))
}

fn subversion_scm(config: &JobConfig) -> Element {
    let location = Element::new(element::SVN_MODULE_LOCATION)
        .with(Node::value("remote", scm_url(config)))
        .with(Node::value("local", defaults::SVN_LOCAL_DIR));

    Element::typed("scm", class::SUBVERSION_SCM)
        .with(Element::new("locations").with(location))
        .with(Node::empty("includedRegions"))
        .with(Node::empty("excludedRegions"))
        .with(Node::empty("excludedUsers"))
        .with(Node::empty("excludedRevprop"))
        .with(Node::empty("excludedCommitMessages"))
        .with(Element::typed(
            "workspaceUpdater",
            class::SVN_UPDATE_UPDATER,
        ))
}

/// The CVS branch: an explicit non-empty branch, else the tag, else `master`.
fn cvs_branch(config: &JobConfig) -> &str {
    config
        .explicit_scm_branch()
        .filter(|branch| !branch.is_empty())
        .or_else(|| config.scm_tag().filter(|tag| !tag.is_empty()))
        .unwrap_or(defaults::DEFAULT_SCM_BRANCH)
}

fn cvs_scm(config: &JobConfig) -> Element {
    Element::typed("scm", class::CVS_SCM)
        .with_tag(TypeTag::plugin(defaults::CVS_PLUGIN))
        .with(Node::value("cvsroot", scm_url(config)))
        .with(Node::optional_text("module", config.scm_module()))
        .with(Node::value("branch", cvs_branch(config)))
        .with(Node::value("canUseUpdate", true))
        .with(Node::value(
            "useHeadIfNotFound",
            config.scm_use_head_if_tag_not_found(),
        ))
        .with(Node::value("flatten", true))
        .with(Node::value("isTag", config.scm_tag().is_some()))
        .with(Node::empty("excludedRegions"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Value;
    use crate::params::JobParams;

    fn config(provider: &str, url: &str) -> JobConfig {
        JobParams {
            scm_provider: Some(provider.to_string()),
            scm_url: Some(url.to_string()),
            ..Default::default()
        }
        .normalize()
        .unwrap()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ScmProvider::from_name("git"), ScmProvider::Git);
        assert_eq!(ScmProvider::from_name("svn"), ScmProvider::Subversion);
        assert_eq!(ScmProvider::from_name("cvs"), ScmProvider::Cvs);
        assert_eq!(ScmProvider::from_name(""), ScmProvider::None);
        assert_eq!(ScmProvider::from_name("Git"), ScmProvider::None);
        assert_eq!(ScmProvider::from_name("mercurial"), ScmProvider::None);
    }

    #[test]
    fn test_unknown_provider_logs_warning() {
        testing_logger::setup();
        let _ = ScmProvider::from_name("perforce");
        testing_logger::validate(|logs| {
            assert_eq!(logs.len(), 1);
            assert_eq!(logs[0].level, log::Level::Warn);
            assert!(logs[0].body.contains("perforce"));
        });
    }

    #[test]
    fn test_null_scm_has_only_type_tag() {
        let config = JobParams::default().normalize().unwrap();
        let scm = build(&config);
        assert_eq!(scm.name(), "scm");
        assert_eq!(scm.type_class(), Some(class::NULL_SCM));
        assert_eq!(scm.tags().len(), 1);
        assert!(scm.children().is_empty());
    }

    #[test]
    fn test_git_scm_remote_and_branch() {
        let scm = build(&config("git", "https://x/repo.git"));
        assert_eq!(scm.type_class(), Some(class::GIT_SCM));

        let remote = scm
            .child_element("userRemoteConfigs")
            .and_then(|e| e.child_element(element::GIT_REMOTE_CONFIG))
            .unwrap();
        assert_eq!(remote.child_names(), vec!["name", "refspec", "url"]);
        assert!(remote.child("name").unwrap().is_empty_element());
        assert_eq!(remote.child_value("url"), Some(&Value::from("https://x/repo.git")));

        let branch = scm
            .child_element("branches")
            .and_then(|e| e.child_element(element::GIT_BRANCH_SPEC))
            .unwrap();
        assert_eq!(branch.child_value("name"), Some(&Value::from("master")));
    }

    #[test]
    fn test_git_scm_fixed_children_order() {
        let scm = build(&config("git", "https://x/repo.git"));
        assert_eq!(
            scm.child_names(),
            vec![
                "configVersion",
                "userRemoteConfigs",
                "branches",
                "disableSubmodules",
                "recursiveSubmodules",
                "doGenerateSubmoduleConfigurations",
                "authorOrCommitter",
                "clean",
                "wipeOutWorkspace",
                "pruneBranches",
                "remotePoll",
                "ignoreNotifyCommit",
                "useShallowClone",
                "buildChooser",
                "gitTool",
                "submoduleCfg",
                "relativeTargetDir",
                "reference",
                "includedRegions",
                "excludedRegions",
                "excludedUsers",
                "gitConfigName",
                "gitConfigEmail",
                "skipTag",
                "scmName",
            ]
        );
        assert_eq!(scm.child_value("configVersion"), Some(&Value::from("2")));
        assert_eq!(
            scm.child_value("recursiveSubmodules"),
            Some(&Value::Bool(true))
        );
        assert_eq!(
            scm.child_element("buildChooser").unwrap().type_class(),
            Some(class::GIT_DEFAULT_BUILD_CHOOSER)
        );
        assert_eq!(
            scm.child_element("submoduleCfg").unwrap().type_class(),
            Some("list")
        );
    }

    #[test]
    fn test_git_scm_uses_explicit_branch() {
        let config = JobParams {
            scm_branch: Some("release/2.x".to_string()),
            ..JobParams {
                scm_provider: Some("git".to_string()),
                scm_url: Some("git@example.com:repo.git".to_string()),
                ..Default::default()
            }
        }
        .normalize()
        .unwrap();
        let scm = build(&config);
        let branch = scm
            .child_element("branches")
            .and_then(|e| e.child_element(element::GIT_BRANCH_SPEC))
            .unwrap();
        assert_eq!(branch.child_value("name"), Some(&Value::from("release/2.x")));
    }

    #[test]
    fn test_subversion_scm() {
        let scm = build(&config("svn", "https://svn.example.com/trunk"));
        assert_eq!(scm.type_class(), Some(class::SUBVERSION_SCM));
        assert_eq!(
            scm.child_names(),
            vec![
                "locations",
                "includedRegions",
                "excludedRegions",
                "excludedUsers",
                "excludedRevprop",
                "excludedCommitMessages",
                "workspaceUpdater",
            ]
        );
        let location = scm
            .child_element("locations")
            .and_then(|e| e.child_element(element::SVN_MODULE_LOCATION))
            .unwrap();
        assert_eq!(
            location.child_value("remote"),
            Some(&Value::from("https://svn.example.com/trunk"))
        );
        assert_eq!(location.child_value("local"), Some(&Value::from(".")));
        assert_eq!(
            scm.child_element("workspaceUpdater").unwrap().type_class(),
            Some(class::SVN_UPDATE_UPDATER)
        );
    }

    #[test]
    fn test_cvs_scm_tag_without_branch() {
        let config = JobParams {
            scm_provider: Some("cvs".to_string()),
            scm_url: Some("cvsroot".to_string()),
            scm_tag: Some("v1".to_string()),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        let scm = build(&config);
        assert_eq!(scm.type_class(), Some(class::CVS_SCM));
        assert_eq!(scm.plugin(), Some("cvs@1.6"));
        assert_eq!(scm.child_value("cvsroot"), Some(&Value::from("cvsroot")));
        assert_eq!(scm.child_value("branch"), Some(&Value::from("v1")));
        assert_eq!(scm.child_value("isTag"), Some(&Value::Bool(true)));
        assert!(scm.child("module").unwrap().is_empty_element());
    }

    #[test]
    fn test_cvs_scm_branch_wins_over_tag() {
        let config = JobParams {
            scm_provider: Some("cvs".to_string()),
            scm_url: Some("cvsroot".to_string()),
            scm_module: Some("core".to_string()),
            scm_branch: Some("stable".to_string()),
            scm_tag: Some("v1".to_string()),
            scm_use_head_if_tag_not_found: Some(true),
            ..Default::default()
        }
        .normalize()
        .unwrap();
        let scm = build(&config);
        assert_eq!(scm.child_value("module"), Some(&Value::from("core")));
        assert_eq!(scm.child_value("branch"), Some(&Value::from("stable")));
        assert_eq!(scm.child_value("isTag"), Some(&Value::Bool(true)));
        assert_eq!(
            scm.child_value("useHeadIfNotFound"),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_cvs_scm_without_tag() {
        let scm = build(&config("cvs", "cvsroot"));
        assert_eq!(scm.child_value("branch"), Some(&Value::from("master")));
        assert_eq!(scm.child_value("isTag"), Some(&Value::Bool(false)));
        assert_eq!(scm.child_value("canUseUpdate"), Some(&Value::Bool(true)));
        assert_eq!(scm.child_value("flatten"), Some(&Value::Bool(true)));
        assert_eq!(
            scm.child_names(),
            vec![
                "cvsroot",
                "module",
                "branch",
                "canUseUpdate",
                "useHeadIfNotFound",
                "flatten",
                "isTag",
                "excludedRegions",
            ]
        );
    }
}
