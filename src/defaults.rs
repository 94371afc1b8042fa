//! Default values and fixed schema constants for freestyle job documents.
//!
//! This module centralizes the defaults applied by the parameter normalizer
//! and the constant class names the consuming server dispatches on, so the
//! builders never spell them out twice.

/// Branch used when the caller does not name one.
pub const DEFAULT_SCM_BRANCH: &str = "master";

/// Default for `keep_dependencies`.
pub const DEFAULT_KEEP_DEPENDENCIES: bool = false;

/// Default for `block_build_when_downstream_building`.
pub const DEFAULT_BLOCK_DOWNSTREAM: bool = false;

/// Default for `block_build_when_upstream_building`.
pub const DEFAULT_BLOCK_UPSTREAM: bool = false;

/// Default for `concurrent_build`.
pub const DEFAULT_CONCURRENT_BUILD: bool = false;

/// Default for `scm_use_head_if_tag_not_found`.
pub const DEFAULT_USE_HEAD_IF_TAG_NOT_FOUND: bool = false;

/// Root element of a freestyle job document.
pub const PROJECT_ELEMENT: &str = "project";

/// Type tags the server uses to pick a schema implementation.
pub mod class {
    pub const NULL_SCM: &str = "hudson.scm.NullSCM";
    pub const GIT_SCM: &str = "hudson.plugins.git.GitSCM";
    pub const SUBVERSION_SCM: &str = "hudson.scm.SubversionSCM";
    pub const CVS_SCM: &str = "hudson.scm.CVSSCM";
    pub const GIT_DEFAULT_BUILD_CHOOSER: &str = "hudson.plugins.git.util.DefaultBuildChooser";
    pub const SVN_UPDATE_UPDATER: &str = "hudson.scm.subversion.UpdateUpdater";
    pub const VECTOR: &str = "vector";
    pub const LIST: &str = "list";
}

/// Element names of list entries whose name is itself a class.
pub mod element {
    pub const GIT_REMOTE_CONFIG: &str = "hudson.plugins.git.UserRemoteConfig";
    pub const GIT_BRANCH_SPEC: &str = "hudson.plugins.git.BranchSpec";
    pub const SVN_MODULE_LOCATION: &str = "hudson.scm.SubversionSCM_-ModuleLocation";
    pub const TIMER_TRIGGER: &str = "hudson.triggers.TimerTrigger";
    pub const SCM_TRIGGER: &str = "hudson.triggers.SCMTrigger";
    pub const SHELL_BUILDER: &str = "hudson.tasks.Shell";
    pub const ENV_INJECT_WRAPPER: &str = "EnvInjectBuildWrapper";
}

/// Plugin attribute carried by the CVS SCM block.
pub const CVS_PLUGIN: &str = "cvs@1.6";

/// Git plugin configuration format version.
pub const GIT_CONFIG_VERSION: &str = "2";

/// Git installation used for checkout.
pub const GIT_TOOL: &str = "Default";

/// Local checkout directory of a Subversion module location.
pub const SVN_LOCAL_DIR: &str = ".";
