//! Shared test utilities for integration and E2E tests.
//!
//! Add `mod common;` to a test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_params(params::GIT);
//!     fixture.command().arg("render").assert().success();
//! }
//! ```

use assert_fs::prelude::*;
use std::path::Path;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::params;
    pub use super::TestFixture;
}

/// Job parameter files used across tests.
#[allow(dead_code)]
pub mod params {
    /// No parameters at all.
    pub const EMPTY: &str = "{}\n";

    /// Git checkout with default branch.
    pub const GIT: &str = r#"
scm_provider: git
scm_url: https://x/repo.git
"#;

    /// CVS checkout of a tag.
    pub const CVS_TAG: &str = r#"
scm_provider: cvs
scm_url: cvsroot
scm_tag: v1
"#;

    /// SVN provider without the required URL.
    pub const SVN_NO_URL: &str = "scm_provider: svn\n";

    /// Every section populated.
    pub const FULL: &str = r#"
keep_dependencies: true
concurrent_build: true
scm_provider: svn
scm_url: https://svn.example.com/trunk
timer: "H 2 * * *"
polling: "H/15 * * * *"
shell_command: make test
assigned_node: linux
env_inject:
  FOO: bar
  RETRIES: 3
"#;

    /// Not a mapping.
    pub const NOT_A_MAPPING: &str = "- scm_provider: git\n";
}

/// A temporary directory holding a `job.yaml` parameter file.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
}

impl TestFixture {
    /// Create a new test fixture with an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: assert_fs::TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Write `job.yaml` with the given content.
    pub fn with_params(self, content: &str) -> Self {
        self.with_file("job.yaml", content)
    }

    /// Add a file with the given path and content.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.temp_dir
            .child(path)
            .write_str(content)
            .expect("Failed to write file");
        self
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a child path in the temp directory.
    #[allow(dead_code)]
    pub fn child(&self, path: &str) -> assert_fs::fixture::ChildPath {
        self.temp_dir.child(path)
    }

    /// Create a command configured to run in this fixture's directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("jenkins-freestyle");
        cmd.current_dir(self.path())
            .env_remove("JENKINS_FREESTYLE_PARAMS")
            .env_remove("RUST_LOG");
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
