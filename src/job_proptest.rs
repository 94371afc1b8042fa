//! Property-based tests for job document construction.
//!
//! These tests use proptest to generate parameter sets and verify that the
//! document invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::defaults::class;
    use crate::document::Value;
    use crate::job::{self, scm};
    use crate::params::{AssignedNode, JobParams};
    use proptest::prelude::*;

    fn optional_text() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[a-zA-Z0-9 */@:._-]{0,16}")
    }

    fn provider() -> impl Strategy<Value = Option<String>> {
        proptest::option::of(prop_oneof![
            Just("git".to_string()),
            Just("svn".to_string()),
            Just("cvs".to_string()),
            "[a-z]{1,6}",
        ])
    }

    prop_compose! {
        fn job_params()(
            keep_dependencies in proptest::option::of(any::<bool>()),
            concurrent_build in proptest::option::of(any::<bool>()),
            scm_provider in provider(),
            scm_url in optional_text(),
            scm_branch in optional_text(),
            scm_tag in optional_text(),
            timer in optional_text(),
            polling in optional_text(),
            shell_command in optional_text(),
            assigned_node in proptest::option::of("[a-z0-9-]{0,8}"),
        ) -> JobParams {
            JobParams {
                keep_dependencies,
                concurrent_build,
                scm_provider,
                scm_url,
                scm_branch,
                scm_tag,
                timer,
                polling,
                shell_command,
                assigned_node: assigned_node.map(AssignedNode::from_name),
                ..Default::default()
            }
        }
    }

    // ============================================================================
    // Validation properties
    // ============================================================================

    proptest! {
        /// Property: a named provider without a URL never yields a document
        #[test]
        fn provider_without_url_fails(provider in "[a-z]{1,6}", url in proptest::option::of(Just(String::new()))) {
            let params = JobParams {
                scm_provider: Some(provider),
                scm_url: url,
                ..Default::default()
            };
            let result = job::build_document(params);
            prop_assert!(result.is_err());
            prop_assert!(result.unwrap_err().is_validation());
        }

        /// Property: a named provider with a non-empty URL always succeeds
        #[test]
        fn provider_with_url_succeeds(provider in provider(), url in "[a-z:/.]{1,24}") {
            let params = JobParams {
                scm_provider: provider,
                scm_url: Some(url),
                ..Default::default()
            };
            prop_assert!(job::build_document(params).is_ok());
        }
    }

    // ============================================================================
    // Document shape properties
    // ============================================================================

    proptest! {
        /// Property: the trigger collection marker is always first and the
        /// entry count is 1 + timer + polling
        #[test]
        fn trigger_count_matches_schedules(params in job_params()) {
            let Ok(config) = params.normalize() else { return Ok(()); };
            let triggers = job::triggers::build(&config);
            prop_assert_eq!(triggers.type_class(), Some(class::VECTOR));
            let expected = 1
                + usize::from(config.timer_spec().is_some())
                + usize::from(config.poll_spec().is_some());
            prop_assert_eq!(triggers.entry_count(), expected);
        }

        /// Property: canRoam is false exactly when a node name is assigned
        #[test]
        fn can_roam_iff_no_named_node(params in job_params()) {
            let named = params
                .assigned_node
                .as_ref()
                .and_then(AssignedNode::name)
                .is_some();
            let Ok(config) = params.normalize() else { return Ok(()); };
            let project = job::build(&config);
            prop_assert_eq!(project.child_value("canRoam"), Some(&Value::Bool(!named)));
        }

        /// Property: the SCM block always carries its provider's class tag,
        /// and the null SCM carries nothing else
        #[test]
        fn scm_block_is_tagged(params in job_params()) {
            let Ok(config) = params.normalize() else { return Ok(()); };
            let block = scm::build(&config);
            prop_assert_eq!(block.type_class(), Some(config.scm_provider().class()));
            if config.scm_provider() == scm::ScmProvider::None {
                prop_assert!(block.children().is_empty());
            }
        }

        /// Property: the git branch spec always equals the record's branch
        #[test]
        fn git_branch_matches_record(branch in optional_text()) {
            let params = JobParams {
                scm_provider: Some("git".to_string()),
                scm_url: Some("https://example.com/repo.git".to_string()),
                scm_branch: branch.clone(),
                ..Default::default()
            };
            let config = params.normalize().unwrap();
            let block = scm::build(&config);
            let spec = block
                .child_element("branches")
                .and_then(|b| b.child_element("hudson.plugins.git.BranchSpec"))
                .unwrap();
            let expected = branch.unwrap_or_else(|| "master".to_string());
            prop_assert_eq!(spec.child_value("name"), Some(&Value::Text(expected)));
        }

        /// Property: CVS isTag is true iff a tag is present
        #[test]
        fn cvs_is_tag_iff_tag_present(tag in optional_text()) {
            let params = JobParams {
                scm_provider: Some("cvs".to_string()),
                scm_url: Some(":pserver:cvs.example.com:/cvsroot".to_string()),
                scm_tag: tag.clone(),
                ..Default::default()
            };
            let config = params.normalize().unwrap();
            let block = scm::build(&config);
            prop_assert_eq!(block.child_value("isTag"), Some(&Value::Bool(tag.is_some())));
        }

        /// Property: the top-level element order never changes
        #[test]
        fn project_order_is_fixed(params in job_params()) {
            let Ok(project) = job::build_document(params) else { return Ok(()); };
            prop_assert_eq!(
                project.child_names(),
                vec![
                    "actions",
                    "description",
                    "keepDependencies",
                    "properties",
                    "scm",
                    "disabled",
                    "blockBuildWhenDownstreamBuilding",
                    "blockBuildWhenUpstreamBuilding",
                    "triggers",
                    "concurrentBuild",
                    "publishers",
                    "buildWrappers",
                    "builders",
                    "assignedNode",
                    "canRoam",
                ]
            );
        }
    }
}
