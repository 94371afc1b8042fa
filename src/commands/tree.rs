//! # Tree Command Implementation
//!
//! This module implements the `tree` subcommand, which displays the job
//! document built from a parameter file as a hierarchy, with type tags and
//! scalar values inline.
//!
//! This command is a safe, read-only operation that does not modify any files.

use anyhow::{Context, Result};
use clap::Args;
use ptree::{print_tree, TreeItem};
use std::path::PathBuf;

use jenkins_freestyle::document::{Element, Node};
use jenkins_freestyle::job;
use jenkins_freestyle::output::OutputConfig;

use super::{load_params, DEFAULT_PARAMS_FILE};

/// Display the job document as a tree
#[derive(Args, Debug)]
pub struct TreeArgs {
    /// Path to the job parameter file (YAML, JSON or TOML), or `-` for stdin.
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = DEFAULT_PARAMS_FILE,
        env = "JENKINS_FREESTYLE_PARAMS"
    )]
    pub params: PathBuf,

    /// Maximum depth to display.
    ///
    /// Use 0 to show only `<project>`, 1 to add its direct children, etc.
    #[arg(long, value_name = "NUM")]
    pub depth: Option<usize>,
}

/// Execute the `tree` command.
pub fn execute(args: TreeArgs, color_flag: &str) -> Result<()> {
    let out = OutputConfig::from_env_and_flag(color_flag);
    let params = load_params(&args.params)?;
    let project = job::build_document(params).context("Invalid job parameters")?;

    let root = element_node(&project, &out, args.depth.unwrap_or(usize::MAX), 0);
    print_tree(&root).context("Failed to display tree")?;

    Ok(())
}

fn element_label(element: &Element, out: &OutputConfig) -> String {
    let tags: Vec<String> = element
        .tags()
        .iter()
        .map(|tag| format!("{}={}", tag.attribute_name(), out.highlight(tag.value())))
        .collect();
    if tags.is_empty() {
        element.name().to_string()
    } else {
        format!("{} [{}]", element.name(), tags.join(", "))
    }
}

fn element_node(
    element: &Element,
    out: &OutputConfig,
    max_depth: usize,
    current_depth: usize,
) -> TreeNode {
    let label = element_label(element, out);
    if current_depth >= max_depth {
        return TreeNode {
            label,
            children: vec![],
        };
    }

    let children = element
        .children()
        .iter()
        .map(|child| match child {
            Node::Empty(name) => TreeNode::leaf(name.to_string()),
            Node::Value { name, value } => {
                TreeNode::leaf(format!("{} = {:?}", name, value.to_string()))
            }
            Node::Element(child) => element_node(child, out, max_depth, current_depth + 1),
        })
        .collect();
    TreeNode { label, children }
}

/// Tree node structure for ptree visualization
#[derive(Clone)]
struct TreeNode {
    label: String,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(label: String) -> Self {
        Self {
            label,
            children: vec![],
        }
    }
}

impl TreeItem for TreeNode {
    type Child = TreeNode;

    fn write_self<W: std::io::Write>(
        &self,
        f: &mut W,
        _style: &ptree::Style,
    ) -> std::io::Result<()> {
        write!(f, "{}", self.label)
    }

    fn children(&self) -> std::borrow::Cow<'_, [Self::Child]> {
        std::borrow::Cow::Borrowed(&self.children)
    }
}
