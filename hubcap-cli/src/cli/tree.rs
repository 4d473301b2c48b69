//! # Tree Command
//!
//! Reads and creates git tree objects in a repository.

use anyhow::{Context, Result, bail};
use clap::{Args, Subcommand};
use hubcap::{GitHubClient, TreeEntry, parse_repo_spec};

use crate::output::print_json;

/// Command for git tree operations
#[derive(Args)]
pub struct TreeArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: TreeSubcommands,
}

/// Subcommands for the tree command
#[derive(Subcommand)]
pub enum TreeSubcommands {
  /// Fetch a tree by SHA
  Get {
    /// Repository as owner/repo or a GitHub URL
    repo: String,
    /// Tree SHA (or a ref such as a branch name)
    sha: String,
    /// Include every nested subtree
    #[arg(short, long)]
    recursive: bool,
  },

  /// Create a tree from a list of entries
  #[command(long_about = "Create a new tree object.\n\n\
            Each --entry is PATH:MODE:TYPE:SHA, e.g. src/lib.rs:100644:blob:<sha>.\n\
            With --base the entries are layered on top of an existing tree.")]
  Create {
    /// Repository as owner/repo or a GitHub URL
    repo: String,
    /// SHA of the tree to build on
    #[arg(long, value_name = "SHA")]
    base: Option<String>,
    /// Tree entry as PATH:MODE:TYPE:SHA (repeatable)
    #[arg(long = "entry", required = true, value_name = "PATH:MODE:TYPE:SHA")]
    entries: Vec<String>,
  },
}

/// Handle the tree command
pub(crate) async fn handle_tree_command(client: &GitHubClient, tree: TreeArgs) -> Result<()> {
  match tree.subcommand {
    TreeSubcommands::Get { repo, sha, recursive } => {
      let (owner, repo) = parse_repo_spec(&repo)?;
      print_json(&client.get_tree(&owner, &repo, &sha, recursive).await?.body)
    }
    TreeSubcommands::Create { repo, base, entries } => {
      let (owner, repo) = parse_repo_spec(&repo)?;
      let entries = entries
        .iter()
        .map(String::as_str)
        .map(parse_entry)
        .collect::<Result<Vec<_>>>()?;
      let base = base.unwrap_or_default();
      print_json(&client.create_tree(&owner, &repo, &base, &entries).await?.body)
    }
  }
}

/// Parse `PATH:MODE:TYPE:SHA`. The path is taken from the left of the last
/// three separators, so it may itself contain colons.
fn parse_entry(spec: &str) -> Result<TreeEntry> {
  let mut parts = spec.rsplitn(4, ':');
  let (Some(sha), Some(kind), Some(mode), Some(path)) = (parts.next(), parts.next(), parts.next(), parts.next())
  else {
    bail!("Invalid tree entry {spec:?}: expected PATH:MODE:TYPE:SHA");
  };

  if [path, mode, kind, sha].iter().any(|part| part.is_empty()) {
    bail!("Invalid tree entry {spec:?}: empty component");
  }
  if !matches!(kind, "blob" | "tree" | "commit") {
    bail!("Invalid tree entry {spec:?}: type must be blob, tree or commit");
  }
  u32::from_str_radix(mode, 8).with_context(|| format!("Invalid tree entry {spec:?}: mode must be octal"))?;

  Ok(TreeEntry {
    path: Some(path.to_string()),
    mode: Some(mode.to_string()),
    kind: Some(kind.to_string()),
    sha: Some(sha.to_string()),
    ..Default::default()
  })
}
