//! # Search Command
//!
//! Repository, issue, user and code search.

use anyhow::Result;
use clap::{Args, Subcommand};
use hubcap::{GitHubClient, SearchOptions};

use crate::output::print_json;

/// Command for searching GitHub
#[derive(Args)]
pub struct SearchArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: SearchSubcommands,
}

/// What to search for
#[derive(Subcommand)]
pub enum SearchSubcommands {
  /// Search repositories
  #[command(alias = "repositories")]
  Repos(QueryArgs),
  /// Search issues and pull requests
  Issues(QueryArgs),
  /// Search users
  Users(QueryArgs),
  /// Search code
  Code(QueryArgs),
}

/// Query and paging options shared by all search kinds
#[derive(Args, Debug, Default)]
pub struct QueryArgs {
  /// Search query using GitHub search syntax, e.g. "tetris language:assembly"
  pub query: String,

  /// Sort field (e.g. stars, forks, updated, followers)
  #[arg(long)]
  pub sort: Option<String>,

  /// Sort order: asc or desc
  #[arg(long)]
  pub order: Option<String>,

  /// Page of results
  #[arg(long)]
  pub page: Option<u32>,

  /// Results per page (max 100)
  #[arg(long)]
  pub per_page: Option<u32>,
}

impl QueryArgs {
  /// Search options, or `None` when no option flag was given so that only the
  /// query is sent.
  fn options(&self) -> Option<SearchOptions> {
    if self.sort.is_none() && self.order.is_none() && self.page.is_none() && self.per_page.is_none() {
      return None;
    }

    Some(SearchOptions {
      sort: self.sort.clone().unwrap_or_default(),
      order: self.order.clone().unwrap_or_default(),
      page: self.page.unwrap_or(1),
      per_page: self.per_page.unwrap_or(30),
    })
  }
}

/// Handle the search command
pub(crate) async fn handle_search_command(client: &GitHubClient, search: SearchArgs) -> Result<()> {
  match search.subcommand {
    SearchSubcommands::Repos(args) => {
      let opt = args.options();
      print_json(&client.search_repositories(&args.query, opt.as_ref()).await?.body)
    }
    SearchSubcommands::Issues(args) => {
      let opt = args.options();
      print_json(&client.search_issues(&args.query, opt.as_ref()).await?.body)
    }
    SearchSubcommands::Users(args) => {
      let opt = args.options();
      print_json(&client.search_users(&args.query, opt.as_ref()).await?.body)
    }
    SearchSubcommands::Code(args) => {
      let opt = args.options();
      print_json(&client.search_code(&args.query, opt.as_ref()).await?.body)
    }
  }
}
