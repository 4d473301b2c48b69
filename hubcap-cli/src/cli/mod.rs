//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the hubcap tool. Every
//! subcommand maps onto one client operation and prints its result as JSON.

mod check;
mod search;
mod tree;
mod user;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use directories::BaseDirs;
use hubcap::{GitHubClient, find_auth, resolve_auth};
use tokio::runtime::Runtime;
use tracing::info;

use crate::config::load_client_config;
use crate::output::ColorMode;

/// Top-level CLI command for the hubcap tool
#[derive(Parser)]
#[command(name = "hubcap")]
#[command(about = "A command-line client for the GitHub REST API")]
#[command(
  long_about = "Hubcap talks to the GitHub v3 REST API: user profiles, emails and followers,\n\
        repository/issue/user/code search, and git tree objects.\n\n\
        Credentials come from GITHUB_TOKEN or a .netrc entry for github.com."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Base URL of the GitHub API (overrides config file and HUBCAP_API_URL)
  #[arg(long, global = true, value_name = "URL")]
  pub api_url: Option<String>,

  /// Path to a config file (defaults to config.toml in the user config dir)
  #[arg(long, global = true, env = "HUBCAP_CONFIG", value_name = "PATH")]
  pub config: Option<PathBuf>,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the hubcap tool
#[derive(Subcommand)]
pub enum Commands {
  /// Check credentials and connectivity
  #[command(long_about = "Verify that your GitHub credentials work.\n\n\
            Sends a single authenticated request and, on success, prints the\n\
            authenticated user.")]
  Check,

  /// Search repositories, issues, users or code
  #[command(arg_required_else_help = true)]
  Search(search::SearchArgs),

  /// Read and create git trees
  #[command(arg_required_else_help = true)]
  Tree(tree::TreeArgs),

  /// User profiles, emails and followers
  #[command(arg_required_else_help = true)]
  User(user::UserArgs),
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();

  let client = build_client(&cli)?;
  let rt = Runtime::new().context("Failed to create async runtime")?;

  rt.block_on(async {
    match cli.command {
      Commands::Check => check::handle_check_command(&client).await,
      Commands::Search(search) => search::handle_search_command(&client, search).await,
      Commands::Tree(tree) => tree::handle_tree_command(&client, tree).await,
      Commands::User(user) => user::handle_user_command(&client, user).await,
    }
  })
}

/// Create a client from the layered configuration and discovered credentials.
/// `check` requires credentials; every other command may run anonymously.
fn build_client(cli: &Cli) -> Result<GitHubClient> {
  let config = load_client_config(cli.config.as_deref(), cli.api_url.as_deref())?;

  let base_dirs = BaseDirs::new().context("Failed to determine home directory")?;
  let home = base_dirs.home_dir();
  let auth = match cli.command {
    Commands::Check => Some(resolve_auth(home)?),
    _ => find_auth(home).context("Failed to load GitHub credentials")?,
  };
  if auth.is_none() {
    info!("No GitHub credentials found, sending unauthenticated requests");
  }

  GitHubClient::with_config(auth, &config).context("Failed to create GitHub client")
}
