//! # User Command
//!
//! Profiles, email addresses and followers of GitHub users.

use anyhow::Result;
use clap::{Args, Subcommand};
use hubcap::{GitHubClient, User, UserEmail, UserListOptions};

use crate::output::{format_name, print_info, print_json, print_success};

/// Command for user operations
#[derive(Args)]
pub struct UserArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: UserSubcommands,
}

/// Subcommands for the user command
#[derive(Subcommand)]
pub enum UserSubcommands {
  /// Show a user (the authenticated user when LOGIN is omitted)
  Get {
    /// GitHub login
    login: Option<String>,
  },

  /// Update the authenticated user's profile
  #[command(long_about = "Update the authenticated user's profile.\n\n\
            Only the fields you pass are sent; everything else is left unchanged.")]
  Edit(EditArgs),

  /// List all GitHub users in signup order
  List {
    /// Only list users with an ID greater than this
    #[arg(long)]
    since: Option<u64>,
  },

  /// Manage the authenticated user's email addresses
  #[command(subcommand)]
  Emails(EmailSubcommands),

  /// List a user's followers (the authenticated user when LOGIN is omitted)
  Followers {
    /// GitHub login
    login: Option<String>,
  },

  /// Check whether the authenticated user follows LOGIN
  Following {
    /// GitHub login
    login: String,
  },
}

/// Profile fields accepted by `user edit`
#[derive(Args, Debug, Default)]
pub struct EditArgs {
  /// Display name
  #[arg(long)]
  pub name: Option<String>,
  /// Public email address
  #[arg(long)]
  pub email: Option<String>,
  /// Blog or website URL
  #[arg(long)]
  pub blog: Option<String>,
  #[arg(long)]
  pub company: Option<String>,
  #[arg(long)]
  pub location: Option<String>,
  /// Whether you are available for hire (true or false)
  #[arg(long)]
  pub hireable: Option<bool>,
}

impl EditArgs {
  fn into_user(self) -> User {
    User {
      name: self.name,
      email: self.email,
      blog: self.blog,
      company: self.company,
      location: self.location,
      hireable: self.hireable,
      ..Default::default()
    }
  }
}

/// Subcommands for `user emails`
#[derive(Subcommand)]
pub enum EmailSubcommands {
  /// List email addresses
  List,
  /// Add email addresses
  Add {
    /// Addresses to add
    #[arg(required = true)]
    emails: Vec<String>,
  },
  /// Delete email addresses
  Delete {
    #[arg(required = true)]
    emails: Vec<String>,
  },
}

/// Handle the user command
pub(crate) async fn handle_user_command(client: &GitHubClient, user: UserArgs) -> Result<()> {
  match user.subcommand {
    UserSubcommands::Get { login } => print_json(&client.get_user(login.as_deref()).await?.body),
    UserSubcommands::Edit(edit) => print_json(&client.edit_user(&edit.into_user()).await?.body),
    UserSubcommands::List { since } => {
      let opt = since.map(|since| UserListOptions { since });
      print_json(&client.list_all_users(opt.as_ref()).await?.body)
    }
    UserSubcommands::Emails(emails) => handle_emails_command(client, emails).await,
    UserSubcommands::Followers { login } => print_json(&client.list_followers(login.as_deref()).await?.body),
    UserSubcommands::Following { login } => {
      if client.is_following(&login).await? {
        print_success(&format!("You are following {}", format_name(&login)));
      } else {
        print_info(&format!("You are not following {}", format_name(&login)));
      }
      Ok(())
    }
  }
}

async fn handle_emails_command(client: &GitHubClient, emails: EmailSubcommands) -> Result<()> {
  match emails {
    EmailSubcommands::List => print_json(&client.list_emails().await?.body),
    EmailSubcommands::Add { emails } => {
      let emails = to_emails(&emails);
      print_json(&client.add_emails(&emails).await?.body)
    }
    EmailSubcommands::Delete { emails } => {
      let emails = to_emails(&emails);
      client.delete_emails(&emails).await?;
      print_success(&format!("Deleted {} email address(es)", emails.len()));
      Ok(())
    }
  }
}

fn to_emails(emails: &[String]) -> Vec<UserEmail> {
  emails.iter().map(|email| UserEmail::from(email.as_str())).collect()
}
