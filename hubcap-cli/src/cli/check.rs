//! # Check Command
//!
//! Verifies that the configured credentials are accepted and shows whom they
//! belong to.

use anyhow::Result;
use hubcap::GitHubClient;

use crate::output::{format_name, print_json, print_success};

/// Handle the check command. A rejected token surfaces as the API error from
/// fetching the authenticated user.
pub(crate) async fn handle_check_command(client: &GitHubClient) -> Result<()> {
  let user = client.get_user(None).await?.into_body();

  let login = user.login.as_deref().unwrap_or("unknown user");
  print_success(&format!(
    "Authenticated with {} as {}",
    client.base_url(),
    format_name(login)
  ));
  print_json(&user)
}
