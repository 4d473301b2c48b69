//! Credential discovery for the GitHub client.
//!
//! Credentials come from the `GITHUB_TOKEN` environment variable or, failing
//! that, from a `machine github.com` entry in the user's `.netrc`. The CLI and
//! the integration tests share this lookup so they agree on where tokens live.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::consts::{ENV_GITHUB_TOKEN, GITHUB_MACHINE};
use crate::error::{Error, Result};
use crate::models::GitHubAuth;

/// Login/password pair from one `.netrc` machine entry
#[derive(Debug, Clone, PartialEq, Eq)]
struct NetrcEntry {
  login: String,
  password: String,
}

/// Returns the path to the `.netrc` file for the provided home directory.
pub fn netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// Find credentials without failing when none are configured.
///
/// Returns `Ok(None)` when neither `GITHUB_TOKEN` nor a `.netrc` entry for
/// `github.com` exists. A `.netrc` that exists but cannot be read is an error.
pub fn find_auth(home: &Path) -> Result<Option<GitHubAuth>> {
  find_auth_with_token(home, std::env::var(ENV_GITHUB_TOKEN).ok())
}

fn find_auth_with_token(home: &Path, env_token: Option<String>) -> Result<Option<GitHubAuth>> {
  if let Some(token) = env_token
    && !token.trim().is_empty()
  {
    debug!("Using GitHub token from {}", ENV_GITHUB_TOKEN);
    return Ok(Some(GitHubAuth::Token(token.trim().to_string())));
  }

  let path = netrc_path(home);
  if !path.exists() {
    debug!("No .netrc file at {}", path.display());
    return Ok(None);
  }

  let content = fs::read_to_string(&path).map_err(|source| Error::Io {
    path: path.display().to_string(),
    source,
  })?;

  Ok(parse_netrc(&content, GITHUB_MACHINE).map(|entry| {
    debug!("Using GitHub credentials for {} from .netrc", entry.login);
    GitHubAuth::Basic {
      username: entry.login,
      token: entry.password,
    }
  }))
}

/// Like [`find_auth`], but missing credentials are an error.
pub fn resolve_auth(home: &Path) -> Result<GitHubAuth> {
  require_auth(home, find_auth(home)?)
}

fn require_auth(home: &Path, auth: Option<GitHubAuth>) -> Result<GitHubAuth> {
  auth.ok_or_else(|| {
    Error::Credentials(format!(
      "GitHub credentials not found. Set {ENV_GITHUB_TOKEN} or add credentials for machine '{GITHUB_MACHINE}' to {}.",
      netrc_path(home).display()
    ))
  })
}

/// Parse `.netrc` content and return the entry for `target_machine`.
///
/// Tokens may be spread over any number of lines, so both the single-line
/// (`machine host login user password pass`) and multi-line layouts work.
/// An entry missing its login or password is treated as absent.
fn parse_netrc(content: &str, target_machine: &str) -> Option<NetrcEntry> {
  let mut tokens = content.split_whitespace();

  let mut current: Option<&str> = None;
  let mut login: Option<&str> = None;
  let mut password: Option<&str> = None;

  let take = |current: Option<&str>, login: Option<&str>, password: Option<&str>| match (current, login, password) {
    (Some(machine), Some(login), Some(password)) if machine == target_machine => Some(NetrcEntry {
      login: login.to_string(),
      password: password.to_string(),
    }),
    _ => None,
  };

  while let Some(token) = tokens.next() {
    match token {
      "machine" | "default" => {
        if let Some(entry) = take(current, login, password) {
          return Some(entry);
        }
        current = if token == "machine" { tokens.next() } else { None };
        login = None;
        password = None;
      }
      "login" => login = tokens.next(),
      "password" => password = tokens.next(),
      _ => {}
    }
  }

  take(current, login, password)
}
