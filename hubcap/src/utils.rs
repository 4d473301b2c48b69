//! # Repository Reference Parsing
//!
//! Turns the repository references people type on a command line into an
//! `(owner, repo)` pair.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static GITHUB_REPO_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"github\.com[/:]([^/\s]+)/([^/\s]+?)(?:\.git)?(?:[/#?].*)?$").expect("valid regex"));

static SHORT_REPO_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*)/([A-Za-z0-9._-]+)$").expect("valid regex"));

/// Extract owner and repo from `owner/repo` or a GitHub URL.
///
/// Accepted forms:
/// - `owner/repo`
/// - `https://github.com/owner/repo` (with or without `.git` or a trailing
///   path such as `/pull/123`)
/// - `git@github.com:owner/repo.git`
pub fn parse_repo_spec(spec: &str) -> Result<(String, String)> {
  let spec = spec.trim();

  let captures = SHORT_REPO_REGEX
    .captures(spec)
    .or_else(|| GITHUB_REPO_REGEX.captures(spec))
    .ok_or_else(|| Error::InvalidRepo(spec.to_string()))?;

  match (captures.get(1), captures.get(2)) {
    (Some(owner), Some(repo)) if !repo.as_str().is_empty() => {
      Ok((owner.as_str().to_string(), repo.as_str().to_string()))
    }
    _ => Err(Error::InvalidRepo(spec.to_string())),
  }
}
