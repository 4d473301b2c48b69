//! # GitHub API Models
//!
//! Records mirroring the JSON schema of the users, search and git trees APIs.
//!
//! Every scalar field is an `Option`: GitHub treats an omitted field
//! differently from a zero value (a `PATCH /user` only touches the fields that
//! are present), so `None` is skipped on serialization instead of being sent
//! as `null` or `""`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Represents GitHub authentication credentials
#[derive(Clone, PartialEq, Eq)]
pub enum GitHubAuth {
  /// Personal access token sent as `Authorization: token <token>`
  Token(String),
  /// Username and token sent with HTTP basic authentication
  Basic { username: String, token: String },
}

impl fmt::Debug for GitHubAuth {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GitHubAuth::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
      GitHubAuth::Basic { username, .. } => f
        .debug_struct("Basic")
        .field("username", username)
        .field("token", &"<redacted>")
        .finish(),
    }
  }
}

/// Represents a GitHub user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub login: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub avatar_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gravatar_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub company: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub blog: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub hireable: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub public_repos: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub followers: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub following: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
}

/// A follower entry: the user plus links for querying them further
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FollowingUser {
  #[serde(flatten)]
  pub user: User,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub followers_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub following_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub gists_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub starred_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subscriptions_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub organizations_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repos_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub events_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub received_events_url: Option<String>,
}

/// A single email address of the authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserEmail(pub String);

impl From<&str> for UserEmail {
  fn from(email: &str) -> Self {
    UserEmail(email.to_string())
  }
}

impl fmt::Display for UserEmail {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Optional parameters for listing all users
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserListOptions {
  /// ID of the last user seen
  pub since: u64,
}

/// Represents a GitHub repository
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Repository {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub owner: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub full_name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub homepage: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default_branch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub master_branch: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub pushed_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub clone_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub git_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ssh_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub svn_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mirror_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub language: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub fork: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub private: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub forks_count: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub watchers_count: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stargazers_count: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub open_issues_count: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_issues: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub has_wiki: Option<bool>,
}

/// Represents a GitHub issue label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Label {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub color: Option<String>,
}

/// Represents a GitHub issue
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Issue {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub number: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub state: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub body: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub user: Option<User>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<Label>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<User>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub comments: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub closed_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub updated_at: Option<DateTime<Utc>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
}

/// A single code search hit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeResult {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sha: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_url: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub repository: Option<Repository>,
}

/// Optional parameters shared by all search endpoints
///
/// When passed to a search, every field is sent as a query parameter, empty
/// strings and zeros included; GitHub falls back to its defaults for those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
  /// Sort field, e.g. `stars`, `forks`, `updated` for repositories or
  /// `followers`, `joined` for users. Empty means best match.
  pub sort: String,
  /// `asc` or `desc`; only meaningful together with `sort`.
  pub order: String,
  /// Page of results to retrieve.
  pub page: u32,
  /// Number of results per page, up to 100.
  pub per_page: u32,
}

/// Result of a repositories search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositoriesSearchResult {
  #[serde(rename = "total_count", skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
  #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
  pub repositories: Vec<Repository>,
}

/// Result of an issues search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IssuesSearchResult {
  #[serde(rename = "total_count", skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
  #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
  pub issues: Vec<Issue>,
}

/// Result of a users search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsersSearchResult {
  #[serde(rename = "total_count", skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
  #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
  pub users: Vec<User>,
}

/// Result of a code search
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeSearchResult {
  #[serde(rename = "total_count", skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
  #[serde(rename = "items", default, skip_serializing_if = "Vec::is_empty")]
  pub code_results: Vec<CodeResult>,
}

/// A git tree object
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tree {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sha: Option<String>,
  #[serde(rename = "tree", default, skip_serializing_if = "Vec::is_empty")]
  pub entries: Vec<TreeEntry>,
}

/// One entry of a git tree: a blob, a subtree or a submodule commit
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeEntry {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sha: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub path: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub mode: Option<String>,
  /// `blob`, `tree` or `commit`
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub size: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
}

/// Error body GitHub sends with most non-2xx responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
  #[serde(default)]
  pub message: String,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub errors: Vec<FieldError>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub documentation_url: Option<String>,
}

/// Validation detail attached to an [`ErrorResponse`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
  #[serde(default)]
  pub resource: String,
  #[serde(default)]
  pub field: String,
  #[serde(default)]
  pub code: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub message: Option<String>,
}
