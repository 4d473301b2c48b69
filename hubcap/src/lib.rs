//! # GitHub API Client
//!
//! Async client for a subset of the GitHub REST API v3: user profiles, emails
//! and followers, the search APIs, and git tree objects. Every operation is a
//! single HTTP request that returns the decoded body together with the raw
//! response metadata.

pub mod auth;
pub mod client;
pub mod config;
pub mod consts;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use auth::{find_auth, resolve_auth};
// Re-export the client
pub use client::{GitHubClient, Response, create_github_client};
pub use config::ClientConfig;
pub use error::{Error, Result};
// Re-export models
pub use models::{
  CodeResult, CodeSearchResult, ErrorResponse, FieldError, FollowingUser, GitHubAuth, Issue, IssuesSearchResult,
  Label, RepositoriesSearchResult, Repository, SearchOptions, Tree, TreeEntry, User, UserEmail, UserListOptions,
  UsersSearchResult,
};
pub use utils::parse_repo_spec;
