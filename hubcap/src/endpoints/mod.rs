//! # GitHub API Endpoints
//!
//! Endpoint methods on [`GitHubClient`](crate::GitHubClient), grouped by API
//! area: the authenticated and public user APIs, search, and git trees.

pub mod git;
pub mod search;
pub mod users;
