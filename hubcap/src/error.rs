//! # Client Errors
//!
//! Error kinds surfaced by every [`GitHubClient`](crate::GitHubClient)
//! operation. Request construction problems fail before any network I/O,
//! transport failures are passed through untouched, and non-2xx responses keep
//! the status code and whatever structured error body GitHub sent.

use reqwest::{Method, StatusCode};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors returned by the GitHub client
#[derive(Debug, Error)]
pub enum Error {
  /// The request path or base URL could not be turned into a valid URL.
  #[error("failed to parse request URL {input:?}: {reason}")]
  UrlParse { input: String, reason: String },

  /// The request could not be sent or the response could not be read.
  #[error("HTTP transport error: {0}")]
  Transport(#[from] reqwest::Error),

  /// GitHub answered with a non-2xx status.
  #[error("{method} {url}: {status}{}", api_message(.response))]
  Api {
    method: Method,
    url: String,
    status: StatusCode,
    response: Option<ErrorResponse>,
  },

  /// GitHub answered with a success status the operation does not understand.
  #[error("{method} {url}: unexpected status {status}")]
  UnexpectedStatus {
    method: Method,
    url: String,
    status: StatusCode,
  },

  /// The request body could not be serialized to JSON.
  #[error("failed to encode request body: {0}")]
  Encode(#[source] serde_json::Error),

  /// The response body could not be deserialized into the expected type.
  #[error("failed to decode response body: {0}")]
  Decode(#[source] serde_json::Error),

  /// A configuration value could not be used.
  #[error("invalid configuration: {0}")]
  Config(String),

  /// No usable credentials were found.
  #[error("{0}")]
  Credentials(String),

  /// A repository reference was neither `owner/repo` nor a GitHub URL.
  #[error("could not extract owner and repo from {0:?}")]
  InvalidRepo(String),

  /// A credentials file could not be read.
  #[error("failed to read {path}: {source}")]
  Io {
    path: String,
    #[source]
    source: std::io::Error,
  },
}

impl Error {
  /// HTTP status attached to the error, if GitHub produced one.
  pub fn status(&self) -> Option<StatusCode> {
    match self {
      Error::Api { status, .. } | Error::UnexpectedStatus { status, .. } => Some(*status),
      Error::Transport(err) => err.status(),
      _ => None,
    }
  }

  /// Whether this is a request-construction failure raised before any I/O.
  pub fn is_url_parse(&self) -> bool {
    matches!(self, Error::UrlParse { .. })
  }

  pub(crate) fn url_parse(input: impl Into<String>, reason: impl ToString) -> Self {
    Error::UrlParse {
      input: input.into(),
      reason: reason.to_string(),
    }
  }
}

/// GitHub's error message prefixed with a space, or nothing when there is none
fn api_message(response: &Option<ErrorResponse>) -> String {
  match response {
    Some(response) if !response.message.is_empty() => format!(" {}", response.message),
    _ => String::new(),
  }
}

impl From<url::ParseError> for Error {
  fn from(err: url::ParseError) -> Self {
    Error::url_parse("", err)
  }
}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;
