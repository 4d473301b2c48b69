//! # Client Configuration
//!
//! Transport settings shared by every request a [`GitHubClient`] makes: the
//! API base URL, the User-Agent and an optional timeout. Values come from
//! defaults, an optional config file deserialized by the caller, and finally
//! environment overrides.
//!
//! [`GitHubClient`]: crate::GitHubClient

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::consts::{API_BASE_URL, ENV_API_URL, ENV_TIMEOUT_SECS, ENV_USER_AGENT, USER_AGENT};
use crate::error::{Error, Result};

/// Settings for the HTTP transport behind a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
  /// Base URL every relative API path is joined onto
  pub base_url: String,
  /// Value of the User-Agent header
  pub user_agent: String,
  /// Per-request timeout in seconds; `None` waits indefinitely
  pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
  fn default() -> Self {
    Self {
      base_url: API_BASE_URL.to_string(),
      user_agent: USER_AGENT.to_string(),
      timeout_secs: None,
    }
  }
}

impl ClientConfig {
  /// Configuration pointing at another API host, e.g. GitHub Enterprise or a
  /// test server.
  pub fn with_base_url(base_url: impl Into<String>) -> Self {
    Self {
      base_url: base_url.into(),
      ..Self::default()
    }
  }

  /// Default configuration with environment overrides applied
  pub fn from_env() -> Result<Self> {
    Self::default().apply_env()
  }

  /// Override fields from `HUBCAP_API_URL`, `HUBCAP_USER_AGENT` and
  /// `HUBCAP_TIMEOUT_SECS` when they are set.
  pub fn apply_env(mut self) -> Result<Self> {
    if let Ok(base_url) = std::env::var(ENV_API_URL) {
      debug!("Using API base URL from {}", ENV_API_URL);
      self.base_url = base_url;
    }
    if let Ok(user_agent) = std::env::var(ENV_USER_AGENT) {
      self.user_agent = user_agent;
    }
    if let Ok(timeout) = std::env::var(ENV_TIMEOUT_SECS) {
      let secs = timeout
        .trim()
        .parse::<u64>()
        .map_err(|e| Error::Config(format!("{ENV_TIMEOUT_SECS}={timeout:?} is not a number of seconds: {e}")))?;
      self.timeout_secs = Some(secs);
    }
    Ok(self)
  }

  /// Request timeout, if one is configured
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout_secs.map(Duration::from_secs)
  }

  /// Parsed base URL, always ending in `/` so relative paths join beneath it
  pub fn parsed_base_url(&self) -> Result<Url> {
    let mut url = Url::parse(&self.base_url).map_err(|e| Error::url_parse(&self.base_url, e))?;
    if url.cannot_be_a_base() {
      return Err(Error::url_parse(&self.base_url, "URL cannot be used as a base"));
    }
    if !url.path().ends_with('/') {
      let path = format!("{}/", url.path());
      url.set_path(&path);
    }
    Ok(url)
  }
}
