//! # Configuration Management
//!
//! Locates and loads the optional `config.toml` from the XDG config
//! directory and layers environment and command-line overrides on top of it.
//!
//! ```toml
//! base_url = "https://github.example.com/api/v3/"
//! user_agent = "my-tool/1.0"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use hubcap::ClientConfig;
use tracing::debug;

/// Represents the configuration directories for the hubcap application
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance
  pub fn new() -> Result<Self> {
    let proj_dirs = ProjectDirs::from("", "", "hubcap").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the config file
  pub fn config_path(&self) -> PathBuf {
    self.config_dir.join("config.toml")
  }
}

/// Build the client configuration.
///
/// Precedence, lowest first: built-in defaults, the config file, `HUBCAP_*`
/// environment variables, then `api_url` from the command line. An explicit
/// `config_path` must exist; the default location is optional.
pub fn load_client_config(config_path: Option<&Path>, api_url: Option<&str>) -> Result<ClientConfig> {
  let config = match config_path {
    Some(path) => read_config_file(path)?,
    None => {
      let path = ConfigDirs::new()?.config_path();
      if path.exists() {
        read_config_file(&path)?
      } else {
        debug!("No config file at {}", path.display());
        ClientConfig::default()
      }
    }
  };

  let mut config = config.apply_env().context("Failed to apply environment overrides")?;

  if let Some(api_url) = api_url {
    debug!("Using API base URL from the command line");
    config.base_url = api_url.to_string();
  }

  Ok(config)
}

/// Parse a TOML config file into a [`ClientConfig`]
pub fn read_config_file(path: &Path) -> Result<ClientConfig> {
  debug!("Loading config from {}", path.display());

  let content = fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
  parse_config(&content).with_context(|| format!("Failed to parse config file {}", path.display()))
}

fn parse_config(content: &str) -> Result<ClientConfig> {
  Ok(toml::from_str(content)?)
}
