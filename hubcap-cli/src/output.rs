//! # Output Formatting
//!
//! Coloured status markers and JSON rendering for command results. Results go
//! to stdout as pretty-printed JSON; status lines carry a coloured marker.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply the mode as the global owo-colors override
  pub fn apply(self) {
    match self {
      ColorMode::Always | ColorMode::Yes => owo_colors::set_override(true),
      ColorMode::Never | ColorMode::No => owo_colors::set_override(false),
      // Let owo_colors detect the terminal
      ColorMode::Auto => {}
    }
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a GitHub login or repository name
pub fn format_name(name: &str) -> String {
  name.bright_cyan().bold().to_string()
}

/// Render a value as pretty-printed JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
  serde_json::to_string_pretty(value).context("Failed to serialize output")
}

/// Print a value as pretty-printed JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  println!("{}", to_json(value)?);
  Ok(())
}

#[cfg(test)]
mod tests {
  use hubcap::{User, UserEmail};

  use super::*;

  #[test]
  fn test_json_skips_absent_fields() {
    let user = User {
      login: Some("octocat".to_string()),
      ..Default::default()
    };

    let json = to_json(&user).unwrap();
    assert_eq!(json, "{\n  \"login\": \"octocat\"\n}");
  }

  #[test]
  fn test_json_for_emails() {
    let emails = vec![UserEmail::from("a@example.com")];
    assert_eq!(to_json(&emails).unwrap(), "[\n  \"a@example.com\"\n]");
  }
}
