//! Environment variable management for testing
//!
//! Tests that read configuration from the environment override a variable
//! through an [`EnvVarGuard`], which puts the original value back when it goes
//! out of scope.

use std::env;

/// Overrides one environment variable for the lifetime of the guard
pub struct EnvVarGuard {
  name: String,
  /// The value before the guard was created, if any
  original: Option<String>,
}

impl EnvVarGuard {
  /// Remember the current value of `name` so it can be restored on drop
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the variable to `value`
  pub fn set(&self, value: &str) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Unset the variable
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_guard_restores_unset_variable() {
    let name = "HUBCAP_TEST_UTILS_UNSET";
    {
      let guard = EnvVarGuard::new(name);
      guard.set("value");
      assert_eq!(env::var(name).as_deref(), Ok("value"));
    }
    assert!(env::var(name).is_err());
  }

  #[test]
  fn test_guard_restores_previous_value() {
    let name = "HUBCAP_TEST_UTILS_SET";
    let outer = EnvVarGuard::new(name);
    outer.set("original");
    {
      let inner = EnvVarGuard::new(name);
      inner.remove();
      assert!(env::var(name).is_err());
    }
    assert_eq!(env::var(name).as_deref(), Ok("original"));
  }
}
