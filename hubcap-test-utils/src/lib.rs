//! Test utilities shared across the hubcap workspace
//!
//! This crate provides RAII guards that isolate tests from the developer's
//! machine:
//! - scoped environment variables ([`EnvVarGuard`])
//! - throwaway home directories holding a `.netrc` ([`NetrcGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod netrc;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use netrc::NetrcGuard;
