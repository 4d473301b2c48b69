//! # Hubcap CLI Library
//!
//! Command definitions, configuration loading and output helpers for the
//! hubcap command-line tool.

pub mod cli;
pub mod config;
pub mod output;
