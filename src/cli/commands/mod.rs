//! Command implementations for the kisan CLI.
//!
//! This module contains the actual implementations of CLI commands,
//! separated from the argument parsing definitions in cli/mod.rs.

pub mod completions;
pub mod config_cmd;
pub mod dashboard;
pub mod features;
pub mod status;
