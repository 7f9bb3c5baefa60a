//! kisan - farming-assistant demo dashboard.
//!
//! This library provides the core functionality for the kisan CLI tool:
//! the mock irrigation simulator, the feature catalog, the demo auth store,
//! and the ratatui dashboard that ties them together.
//!
//! Everything here is demo data. There is no server, no persistence of
//! simulator state, and no real device communication.

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod auth;
pub mod cli;
pub mod config;
pub mod features;
pub mod irrigation;
pub mod tui;

// Re-export key types for convenience
pub use irrigation::{IrrigationPanel, Plot, WaterStatus};
