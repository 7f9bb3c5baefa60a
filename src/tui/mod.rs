//! TUI (Terminal User Interface) module for the dashboard.
//!
//! Renders the feature card strip, the live irrigation panel, and the
//! profile dropdown, driven by a single-threaded event loop with a periodic
//! simulator tick.

mod app;
mod ui;

pub use app::{DashboardApp, DashboardState};
