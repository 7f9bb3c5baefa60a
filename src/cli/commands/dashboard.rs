//! Dashboard command implementation.
//!
//! Loads config, applies CLI overrides, and runs the TUI event loop.

use std::path::Path;

use anyhow::Context;

use crate::cli::{CliResult, DashboardCommand};
use crate::config::SimulatorConfig;
use crate::tui::DashboardApp;

impl DashboardCommand {
    /// Execute the dashboard command.
    pub fn execute(&self) -> CliResult {
        let config = load_config(self.config.as_deref(), self.tick_ms)?;

        let mut app = DashboardApp::new(&config).context("Failed to set up terminal")?;
        let result = app.run();
        // Restore the terminal before surfacing any loop error.
        app.cleanup().context("Failed to restore terminal")?;
        result.context("Dashboard loop failed")?;
        Ok(())
    }
}

/// Load the simulator config with an optional path and tick override.
fn load_config(path: Option<&str>, tick_ms: Option<u64>) -> anyhow::Result<SimulatorConfig> {
    let mut config =
        SimulatorConfig::load(path.map(Path::new)).context("Failed to load config")?;
    if let Some(ms) = tick_ms {
        config.tick_ms = ms;
        config = config.validated();
    }
    Ok(config)
}
