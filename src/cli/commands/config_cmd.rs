//! Config inspection command implementations.

use std::path::Path;

use anyhow::Context;

use crate::cli::{CliResult, ConfigPathCommand, ConfigShowCommand};
use crate::config::{SimulatorConfig, CONFIG_FILE};

impl ConfigShowCommand {
    /// Execute the config show command.
    pub fn execute(&self) -> CliResult {
        let config = SimulatorConfig::load(self.config.as_deref().map(Path::new))
            .context("Failed to load config")?;

        if self.json {
            println!("{}", config.to_json());
            return Ok(());
        }

        println!("\x1b[1m=== kisan config ===\x1b[0m");
        println!();
        println!("  tick_ms:    {}", config.tick_ms);
        println!("  pump_rise:  {}", config.pump_rise);
        println!("  idle_decay: {}", config.idle_decay);
        println!();
        println!("\x1b[2mOverride with {CONFIG_FILE} or 'kisan dashboard --tick-ms'.\x1b[0m");
        Ok(())
    }
}

impl ConfigPathCommand {
    /// Execute the config path command.
    pub fn execute(&self) -> CliResult {
        println!("{CONFIG_FILE}");
        Ok(())
    }
}
