//! Status command implementation.
//!
//! Prints a one-shot snapshot of the demo plots: water level, status
//! classification, and pump state. The snapshot always starts from the
//! stock defaults because simulator state is never persisted.

use std::path::Path;

use anyhow::Context;

use crate::cli::{CliResult, StatusCommand};
use crate::config::SimulatorConfig;
use crate::irrigation::{IrrigationPanel, WaterStatus};

impl StatusCommand {
    /// Execute the status command.
    pub fn execute(&self) -> CliResult {
        let config = SimulatorConfig::load(self.config.as_deref().map(Path::new))
            .context("Failed to load config")?;

        let mut panel = IrrigationPanel::new(config.pump_rise, config.idle_decay);
        for _ in 0..self.ticks {
            panel.tick();
        }

        if self.json {
            let json = serde_json::to_string_pretty(panel.plots())
                .context("Failed to serialize plots")?;
            println!("{json}");
        } else {
            print_table(&panel, self.ticks);
        }
        Ok(())
    }
}

/// Print the colored plot table.
fn print_table(panel: &IrrigationPanel, ticks: u32) {
    println!("\x1b[1m=== kisan plots ===\x1b[0m");
    if ticks > 0 {
        println!("\x1b[2m(after {ticks} idle ticks)\x1b[0m");
    }
    println!();

    for plot in panel.plots() {
        let status = plot.status();
        let color = match status {
            WaterStatus::Good => "\x1b[32m",
            WaterStatus::NeedsWater => "\x1b[33m",
            WaterStatus::Dry => "\x1b[31m",
        };
        let pump = if plot.pump_on { "pump on" } else { "pump off" };
        println!(
            "  {:<20} {:>4}%  {color}{}\x1b[0m  \x1b[2m{pump}, last irrigated: {}\x1b[0m",
            plot.name,
            plot.level_percent(),
            status.label(),
            plot.last_irrigated_label(),
        );
    }
    println!();
    println!("\x1b[2mDemo data — run 'kisan dashboard' for the live panel.\x1b[0m");
}
