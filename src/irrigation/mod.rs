//! Mock irrigation simulator.
//!
//! Holds per-plot sensor state and advances it on a fixed wall-clock tick.
//! All values here are simulated: there is no device communication, and the
//! water level is just a percentage nudged up or down by the pump flag.

mod panel;

pub use panel::{IrrigationPanel, PLOT_COUNT};

use chrono::{DateTime, Local};
use serde::Serialize;

/// Maximum accepted length for a plot name, in characters.
pub const MAX_PLOT_NAME_LEN: usize = 20;

/// Per-tick water level increase while the pump is on.
pub const DEFAULT_PUMP_RISE: f64 = 2.0;

/// Per-tick water level decrease while the pump is off.
pub const DEFAULT_IDLE_DECAY: f64 = 0.2;

/// Default tick period in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 1200;

/// One irrigated land unit tracked by the simulator.
#[derive(Debug, Clone, Serialize)]
pub struct Plot {
    /// Display label. Renamable, not required to be unique.
    pub name: String,
    /// Simulated soil water level as a percentage, always within [0, 100].
    pub water_level: f64,
    /// Actuator flag. Toggled by the user, never by the tick.
    pub pump_on: bool,
    /// Set when the pump transitions off to on; never cleared.
    pub last_irrigated: Option<DateTime<Local>>,
}

impl Plot {
    /// Create a plot with the pump off and no irrigation history.
    pub fn new(name: impl Into<String>, water_level: f64) -> Self {
        Self {
            name: name.into(),
            water_level: water_level.clamp(0.0, 100.0),
            pump_on: false,
            last_irrigated: None,
        }
    }

    /// Advance this plot by one tick.
    ///
    /// The water level is the only field a tick may change.
    pub fn tick(&mut self, pump_rise: f64, idle_decay: f64) {
        if self.pump_on {
            self.water_level = (self.water_level + pump_rise).min(100.0);
        } else {
            self.water_level = (self.water_level - idle_decay).max(0.0);
        }
    }

    /// Flip the pump flag, stamping `last_irrigated` on the off-to-on edge.
    pub fn toggle_pump(&mut self) {
        self.pump_on = !self.pump_on;
        if self.pump_on {
            self.last_irrigated = Some(Local::now());
        }
    }

    /// Water status classification for display.
    pub fn status(&self) -> WaterStatus {
        WaterStatus::classify(self.water_level)
    }

    /// Water level rounded to a whole percent, as shown in the UI.
    pub fn level_percent(&self) -> u32 {
        self.water_level.round() as u32
    }

    /// Human-readable form of `last_irrigated`, or "Never".
    pub fn last_irrigated_label(&self) -> String {
        match self.last_irrigated {
            Some(ts) => ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => "Never".to_string(),
        }
    }
}

/// Display classification of a water level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterStatus {
    /// Level above 50%.
    Good,
    /// Level above 30% and at most 50%.
    NeedsWater,
    /// Level at or below 30%.
    Dry,
}

impl WaterStatus {
    /// Classify a water level. Pure function, used only for display.
    pub fn classify(level: f64) -> Self {
        if level > 50.0 {
            WaterStatus::Good
        } else if level > 30.0 {
            WaterStatus::NeedsWater
        } else {
            WaterStatus::Dry
        }
    }

    /// Label shown next to the water level.
    pub fn label(&self) -> &'static str {
        match self {
            WaterStatus::Good => "Good",
            WaterStatus::NeedsWater => "Needs Water",
            WaterStatus::Dry => "Dry! Please irrigate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plot_clamps_initial_level() {
        assert_eq!(Plot::new("a", 150.0).water_level, 100.0);
        assert_eq!(Plot::new("b", -5.0).water_level, 0.0);
        assert_eq!(Plot::new("c", 42.0).water_level, 42.0);
    }

    #[test]
    fn test_tick_rises_while_pump_on() {
        let mut plot = Plot::new("Plot 1", 65.0);
        plot.pump_on = true;
        plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
        assert_eq!(plot.water_level, 67.0);
    }

    #[test]
    fn test_tick_decays_while_pump_off() {
        let mut plot = Plot::new("Plot 1", 65.0);
        plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
        assert_eq!(plot.water_level, 64.8);
    }

    #[test]
    fn test_tick_clamps_at_ceiling() {
        let mut plot = Plot::new("Plot 1", 98.0);
        plot.pump_on = true;
        plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
        assert_eq!(plot.water_level, 100.0);
    }

    #[test]
    fn test_tick_clamps_at_floor() {
        let mut plot = Plot::new("Plot 1", 0.1);
        plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
        assert_eq!(plot.water_level, 0.0);
    }

    #[test]
    fn test_level_stays_in_bounds_over_many_ticks() {
        let mut plot = Plot::new("Plot 1", 50.0);
        plot.pump_on = true;
        for _ in 0..500 {
            plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
            assert!((0.0..=100.0).contains(&plot.water_level));
        }
        plot.pump_on = false;
        for _ in 0..5000 {
            plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
            assert!((0.0..=100.0).contains(&plot.water_level));
        }
    }

    #[test]
    fn test_tick_changes_only_the_level() {
        let mut plot = Plot::new("Plot 1", 65.0);
        plot.toggle_pump();
        let stamp = plot.last_irrigated;
        plot.tick(DEFAULT_PUMP_RISE, DEFAULT_IDLE_DECAY);
        assert_eq!(plot.name, "Plot 1");
        assert!(plot.pump_on);
        assert_eq!(plot.last_irrigated, stamp);
    }

    #[test]
    fn test_toggle_on_stamps_last_irrigated() {
        let mut plot = Plot::new("Plot 1", 65.0);
        assert!(plot.last_irrigated.is_none());
        plot.toggle_pump();
        assert!(plot.pump_on);
        assert!(plot.last_irrigated.is_some());
    }

    #[test]
    fn test_toggle_off_keeps_last_irrigated() {
        let mut plot = Plot::new("Plot 1", 65.0);
        plot.toggle_pump();
        let stamp = plot.last_irrigated;
        plot.toggle_pump();
        assert!(!plot.pump_on);
        assert_eq!(plot.last_irrigated, stamp);
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(WaterStatus::classify(51.0), WaterStatus::Good);
        assert_eq!(WaterStatus::classify(50.0), WaterStatus::NeedsWater);
        assert_eq!(WaterStatus::classify(31.0), WaterStatus::NeedsWater);
        assert_eq!(WaterStatus::classify(30.0), WaterStatus::Dry);
        assert_eq!(WaterStatus::classify(0.0), WaterStatus::Dry);
        assert_eq!(WaterStatus::classify(100.0), WaterStatus::Good);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(WaterStatus::Good.label(), "Good");
        assert_eq!(WaterStatus::NeedsWater.label(), "Needs Water");
        assert_eq!(WaterStatus::Dry.label(), "Dry! Please irrigate");
    }

    #[test]
    fn test_last_irrigated_label_never() {
        let plot = Plot::new("Plot 1", 65.0);
        assert_eq!(plot.last_irrigated_label(), "Never");
    }
}
