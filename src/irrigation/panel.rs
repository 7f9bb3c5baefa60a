//! Irrigation panel state container.
//!
//! Owns the fixed set of plots and exposes the controlled mutations the
//! dashboard needs: select, rename, toggle pump, and the periodic tick.
//! The panel is single-threaded by construction; the TUI event loop is the
//! only caller, so ticks and user actions are serialized without locking.

use super::{Plot, WaterStatus, MAX_PLOT_NAME_LEN};

/// Number of plots in the panel. Fixed for the lifetime of the view.
pub const PLOT_COUNT: usize = 3;

/// State container for the irrigation dashboard panel.
///
/// Created with fixed defaults at session start; nothing is persisted, so
/// state resets on every launch.
#[derive(Debug, Clone)]
pub struct IrrigationPanel {
    plots: [Plot; PLOT_COUNT],
    selected: usize,
    /// In-progress rename buffer, `None` when not renaming.
    rename_buffer: Option<String>,
    pump_rise: f64,
    idle_decay: f64,
}

impl IrrigationPanel {
    /// Create the panel with the stock demo plots.
    pub fn new(pump_rise: f64, idle_decay: f64) -> Self {
        Self {
            plots: [
                Plot::new("Plot 1", 65.0),
                Plot::new("Plot 2", 42.0),
                Plot::new("Plot 3", 18.0),
            ],
            selected: 0,
            rename_buffer: None,
            pump_rise,
            idle_decay,
        }
    }

    /// All plots, in display order.
    pub fn plots(&self) -> &[Plot] {
        &self.plots
    }

    /// Index of the selected plot.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The selected plot.
    pub fn selected_plot(&self) -> &Plot {
        &self.plots[self.selected]
    }

    /// Advance every plot by one tick, in a single pass.
    pub fn tick(&mut self) {
        for plot in &mut self.plots {
            plot.tick(self.pump_rise, self.idle_decay);
        }
    }

    /// Select a plot by index. Cancels any in-progress rename.
    ///
    /// Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < PLOT_COUNT {
            self.selected = index;
            self.rename_buffer = None;
        }
    }

    /// Flip the selected plot's pump.
    pub fn toggle_pump(&mut self) {
        self.plots[self.selected].toggle_pump();
    }

    /// Status classification of the selected plot.
    pub fn status(&self) -> WaterStatus {
        self.selected_plot().status()
    }

    /// Whether a rename is in progress.
    pub fn is_renaming(&self) -> bool {
        self.rename_buffer.is_some()
    }

    /// Current rename buffer contents, empty when not renaming.
    pub fn rename_buffer(&self) -> &str {
        self.rename_buffer.as_deref().unwrap_or("")
    }

    /// Start renaming the selected plot, seeding the buffer with its name.
    pub fn begin_rename(&mut self) {
        self.rename_buffer = Some(self.selected_plot().name.clone());
    }

    /// Append a character to the rename buffer.
    ///
    /// Input past the 20-character limit is dropped, matching the capped
    /// input field in the original UI. No-op when not renaming.
    pub fn rename_input(&mut self, c: char) {
        if let Some(buf) = &mut self.rename_buffer {
            if buf.chars().count() < MAX_PLOT_NAME_LEN {
                buf.push(c);
            }
        }
    }

    /// Remove the last character from the rename buffer.
    pub fn rename_backspace(&mut self) {
        if let Some(buf) = &mut self.rename_buffer {
            buf.pop();
        }
    }

    /// Commit the rename.
    ///
    /// A buffer that is empty after trimming leaves the name unchanged.
    pub fn commit_rename(&mut self) {
        if let Some(buf) = self.rename_buffer.take() {
            let trimmed = buf.trim();
            if !trimmed.is_empty() {
                self.plots[self.selected].name = trimmed.to_string();
            }
        }
    }

    /// Discard the rename buffer without changing the name.
    pub fn cancel_rename(&mut self) {
        self.rename_buffer = None;
    }
}
