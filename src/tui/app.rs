//! Dashboard application state and event handling.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::auth::AuthStore;
use crate::config::SimulatorConfig;
use crate::features::{FeatureId, FEATURES};
use crate::irrigation::IrrigationPanel;

use super::ui;

/// UI redraw cadence (spinner, clock). Independent of the simulator tick.
const UI_TICK: Duration = Duration::from_millis(100);

/// Dashboard state (separate from the terminal for borrowing).
///
/// All mutation goes through the event loop, so ticks and key presses are
/// serialized; nothing here needs a lock.
#[derive(Debug)]
pub struct DashboardState {
    /// The irrigation simulator.
    pub panel: IrrigationPanel,
    /// Mock session store behind the profile dropdown.
    pub auth: AuthStore,
    /// Index into FEATURES for the active card.
    pub active_feature: usize,
    /// Whether the profile dropdown overlay is open.
    pub dropdown_open: bool,
    /// Spinner frame index.
    pub spinner_frame: usize,
    /// Session start time.
    pub start_time: Instant,
    /// Set when the loop should exit.
    pub should_quit: bool,
}

impl DashboardState {
    /// Build the initial state from config. The IoT card starts active so
    /// the live panel is the first thing on screen.
    pub fn new(config: &SimulatorConfig) -> Self {
        let iot_index = FEATURES
            .iter()
            .position(|f| f.id == FeatureId::Iot)
            .unwrap_or(0);
        Self {
            panel: IrrigationPanel::new(config.pump_rise, config.idle_decay),
            auth: AuthStore::new(),
            active_feature: iot_index,
            dropdown_open: false,
            spinner_frame: 0,
            start_time: Instant::now(),
            should_quit: false,
        }
    }

    /// The active feature card's id.
    pub fn active_feature_id(&self) -> FeatureId {
        FEATURES[self.active_feature].id
    }

    /// Elapsed session time in seconds.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// Handle one key press.
    ///
    /// Rename input takes priority over everything, then the dropdown,
    /// then the global keymap.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.panel.is_renaming() {
            match code {
                KeyCode::Enter => self.panel.commit_rename(),
                KeyCode::Esc => self.panel.cancel_rename(),
                KeyCode::Backspace => self.panel.rename_backspace(),
                KeyCode::Char(c) => self.panel.rename_input(c),
                _ => {}
            }
            return;
        }

        if self.dropdown_open {
            match code {
                KeyCode::Char('l') => {
                    if self.auth.is_authenticated() {
                        self.auth.logout();
                    } else {
                        self.auth.login_demo();
                    }
                }
                KeyCode::Char('u') | KeyCode::Esc => self.dropdown_open = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.panel.select(0),
            KeyCode::Char('2') => self.panel.select(1),
            KeyCode::Char('3') => self.panel.select(2),
            KeyCode::Char('p') | KeyCode::Char(' ') => {
                if self.active_feature_id() == FeatureId::Iot {
                    self.panel.toggle_pump();
                }
            }
            KeyCode::Char('r') => {
                if self.active_feature_id() == FeatureId::Iot {
                    self.panel.begin_rename();
                }
            }
            KeyCode::Tab => {
                self.active_feature = (self.active_feature + 1) % FEATURES.len();
            }
            KeyCode::BackTab => {
                self.active_feature =
                    (self.active_feature + FEATURES.len() - 1) % FEATURES.len();
            }
            KeyCode::Char('u') => self.dropdown_open = true,
            _ => {}
        }
    }
}

/// Dashboard TUI application.
pub struct DashboardApp {
    /// Terminal instance.
    terminal: Terminal<CrosstermBackend<Stdout>>,
    /// Application state.
    state: DashboardState,
    /// Simulator tick period from config.
    sim_tick: Duration,
    /// Last simulator tick time.
    last_sim_tick: Instant,
    /// Last UI tick time.
    last_ui_tick: Instant,
    /// Set once the terminal has been restored.
    restored: bool,
}

impl DashboardApp {
    /// Set up the terminal and build the initial state.
    pub fn new(config: &SimulatorConfig) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let now = Instant::now();
        Ok(Self {
            terminal,
            state: DashboardState::new(config),
            sim_tick: Duration::from_millis(config.tick_ms),
            last_sim_tick: now,
            last_ui_tick: now,
            restored: false,
        })
    }

    /// Run the event loop until the user quits.
    ///
    /// Exiting the loop is the simulator's cancellation point: the tick
    /// fires only from inside this loop, so no timer outlives the view.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let state = &self.state;
            self.terminal.draw(|f| ui::draw(f, state))?;

            // Wake up for the nearer of the two cadences.
            let until_ui = UI_TICK.saturating_sub(self.last_ui_tick.elapsed());
            let until_sim = self.sim_tick.saturating_sub(self.last_sim_tick.elapsed());
            let timeout = until_ui.min(until_sim);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.state.handle_key(key.code);
                    }
                }
            }

            if self.last_sim_tick.elapsed() >= self.sim_tick {
                self.state.panel.tick();
                self.last_sim_tick = Instant::now();
            }

            if self.last_ui_tick.elapsed() >= UI_TICK {
                self.state.spinner_frame = self.state.spinner_frame.wrapping_add(1);
                self.last_ui_tick = Instant::now();
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Clean up and restore the terminal. Runs at most once; the Drop impl
    /// covers early exits.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for DashboardApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
