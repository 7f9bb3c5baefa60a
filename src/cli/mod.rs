//! CLI commands and argument handling.
//!
//! This module contains the clap CLI definitions and command implementations.

pub mod commands;

use clap::{Args, Parser, Subcommand};

/// Result type returned by command implementations.
pub type CliResult = anyhow::Result<()>;

/// Farming-assistant demo dashboard.
///
/// Renders the product's feature cards, a mock profile dropdown, and a
/// simulated IoT irrigation panel in the terminal. Everything is demo data;
/// there is no server and no real device communication.
#[derive(Parser, Debug)]
#[command(name = "kisan")]
#[command(author, version = crate::VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run; bare invocation prints a quick-start banner.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands for kisan.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive dashboard.
    ///
    /// Shows the feature card strip, the live irrigation panel, and the
    /// profile dropdown. The simulator ticks on a fixed period while the
    /// dashboard is open and stops when it closes.
    ///
    /// Examples:
    ///   kisan dashboard              # defaults, 1200 ms tick
    ///   kisan dashboard --tick-ms 300
    Dashboard(DashboardCommand),

    /// Print a one-shot snapshot of the demo plots.
    ///
    /// Shows each plot's water level, status classification, and pump
    /// state. Use --ticks to advance the simulator before printing.
    Status(StatusCommand),

    /// List the product feature catalog.
    Features(FeaturesCommand),

    /// Inspect the simulator configuration.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions.
    ///
    /// Outputs completion script to stdout for bash, zsh, or fish.
    Completions(CompletionsCommand),
}

/// Arguments for the 'dashboard' command.
#[derive(Args, Debug)]
pub struct DashboardCommand {
    /// Override the simulator tick period in milliseconds.
    #[arg(short = 't', long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Path to a config file (default: .kisan/config.json).
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,
}

/// Arguments for the 'status' command.
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// Advance the simulator this many idle ticks before printing.
    #[arg(short = 'k', long, default_value = "0")]
    pub ticks: u32,

    /// Output as JSON instead of the colored table.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Path to a config file (default: .kisan/config.json).
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,
}

/// Arguments for the 'features' command.
#[derive(Args, Debug)]
pub struct FeaturesCommand {}

/// Subcommands for config inspection.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration values.
    Show(ConfigShowCommand),

    /// Print the default config file path.
    Path(ConfigPathCommand),
}

/// Arguments for 'config show' command.
#[derive(Args, Debug)]
pub struct ConfigShowCommand {
    /// Output as JSON.
    #[arg(short = 'j', long)]
    pub json: bool,

    /// Path to a config file (default: .kisan/config.json).
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<String>,
}

/// Arguments for 'config path' command.
#[derive(Args, Debug)]
pub struct ConfigPathCommand {}

/// Arguments for the 'completions' command.
#[derive(Args, Debug)]
pub struct CompletionsCommand {
    /// Shell to generate completions for.
    #[arg(value_parser = ["bash", "zsh", "fish"])]
    pub shell: String,
}

/// Map a command result to a process exit code.
///
/// Errors are printed to stderr in red with their cause chain.
pub fn handle_result(result: CliResult) -> std::process::ExitCode {
    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_returns_none() {
        let cli = Cli::try_parse_from(["kisan"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_dashboard_defaults() {
        let cli = Cli::try_parse_from(["kisan", "dashboard"]).unwrap();
        match cli.command {
            Some(Commands::Dashboard(cmd)) => {
                assert!(cmd.tick_ms.is_none());
                assert!(cmd.config.is_none());
            }
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_dashboard_tick_override() {
        let cli = Cli::try_parse_from(["kisan", "dashboard", "--tick-ms", "300"]).unwrap();
        match cli.command {
            Some(Commands::Dashboard(cmd)) => assert_eq!(cmd.tick_ms, Some(300)),
            _ => panic!("Expected Dashboard command"),
        }
    }

    #[test]
    fn test_status_defaults() {
        let cli = Cli::try_parse_from(["kisan", "status"]).unwrap();
        match cli.command {
            Some(Commands::Status(cmd)) => {
                assert_eq!(cmd.ticks, 0);
                assert!(!cmd.json);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_status_with_ticks_and_json() {
        let cli = Cli::try_parse_from(["kisan", "status", "-k", "10", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Status(cmd)) => {
                assert_eq!(cmd.ticks, 10);
                assert!(cmd.json);
            }
            _ => panic!("Expected Status command"),
        }
    }

    #[test]
    fn test_config_show() {
        let cli = Cli::try_parse_from(["kisan", "config", "show"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Show(_)))
        ));
    }

    #[test]
    fn test_config_path() {
        let cli = Cli::try_parse_from(["kisan", "config", "path"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Config(ConfigCommands::Path(_)))
        ));
    }

    #[test]
    fn test_completions_command() {
        let cli = Cli::try_parse_from(["kisan", "completions", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions(cmd)) => assert_eq!(cmd.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_invalid_shell_rejected() {
        let result = Cli::try_parse_from(["kisan", "completions", "powershell"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_subcommand_rejected() {
        let result = Cli::try_parse_from(["kisan", "irrigate"]);
        assert!(result.is_err());
    }
}
