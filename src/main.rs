//! kisan - farming-assistant demo dashboard.
//!
//! This is the main entry point for the kisan CLI tool.

use clap::Parser;
use kisan::cli::{handle_result, Cli, CliResult, Commands, ConfigCommands};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let result: CliResult = match cli.command {
        None => {
            // No subcommand provided - show help
            println!("kisan - farming-assistant demo dashboard.");
            println!();
            println!("Run 'kisan --help' for available commands.");
            println!();
            println!("Quick start:");
            println!("  kisan dashboard        # Open the live irrigation dashboard");
            println!("  kisan status           # One-shot plot snapshot");
            println!("  kisan features         # List the product feature cards");
            Ok(())
        }
        Some(cmd) => match cmd {
            Commands::Dashboard(c) => c.execute(),
            Commands::Status(c) => c.execute(),
            Commands::Features(c) => c.execute(),
            Commands::Config(subcmd) => match subcmd {
                ConfigCommands::Show(c) => c.execute(),
                ConfigCommands::Path(c) => c.execute(),
            },
            Commands::Completions(c) => c.execute(),
        },
    };

    handle_result(result)
}
