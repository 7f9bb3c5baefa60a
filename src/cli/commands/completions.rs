//! Completions command implementation.

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::{Cli, CliResult, CompletionsCommand};

impl CompletionsCommand {
    /// Execute the completions command: write a completion script to stdout.
    pub fn execute(&self) -> CliResult {
        let shell = match self.shell.as_str() {
            "bash" => Shell::Bash,
            "zsh" => Shell::Zsh,
            // clap's value_parser restricts the set, so this is exhaustive.
            _ => Shell::Fish,
        };

        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "kisan", &mut std::io::stdout());
        Ok(())
    }
}
