//! Features command implementation.

use crate::cli::{CliResult, FeaturesCommand};
use crate::features::FEATURES;

impl FeaturesCommand {
    /// Execute the features command: list the product feature catalog.
    pub fn execute(&self) -> CliResult {
        println!("\x1b[1m=== kisan features ===\x1b[0m");
        println!();
        for feature in FEATURES {
            let marker = if feature.id.is_live() {
                "\x1b[36m●\x1b[0m"
            } else {
                "\x1b[2m○\x1b[0m"
            };
            println!("  {marker} \x1b[1m{}\x1b[0m", feature.title);
            println!("     {}", feature.description);
        }
        println!();
        println!("\x1b[2m● live in this demo   ○ placeholder\x1b[0m");
        Ok(())
    }
}
