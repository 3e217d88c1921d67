//! List command implementation
//!
//! Prints every registered preset name and its description.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;

use super::build_registry;

/// Run the list command
///
/// # Arguments
/// * `presets_file` - Optional JSON file of custom presets to include
pub fn run(presets_file: Option<&str>) -> Result<ExitCode> {
    let registry = build_registry(presets_file)?;

    println!("{}", "Available sirens:".cyan().bold());
    for (name, description) in registry.list() {
        println!("  {:<14} {}", name.green(), description);
    }

    Ok(ExitCode::SUCCESS)
}
