//! Info command implementation
//!
//! Shows a preset's parameters and the estimated perceived dB for the
//! given distance and mode, without synthesizing anything.

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use siren_synth::environment::estimate_db;

use super::{build_registry, SynthOptions};

/// Run the info command
///
/// # Arguments
/// * `name` - Preset name
/// * `options` - Synthesis options (distance/night affect the estimate)
/// * `presets_file` - Optional JSON file of custom presets to include
pub fn run(name: &str, options: &SynthOptions, presets_file: Option<&str>) -> Result<ExitCode> {
    let registry = build_registry(presets_file)?;
    let preset = registry.get(name)?;
    let request = options.to_request()?;

    let estimated = estimate_db(preset.max_db, request.distance, request.night_mode);

    println!("{} {}", "Siren:".cyan().bold(), name);
    println!("  {} {}", "description:".dimmed(), preset.description);
    println!(
        "  {} {} / {} Hz",
        "frequencies:".dimmed(),
        preset.freq_low,
        preset.freq_high
    );
    println!("  {} {} s", "tone duration:".dimmed(), preset.tone_duration);
    println!(
        "  {} {} s / {} s",
        "attack/decay:".dimmed(),
        preset.attack,
        preset.decay
    );
    println!("  {} {}", "volume:".dimmed(), preset.volume);
    println!("  {} {} dB", "max dB at source:".dimmed(), preset.max_db);
    println!(
        "  {} {}",
        "night mode:".dimmed(),
        if request.night_mode { "on" } else { "off" }
    );
    println!("  {} {}", "traffic:".dimmed(), request.traffic_density);
    println!("  {} {} m", "distance:".dimmed(), request.distance);
    println!(
        "  {} {}",
        "estimated dB:".cyan().bold(),
        format!("{estimated:.1}").yellow()
    );

    Ok(ExitCode::SUCCESS)
}
