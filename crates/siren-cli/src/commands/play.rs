//! Play command implementation
//!
//! Synthesizes a siren to a temporary WAV file and hands it to the
//! platform's audio player.

use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use siren_synth::{synthesize, WavResult};

use super::{build_registry, SynthOptions};
use crate::playback;

/// Run the play command
///
/// # Arguments
/// * `name` - Preset name
/// * `options` - Synthesis options
/// * `presets_file` - Optional JSON file of custom presets to include
pub fn run(name: &str, options: &SynthOptions, presets_file: Option<&str>) -> Result<ExitCode> {
    let registry = build_registry(presets_file)?;
    let preset = registry.get(name)?;
    let request = options.to_request()?;

    println!("{} {}", "Playing:".cyan().bold(), name);

    let output = synthesize(preset, &request)?;
    let wav = WavResult::from_mono(&output.samples, output.sample_rate);

    let file = tempfile::Builder::new()
        .prefix("siren_")
        .suffix(".wav")
        .tempfile()
        .context("Failed to create temporary WAV file")?;
    std::fs::write(file.path(), &wav.wav_data)
        .context("Failed to write temporary WAV file")?;

    println!(
        "  {} {}",
        "estimated dB:".dimmed(),
        format!("{:.1}", output.estimated_db).yellow()
    );

    playback::play_file(file.path())?;

    Ok(ExitCode::SUCCESS)
}
