//! Write command implementation
//!
//! Synthesizes a siren and writes it to a WAV file.

use std::fs;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use colored::Colorize;
use siren_synth::{synthesize, WavResult};

use super::{build_registry, SynthOptions};

/// Run the write command
///
/// # Arguments
/// * `name` - Preset name
/// * `options` - Synthesis options
/// * `outfile` - Output path; defaults to `siren_<timestamp>.wav`
/// * `presets_file` - Optional JSON file of custom presets to include
pub fn run(
    name: &str,
    options: &SynthOptions,
    outfile: Option<&str>,
    presets_file: Option<&str>,
) -> Result<ExitCode> {
    let registry = build_registry(presets_file)?;
    let preset = registry.get(name)?;
    let request = options.to_request()?;

    println!("{} {}", "Synthesizing:".cyan().bold(), name);

    let output = synthesize(preset, &request)?;
    let wav = WavResult::from_mono(&output.samples, output.sample_rate);

    let filename = match outfile {
        Some(path) => path.to_string(),
        None => format!("siren_{}.wav", Local::now().format("%Y%m%d_%H%M%S")),
    };
    fs::write(&filename, &wav.wav_data)
        .with_context(|| format!("Failed to write WAV file: {filename}"))?;

    println!(
        "  {} {:.1} s at {} Hz",
        "duration:".dimmed(),
        wav.duration_seconds(),
        wav.sample_rate
    );
    println!(
        "  {} {}",
        "estimated dB:".dimmed(),
        format!("{:.1}", output.estimated_db).yellow()
    );
    println!("  {} {}", "pcm hash:".dimmed(), &wav.pcm_hash[..16]);
    println!("{} {}", "Wrote:".green().bold(), filename);

    Ok(ExitCode::SUCCESS)
}
