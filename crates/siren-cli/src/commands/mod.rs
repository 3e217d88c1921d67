//! CLI command implementations

pub mod info;
pub mod list;
pub mod play;
pub mod write;

use std::path::Path;

use anyhow::Result;
use siren_synth::{PresetRegistry, SynthesisRequest, TrafficDensity};

/// Synthesis options shared by the `info`, `write` and `play` commands.
#[derive(Debug, Clone)]
pub struct SynthOptions {
    /// Total duration in seconds.
    pub duration: f64,
    /// Night mode (90 dB ceiling).
    pub night: bool,
    /// Traffic density (light, medium, heavy).
    pub traffic: String,
    /// Listener distance in meters.
    pub distance: f64,
    /// Optional RNG seed for reproducible output.
    pub seed: Option<u32>,
}

impl SynthOptions {
    /// Converts parsed CLI options into a synthesis request.
    pub fn to_request(&self) -> Result<SynthesisRequest> {
        let traffic_density: TrafficDensity = self.traffic.parse()?;
        Ok(SynthesisRequest {
            total_duration: self.duration,
            night_mode: self.night,
            traffic_density,
            distance: self.distance,
            seed: self.seed,
        })
    }
}

/// Builds the preset registry, loading a custom preset file if given.
pub fn build_registry(presets_file: Option<&str>) -> Result<PresetRegistry> {
    let mut registry = PresetRegistry::with_builtins();
    if let Some(path) = presets_file {
        crate::input::load_preset_file(Path::new(path), &mut registry)?;
    }
    Ok(registry)
}
