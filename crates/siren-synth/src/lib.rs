//! Two-tone emergency siren synthesis.
//!
//! This crate turns a small set of numeric parameters — two frequencies,
//! a tone duration, attack/decay ramps, a volume and a source loudness —
//! into a quantized mono sample buffer and a deterministic WAV file.
//!
//! # Overview
//!
//! - [`preset`] / [`registry`] - Validated siren configurations and the
//!   named preset registry (`police`, `firefighter`, `samu`, `hi_lo`
//!   built in)
//! - [`burst`] - Traffic-dependent on/off burst patterning
//! - [`oscillator`] - Sine fundamental plus second harmonic, with
//!   per-segment frequency jitter
//! - [`envelope`] - Linear attack/sustain/decay amplitude shaping
//! - [`compose`] - Assembles the full buffer from a burst plan
//! - [`environment`] - Distance attenuation and night-mode capping
//! - [`synthesize()`] - Main entry point
//! - [`wav`] - Deterministic 16-bit mono WAV writer
//!
//! # Determinism
//!
//! The only stochastic element is the per-segment frequency jitter. With
//! a caller-supplied seed, output is byte-identical across runs; without
//! one, a fresh seed is drawn per call. All randomness flows through
//! PCG32 with BLAKE3 seed derivation ([`rng`]).
//!
//! # Example
//!
//! ```
//! use siren_synth::{synthesize, PresetRegistry, SynthesisRequest, WavResult};
//!
//! # fn main() -> Result<(), siren_synth::SirenError> {
//! let registry = PresetRegistry::with_builtins();
//! let preset = registry.get("police")?;
//!
//! let request = SynthesisRequest {
//!     total_duration: 2.0,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let output = synthesize(preset, &request)?;
//! println!("estimated level: {:.1} dB", output.estimated_db);
//!
//! let wav = WavResult::from_mono(&output.samples, output.sample_rate);
//! // std::fs::write("police.wav", &wav.wav_data)?;
//! # Ok(())
//! # }
//! ```

pub mod burst;
pub mod compose;
pub mod envelope;
pub mod environment;
pub mod error;
pub mod oscillator;
pub mod preset;
pub mod registry;
pub mod rng;
pub mod synthesize;
pub mod wav;

// Re-export main types at crate root
pub use burst::{plan_bursts, BurstPlan, BurstSpan, TrafficDensity};
pub use error::{SirenError, SirenResult};
pub use preset::{PresetSpec, SirenPreset};
pub use registry::PresetRegistry;
pub use synthesize::{synthesize, SirenOutput, SynthesisRequest, SAMPLE_RATE};
pub use wav::WavResult;
