//! Main entry point for siren synthesis.
//!
//! Wires the burst patterner, waveform composer and environmental
//! post-processor into a single call that turns a preset and a request
//! into a quantized sample buffer plus the estimated perceived dB.

use rand::Rng;

use crate::burst::{plan_bursts, TrafficDensity};
use crate::compose::{compose, quantize};
use crate::environment::apply_environment;
use crate::error::{SirenError, SirenResult};
use crate::preset::SirenPreset;
use crate::rng::create_component_rng;

/// Fixed output sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Per-invocation synthesis parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    /// Total output duration in seconds (> 0).
    pub total_duration: f64,
    /// Whether the 90 dB night-mode ceiling applies.
    pub night_mode: bool,
    /// Traffic density controlling the burst pattern.
    pub traffic_density: TrafficDensity,
    /// Listener distance in meters (> 0).
    pub distance: f64,
    /// RNG seed for the frequency jitter. `None` draws a fresh seed from
    /// the process-level generator; supply a value for reproducible
    /// output.
    pub seed: Option<u32>,
}

impl Default for SynthesisRequest {
    fn default() -> Self {
        Self {
            total_duration: 10.0,
            night_mode: false,
            traffic_density: TrafficDensity::Medium,
            distance: 10.0,
            seed: None,
        }
    }
}

impl SynthesisRequest {
    fn validate(&self) -> SirenResult<()> {
        if !self.total_duration.is_finite() || self.total_duration <= 0.0 {
            return Err(SirenError::invalid_param(
                "total_duration",
                format!("must be positive, got {}", self.total_duration),
            ));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(SirenError::invalid_param(
                "distance",
                format!("must be positive, got {}", self.distance),
            ));
        }
        Ok(())
    }
}

/// Result of a synthesis call.
#[derive(Debug, Clone)]
pub struct SirenOutput {
    /// Quantized mono samples, clamped to ±32767.
    pub samples: Vec<i16>,
    /// Estimated perceived dB at the listener (post-distance,
    /// post-night-mode).
    pub estimated_db: f64,
    /// Output sample rate in Hz.
    pub sample_rate: u32,
}

impl SirenOutput {
    /// Output duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate as f64
    }
}

/// Synthesizes a siren into a quantized mono sample buffer.
///
/// The buffer length is exactly
/// `round(SAMPLE_RATE * request.total_duration)`. With a fixed
/// `request.seed`, identical parameters produce byte-identical buffers.
///
/// # Arguments
/// * `preset` - Validated siren configuration
/// * `request` - Per-invocation parameters
///
/// # Errors
/// Returns [`SirenError::InvalidParameter`] when `total_duration` or
/// `distance` is non-positive, before any buffer is allocated.
pub fn synthesize(preset: &SirenPreset, request: &SynthesisRequest) -> SirenResult<SirenOutput> {
    request.validate()?;

    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = create_component_rng(seed, "jitter");

    let sample_rate = SAMPLE_RATE as f64;
    let plan = plan_bursts(
        request.total_duration,
        request.traffic_density,
        preset.tone_duration,
    );

    let mut buffer = compose(preset, &plan, sample_rate, &mut rng);
    let estimated_db = apply_environment(
        &mut buffer,
        preset.max_db,
        request.distance,
        request.night_mode,
    );

    Ok(SirenOutput {
        samples: quantize(&buffer),
        estimated_db,
        sample_rate: SAMPLE_RATE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::SirenPreset;

    fn test_preset() -> SirenPreset {
        SirenPreset::new(435.0, 580.0, 0.4, 0.05, 0.05, 1.0, 110.0, "test").unwrap()
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        let request = SynthesisRequest {
            total_duration: 0.0,
            ..Default::default()
        };
        let err = synthesize(&test_preset(), &request).unwrap_err();
        assert!(
            matches!(err, SirenError::InvalidParameter { ref name, .. } if name == "total_duration")
        );
    }

    #[test]
    fn test_rejects_non_positive_distance() {
        let request = SynthesisRequest {
            distance: -1.0,
            ..Default::default()
        };
        let err = synthesize(&test_preset(), &request).unwrap_err();
        assert!(
            matches!(err, SirenError::InvalidParameter { ref name, .. } if name == "distance")
        );
    }

    #[test]
    fn test_rejects_nan_duration() {
        let request = SynthesisRequest {
            total_duration: f64::NAN,
            ..Default::default()
        };
        assert!(synthesize(&test_preset(), &request).is_err());
    }

    #[test]
    fn test_buffer_length_matches_duration() {
        for duration in [0.25, 1.0, 2.0, 5.5] {
            let request = SynthesisRequest {
                total_duration: duration,
                seed: Some(1),
                ..Default::default()
            };
            let output = synthesize(&test_preset(), &request).unwrap();
            assert_eq!(
                output.samples.len(),
                (SAMPLE_RATE as f64 * duration).round() as usize
            );
        }
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let request = SynthesisRequest {
            total_duration: 2.0,
            seed: Some(99),
            ..Default::default()
        };
        let a = synthesize(&test_preset(), &request).unwrap();
        let b = synthesize(&test_preset(), &request).unwrap();
        assert_eq!(a.samples, b.samples);
        assert_eq!(a.estimated_db, b.estimated_db);
    }

    #[test]
    fn test_different_seeds_differ() {
        let preset = test_preset();
        let mut request = SynthesisRequest {
            total_duration: 2.0,
            seed: Some(1),
            ..Default::default()
        };
        let a = synthesize(&preset, &request).unwrap();
        request.seed = Some(2);
        let b = synthesize(&preset, &request).unwrap();
        assert_ne!(a.samples, b.samples);
    }

    #[test]
    fn test_night_mode_caps_estimated_db() {
        let preset = test_preset();
        let mut request = SynthesisRequest {
            total_duration: 0.5,
            distance: 2.0,
            seed: Some(5),
            ..Default::default()
        };
        let day = synthesize(&preset, &request).unwrap();
        request.night_mode = true;
        let night = synthesize(&preset, &request).unwrap();

        assert!(day.estimated_db > 90.0);
        assert!(night.estimated_db <= 90.0 + 1e-9);
    }

    #[test]
    fn test_estimated_db_decreases_with_distance() {
        let preset = test_preset();
        let mut previous = f64::INFINITY;
        for distance in [2.0, 5.0, 20.0, 80.0] {
            let request = SynthesisRequest {
                total_duration: 0.25,
                distance,
                seed: Some(5),
                ..Default::default()
            };
            let output = synthesize(&preset, &request).unwrap();
            assert!(output.estimated_db < previous);
            previous = output.estimated_db;
        }
    }
}
