//! Tone oscillator with harmonic distortion and frequency jitter.

use rand::Rng;
use rand_pcg::Pcg32;

/// Two times pi, for phase calculations.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

/// Amplitude of the second harmonic relative to the fundamental.
pub const HARMONIC_GAIN: f64 = 0.15;

/// Half-width of the per-segment relative frequency jitter (±1%).
pub const FREQ_JITTER: f64 = 0.01;

/// Generates one tone segment at the given frequency.
///
/// The output is a sine fundamental plus a second harmonic at
/// [`HARMONIC_GAIN`] amplitude, so peaks may slightly exceed ±1.0; the
/// sum is deliberately not re-normalized and is clamped only at
/// quantization time. The frequency is jittered once per segment by a
/// uniform draw in ±[`FREQ_JITTER`], which is what keeps consecutive
/// passes of a real siren from sounding machine-identical.
///
/// # Arguments
/// * `frequency` - Target frequency in Hz (before jitter)
/// * `num_samples` - Segment length in samples
/// * `sample_rate` - Audio sample rate in Hz
/// * `rng` - Deterministic RNG for the jitter draw
///
/// # Returns
/// Vector of raw samples in approximately [-1.15, 1.15]
pub fn tone(frequency: f64, num_samples: usize, sample_rate: f64, rng: &mut Pcg32) -> Vec<f64> {
    // One draw per segment, not per sample
    let jitter: f64 = rng.gen_range(-FREQ_JITTER..=FREQ_JITTER);
    let freq = frequency * (1.0 + jitter);

    let mut output = Vec::with_capacity(num_samples);
    let phase_step = TWO_PI * freq / sample_rate;

    for t in 0..num_samples {
        let phase = phase_step * t as f64;
        output.push(phase.sin() + HARMONIC_GAIN * (2.0 * phase).sin());
    }

    output
}
