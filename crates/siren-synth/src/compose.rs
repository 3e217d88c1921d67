//! Waveform composition.
//!
//! Drives the tone oscillator and envelope shaper across a burst plan,
//! assembling the full float sample buffer for a request. Quantization to
//! 16-bit PCM happens last, in [`quantize`].

use rand_pcg::Pcg32;

use crate::burst::BurstPlan;
use crate::envelope::attack_decay;
use crate::oscillator::tone;
use crate::preset::SirenPreset;

/// Composes the full float sample buffer for a preset and burst plan.
///
/// Silent spans become zero samples; active spans alternate between the
/// preset's two tones in `tone_duration` sub-segments, each shaped by the
/// attack/decay envelope and scaled by `preset.volume`. Every active span
/// restarts at the low tone. Per-span sample counts are taken from
/// cumulative rounding against the plan's total so the buffer length is
/// exactly `round(sample_rate * total_duration)`.
///
/// # Arguments
/// * `preset` - Validated siren configuration
/// * `plan` - Burst plan covering the requested duration
/// * `sample_rate` - Audio sample rate in Hz
/// * `rng` - Deterministic RNG for per-segment frequency jitter
///
/// # Returns
/// Float samples, unclamped (peaks may slightly exceed ±1.0)
pub fn compose(
    preset: &SirenPreset,
    plan: &BurstPlan,
    sample_rate: f64,
    rng: &mut Pcg32,
) -> Vec<f64> {
    let total_samples = (plan.total_duration * sample_rate).round() as usize;
    let mut buffer: Vec<f64> = Vec::with_capacity(total_samples);

    let mut elapsed = 0.0;
    for (i, span) in plan.spans.iter().enumerate() {
        elapsed += span.duration;

        // Cumulative rounding; the last span lands exactly on the total.
        let boundary = if i == plan.spans.len() - 1 {
            total_samples
        } else {
            (elapsed * sample_rate).round() as usize
        };
        let span_samples = boundary.saturating_sub(buffer.len());

        if span.active {
            append_active_span(preset, span_samples, sample_rate, rng, &mut buffer);
        } else {
            buffer.resize(buffer.len() + span_samples, 0.0);
        }
    }

    buffer
}

/// Fills one active span with alternating enveloped tone sub-segments.
fn append_active_span(
    preset: &SirenPreset,
    span_samples: usize,
    sample_rate: f64,
    rng: &mut Pcg32,
    buffer: &mut Vec<f64>,
) {
    let tone_samples = ((preset.tone_duration * sample_rate).round() as usize).max(1);
    let (freq_low, freq_high) = preset.frequencies();

    let mut remaining = span_samples;
    let mut low = true;
    while remaining > 0 {
        let segment = tone_samples.min(remaining);
        let frequency = if low { freq_low } else { freq_high };

        let raw = tone(frequency, segment, sample_rate, rng);
        let env = attack_decay(segment, preset.attack, preset.decay, sample_rate);
        buffer.extend(
            raw.iter()
                .zip(env.iter())
                .map(|(s, e)| s * e * preset.volume),
        );

        remaining -= segment;
        low = !low;
    }
}

/// Clamps float samples to [-1, 1] and quantizes to 16-bit signed PCM.
///
/// Round-to-nearest over the symmetric range ±32767.
pub fn quantize(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * 32767.0).round() as i16)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::burst::{plan_bursts, TrafficDensity};
    use crate::preset::SirenPreset;
    use crate::rng::create_rng;

    const SAMPLE_RATE: f64 = 44_100.0;

    fn test_preset() -> SirenPreset {
        SirenPreset::new(435.0, 580.0, 0.4, 0.05, 0.05, 1.0, 110.0, "test").unwrap()
    }

    #[test]
    fn test_exact_buffer_length() {
        let preset = test_preset();
        let mut rng = create_rng(42);
        for duration in [0.5, 1.0, 2.0, 3.7, 10.0] {
            let plan = plan_bursts(duration, TrafficDensity::Medium, preset.tone_duration);
            let buffer = compose(&preset, &plan, SAMPLE_RATE, &mut rng);
            assert_eq!(buffer.len(), (duration * SAMPLE_RATE).round() as usize);
        }
    }

    #[test]
    fn test_silent_spans_are_zero() {
        let preset = test_preset();
        let mut rng = create_rng(42);
        // Light traffic: active 1.6s, silent ~1.07s
        let plan = plan_bursts(10.0, TrafficDensity::Light, preset.tone_duration);
        let buffer = compose(&preset, &plan, SAMPLE_RATE, &mut rng);

        // Sample the middle of the first silent span
        let silent_mid =
            ((plan.spans[0].duration + plan.spans[1].duration / 2.0) * SAMPLE_RATE) as usize;
        assert_eq!(buffer[silent_mid], 0.0);
    }

    #[test]
    fn test_active_spans_are_not_silent() {
        let preset = test_preset();
        let mut rng = create_rng(42);
        let plan = plan_bursts(2.0, TrafficDensity::Heavy, preset.tone_duration);
        let buffer = compose(&preset, &plan, SAMPLE_RATE, &mut rng);

        // Middle of the first active span
        let active_mid = (0.2 * SAMPLE_RATE) as usize;
        let window = &buffer[active_mid..active_mid + 1000];
        assert!(window.iter().any(|&s| s.abs() > 0.1));
    }

    #[test]
    fn test_volume_scaling() {
        let loud = test_preset();
        let quiet =
            SirenPreset::new(435.0, 580.0, 0.4, 0.05, 0.05, 0.5, 110.0, "quiet").unwrap();
        let plan = plan_bursts(1.0, TrafficDensity::Heavy, loud.tone_duration);

        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);
        let buffer_loud = compose(&loud, &plan, SAMPLE_RATE, &mut rng1);
        let buffer_quiet = compose(&quiet, &plan, SAMPLE_RATE, &mut rng2);

        for (a, b) in buffer_loud.iter().zip(buffer_quiet.iter()) {
            assert!((b - a * 0.5).abs() < 1e-12);
        }
    }

    #[test]
    fn test_same_seed_identical_output() {
        let preset = test_preset();
        let plan = plan_bursts(2.0, TrafficDensity::Medium, preset.tone_duration);

        let mut rng1 = create_rng(1234);
        let mut rng2 = create_rng(1234);
        assert_eq!(
            compose(&preset, &plan, SAMPLE_RATE, &mut rng1),
            compose(&preset, &plan, SAMPLE_RATE, &mut rng2)
        );
    }

    #[test]
    fn test_quantize_bounds() {
        let samples = vec![-2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0];
        let pcm = quantize(&samples);
        assert_eq!(pcm, vec![-32767, -32767, -16384, 0, 16384, 32767, 32767]);
        assert!(pcm.iter().all(|&s| (-32767..=32767).contains(&s)));
    }

    #[test]
    fn test_quantize_rounds_to_nearest() {
        let pcm = quantize(&[1.4 / 32767.0, 1.6 / 32767.0]);
        assert_eq!(pcm, vec![1, 2]);
    }
}
