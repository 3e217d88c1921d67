//! Attack/sustain/decay amplitude envelope.

/// Generates a linear attack/sustain/decay multiplier curve.
///
/// The first `attack` seconds ramp linearly 0 to 1, the last `decay`
/// seconds ramp linearly 1 to 0, and everything in between sits at 1.
/// When the attack and decay ramps would overlap (attack + decay longer
/// than the segment), both are scaled proportionally so they meet: the
/// attack gets `round(n * attack / (attack + decay))` samples and the
/// decay the remainder, preserving the ramp shape with no sustain.
///
/// # Arguments
/// * `num_samples` - Segment length in samples
/// * `attack` - Attack time in seconds
/// * `decay` - Decay time in seconds
/// * `sample_rate` - Audio sample rate in Hz
///
/// # Returns
/// Vector of `num_samples` multipliers in [0.0, 1.0]
pub fn attack_decay(num_samples: usize, attack: f64, decay: f64, sample_rate: f64) -> Vec<f64> {
    let mut attack_samples = (attack * sample_rate) as usize;
    let mut decay_samples = (decay * sample_rate) as usize;

    if attack_samples + decay_samples > num_samples {
        let total = (attack_samples + decay_samples) as f64;
        attack_samples =
            ((num_samples as f64) * (attack_samples as f64) / total).round() as usize;
        decay_samples = num_samples - attack_samples;
    }

    let mut env = vec![1.0; num_samples];

    for i in 0..attack_samples {
        env[i] = i as f64 / attack_samples as f64;
    }

    let decay_start = num_samples - decay_samples;
    for j in 0..decay_samples {
        env[decay_start + j] = 1.0 - (j as f64 + 1.0) / decay_samples as f64;
    }

    env
}
