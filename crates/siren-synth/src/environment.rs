//! Environmental post-processing: distance attenuation and night mode.
//!
//! Sound pressure falls off with distance; amplitude (the linear form of
//! the inverse-square law) falls as `1/distance` relative to a 1 m
//! reference. Night mode models urban regulations that cap a siren's
//! perceived level at 90 dB. All functions here are pure.

/// Reference distance in meters for the source loudness figure.
pub const REFERENCE_DISTANCE: f64 = 1.0;

/// Perceived dB ceiling enforced in night mode.
pub const NIGHT_DB_CEILING: f64 = 90.0;

/// Perceived dB floor; estimates never go below silence.
pub const SILENCE_FLOOR_DB: f64 = 0.0;

/// Linear amplitude gain for a listener at `distance` meters.
///
/// `reference / max(distance, reference)` — amplitude form, not power.
/// Distances inside the reference are treated as the reference.
pub fn distance_gain(distance: f64) -> f64 {
    REFERENCE_DISTANCE / distance.max(REFERENCE_DISTANCE)
}

/// Estimated perceived dB at `distance`, before any night-mode cap.
///
/// `max_db - 20*log10(distance / reference)`, clamped to the silence
/// floor.
pub fn estimate_db_uncapped(max_db: f64, distance: f64) -> f64 {
    let ratio = distance.max(REFERENCE_DISTANCE) / REFERENCE_DISTANCE;
    (max_db - 20.0 * ratio.log10()).max(SILENCE_FLOOR_DB)
}

/// Estimated perceived dB at `distance`, with the night-mode cap applied.
pub fn estimate_db(max_db: f64, distance: f64, night_mode: bool) -> f64 {
    let db = estimate_db_uncapped(max_db, distance);
    if night_mode {
        db.min(NIGHT_DB_CEILING)
    } else {
        db
    }
}

/// Scales the composed buffer for distance and night mode, in place.
///
/// The same dB figures reported by [`estimate_db`] drive the sample
/// scaling: distance attenuation is applied as [`distance_gain`], and in
/// night mode an additional `10^((90 - uncapped_db)/20)` gain brings any
/// over-ceiling signal down to exactly the cap.
///
/// # Arguments
/// * `samples` - Composed float buffer, scaled in place
/// * `max_db` - The preset's source loudness in dB at the reference distance
/// * `distance` - Listener distance in meters
/// * `night_mode` - Whether the 90 dB night ceiling applies
///
/// # Returns
/// The estimated perceived dB (post-distance, post-night-mode)
pub fn apply_environment(
    samples: &mut [f64],
    max_db: f64,
    distance: f64,
    night_mode: bool,
) -> f64 {
    let mut gain = distance_gain(distance);

    let uncapped_db = estimate_db_uncapped(max_db, distance);
    if night_mode && uncapped_db > NIGHT_DB_CEILING {
        gain *= 10f64.powf((NIGHT_DB_CEILING - uncapped_db) / 20.0);
    }

    for sample in samples.iter_mut() {
        *sample *= gain;
    }

    estimate_db(max_db, distance, night_mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_gain_at_reference() {
        assert_eq!(distance_gain(1.0), 1.0);
        assert_eq!(distance_gain(0.5), 1.0);
    }

    #[test]
    fn test_distance_gain_falls_off() {
        assert_eq!(distance_gain(10.0), 0.1);
        assert_eq!(distance_gain(100.0), 0.01);
    }

    #[test]
    fn test_estimate_db_at_ten_meters() {
        // 110 dB at 1 m is 90 dB at 10 m
        let db = estimate_db(110.0, 10.0, false);
        assert!((db - 90.0).abs() < 0.5);
    }

    #[test]
    fn test_estimate_db_strictly_decreasing_with_distance() {
        let distances = [1.0, 2.0, 5.0, 10.0, 50.0, 200.0];
        let estimates: Vec<f64> = distances
            .iter()
            .map(|&d| estimate_db(112.0, d, false))
            .collect();
        for pair in estimates.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_silence_floor() {
        let db = estimate_db(20.0, 100_000.0, false);
        assert_eq!(db, SILENCE_FLOOR_DB);
    }

    #[test]
    fn test_night_mode_caps_at_ceiling() {
        // 112 dB at 2 m is ~106 dB uncapped
        assert!(estimate_db(112.0, 2.0, false) > NIGHT_DB_CEILING);
        assert_eq!(estimate_db(112.0, 2.0, true), NIGHT_DB_CEILING);
    }

    #[test]
    fn test_night_mode_no_effect_below_ceiling() {
        // 110 dB at 100 m is 70 dB either way
        assert_eq!(
            estimate_db(110.0, 100.0, true),
            estimate_db(110.0, 100.0, false)
        );
    }

    #[test]
    fn test_apply_environment_scales_samples() {
        let mut samples = vec![1.0, -0.5, 0.25];
        let db = apply_environment(&mut samples, 110.0, 10.0, false);
        assert!((db - 90.0).abs() < 0.5);
        assert!((samples[0] - 0.1).abs() < 1e-12);
        assert!((samples[1] + 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_apply_environment_night_gain_matches_cap() {
        // Uncapped at 2 m: 112 - 20*log10(2) ≈ 105.98 dB; night mode must
        // shave the excess off the samples as well as the report.
        let mut day = vec![0.8];
        let mut night = vec![0.8];
        let day_db = apply_environment(&mut day, 112.0, 2.0, false);
        let night_db = apply_environment(&mut night, 112.0, 2.0, true);

        assert_eq!(night_db, NIGHT_DB_CEILING);
        let expected_ratio = 10f64.powf((NIGHT_DB_CEILING - day_db) / 20.0);
        assert!((night[0] / day[0] - expected_ratio).abs() < 1e-12);
    }

    #[test]
    fn test_pure_given_inputs() {
        let mut a = vec![0.3, 0.6];
        let mut b = vec![0.3, 0.6];
        assert_eq!(
            apply_environment(&mut a, 108.0, 25.0, true),
            apply_environment(&mut b, 108.0, 25.0, true)
        );
        assert_eq!(a, b);
    }
}
