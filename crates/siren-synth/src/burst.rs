//! Traffic-dependent burst patterning.
//!
//! A siren is not run continuously: the operator works it in bursts, with
//! denser traffic calling for longer, more continuous bursts. This module
//! turns a traffic density and a total duration into a [`BurstPlan`], an
//! alternating sequence of active and silent spans that covers the
//! requested duration exactly. The composer fills active spans with the
//! two-tone pattern and silent spans with zeros.

use std::fmt;
use std::str::FromStr;

use crate::error::SirenError;

/// Traffic density tiers controlling the burst pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficDensity {
    /// Intermittent use: short bursts, 60% duty cycle.
    Light,
    /// Standard pattern: medium bursts, 80% duty cycle.
    Medium,
    /// Near-continuous use: long bursts, 90% duty cycle.
    Heavy,
}

impl TrafficDensity {
    /// Fraction of time the siren is active.
    pub fn duty_cycle(self) -> f64 {
        match self {
            TrafficDensity::Light => 0.6,
            TrafficDensity::Medium => 0.8,
            TrafficDensity::Heavy => 0.9,
        }
    }

    /// Number of two-tone pairs per active burst.
    pub fn burst_pairs(self) -> u32 {
        match self {
            TrafficDensity::Light => 2,
            TrafficDensity::Medium => 4,
            TrafficDensity::Heavy => 6,
        }
    }
}

impl fmt::Display for TrafficDensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrafficDensity::Light => "light",
            TrafficDensity::Medium => "medium",
            TrafficDensity::Heavy => "heavy",
        };
        write!(f, "{name}")
    }
}

impl FromStr for TrafficDensity {
    type Err = SirenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(TrafficDensity::Light),
            "medium" => Ok(TrafficDensity::Medium),
            "heavy" => Ok(TrafficDensity::Heavy),
            other => Err(SirenError::invalid_param(
                "traffic_density",
                format!("expected light, medium or heavy, got '{other}'"),
            )),
        }
    }
}

/// One span of a burst plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BurstSpan {
    /// True when the siren sounds during this span.
    pub active: bool,
    /// Span length in seconds.
    pub duration: f64,
}

/// Alternating active/silent segmentation of a request's total duration.
#[derive(Debug, Clone, PartialEq)]
pub struct BurstPlan {
    /// Spans in playback order, starting with an active span.
    pub spans: Vec<BurstSpan>,
    /// The duration the spans sum to.
    pub total_duration: f64,
}

impl BurstPlan {
    /// Total active (non-silent) time in seconds.
    pub fn active_duration(&self) -> f64 {
        self.spans
            .iter()
            .filter(|s| s.active)
            .map(|s| s.duration)
            .sum()
    }
}

/// Partitions `total_duration` into alternating active/silent spans.
///
/// Each active span holds `burst_pairs` two-tone pairs
/// (`pairs * 2 * tone_duration` seconds); the following silent span is
/// sized so the active:silent ratio matches the density's duty cycle.
/// The final span is truncated so the plan covers `total_duration`
/// exactly.
///
/// # Arguments
/// * `total_duration` - Requested duration in seconds (> 0)
/// * `density` - Traffic density tier
/// * `tone_duration` - The preset's single-tone duration in seconds
pub fn plan_bursts(
    total_duration: f64,
    density: TrafficDensity,
    tone_duration: f64,
) -> BurstPlan {
    let duty = density.duty_cycle();
    let active_span = density.burst_pairs() as f64 * 2.0 * tone_duration;
    let silent_span = active_span * (1.0 - duty) / duty;

    let mut spans = Vec::new();
    let mut elapsed = 0.0;
    let mut active = true;

    while elapsed < total_duration {
        let span = if active { active_span } else { silent_span };
        let duration = span.min(total_duration - elapsed);
        spans.push(BurstSpan { active, duration });
        elapsed += duration;
        active = !active;
    }

    BurstPlan {
        spans,
        total_duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_cover_total_duration() {
        for density in [
            TrafficDensity::Light,
            TrafficDensity::Medium,
            TrafficDensity::Heavy,
        ] {
            let plan = plan_bursts(10.0, density, 0.4);
            let sum: f64 = plan.spans.iter().map(|s| s.duration).sum();
            assert!((sum - 10.0).abs() < 1e-9, "{density}: sum {sum}");
        }
    }

    #[test]
    fn test_spans_alternate_starting_active() {
        let plan = plan_bursts(10.0, TrafficDensity::Light, 0.4);
        assert!(plan.spans[0].active);
        for pair in plan.spans.windows(2) {
            assert_ne!(pair[0].active, pair[1].active);
        }
    }

    #[test]
    fn test_all_spans_positive() {
        let plan = plan_bursts(7.3, TrafficDensity::Medium, 0.3);
        assert!(plan.spans.iter().all(|s| s.duration > 0.0));
    }

    #[test]
    fn test_duty_cycle_conformance_over_long_duration() {
        let cases = [
            (TrafficDensity::Light, 0.6),
            (TrafficDensity::Medium, 0.8),
            (TrafficDensity::Heavy, 0.9),
        ];
        for (density, expected) in cases {
            let plan = plan_bursts(20.0, density, 0.4);
            let fraction = plan.active_duration() / 20.0;
            assert!(
                (fraction - expected).abs() <= 0.05,
                "{density}: active fraction {fraction}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_heavy_spans_longer_than_light() {
        let heavy = plan_bursts(20.0, TrafficDensity::Heavy, 0.4);
        let light = plan_bursts(20.0, TrafficDensity::Light, 0.4);
        assert!(heavy.spans[0].duration > light.spans[0].duration);
    }

    #[test]
    fn test_short_duration_truncates_first_span() {
        // Active span would be 3.2s; request only 1.0s
        let plan = plan_bursts(1.0, TrafficDensity::Medium, 0.4);
        assert_eq!(plan.spans.len(), 1);
        assert!(plan.spans[0].active);
        assert!((plan.spans[0].duration - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_density_parsing() {
        assert_eq!(
            "heavy".parse::<TrafficDensity>().unwrap(),
            TrafficDensity::Heavy
        );
        assert!("rush_hour".parse::<TrafficDensity>().is_err());
    }
}
