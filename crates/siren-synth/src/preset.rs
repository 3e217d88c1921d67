//! Siren preset configurations.
//!
//! A [`SirenPreset`] is the immutable parameter set for one siren type:
//! the two alternating frequencies, how fast they alternate, the envelope
//! ramps, the baseline volume, and the source loudness used for distance
//! estimation. Presets are only ever constructed through validation, so a
//! preset in hand is always well-formed.

use serde::Deserialize;

use crate::error::{SirenError, SirenResult};

/// Validated, immutable siren configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SirenPreset {
    /// Lower of the two alternating frequencies in Hz.
    pub freq_low: f64,
    /// Higher of the two alternating frequencies in Hz.
    pub freq_high: f64,
    /// Duration of each single-frequency segment in seconds.
    pub tone_duration: f64,
    /// Attack ramp time in seconds.
    pub attack: f64,
    /// Decay ramp time in seconds.
    pub decay: f64,
    /// Baseline linear gain (0.0 to 1.0).
    pub volume: f64,
    /// Source loudness ceiling in dB SPL at the reference distance.
    pub max_db: f64,
    /// Human-readable description; not used in synthesis.
    pub description: String,
}

impl SirenPreset {
    /// Creates a validated preset.
    ///
    /// # Errors
    /// Returns [`SirenError::Validation`] naming the offending field when:
    /// either frequency is non-positive or non-finite, `tone_duration` or
    /// `max_db` is non-positive, `attack` or `decay` is negative, or
    /// `volume` lies outside [0, 1].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        freq_low: f64,
        freq_high: f64,
        tone_duration: f64,
        attack: f64,
        decay: f64,
        volume: f64,
        max_db: f64,
        description: impl Into<String>,
    ) -> SirenResult<Self> {
        for (field, value) in [("freqs[0]", freq_low), ("freqs[1]", freq_high)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SirenError::validation(
                    field,
                    format!("frequency must be a positive number, got {value}"),
                ));
            }
        }
        if !tone_duration.is_finite() || tone_duration <= 0.0 {
            return Err(SirenError::validation(
                "tone_duration",
                format!("must be a positive number of seconds, got {tone_duration}"),
            ));
        }
        for (field, value) in [("attack", attack), ("decay", decay)] {
            if !value.is_finite() || value < 0.0 {
                return Err(SirenError::validation(
                    field,
                    format!("must be a non-negative number of seconds, got {value}"),
                ));
            }
        }
        if !volume.is_finite() || !(0.0..=1.0).contains(&volume) {
            return Err(SirenError::validation(
                "volume",
                format!("must be between 0 and 1, got {volume}"),
            ));
        }
        if !max_db.is_finite() || max_db <= 0.0 {
            return Err(SirenError::validation(
                "max_db",
                format!("must be a positive dB level, got {max_db}"),
            ));
        }

        Ok(Self {
            freq_low,
            freq_high,
            tone_duration,
            attack,
            decay,
            volume,
            max_db,
            description: description.into(),
        })
    }

    /// Returns the two alternating frequencies as `(low, high)`.
    pub fn frequencies(&self) -> (f64, f64) {
        (self.freq_low, self.freq_high)
    }
}

/// Raw preset fields as supplied by a caller (e.g., parsed from JSON).
///
/// All fields are optional at this stage; [`PresetSpec::build`] turns the
/// raw form into a validated [`SirenPreset`] or reports exactly which
/// field is missing or malformed. A partially valid preset is never
/// observable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresetSpec {
    /// The two alternating frequencies in Hz.
    pub freqs: Option<Vec<f64>>,
    /// Duration of each tone in seconds.
    pub tone_duration: Option<f64>,
    /// Attack time in seconds.
    pub attack: Option<f64>,
    /// Decay time in seconds.
    pub decay: Option<f64>,
    /// Volume level (0.0 to 1.0).
    pub volume: Option<f64>,
    /// Maximum dB level at the source.
    pub max_db: Option<f64>,
    /// Optional description.
    pub description: Option<String>,
}

impl PresetSpec {
    /// Validates the raw fields into a [`SirenPreset`].
    ///
    /// # Arguments
    /// * `name` - Preset name, used for the default description
    ///
    /// # Errors
    /// Returns [`SirenError::Validation`] for the first missing or invalid
    /// field encountered.
    pub fn build(&self, name: &str) -> SirenResult<SirenPreset> {
        let freqs = self
            .freqs
            .as_ref()
            .ok_or_else(|| SirenError::validation("freqs", "missing required field"))?;
        if freqs.len() != 2 {
            return Err(SirenError::validation(
                "freqs",
                format!("must be exactly 2 frequencies, got {}", freqs.len()),
            ));
        }

        let required = |field: &str, value: Option<f64>| {
            value.ok_or_else(|| SirenError::validation(field, "missing required field"))
        };
        let tone_duration = required("tone_duration", self.tone_duration)?;
        let attack = required("attack", self.attack)?;
        let decay = required("decay", self.decay)?;
        let volume = required("volume", self.volume)?;
        let max_db = required("max_db", self.max_db)?;

        let description = self
            .description
            .clone()
            .unwrap_or_else(|| format!("Custom {name} siren"));

        SirenPreset::new(
            freqs[0],
            freqs[1],
            tone_duration,
            attack,
            decay,
            volume,
            max_db,
            description,
        )
    }
}

/// Built-in presets, modeled on French emergency vehicle sirens.
///
/// Returned in their canonical listing order.
pub(crate) fn builtins() -> Vec<(&'static str, SirenPreset)> {
    let preset = |low, high, tone, attack, decay, volume, max_db, desc: &str| {
        SirenPreset::new(low, high, tone, attack, decay, volume, max_db, desc)
            .expect("built-in preset is valid")
    };

    vec![
        (
            "police",
            preset(
                435.0,
                580.0,
                0.4,
                0.05,
                0.05,
                0.9,
                110.0,
                "French Police two-tone siren",
            ),
        ),
        (
            "firefighter",
            preset(
                370.0,
                470.0,
                0.7,
                0.1,
                0.1,
                1.0,
                112.0,
                "French Firefighter (Sapeurs-Pompiers) two-tone siren",
            ),
        ),
        (
            "samu",
            preset(
                435.0,
                651.0,
                0.3,
                0.04,
                0.04,
                0.85,
                108.0,
                "French SAMU/Ambulance two-tone siren",
            ),
        ),
        (
            "hi_lo",
            preset(
                440.0,
                660.0,
                0.5,
                0.05,
                0.05,
                0.9,
                110.0,
                "European-style Hi-Lo sweep siren",
            ),
        ),
    ]
}
