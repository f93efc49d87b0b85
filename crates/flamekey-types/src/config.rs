// ─────────────────────────────────────────────────────────────────────
// Flame Key — Engine Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use crate::error::{FlameKeyError, FlameKeyResult};

/// Runtime configuration for seed, sigil, and resonance generation.
///
/// Every field defaults to the constant the web front end hardcodes, so
/// `FlameKeyConfig::default()` reproduces its glyphs and moods exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlameKeyConfig {
    /// Length of the seed vector derived from text.
    /// Default: 12.
    pub seed_count: usize,

    /// Text hashed in place of an empty input.
    /// Default: "universal-guard-trust".
    pub fallback_text: String,

    /// Sigil center, shared by both axes (viewport units).
    /// Default: 150.0 (center of a 300×300 view box).
    pub sigil_center: f64,

    /// Base radius of the sigil before per-point scaling.
    /// Default: 110.0.
    pub sigil_radius: f64,

    /// Cyclic lookahead used to pick each point's radius scale.
    /// Default: 3.
    pub radius_lookahead: usize,

    /// Weight on `(pos - neg)` in the resonance score.
    /// Default: 0.4.
    pub polarity_weight: f64,

    /// Weight on the saturating length factor.
    /// Default: 0.3.
    pub length_weight: f64,

    /// Span of the centered jitter term.
    /// Default: 0.2 (jitter contributes ±0.1).
    pub jitter_weight: f64,

    /// Text length at which the length factor saturates to 1.
    /// Default: 120.
    pub length_saturation: usize,

    /// `aligned` requires score strictly above this.
    /// Default: 0.6.
    pub aligned_threshold: f64,

    /// `deep` requires score strictly above this.
    /// Default: 0.5.
    pub deep_threshold: f64,

    /// Number of emitted phrases retained by the responder.
    /// Default: 5.
    pub history_window: usize,

    /// Seed for reproducible phrase selection. `None` draws from the
    /// thread RNG.
    pub phrase_seed: Option<u64>,
}

impl Default for FlameKeyConfig {
    fn default() -> Self {
        Self {
            seed_count: 12,
            fallback_text: "universal-guard-trust".to_string(),
            sigil_center: 150.0,
            sigil_radius: 110.0,
            radius_lookahead: 3,
            polarity_weight: 0.4,
            length_weight: 0.3,
            jitter_weight: 0.2,
            length_saturation: 120,
            aligned_threshold: 0.6,
            deep_threshold: 0.5,
            history_window: 5,
            phrase_seed: None,
        }
    }
}

impl FlameKeyConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> FlameKeyResult<()> {
        if self.seed_count == 0 {
            return Err(FlameKeyError::Config(
                "seed_count must be >= 1".to_string(),
            ));
        }
        if self.fallback_text.is_empty() {
            return Err(FlameKeyError::Config(
                "fallback_text must not be empty".to_string(),
            ));
        }
        for (name, value) in [
            ("sigil_center", self.sigil_center),
            ("sigil_radius", self.sigil_radius),
            ("polarity_weight", self.polarity_weight),
            ("length_weight", self.length_weight),
            ("jitter_weight", self.jitter_weight),
            ("aligned_threshold", self.aligned_threshold),
            ("deep_threshold", self.deep_threshold),
        ] {
            if !value.is_finite() {
                return Err(FlameKeyError::Numerical(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.sigil_radius <= 0.0 {
            return Err(FlameKeyError::Config(format!(
                "sigil_radius must be > 0, got {}",
                self.sigil_radius
            )));
        }
        for (name, value) in [
            ("polarity_weight", self.polarity_weight),
            ("length_weight", self.length_weight),
            ("jitter_weight", self.jitter_weight),
        ] {
            if value < 0.0 {
                return Err(FlameKeyError::Config(format!(
                    "{name} must be >= 0, got {value}"
                )));
            }
        }
        if self.length_saturation == 0 {
            return Err(FlameKeyError::Config(
                "length_saturation must be >= 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.aligned_threshold) {
            return Err(FlameKeyError::Config(format!(
                "aligned_threshold must be in [0, 1], got {}",
                self.aligned_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.deep_threshold) {
            return Err(FlameKeyError::Config(format!(
                "deep_threshold must be in [0, 1], got {}",
                self.deep_threshold
            )));
        }
        if self.history_window == 0 {
            return Err(FlameKeyError::Config(
                "history_window must be >= 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load from JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> FlameKeyResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| FlameKeyError::Config(format!("JSON parse error: {e}")))
    }
}
