// ─────────────────────────────────────────────────────────────────────
// Flame Key — Globe Configuration
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

use flamekey_types::{FlameKeyError, FlameKeyResult};

/// Upper bound on `node_count`.
pub const MAX_NODE_COUNT: usize = 4096;
/// Finest latitude ring spacing accepted, in degrees.
pub const MIN_RING_LATITUDE_STEP: f64 = 1.0;
/// Finest longitude sampling along a ring, in degrees.
pub const MIN_RING_LONGITUDE_STEP: f64 = 0.5;

/// Parameters of the rotating network globe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Number of synthetic network nodes.
    /// Default: 48.
    pub node_count: usize,

    /// Degrees of rotation added per animation tick.
    /// Default: 0.2.
    pub rotation_step: f64,

    /// Perspective camera distance `D`.
    /// Default: 200.0.
    pub perspective_distance: f64,

    /// Globe radius as a fraction of the smaller viewport side.
    /// Default: 0.33.
    pub radius_fraction: f64,

    /// Spacing between latitude rings; rings span -60°..=60°.
    /// Default: 30.0.
    pub ring_latitude_step: f64,

    /// Longitude sampling step along each ring.
    /// Default: 4.0.
    pub ring_longitude_step: f64,

    /// Node alpha at zero or negative depth.
    pub base_alpha: f64,
    /// Extra alpha at full front depth.
    pub depth_alpha: f64,
    /// Node radius before strength scaling.
    pub base_size: f64,
    /// Node radius gained per unit of `strength · scale`.
    pub strength_size: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            node_count: 48,
            rotation_step: 0.2,
            perspective_distance: 200.0,
            radius_fraction: 0.33,
            ring_latitude_step: 30.0,
            ring_longitude_step: 4.0,
            base_alpha: 0.3,
            depth_alpha: 0.7,
            base_size: 2.0,
            strength_size: 3.0,
        }
    }
}

impl GlobeConfig {
    /// Validate configuration parameters.
    pub fn validate(&self) -> FlameKeyResult<()> {
        for (name, value) in [
            ("rotation_step", self.rotation_step),
            ("perspective_distance", self.perspective_distance),
            ("radius_fraction", self.radius_fraction),
            ("ring_latitude_step", self.ring_latitude_step),
            ("ring_longitude_step", self.ring_longitude_step),
            ("base_alpha", self.base_alpha),
            ("depth_alpha", self.depth_alpha),
            ("base_size", self.base_size),
            ("strength_size", self.strength_size),
        ] {
            if !value.is_finite() {
                return Err(FlameKeyError::Numerical(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }
        if self.node_count > MAX_NODE_COUNT {
            return Err(FlameKeyError::Config(format!(
                "node_count must be <= {MAX_NODE_COUNT}, got {}",
                self.node_count
            )));
        }
        if self.rotation_step <= 0.0 {
            return Err(FlameKeyError::Config(format!(
                "rotation_step must be > 0, got {}",
                self.rotation_step
            )));
        }
        if self.perspective_distance <= 0.0 {
            return Err(FlameKeyError::Config(format!(
                "perspective_distance must be > 0, got {}",
                self.perspective_distance
            )));
        }
        if !(self.radius_fraction > 0.0 && self.radius_fraction <= 0.5) {
            return Err(FlameKeyError::Config(format!(
                "radius_fraction must be in (0, 0.5], got {}",
                self.radius_fraction
            )));
        }
        if self.ring_latitude_step < MIN_RING_LATITUDE_STEP {
            return Err(FlameKeyError::Config(format!(
                "ring_latitude_step must be >= {MIN_RING_LATITUDE_STEP}, got {}",
                self.ring_latitude_step
            )));
        }
        if self.ring_longitude_step < MIN_RING_LONGITUDE_STEP {
            return Err(FlameKeyError::Config(format!(
                "ring_longitude_step must be >= {MIN_RING_LONGITUDE_STEP}, got {}",
                self.ring_longitude_step
            )));
        }
        if self.base_alpha < 0.0 || self.base_alpha + self.depth_alpha > 1.0 + 1e-12 {
            return Err(FlameKeyError::Config(format!(
                "base_alpha + depth_alpha must stay within [0, 1], got {} + {}",
                self.base_alpha, self.depth_alpha
            )));
        }
        if self.base_size < 0.0 || self.strength_size < 0.0 {
            return Err(FlameKeyError::Config(
                "sprite sizes must be >= 0".to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GlobeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_distance_rejected() {
        let config = GlobeConfig {
            perspective_distance: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FlameKeyError::Config(_))));
    }

    #[test]
    fn test_infinite_step_is_numerical_error() {
        let config = GlobeConfig {
            rotation_step: f64::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(FlameKeyError::Numerical(_))
        ));
    }

    #[test]
    fn test_non_positive_rotation_step_rejected() {
        for rotation_step in [0.0, -0.2] {
            let config = GlobeConfig {
                rotation_step,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(FlameKeyError::Config(_))));
        }
    }

    #[test]
    fn test_tiny_ring_steps_rejected() {
        let config = GlobeConfig::from_json(r#"{"ring_longitude_step": 1e-9}"#).unwrap();
        assert!(matches!(config.validate(), Err(FlameKeyError::Config(_))));
        let config = GlobeConfig {
            ring_latitude_step: 0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_node_count_capped() {
        let config = GlobeConfig {
            node_count: MAX_NODE_COUNT + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
        let config = GlobeConfig {
            node_count: MAX_NODE_COUNT,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_alpha_overflow_rejected() {
        let config = GlobeConfig {
            depth_alpha: 0.9,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial() {
        let config = GlobeConfig::from_json(r#"{"node_count": 12}"#).unwrap();
        assert_eq!(config.node_count, 12);
        assert_eq!(config.rotation_step, 0.2);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(GlobeConfig::from_json("{not json").is_err());
    }
}
