// ─────────────────────────────────────────────────────────────────────
// Flame Key — Sigil Geometry Builder
// ─────────────────────────────────────────────────────────────────────
//! Seed vector → closed sigil outline.
//!
//! Anchor `i` sits at angle `seed[i] · 2π` from the center, at radius
//! `base · (0.5 + 0.5 · seed[(i + 3) mod N])`. The lookahead couples
//! each anchor's reach to a later anchor's angle, so neighbouring
//! points are cross-correlated rather than independent.

use std::f64::consts::TAU;

use flamekey_types::{FlameKeyConfig, Point, SeedVector, SigilPath};

pub const SIGIL_CENTER: f64 = 150.0;
pub const SIGIL_RADIUS: f64 = 110.0;
pub const RADIUS_LOOKAHEAD: usize = 3;

/// Placement parameters for sigil anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigilGeometry {
    pub center: Point,
    pub radius: f64,
    pub lookahead: usize,
}

impl Default for SigilGeometry {
    fn default() -> Self {
        Self {
            center: Point::new(SIGIL_CENTER, SIGIL_CENTER),
            radius: SIGIL_RADIUS,
            lookahead: RADIUS_LOOKAHEAD,
        }
    }
}

impl SigilGeometry {
    pub fn from_config(config: &FlameKeyConfig) -> Self {
        Self {
            center: Point::new(config.sigil_center, config.sigil_center),
            radius: config.sigil_radius,
            lookahead: config.radius_lookahead,
        }
    }

    /// Anchor point for seed index `i`.
    fn anchor(&self, seed: &SeedVector, i: usize) -> Point {
        let angle = seed[i] * TAU;
        let lookahead = seed.cyclic(i + self.lookahead).unwrap_or(0.0);
        let reach = self.radius * (0.5 + 0.5 * lookahead);
        Point::new(
            self.center.x + angle.cos() * reach,
            self.center.y + angle.sin() * reach,
        )
    }

    /// Build the closed outline. An empty seed degenerates to a single
    /// anchor at angle zero and half reach.
    pub fn build(&self, seed: &SeedVector) -> SigilPath {
        let first = if seed.is_empty() {
            Point::new(self.center.x + self.radius * 0.5, self.center.y)
        } else {
            self.anchor(seed, 0)
        };
        let rest = (1..seed.len()).map(|i| self.anchor(seed, i));
        SigilPath::closed_loop(self.center, first, rest)
    }
}

/// Build a sigil with the standard 300×300 placement.
pub fn build_sigil(seed: &SeedVector) -> SigilPath {
    SigilGeometry::default().build(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{generate_seed, SEED_COUNT};
    use crate::svg::{parse_path_data, path_data};

    #[test]
    fn test_point_count_matches_seed() {
        for count in [1, 3, 12, 40] {
            let seed = generate_seed("count me", count);
            assert_eq!(build_sigil(&seed).len(), count);
        }
    }

    #[test]
    fn test_always_closed() {
        for text in ["", "truth", "grief and devotion", "x"] {
            let path = build_sigil(&generate_seed(text, SEED_COUNT));
            let d = path_data(&path);
            assert!(d.ends_with(" Z"), "{d}");
            let parsed = parse_path_data(&d).unwrap();
            assert!(parsed.closed);
            assert_eq!(parsed.points.len(), path.len());
        }
    }

    #[test]
    fn test_points_within_radius_band() {
        let path = build_sigil(&generate_seed("radius band", SEED_COUNT));
        let center = path.center();
        for p in path.points() {
            let d = p.distance(&center);
            assert!(d >= SIGIL_RADIUS * 0.5 - 1e-9, "d={d}");
            assert!(d < SIGIL_RADIUS + 1e-9, "d={d}");
        }
    }

    #[test]
    fn test_anchor_uses_lookahead() {
        // seed[0] = 0 → angle 0; reach from seed[3] = 1.0 → full radius.
        let seed = SeedVector::new(vec![0.0, 0.25, 0.5, 0.999_999_999]);
        let path = build_sigil(&seed);
        let p0 = path.points()[0];
        assert!((p0.x - (SIGIL_CENTER + SIGIL_RADIUS)).abs() < 1e-6);
        assert!((p0.y - SIGIL_CENTER).abs() < 1e-9);
        // seed[1] = 0.25 → straight down in screen space; reach from seed[0] = 0.
        let p1 = path.points()[1];
        assert!((p1.x - SIGIL_CENTER).abs() < 1e-9);
        assert!((p1.y - (SIGIL_CENTER + SIGIL_RADIUS * 0.5)).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let seed = generate_seed("same glyph", SEED_COUNT);
        assert_eq!(build_sigil(&seed), build_sigil(&seed));
    }

    #[test]
    fn test_empty_seed_degenerates() {
        let path = build_sigil(&SeedVector::new(vec![]));
        assert_eq!(path.len(), 1);
        assert_eq!(path_data(&path), "M 205.00 150.00 Z");
    }

    #[test]
    fn test_geometry_from_config() {
        let config = FlameKeyConfig {
            sigil_center: 50.0,
            sigil_radius: 10.0,
            ..Default::default()
        };
        let geometry = SigilGeometry::from_config(&config);
        let path = geometry.build(&generate_seed("small", SEED_COUNT));
        assert_eq!(path.center(), Point::new(50.0, 50.0));
        assert!(path.points().iter().all(|p| p.distance(&path.center()) <= 10.0 + 1e-9));
    }
}
