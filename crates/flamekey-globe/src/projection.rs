// ─────────────────────────────────────────────────────────────────────
// Flame Key — Globe Projector
// ─────────────────────────────────────────────────────────────────────
//! Spherical-to-planar perspective projection.
//!
//!   phi   = (90 - lat)·π/180
//!   theta = (lon + rotation)·π/180
//!   x = r·sin(phi)·cos(theta),  y = r·cos(phi),  z = r·sin(phi)·sin(theta)
//!   scale = D / (z + r + D)
//!
//! Rotation is passed in on every call; the projector holds no
//! animation state.

use serde::{Deserialize, Serialize};

use crate::node::NetworkNode;

pub const PERSPECTIVE_DISTANCE: f64 = 200.0;

/// Screen-space offset from the globe center plus depth cues.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
    /// Signed depth `z`; positive faces the viewer.
    pub depth: f64,
    pub scale: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobeProjector {
    pub radius: f64,
    pub distance: f64,
}

impl GlobeProjector {
    pub fn new(radius: f64) -> Self {
        Self {
            radius,
            distance: PERSPECTIVE_DISTANCE,
        }
    }

    pub fn with_distance(radius: f64, distance: f64) -> Self {
        Self { radius, distance }
    }

    pub fn project(&self, node: &NetworkNode, rotation: f64) -> ProjectedPoint {
        self.project_lat_lon(node.latitude, node.longitude, rotation)
    }

    pub fn project_lat_lon(&self, latitude: f64, longitude: f64, rotation: f64) -> ProjectedPoint {
        let r = self.radius;
        let phi = (90.0 - latitude).to_radians();
        let theta = (longitude + rotation).to_radians();

        let x = r * phi.sin() * theta.cos();
        let y = r * phi.cos();
        let z = r * phi.sin() * theta.sin();

        let scale = self.distance / (z + r + self.distance);
        ProjectedPoint {
            x: x * scale,
            y: y * scale,
            depth: z,
            scale,
        }
    }
}

/// Project with the default camera distance.
pub fn project(node: &NetworkNode, rotation: f64, radius: f64) -> ProjectedPoint {
    GlobeProjector::new(radius).project(node, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f64 = 100.0;

    #[test]
    fn test_maximum_depth_at_quarter_turn() {
        let p = project(&NetworkNode::new(0.0, 90.0, 1.0), 0.0, R);
        assert!((p.depth - R).abs() < 1e-9);
        assert!((p.scale - 200.0 / (2.0 * R + 200.0)).abs() < 1e-12);
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
    }

    #[test]
    fn test_rotation_moves_node_to_front() {
        // lon 0 reaches the front after rotating by 90°.
        let a = project(&NetworkNode::new(0.0, 0.0, 1.0), 90.0, R);
        let b = project(&NetworkNode::new(0.0, 90.0, 1.0), 0.0, R);
        assert!((a.depth - b.depth).abs() < 1e-9);
        assert!((a.scale - b.scale).abs() < 1e-12);
    }

    #[test]
    fn test_equator_origin_is_on_limb() {
        let p = project(&NetworkNode::new(0.0, 0.0, 1.0), 0.0, R);
        assert!(p.depth.abs() < 1e-9);
        assert!((p.scale - 200.0 / (R + 200.0)).abs() < 1e-12);
        assert!((p.x - R * 200.0 / (R + 200.0)).abs() < 1e-9);
    }

    #[test]
    fn test_poles() {
        let north = GlobeProjector::new(R).project_lat_lon(90.0, 0.0, 0.0);
        assert!((north.y - R * north.scale).abs() < 1e-9);
        assert!(north.depth.abs() < 1e-9);
        let south = GlobeProjector::new(R).project_lat_lon(-90.0, 45.0, 12.0);
        assert!((south.y + R * south.scale).abs() < 1e-9);
    }

    #[test]
    fn test_full_turn_is_periodic() {
        let node = NetworkNode::new(22.5, 111.0, 0.7);
        let a = project(&node, 33.0, R);
        let b = project(&node, 393.0, R);
        assert!((a.x - b.x).abs() < 1e-9);
        assert!((a.y - b.y).abs() < 1e-9);
        assert!((a.depth - b.depth).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let node = NetworkNode::new(-37.5, 259.0, 0.4);
        assert_eq!(project(&node, 17.4, R), project(&node, 17.4, R));
    }

    #[test]
    fn test_scale_shrinks_toward_viewer() {
        let front = project(&NetworkNode::new(0.0, 90.0, 1.0), 0.0, R);
        let back = project(&NetworkNode::new(0.0, 270.0, 1.0), 0.0, R);
        assert!(front.scale < back.scale);
        assert!(front.depth > back.depth);
    }
}
