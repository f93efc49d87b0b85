// ─────────────────────────────────────────────────────────────────────
// Flame Key — Globe Driver
// ─────────────────────────────────────────────────────────────────────
//! Owns the rotation accumulator and turns it into drawable frames.
//!
//! The driver is the single writer of the rotation angle. A display
//! refresh callback calls [`GlobeDriver::tick`] and then
//! [`GlobeDriver::frame`]; everything else is a pure function of the
//! angle and the static node set.

use serde::{Deserialize, Serialize};

use flamekey_types::FlameKeyResult;

use crate::config::GlobeConfig;
use crate::node::{generate_nodes, NetworkNode};
use crate::projection::GlobeProjector;

/// One node ready to draw, offsets relative to the viewport center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeSprite {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub alpha: f64,
}

/// Everything drawn for one animation frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobeFrame {
    pub radius: f64,
    pub rotation: f64,
    /// Latitude rings as polylines, south to north.
    pub rings: Vec<Vec<(f64, f64)>>,
    pub nodes: Vec<NodeSprite>,
}

#[derive(Debug, Clone)]
pub struct GlobeDriver {
    config: GlobeConfig,
    nodes: Vec<NetworkNode>,
    rotation: f64,
}

impl GlobeDriver {
    pub fn new(config: GlobeConfig) -> FlameKeyResult<Self> {
        config.validate()?;
        let nodes = generate_nodes(config.node_count);
        Ok(Self {
            config,
            nodes,
            rotation: 0.0,
        })
    }

    pub fn nodes(&self) -> &[NetworkNode] {
        &self.nodes
    }

    /// Current rotation in degrees.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    /// Advance one animation tick.
    pub fn tick(&mut self) -> f64 {
        // Never wrapped: projection is periodic in the angle.
        self.rotation += self.config.rotation_step;
        log::trace!("Globe tick: rotation={:.2}", self.rotation);
        self.rotation
    }

    /// Globe radius for a viewport.
    pub fn radius_for(&self, width: f64, height: f64) -> f64 {
        width.min(height).max(0.0) * self.config.radius_fraction
    }

    /// Compose the frame for a `width × height` viewport.
    pub fn frame(&self, width: f64, height: f64) -> GlobeFrame {
        let radius = self.radius_for(width, height);
        let projector = GlobeProjector::with_distance(radius, self.config.perspective_distance);

        let rings = self
            .ring_latitudes()
            .into_iter()
            .map(|lat| {
                self.ring_longitudes()
                    .map(|lon| {
                        let p = projector.project_lat_lon(lat, lon, self.rotation);
                        (p.x, p.y)
                    })
                    .collect()
            })
            .collect();

        let nodes = self
            .nodes
            .iter()
            .map(|node| {
                let p = projector.project(node, self.rotation);
                let facing = if radius > 0.0 {
                    (p.depth / radius).max(0.0)
                } else {
                    0.0
                };
                NodeSprite {
                    x: p.x,
                    y: p.y,
                    size: self.config.base_size + self.config.strength_size * node.strength * p.scale,
                    alpha: self.config.base_alpha + self.config.depth_alpha * facing,
                }
            })
            .collect();

        GlobeFrame {
            radius,
            rotation: self.rotation,
            rings,
            nodes,
        }
    }

    fn ring_latitudes(&self) -> Vec<f64> {
        let step = self.config.ring_latitude_step;
        let count = (120.0 / step).floor() as usize;
        (0..=count).map(|k| -60.0 + k as f64 * step).collect()
    }

    /// 0 to 360 inclusive so each ring closes on itself.
    fn ring_longitudes(&self) -> impl Iterator<Item = f64> {
        let step = self.config.ring_longitude_step;
        let count = (360.0 / step).floor() as usize;
        (0..=count).map(move |k| k as f64 * step)
    }
}
