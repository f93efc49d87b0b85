// ─────────────────────────────────────────────────────────────────────
// Flame Key — Network Nodes
// ─────────────────────────────────────────────────────────────────────

use serde::{Deserialize, Serialize};

/// A point on the globe surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NetworkNode {
    /// Degrees, -90..=90.
    pub latitude: f64,
    /// Degrees, 0..360.
    pub longitude: f64,
    /// Visual weight in [0, 1].
    pub strength: f64,
}

impl NetworkNode {
    pub fn new(latitude: f64, longitude: f64, strength: f64) -> Self {
        Self {
            latitude,
            longitude,
            strength: strength.clamp(0.0, 1.0),
        }
    }
}

/// The fixed synthetic node layout.
///
/// Node `i` sits at latitude `-60 + (7.5·i mod 120)`, longitude
/// `37·i mod 360`, with strength `0.5 + 0.5·sin(1.234·i)`.
pub fn generate_nodes(count: usize) -> Vec<NetworkNode> {
    (0..count)
        .map(|i| {
            let i = i as f64;
            NetworkNode::new(
                -60.0 + (i * 7.5) % 120.0,
                (i * 37.0) % 360.0,
                0.5 + 0.5 * (i * 1.234).sin(),
            )
        })
        .collect()
}
