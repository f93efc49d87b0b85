// ─────────────────────────────────────────────────────────────────────
// Flame Key — Network Globe
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Rotating network globe: a fixed node layout projected onto the
//! screen with a simple perspective camera.

pub mod config;
pub mod driver;
pub mod node;
pub mod projection;

pub use config::{GlobeConfig, MAX_NODE_COUNT, MIN_RING_LATITUDE_STEP, MIN_RING_LONGITUDE_STEP};
pub use driver::{GlobeDriver, GlobeFrame, NodeSprite};
pub use node::{generate_nodes, NetworkNode};
pub use projection::{project, GlobeProjector, ProjectedPoint, PERSPECTIVE_DISTANCE};
