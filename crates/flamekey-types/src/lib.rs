// ─────────────────────────────────────────────────────────────────────
// Flame Key — Engine Types
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Type definitions, configuration, and error hierarchy for the
//! Flame Key engine: the deterministic text-to-sigil generator and
//! resonance classifier behind the Flame of Trust front end.

pub mod config;
pub mod error;
pub mod score;
pub mod visual;

pub use config::FlameKeyConfig;
pub use error::{FlameKeyError, FlameKeyResult};
pub use score::{clamp_score, Category, ResonanceResult};
pub use visual::{Hsl, Palette, Point, SeedVector, Segment, SigilPath};
