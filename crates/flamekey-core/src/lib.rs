// ─────────────────────────────────────────────────────────────────────
// Flame Key — Core Engine
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! Deterministic text-to-visual generation and heuristic resonance
//! classification.
//!
//! Data flow: text feeds the seed generator (sigil + palette) and,
//! independently, the resonance classifier (mood). The classifier's
//! category drives phrase selection.
//!
//! # Invariants
//!
//! 1. **Seeds are bit-reproducible**: identical text yields an identical
//!    seed vector on every call and every run. All hashing is 32-bit
//!    wrapping arithmetic over UTF-16 code units.
//!
//! 2. **The core is total**: seed, sigil, palette, resonance, and phrase
//!    selection never fail. Empty text hashes a fixed fallback string.
//!
//! 3. **Randomness is injected**: every non-deterministic draw goes
//!    through a [`RandomSource`], so tests substitute a fixed source.
//!
//! 4. **Collaborators are optional**: speech output sits behind
//!    [`PhraseSink`] with a no-op default; nothing in the core waits on
//!    it or branches on its presence.

pub mod palette;
pub mod phrase;
pub mod ports;
pub mod random;
pub mod resonance;
pub mod seed;
pub mod session;
pub mod sigil;
pub mod svg;

pub use palette::select_palette;
pub use phrase::{select_phrase, select_phrase_named, BLESSING};
pub use ports::{ExternalSink, NoopSink, PhraseSink, TranscriptEvent, Utterance};
pub use random::{jitter_source, FixedSource, HashSource, RandomSource, ThreadSource, XorShiftSource};
pub use resonance::{analyze_resonance, ResonanceClassifier};
pub use seed::{generate_seed, SeedGenerator};
pub use session::{Responder, Session, SessionState};
pub use sigil::{build_sigil, SigilGeometry};
pub use svg::{parse_path_data, path_data, render_svg, ParsedPath};
