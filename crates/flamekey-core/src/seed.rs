// ─────────────────────────────────────────────────────────────────────
// Flame Key — Seed Generator
// ─────────────────────────────────────────────────────────────────────
//! Text → seed vector.
//!
//! The text is folded into a 32-bit accumulator (xor code unit,
//! multiply, rotate left 13), then a murmur-style finalizer is applied
//! repeatedly. Each finalized state is both the next seed value
//! (divided by 2^32) and the accumulator for the following draw, so
//! the values form a deterministic chain.

use flamekey_types::{FlameKeyConfig, SeedVector};

pub const SEED_COUNT: usize = 12;
pub const FALLBACK_TEXT: &str = "universal-guard-trust";

const FOLD_INIT: u32 = 1_779_033_703;
const FOLD_MUL: u32 = 3_432_918_353;
const FOLD_ROTATE: u32 = 13;
const MIX_MUL_A: u32 = 2_246_822_507;
const MIX_MUL_B: u32 = 3_266_489_909;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Fold text into the 32-bit accumulator.
pub fn fold_text(text: &str) -> u32 {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut h = FOLD_INIT ^ units.len() as u32;
    for unit in units {
        h = (h ^ u32::from(unit))
            .wrapping_mul(FOLD_MUL)
            .rotate_left(FOLD_ROTATE);
    }
    h
}

/// One round of the avalanche finalizer.
#[inline]
pub fn avalanche(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(MIX_MUL_A);
    h ^= h >> 13;
    h = h.wrapping_mul(MIX_MUL_B);
    h ^= h >> 16;
    h
}

/// Seed generator with a configurable length and empty-text fallback.
#[derive(Debug, Clone)]
pub struct SeedGenerator {
    count: usize,
    fallback: String,
}

impl Default for SeedGenerator {
    fn default() -> Self {
        Self {
            count: SEED_COUNT,
            fallback: FALLBACK_TEXT.to_string(),
        }
    }
}

impl SeedGenerator {
    pub fn new(count: usize, fallback: impl Into<String>) -> Self {
        Self {
            count,
            fallback: fallback.into(),
        }
    }

    pub fn from_config(config: &FlameKeyConfig) -> Self {
        Self::new(config.seed_count, config.fallback_text.clone())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn generate(&self, text: &str) -> SeedVector {
        let source = if text.is_empty() {
            self.fallback.as_str()
        } else {
            text
        };
        let mut h = fold_text(source);
        let values = (0..self.count)
            .map(|_| {
                h = avalanche(h);
                f64::from(h) / TWO_POW_32
            })
            .collect();
        SeedVector::new(values)
    }
}

/// Derive `count` seed values from `text` with the standard fallback.
pub fn generate_seed(text: &str, count: usize) -> SeedVector {
    SeedGenerator::new(count, FALLBACK_TEXT).generate(text)
}
