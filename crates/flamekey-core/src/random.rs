// ─────────────────────────────────────────────────────────────────────
// Flame Key — Randomness Sources
// ─────────────────────────────────────────────────────────────────────
//! Injected randomness.
//!
//! Visuals need bit-reproducible draws while phrase selection and
//! empty-text jitter are meant to vary. Both go through the same
//! [`RandomSource`] trait so callers (and tests) choose the source.

use rand::Rng;

use crate::seed::avalanche;

const FNV_OFFSET: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// A stream of uniform values in [0, 1).
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_unit() * len as f64) as usize).min(len - 1)
    }
}

/// 32-bit FNV-1a over UTF-16 code units.
pub fn fnv1a(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET, |h, unit| {
        (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Deterministic source seeded from text.
///
/// Each draw is `(state mod 100) / 100`, after which the state is
/// avalanched. The first draw is therefore a two-decimal jitter fixed by
/// the lower-cased text.
#[derive(Debug, Clone)]
pub struct HashSource {
    state: u32,
}

impl HashSource {
    pub fn from_text(text: &str) -> Self {
        Self {
            state: fnv1a(&text.to_lowercase()),
        }
    }

    pub fn from_state(state: u32) -> Self {
        Self { state }
    }
}

impl RandomSource for HashSource {
    fn next_unit(&mut self) -> f64 {
        let value = f64::from(self.state % 100) / 100.0;
        self.state = avalanche(self.state);
        value
    }
}

/// Minimal xorshift64 generator for reproducible phrase selection.
#[derive(Debug, Clone)]
pub struct XorShiftSource {
    state: u64,
}

impl XorShiftSource {
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 0xDEAD_BEEF_CAFE_BABE } else { seed },
        }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

impl RandomSource for XorShiftSource {
    fn next_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Non-deterministic source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Yields one constant forever.
#[derive(Debug, Clone, Copy)]
pub struct FixedSource(f64);

impl FixedSource {
    /// Values outside [0, 1) are pulled to the nearest representable end.
    pub fn new(value: f64) -> Self {
        let value = if value.is_nan() { 0.0 } else { value };
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// Jitter-free source: the centered jitter term evaluates to zero.
    pub fn neutral() -> Self {
        Self(0.5)
    }
}

impl RandomSource for FixedSource {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Jitter source for resonance scoring: text-seeded when there is text,
/// thread RNG otherwise.
pub fn jitter_source(text: &str) -> Box<dyn RandomSource> {
    if text.is_empty() {
        Box::new(ThreadSource)
    } else {
        Box::new(HashSource::from_text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fnv_known_values() {
        assert_eq!(fnv1a(""), FNV_OFFSET);
        assert_eq!(fnv1a("hello"), 1_335_831_723);
        assert_eq!(fnv1a("joy and heart"), 1_454_028_428);
    }

    #[test]
    fn test_hash_source_first_draw_is_two_decimal_jitter() {
        let mut src = HashSource::from_text("joy and heart");
        assert!((src.next_unit() - 0.28).abs() < 1e-12);
    }

    #[test]
    fn test_hash_source_lowercases() {
        let mut a = HashSource::from_text("Joy And Heart");
        let mut b = HashSource::from_text("joy and heart");
        for _ in 0..5 {
            assert_eq!(a.next_unit(), b.next_unit());
        }
    }

    #[test]
    fn test_hash_source_chain_in_range() {
        let mut src = HashSource::from_text("truth is clear");
        for _ in 0..100 {
            let v = src.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_xorshift_zero_seed_replaced() {
        let mut a = XorShiftSource::new(0);
        let mut b = XorShiftSource::new(0xDEAD_BEEF_CAFE_BABE);
        assert_eq!(a.next_u64(), b.next_u64());
    }

    #[test]
    fn test_xorshift_reproducible() {
        let mut a = XorShiftSource::new(42);
        let mut b = XorShiftSource::new(42);
        for _ in 0..10 {
            let v = a.next_unit();
            assert_eq!(v, b.next_unit());
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn test_thread_source_range() {
        let mut src = ThreadSource;
        for _ in 0..100 {
            assert!((0.0..1.0).contains(&src.next_unit()));
        }
    }

    #[test]
    fn test_fixed_source_clamps() {
        assert_eq!(FixedSource::new(-2.0).next_unit(), 0.0);
        assert!(FixedSource::new(1.0).next_unit() < 1.0);
        assert_eq!(FixedSource::new(f64::NAN).next_unit(), 0.0);
        assert_eq!(FixedSource::neutral().next_unit(), 0.5);
    }

    #[test]
    fn test_next_index_bounds() {
        let mut high = FixedSource::new(0.999_999);
        assert_eq!(high.next_index(3), 2);
        let mut low = FixedSource::new(0.0);
        assert_eq!(low.next_index(3), 0);
        assert_eq!(low.next_index(0), 0);
    }

    #[test]
    fn test_jitter_source_deterministic_for_text() {
        let a = jitter_source("i fear").next_unit();
        let b = jitter_source("i fear").next_unit();
        assert_eq!(a, b);
        assert!((a - 0.58).abs() < 1e-12);
    }
}
