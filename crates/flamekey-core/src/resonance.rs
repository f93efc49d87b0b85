// ─────────────────────────────────────────────────────────────────────
// Flame Key — Resonance Classifier
// ─────────────────────────────────────────────────────────────────────
//! Lexical heuristic mapping text to a resonance score and a mood
//! category.
//!
//! The score is
//! `0.5 + w_pol·(pos - neg) + w_len·min(1, len/120) + w_jit·(rand - 0.5)`,
//! clamped to [0, 1]. Counts are substring hits against three fixed
//! lexicons, each word counted at most once.
//!
//! Categories are decided by an ordered rule list evaluated in full:
//! every rule whose predicate holds overwrites the previous result, so a
//! later rule wins even when an earlier one also fired (`deep` over
//! `aligned`, for example). This is not an if/else-if chain.

use flamekey_types::score::clamp_score;
use flamekey_types::{Category, FlameKeyConfig, ResonanceResult};

use crate::random::RandomSource;

pub const POSITIVE_WORDS: [&str; 9] = [
    "truth", "love", "clear", "kind", "align", "peace", "calm", "trust", "honest",
];
pub const NEGATIVE_WORDS: [&str; 7] = [
    "lie", "fear", "doubt", "anger", "conflict", "distort", "fake",
];
pub const EMOTION_WORDS: [&str; 8] = [
    "heart", "tear", "cry", "longing", "sorrow", "joy", "grief", "devotion",
];

/// Distinct lexicon words contained in `text` (already lower-cased).
fn count_hits(text: &str, words: &[&str]) -> u32 {
    words.iter().filter(|w| text.contains(*w)).count() as u32
}

/// Inputs visible to the category rules.
#[derive(Debug, Clone, Copy)]
struct Signals {
    pos: u32,
    neg: u32,
    emo: u32,
    score: f64,
    aligned_threshold: f64,
    deep_threshold: f64,
}

fn is_alarmed(s: &Signals) -> bool {
    s.neg > s.pos && s.neg >= 1
}

fn is_aligned(s: &Signals) -> bool {
    s.pos >= 1 && s.neg == 0 && s.score > s.aligned_threshold
}

fn is_deep(s: &Signals) -> bool {
    s.emo >= 1 && s.score > s.deep_threshold
}

/// Evaluated in order; the last rule that holds decides.
const CATEGORY_RULES: [(Category, fn(&Signals) -> bool); 3] = [
    (Category::Alarmed, is_alarmed),
    (Category::Aligned, is_aligned),
    (Category::Deep, is_deep),
];

fn categorize(signals: &Signals) -> Category {
    CATEGORY_RULES
        .iter()
        .fold(Category::Neutral, |current, (category, holds)| {
            if holds(signals) {
                *category
            } else {
                current
            }
        })
}

/// Resonance classifier with tunable weights and thresholds.
#[derive(Debug, Clone)]
pub struct ResonanceClassifier {
    polarity_weight: f64,
    length_weight: f64,
    jitter_weight: f64,
    length_saturation: usize,
    aligned_threshold: f64,
    deep_threshold: f64,
}

impl Default for ResonanceClassifier {
    fn default() -> Self {
        Self::from_config(&FlameKeyConfig::default())
    }
}

impl ResonanceClassifier {
    pub fn from_config(config: &FlameKeyConfig) -> Self {
        Self {
            polarity_weight: config.polarity_weight,
            length_weight: config.length_weight,
            jitter_weight: config.jitter_weight,
            length_saturation: config.length_saturation.max(1),
            aligned_threshold: config.aligned_threshold,
            deep_threshold: config.deep_threshold,
        }
    }

    /// Classify `text`, drawing exactly one jitter value from `randomness`.
    pub fn analyze(&self, text: &str, randomness: &mut dyn RandomSource) -> ResonanceResult {
        let lower = text.to_lowercase();
        let pos = count_hits(&lower, &POSITIVE_WORDS);
        let neg = count_hits(&lower, &NEGATIVE_WORDS);
        let emo = count_hits(&lower, &EMOTION_WORDS);

        let jitter = randomness.next_unit();
        let length = lower.encode_utf16().count() as f64;
        let length_factor = (length / self.length_saturation as f64).min(1.0);
        let polarity = f64::from(pos) - f64::from(neg);

        let score = clamp_score(
            0.5 + self.polarity_weight * polarity
                + self.length_weight * length_factor
                + (jitter - 0.5) * self.jitter_weight,
            0.0,
            1.0,
        );

        let category = categorize(&Signals {
            pos,
            neg,
            emo,
            score,
            aligned_threshold: self.aligned_threshold,
            deep_threshold: self.deep_threshold,
        });

        ResonanceResult::new(score, category, pos, neg, emo)
    }
}

/// Classify with the default weights.
pub fn analyze_resonance(text: &str, randomness: &mut dyn RandomSource) -> ResonanceResult {
    ResonanceClassifier::default().analyze(text, randomness)
}
