// ─────────────────────────────────────────────────────────────────────
// Flame Key — Resonance Score Types
// ─────────────────────────────────────────────────────────────────────

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FlameKeyError;

/// Clamp a value to [lo, hi], mapping NaN to lo and Inf to nearest bound.
#[inline]
pub fn clamp_score(value: f64, lo: f64, hi: f64) -> f64 {
    if value.is_nan() {
        log::warn!("clamp_score: NaN detected, clamping to {lo:.4}");
        return lo;
    }
    if value.is_infinite() {
        let boundary = if value > 0.0 { hi } else { lo };
        log::warn!("clamp_score: Inf detected, clamping to {boundary:.4}");
        return boundary;
    }
    value.clamp(lo, hi)
}

/// Discrete mood bucket derived from resonance and lexical counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Neutral,
    Calm,
    Aligned,
    Alarmed,
    Deep,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Neutral,
        Category::Calm,
        Category::Aligned,
        Category::Alarmed,
        Category::Deep,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Neutral => "neutral",
            Category::Calm => "calm",
            Category::Aligned => "aligned",
            Category::Alarmed => "alarmed",
            Category::Deep => "deep",
        }
    }

    /// Color-state name the front end keys its chrome on.
    pub fn color_state(self) -> &'static str {
        match self {
            Category::Neutral | Category::Calm => "blue",
            Category::Aligned => "gold",
            Category::Alarmed => "red",
            Category::Deep => "violet",
        }
    }

    /// Three-stop ring gradient (hex), start → middle → end.
    pub fn ring_gradient(self) -> [&'static str; 3] {
        match self {
            Category::Neutral | Category::Calm => ["#60a5fa", "#67e8f9", "#818cf8"],
            Category::Aligned => ["#fcd34d", "#fde047", "#fbbf24"],
            Category::Alarmed => ["#fb7185", "#f87171", "#fb923c"],
            Category::Deep => ["#e879f9", "#a78bfa", "#818cf8"],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FlameKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == lower)
            .ok_or_else(|| FlameKeyError::Validation(format!("unknown category: {s:?}")))
    }
}

/// Outcome of one resonance classification.
///
/// Recomputed from scratch on every text change; never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceResult {
    /// Continuous resonance: 0.0 = dissonant, 1.0 = fully resonant.
    pub score: f64,
    pub category: Category,
    /// Distinct positive lexicon words present.
    pub positive_count: u32,
    /// Distinct negative lexicon words present.
    pub negative_count: u32,
    /// Distinct emotional lexicon words present.
    pub emotion_count: u32,
}

impl ResonanceResult {
    pub fn new(
        score: f64,
        category: Category,
        positive_count: u32,
        negative_count: u32,
        emotion_count: u32,
    ) -> Self {
        Self {
            score: clamp_score(score, 0.0, 1.0),
            category,
            positive_count,
            negative_count,
            emotion_count,
        }
    }

    /// Score as a whole percentage, as shown next to the input box.
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_nan() {
        assert_eq!(clamp_score(f64::NAN, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_pos_inf() {
        assert_eq!(clamp_score(f64::INFINITY, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_clamp_neg_inf() {
        assert_eq!(clamp_score(f64::NEG_INFINITY, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_clamp_normal() {
        assert_eq!(clamp_score(0.75, 0.0, 1.0), 0.75);
    }

    #[test]
    fn test_clamp_above_hi() {
        assert_eq!(clamp_score(1.335, 0.0, 1.0), 1.0);
    }

    #[test]
    fn test_result_clamps() {
        let r = ResonanceResult::new(1.4, Category::Aligned, 3, 0, 0);
        assert_eq!(r.score, 1.0);
        assert_eq!(r.percent(), 100);
    }

    #[test]
    fn test_category_round_trips_through_names() {
        for c in Category::ALL {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), c);
        }
        assert_eq!(" DEEP ".parse::<Category>().unwrap(), Category::Deep);
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(matches!(
            "ecstatic".parse::<Category>(),
            Err(FlameKeyError::Validation(_))
        ));
    }

    #[test]
    fn test_color_states() {
        assert_eq!(Category::Neutral.color_state(), "blue");
        assert_eq!(Category::Calm.color_state(), "blue");
        assert_eq!(Category::Aligned.color_state(), "gold");
        assert_eq!(Category::Alarmed.color_state(), "red");
        assert_eq!(Category::Deep.color_state(), "violet");
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Alarmed).unwrap();
        assert_eq!(json, "\"alarmed\"");
    }
}
