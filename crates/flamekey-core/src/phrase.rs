// ─────────────────────────────────────────────────────────────────────
// Flame Key — Phrase Selector
// ─────────────────────────────────────────────────────────────────────
//! Category-keyed poetic responses.
//!
//! Selection is deliberately non-deterministic in production: it is
//! the one user-facing variation that does not come from the seed.

use flamekey_types::Category;

use crate::random::RandomSource;

pub const CALM_PHRASES: [&str; 3] = [
    "Calm waters mirror the sky.",
    "Your words settle like dawn.",
    "The signal is clear and gentle.",
];

pub const ALIGNED_PHRASES: [&str; 3] = [
    "Alignment rings like a bell.",
    "Truth and will braid into light.",
    "The path glows with quiet certainty.",
];

pub const ALARMED_PHRASES: [&str; 3] = [
    "Flares crackle—something bends.",
    "Distortion ripples through the field.",
    "Breathe. Let the signal steady.",
];

pub const DEEP_PHRASES: [&str; 3] = [
    "Deep tides move beneath the flame.",
    "Emotion speaks in violet arcs.",
    "Tender gravity draws all closer.",
];

pub const BLESSING: &str =
    "May your words align with clear intention. May your field be luminous and safe. May truth find you and stay.";

/// Phrase list for a category. Neutral shares the calm list.
pub fn phrases_for(category: Category) -> &'static [&'static str; 3] {
    match category {
        Category::Neutral | Category::Calm => &CALM_PHRASES,
        Category::Aligned => &ALIGNED_PHRASES,
        Category::Alarmed => &ALARMED_PHRASES,
        Category::Deep => &DEEP_PHRASES,
    }
}

/// Draw one phrase for `category`.
pub fn select_phrase(category: Category, randomness: &mut dyn RandomSource) -> &'static str {
    let phrases = phrases_for(category);
    phrases[randomness.next_index(phrases.len())]
}

/// Draw one phrase by category name; unknown names use the calm list.
pub fn select_phrase_named(name: &str, randomness: &mut dyn RandomSource) -> &'static str {
    let category = name.parse::<Category>().unwrap_or(Category::Calm);
    select_phrase(category, randomness)
}
