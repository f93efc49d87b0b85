// ─────────────────────────────────────────────────────────────────────
// Flame Key — Palette Selector
// ─────────────────────────────────────────────────────────────────────

use flamekey_types::{Hsl, Palette, SeedVector};

const PRIMARY_SATURATION: u8 = 85;
const PRIMARY_LIGHTNESS: u8 = 65;
const SECONDARY_SATURATION: u8 = 80;
const SECONDARY_LIGHTNESS: u8 = 55;
const SECONDARY_HUE_SHIFT: u16 = 60;

/// Pick the glyph palette from the first seed value.
///
/// `hue = floor(seed[0] * 360)`; the secondary color sits 60° further
/// round the wheel, slightly darker and less saturated. An empty seed
/// is treated as hue 0.
pub fn select_palette(seed: &SeedVector) -> Palette {
    let first = seed.values().first().copied().unwrap_or(0.0);
    let hue = ((first * 360.0).floor() as u16).min(359);
    Palette {
        hue,
        primary: Hsl::new(hue, PRIMARY_SATURATION, PRIMARY_LIGHTNESS),
        secondary: Hsl::new(
            (hue + SECONDARY_HUE_SHIFT) % 360,
            SECONDARY_SATURATION,
            SECONDARY_LIGHTNESS,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::{generate_seed, FALLBACK_TEXT, SEED_COUNT};

    #[test]
    fn test_fallback_palette() {
        let palette = select_palette(&generate_seed(FALLBACK_TEXT, SEED_COUNT));
        assert_eq!(palette.hue, 118);
        assert_eq!(palette.primary.to_string(), "hsl(118, 85%, 65%)");
        assert_eq!(palette.secondary.to_string(), "hsl(178, 80%, 55%)");
    }

    #[test]
    fn test_secondary_wraps() {
        let palette = select_palette(&generate_seed("hello", SEED_COUNT));
        assert_eq!(palette.hue, 300);
        assert_eq!(palette.secondary.hue, 0);
    }

    #[test]
    fn test_hue_edges() {
        assert_eq!(select_palette(&SeedVector::new(vec![0.0])).hue, 0);
        assert_eq!(select_palette(&SeedVector::new(vec![0.999_999_9])).hue, 359);
        assert_eq!(select_palette(&SeedVector::new(vec![])).hue, 0);
    }

    #[test]
    fn test_deterministic() {
        let seed = generate_seed("kind words", SEED_COUNT);
        assert_eq!(select_palette(&seed), select_palette(&seed.clone()));
    }
}
