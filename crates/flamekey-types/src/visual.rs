// ─────────────────────────────────────────────────────────────────────
// Flame Key — Visual Value Types
// ─────────────────────────────────────────────────────────────────────
//! Seed vectors, colors, and sigil geometry shared between the core
//! generator and the binding layer.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Ordered pseudo-random values in [0, 1), derived from text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedVector(Vec<f64>);

impl SeedVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Value at `i`, wrapping around the end. `None` for an empty vector.
    pub fn cyclic(&self, i: usize) -> Option<f64> {
        i.checked_rem(self.0.len()).map(|j| self.0[j])
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl Index<usize> for SeedVector {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// HSL color with integral hue and percentage channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, [0, 360).
    pub hue: u16,
    /// Saturation percentage, [0, 100].
    pub saturation: u8,
    /// Lightness percentage, [0, 100].
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue: hue % 360,
            saturation: saturation.min(100),
            lightness: lightness.min(100),
        }
    }

    /// Convert to 8-bit sRGB.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        let s = f64::from(self.saturation) / 100.0;
        let l = f64::from(self.lightness) / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = f64::from(self.hue) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }

    /// `#rrggbb` form of [`Hsl::to_rgb`].
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Hsl {
    /// CSS functional notation, e.g. `hsl(118, 85%, 65%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Glyph coloring derived from the first seed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub hue: u16,
    pub primary: Hsl,
    pub secondary: Hsl,
}

/// One step of a sigil outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// Quadratic curve bowing toward `control`, ending at `to`.
    Quad { control: Point, to: Point },
    /// Straight closing edge back to the first point.
    Close { to: Point },
}

impl Segment {
    pub fn end(&self) -> Point {
        match *self {
            Segment::Quad { to, .. } | Segment::Close { to } => to,
        }
    }
}

/// Closed curve anchored around a shared center.
///
/// Always holds exactly one anchor per seed value. Segments run from
/// anchor to anchor in seed order, each bowing toward `center`, and a
/// final edge returns to the first anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SigilPath {
    center: Point,
    points: Vec<Point>,
}

impl SigilPath {
    /// Build a path from anchors. Returns `None` for an empty anchor set.
    pub fn new(center: Point, points: Vec<Point>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self { center, points })
    }

    /// Build a path that is non-empty by construction.
    pub fn closed_loop(
        center: Point,
        first: Point,
        rest: impl IntoIterator<Item = Point>,
    ) -> Self {
        let mut points = vec![first];
        points.extend(rest);
        Self { center, points }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    /// Segments after the initial move, closing edge last.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = self.points[1..]
            .iter()
            .map(|&to| Segment::Quad {
                control: self.center,
                to,
            })
            .collect();
        segments.push(Segment::Close { to: self.start() });
        segments
    }
}
