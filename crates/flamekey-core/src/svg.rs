// ─────────────────────────────────────────────────────────────────────
// Flame Key — Vector Document Export
// ─────────────────────────────────────────────────────────────────────
//! Sigil + palette → standalone SVG document, and the reverse parse of
//! the path description for consumers that re-read exported glyphs.
//!
//! Path descriptions use absolute commands only:
//! `M x0 y0 Q cx cy x1 y1 … Z`, anchors printed with two decimals.

use std::fmt::Write as _;

use flamekey_types::{FlameKeyError, FlameKeyResult, Palette, Point, Segment, SigilPath};

/// Path description (`d` attribute) for a sigil.
pub fn path_data(path: &SigilPath) -> String {
    let start = path.start();
    let mut d = format!("M {:.2} {:.2}", start.x, start.y);
    for segment in path.segments() {
        // Infallible: writing into a String.
        let _ = match segment {
            Segment::Quad { control, to } => write!(
                d,
                " Q {} {} {:.2} {:.2}",
                control.x, control.y, to.x, to.y
            ),
            Segment::Close { .. } => write!(d, " Z"),
        };
    }
    d
}

/// Render the downloadable glyph document.
pub fn render_svg(path: &SigilPath, palette: &Palette) -> String {
    let d = path_data(path);
    let center = path.center();
    let (cx, cy) = (center.x, center.y);
    let primary = palette.primary;
    let secondary = palette.secondary;
    format!(
        r##"<svg id="flame-key-svg" width="320" height="320" viewBox="0 0 300 300" xmlns="http://www.w3.org/2000/svg">
  <defs>
    <radialGradient id="g" cx="50%" cy="50%" r="60%">
      <stop offset="0%" stop-color="{primary}" stop-opacity="0.95"/>
      <stop offset="70%" stop-color="{secondary}" stop-opacity="0.6"/>
      <stop offset="100%" stop-color="transparent"/>
    </radialGradient>
    <filter id="glow" x="-50%" y="-50%" width="200%" height="200%">
      <feGaussianBlur stdDeviation="4" result="blur"/>
      <feMerge>
        <feMergeNode in="blur"/>
        <feMergeNode in="SourceGraphic"/>
      </feMerge>
    </filter>
  </defs>
  <rect x="0" y="0" width="300" height="300" fill="#000000"/>
  <circle cx="{cx}" cy="{cy}" r="120" fill="url(#g)" opacity="0.35"/>
  <g filter="url(#glow)">
    <animateTransform attributeName="transform" type="rotate" from="0 {cx} {cy}" to="360 {cx} {cy}" dur="18s" repeatCount="indefinite"/>
    <path d="{d}" fill="none" stroke="{primary}" stroke-width="2.2"/>
    <path d="{d}" fill="none" stroke="{secondary}" stroke-width="1" opacity="0.6">
      <animate attributeName="stroke-dasharray" values="2,8; 8,2; 2,8" dur="6s" repeatCount="indefinite"/>
    </path>
  </g>
</svg>
"##
    )
}

/// First `d="…"` attribute in a document.
pub fn extract_path_data(svg: &str) -> FlameKeyResult<&str> {
    let marker = " d=\"";
    let start = svg
        .find(marker)
        .map(|i| i + marker.len())
        .ok_or_else(|| FlameKeyError::PathParse("no path description found".to_string()))?;
    let len = svg[start..]
        .find('"')
        .ok_or_else(|| FlameKeyError::PathParse("unterminated d attribute".to_string()))?;
    Ok(&svg[start..start + len])
}

/// Anchors and control points recovered from a path description.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedPath {
    /// Move target followed by every segment end point (closing edge excluded).
    pub points: Vec<Point>,
    /// Quadratic control points, in order.
    pub controls: Vec<Point>,
    /// Whether the description ends with a close command.
    pub closed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

fn tokenize(d: &str) -> FlameKeyResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut number = String::new();
    let flush = |number: &mut String, tokens: &mut Vec<Token>| -> FlameKeyResult<()> {
        if number.is_empty() {
            return Ok(());
        }
        let value = number
            .parse::<f64>()
            .map_err(|e| FlameKeyError::PathParse(format!("bad number {number:?}: {e}")))?;
        tokens.push(Token::Number(value));
        number.clear();
        Ok(())
    };

    for c in d.chars() {
        match c {
            c if c.is_whitespace() || c == ',' => flush(&mut number, &mut tokens)?,
            'e' | 'E' if !number.is_empty() => number.push(c),
            c if c.is_ascii_alphabetic() => {
                flush(&mut number, &mut tokens)?;
                tokens.push(Token::Command(c));
            }
            '-' | '+' if !number.is_empty() && !number.ends_with(|c| c == 'e' || c == 'E') => {
                flush(&mut number, &mut tokens)?;
                number.push(c);
            }
            _ => number.push(c),
        }
    }
    flush(&mut number, &mut tokens)?;
    Ok(tokens)
}

fn take_point(tokens: &[Token], at: usize, command: char) -> FlameKeyResult<Point> {
    match (tokens.get(at), tokens.get(at + 1)) {
        (Some(Token::Number(x)), Some(Token::Number(y))) => Ok(Point::new(*x, *y)),
        _ => Err(FlameKeyError::PathParse(format!(
            "command {command} expects a coordinate pair at token {at}"
        ))),
    }
}

/// Parse a path description produced by [`path_data`].
///
/// Supports absolute `M`, `L`, `Q` (with implicit repetition) and `Z`/`z`.
pub fn parse_path_data(d: &str) -> FlameKeyResult<ParsedPath> {
    let tokens = tokenize(d)?;
    let mut parsed = ParsedPath {
        points: Vec::new(),
        controls: Vec::new(),
        closed: false,
    };
    let mut i = 0;
    let mut command: Option<char> = None;

    while i < tokens.len() {
        if let Token::Command(c) = tokens[i] {
            command = Some(c);
            i += 1;
            if c == 'Z' || c == 'z' {
                parsed.closed = true;
                continue;
            }
            if parsed.closed {
                return Err(FlameKeyError::PathParse(
                    "drawing command after close".to_string(),
                ));
            }
            if c == 'M' && !parsed.points.is_empty() {
                return Err(FlameKeyError::PathParse(
                    "multiple subpaths are not supported".to_string(),
                ));
            }
            continue;
        }
        match command {
            Some(c @ ('M' | 'L')) => {
                parsed.points.push(take_point(&tokens, i, c)?);
                i += 2;
            }
            Some('Q') => {
                parsed.controls.push(take_point(&tokens, i, 'Q')?);
                parsed.points.push(take_point(&tokens, i + 2, 'Q')?);
                i += 4;
            }
            Some(c) if c == 'Z' || c == 'z' => {
                return Err(FlameKeyError::PathParse(
                    "coordinates after close".to_string(),
                ));
            }
            Some(c) => {
                return Err(FlameKeyError::PathParse(format!(
                    "unsupported command {c:?}"
                )));
            }
            None => {
                return Err(FlameKeyError::PathParse(
                    "path must start with a command".to_string(),
                ));
            }
        }
    }

    if parsed.points.is_empty() {
        return Err(FlameKeyError::PathParse("empty path".to_string()));
    }
    Ok(parsed)
}
