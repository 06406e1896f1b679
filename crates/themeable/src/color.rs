//! CSS color parsing and WCAG contrast.
//!
//! Supports the color syntaxes that appear in design tokens:
//!
//! - Hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - Functional: `rgb(r, g, b)`, `rgba(r, g, b, a)`
//! - Keywords: `transparent`, `black`, `white`
//!
//! [`contrast`] computes the WCAG 2.x contrast ratio between two colors and is
//! what accessibility variants are checked against (4.5:1 for normal text,
//! 3:1 for large text and UI components).
//!
//! # Example
//!
//! ```rust
//! use themeable::color::{contrast, Rgba};
//!
//! let black = Rgba::parse("#000").unwrap();
//! let white = Rgba::parse("rgb(255, 255, 255)").unwrap();
//! assert!((contrast(black, white) - 21.0).abs() < 1e-9);
//! ```

use std::fmt;

/// Error returned when a string is not a recognized color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorParseError {
    input: String,
}

impl ColorParseError {
    pub(crate) fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color value: '{}'", self.input)
    }
}

impl std::error::Error for ColorParseError {}

/// An sRGB color with alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a CSS color string.
    pub fn parse(s: &str) -> Result<Self, ColorParseError> {
        let s = s.trim();
        let err = || ColorParseError::new(s);

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(err);
        }

        let lower = s.to_ascii_lowercase();
        if let Some(args) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return Self::parse_functional(args).ok_or_else(err);
        }

        match lower.as_str() {
            "transparent" => Ok(Self { a: 0.0, ..Self::rgb(0, 0, 0) }),
            "black" => Ok(Self::rgb(0, 0, 0)),
            "white" => Ok(Self::rgb(255, 255, 255)),
            _ => Err(err()),
        }
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let short = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
        let long = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let (r, g, b, a) = match hex.len() {
            3 => (short(0)?, short(1)?, short(2)?, 255),
            4 => (short(0)?, short(1)?, short(2)?, short(3)?),
            6 => (long(0)?, long(2)?, long(4)?, 255),
            8 => (long(0)?, long(2)?, long(4)?, long(6)?),
            _ => return None,
        };
        Some(Self {
            r,
            g,
            b,
            a: f64::from(a) / 255.0,
        })
    }

    fn parse_functional(args: &str) -> Option<Self> {
        let parts: Vec<&str> = args.split(',').map(str::trim).collect();
        let channel = |p: &str| p.parse::<u8>().ok();
        match parts.as_slice() {
            [r, g, b] => Some(Self::rgb(channel(r)?, channel(g)?, channel(b)?)),
            [r, g, b, a] => {
                let a = a.parse::<f64>().ok().filter(|a| (0.0..=1.0).contains(a))?;
                Some(Self {
                    r: channel(r)?,
                    g: channel(g)?,
                    b: channel(b)?,
                    a,
                })
            }
            _ => None,
        }
    }

    /// Composites this color over an opaque background.
    pub fn over(self, background: Rgba) -> Rgba {
        let mix = |fg: u8, bg: u8| {
            (f64::from(fg) * self.a + f64::from(bg) * (1.0 - self.a)).round() as u8
        };
        Rgba::rgb(
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }

    /// WCAG relative luminance of the color, ignoring alpha.
    pub fn relative_luminance(&self) -> f64 {
        fn linear(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linear(self.r) + 0.7152 * linear(self.g) + 0.0722 * linear(self.b)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// WCAG contrast ratio between two colors, in `1.0..=21.0`.
///
/// Translucent colors are composited over white first.
pub fn contrast(a: Rgba, b: Rgba) -> f64 {
    let white = Rgba::rgb(255, 255, 255);
    let la = a.over(white).relative_luminance();
    let lb = b.over(white).relative_luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}
