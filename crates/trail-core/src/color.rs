//! Color values and the color+alpha encoding used by both renderers.
//!
//! Strokes and particles carry an opaque [`Rgb`] base color; every draw call
//! combines it with a time-derived opacity through [`Rgb::with_alpha`], which
//! quantises the opacity into an 8-bit channel.

use crate::error::{Result, TrailError};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` or `#RGB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> Result<Self> {
        let invalid = || TrailError::InvalidColor(s.to_string());
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |src: &str| u8::from_str_radix(src, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc expands to #aabbcc
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }

    /// Combine with an opacity in \[0, 1\]. Out-of-range and NaN opacities
    /// clamp (NaN counts as fully transparent).
    #[inline]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: alpha_to_u8(alpha),
        }
    }
}

impl FromStr for Rgb {
    type Err = TrailError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Rgba {
    /// CSS hex notation with alpha, e.g. `#ff69b480`.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}

#[inline]
pub fn alpha_to_u8(alpha: f32) -> u8 {
    if alpha.is_nan() {
        return 0;
    }
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}
