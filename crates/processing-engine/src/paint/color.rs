use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a hex color literal is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("bad hex notation: expected a leading '#'")]
    MissingHash,
    #[error("bad hex notation: {0:?} is not a hex digit")]
    InvalidDigit(char),
    #[error("bad hex notation: {0} digits, only #RGB, #RRGGBB and #RRGGBBAA are supported")]
    InvalidLength(usize),
}

/// Packed straight-alpha RGBA color, `0xRRGGBBAA`.
///
/// Channel constructors mask each argument to 8 bits, so `Color::rgb(256, 0, 0)`
/// wraps rather than saturates.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Color(u32);

impl Color {
    pub const BLACK: Color = Color::from_packed(0x0000_00FF);
    pub const WHITE: Color = Color::from_packed(0xFFFF_FFFF);
    pub const TRANSPARENT: Color = Color::from_packed(0);

    #[inline]
    pub const fn from_packed(rgba: u32) -> Self {
        Self(rgba)
    }

    #[inline]
    pub const fn rgba(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self(
            ((r as u32 & 0xFF) << 24)
                | ((g as u32 & 0xFF) << 16)
                | ((b as u32 & 0xFF) << 8)
                | (a as u32 & 0xFF),
        )
    }

    #[inline]
    pub const fn rgb(r: i32, g: i32, b: i32) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    #[inline]
    pub const fn gray(v: i32) -> Self {
        Self::rgba(v, v, v, 0xFF)
    }

    #[inline]
    pub const fn gray_alpha(v: i32, a: i32) -> Self {
        Self::rgba(v, v, v, a)
    }

    /// Builds a color from hue, saturation and brightness, each on a 0–255 scale.
    pub fn hsba(h: i32, s: i32, b: i32, a: i32) -> Self {
        let h = (h & 0xFF) as f32 / 255.0;
        let s = (s & 0xFF) as f32 / 255.0;
        let v = (b & 0xFF) as f32 / 255.0;

        if s <= 0.0 {
            let g = (v * 255.0).round() as i32;
            return Self::rgba(g, g, g, a);
        }

        let sector = (h * 6.0).rem_euclid(6.0);
        let i = sector.floor();
        let f = sector - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, bl) = match i as u8 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        let to8 = |c: f32| (c * 255.0).round() as i32;
        Self::rgba(to8(r), to8(g), to8(bl), a)
    }

    #[inline]
    pub const fn to_packed(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn r8(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn g8(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn b8(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn a8(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub fn red(self) -> f32 {
        self.r8() as f32
    }

    #[inline]
    pub fn green(self) -> f32 {
        self.g8() as f32
    }

    #[inline]
    pub fn blue(self) -> f32 {
        self.b8() as f32
    }

    #[inline]
    pub fn alpha(self) -> f32 {
        self.a8() as f32
    }

    /// Hue as a whole number on a 0–255 scale (0 for grays).
    pub fn hue(self) -> f32 {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        if delta <= 0.0 {
            return 0.0;
        }

        let sixths = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        // A full turn lands back on red.
        (sixths / 6.0 * 255.0).round() % 255.0
    }

    /// Saturation as a whole number on a 0–255 scale.
    pub fn saturation(self) -> f32 {
        let (r, g, b) = (self.red(), self.green(), self.blue());
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        if max <= 0.0 { 0.0 } else { ((max - min) / max * 255.0).round() }
    }

    /// Brightness on a 0–255 scale (the largest RGB channel).
    pub fn brightness(self) -> f32 {
        self.red().max(self.green()).max(self.blue())
    }

    /// Channel-wise linear interpolation; `amt` is clamped to [0, 1].
    pub fn lerp(self, other: Color, amt: f32) -> Color {
        let t = amt.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as i32;
        Color::rgba(
            mix(self.r8(), other.r8()),
            mix(self.g8(), other.g8()),
            mix(self.b8(), other.b8()),
            mix(self.a8(), other.a8()),
        )
    }

    /// Parses `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let digits = hex.strip_prefix('#').ok_or(ColorParseError::MissingHash)?;

        let mut d = [0u8; 8];
        let mut n = 0usize;
        for c in digits.chars() {
            let v = c.to_digit(16).ok_or(ColorParseError::InvalidDigit(c))?;
            if n < d.len() {
                d[n] = v as u8;
            }
            n += 1;
        }

        let pair = |hi: u8, lo: u8| ((hi << 4) | lo) as i32;
        match n {
            3 => Ok(Color::rgb(pair(d[0], d[0]), pair(d[1], d[1]), pair(d[2], d[2]))),
            6 => Ok(Color::rgb(pair(d[0], d[1]), pair(d[2], d[3]), pair(d[4], d[5]))),
            8 => Ok(Color::rgba(
                pair(d[0], d[1]),
                pair(d[2], d[3]),
                pair(d[4], d[5]),
                pair(d[6], d[7]),
            )),
            other => Err(ColorParseError::InvalidLength(other)),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color(#{:08X})", self.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}
