//! Color inputs for `fill`, `stroke`, `background` and `color`.

pub use processing_engine::paint::{Color, ColorParseError};

/// How three- and four-channel inputs are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum ColorMode {
    /// Red, green, blue, each 0–255.
    #[default]
    Rgb,
    /// Hue, saturation, brightness, each 0–255.
    Hsb,
}

/// Raw channel values as written in a sketch, before the color mode applies.
///
/// Built through `From` so one parameter accepts `fill(255)`,
/// `fill((255, 128))`, `fill((255, 0, 0))`, `fill((255, 0, 0, 128))` and
/// `fill(color)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Channels {
    Gray(i32),
    GrayAlpha(i32, i32),
    Triple(i32, i32, i32),
    TripleAlpha(i32, i32, i32, i32),
    Color(Color),
}

impl Channels {
    /// Resolves the channels to a color under `mode`.
    ///
    /// Gray values and prebuilt colors are mode independent.
    pub fn resolve(self, mode: ColorMode) -> Color {
        match (self, mode) {
            (Channels::Gray(v), _) => Color::gray(v),
            (Channels::GrayAlpha(v, a), _) => Color::gray_alpha(v, a),
            (Channels::Triple(a, b, c), ColorMode::Rgb) => Color::rgb(a, b, c),
            (Channels::Triple(h, s, b), ColorMode::Hsb) => Color::hsba(h, s, b, 255),
            (Channels::TripleAlpha(a, b, c, alpha), ColorMode::Rgb) => Color::rgba(a, b, c, alpha),
            (Channels::TripleAlpha(h, s, b, alpha), ColorMode::Hsb) => Color::hsba(h, s, b, alpha),
            (Channels::Color(c), _) => c,
        }
    }
}

impl From<i32> for Channels {
    fn from(v: i32) -> Self {
        Channels::Gray(v)
    }
}

impl From<(i32, i32)> for Channels {
    fn from((v, a): (i32, i32)) -> Self {
        Channels::GrayAlpha(v, a)
    }
}

impl From<(i32, i32, i32)> for Channels {
    fn from((a, b, c): (i32, i32, i32)) -> Self {
        Channels::Triple(a, b, c)
    }
}

impl From<(i32, i32, i32, i32)> for Channels {
    fn from((a, b, c, alpha): (i32, i32, i32, i32)) -> Self {
        Channels::TripleAlpha(a, b, c, alpha)
    }
}

impl From<Color> for Channels {
    fn from(c: Color) -> Self {
        Channels::Color(c)
    }
}
