//! Sketch environment: defaults, renderers, launch errors, arguments and
//! console output.

use std::fmt::Display;

use thiserror::Error;

pub const DEFAULT_WIDTH: u32 = 100;
pub const DEFAULT_HEIGHT: u32 = 100;
pub const MIN_WIDTH: u32 = 10;
pub const MIN_HEIGHT: u32 = 10;

pub const DEFAULT_FRAME_RATE: f32 = processing_engine::time::DEFAULT_FRAME_RATE;
pub const MIN_FRAME_RATE: f32 = 1.0;

pub const DEFAULT_TITLE: &str = "Processing";

/// Canvas implementation requested through `size_with_renderer`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Renderer {
    #[default]
    Default,
    P2D,
    P3D,
    Pdf,
}

impl Renderer {
    /// `Default` and `P2D` share the raster canvas; the rest have no canvas.
    pub fn is_supported(self) -> bool {
        matches!(self, Renderer::Default | Renderer::P2D)
    }
}

#[derive(Debug, Error)]
pub enum SketchError {
    #[error("renderer {0:?} is not supported")]
    UnsupportedRenderer(Renderer),
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

/// Command-line arguments the sketch was started with, program name first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(Vec<String>);

impl Args {
    pub fn new(args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self(args.into_iter().map(Into::into).collect())
    }

    pub fn from_env() -> Self {
        Self(std::env::args().collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Writes `what` to stdout without a newline.
pub fn print(what: impl Display) {
    print!("{what}");
}

/// Writes `what` to stdout followed by a newline.
pub fn println(what: impl Display) {
    println!("{what}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_raster_renderers_are_supported() {
        assert!(Renderer::Default.is_supported());
        assert!(Renderer::P2D.is_supported());
        assert!(!Renderer::P3D.is_supported());
        assert!(!Renderer::Pdf.is_supported());
    }

    #[test]
    fn args_keep_order() {
        let args = Args::new(["sketch", "--fast"]);
        assert_eq!(args.len(), 2);
        assert_eq!(args.get(1), Some("--fast"));
        assert_eq!(args.get(2), None);
        assert_eq!(args.iter().collect::<Vec<_>>(), vec!["sketch", "--fast"]);
    }

    #[test]
    fn unsupported_renderer_message_names_it() {
        let err = SketchError::UnsupportedRenderer(Renderer::P3D);
        assert_eq!(err.to_string(), "renderer P3D is not supported");
    }
}
