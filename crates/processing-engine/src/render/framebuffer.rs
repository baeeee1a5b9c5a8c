use anyhow::{Context, Result};

use crate::paint::Color;

/// Owned RGBA pixel buffer the rasterizer draws into.
///
/// Backed by a premultiplied `tiny_skia::Pixmap`; reads demultiply back to
/// straight-alpha [`Color`].
pub struct Framebuffer {
    pixmap: tiny_skia::Pixmap,
}

impl Framebuffer {
    /// Allocates a `width × height` buffer in physical pixels.
    ///
    /// Fails for zero-sized buffers.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = tiny_skia::Pixmap::new(width, height)
            .with_context(|| format!("cannot allocate a {width}x{height} framebuffer"))?;
        Ok(Self { pixmap })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Reallocates when the size changed; contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == self.width() && height == self.height() {
            return Ok(());
        }
        *self = Framebuffer::new(width, height)?;
        Ok(())
    }

    /// Overwrites every pixel with `color` (no blending).
    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(to_skia_color(color));
    }

    /// Returns the straight-alpha color at `(x, y)`, or `None` out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        // Pixmap::pixel only checks the linear index, so x past the edge
        // would wrap into the next row.
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red() as i32, p.green() as i32, p.blue() as i32, p.alpha() as i32))
    }

    /// Copies the buffer into a `0x00RRGGBB` surface of the same width.
    ///
    /// `dst` may be shorter than the framebuffer (the window shrank between
    /// frames); excess rows are skipped.
    pub fn write_xrgb(&self, dst: &mut [u32]) {
        for (out, px) in dst.iter_mut().zip(self.pixmap.pixels()) {
            let c = px.demultiply();
            *out = ((c.red() as u32) << 16) | ((c.green() as u32) << 8) | c.blue() as u32;
        }
    }

    #[inline]
    pub(crate) fn pixmap_mut(&mut self) -> &mut tiny_skia::Pixmap {
        &mut self.pixmap
    }
}

impl std::fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[inline]
pub(crate) fn to_skia_color(c: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(c.r8(), c.g8(), c.b8(), c.a8())
}
