use std::num::NonZeroU32;
use std::sync::Arc;

use anyhow::{Result, anyhow};
use softbuffer::{Context, SoftBufferError, Surface};
use winit::window::Window;

use super::error::{SurfaceErrorAction, classify_surface_error};
use crate::render::Framebuffer;

/// Copies finished framebuffers onto the window through `softbuffer`.
pub struct Presenter {
    window: Arc<Window>,
    surface: Surface<Arc<Window>, Arc<Window>>,
    size: (u32, u32),
}

impl Presenter {
    pub fn new(window: Arc<Window>) -> Result<Self> {
        // SoftBufferError is not Send + Sync, so it cannot go through
        // anyhow::Context directly.
        let context = Context::new(window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer context: {e}"))?;
        let surface = Surface::new(&context, window.clone())
            .map_err(|e| anyhow!("failed to create softbuffer surface: {e}"))?;
        Ok(Self {
            window,
            surface,
            size: (0, 0),
        })
    }

    /// Physical size of the window's drawable area.
    pub fn physical_size(&self) -> (u32, u32) {
        let size = self.window.inner_size();
        (size.width, size.height)
    }

    /// Presents `fb`, resizing the surface to match it first.
    ///
    /// Zero-sized framebuffers cannot exist, so a minimized window simply
    /// keeps its previous surface size.
    pub fn present(&mut self, fb: &Framebuffer) -> Result<(), SurfaceErrorAction> {
        let (w, h) = (fb.width(), fb.height());
        if self.size != (w, h) {
            let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else {
                return Err(SurfaceErrorAction::SkipFrame);
            };
            self.surface.resize(nw, nh).map_err(report)?;
            self.size = (w, h);
        }

        let mut buffer = self.surface.buffer_mut().map_err(report)?;
        fb.write_xrgb(&mut buffer);

        self.window.pre_present_notify();
        buffer.present().map_err(report)
    }
}

fn report(err: SoftBufferError) -> SurfaceErrorAction {
    let action = classify_surface_error(&err);
    match action {
        SurfaceErrorAction::SkipFrame => log::debug!("skipping frame: {err}"),
        SurfaceErrorAction::Fatal => log::error!("presentation failed: {err}"),
    }
    action
}
