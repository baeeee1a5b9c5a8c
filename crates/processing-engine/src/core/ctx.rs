use winit::window::Window;

use crate::device::{Presenter, SurfaceErrorAction};
use crate::input::{InputFrame, InputState};
use crate::render::Framebuffer;
use crate::time::FrameTime;
use crate::window::RuntimeCtx;

use super::app::AppControl;

/// Window handle plus size queries.
pub struct WindowCtx<'a> {
    pub window: &'a Window,
}

impl<'a> WindowCtx<'a> {
    /// Returns the drawable size in physical pixels.
    pub fn physical_size(&self) -> (u32, u32) {
        let phys = self.window.inner_size();
        (phys.width, phys.height)
    }

    pub fn scale_factor(&self) -> f32 {
        self.window.scale_factor() as f32
    }
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub presenter: &'a mut Presenter,
    pub input: &'a InputState,
    /// Events received since the previous frame.
    pub input_frame: &'a InputFrame,
    pub time: FrameTime,
    pub runtime: &'a mut RuntimeCtx,
}

impl<'a> FrameCtx<'a> {
    /// Presents `fb` on the window.
    ///
    /// Transient failures skip the frame; fatal ones ask the runtime to exit.
    pub fn present(&mut self, fb: &Framebuffer) -> AppControl {
        match self.presenter.present(fb) {
            Ok(()) => AppControl::Continue,
            Err(SurfaceErrorAction::SkipFrame) => AppControl::Continue,
            Err(SurfaceErrorAction::Fatal) => AppControl::Exit,
        }
    }
}
