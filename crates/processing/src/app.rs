use log::{debug, error, info};
use winit::dpi::LogicalSize;

use processing_engine::core::{App as EngineApp, AppControl, FrameCtx};
use processing_engine::logging::{LoggingConfig, init_logging};
use processing_engine::render::{Framebuffer, Rasterizer};
use processing_engine::window::{Runtime, RuntimeConfig, RuntimeCtx};

use crate::applet::Applet;
use crate::environment::{Args, SketchError};
use crate::sketch::Sketch;

// ── SketchConfig ──────────────────────────────────────────────────────────

/// Launch options that live outside the sketch itself.
#[derive(Debug, Clone, Default)]
pub struct SketchConfig {
    /// Window title; a `title()` call in `setup` takes precedence.
    pub title: Option<String>,
    /// Logger setup; `None` leaves logging to the host program.
    pub logging: Option<LoggingConfig>,
    /// RNG seed for reproducible `random*` output.
    pub seed: Option<u64>,
    /// Arguments exposed through `Applet::args`; defaults to the process's.
    pub args: Option<Vec<String>>,
}

// ── Processing ────────────────────────────────────────────────────────────

/// Sketch launcher.
///
/// ```rust,ignore
/// Processing::new()
///     .title("Bounce")
///     .seed(7)
///     .logging(LoggingConfig::default())
///     .run(Bounce::default())?;
/// ```
#[derive(Debug, Default)]
pub struct Processing {
    config: SketchConfig,
}

impl Processing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SketchConfig) -> Self {
        Self { config }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.config.title = Some(title.into());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.config.logging = Some(logging);
        self
    }

    pub fn args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.config.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Runs `setup`, opens the window, drives `draw` until the window closes
    /// or the sketch exits, then runs `leave`.
    pub fn run<S: Sketch>(self, mut sketch: S) -> Result<(), SketchError> {
        if let Some(logging) = self.config.logging.clone() {
            init_logging(logging);
        }

        let mut applet = self.prepare(&mut sketch)?;

        if applet.exit_requested() {
            debug!("exit requested during setup; skipping the window");
            sketch.leave(&mut applet);
            return Ok(());
        }

        let runtime = RuntimeConfig {
            title: applet.window_title().to_string(),
            initial_size: LogicalSize::new(applet.width() as f64, applet.height() as f64),
            frame_rate: applet.target_frame_rate(),
            resizable: false,
        };
        info!("starting sketch \"{}\"", runtime.title);

        let runner = SketchRunner {
            sketch,
            applet,
            rasterizer: Rasterizer::new(),
            framebuffer: None,
        };
        let SketchRunner { mut sketch, mut applet, .. } = Runtime::run(runtime, runner)?;

        sketch.leave(&mut applet);
        Ok(())
    }

    /// Builds the applet and runs `setup` on it, headless.
    fn prepare<S: Sketch>(&self, sketch: &mut S) -> Result<Applet, SketchError> {
        let args = match &self.config.args {
            Some(args) => Args::new(args.iter().cloned()),
            None => Args::from_env(),
        };

        let mut applet = Applet::new(args, self.config.seed);
        if let Some(title) = &self.config.title {
            applet.title(title.clone());
        }

        sketch.setup(&mut applet);
        applet.replace_canvas()?;
        Ok(applet)
    }
}

// ── SketchRunner ──────────────────────────────────────────────────────────

/// Bridges a sketch to `processing_engine::core::App`.
struct SketchRunner<S> {
    sketch: S,
    applet: Applet,
    rasterizer: Rasterizer,
    /// Allocated on the first frame, at the window's physical size.
    framebuffer: Option<Framebuffer>,
}

impl<S: Sketch> SketchRunner<S> {
    fn forward_changes(&mut self, runtime: &mut RuntimeCtx) {
        let changes = self.applet.take_changes();
        if let Some(title) = changes.title {
            runtime.set_title(title);
        }
        if let Some(fps) = changes.frame_rate {
            runtime.set_frame_rate(fps);
        }
    }

    /// Replays the queue into a framebuffer matching the window.
    fn repaint(&mut self, ctx: &FrameCtx<'_>) -> anyhow::Result<Option<&Framebuffer>> {
        let (w, h) = ctx.window.physical_size();
        if w == 0 || h == 0 {
            return Ok(None);
        }
        if self.framebuffer.is_none() {
            self.framebuffer = Some(Framebuffer::new(w, h)?);
        }
        let Some(fb) = self.framebuffer.as_mut() else {
            return Ok(None);
        };
        fb.resize(w, h)?;

        self.rasterizer.set_scale_factor(ctx.window.scale_factor());
        self.rasterizer.render(self.applet.queue(), fb);
        Ok(Some(&*fb))
    }
}

impl<S: Sketch> EngineApp for SketchRunner<S> {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let drew = self
            .applet
            .animate(&mut self.sketch, ctx.input, ctx.input_frame);
        self.forward_changes(ctx.runtime);

        if self.applet.exit_requested() {
            return AppControl::Exit;
        }
        if !drew && self.framebuffer.is_some() {
            return AppControl::Continue;
        }

        match self.repaint(ctx) {
            Ok(Some(fb)) => ctx.present(fb),
            Ok(None) => AppControl::Continue,
            Err(e) => {
                error!("cannot paint frame: {e:#}");
                AppControl::Exit
            }
        }
    }

    fn on_expose(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        match &self.framebuffer {
            Some(fb) => ctx.present(fb),
            None => AppControl::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Renderer;

    #[derive(Default)]
    struct Setup {
        renderer: Option<Renderer>,
        exit: bool,
        left: bool,
    }

    impl Sketch for Setup {
        fn setup(&mut self, p: &mut Applet) {
            p.size(320, 240);
            p.background(0);
            if let Some(r) = self.renderer {
                p.size_with_renderer(320, 240, r);
            }
            if self.exit {
                p.exit();
            }
        }

        fn leave(&mut self, _p: &mut Applet) {
            self.left = true;
        }
    }

    #[test]
    fn builder_collects_config() {
        let launcher = Processing::new().title("t").seed(9).args(["a", "b"]);
        assert_eq!(launcher.config.title.as_deref(), Some("t"));
        assert_eq!(launcher.config.seed, Some(9));
        assert_eq!(launcher.config.args, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn with_config_takes_every_field() {
        let config = SketchConfig {
            title: Some("Configured".into()),
            logging: Some(LoggingConfig::default()),
            seed: Some(3),
            args: Some(vec!["bin".into()]),
        };
        let launcher = Processing::with_config(config);
        let applet = launcher.prepare(&mut Setup::default()).unwrap();
        assert_eq!(applet.window_title(), "Configured");
        assert_eq!(applet.args().get(0), Some("bin"));
        assert!(launcher.config.logging.is_some());
    }

    #[test]
    fn prepare_runs_setup_and_persists_it() {
        let launcher = Processing::new().title("Demo").args(["demo"]);
        let mut sketch = Setup::default();
        let applet = launcher.prepare(&mut sketch).unwrap();
        assert_eq!((applet.width(), applet.height()), (320, 240));
        assert_eq!(applet.window_title(), "Demo");
        assert_eq!(applet.queue().persistent_len(), applet.queue().len());
        assert_eq!(applet.queue().len(), 3);
    }

    #[test]
    fn prepare_rejects_3d_renderer() {
        let mut sketch = Setup { renderer: Some(Renderer::P3D), ..Default::default() };
        let err = Processing::new().args(["x"]).prepare(&mut sketch).unwrap_err();
        assert!(matches!(err, SketchError::UnsupportedRenderer(Renderer::P3D)));
    }

    #[test]
    fn exit_in_setup_skips_window_and_runs_leave() {
        let mut sketch = Setup { exit: true, ..Default::default() };
        let launcher = Processing::new().args(["x"]);
        let mut applet = launcher.prepare(&mut sketch).unwrap();
        assert!(applet.exit_requested());
        sketch.leave(&mut applet);
        assert!(sketch.left);
    }
}
