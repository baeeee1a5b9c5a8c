use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{debug, error, info};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::Presenter;
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{DEFAULT_FRAME_RATE, FrameClock, FrameTime};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    /// Target frames per second.
    pub frame_rate: f32,
    pub resizable: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Processing".to_string(),
            initial_size: LogicalSize::new(100.0, 100.0),
            frame_rate: DEFAULT_FRAME_RATE,
            resizable: false,
        }
    }
}

/// Runtime context passed to the application.
///
/// Commands are buffered and applied after the current callback returns.
#[derive(Debug, Default)]
pub struct RuntimeCtx {
    commands: Vec<Command>,
}

impl RuntimeCtx {
    pub fn exit(&mut self) {
        self.commands.push(Command::Exit);
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.commands.push(Command::SetTitle(title.into()));
    }

    pub fn set_frame_rate(&mut self, fps: f32) {
        self.commands.push(Command::SetFrameRate(fps));
    }
}

#[derive(Debug)]
enum Command {
    Exit,
    SetTitle(String),
    SetFrameRate(f32),
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window and drives `app` at the configured frame rate until it
    /// exits or the window is closed.
    ///
    /// The app is handed back so callers can run teardown hooks on it.
    pub fn run<A>(config: RuntimeConfig, app: A) -> Result<A>
    where
        A: CoreApp,
    {
        validate(&config)?;
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(state.app),
        }
    }
}

struct WindowEntry {
    window: Arc<Window>,
    presenter: Presenter,
    input_state: InputState,
    input_frame: InputFrame,
    clock: FrameClock,
    last_time: Option<FrameTime>,
    /// A scheduled frame was requested and has not been drawn yet.
    redraw_pending: bool,
}

struct AppState<A> {
    config: RuntimeConfig,
    app: A,
    window: Option<WindowEntry>,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp,
{
    fn new(config: RuntimeConfig, app: A) -> Self {
        Self {
            config,
            app,
            window: None,
            exit_requested: false,
            failure: None,
        }
    }

    fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = Arc::new(event_loop.create_window(attrs).context("failed to create window")?);
        let presenter = Presenter::new(window.clone())?;

        info!(
            "opened {}x{} window at {} fps",
            self.config.initial_size.width, self.config.initial_size.height, self.config.frame_rate
        );

        Ok(WindowEntry {
            window,
            presenter,
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            clock: FrameClock::with_rate(self.config.frame_rate),
            last_time: None,
            redraw_pending: false,
        })
    }

    fn apply_commands(&mut self, event_loop: &ActiveEventLoop, mut ctx: RuntimeCtx) {
        for cmd in ctx.commands.drain(..) {
            match cmd {
                Command::Exit => self.request_exit(),
                Command::SetTitle(title) => {
                    if let Some(entry) = &self.window {
                        entry.window.set_title(&title);
                    }
                }
                Command::SetFrameRate(fps) => {
                    if let Some(entry) = &mut self.window {
                        entry.clock.set_rate(fps);
                        debug!("frame rate set to {fps}");
                    }
                }
            }
        }

        if self.exit_requested {
            event_loop.exit();
        }
    }

    /// Runs one scheduled frame.
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let mut runtime_ctx = RuntimeCtx::default();
        let Some(entry) = self.window.as_mut() else {
            return;
        };

        entry.redraw_pending = false;
        let time = entry.clock.tick();
        entry.last_time = Some(time);

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: &entry.window },
                presenter: &mut entry.presenter,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
                time,
                runtime: &mut runtime_ctx,
            };
            self.app.on_frame(&mut ctx)
        };

        entry.input_frame.clear();

        if control == AppControl::Exit {
            runtime_ctx.exit();
        }
        self.apply_commands(event_loop, runtime_ctx);
    }

    /// Repaints without advancing the frame schedule.
    fn expose(&mut self, event_loop: &ActiveEventLoop) {
        let mut runtime_ctx = RuntimeCtx::default();
        let Some(entry) = self.window.as_mut() else {
            return;
        };
        let Some(time) = entry.last_time else {
            return;
        };

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: &entry.window },
                presenter: &mut entry.presenter,
                input: &entry.input_state,
                input_frame: &entry.input_frame,
                time,
                runtime: &mut runtime_ctx,
            };
            self.app.on_expose(&mut ctx)
        };

        if control == AppControl::Exit {
            runtime_ctx.exit();
        }
        self.apply_commands(event_loop, runtime_ctx);
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                entry.window.request_redraw();
                self.window = Some(entry);
            }
            Err(e) => {
                error!("failed to create window: {e:#}");
                self.failure = Some(e);
                self.request_exit();
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        };

        if entry.redraw_pending {
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if entry.clock.due(Instant::now()) {
            entry.redraw_pending = true;
            entry.window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(entry.clock.deadline()));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if let Some(entry) = self.window.as_mut() {
            if let Some(ev) = translate_window_event(&entry.window, &entry.input_state, &event) {
                entry.input_state.apply_event(&mut entry.input_frame, ev);
            }
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            self.request_exit();
            event_loop.exit();
            return;
        }

        match &event {
            WindowEvent::CloseRequested => {
                debug!("window close requested");
                self.window = None;
                self.request_exit();
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => {
                let scheduled = self
                    .window
                    .as_ref()
                    .is_some_and(|e| e.redraw_pending || e.clock.due(Instant::now()));
                if scheduled {
                    self.run_frame(event_loop);
                } else {
                    self.expose(event_loop);
                }
            }

            WindowEvent::ScaleFactorChanged { .. } | WindowEvent::Resized(_) => {
                if let Some(entry) = &self.window {
                    entry.window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if self.window.take().is_some() {
            debug!("window destroyed");
        }
    }
}

/// Rejects configurations no window can satisfy.
fn validate(config: &RuntimeConfig) -> Result<()> {
    let size = config.initial_size;
    if !(size.width >= 1.0 && size.height >= 1.0) {
        return Err(anyhow!("window size must be at least 1x1, got {}x{}", size.width, size.height));
    }
    Ok(())
}
