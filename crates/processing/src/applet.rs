//! The sketch environment: drawing API, per-frame globals and the per-tick
//! callback dispatch.

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use processing_engine::coords::{CornerRadii, Vec2};
use processing_engine::input::{
    InputEvent, InputFrame, InputState, Key, KeyState, MouseButton, MouseButtonState,
};
use processing_engine::scene::{ArcMode, DrawMode, DrawQueue};

use crate::color::{Channels, Color, ColorMode};
use crate::environment::{
    Args, DEFAULT_FRAME_RATE, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, MIN_FRAME_RATE,
    MIN_HEIGHT, MIN_WIDTH, Renderer, SketchError,
};
use crate::sketch::Sketch;
use crate::vector::PVector;

/// Window changes requested by the sketch that the runtime has to apply.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct RuntimeChanges {
    pub title: Option<String>,
    pub frame_rate: Option<f32>,
}

/// Everything a sketch can call or read.
///
/// Drawing calls append commands to the canvas queue; the queue is replayed
/// onto the window after every `draw`. Commands issued in `setup` are kept
/// for the whole run, commands issued in `draw` last one frame.
pub struct Applet {
    // Environment
    width: u32,
    height: u32,
    renderer: Renderer,
    frame_rate: f32,
    frame_count: u64,
    title: String,
    args: Args,
    launched: bool,

    // Structure
    looping: bool,
    redraw_requested: bool,
    exit_requested: bool,
    changes: RuntimeChanges,

    // Mouse
    mouse: (f32, f32),
    pmouse: (f32, f32),
    mouse_pressed: bool,
    mouse_button: Option<MouseButton>,

    // Keyboard
    key: Option<char>,
    key_code: Key,
    key_pressed: bool,

    color_mode: ColorMode,
    queue: DrawQueue,
    rng: StdRng,
}

impl Applet {
    /// Headless applet with default size and frame rate, ready for `setup`.
    ///
    /// The canvas starts with a black stroke and a white fill. `seed` makes
    /// `random*` reproducible; `None` seeds from the OS.
    pub fn new(args: Args, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut queue = DrawQueue::new();
        queue.stroke(Color::gray(0));
        queue.fill(Color::gray(255));

        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            renderer: Renderer::Default,
            frame_rate: DEFAULT_FRAME_RATE,
            frame_count: 0,
            title: DEFAULT_TITLE.to_string(),
            args,
            launched: false,
            looping: true,
            redraw_requested: false,
            exit_requested: false,
            changes: RuntimeChanges::default(),
            mouse: (0.0, 0.0),
            pmouse: (0.0, 0.0),
            mouse_pressed: false,
            mouse_button: None,
            key: None,
            key_code: Key::None,
            key_pressed: false,
            color_mode: ColorMode::Rgb,
            queue,
            rng,
        }
    }

    // ── environment ───────────────────────────────────────────────────────

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn renderer(&self) -> Renderer {
        self.renderer
    }

    /// Number of completed `draw` calls.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Requested frames per second.
    pub fn target_frame_rate(&self) -> f32 {
        self.frame_rate
    }

    pub fn window_title(&self) -> &str {
        &self.title
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    /// Sets the canvas size; values below the minimum are raised to it.
    ///
    /// Only effective in `setup`: the window has a fixed size once open.
    pub fn size(&mut self, width: u32, height: u32) {
        self.size_with_renderer(width, height, self.renderer);
    }

    pub fn size_with_renderer(&mut self, width: u32, height: u32, renderer: Renderer) {
        if self.launched {
            warn!("size() is only honored in setup(); ignoring {width}x{height}");
            return;
        }
        self.width = width.max(MIN_WIDTH);
        self.height = height.max(MIN_HEIGHT);
        self.renderer = renderer;
    }

    /// Sets the target frame rate; values below the minimum reset it to the
    /// default.
    pub fn frame_rate(&mut self, fps: f32) {
        let fps = if fps.is_finite() && fps >= MIN_FRAME_RATE {
            fps
        } else {
            DEFAULT_FRAME_RATE
        };
        self.frame_rate = fps;
        self.changes.frame_rate = Some(fps);
    }

    pub fn title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.changes.title = Some(self.title.clone());
    }

    // ── structure ─────────────────────────────────────────────────────────

    /// Resumes calling `draw` every frame.
    pub fn loop_(&mut self) {
        self.looping = true;
    }

    /// Stops calling `draw`; input callbacks keep running and the canvas
    /// keeps its last contents.
    pub fn no_loop(&mut self) {
        self.looping = false;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Runs `draw` once on the next frame, even when not looping.
    pub fn redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Closes the window after the current callback; `leave` still runs.
    pub fn exit(&mut self) {
        self.exit_requested = true;
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn push_style(&mut self) {
        self.queue.push_style();
    }

    pub fn pop_style(&mut self) {
        self.queue.pop_style();
    }

    // ── input globals ─────────────────────────────────────────────────────

    pub fn mouse_x(&self) -> f32 {
        self.mouse.0
    }

    pub fn mouse_y(&self) -> f32 {
        self.mouse.1
    }

    /// Mouse x during the previous frame.
    pub fn pmouse_x(&self) -> f32 {
        self.pmouse.0
    }

    /// Mouse y during the previous frame.
    pub fn pmouse_y(&self) -> f32 {
        self.pmouse.1
    }

    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Most recently pressed (or released) button.
    pub fn mouse_button(&self) -> Option<MouseButton> {
        self.mouse_button
    }

    /// Character of the most recent key press; `None` for keys without one.
    pub fn key(&self) -> Option<char> {
        self.key
    }

    /// Physical key of the most recent key event.
    pub fn key_code(&self) -> Key {
        self.key_code
    }

    pub fn key_pressed(&self) -> bool {
        self.key_pressed
    }

    // ── 2D primitives ─────────────────────────────────────────────────────

    /// Arc of the ellipse `(a, b, c, d)` (per `ellipse_mode`) from `start`
    /// to `stop` radians, clockwise.
    pub fn arc(&mut self, a: f32, b: f32, c: f32, d: f32, start: f32, stop: f32) {
        self.arc_with_mode(a, b, c, d, start, stop, ArcMode::OpenPie);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn arc_with_mode(&mut self, a: f32, b: f32, c: f32, d: f32, start: f32, stop: f32, mode: ArcMode) {
        self.queue.push_arc(a, b, c, d, start, stop, mode);
    }

    pub fn ellipse(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.queue.push_ellipse(a, b, c, d);
    }

    pub fn circle(&mut self, x: f32, y: f32, extent: f32) {
        self.ellipse(x, y, extent, extent);
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.queue.push_line(x1, y1, x2, y2);
    }

    pub fn point(&mut self, x: f32, y: f32) {
        self.queue.push_point(x, y);
    }

    #[allow(clippy::too_many_arguments)]
    pub fn quad(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32, x4: f32, y4: f32) {
        self.queue.push_quad([
            Vec2::new(x1, y1),
            Vec2::new(x2, y2),
            Vec2::new(x3, y3),
            Vec2::new(x4, y4),
        ]);
    }

    pub fn rect(&mut self, a: f32, b: f32, c: f32, d: f32) {
        self.queue.push_rect(a, b, c, d);
    }

    /// Rectangle with every corner rounded by `r`.
    pub fn rect_rounded(&mut self, a: f32, b: f32, c: f32, d: f32, r: f32) {
        self.queue.push_uniform_rounded_rect(a, b, c, d, r);
    }

    /// Rectangle with per-corner radii, clockwise from top-left.
    #[allow(clippy::too_many_arguments)]
    pub fn rect_rounded_corners(
        &mut self,
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        tl: f32,
        tr: f32,
        br: f32,
        bl: f32,
    ) {
        self.queue.push_rounded_rect(a, b, c, d, CornerRadii::new(tl, tr, br, bl));
    }

    pub fn square(&mut self, x: f32, y: f32, extent: f32) {
        self.rect(x, y, extent, extent);
    }

    pub fn triangle(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x3: f32, y3: f32) {
        self.queue
            .push_triangle([Vec2::new(x1, y1), Vec2::new(x2, y2), Vec2::new(x3, y3)]);
    }

    // ── color ─────────────────────────────────────────────────────────────

    /// Builds a color from channels under the current color mode.
    pub fn color(&self, channels: impl Into<Channels>) -> Color {
        channels.into().resolve(self.color_mode)
    }

    pub fn color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    pub fn background(&mut self, channels: impl Into<Channels>) {
        let c = self.color(channels);
        self.queue.background(c);
    }

    pub fn fill(&mut self, channels: impl Into<Channels>) {
        let c = self.color(channels);
        self.queue.fill(c);
    }

    pub fn no_fill(&mut self) {
        self.queue.no_fill();
    }

    pub fn stroke(&mut self, channels: impl Into<Channels>) {
        let c = self.color(channels);
        self.queue.stroke(c);
    }

    pub fn no_stroke(&mut self) {
        self.queue.no_stroke();
    }

    // ── attributes ────────────────────────────────────────────────────────

    pub fn ellipse_mode(&mut self, mode: DrawMode) {
        self.queue.ellipse_mode(mode);
    }

    pub fn rect_mode(&mut self, mode: DrawMode) {
        self.queue.rect_mode(mode);
    }

    pub fn stroke_weight(&mut self, weight: f32) {
        self.queue.stroke_weight(weight);
    }

    // ── transform ─────────────────────────────────────────────────────────

    /// Rotates later shapes by `angle` radians, clockwise.
    pub fn rotate(&mut self, angle: f32) {
        self.queue.rotate(angle);
    }

    pub fn translate(&mut self, x: f32, y: f32) {
        self.queue.translate(x, y);
    }

    /// Uniform scale.
    pub fn scale(&mut self, s: f32) {
        self.queue.scale(s, s);
    }

    pub fn scale_xy(&mut self, sx: f32, sy: f32) {
        self.queue.scale(sx, sy);
    }

    pub fn push_matrix(&mut self) {
        self.queue.push_matrix();
    }

    pub fn pop_matrix(&mut self) {
        self.queue.pop_matrix();
    }

    // ── random ────────────────────────────────────────────────────────────

    /// Uniform value in `[0, high)`.
    pub fn random(&mut self, high: f32) -> f32 {
        self.random_range(0.0, high)
    }

    /// Uniform value in `[low, high)`; `low` when the range is empty or
    /// unbounded.
    pub fn random_range(&mut self, low: f32, high: f32) -> f32 {
        if !(low < high) || !low.is_finite() || !high.is_finite() {
            return low;
        }
        // The span of two finite f32s can overflow f32 but never f64.
        let (lo, hi) = (f64::from(low), f64::from(high));
        let value = (lo + (hi - lo) * self.rng.random::<f64>()) as f32;
        // Rounding back to f32 can land on `high` itself.
        if value < high { value } else { low }
    }

    pub fn random_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn random_2d(&mut self) -> PVector {
        PVector::random_2d(&mut self.rng)
    }

    pub fn random_3d(&mut self) -> PVector {
        PVector::random_3d(&mut self.rng)
    }

    // ── runtime plumbing ──────────────────────────────────────────────────

    /// Commands recorded so far.
    pub fn queue(&self) -> &DrawQueue {
        &self.queue
    }

    /// Swaps the setup canvas for the renderer's canvas.
    ///
    /// Everything drawn so far is copied over and becomes persistent, so it
    /// reappears under every frame's `draw` output.
    pub(crate) fn replace_canvas(&mut self) -> Result<(), SketchError> {
        if !self.renderer.is_supported() {
            return Err(SketchError::UnsupportedRenderer(self.renderer));
        }
        let mut canvas = DrawQueue::new();
        canvas.copy_from(&self.queue);
        canvas.set_all_persistent();
        debug!(
            "canvas ready: {}x{} {:?}, {} setup commands",
            self.width,
            self.height,
            self.renderer,
            canvas.len()
        );
        self.queue = canvas;
        self.launched = true;
        // The window is created from the current values.
        self.changes = RuntimeChanges::default();
        Ok(())
    }

    pub(crate) fn take_changes(&mut self) -> RuntimeChanges {
        std::mem::take(&mut self.changes)
    }

    /// Runs one tick: input callbacks for `frame`, then `draw` when looping
    /// or a redraw was requested.
    ///
    /// Returns whether `draw` ran (and the canvas needs repainting).
    pub fn animate<S>(&mut self, sketch: &mut S, input: &InputState, frame: &InputFrame) -> bool
    where
        S: Sketch + ?Sized,
    {
        let drawing = self.looping || self.redraw_requested;
        if drawing {
            self.queue.clear_transient();
        }
        let settled = self.queue.len();

        self.dispatch_mouse(sketch, input, frame);
        self.dispatch_keys(sketch, input, frame);

        if drawing {
            self.redraw_requested = false;
            sketch.draw(self);
            self.frame_count += 1;
        } else {
            // Nothing repaints this tick, and the next draw would clear
            // these anyway.
            let dropped = self.queue.len().saturating_sub(settled);
            if dropped > 0 {
                debug!("dropping {dropped} commands issued outside draw()");
                self.queue.truncate(settled);
            }
        }
        drawing
    }

    fn dispatch_mouse<S>(&mut self, sketch: &mut S, input: &InputState, frame: &InputFrame)
    where
        S: Sketch + ?Sized,
    {
        self.pmouse = self.mouse;
        if let Some(pos) = input.pointer_pos {
            self.mouse = pos;
        }

        let last_button = |wanted: MouseButtonState| {
            frame.events.iter().rev().find_map(|ev| match ev {
                InputEvent::PointerButton(b) if b.state == wanted => Some(b.button),
                _ => None,
            })
        };
        let pressed = last_button(MouseButtonState::Pressed);
        let released = last_button(MouseButtonState::Released);

        if let Some(button) = pressed {
            self.mouse_button = Some(button);
            self.mouse_pressed = true;
            sketch.mouse_pressed(self);
        }

        if frame.pointer_moved {
            if input.any_button_down() || pressed.is_some() {
                self.mouse_pressed = true;
                sketch.mouse_dragged(self);
            } else {
                sketch.mouse_moved(self);
            }
        }

        if let Some(button) = released {
            if pressed.is_none() {
                self.mouse_button = Some(button);
            }
            self.mouse_pressed = input.any_button_down();
            sketch.mouse_released(self);
        }

        self.mouse_pressed = input.any_button_down();
    }

    fn dispatch_keys<S>(&mut self, sketch: &mut S, input: &InputState, frame: &InputFrame)
    where
        S: Sketch + ?Sized,
    {
        for ev in &frame.events {
            let InputEvent::Key { key, state, text, .. } = ev else {
                continue;
            };
            self.key_code = *key;
            match state {
                KeyState::Pressed => {
                    self.key = *text;
                    self.key_pressed = true;
                    sketch.key_pressed(self);
                    if text.is_some() {
                        sketch.key_typed(self);
                    }
                }
                KeyState::Released => {
                    self.key_pressed = input.any_key_down();
                    sketch.key_released(self);
                }
            }
        }
    }
}

impl std::fmt::Debug for Applet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Applet")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("renderer", &self.renderer)
            .field("frame_rate", &self.frame_rate)
            .field("frame_count", &self.frame_count)
            .field("looping", &self.looping)
            .field("commands", &self.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use processing_engine::input::{Modifiers, PointerButtonEvent, PointerMoveEvent};
    use processing_engine::scene::DrawCmd;

    use super::*;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
        draw_rect: bool,
    }

    impl Sketch for Recorder {
        fn draw(&mut self, p: &mut Applet) {
            self.log.push("draw".into());
            if self.draw_rect {
                p.rect(0.0, 0.0, 5.0, 5.0);
            }
        }

        fn mouse_pressed(&mut self, p: &mut Applet) {
            self.log.push(format!("pressed {}", p.mouse_pressed()));
        }

        fn mouse_released(&mut self, _p: &mut Applet) {
            self.log.push("released".into());
        }

        fn mouse_moved(&mut self, p: &mut Applet) {
            self.log.push(format!("moved {} {}", p.mouse_x(), p.mouse_y()));
        }

        fn mouse_dragged(&mut self, _p: &mut Applet) {
            self.log.push("dragged".into());
        }

        fn key_pressed(&mut self, p: &mut Applet) {
            self.log.push(format!("key_pressed {:?} {:?}", p.key(), p.key_code()));
        }

        fn key_typed(&mut self, p: &mut Applet) {
            self.log.push(format!("key_typed {:?}", p.key()));
        }

        fn key_released(&mut self, p: &mut Applet) {
            self.log.push(format!("key_released {:?}", p.key_code()));
        }
    }

    fn applet() -> Applet {
        Applet::new(Args::new(["sketch"]), Some(1))
    }

    fn button(state: MouseButtonState, x: f32, y: f32) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state,
            x,
            y,
            modifiers: Modifiers::default(),
        })
    }

    fn moved(x: f32, y: f32) -> InputEvent {
        InputEvent::PointerMoved(PointerMoveEvent { x, y })
    }

    fn key(key: Key, state: KeyState, text: Option<char>) -> InputEvent {
        InputEvent::Key {
            key,
            state,
            modifiers: Modifiers::default(),
            text,
            code: 0,
            repeat: false,
        }
    }

    /// Feeds `events` through fresh input state and runs one tick.
    fn tick(p: &mut Applet, sketch: &mut Recorder, input: &mut InputState, events: Vec<InputEvent>) -> bool {
        let mut frame = InputFrame::default();
        for ev in events {
            input.apply_event(&mut frame, ev);
        }
        p.animate(sketch, input, &frame)
    }

    // ── environment ───────────────────────────────────────────────────────

    #[test]
    fn defaults_and_seeded_canvas() {
        let p = applet();
        assert_eq!((p.width(), p.height()), (100, 100));
        assert_eq!(p.target_frame_rate(), 60.0);
        assert_eq!(p.window_title(), "Processing");
        assert_eq!(p.args().get(0), Some("sketch"));
        let cmds: Vec<_> = p.queue().commands().cloned().collect();
        assert_eq!(cmds, vec![DrawCmd::Stroke(Color::BLACK), DrawCmd::Fill(Color::WHITE)]);
    }

    #[test]
    fn size_is_clamped_to_minimum() {
        let mut p = applet();
        p.size(3, 400);
        assert_eq!((p.width(), p.height()), (MIN_WIDTH, 400));
        p.size_with_renderer(200, 200, Renderer::P2D);
        assert_eq!(p.renderer(), Renderer::P2D);
    }

    #[test]
    fn size_after_launch_is_ignored() {
        let mut p = applet();
        p.size(200, 150);
        p.replace_canvas().unwrap();
        p.size(300, 300);
        assert_eq!((p.width(), p.height()), (200, 150));
    }

    #[test]
    fn frame_rate_below_minimum_resets_to_default() {
        let mut p = applet();
        p.frame_rate(30.0);
        assert_eq!(p.target_frame_rate(), 30.0);
        p.frame_rate(0.0);
        assert_eq!(p.target_frame_rate(), DEFAULT_FRAME_RATE);
    }

    #[test]
    fn changes_after_launch_are_forwarded_once() {
        let mut p = applet();
        p.title("before");
        p.replace_canvas().unwrap();
        assert_eq!(p.take_changes(), RuntimeChanges::default());
        p.title("after");
        p.frame_rate(24.0);
        let changes = p.take_changes();
        assert_eq!(changes.title.as_deref(), Some("after"));
        assert_eq!(changes.frame_rate, Some(24.0));
        assert_eq!(p.take_changes(), RuntimeChanges::default());
    }

    // ── canvas ────────────────────────────────────────────────────────────

    #[test]
    fn replace_canvas_makes_setup_persistent() {
        let mut p = applet();
        p.background(0);
        p.replace_canvas().unwrap();
        assert_eq!(p.queue().len(), 3);
        assert_eq!(p.queue().persistent_len(), 3);
    }

    #[test]
    fn unsupported_renderer_is_rejected() {
        let mut p = applet();
        p.size_with_renderer(100, 100, Renderer::P3D);
        assert!(matches!(
            p.replace_canvas(),
            Err(SketchError::UnsupportedRenderer(Renderer::P3D))
        ));
    }

    #[test]
    fn colors_follow_color_mode() {
        let mut p = applet();
        p.color_mode(ColorMode::Hsb);
        p.fill((0, 255, 255));
        p.color_mode(ColorMode::Rgb);
        p.stroke((0, 0, 255, 128));
        let cmds: Vec<_> = p.queue().commands().skip(2).cloned().collect();
        assert_eq!(
            cmds,
            vec![DrawCmd::Fill(Color::rgb(255, 0, 0)), DrawCmd::Stroke(Color::rgba(0, 0, 255, 128))]
        );
    }

    #[test]
    fn shapes_record_raw_arguments() {
        let mut p = applet();
        p.circle(10.0, 20.0, 6.0);
        p.square(1.0, 2.0, 3.0);
        let cmds: Vec<_> = p.queue().commands().skip(2).collect();
        assert_eq!(cmds.len(), 2);
        assert!(matches!(cmds[0], DrawCmd::Ellipse(e) if e.c == 6.0 && e.d == 6.0));
        assert!(matches!(cmds[1], DrawCmd::Rect(r) if r.c == 3.0 && r.d == 3.0));
    }

    #[test]
    fn polygons_and_rounded_rects_record_their_geometry() {
        let mut p = applet();
        p.triangle(0.0, 0.0, 4.0, 0.0, 2.0, 3.0);
        p.quad(0.0, 0.0, 4.0, 0.0, 4.0, 4.0, 0.0, 4.0);
        p.rect_rounded(0.0, 0.0, 10.0, 10.0, 2.0);
        p.rect_rounded_corners(0.0, 0.0, 10.0, 10.0, 1.0, 2.0, 3.0, 4.0);
        let cmds: Vec<_> = p.queue().commands().skip(2).collect();
        assert!(matches!(cmds[0], DrawCmd::Triangle(t) if t.points[2] == Vec2::new(2.0, 3.0)));
        assert!(matches!(cmds[1], DrawCmd::Quad(q) if q.points[3] == Vec2::new(0.0, 4.0)));
        assert!(matches!(cmds[2], DrawCmd::RoundedRect(r) if r.radii == CornerRadii::all(2.0)));
        assert!(matches!(
            cmds[3],
            DrawCmd::RoundedRect(r) if r.radii == CornerRadii::new(1.0, 2.0, 3.0, 4.0)
        ));
    }

    #[test]
    fn scale_forms_record_both_axes() {
        let mut p = applet();
        p.scale(2.0);
        p.scale_xy(3.0, 0.5);
        let cmds: Vec<_> = p.queue().commands().skip(2).cloned().collect();
        assert_eq!(
            cmds,
            vec![DrawCmd::Scale(Vec2::new(2.0, 2.0)), DrawCmd::Scale(Vec2::new(3.0, 0.5))]
        );
    }

    // ── ticks ─────────────────────────────────────────────────────────────

    #[test]
    fn draw_output_lasts_one_frame() {
        let mut p = applet();
        let mut s = Recorder { draw_rect: true, ..Default::default() };
        let mut input = InputState::default();
        p.replace_canvas().unwrap();

        assert!(tick(&mut p, &mut s, &mut input, vec![]));
        assert!(tick(&mut p, &mut s, &mut input, vec![]));
        assert_eq!(p.queue().len(), 3);
        assert_eq!(p.queue().persistent_len(), 2);
        assert_eq!(p.frame_count(), 2);
    }

    #[test]
    fn no_loop_keeps_canvas_and_input_callbacks() {
        let mut p = applet();
        let mut s = Recorder { draw_rect: true, ..Default::default() };
        let mut input = InputState::default();
        p.replace_canvas().unwrap();
        tick(&mut p, &mut s, &mut input, vec![]);
        p.no_loop();
        s.log.clear();

        assert!(!tick(&mut p, &mut s, &mut input, vec![moved(4.0, 5.0)]));
        assert_eq!(s.log, vec!["moved 4 5"]);
        assert_eq!(p.queue().len(), 3);
        assert_eq!(p.frame_count(), 1);
    }

    #[test]
    fn no_loop_discards_drawing_from_callbacks() {
        struct Scribbler;

        impl Sketch for Scribbler {
            fn draw(&mut self, p: &mut Applet) {
                p.rect(0.0, 0.0, 5.0, 5.0);
            }

            fn mouse_moved(&mut self, p: &mut Applet) {
                p.rect(1.0, 1.0, 2.0, 2.0);
            }
        }

        let mut p = applet();
        let mut s = Scribbler;
        let mut input = InputState::default();
        p.replace_canvas().unwrap();
        p.animate(&mut s, &input, &InputFrame::default());
        let after_draw = p.queue().len();
        p.no_loop();

        for i in 0..1000 {
            let mut frame = InputFrame::default();
            input.apply_event(&mut frame, moved(i as f32, 0.0));
            assert!(!p.animate(&mut s, &input, &frame));
        }
        assert_eq!(p.queue().len(), after_draw);

        p.redraw();
        p.animate(&mut s, &input, &InputFrame::default());
        assert_eq!(p.queue().len(), after_draw);
    }

    #[test]
    fn redraw_runs_draw_once() {
        let mut p = applet();
        let mut s = Recorder::default();
        let mut input = InputState::default();
        p.no_loop();
        p.redraw();
        assert!(tick(&mut p, &mut s, &mut input, vec![]));
        assert!(!tick(&mut p, &mut s, &mut input, vec![]));
        assert_eq!(s.log, vec!["draw"]);
        p.loop_();
        assert!(tick(&mut p, &mut s, &mut input, vec![]));
    }

    #[test]
    fn mouse_callbacks_fire_pressed_dragged_released() {
        let mut p = applet();
        let mut s = Recorder::default();
        let mut input = InputState::default();
        let events = vec![
            button(MouseButtonState::Pressed, 1.0, 1.0),
            moved(8.0, 9.0),
            button(MouseButtonState::Released, 8.0, 9.0),
        ];
        tick(&mut p, &mut s, &mut input, events);
        assert_eq!(s.log, vec!["pressed true", "dragged", "released", "draw"]);
        assert_eq!(p.mouse_button(), Some(MouseButton::Left));
        assert!(!p.mouse_pressed());
        assert_eq!((p.mouse_x(), p.mouse_y()), (8.0, 9.0));
    }

    #[test]
    fn pmouse_trails_by_one_frame() {
        let mut p = applet();
        let mut s = Recorder::default();
        let mut input = InputState::default();
        tick(&mut p, &mut s, &mut input, vec![moved(10.0, 10.0)]);
        tick(&mut p, &mut s, &mut input, vec![moved(20.0, 30.0)]);
        assert_eq!((p.pmouse_x(), p.pmouse_y()), (10.0, 10.0));
        assert_eq!((p.mouse_x(), p.mouse_y()), (20.0, 30.0));
    }

    #[test]
    fn held_button_reports_pressed_between_frames() {
        let mut p = applet();
        let mut s = Recorder::default();
        let mut input = InputState::default();
        tick(&mut p, &mut s, &mut input, vec![button(MouseButtonState::Pressed, 0.0, 0.0)]);
        assert!(p.mouse_pressed());
        s.log.clear();
        tick(&mut p, &mut s, &mut input, vec![moved(3.0, 3.0)]);
        assert_eq!(s.log, vec!["dragged", "draw"]);
    }

    #[test]
    fn keys_dispatch_in_arrival_order() {
        let mut p = applet();
        let mut s = Recorder::default();
        let mut input = InputState::default();
        let events = vec![
            key(Key::A, KeyState::Pressed, Some('a')),
            key(Key::ArrowUp, KeyState::Pressed, None),
            key(Key::A, KeyState::Released, None),
        ];
        tick(&mut p, &mut s, &mut input, events);
        assert_eq!(
            s.log,
            vec![
                "key_pressed Some('a') A",
                "key_typed Some('a')",
                "key_pressed None ArrowUp",
                "key_released A",
                "draw",
            ]
        );
        assert!(p.key_pressed());
        assert_eq!(p.key_code(), Key::A);
    }

    // ── random ────────────────────────────────────────────────────────────

    #[test]
    fn random_seed_is_reproducible() {
        let mut a = applet();
        let mut b = applet();
        a.random_seed(42);
        b.random_seed(42);
        let xs: Vec<f32> = (0..5).map(|_| a.random_range(-1.0, 1.0)).collect();
        let ys: Vec<f32> = (0..5).map(|_| b.random_range(-1.0, 1.0)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|x| (-1.0..1.0).contains(x)));
    }

    #[test]
    fn random_handles_empty_ranges() {
        let mut p = applet();
        assert_eq!(p.random(0.0), 0.0);
        assert_eq!(p.random_range(5.0, 5.0), 5.0);
        assert_eq!(p.random_range(5.0, 1.0), 5.0);
        assert!(p.random(10.0) < 10.0);
        assert_eq!(p.random(f32::INFINITY), 0.0);
        assert!(p.random_range(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn random_range_spanning_most_of_f32() {
        let mut p = applet();
        for _ in 0..100 {
            let v = p.random_range(-3.0e38, 3.0e38);
            assert!(v.is_finite());
            assert!((-3.0e38..3.0e38).contains(&v));
        }
    }

    #[test]
    fn random_vectors_have_expected_dimension() {
        let mut p = applet();
        assert!(p.random_2d().is_2d());
        assert!(p.random_3d().is_3d());
    }
}
