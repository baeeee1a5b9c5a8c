use log::{trace, warn};
use tiny_skia::{FillRule, LineCap, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::render::framebuffer::{Framebuffer, to_skia_color};
use crate::render::geometry::{self, ArcClosure};
use crate::render::style::StyleState;
use crate::scene::shapes::{ArcCmd, RoundedRectCmd};
use crate::scene::{ArcMode, DrawCmd, DrawQueue};

/// Gray Processing clears the canvas to before the first `background`.
pub const DEFAULT_CLEAR: Color = Color::gray(204);

/// Replays a [`DrawQueue`] into a [`Framebuffer`].
///
/// Style and matrix stacks live only for the duration of one `render` call;
/// every frame starts from [`StyleState::default`].
#[derive(Debug)]
pub struct Rasterizer {
    base: Transform,
    state: StyleState,
    style_stack: Vec<StyleState>,
    matrix_stack: Vec<Transform>,
    warned_unbalanced: bool,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Rasterizer {
    pub fn new() -> Self {
        Self {
            base: Transform::identity(),
            state: StyleState::default(),
            style_stack: Vec::new(),
            matrix_stack: Vec::new(),
            warned_unbalanced: false,
        }
    }

    /// Logical-to-physical scale applied beneath the sketch transform.
    pub fn set_scale_factor(&mut self, scale: f32) {
        let s = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        self.base = Transform::from_scale(s, s);
    }

    /// Style in effect after the last replayed command.
    pub fn state(&self) -> &StyleState {
        &self.state
    }

    /// Clears `fb` and replays every command of `queue` in order.
    pub fn render(&mut self, queue: &DrawQueue, fb: &mut Framebuffer) {
        self.state = StyleState::default();
        self.style_stack.clear();
        self.matrix_stack.clear();

        fb.clear(DEFAULT_CLEAR);
        let pixmap = fb.pixmap_mut();
        for cmd in queue.commands() {
            self.apply(cmd, pixmap);
        }
        trace!("rasterized {} commands", queue.len());
    }

    fn apply(&mut self, cmd: &DrawCmd, pixmap: &mut Pixmap) {
        match cmd {
            DrawCmd::Arc(arc) => self.draw_arc(arc, pixmap),
            DrawCmd::Ellipse(e) => {
                let bounds = self.state.ellipse_mode.resolve(e.a, e.b, e.c, e.d);
                let path = geometry::ellipse_path(bounds);
                self.fill_and_stroke(path.as_ref(), pixmap);
            }
            DrawCmd::Line(l) => {
                if let Some(path) = geometry::line_path(l.from, l.to) {
                    self.stroke_path(&path, pixmap);
                }
            }
            DrawCmd::Point(p) => self.draw_point(p.at, pixmap),
            DrawCmd::Quad(q) => {
                let path = geometry::polygon_path(&q.points);
                self.fill_and_stroke(path.as_ref(), pixmap);
            }
            DrawCmd::Rect(r) => {
                let bounds = self.state.rect_mode.resolve(r.a, r.b, r.c, r.d);
                let path = geometry::rect_path(bounds);
                self.fill_and_stroke(path.as_ref(), pixmap);
            }
            DrawCmd::RoundedRect(r) => self.draw_rounded_rect(r, pixmap),
            DrawCmd::Triangle(t) => {
                let path = geometry::polygon_path(&t.points);
                self.fill_and_stroke(path.as_ref(), pixmap);
            }

            DrawCmd::PushStyle => self.style_stack.push(self.state),
            DrawCmd::PopStyle => match self.style_stack.pop() {
                Some(saved) => self.state = saved,
                None => self.warn_unbalanced("pop_style"),
            },
            DrawCmd::Background(color) => self.draw_background(*color, pixmap),
            DrawCmd::Fill(color) => self.state.fill = Some(*color),
            DrawCmd::NoFill => self.state.fill = None,
            DrawCmd::Stroke(color) => self.state.stroke = Some(*color),
            DrawCmd::NoStroke => self.state.stroke = None,
            DrawCmd::EllipseMode(mode) => self.state.ellipse_mode = *mode,
            DrawCmd::RectMode(mode) => self.state.rect_mode = *mode,
            DrawCmd::StrokeWeight(w) => {
                if w.is_finite() && *w >= 0.0 {
                    self.state.stroke_weight = *w;
                }
            }

            DrawCmd::Rotate(radians) => {
                self.state.transform = self.state.transform.pre_rotate(radians.to_degrees());
            }
            DrawCmd::Translate(v) => {
                self.state.transform = self.state.transform.pre_translate(v.x, v.y);
            }
            DrawCmd::Scale(v) => {
                self.state.transform = self.state.transform.pre_scale(v.x, v.y);
            }
            DrawCmd::PushMatrix => self.matrix_stack.push(self.state.transform),
            DrawCmd::PopMatrix => match self.matrix_stack.pop() {
                Some(saved) => self.state.transform = saved,
                None => self.warn_unbalanced("pop_matrix"),
            },
        }
    }

    fn warn_unbalanced(&mut self, op: &str) {
        if !self.warned_unbalanced {
            warn!("{op} without a matching push; ignoring (further warnings suppressed)");
            self.warned_unbalanced = true;
        }
    }

    #[inline]
    fn transform(&self) -> Transform {
        self.base.pre_concat(self.state.transform)
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(color));
        paint.anti_alias = true;
        paint
    }

    fn fill_path(&self, path: &Path, pixmap: &mut Pixmap) {
        if let Some(color) = self.state.fill {
            pixmap.fill_path(path, &Self::paint(color), FillRule::Winding, self.transform(), None);
        }
    }

    fn stroke_path(&self, path: &Path, pixmap: &mut Pixmap) {
        let Some(color) = self.state.stroke else {
            return;
        };
        if self.state.stroke_weight <= 0.0 {
            return;
        }
        let stroke = Stroke {
            width: self.state.stroke_weight,
            line_cap: LineCap::Round,
            ..Default::default()
        };
        pixmap.stroke_path(path, &Self::paint(color), &stroke, self.transform(), None);
    }

    fn fill_and_stroke(&self, path: Option<&Path>, pixmap: &mut Pixmap) {
        if let Some(path) = path {
            self.fill_path(path, pixmap);
            self.stroke_path(path, pixmap);
        }
    }

    fn draw_arc(&self, arc: &ArcCmd, pixmap: &mut Pixmap) {
        let bounds = self.state.ellipse_mode.resolve(arc.a, arc.b, arc.c, arc.d);
        let (fill, outline) = match arc.mode {
            ArcMode::OpenPie => (ArcClosure::Pie, ArcClosure::Open),
            ArcMode::Open => (ArcClosure::Chord, ArcClosure::Open),
            ArcMode::Chord => (ArcClosure::Chord, ArcClosure::Chord),
            ArcMode::Pie => (ArcClosure::Pie, ArcClosure::Pie),
        };
        if let Some(path) = geometry::arc_path(bounds, arc.start, arc.stop, fill) {
            self.fill_path(&path, pixmap);
        }
        if let Some(path) = geometry::arc_path(bounds, arc.start, arc.stop, outline) {
            self.stroke_path(&path, pixmap);
        }
    }

    fn draw_rounded_rect(&self, r: &RoundedRectCmd, pixmap: &mut Pixmap) {
        let bounds = self.state.rect_mode.resolve(r.a, r.b, r.c, r.d);
        let path = geometry::rounded_rect_path(bounds, r.radii);
        self.fill_and_stroke(path.as_ref(), pixmap);
    }

    fn draw_point(&self, at: Vec2, pixmap: &mut Pixmap) {
        let Some(color) = self.state.stroke else {
            return;
        };
        let radius = (0.5 * self.state.stroke_weight).max(0.5);
        if let Some(path) = PathBuilder::from_circle(at.x, at.y, radius) {
            pixmap.fill_path(&path, &Self::paint(color), FillRule::Winding, self.transform(), None);
        }
    }

    fn draw_background(&self, color: Color, pixmap: &mut Pixmap) {
        if color.a8() == u8::MAX {
            pixmap.fill(to_skia_color(color));
            return;
        }
        let full = Rect::new(0.0, 0.0, pixmap.width() as f32, pixmap.height() as f32);
        if let Some(rect) = geometry::to_skia_rect(full) {
            pixmap.fill_rect(rect, &Self::paint(color), Transform::identity(), None);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::coords::CornerRadii;
    use crate::scene::DrawMode;

    fn render(queue: &DrawQueue) -> (Rasterizer, Framebuffer) {
        let mut r = Rasterizer::new();
        let mut fb = Framebuffer::new(40, 40).unwrap();
        r.render(queue, &mut fb);
        (r, fb)
    }

    fn px(fb: &Framebuffer, x: u32, y: u32) -> Color {
        fb.pixel(x, y).unwrap()
    }

    // ── clearing and background ───────────────────────────────────────────

    #[test]
    fn empty_queue_clears_to_default_gray() {
        let (_, fb) = render(&DrawQueue::new());
        assert_eq!(px(&fb, 0, 0), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 39, 39), DEFAULT_CLEAR);
    }

    #[test]
    fn background_covers_everything_drawn_before() {
        let mut q = DrawQueue::new();
        q.push_rect(0.0, 0.0, 40.0, 40.0);
        q.background(Color::rgb(255, 0, 0));
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 20), Color::rgb(255, 0, 0));
    }

    // ── fill / stroke ─────────────────────────────────────────────────────

    #[test]
    fn rect_uses_current_fill() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::rgb(0, 0, 255));
        q.push_rect(10.0, 10.0, 10.0, 10.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 15, 15), Color::rgb(0, 0, 255));
        assert_eq!(px(&fb, 25, 25), DEFAULT_CLEAR);
    }

    #[test]
    fn no_fill_leaves_interior_untouched() {
        let mut q = DrawQueue::new();
        q.no_fill();
        q.stroke_weight(4.0);
        q.push_rect(5.0, 5.0, 30.0, 30.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 20), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 5, 20), Color::BLACK);
    }

    #[test]
    fn rect_mode_changes_interpretation() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.rect_mode(DrawMode::Center);
        q.push_rect(0.0, 0.0, 10.0, 10.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 2, 2), Color::BLACK);
        assert_eq!(px(&fb, 7, 7), DEFAULT_CLEAR);
    }

    #[test]
    fn point_uses_stroke_color() {
        let mut q = DrawQueue::new();
        q.stroke(Color::rgb(0, 255, 0));
        q.stroke_weight(6.0);
        q.push_point(20.0, 20.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 20), Color::rgb(0, 255, 0));
    }

    // ── stacks ────────────────────────────────────────────────────────────

    #[test]
    fn pop_style_restores_fill() {
        let mut q = DrawQueue::new();
        q.fill(Color::rgb(255, 0, 0));
        q.push_style();
        q.fill(Color::rgb(0, 255, 0));
        q.pop_style();
        let (r, _) = render(&q);
        assert_eq!(r.state().fill, Some(Color::rgb(255, 0, 0)));
    }

    #[test]
    fn pop_style_restores_transform_too() {
        let mut q = DrawQueue::new();
        q.push_style();
        q.translate(10.0, 0.0);
        q.pop_style();
        let (r, _) = render(&q);
        assert!(r.state().transform.is_identity());
    }

    #[test]
    fn pop_matrix_keeps_style() {
        let mut q = DrawQueue::new();
        q.push_matrix();
        q.translate(5.0, 5.0);
        q.no_fill();
        q.pop_matrix();
        let (r, _) = render(&q);
        assert!(r.state().transform.is_identity());
        assert_eq!(r.state().fill, None);
    }

    #[test]
    fn unbalanced_pops_are_ignored() {
        let mut q = DrawQueue::new();
        q.fill(Color::rgb(1, 2, 3));
        q.pop_style();
        q.pop_matrix();
        let (r, _) = render(&q);
        assert_eq!(r.state().fill, Some(Color::rgb(1, 2, 3)));
        assert!(r.warned_unbalanced);
    }

    #[test]
    fn state_resets_every_frame() {
        let mut q = DrawQueue::new();
        q.no_fill();
        let mut r = Rasterizer::new();
        let mut fb = Framebuffer::new(4, 4).unwrap();
        r.render(&q, &mut fb);
        r.render(&DrawQueue::new(), &mut fb);
        assert_eq!(r.state().fill, Some(Color::WHITE));
    }

    // ── transforms ────────────────────────────────────────────────────────

    #[test]
    fn translate_moves_subsequent_shapes() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.translate(20.0, 20.0);
        q.push_rect(0.0, 0.0, 10.0, 10.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 5, 5), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 25, 25), Color::BLACK);
    }

    #[test]
    fn base_scale_maps_logical_to_physical() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.push_rect(0.0, 0.0, 10.0, 10.0);
        let mut r = Rasterizer::new();
        r.set_scale_factor(2.0);
        let mut fb = Framebuffer::new(40, 40).unwrap();
        r.render(&q, &mut fb);
        assert_eq!(px(&fb, 15, 15), Color::BLACK);
        assert_eq!(px(&fb, 25, 25), DEFAULT_CLEAR);
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    #[test]
    fn open_pie_arc_fills_only_its_quadrant() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.push_arc(20.0, 20.0, 36.0, 36.0, 0.0, std::f32::consts::FRAC_PI_2, ArcMode::OpenPie);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 26, 26), Color::BLACK);
        assert_eq!(px(&fb, 14, 14), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 26, 14), DEFAULT_CLEAR);
    }

    #[test]
    fn reversed_arc_draws_nothing() {
        let mut q = DrawQueue::new();
        q.fill(Color::BLACK);
        q.push_arc(20.0, 20.0, 36.0, 36.0, 1.0, 0.5, ArcMode::Pie);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 20), DEFAULT_CLEAR);
    }

    /// Quarter arc from 3 o'clock to 6 o'clock on a circle of radius 18 at
    /// (20, 20). Its chord runs along x + y = 58.
    fn quarter_arc(mode: ArcMode, fill: bool) -> Framebuffer {
        let mut q = DrawQueue::new();
        if fill {
            q.no_stroke();
            q.fill(Color::BLACK);
        } else {
            q.no_fill();
            q.stroke_weight(4.0);
        }
        q.push_arc(20.0, 20.0, 36.0, 36.0, 0.0, FRAC_PI_2, mode);
        render(&q).1
    }

    #[test]
    fn arc_fill_closure_follows_mode() {
        // (26, 26) lies between the center and the chord; (30, 30) between
        // the chord and the curve.
        for (mode, near_center) in [
            (ArcMode::OpenPie, Color::BLACK),
            (ArcMode::Open, DEFAULT_CLEAR),
            (ArcMode::Chord, DEFAULT_CLEAR),
            (ArcMode::Pie, Color::BLACK),
        ] {
            let fb = quarter_arc(mode, true);
            assert_eq!(px(&fb, 26, 26), near_center, "{mode:?}");
            assert_eq!(px(&fb, 30, 30), Color::BLACK, "{mode:?}");
        }
    }

    #[test]
    fn arc_stroke_closure_follows_mode() {
        // (29, 29) sits on the chord; (28, 19) on the radius to the start.
        for (mode, chord, radius) in [
            (ArcMode::OpenPie, DEFAULT_CLEAR, DEFAULT_CLEAR),
            (ArcMode::Open, DEFAULT_CLEAR, DEFAULT_CLEAR),
            (ArcMode::Chord, Color::BLACK, DEFAULT_CLEAR),
            (ArcMode::Pie, DEFAULT_CLEAR, Color::BLACK),
        ] {
            let fb = quarter_arc(mode, false);
            assert_eq!(px(&fb, 29, 29), chord, "{mode:?}");
            assert_eq!(px(&fb, 28, 19), radius, "{mode:?}");
        }
    }

    #[test]
    fn half_turn_arc_covers_lower_half() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.push_arc(20.0, 20.0, 36.0, 36.0, 0.0, PI, ArcMode::Pie);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 30), Color::BLACK);
        assert_eq!(px(&fb, 20, 9), DEFAULT_CLEAR);
    }

    // ── draw modes ────────────────────────────────────────────────────────

    #[test]
    fn corners_mode_rect_spans_two_points() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.rect_mode(DrawMode::Corners);
        q.push_rect(10.0, 10.0, 20.0, 20.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 15, 15), Color::BLACK);
        assert_eq!(px(&fb, 25, 25), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 5, 5), DEFAULT_CLEAR);
    }

    #[test]
    fn radius_mode_ellipse_uses_half_extents() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.ellipse_mode(DrawMode::Radius);
        q.push_ellipse(20.0, 20.0, 15.0, 15.0);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 20, 33), Color::BLACK);
        assert_eq!(px(&fb, 20, 37), DEFAULT_CLEAR);
    }

    #[test]
    fn arc_bounds_follow_ellipse_mode() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.ellipse_mode(DrawMode::Corner);
        q.push_arc(2.0, 2.0, 36.0, 36.0, 0.0, FRAC_PI_2, ArcMode::Pie);
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 26, 26), Color::BLACK);
        assert_eq!(px(&fb, 14, 14), DEFAULT_CLEAR);
    }

    // ── rounded rects ─────────────────────────────────────────────────────

    #[test]
    fn per_corner_radii_round_only_their_corner() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.push_rounded_rect(0.0, 0.0, 40.0, 40.0, CornerRadii::new(20.0, 0.0, 0.0, 0.0));
        let (_, fb) = render(&q);
        assert_eq!(px(&fb, 1, 1), DEFAULT_CLEAR);
        assert_eq!(px(&fb, 38, 1), Color::BLACK);
        assert_eq!(px(&fb, 38, 38), Color::BLACK);
        assert_eq!(px(&fb, 1, 38), Color::BLACK);
    }

    #[test]
    fn uniform_radius_rounds_every_corner() {
        let mut q = DrawQueue::new();
        q.no_stroke();
        q.fill(Color::BLACK);
        q.push_uniform_rounded_rect(0.0, 0.0, 40.0, 40.0, 15.0);
        let (_, fb) = render(&q);
        for (x, y) in [(1, 1), (38, 1), (38, 38), (1, 38)] {
            assert_eq!(px(&fb, x, y), DEFAULT_CLEAR);
        }
        assert_eq!(px(&fb, 20, 20), Color::BLACK);
    }
}
