//! Path construction for queued shapes.
//!
//! Curves are emitted as cubic Béziers; every builder returns `None` for
//! degenerate input (zero-area boxes, empty sweeps), which callers skip.

use std::f32::consts::{FRAC_PI_2, TAU};

use tiny_skia::{Path, PathBuilder};

use crate::coords::{CornerRadii, Rect, Vec2};

/// Cubic control-point factor for a quarter circle.
const KAPPA: f32 = 0.552_284_8;

pub(crate) fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    let r = rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return None;
    }
    tiny_skia::Rect::from_xywh(r.x(), r.y(), r.width(), r.height())
}

pub(crate) fn rect_path(rect: Rect) -> Option<Path> {
    let r = to_skia_rect(rect)?;
    let mut pb = PathBuilder::new();
    pb.push_rect(r);
    pb.finish()
}

pub(crate) fn ellipse_path(rect: Rect) -> Option<Path> {
    PathBuilder::from_oval(to_skia_rect(rect)?)
}

pub(crate) fn polygon_path(points: &[Vec2]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    pb.close();
    pb.finish()
}

pub(crate) fn line_path(from: Vec2, to: Vec2) -> Option<Path> {
    let mut pb = PathBuilder::new();
    pb.move_to(from.x, from.y);
    pb.line_to(to.x, to.y);
    pb.finish()
}

pub(crate) fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> Option<Path> {
    let r = rect.normalized();
    if r.is_empty() || !r.is_finite() {
        return None;
    }
    let radii = radii.clamped(r.width(), r.height());
    if radii.is_zero() {
        return rect_path(r);
    }

    let (x0, y0) = (r.x(), r.y());
    let (x1, y1) = (r.max().x, r.max().y);
    let k = 1.0 - KAPPA;

    let mut pb = PathBuilder::new();
    let tl = radii.top_left;
    let tr = radii.top_right;
    let br = radii.bottom_right;
    let bl = radii.bottom_left;

    pb.move_to(x0 + tl, y0);
    pb.line_to(x1 - tr, y0);
    if tr > 0.0 {
        pb.cubic_to(x1 - tr * k, y0, x1, y0 + tr * k, x1, y0 + tr);
    }
    pb.line_to(x1, y1 - br);
    if br > 0.0 {
        pb.cubic_to(x1, y1 - br * k, x1 - br * k, y1, x1 - br, y1);
    }
    pb.line_to(x0 + bl, y1);
    if bl > 0.0 {
        pb.cubic_to(x0 + bl * k, y1, x0, y1 - bl * k, x0, y1 - bl);
    }
    pb.line_to(x0, y0 + tl);
    if tl > 0.0 {
        pb.cubic_to(x0, y0 + tl * k, x0 + tl * k, y0, x0 + tl, y0);
    }
    pb.close();
    pb.finish()
}

/// How an arc outline is closed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ArcClosure {
    /// Just the curve.
    Open,
    /// Curve closed by a straight line between its end points.
    Chord,
    /// Curve closed through the ellipse center.
    Pie,
}

/// Normalized sweep for an arc, or `None` when nothing should be drawn.
///
/// A sweep wider than a full turn is clamped to one turn.
pub(crate) fn arc_sweep(start: f32, stop: f32) -> Option<(f32, f32)> {
    if !start.is_finite() || !stop.is_finite() || stop <= start {
        return None;
    }
    Some((start, (stop - start).min(TAU)))
}

pub(crate) fn arc_path(bounds: Rect, start: f32, stop: f32, closure: ArcClosure) -> Option<Path> {
    let b = bounds.normalized();
    if b.is_empty() || !b.is_finite() {
        return None;
    }
    let (start, sweep) = arc_sweep(start, stop)?;

    let center = b.center();
    let rx = 0.5 * b.width();
    let ry = 0.5 * b.height();
    let at = |angle: f32| center + Vec2::from_polar(angle, rx, ry);
    // Derivative of `at` scaled per axis.
    let tangent = |angle: f32| Vec2::new(-rx * angle.sin(), ry * angle.cos());

    let mut pb = PathBuilder::new();
    let first = at(start);
    if closure == ArcClosure::Pie {
        pb.move_to(center.x, center.y);
        pb.line_to(first.x, first.y);
    } else {
        pb.move_to(first.x, first.y);
    }

    let segments = (sweep / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = sweep / segments as f32;
    let k = 4.0 / 3.0 * (step / 4.0).tan();
    for i in 0..segments {
        let a0 = start + step * i as f32;
        let a1 = a0 + step;
        let p0 = at(a0);
        let p3 = at(a1);
        let c1 = p0 + tangent(a0) * k;
        let c2 = p3 - tangent(a1) * k;
        pb.cubic_to(c1.x, c1.y, c2.x, c2.y, p3.x, p3.y);
    }

    if closure != ArcClosure::Open {
        pb.close();
    }
    pb.finish()
}
