/// Per-corner radii for a rounded rectangle (logical pixels).
///
/// Corners follow Processing's argument order: top-left, top-right,
/// bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_right: r, bottom_left: r }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Clamps every radius to `[0, min(w, h) / 2]` so neighbouring corners
    /// never overlap.
    pub fn clamped(self, w: f32, h: f32) -> Self {
        let max = 0.5 * w.abs().min(h.abs());
        let c = |r: f32| r.clamp(0.0, max);
        Self::new(c(self.top_left), c(self.top_right), c(self.bottom_right), c(self.bottom_left))
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top_left <= 0.0
            && self.top_right <= 0.0
            && self.bottom_right <= 0.0
            && self.bottom_left <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_to_half_short_side() {
        let r = CornerRadii::new(50.0, -3.0, 4.0, 10.0).clamped(20.0, 40.0);
        assert_eq!(r, CornerRadii::new(10.0, 0.0, 4.0, 10.0));
    }

    #[test]
    fn zero_detection() {
        assert!(CornerRadii::zero().is_zero());
        assert!(!CornerRadii::all(1.0).is_zero());
    }
}
