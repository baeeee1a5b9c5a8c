//! Calculation helpers and trigonometry constants.

pub const PI: f32 = std::f32::consts::PI;
pub const HALF_PI: f32 = std::f32::consts::FRAC_PI_2;
pub const QUARTER_PI: f32 = std::f32::consts::FRAC_PI_4;
pub const TWO_PI: f32 = std::f32::consts::TAU;
pub const TAU: f32 = std::f32::consts::TAU;

/// Clamps `amt` to `[low, high]`. Works for integers and floats alike.
pub fn constrain<T: PartialOrd>(amt: T, low: T, high: T) -> T {
    if amt < low {
        low
    } else if amt > high {
        high
    } else {
        amt
    }
}

pub fn dist(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    mag(x2 - x1, y2 - y1)
}

pub fn dist_3d(x1: f32, y1: f32, z1: f32, x2: f32, y2: f32, z2: f32) -> f32 {
    mag_3d(x2 - x1, y2 - y1, z2 - z1)
}

/// Value `amt` of the way from `start` to `stop`; not clamped.
pub fn lerp(start: f32, stop: f32, amt: f32) -> f32 {
    start + (stop - start) * amt
}

pub fn mag(a: f32, b: f32) -> f32 {
    (a * a + b * b).sqrt()
}

pub fn mag_3d(a: f32, b: f32, c: f32) -> f32 {
    (a * a + b * b + c * c).sqrt()
}

/// Re-maps `value` from `[start1, stop1]` to `[start2, stop2]`.
pub fn map(value: f32, start1: f32, stop1: f32, start2: f32, stop2: f32) -> f32 {
    start2 + (stop2 - start2) * ((value - start1) / (stop1 - start1))
}

/// Re-maps `value` from `[start, stop]` to `[0, 1]`.
pub fn norm(value: f32, start: f32, stop: f32) -> f32 {
    map(value, start, stop, 0.0, 1.0)
}

pub fn sq(n: f32) -> f32 {
    n * n
}

pub fn degrees(radians: f32) -> f32 {
    radians.to_degrees()
}

pub fn radians(degrees: f32) -> f32 {
    degrees.to_radians()
}

pub fn max3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let ab = if b > a { b } else { a };
    if c > ab { c } else { ab }
}

pub fn min3<T: PartialOrd>(a: T, b: T, c: T) -> T {
    let ab = if b < a { b } else { a };
    if c < ab { c } else { ab }
}
