//! `PVector`: a 2D or 3D float vector.
//!
//! The dimension is fixed when a vector is built. Operations that combine two
//! vectors (or a vector and explicit components) require matching dimensions
//! and report a [`VectorError::DimensionMismatch`] otherwise.

use std::f32::consts::TAU;
use std::fmt;

use rand::Rng;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VectorError {
    #[error("cannot combine a {left}D vector with a {right}D operand")]
    DimensionMismatch { left: usize, right: usize },
    #[error("division of a vector by zero")]
    DivideByZero,
}

pub type VectorResult<T> = Result<T, VectorError>;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Repr {
    Planar { x: f32, y: f32 },
    Spatial { x: f32, y: f32, z: f32 },
}

/// Euclidean vector in two or three dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PVector {
    repr: Repr,
}

impl Default for PVector {
    fn default() -> Self {
        PVector::new_2d(0.0, 0.0)
    }
}

impl PVector {
    // ── construction ──────────────────────────────────────────────────────

    pub const fn new_2d(x: f32, y: f32) -> Self {
        Self { repr: Repr::Planar { x, y } }
    }

    pub const fn new_3d(x: f32, y: f32, z: f32) -> Self {
        Self { repr: Repr::Spatial { x, y, z } }
    }

    /// Unit 2D vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        PVector::new_2d(angle.cos(), angle.sin())
    }

    /// Random 2D unit vector.
    pub fn random_2d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        PVector::from_angle(rng.random_range(0.0..TAU))
    }

    /// Random 3D unit vector, uniformly distributed on the sphere.
    pub fn random_3d<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let angle = rng.random_range(0.0..TAU);
        let z: f32 = rng.random_range(-1.0..=1.0);
        let r = (1.0 - z * z).max(0.0).sqrt();
        PVector::new_3d(r * angle.cos(), r * angle.sin(), z)
    }

    // ── components ────────────────────────────────────────────────────────

    #[inline]
    pub fn x(&self) -> f32 {
        match self.repr {
            Repr::Planar { x, .. } | Repr::Spatial { x, .. } => x,
        }
    }

    #[inline]
    pub fn y(&self) -> f32 {
        match self.repr {
            Repr::Planar { y, .. } | Repr::Spatial { y, .. } => y,
        }
    }

    /// `z`, or 0 for a 2D vector.
    #[inline]
    pub fn z(&self) -> f32 {
        match self.repr {
            Repr::Planar { .. } => 0.0,
            Repr::Spatial { z, .. } => z,
        }
    }

    #[inline]
    pub fn is_2d(&self) -> bool {
        matches!(self.repr, Repr::Planar { .. })
    }

    #[inline]
    pub fn is_3d(&self) -> bool {
        matches!(self.repr, Repr::Spatial { .. })
    }

    /// Number of dimensions (2 or 3).
    #[inline]
    pub fn dim(&self) -> usize {
        match self.repr {
            Repr::Planar { .. } => 2,
            Repr::Spatial { .. } => 3,
        }
    }

    /// Components as a vector of length [`dim`](Self::dim).
    pub fn array(&self) -> Vec<f32> {
        match self.repr {
            Repr::Planar { x, y } => vec![x, y],
            Repr::Spatial { x, y, z } => vec![x, y, z],
        }
    }

    pub fn copy(&self) -> PVector {
        *self
    }

    /// Same x and y, dropping z.
    pub fn to_2d(&self) -> PVector {
        PVector::new_2d(self.x(), self.y())
    }

    /// Same components with z = 0 for a 2D vector.
    pub fn to_3d(&self) -> PVector {
        PVector::new_3d(self.x(), self.y(), self.z())
    }

    fn check_dim(&self, right: usize) -> VectorResult<()> {
        let left = self.dim();
        if left == right {
            Ok(())
        } else {
            Err(VectorError::DimensionMismatch { left, right })
        }
    }

    /// Rebuilds with new components, keeping the dimension.
    fn with(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.repr = match self.repr {
            Repr::Planar { .. } => Repr::Planar { x, y },
            Repr::Spatial { .. } => Repr::Spatial { x, y, z },
        };
        self
    }

    // ── measurements ──────────────────────────────────────────────────────

    pub fn mag_sq(&self) -> f32 {
        let (x, y, z) = (self.x(), self.y(), self.z());
        x * x + y * y + z * z
    }

    pub fn mag(&self) -> f32 {
        self.mag_sq().sqrt()
    }

    pub fn dist(&self, other: &PVector) -> VectorResult<f32> {
        self.check_dim(other.dim())?;
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        let dz = self.z() - other.z();
        Ok((dx * dx + dy * dy + dz * dz).sqrt())
    }

    pub fn dot(&self, other: &PVector) -> VectorResult<f32> {
        self.check_dim(other.dim())?;
        Ok(self.x() * other.x() + self.y() * other.y() + self.z() * other.z())
    }

    pub fn dot_xy(&self, x: f32, y: f32) -> VectorResult<f32> {
        self.dot(&PVector::new_2d(x, y))
    }

    pub fn dot_xyz(&self, x: f32, y: f32, z: f32) -> VectorResult<f32> {
        self.dot(&PVector::new_3d(x, y, z))
    }

    /// Angle of the vector in the xy plane, `atan2(y, x)`.
    pub fn heading(&self) -> f32 {
        self.y().atan2(self.x())
    }

    /// Cross product.
    ///
    /// Two 2D vectors produce the 3D vector `(0, 0, x1*y2 - y1*x2)`.
    pub fn cross(&self, other: &PVector) -> VectorResult<PVector> {
        self.check_dim(other.dim())?;
        let (x1, y1, z1) = (self.x(), self.y(), self.z());
        let (x2, y2, z2) = (other.x(), other.y(), other.z());
        Ok(PVector::new_3d(y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2))
    }

    // ── in-place arithmetic ───────────────────────────────────────────────

    /// Copies `other`'s components; both must have the same dimension.
    pub fn set(&mut self, other: &PVector) -> VectorResult<&mut Self> {
        self.check_dim(other.dim())?;
        self.repr = other.repr;
        Ok(self)
    }

    pub fn set_xy(&mut self, x: f32, y: f32) -> VectorResult<&mut Self> {
        self.set(&PVector::new_2d(x, y))
    }

    pub fn set_xyz(&mut self, x: f32, y: f32, z: f32) -> VectorResult<&mut Self> {
        self.set(&PVector::new_3d(x, y, z))
    }

    pub fn add(&mut self, other: &PVector) -> VectorResult<&mut Self> {
        self.check_dim(other.dim())?;
        let (x, y, z) = (self.x() + other.x(), self.y() + other.y(), self.z() + other.z());
        Ok(self.with(x, y, z))
    }

    pub fn add_xy(&mut self, x: f32, y: f32) -> VectorResult<&mut Self> {
        self.add(&PVector::new_2d(x, y))
    }

    pub fn add_xyz(&mut self, x: f32, y: f32, z: f32) -> VectorResult<&mut Self> {
        self.add(&PVector::new_3d(x, y, z))
    }

    pub fn sub(&mut self, other: &PVector) -> VectorResult<&mut Self> {
        self.check_dim(other.dim())?;
        let (x, y, z) = (self.x() - other.x(), self.y() - other.y(), self.z() - other.z());
        Ok(self.with(x, y, z))
    }

    pub fn sub_xy(&mut self, x: f32, y: f32) -> VectorResult<&mut Self> {
        self.sub(&PVector::new_2d(x, y))
    }

    pub fn sub_xyz(&mut self, x: f32, y: f32, z: f32) -> VectorResult<&mut Self> {
        self.sub(&PVector::new_3d(x, y, z))
    }

    pub fn mult(&mut self, n: f32) -> &mut Self {
        let (x, y, z) = (self.x() * n, self.y() * n, self.z() * n);
        self.with(x, y, z)
    }

    pub fn div(&mut self, n: f32) -> VectorResult<&mut Self> {
        if n == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        let (x, y, z) = (self.x() / n, self.y() / n, self.z() / n);
        Ok(self.with(x, y, z))
    }

    /// Scales to unit length; a zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.mag();
        if m != 0.0 && m != 1.0 {
            self.mult(1.0 / m);
        }
        self
    }

    /// Shrinks the vector to length `max` if it is longer.
    pub fn limit(&mut self, max: f32) -> &mut Self {
        if self.mag_sq() > max * max {
            self.normalize().mult(max);
        }
        self
    }

    pub fn set_mag(&mut self, len: f32) -> &mut Self {
        self.normalize().mult(len)
    }

    /// Rotates by `theta` radians in the xy plane (about the z axis for 3D).
    pub fn rotate(&mut self, theta: f32) -> &mut Self {
        let (sin, cos) = theta.sin_cos();
        let (x, y, z) = (self.x(), self.y(), self.z());
        self.with(x * cos - y * sin, x * sin + y * cos, z)
    }

    /// Moves `amt` of the way towards `other`; `amt` outside [0, 1] extrapolates.
    pub fn lerp(&mut self, other: &PVector, amt: f32) -> VectorResult<&mut Self> {
        self.check_dim(other.dim())?;
        let x = self.x() + (other.x() - self.x()) * amt;
        let y = self.y() + (other.y() - self.y()) * amt;
        let z = self.z() + (other.z() - self.z()) * amt;
        Ok(self.with(x, y, z))
    }

    pub fn lerp_xy(&mut self, x: f32, y: f32, amt: f32) -> VectorResult<&mut Self> {
        self.lerp(&PVector::new_2d(x, y), amt)
    }

    pub fn lerp_xyz(&mut self, x: f32, y: f32, z: f32, amt: f32) -> VectorResult<&mut Self> {
        self.lerp(&PVector::new_3d(x, y, z), amt)
    }

    // ── non-mutating forms ────────────────────────────────────────────────

    pub fn sum(a: &PVector, b: &PVector) -> VectorResult<PVector> {
        let mut out = *a;
        out.add(b)?;
        Ok(out)
    }

    pub fn difference(a: &PVector, b: &PVector) -> VectorResult<PVector> {
        let mut out = *a;
        out.sub(b)?;
        Ok(out)
    }

    pub fn scaled(v: &PVector, n: f32) -> PVector {
        let mut out = *v;
        out.mult(n);
        out
    }

    pub fn divided(v: &PVector, n: f32) -> VectorResult<PVector> {
        let mut out = *v;
        out.div(n)?;
        Ok(out)
    }

    pub fn lerped(a: &PVector, b: &PVector, amt: f32) -> VectorResult<PVector> {
        let mut out = *a;
        out.lerp(b, amt)?;
        Ok(out)
    }

    pub fn distance(a: &PVector, b: &PVector) -> VectorResult<f32> {
        a.dist(b)
    }

    pub fn dot_of(a: &PVector, b: &PVector) -> VectorResult<f32> {
        a.dot(b)
    }

    /// Unsigned angle between two vectors in radians; 0 if either is zero.
    pub fn angle_between(a: &PVector, b: &PVector) -> VectorResult<f32> {
        let dot = a.dot(b)?;
        let mags = a.mag() * b.mag();
        if mags == 0.0 {
            return Ok(0.0);
        }
        // Rounding can push the ratio just outside acos' domain.
        Ok((dot / mags).clamp(-1.0, 1.0).acos())
    }
}

impl std::ops::Mul<f32> for PVector {
    type Output = PVector;

    fn mul(self, n: f32) -> PVector {
        PVector::scaled(&self, n)
    }
}

impl std::ops::Neg for PVector {
    type Output = PVector;

    fn neg(self) -> PVector {
        PVector::scaled(&self, -1.0)
    }
}

impl fmt::Display for PVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.repr {
            Repr::Planar { x, y } => write!(f, "[ {x}, {y} ]"),
            Repr::Spatial { x, y, z } => write!(f, "[ {x}, {y}, {z} ]"),
        }
    }
}
