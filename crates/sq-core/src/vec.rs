//! 3-D vector type and the angle helpers the steering math needs.
//!
//! `Vec3` uses `f32` components.  The simulation lives on the XZ ground plane
//! with Y up; most steering operations project onto that plane via
//! [`Vec3::ground`].  Angle helpers return **degrees** because every tunable
//! in the squad configs (field of view, aim gate, formation slots) is
//! expressed in degrees.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

/// Length below which a vector is treated as zero when normalizing.
const NORMALIZE_EPSILON: f32 = 1e-5;

/// A 3-D vector with Y as the vertical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };
    /// The base heading that formation slot offsets rotate from.
    pub const FORWARD: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 1.0 };
    pub const UP: Vec3 = Vec3 { x: 0.0, y: 1.0, z: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn distance(self, other: Vec3) -> f32 {
        (self - other).length()
    }

    #[inline]
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Unit vector in the same direction, or `ZERO` for (near-)zero input.
    ///
    /// The zero-in/zero-out convention is load-bearing: empty neighbor sets
    /// produce zero steering terms, which must stay zero through blending.
    #[inline]
    pub fn normalized_or_zero(self) -> Vec3 {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            Vec3::ZERO
        } else {
            self / len
        }
    }

    /// Projection onto the ground plane (`y = 0`).
    #[inline]
    pub fn ground(self) -> Vec3 {
        Vec3 { y: 0.0, ..self }
    }

    /// Copy with the vertical component replaced.
    #[inline]
    pub fn with_y(self, y: f32) -> Vec3 {
        Vec3 { y, ..self }
    }

    /// Linear interpolation from `self` (t = 0) to `other` (t = 1).
    #[inline]
    pub fn lerp(self, other: Vec3, t: f32) -> Vec3 {
        self + (other - self) * t
    }

    /// Rotate around the vertical axis by `degrees`.
    ///
    /// Left-handed, Y-up sign convention: rotating `FORWARD` by +90° gives
    /// `(1, 0, 0)`.
    pub fn rotated_y(self, degrees: f32) -> Vec3 {
        let rad = degrees.to_radians();
        let (sin, cos) = rad.sin_cos();
        Vec3 {
            x: self.x * cos + self.z * sin,
            y: self.y,
            z: -self.x * sin + self.z * cos,
        }
    }

    /// Unsigned angle between two vectors in degrees, in `[0, 180]`.
    ///
    /// Returns 0 when either vector is (near-)zero.
    pub fn angle_between(self, other: Vec3) -> f32 {
        let denom = self.length() * other.length();
        if denom < NORMALIZE_EPSILON {
            return 0.0;
        }
        let cos = (self.dot(other) / denom).clamp(-1.0, 1.0);
        cos.acos().to_degrees()
    }

    /// Signed angle from `self` to `other` around the vertical axis, in
    /// degrees within `[-180, 180]`.  The sign follows the Y component of
    /// the cross product; the fire-control gate only consumes the magnitude.
    pub fn signed_angle_y(self, other: Vec3) -> f32 {
        let unsigned = self.angle_between(other);
        let sign = self.cross(other).y;
        if sign < 0.0 { -unsigned } else { unsigned }
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}
