// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::vec2::Vec2;

/// Planar rotation stored as a unit complex number `(cos, sin)`.
///
/// The storage is the group element itself rather than an angle, so
/// composition is a complex multiply and never accumulates range-reduction
/// drift. The scalar angle is recovered on demand via [`Rot2::angle`] (the
/// SO(2) log map), which is what downstream clustering hashes.
///
/// All transcendental evaluations go through `libm` to keep results
/// bit-identical across targets.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rot2 {
    cos: f64,
    sin: f64,
}

impl Rot2 {
    /// Identity rotation (zero angle).
    #[must_use]
    pub const fn identity() -> Self {
        Self { cos: 1.0, sin: 0.0 }
    }

    /// Rotation by `angle` radians, counterclockwise.
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = libm::sincos(angle);
        Self { cos, sin }
    }

    /// Cosine of the rotation angle.
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Sine of the rotation angle.
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// The rotation angle in `(-pi, pi]` (SO(2) log map).
    #[must_use]
    pub fn angle(&self) -> f64 {
        libm::atan2(self.sin, self.cos)
    }

    /// Composes two rotations (`self` followed by `other`).
    ///
    /// The unit-complex product is renormalized so long composition chains
    /// stay on the unit circle.
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        let cos = self.cos * other.cos - self.sin * other.sin;
        let sin = self.cos * other.sin + self.sin * other.cos;
        Self { cos, sin }.normalized()
    }

    /// Inverse rotation (complex conjugate).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Rotates a vector.
    #[must_use]
    pub fn rotate(&self, v: &Vec2) -> Vec2 {
        Vec2::new(
            self.cos * v.x() - self.sin * v.y(),
            self.sin * v.x() + self.cos * v.y(),
        )
    }

    fn normalized(self) -> Self {
        let norm = (self.cos * self.cos + self.sin * self.sin).sqrt();
        if norm == 0.0 || !norm.is_finite() {
            return Self::identity();
        }
        Self {
            cos: self.cos / norm,
            sin: self.sin / norm,
        }
    }
}

impl Default for Rot2 {
    fn default() -> Self {
        Self::identity()
    }
}
