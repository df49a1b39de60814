// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::rot2::Rot2;
use crate::vec2::Vec2;

/// Rigid 2D pose: a translation plus a planar rotation (SE(2)).
///
/// Conventions:
/// - `translation` in meters (world space).
/// - `rotation` as a unit complex number; the heading in radians is
///   recovered with `rotation().angle()`.
///
/// Poses are plain values: `Copy`, immutable, no identity beyond their
/// components. Group operations (`compose`, `inverse`) follow the usual
/// SE(2) semantics with float64 arithmetic.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pose2 {
    translation: Vec2,
    rotation: Rot2,
}

impl Pose2 {
    /// Identity pose (no translation, no rotation).
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            translation: Vec2::ZERO,
            rotation: Rot2::identity(),
        }
    }

    /// Creates a pose from components.
    #[must_use]
    pub const fn new(translation: Vec2, rotation: Rot2) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Creates a pose from planar coordinates and a heading in radians.
    #[must_use]
    pub fn from_xy_theta(x: f64, y: f64, theta: f64) -> Self {
        Self {
            translation: Vec2::new(x, y),
            rotation: Rot2::from_angle(theta),
        }
    }

    /// Translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Rotation component.
    #[must_use]
    pub fn rotation(&self) -> Rot2 {
        self.rotation
    }

    /// Composes two poses (`self` applied first, then `other` in the local
    /// frame of `self`).
    #[must_use]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            translation: self
                .translation
                .add(&self.rotation.rotate(&other.translation)),
            rotation: self.rotation.compose(&other.rotation),
        }
    }

    /// Inverse pose, such that `p.compose(&p.inverse())` is the identity.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let rotation = self.rotation.inverse();
        Self {
            translation: rotation.rotate(&self.translation.scale(-1.0)),
            rotation,
        }
    }

    /// Maps a point from the pose's local frame into the world frame.
    #[must_use]
    pub fn transform_point(&self, point: &Vec2) -> Vec2 {
        self.translation.add(&self.rotation.rotate(point))
    }
}

impl Default for Pose2 {
    fn default() -> Self {
        Self::identity()
    }
}
