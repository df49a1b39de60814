// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape adapters mapping estimator states to bucket keys.

use core::marker::PhantomData;

use beacon_geom::Pose2;

use crate::fold::fold_axes;
use crate::scalar::{Axes, AxisValue};
use crate::word::HashWord;

/// Per-axis clustering resolution: one positive entry per state axis.
///
/// Positivity is an unchecked precondition; a zero or negative entry
/// yields a meaningless (but never crashing) key.
pub type Resolution<const D: usize> = [f64; D];

/// Capability: map a state value to a fixed-width bucket key.
///
/// An implementation is a pure function of the state, fully determined by
/// its owned resolution and its word width. Two states whose per-axis
/// floored quotients agree under that resolution always receive the same
/// key; distinct cells collide only with the statistical rarity of the
/// underlying avalanche. Hashers carry no other state: they are `Copy`,
/// shareable across threads without synchronization, and interchangeable
/// with any equally-configured instance.
pub trait SpatialHash<S> {
    /// Key word type, `u32` or `u64`.
    type Word: HashWord;

    /// Computes the bucket key for `state`.
    fn hash(&self, state: &S) -> Self::Word;
}

/// Hashes fixed-size homogeneous arrays, pairing `state[i]` with
/// `resolution[i]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArrayHasher<const D: usize, W: HashWord = u64> {
    resolution: Resolution<D>,
    _word: PhantomData<W>,
}

impl<const D: usize, W: HashWord> ArrayHasher<D, W> {
    /// Constructs a hasher from per-index resolutions.
    #[must_use]
    pub const fn new(resolution: Resolution<D>) -> Self {
        Self {
            resolution,
            _word: PhantomData,
        }
    }

    /// The per-axis resolution this hasher was built with.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution<D> {
        &self.resolution
    }
}

impl<T: AxisValue, const D: usize, W: HashWord> SpatialHash<[T; D]> for ArrayHasher<D, W> {
    type Word = W;

    fn hash(&self, state: &[T; D]) -> W {
        let mut axes = [0.0_f64; D];
        for (axis, value) in axes.iter_mut().zip(state.iter()) {
            *axis = value.to_axis();
        }
        fold_axes(&axes, &self.resolution)
    }
}

/// Hashes heterogeneous numeric tuples, pairing element `i` with
/// `resolution[i]` after widening it to `f64`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TupleHasher<const D: usize, W: HashWord = u64> {
    resolution: Resolution<D>,
    _word: PhantomData<W>,
}

impl<const D: usize, W: HashWord> TupleHasher<D, W> {
    /// Constructs a hasher from per-element resolutions.
    #[must_use]
    pub const fn new(resolution: Resolution<D>) -> Self {
        Self {
            resolution,
            _word: PhantomData,
        }
    }

    /// The per-axis resolution this hasher was built with.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution<D> {
        &self.resolution
    }
}

impl<S: Axes<D>, const D: usize, W: HashWord> SpatialHash<S> for TupleHasher<D, W> {
    type Word = W;

    fn hash(&self, state: &S) -> W {
        fold_axes(&state.axes(), &self.resolution)
    }
}

/// Hashes rigid 2D poses by clustering x, y, and heading.
///
/// The pose is normalized to the tuple `(x, y, theta)`, translation
/// components plus the rotation's scalar angle (the SO(2) log map), and
/// delegated to a three-axis [`TupleHasher`]. With the default `u64` word
/// each axis gets 21 bits of band; the remaining bit is unused (three does
/// not divide 64). Headings are clustered on the angle's principal value,
/// so resolutions near pi can split cells at the ±pi seam; typical angular
/// resolutions are far below that.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PoseHasher<W: HashWord = u64> {
    inner: TupleHasher<3, W>,
}

impl<W: HashWord> PoseHasher<W> {
    /// Constructs a hasher from per-coordinate resolutions: x and y in
    /// meters, theta in radians.
    #[must_use]
    pub const fn new(x_resolution: f64, y_resolution: f64, theta_resolution: f64) -> Self {
        Self {
            inner: TupleHasher::new([x_resolution, y_resolution, theta_resolution]),
        }
    }

    /// Constructs a hasher from a shared translational resolution (meters)
    /// and a separate angular resolution (radians).
    #[must_use]
    pub const fn linear_angular(linear_resolution: f64, angular_resolution: f64) -> Self {
        Self::new(linear_resolution, linear_resolution, angular_resolution)
    }

    /// The `[x, y, theta]` resolution this hasher was built with.
    #[must_use]
    pub const fn resolution(&self) -> &Resolution<3> {
        self.inner.resolution()
    }
}

impl<W: HashWord> Default for PoseHasher<W> {
    /// Resolution 1.0 on every axis.
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl<W: HashWord> SpatialHash<Pose2> for PoseHasher<W> {
    type Word = W;

    fn hash(&self, state: &Pose2) -> W {
        let translation = state.translation();
        self.inner.hash(&(
            translation.x(),
            translation.y(),
            state.rotation().angle(),
        ))
    }
}
