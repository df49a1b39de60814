// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! beacon-hash: fixed-width spatial bucket keys for sample clustering.
//!
//! A sample-based localizer maintains thousands of weighted pose hypotheses
//! and periodically needs to group them into spatial cells: for cluster
//! statistics, for adaptive resampling, for output estimation. Building a
//! tree or grid for that is wasted work when all the consumer needs is a
//! grouping key. This crate computes that key in O(axes) per sample:
//!
//! 1. each axis is divided by its clustering resolution and floored
//!    (values in the same resolution-sized cell become indistinguishable),
//! 2. each floored quotient is avalanched with a Fibonacci multiply and
//!    rotated into its own band of the word,
//! 3. the per-axis words are XOR-folded into one [`u32`] or [`u64`] key.
//!
//! Keys are deterministic and pure: equal resolutions plus quantized-equal
//! states always produce equal keys, on any thread, in any process. They
//! are *not* unique: collisions are statistically rare but possible, and
//! resolving them is the caller's concern (hash the samples into buckets,
//! then compare representatives if exactness matters).
//!
//! Three input shapes are supported, each behind the [`SpatialHash`]
//! capability trait: homogeneous arrays ([`ArrayHasher`]), heterogeneous
//! numeric tuples ([`TupleHasher`]), and rigid 2D poses ([`PoseHasher`]).
//!
//! ```
//! use beacon_geom::Pose2;
//! use beacon_hash::{PoseHasher, SpatialHash};
//!
//! // 5 cm translational cells, ~0.57° angular cells.
//! let hasher: PoseHasher = PoseHasher::linear_angular(0.05, 0.01);
//! let a = Pose2::from_xy_theta(1.002, -0.498, 0.301);
//! let b = Pose2::from_xy_theta(1.049, -0.451, 0.309);
//! assert_eq!(hasher.hash(&a), hasher.hash(&b)); // same 3D cell
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod fold;
mod hasher;
mod scalar;
mod word;

pub use hasher::{ArrayHasher, PoseHasher, Resolution, SpatialHash, TupleHasher};
pub use scalar::{Axes, AxisValue};
pub use word::HashWord;
