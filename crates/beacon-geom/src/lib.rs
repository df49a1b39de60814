// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! beacon-geom: deterministic planar geometry for sample-based localization.
//!
//! Provides the minimal SE(2) toolkit the Beacon estimator stack consumes:
//! - [`Vec2`]: float64 planar vector.
//! - [`Rot2`]: planar rotation stored as a unit complex number.
//! - [`Pose2`]: rigid 2D pose (translation + rotation).
//!
//! Determinism policy:
//! - No platform transcendentals. Angle construction and extraction go
//!   through `libm`, whose software implementations are bit-stable across
//!   hardware and targets. Everything else is plain IEEE 754 arithmetic.
//! - No ambient RNG, no allocation, no interior mutability. Every type is
//!   `Copy` and safe to share across threads.
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
    clippy::suboptimal_flops,
    clippy::module_name_repetitions
)]

mod pose2;
mod rot2;
mod vec2;

pub use pose2::Pose2;
pub use rot2::Rot2;
pub use vec2::Vec2;
