// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The floor/avalanche/rotate axis primitive and the XOR fold over axes.

use crate::word::HashWord;

/// Hashes one pre-divided axis value into its rotated band.
///
/// `value` arrives already divided by the axis resolution; flooring it here
/// completes the quantization, so every raw coordinate inside one
/// resolution-sized interval produces the same word. The Fibonacci spread
/// is then rotated left by `bits_per_axis * axis_index`, placing each
/// axis's contribution in a distinct band before folding. Bands are
/// non-overlapping exactly when the axis count divides the word width.
pub(crate) fn axis_hash<W: HashWord>(value: f64, bits_per_axis: u32, axis_index: u32) -> W {
    W::floor_cast(value)
        .spread()
        .rotate(bits_per_axis * axis_index)
}

/// Quantizes each axis by its resolution and XOR-folds the per-axis words
/// into one key.
///
/// `bits_per_axis` is `W::BITS / D` with truncating division. When `D`
/// does not divide the width evenly, the top `W::BITS % D` bits are never
/// a rotation target; the effective key space shrinks slightly for
/// high-index axes. Known limitation, kept as-is.
///
/// `D == 0` fails to compile: a key over zero axes is meaningless.
#[allow(clippy::cast_possible_truncation)] // D is a small axis count
pub(crate) fn fold_axes<W: HashWord, const D: usize>(
    axes: &[f64; D],
    resolution: &[f64; D],
) -> W {
    const {
        assert!(D > 0, "a spatial bucket key needs at least one axis");
    }
    let bits_per_axis = W::BITS / D as u32;
    let mut key = W::ZERO;
    for (i, (value, res)) in axes.iter().zip(resolution.iter()).enumerate() {
        key = key ^ axis_hash::<W>(value / res, bits_per_axis, i as u32);
    }
    key
}
