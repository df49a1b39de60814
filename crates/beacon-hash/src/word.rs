// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hash word widths and their word-level operations.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::BitXor;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned word a spatial bucket key is computed in.
///
/// Sealed: exactly `u32` and `u64` implement it. The Fibonacci multiplier
/// below is only published for 32- and 64-bit words, so any other width is
/// rejected where it matters: at compile time, with an unsatisfied trait
/// bound, before an instance can exist. Key width is an explicit choice at
/// the type level (hashers default to `u64`), never inferred from the
/// build target.
pub trait HashWord:
    Copy + Eq + Hash + Debug + BitXor<Output = Self> + Send + Sync + sealed::Sealed + 'static
{
    /// Word width in bits.
    const BITS: u32;

    /// All-zero word; identity of the XOR fold.
    const ZERO: Self;

    /// Odd multiplier approximating `2^BITS / φ` (Fibonacci hashing).
    const PHI: Self;

    /// Floors `value` toward negative infinity and reinterprets the signed
    /// result's two's-complement bit pattern as unsigned.
    ///
    /// Negative inputs wrap to large unsigned values. That is intentional
    /// and harmless, since only avalanche quality matters downstream, not
    /// magnitude. Inputs beyond the signed range saturate (float-to-int
    /// `as` casts are saturating, hence deterministic).
    fn floor_cast(value: f64) -> Self;

    /// Spreads the word's entropy across all bits: wrapping multiply by
    /// [`HashWord::PHI`]. Inputs differing only in low bits land far apart.
    #[must_use]
    fn spread(self) -> Self;

    /// Left bit rotation: bits pushed off the top re-enter at the bottom.
    /// Defined for an amount of zero.
    #[must_use]
    fn rotate(self, n: u32) -> Self;
}

impl HashWord for u32 {
    const BITS: u32 = 32;
    const ZERO: Self = 0;
    const PHI: Self = 0x9e37_79b9; // 2_654_435_769

    // Truncation and sign loss are the two's-complement reinterpretation
    // this function exists to perform.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn floor_cast(value: f64) -> Self {
        value.floor() as i32 as u32
    }

    fn spread(self) -> Self {
        self.wrapping_mul(Self::PHI)
    }

    fn rotate(self, n: u32) -> Self {
        self.rotate_left(n)
    }
}

impl HashWord for u64 {
    const BITS: u32 = 64;
    const ZERO: Self = 0;
    const PHI: Self = 0x9e37_79b9_7f4a_7c15; // 11_400_714_819_323_198_485

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn floor_cast(value: f64) -> Self {
        value.floor() as i64 as u64
    }

    fn spread(self) -> Self {
        self.wrapping_mul(Self::PHI)
    }

    fn rotate(self, n: u32) -> Self {
        self.rotate_left(n)
    }
}
