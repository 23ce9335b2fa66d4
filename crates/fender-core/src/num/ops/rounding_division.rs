// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Rounding Division
//!
//! Integer division under three rounding policies (floor, ceiling, and
//! round-to-nearest with half-up tie-breaking), each available in a
//! checked form (zero divisor reported as an error) and a bounded form
//! (zero divisor clamped to the maximum value).
//!
//! The ceiling and nearest policies are factored through two unchecked
//! kernels operating on an already-known-nonzero divisor. Both the
//! checked and the bounded entry points delegate to the same kernel, so
//! the two families cannot diverge in rounding behavior. A
//! rounding-adjusted quotient never exceeds the dividend, so none of
//! these operations can overflow.

use crate::num::error::{ArithError, ArithResult};

/// Ceiling-division kernel over an already-known-nonzero divisor.
///
/// Returns the smallest integer greater than or equal to the exact
/// quotient `self / v`.
///
/// # Panics
///
/// The divisor must be nonzero; a `debug_assert!` catches violations
/// during development. In release builds a zero divisor reaches the
/// hardware division.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::rounding_division::DivCeilUnchecked;
/// assert_eq!(7u64.div_ceil_unchecked(2), 4);
/// assert_eq!(6u64.div_ceil_unchecked(2), 3);
/// ```
pub trait DivCeilUnchecked: Sized {
    /// Divides rounding up, assuming `v != 0`.
    fn div_ceil_unchecked(self, v: Self) -> Self;
}

/// Round-to-nearest division kernel over an already-known-nonzero
/// divisor.
///
/// Rounds the exact quotient to the nearest integer, with exact halves
/// rounding up. The half threshold is computed as `v / 2 + (v odd)`,
/// i.e. the ceiling of `v / 2`, so no fractional comparison is needed.
/// This is round-half-up, not round-half-to-even; the distinction matters
/// exactly when the remainder is half the divisor.
///
/// # Panics
///
/// The divisor must be nonzero; a `debug_assert!` catches violations
/// during development.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::rounding_division::DivRoundUnchecked;
/// assert_eq!(7u64.div_round_unchecked(2), 4); // 3.5 rounds up
/// assert_eq!(9u64.div_round_unchecked(4), 2); // 2.25 rounds down
/// ```
pub trait DivRoundUnchecked: Sized {
    /// Divides rounding to nearest (ties up), assuming `v != 0`.
    fn div_round_unchecked(self, v: Self) -> Self;
}

/// Checked floor division.
///
/// Truncating division of unsigned operands equals the mathematical
/// floor of the exact quotient.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::rounding_division::DivFloorChecked;
/// assert_eq!(7u64.div_floor_checked(2), Ok(3));
/// assert_eq!(7u64.div_floor_checked(0), Err(ArithError::DivisionByZero));
/// ```
pub trait DivFloorChecked: Sized {
    /// Divides rounding down, returning `Err(ArithError::DivisionByZero)`
    /// when `v == 0`.
    fn div_floor_checked(self, v: Self) -> ArithResult<Self>;
}

/// Checked ceiling division.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::rounding_division::DivCeilChecked;
/// assert_eq!(7u64.div_ceil_checked(2), Ok(4));
/// assert_eq!(8u64.div_ceil_checked(2), Ok(4));
/// assert_eq!(7u64.div_ceil_checked(0), Err(ArithError::DivisionByZero));
/// ```
pub trait DivCeilChecked: Sized {
    /// Divides rounding up, returning `Err(ArithError::DivisionByZero)`
    /// when `v == 0`.
    fn div_ceil_checked(self, v: Self) -> ArithResult<Self>;
}

/// Checked round-to-nearest division with half-up tie-breaking.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::rounding_division::DivRoundChecked;
/// assert_eq!(7u64.div_round_checked(2), Ok(4)); // tie rounds up
/// assert_eq!(6u64.div_round_checked(4), Ok(2)); // tie rounds up
/// assert_eq!(5u64.div_round_checked(4), Ok(1));
/// assert_eq!(7u64.div_round_checked(0), Err(ArithError::DivisionByZero));
/// ```
pub trait DivRoundChecked: Sized {
    /// Divides rounding to nearest (ties up), returning
    /// `Err(ArithError::DivisionByZero)` when `v == 0`.
    fn div_round_checked(self, v: Self) -> ArithResult<Self>;
}

/// Bounded floor division: clamps the zero-divisor case to the maximum
/// value instead of signaling.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::rounding_division::DivFloorBounded;
/// assert_eq!(7u64.div_floor_bounded(2), 3);
/// assert_eq!(7u64.div_floor_bounded(0), u64::MAX);
/// ```
pub trait DivFloorBounded: Sized {
    /// Divides rounding down, returning the maximum value when `v == 0`.
    fn div_floor_bounded(self, v: Self) -> Self;
}

/// Bounded ceiling division: clamps the zero-divisor case to the maximum
/// value instead of signaling.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::rounding_division::DivCeilBounded;
/// assert_eq!(7u64.div_ceil_bounded(2), 4);
/// assert_eq!(7u64.div_ceil_bounded(0), u64::MAX);
/// ```
pub trait DivCeilBounded: Sized {
    /// Divides rounding up, returning the maximum value when `v == 0`.
    fn div_ceil_bounded(self, v: Self) -> Self;
}

/// Bounded round-to-nearest division: clamps the zero-divisor case to
/// the maximum value instead of signaling.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::rounding_division::DivRoundBounded;
/// assert_eq!(7u64.div_round_bounded(2), 4);
/// assert_eq!(7u64.div_round_bounded(0), u64::MAX);
/// ```
pub trait DivRoundBounded: Sized {
    /// Divides rounding to nearest (ties up), returning the maximum value
    /// when `v == 0`.
    fn div_round_bounded(self, v: Self) -> Self;
}

macro_rules! rounding_division_impl {
    ($t:ty) => {
        impl DivCeilUnchecked for $t {
            #[inline(always)]
            fn div_ceil_unchecked(self, v: $t) -> $t {
                debug_assert!(v != 0, "called `div_ceil_unchecked` with a zero divisor");

                let quot = self / v;
                let rem = self % v;

                quot + (rem > 0) as $t
            }
        }

        impl DivRoundUnchecked for $t {
            #[inline(always)]
            fn div_round_unchecked(self, v: $t) -> $t {
                debug_assert!(v != 0, "called `div_round_unchecked` with a zero divisor");

                let quot = self / v;
                let rem = self % v;

                // Half threshold is ceil(v / 2); reaching it rounds up.
                let half = v / 2 + (v % 2);

                quot + (rem >= half) as $t
            }
        }

        impl DivFloorChecked for $t {
            #[inline(always)]
            fn div_floor_checked(self, v: $t) -> ArithResult<$t> {
                if v == 0 {
                    return Err(ArithError::DivisionByZero);
                }

                Ok(self / v)
            }
        }

        impl DivCeilChecked for $t {
            #[inline(always)]
            fn div_ceil_checked(self, v: $t) -> ArithResult<$t> {
                if v == 0 {
                    return Err(ArithError::DivisionByZero);
                }

                Ok(self.div_ceil_unchecked(v))
            }
        }

        impl DivRoundChecked for $t {
            #[inline(always)]
            fn div_round_checked(self, v: $t) -> ArithResult<$t> {
                if v == 0 {
                    return Err(ArithError::DivisionByZero);
                }

                Ok(self.div_round_unchecked(v))
            }
        }

        impl DivFloorBounded for $t {
            #[inline(always)]
            fn div_floor_bounded(self, v: $t) -> $t {
                if v == 0 {
                    return <$t>::MAX;
                }

                self / v
            }
        }

        impl DivCeilBounded for $t {
            #[inline(always)]
            fn div_ceil_bounded(self, v: $t) -> $t {
                if v == 0 {
                    return <$t>::MAX;
                }

                self.div_ceil_unchecked(v)
            }
        }

        impl DivRoundBounded for $t {
            #[inline(always)]
            fn div_round_bounded(self, v: $t) -> $t {
                if v == 0 {
                    return <$t>::MAX;
                }

                self.div_round_unchecked(v)
            }
        }
    };
}

rounding_division_impl!(u8);
rounding_division_impl!(u16);
rounding_division_impl!(u32);
rounding_division_impl!(u64);
rounding_division_impl!(usize);
rounding_division_impl!(u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_floor_checked() {
        assert_eq!(7u64.div_floor_checked(2), Ok(3));
        assert_eq!(6u64.div_floor_checked(2), Ok(3));
        assert_eq!(0u64.div_floor_checked(7), Ok(0));
        assert_eq!(7u64.div_floor_checked(0), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_div_ceil_checked() {
        assert_eq!(7u64.div_ceil_checked(2), Ok(4));
        assert_eq!(8u64.div_ceil_checked(2), Ok(4));
        assert_eq!(1u64.div_ceil_checked(7), Ok(1));
        assert_eq!(0u64.div_ceil_checked(7), Ok(0));
        assert_eq!(7u64.div_ceil_checked(0), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_div_ceil_never_overflows() {
        // The adjusted quotient never exceeds the dividend
        assert_eq!(u64::MAX.div_ceil_checked(1), Ok(u64::MAX));
        assert_eq!(u64::MAX.div_ceil_checked(2), Ok(1u64 << 63));
    }

    #[test]
    fn test_div_round_checked() {
        // rem = 1, threshold for v = 2 is 1: exact half rounds up
        assert_eq!(7u64.div_round_checked(2), Ok(4));
        // rem = 2, threshold for v = 4 is 2: exact half rounds up
        assert_eq!(6u64.div_round_checked(4), Ok(2));
        // rem = 1, threshold for v = 4 is 2: rounds down
        assert_eq!(5u64.div_round_checked(4), Ok(1));
        // rem = 3, threshold for v = 4 is 2: rounds up
        assert_eq!(7u64.div_round_checked(4), Ok(2));
        assert_eq!(7u64.div_round_checked(0), Err(ArithError::DivisionByZero));
    }

    #[test]
    fn test_div_round_odd_divisor() {
        // v = 5: threshold is 5/2 + 1 = 3
        assert_eq!(12u64.div_round_checked(5), Ok(2)); // rem = 2, down
        assert_eq!(13u64.div_round_checked(5), Ok(3)); // rem = 3, up
        // v = 3: threshold is 3/2 + 1 = 2
        assert_eq!(4u64.div_round_checked(3), Ok(1)); // rem = 1, down
        assert_eq!(5u64.div_round_checked(3), Ok(2)); // rem = 2, up
    }

    #[test]
    fn test_div_round_by_one() {
        assert_eq!(0u64.div_round_checked(1), Ok(0));
        assert_eq!(41u64.div_round_checked(1), Ok(41));
        assert_eq!(u64::MAX.div_round_checked(1), Ok(u64::MAX));
    }

    #[test]
    fn test_bounded_forms() {
        assert_eq!(7u64.div_floor_bounded(2), 3);
        assert_eq!(7u64.div_ceil_bounded(2), 4);
        assert_eq!(7u64.div_round_bounded(2), 4);
        // Zero divisor clamps to MAX in every policy
        assert_eq!(7u64.div_floor_bounded(0), u64::MAX);
        assert_eq!(7u64.div_ceil_bounded(0), u64::MAX);
        assert_eq!(7u64.div_round_bounded(0), u64::MAX);
    }

    #[test]
    fn test_checked_and_bounded_share_kernels() {
        for a in [0u64, 1, 5, 6, 7, 41, 100, u64::MAX] {
            for b in [1u64, 2, 3, 4, 5, 7, u64::MAX] {
                assert_eq!(a.div_floor_checked(b).unwrap(), a.div_floor_bounded(b));
                assert_eq!(a.div_ceil_checked(b).unwrap(), a.div_ceil_bounded(b));
                assert_eq!(a.div_round_checked(b).unwrap(), a.div_round_bounded(b));
            }
        }
    }

    #[test]
    fn test_narrow_word_rounding() {
        assert_eq!(255u8.div_ceil_unchecked(2), 128);
        assert_eq!(255u8.div_round_unchecked(2), 128);
        assert_eq!(255u8.div_round_unchecked(4), 64);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "zero divisor")]
    fn test_div_ceil_unchecked_zero_divisor_panics() {
        let _ = 7u64.div_ceil_unchecked(0);
    }
}
