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

//! # Unsigned Word Trait
//!
//! Unified bound for generic code over the overflow-aware operation
//! surface. `UnsignedWord` collects the intrinsic numeric traits
//! (`PrimInt`, `Unsigned`) together with every wrap-predicate, checked,
//! bounded, and rounding-division trait, so a generic consumer states a
//! single bound instead of a dozen.
//!
//! Implemented (via the blanket impl) by `u8`, `u16`, `u32`, `u64`,
//! `usize`, and `u128`.

use std::hash::Hash;

use crate::num::ops::{
    bounded_arithmetic, checked_arithmetic, rounding_division, wrap_predicates,
};
use num_traits::{PrimInt, Unsigned};

/// A trait alias for unsigned machine-word types carrying the full
/// overflow-aware operation surface.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::word::UnsignedWord;
/// fn halfway_up<T: UnsignedWord>(a: T, b: T) -> T {
///     a.add_bounded(b).div_round_bounded(T::one() + T::one())
/// }
///
/// assert_eq!(halfway_up(3u64, 4u64), 4);
/// assert_eq!(halfway_up(u8::MAX, u8::MAX), 128);
/// ```
pub trait UnsignedWord:
    PrimInt
    + Unsigned
    + std::fmt::Debug
    + std::fmt::Display
    + wrap_predicates::AddWouldWrap
    + wrap_predicates::SubWouldWrap
    + wrap_predicates::MulWouldWrap
    + checked_arithmetic::AddChecked
    + checked_arithmetic::SubChecked
    + checked_arithmetic::MulChecked
    + checked_arithmetic::DivChecked
    + bounded_arithmetic::AddBounded
    + bounded_arithmetic::SubBounded
    + bounded_arithmetic::MulBounded
    + bounded_arithmetic::DivBounded
    + rounding_division::DivCeilUnchecked
    + rounding_division::DivRoundUnchecked
    + rounding_division::DivFloorChecked
    + rounding_division::DivCeilChecked
    + rounding_division::DivRoundChecked
    + rounding_division::DivFloorBounded
    + rounding_division::DivCeilBounded
    + rounding_division::DivRoundBounded
    + Send
    + Sync
    + Hash
{
}

impl<T> UnsignedWord for T where
    T: PrimInt
        + Unsigned
        + std::fmt::Debug
        + std::fmt::Display
        + wrap_predicates::AddWouldWrap
        + wrap_predicates::SubWouldWrap
        + wrap_predicates::MulWouldWrap
        + checked_arithmetic::AddChecked
        + checked_arithmetic::SubChecked
        + checked_arithmetic::MulChecked
        + checked_arithmetic::DivChecked
        + bounded_arithmetic::AddBounded
        + bounded_arithmetic::SubBounded
        + bounded_arithmetic::MulBounded
        + bounded_arithmetic::DivBounded
        + rounding_division::DivCeilUnchecked
        + rounding_division::DivRoundUnchecked
        + rounding_division::DivFloorChecked
        + rounding_division::DivCeilChecked
        + rounding_division::DivRoundChecked
        + rounding_division::DivFloorBounded
        + rounding_division::DivCeilBounded
        + rounding_division::DivRoundBounded
        + Send
        + Sync
        + Hash
{
}
