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

use crate::num::{
    div_result::DivResult,
    ops::wrap_predicates::{AddWouldWrap, MulWouldWrap, SubWouldWrap},
};
use num_traits::{PrimInt, Unsigned};

/// Bounded addition: clamps to the maximum value instead of overflowing.
///
/// A strict wrapper over the checked form: equal to
/// `AddChecked::add_checked`'s value whenever that call succeeds, and
/// exactly `MAX` whenever it would fail. Callers who accept saturation
/// semantics never need to branch on an outcome.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::bounded_arithmetic::AddBounded;
/// let a: u8 = 250;
/// assert_eq!(a.add_bounded(10), 255);
/// assert_eq!(a.add_bounded(5), 255);
/// assert_eq!(a.add_bounded(4), 254);
/// ```
pub trait AddBounded: Sized {
    /// Performs addition, clamping to the maximum representable value on
    /// overflow.
    fn add_bounded(self, v: Self) -> Self;
}

/// Bounded subtraction: clamps to zero instead of underflowing.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::bounded_arithmetic::SubBounded;
/// assert_eq!(3u64.sub_bounded(5), 0);
/// assert_eq!(5u64.sub_bounded(3), 2);
/// ```
pub trait SubBounded: Sized {
    /// Performs subtraction, clamping to zero on underflow.
    fn sub_bounded(self, v: Self) -> Self;
}

/// Bounded multiplication: clamps to the maximum value instead of
/// overflowing.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::bounded_arithmetic::MulBounded;
/// let a: u8 = 64;
/// assert_eq!(a.mul_bounded(10), 255);
/// assert_eq!(a.mul_bounded(2), 128);
/// ```
pub trait MulBounded: Sized {
    /// Performs multiplication, clamping to the maximum representable
    /// value on overflow.
    fn mul_bounded(self, v: Self) -> Self;
}

/// Bounded full division: substitutes a sentinel pair for the zero
/// divisor instead of signaling.
///
/// The zero-divisor result `(MAX, 0)` is a documented convention, not a
/// mathematically meaningful clamp: unlike the other bounded operations
/// there is no true quotient it bounds. It is preserved for compatibility
/// with the status-free calling style.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::div_result::DivResult;
/// # use fender_core::num::ops::bounded_arithmetic::DivBounded;
/// assert_eq!(7u64.div_bounded(2), DivResult::new(3, 1));
/// assert_eq!(7u64.div_bounded(0), DivResult::new(u64::MAX, 0));
/// ```
pub trait DivBounded: PrimInt + Unsigned {
    /// Performs truncating division, returning `(MAX, 0)` when the
    /// divisor is zero.
    fn div_bounded(self, v: Self) -> DivResult<Self>;
}

macro_rules! bounded_impl {
    ($t:ty) => {
        impl AddBounded for $t {
            #[inline(always)]
            fn add_bounded(self, v: $t) -> $t {
                if self.add_would_wrap(v) {
                    return <$t>::MAX;
                }

                self + v
            }
        }

        impl SubBounded for $t {
            #[inline(always)]
            fn sub_bounded(self, v: $t) -> $t {
                if self.sub_would_wrap(v) {
                    return 0;
                }

                self - v
            }
        }

        impl MulBounded for $t {
            #[inline(always)]
            fn mul_bounded(self, v: $t) -> $t {
                if self.mul_would_wrap(v) {
                    return <$t>::MAX;
                }

                self * v
            }
        }

        impl DivBounded for $t {
            #[inline(always)]
            fn div_bounded(self, v: $t) -> DivResult<$t> {
                if v == 0 {
                    return DivResult::new(<$t>::MAX, 0);
                }

                DivResult::new(self / v, self % v)
            }
        }
    };
}

bounded_impl!(u8);
bounded_impl!(u16);
bounded_impl!(u32);
bounded_impl!(u64);
bounded_impl!(usize);
bounded_impl!(u128);
