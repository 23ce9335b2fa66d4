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
    error::{ArithError, ArithResult},
    ops::wrap_predicates::{AddWouldWrap, MulWouldWrap, SubWouldWrap},
};
use num_traits::{PrimInt, Unsigned};

/// A trait for unsigned integers that support addition with an explicit
/// success/failure outcome.
///
/// The wrap case is decided by `AddWouldWrap` before the sum is computed,
/// so the operation is well-defined for every input pair.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::checked_arithmetic::AddChecked;
/// let a: u8 = 200;
/// assert_eq!(a.add_checked(100), Err(ArithError::Overflow));
/// assert_eq!(a.add_checked(50), Ok(250));
/// ```
pub trait AddChecked: Sized {
    /// Performs addition, returning `Err(ArithError::Overflow)` if the
    /// exact sum is not representable.
    fn add_checked(self, v: Self) -> ArithResult<Self>;
}

/// A trait for unsigned integers that support subtraction with an
/// explicit success/failure outcome.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::checked_arithmetic::SubChecked;
/// let a: u8 = 50;
/// assert_eq!(a.sub_checked(100), Err(ArithError::Underflow));
/// assert_eq!(a.sub_checked(20), Ok(30));
/// ```
pub trait SubChecked: Sized {
    /// Performs subtraction, returning `Err(ArithError::Underflow)` if
    /// the exact difference would be negative.
    fn sub_checked(self, v: Self) -> ArithResult<Self>;
}

/// A trait for unsigned integers that support multiplication with an
/// explicit success/failure outcome.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::checked_arithmetic::MulChecked;
/// let a: u8 = 20;
/// assert_eq!(a.mul_checked(10), Ok(200));
/// assert_eq!(a.mul_checked(20), Err(ArithError::Overflow));
/// ```
pub trait MulChecked: Sized {
    /// Performs multiplication, returning `Err(ArithError::Overflow)` if
    /// the exact product is not representable.
    fn mul_checked(self, v: Self) -> ArithResult<Self>;
}

/// A trait for unsigned integers that support full division with an
/// explicit success/failure outcome.
///
/// On success the returned `DivResult` upholds
/// `self == quot * v + rem` with `rem < v`. Division of unsigned words
/// never overflows; the only failure is a zero divisor.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::div_result::DivResult;
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::checked_arithmetic::DivChecked;
/// assert_eq!(7u64.div_checked(2), Ok(DivResult::new(3, 1)));
/// assert_eq!(7u64.div_checked(0), Err(ArithError::DivisionByZero));
/// ```
pub trait DivChecked: PrimInt + Unsigned {
    /// Performs truncating division, returning the quotient/remainder
    /// pair or `Err(ArithError::DivisionByZero)`.
    fn div_checked(self, v: Self) -> ArithResult<DivResult<Self>>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl AddChecked for $t {
            #[inline(always)]
            fn add_checked(self, v: $t) -> ArithResult<$t> {
                if self.add_would_wrap(v) {
                    return Err(ArithError::Overflow);
                }

                Ok(self + v)
            }
        }

        impl SubChecked for $t {
            #[inline(always)]
            fn sub_checked(self, v: $t) -> ArithResult<$t> {
                if self.sub_would_wrap(v) {
                    return Err(ArithError::Underflow);
                }

                Ok(self - v)
            }
        }

        impl MulChecked for $t {
            #[inline(always)]
            fn mul_checked(self, v: $t) -> ArithResult<$t> {
                if self.mul_would_wrap(v) {
                    return Err(ArithError::Overflow);
                }

                Ok(self * v)
            }
        }

        impl DivChecked for $t {
            #[inline(always)]
            fn div_checked(self, v: $t) -> ArithResult<DivResult<$t>> {
                if v == 0 {
                    return Err(ArithError::DivisionByZero);
                }

                Ok(DivResult::new(self / v, self % v))
            }
        }
    };
}

checked_impl!(u8);
checked_impl!(u16);
checked_impl!(u32);
checked_impl!(u64);
checked_impl!(usize);
checked_impl!(u128);
