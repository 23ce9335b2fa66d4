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

/// A trait for unsigned integers that can test whether an addition would
/// overflow, without performing it.
///
/// The test compares the left operand against the precomputed bound
/// `MAX - v`, so no intermediate value ever leaves the representable
/// range. For all inputs the predicate agrees exactly with
/// `AddChecked::add_checked`.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::wrap_predicates::AddWouldWrap;
/// assert!(u8::MAX.add_would_wrap(1));
/// assert!(!200u8.add_would_wrap(55));
/// ```
pub trait AddWouldWrap: Sized {
    /// Returns `true` iff `self + v` would exceed the maximum
    /// representable value.
    fn add_would_wrap(self, v: Self) -> bool;
}

/// A trait for unsigned integers that can test whether a subtraction
/// would underflow, without performing it.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::wrap_predicates::SubWouldWrap;
/// assert!(3u64.sub_would_wrap(5));
/// assert!(!5u64.sub_would_wrap(5));
/// ```
pub trait SubWouldWrap: Sized {
    /// Returns `true` iff `self - v` would be negative.
    fn sub_would_wrap(self, v: Self) -> bool;
}

/// A trait for unsigned integers that can test whether a multiplication
/// would overflow, without performing it.
///
/// The test uses the division-based bound `self > MAX / v` rather than a
/// widening multiply, which keeps every type instantiation uniform (the
/// widest word has no wider intermediate type). A zero right operand
/// never wraps: the product is always zero.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::ops::wrap_predicates::MulWouldWrap;
/// assert!(u8::MAX.mul_would_wrap(2));
/// assert!(!16u8.mul_would_wrap(15));
/// assert!(!u8::MAX.mul_would_wrap(0));
/// ```
pub trait MulWouldWrap: Sized {
    /// Returns `true` iff `self * v` would exceed the maximum
    /// representable value.
    fn mul_would_wrap(self, v: Self) -> bool;
}

macro_rules! wrap_predicates_impl {
    ($t:ty) => {
        impl AddWouldWrap for $t {
            #[inline(always)]
            fn add_would_wrap(self, v: $t) -> bool {
                self > <$t>::MAX - v
            }
        }

        impl SubWouldWrap for $t {
            #[inline(always)]
            fn sub_would_wrap(self, v: $t) -> bool {
                v > self
            }
        }

        impl MulWouldWrap for $t {
            #[inline(always)]
            fn mul_would_wrap(self, v: $t) -> bool {
                v != 0 && self > <$t>::MAX / v
            }
        }
    };
}

wrap_predicates_impl!(u8);
wrap_predicates_impl!(u16);
wrap_predicates_impl!(u32);
wrap_predicates_impl!(u64);
wrap_predicates_impl!(usize);
wrap_predicates_impl!(u128);
