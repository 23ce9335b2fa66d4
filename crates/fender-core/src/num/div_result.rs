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

use num_traits::{PrimInt, Unsigned};

/// The quotient and remainder of a full unsigned division.
///
/// For a dividend `a` divided by a nonzero divisor `b`, the pair upholds
/// `a == quot * b + rem` with `rem < b`. The bounded division operation
/// additionally uses `(MAX, 0)` as its zero-divisor sentinel; that pair is
/// a documented convention, not a mathematically meaningful result.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::div_result::DivResult;
/// # use fender_core::num::ops::checked_arithmetic::DivChecked;
/// let res = 7u64.div_checked(2).unwrap();
/// assert_eq!(res, DivResult::new(3, 1));
/// assert_eq!(res.quot * 2 + res.rem, 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DivResult<T>
where
    T: PrimInt + Unsigned,
{
    /// The truncated quotient.
    pub quot: T,
    /// The remainder, strictly less than the divisor when the divisor is
    /// nonzero.
    pub rem: T,
}

impl<T> DivResult<T>
where
    T: PrimInt + Unsigned,
{
    /// Creates a new `DivResult` from a quotient and a remainder.
    #[inline]
    pub const fn new(quot: T, rem: T) -> Self {
        Self { quot, rem }
    }

    /// Returns the quotient.
    #[inline]
    pub const fn quot(&self) -> T {
        self.quot
    }

    /// Returns the remainder.
    #[inline]
    pub const fn rem(&self) -> T {
        self.rem
    }
}

impl<T> std::fmt::Display for DivResult<T>
where
    T: PrimInt + Unsigned + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rem {}", self.quot, self.rem)
    }
}
