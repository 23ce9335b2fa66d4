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

/// The error type for checked arithmetic operations.
///
/// Exactly one failure mode applies to any given call; the variants are
/// mutually exclusive and cover every way an unsigned machine-word
/// operation can fail to produce its exact mathematical result.
///
/// # Examples
///
/// ```rust
/// # use fender_core::num::error::ArithError;
/// # use fender_core::num::ops::checked_arithmetic::{AddChecked, SubChecked};
/// assert_eq!(u64::MAX.add_checked(1), Err(ArithError::Overflow));
/// assert_eq!(3u64.sub_checked(5), Err(ArithError::Underflow));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithError {
    /// The result of an addition or multiplication exceeds the maximum
    /// representable value.
    Overflow,
    /// The result of a subtraction would be negative.
    Underflow,
    /// The divisor of a division operation is zero.
    DivisionByZero,
}

impl std::fmt::Display for ArithError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overflow => write!(f, "arithmetic overflow: result exceeds the maximum value"),
            Self::Underflow => write!(f, "arithmetic underflow: result would be negative"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for ArithError {}

/// A specialized `Result` for checked arithmetic operations.
pub type ArithResult<T> = Result<T, ArithError>;
