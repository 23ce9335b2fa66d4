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

//! # Numeric Foundations
//!
//! Types and traits for overflow-aware unsigned arithmetic. This module
//! consolidates the outcome tag, the division result pair, the by-value
//! operation traits, and the aggregate word bound.
//!
//! ## Submodules
//!
//! - `error`: The `ArithError` outcome tag (`Overflow`, `Underflow`,
//!   `DivisionByZero`) and the `ArithResult<T>` alias used by every
//!   checked operation.
//! - `div_result`: The `DivResult<T>` quotient/remainder pair upholding
//!   the division identity `a == quot * b + rem` with `rem < b`.
//! - `ops`: Wrap predicates, checked arithmetic, bounded arithmetic, and
//!   rounding division, implemented for all unsigned primitive integers.
//! - `word`: The `UnsignedWord` trait alias collecting every operation
//!   bound for generic consumers.
//!
//! ## Motivation
//!
//! Unsigned arithmetic at the representable boundary demands explicit
//! semantics. These modules provide two complementary conventions, an
//! explicit success/failure outcome and a saturating value-only form,
//! built on shared predicates so the two can never disagree.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod div_result;
pub mod error;
pub mod ops;
pub mod word;
