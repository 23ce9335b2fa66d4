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

//! # Arithmetic Operation Traits
//!
//! Unified, by-value operation traits for unsigned integer primitives.
//! This module groups the four operation families around one discipline:
//! decide the failure case by comparing against a precomputed bound,
//! never by performing an operation that could itself wrap.
//!
//! ## Submodules
//!
//! - `wrap_predicates`: `AddWouldWrap`, `SubWouldWrap`, `MulWouldWrap`:
//!   pure boolean tests answering "would this operation leave the
//!   representable range?" without computing it.
//! - `checked_arithmetic`: `AddChecked`, `SubChecked`, `MulChecked`,
//!   `DivChecked` returning `Result<T, ArithError>` (or a
//!   `DivResult<T>` for full division).
//! - `bounded_arithmetic`: `AddBounded`, `SubBounded`, `MulBounded`,
//!   `DivBounded` clamping failures to a documented sentinel instead of
//!   signaling.
//! - `rounding_division`: Floor, ceiling, and round-half-up division in
//!   checked and bounded forms, built on shared unchecked kernels.
//!
//! ## Motivation
//!
//! Callers differ in recovery policy: some must branch on the outcome,
//! others accept saturation. Keeping both families atop the same
//! predicates guarantees they can never disagree about which inputs fail.
//!
//! The method names deliberately avoid the spellings of the inherent
//! primitive methods (`checked_add`, `div_ceil`, ...). An inherent method
//! always wins name resolution over a trait method, so reusing those
//! names would let `a.checked_add(b)` silently bypass these traits.
//!
//! Refer to each submodule for examples and trait lists.

pub mod bounded_arithmetic;
pub mod checked_arithmetic;
pub mod rounding_division;
pub mod wrap_predicates;
