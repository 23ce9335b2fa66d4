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

//! # Fender Core
//!
//! Overflow-aware arithmetic primitives over unsigned machine-word
//! integers. Every operation either reports or clamps away the cases
//! where the mathematically exact result is not representable, so callers
//! never have to reason about silent wraparound.
//!
//! ## Modules
//!
//! - `num`: Wrap predicates ("would this operation overflow?"), checked
//!   operations (`Result<T, ArithError>`), bounded operations that
//!   saturate to a documented sentinel instead of failing, and integer
//!   division with floor/ceiling/round-half-up rounding policies. Also
//!   home to the `ArithError` outcome tag, the `DivResult` quotient/
//!   remainder pair, and the `UnsignedWord` aggregate trait for generic
//!   consumers.
//!
//! ## Purpose
//!
//! Arithmetic on untrusted or boundary-sized operands is where silent
//! overflow bugs live. These primitives follow a strict "check before
//! computing" discipline: the failure condition is decided by comparing
//! against a precomputed bound, never by performing an operation that
//! could itself wrap. The checked and bounded families are guaranteed to
//! agree, and the rounding-division entry points share one kernel so the
//! two families can never diverge.
//!
//! Refer to each module for detailed APIs and examples.

pub mod num;
