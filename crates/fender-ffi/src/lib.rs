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

//! # Fender FFI
//!
//! **C-Compatible Bindings for the Fender Checked-Arithmetic Library.**
//!
//! This crate exposes the full overflow-aware operation surface over the
//! machine word (`usize`, C's `size_t`) to C, C++, Python, C#, and Java
//! hosts. Every binding is a plain, stateless function call; there are no
//! handles and no lifecycle to manage.
//!
//! ## Core Design Principles
//!
//! 1.  **Status + Out-Parameter**: Checked operations return a
//!     `FenderStatus` code and write their result through a pointer
//!     supplied by the caller. The pointee is written only when the
//!     status is `Ok`.
//! 2.  **Plain Value Returns**: Bounded operations and wrap predicates
//!     cannot fail, so they return their result directly.
//! 3.  **Fail-Fast Safety**: To protect the integrity of the host
//!     application, passing a `NULL` out-pointer results in an immediate
//!     process abort (panic) rather than undefined behavior or stack
//!     unwinding.

pub mod arith;
