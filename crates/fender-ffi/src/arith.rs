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

//! # Foreign Function Interface (FFI) for Fender Arithmetic
//!
//! C-compatible wrappers over the `usize` instantiation of every fender
//! operation. Checked operations follow the classic C convention of a
//! status code plus an out-parameter; bounded operations and wrap
//! predicates return plain values.
//!
//! ## Safety
//!
//! Functions taking an out-pointer are `unsafe` and **panic** on `NULL`
//! (fail-fast). The pointee is written only when the returned status is
//! `FenderStatus::Ok`; on any error status it is left untouched.
//!
//! ## Exported API
//!
//! ### Wrap Predicates
//! * `fender_add_would_wrap`
//! * `fender_sub_would_wrap`
//! * `fender_mul_would_wrap`
//!
//! ### Checked Operations
//! * `fender_add_checked`
//! * `fender_sub_checked`
//! * `fender_mul_checked`
//! * `fender_div_checked`
//! * `fender_div_floor_checked`
//! * `fender_div_ceil_checked`
//! * `fender_div_round_checked`
//!
//! ### Bounded Operations
//! * `fender_add_bounded`
//! * `fender_sub_bounded`
//! * `fender_mul_bounded`
//! * `fender_div_bounded`
//! * `fender_div_floor_bounded`
//! * `fender_div_ceil_bounded`
//! * `fender_div_round_bounded`
//!
//! ### Data Structures
//! * `FenderStatus`
//! * `FenderDivResult`

use fender_core::num::{
    div_result::DivResult,
    error::ArithError,
    ops::{
        bounded_arithmetic::{AddBounded, DivBounded, MulBounded, SubBounded},
        checked_arithmetic::{AddChecked, DivChecked, MulChecked, SubChecked},
        rounding_division::{
            DivCeilBounded, DivCeilChecked, DivFloorBounded, DivFloorChecked, DivRoundBounded,
            DivRoundChecked,
        },
        wrap_predicates::{AddWouldWrap, MulWouldWrap, SubWouldWrap},
    },
};

/// A C-compatible status code for checked arithmetic operations.
///
/// `Ok` is zero so hosts can use the conventional `if (status)` error
/// check; each failure mode carries its own negative discriminant.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenderStatus {
    /// The operation succeeded and the out-parameter was written.
    Ok = 0,
    /// The result would exceed the maximum representable value.
    Overflow = -1,
    /// The result would be negative.
    Underflow = -2,
    /// The divisor was zero.
    DivisionByZero = -3,
}

impl From<ArithError> for FenderStatus {
    fn from(e: ArithError) -> Self {
        match e {
            ArithError::Overflow => Self::Overflow,
            ArithError::Underflow => Self::Underflow,
            ArithError::DivisionByZero => Self::DivisionByZero,
        }
    }
}

impl std::fmt::Display for FenderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "ok"),
            Self::Overflow => write!(f, "overflow"),
            Self::Underflow => write!(f, "underflow"),
            Self::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

/// A C-compatible quotient/remainder pair for full division.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenderDivResult {
    pub quot: usize,
    pub rem: usize,
}

impl From<DivResult<usize>> for FenderDivResult {
    fn from(res: DivResult<usize>) -> Self {
        Self {
            quot: res.quot,
            rem: res.rem,
        }
    }
}

impl From<FenderDivResult> for DivResult<usize> {
    fn from(res: FenderDivResult) -> Self {
        DivResult::new(res.quot, res.rem)
    }
}

impl std::fmt::Display for FenderDivResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} rem {}", self.quot, self.rem)
    }
}

/// Tests whether `a + b` would exceed the maximum machine-word value.
#[no_mangle]
pub extern "C" fn fender_add_would_wrap(a: usize, b: usize) -> bool {
    a.add_would_wrap(b)
}

/// Tests whether `a - b` would be negative.
#[no_mangle]
pub extern "C" fn fender_sub_would_wrap(a: usize, b: usize) -> bool {
    a.sub_would_wrap(b)
}

/// Tests whether `a * b` would exceed the maximum machine-word value.
#[no_mangle]
pub extern "C" fn fender_mul_would_wrap(a: usize, b: usize) -> bool {
    a.mul_would_wrap(b)
}

/// Adds `a` and `b`, writing the sum through `ret_res` on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_add_checked(a: usize, b: usize, ret_res: *mut usize) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_add_checked` with null pointer"
    );
    match a.add_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Subtracts `b` from `a`, writing the difference through `ret_res` on
/// success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_sub_checked(a: usize, b: usize, ret_res: *mut usize) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_sub_checked` with null pointer"
    );
    match a.sub_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Multiplies `a` by `b`, writing the product through `ret_res` on
/// success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_mul_checked(a: usize, b: usize, ret_res: *mut usize) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_mul_checked` with null pointer"
    );
    match a.mul_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Divides `a` by `b`, writing the quotient/remainder pair through
/// `ret_res` on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_div_checked(
    a: usize,
    b: usize,
    ret_res: *mut FenderDivResult,
) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_div_checked` with null pointer"
    );
    match a.div_checked(b) {
        Ok(res) => {
            *ret_res = res.into();
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Divides `a` by `b` rounding down, writing the quotient through
/// `ret_res` on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_div_floor_checked(
    a: usize,
    b: usize,
    ret_res: *mut usize,
) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_div_floor_checked` with null pointer"
    );
    match a.div_floor_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Divides `a` by `b` rounding up, writing the quotient through
/// `ret_res` on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_div_ceil_checked(
    a: usize,
    b: usize,
    ret_res: *mut usize,
) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_div_ceil_checked` with null pointer"
    );
    match a.div_ceil_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Divides `a` by `b` rounding to nearest (ties up), writing the
/// quotient through `ret_res` on success.
///
/// # Safety
///
/// This function is unsafe because it dereferences a raw pointer.
/// The caller must ensure that `ret_res` points to valid, writable
/// memory. Passing `NULL` aborts the process.
#[no_mangle]
pub unsafe extern "C" fn fender_div_round_checked(
    a: usize,
    b: usize,
    ret_res: *mut usize,
) -> FenderStatus {
    assert!(
        !ret_res.is_null(),
        "called `fender_div_round_checked` with null pointer"
    );
    match a.div_round_checked(b) {
        Ok(res) => {
            *ret_res = res;
            FenderStatus::Ok
        }
        Err(e) => e.into(),
    }
}

/// Adds `a` and `b`, clamping to the maximum machine-word value on
/// overflow.
#[no_mangle]
pub extern "C" fn fender_add_bounded(a: usize, b: usize) -> usize {
    a.add_bounded(b)
}

/// Subtracts `b` from `a`, clamping to zero on underflow.
#[no_mangle]
pub extern "C" fn fender_sub_bounded(a: usize, b: usize) -> usize {
    a.sub_bounded(b)
}

/// Multiplies `a` by `b`, clamping to the maximum machine-word value on
/// overflow.
#[no_mangle]
pub extern "C" fn fender_mul_bounded(a: usize, b: usize) -> usize {
    a.mul_bounded(b)
}

/// Divides `a` by `b`, returning the `(MAX, 0)` sentinel pair when the
/// divisor is zero.
#[no_mangle]
pub extern "C" fn fender_div_bounded(a: usize, b: usize) -> FenderDivResult {
    a.div_bounded(b).into()
}

/// Divides `a` by `b` rounding down, returning the maximum machine-word
/// value when the divisor is zero.
#[no_mangle]
pub extern "C" fn fender_div_floor_bounded(a: usize, b: usize) -> usize {
    a.div_floor_bounded(b)
}

/// Divides `a` by `b` rounding up, returning the maximum machine-word
/// value when the divisor is zero.
#[no_mangle]
pub extern "C" fn fender_div_ceil_bounded(a: usize, b: usize) -> usize {
    a.div_ceil_bounded(b)
}

/// Divides `a` by `b` rounding to nearest (ties up), returning the
/// maximum machine-word value when the divisor is zero.
#[no_mangle]
pub extern "C" fn fender_div_round_bounded(a: usize, b: usize) -> usize {
    a.div_round_bounded(b)
}
