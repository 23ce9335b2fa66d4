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

//! Property-based tests for the overflow-aware arithmetic families.
//!
//! These verify the universal guarantees across randomized inputs:
//! predicate/checked equivalence, bounded/checked agreement, the division
//! identity, and the three rounding policies checked against widening
//! arithmetic. The standard library's own `checked_*`/`saturating_*`
//! methods serve as an independent oracle wherever one exists.

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
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    // --- Predicate / checked equivalence ---

    #[test]
    fn prop_add_predicate_matches_checked(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.add_would_wrap(b), a.add_checked(b).is_err());
        // Independent oracle: the intrinsic checked addition
        prop_assert_eq!(a.add_would_wrap(b), a.checked_add(b).is_none());
    }

    #[test]
    fn prop_sub_predicate_matches_checked(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.sub_would_wrap(b), a.sub_checked(b).is_err());
        prop_assert_eq!(a.sub_would_wrap(b), a.checked_sub(b).is_none());
    }

    #[test]
    fn prop_mul_predicate_matches_checked(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.mul_would_wrap(b), a.mul_checked(b).is_err());
        prop_assert_eq!(a.mul_would_wrap(b), a.checked_mul(b).is_none());
    }

    // --- Checked success values are exact ---

    #[test]
    fn prop_checked_values_match_intrinsics(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.add_checked(b).ok(), a.checked_add(b));
        prop_assert_eq!(a.sub_checked(b).ok(), a.checked_sub(b));
        prop_assert_eq!(a.mul_checked(b).ok(), a.checked_mul(b));
    }

    #[test]
    fn prop_checked_errors_are_specific(a in any::<u64>(), b in any::<u64>()) {
        if let Err(e) = a.add_checked(b) {
            prop_assert_eq!(e, ArithError::Overflow);
        }
        if let Err(e) = a.sub_checked(b) {
            prop_assert_eq!(e, ArithError::Underflow);
        }
        if let Err(e) = a.mul_checked(b) {
            prop_assert_eq!(e, ArithError::Overflow);
        }
    }

    // --- Bounded family: checked value on success, sentinel on failure ---

    #[test]
    fn prop_bounded_agrees_with_checked(a in any::<u64>(), b in any::<u64>()) {
        match a.add_checked(b) {
            Ok(sum) => prop_assert_eq!(a.add_bounded(b), sum),
            Err(_) => prop_assert_eq!(a.add_bounded(b), u64::MAX),
        }
        match a.sub_checked(b) {
            Ok(diff) => prop_assert_eq!(a.sub_bounded(b), diff),
            Err(_) => prop_assert_eq!(a.sub_bounded(b), 0),
        }
        match a.mul_checked(b) {
            Ok(prod) => prop_assert_eq!(a.mul_bounded(b), prod),
            Err(_) => prop_assert_eq!(a.mul_bounded(b), u64::MAX),
        }
    }

    #[test]
    fn prop_bounded_matches_saturating_intrinsics(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.add_bounded(b), a.saturating_add(b));
        prop_assert_eq!(a.sub_bounded(b), a.saturating_sub(b));
        prop_assert_eq!(a.mul_bounded(b), a.saturating_mul(b));
    }

    // --- Full division ---

    #[test]
    fn prop_div_identity(a in any::<u64>(), b in 1..=u64::MAX) {
        let res = a.div_checked(b).unwrap();
        prop_assert_eq!(res.quot * b + res.rem, a);
        prop_assert!(res.rem < b);
        prop_assert_eq!(a.div_bounded(b), res);
    }

    #[test]
    fn prop_div_by_zero(a in any::<u64>()) {
        prop_assert_eq!(a.div_checked(0), Err(ArithError::DivisionByZero));
        prop_assert_eq!(a.div_floor_checked(0), Err(ArithError::DivisionByZero));
        prop_assert_eq!(a.div_ceil_checked(0), Err(ArithError::DivisionByZero));
        prop_assert_eq!(a.div_round_checked(0), Err(ArithError::DivisionByZero));

        prop_assert_eq!(a.div_bounded(0), DivResult::new(u64::MAX, 0));
        prop_assert_eq!(a.div_floor_bounded(0), u64::MAX);
        prop_assert_eq!(a.div_ceil_bounded(0), u64::MAX);
        prop_assert_eq!(a.div_round_bounded(0), u64::MAX);
    }

    // --- Rounding policies, checked against widening arithmetic ---

    #[test]
    fn prop_div_floor_brackets_exact_quotient(a in any::<u64>(), b in 1..=u64::MAX) {
        let floor = a.div_floor_checked(b).unwrap();
        let wide_a = a as u128;
        let wide_b = b as u128;
        prop_assert!((floor as u128) * wide_b <= wide_a);
        prop_assert!((floor as u128 + 1) * wide_b > wide_a);
    }

    #[test]
    fn prop_div_ceil_is_smallest_upper(a in any::<u64>(), b in 1..=u64::MAX) {
        let ceil = a.div_ceil_checked(b).unwrap();
        let expected = ((a as u128) + (b as u128) - 1) / (b as u128);
        prop_assert_eq!(ceil as u128, expected);
    }

    #[test]
    fn prop_div_round_half_up(a in any::<u64>(), b in 1..=u64::MAX) {
        let round = a.div_round_checked(b).unwrap();
        let quot = a / b;
        let rem = a % b;
        // Round-half-up: the quotient bumps exactly when twice the
        // remainder reaches the divisor.
        let expected = quot as u128 + (2 * rem as u128 >= b as u128) as u128;
        prop_assert_eq!(round as u128, expected);
    }

    #[test]
    fn prop_rounding_order(a in any::<u64>(), b in 1..=u64::MAX) {
        let floor = a.div_floor_checked(b).unwrap();
        let round = a.div_round_checked(b).unwrap();
        let ceil = a.div_ceil_checked(b).unwrap();
        prop_assert!(floor <= round);
        prop_assert!(round <= ceil);
        prop_assert!(ceil - floor <= 1);
        prop_assert!(ceil <= a.max(1));
    }

    #[test]
    fn prop_rounding_families_agree(a in any::<u64>(), b in 1..=u64::MAX) {
        prop_assert_eq!(a.div_floor_checked(b).unwrap(), a.div_floor_bounded(b));
        prop_assert_eq!(a.div_ceil_checked(b).unwrap(), a.div_ceil_bounded(b));
        prop_assert_eq!(a.div_round_checked(b).unwrap(), a.div_round_bounded(b));
    }

    // --- Reassembled operands hit the tie threshold exactly ---

    #[test]
    fn prop_round_tie_goes_up(q in 0u64..1 << 32, b in 1u64..1 << 16) {
        let threshold = b / 2 + b % 2;
        let a = q * b + threshold;
        if threshold < b {
            // Remainder is exactly the half threshold: rounds up
            prop_assert_eq!(a.div_round_checked(b).unwrap(), q + 1);
        } else {
            // b == 1: no remainder is possible
            prop_assert_eq!(a.div_round_checked(b).unwrap(), a);
        }
        if threshold > 0 {
            // One below the threshold always rounds down
            let below = q * b + (threshold - 1);
            prop_assert_eq!(below.div_round_checked(b).unwrap(), q);
        }
    }

    // --- Purity: identical inputs, identical outputs, no interference ---

    #[test]
    fn prop_operations_are_pure(a in any::<u64>(), b in any::<u64>()) {
        let first = a.add_checked(b);
        let _ = a.mul_bounded(b);
        let _ = b.div_checked(a);
        let second = a.add_checked(b);
        prop_assert_eq!(first, second);
    }
}

// Narrow words make every boundary reachable by brute force.
#[test]
fn exhaustive_u8_against_intrinsics() {
    for a in 0..=u8::MAX {
        for b in 0..=u8::MAX {
            assert_eq!(a.add_would_wrap(b), a.checked_add(b).is_none());
            assert_eq!(a.sub_would_wrap(b), a.checked_sub(b).is_none());
            assert_eq!(a.mul_would_wrap(b), a.checked_mul(b).is_none());

            assert_eq!(a.add_bounded(b), a.saturating_add(b));
            assert_eq!(a.sub_bounded(b), a.saturating_sub(b));
            assert_eq!(a.mul_bounded(b), a.saturating_mul(b));

            if b == 0 {
                assert_eq!(a.div_checked(b), Err(ArithError::DivisionByZero));
                assert_eq!(a.div_bounded(b), DivResult::new(u8::MAX, 0));
            } else {
                let res = a.div_checked(b).unwrap();
                assert_eq!(res.quot, a / b);
                assert_eq!(res.rem, a % b);

                let wide = a as u16;
                let ceil = ((wide + b as u16 - 1) / b as u16) as u8;
                assert_eq!(a.div_ceil_checked(b), Ok(ceil));

                let round = (a / b) as u16 + (2 * (a % b) as u16 >= b as u16) as u16;
                assert_eq!(a.div_round_checked(b), Ok(round as u8));
            }
        }
    }
}
