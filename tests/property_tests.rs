//! Property-based tests for the outcome core and the wrapping combinator.
//!
//! These tests use proptest to verify classification and extraction
//! properties hold across many randomly generated payloads.

use proptest::prelude::*;
use resolute::{wrap, Handled, Outcome, Wrapped};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("handled: {0}")]
struct HandledProbe(String);

impl Handled for HandledProbe {}

prop_compose! {
    fn arbitrary_outcome()(value in any::<i64>(), failed in any::<bool>(), msg in ".*")
        -> Outcome<i64, HandledProbe>
    {
        if failed {
            Outcome::Failure(HandledProbe(msg))
        } else {
            Outcome::Success(value)
        }
    }
}

proptest! {
    #[test]
    fn returning_operation_always_yields_success(value in any::<i64>()) {
        let wrapped: Wrapped<(), i64, HandledProbe> = wrap(move |()| Ok(value));
        let outcome = wrapped.call(()).unwrap();
        prop_assert_eq!(outcome, Outcome::Success(value));
    }

    #[test]
    fn raising_operation_always_yields_failure(msg in ".*") {
        let raised_msg = msg.clone();
        let wrapped: Wrapped<(), i64, HandledProbe> =
            wrap(move |()| Err(HandledProbe(raised_msg.clone()).raised()));

        let outcome = wrapped.call(()).unwrap();
        prop_assert_eq!(outcome, Outcome::Failure(HandledProbe(msg)));
    }

    #[test]
    fn classification_is_idempotent(value in any::<i64>(), divisor in any::<i64>()) {
        let wrapped: Wrapped<(i64, i64), i64, HandledProbe> = wrap(|(a, b): (i64, i64)| {
            if b == 0 {
                return Err(HandledProbe("zero divisor".to_string()).raised());
            }
            Ok(a.wrapping_div(b))
        });

        let first = wrapped.call((value, divisor)).unwrap();
        let second = wrapped.call((value, divisor)).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn exactly_one_variant_holds(outcome in arbitrary_outcome()) {
        prop_assert!(outcome.is_success() ^ outcome.is_failure());
    }

    #[test]
    fn matching_extraction_succeeds_and_mismatched_fails(outcome in arbitrary_outcome()) {
        if outcome.is_success() {
            prop_assert!(outcome.value().is_ok());
            prop_assert!(outcome.error().is_err());
        } else {
            prop_assert!(outcome.value().is_err());
            prop_assert!(outcome.error().is_ok());
        }
    }

    #[test]
    fn fold_agrees_with_variant_tests(outcome in arbitrary_outcome()) {
        let was_success = outcome.is_success();
        let folded = outcome.fold(|_| true, |_| false);
        prop_assert_eq!(folded, was_success);
    }

    #[test]
    fn outcome_roundtrip_serialization(value in any::<i64>(), failed in any::<bool>(), msg in ".*") {
        let outcome: Outcome<i64, String> = if failed {
            Outcome::Failure(msg)
        } else {
            Outcome::Success(value)
        };

        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome<i64, String> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(outcome, deserialized);
    }
}
