#![cfg(test)]

use std::hash::{BuildHasher, RandomState};
use std::num::ParseIntError;

use super::*;
use crate::outcome::{Outcome, Status, Truthy};
use crate::util::panic::assert_panics;

#[derive(Debug, Clone, Default, derive_more::Display, derive_more::Error)]
#[display("entry missing")]
struct EntryMissing;

#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("invalid digit: {digit}")]
struct InvalidDigit {
    digit: char,
}

#[test]
fn test_default_is_failed() {
    let outcome = TypedOutcome::<i32, EntryMissing>::default();

    assert!(outcome.is_failed(), "A default TypedOutcome should be failed.");
    assert_eq!(outcome.value(), None);
    assert_eq!(
        outcome.error().map(ToString::to_string).as_deref(),
        Some("entry missing"),
        "The default failure should hold a real default error value."
    );
}

#[test]
fn test_round_trips() {
    let outcome = TypedOutcome::<i32, EntryMissing>::ok(5);
    assert!(outcome.is_ok());
    assert_eq!(outcome.value(), Some(&5));
    assert!(outcome.error().is_none());
    assert_eq!(outcome.into_option(), Some(5));

    let outcome = TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'x' });
    assert!(outcome.is_failed());
    assert_eq!(outcome.value(), None);
    assert_eq!(
        outcome.error().map(|e| e.digit),
        Some('x'),
        "The typed error should be accessible with its concrete type."
    );
    assert_eq!(outcome.into_error().map(|e| e.digit), Some('x'));
}

#[test]
fn test_equality() {
    assert_eq!(
        TypedOutcome::<i32, EntryMissing>::ok(5),
        TypedOutcome::<i32, EntryMissing>::ok(5)
    );
    assert_ne!(
        TypedOutcome::<i32, EntryMissing>::ok(5),
        TypedOutcome::<i32, EntryMissing>::ok(6)
    );
    assert_eq!(
        TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'x' }),
        TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'y' }),
        "Any two failures should be equal, whatever their errors hold."
    );
    assert_ne!(
        TypedOutcome::<i32, EntryMissing>::ok(5),
        TypedOutcome::<i32, _>::failed(EntryMissing)
    );

    assert_eq!(TypedOutcome::<i32, EntryMissing>::ok(5), 5);
    assert_ne!(TypedOutcome::<i32, _>::failed(EntryMissing), 5);

    assert_eq!(
        TypedOutcome::<i32, EntryMissing>::ok(5),
        Outcome::ok(5),
        "Payload arities sharing T should compare value-aware."
    );
}

#[test]
fn test_cross_arity_truthiness() {
    let parsed = TypedOutcome::<i32, EntryMissing>::ok(5);

    assert!(parsed.eq_ok(&true));
    assert_eq!(parsed.clone() & Status::ok(), true);
    assert_eq!(parsed.clone() ^ Outcome::ok(6), false);
    assert_eq!(TypedOutcome::<i32, _>::failed(EntryMissing) | true, true);
    assert_eq!(!parsed, false);
}

#[test]
fn test_hash() {
    let state = RandomState::new();

    assert_eq!(
        state.hash_one(TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'x' })),
        state.hash_one(TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'y' })),
        "All failures should hash identically, matching the equality contract."
    );
    assert_eq!(
        state.hash_one(TypedOutcome::<i32, EntryMissing>::ok(5)),
        state.hash_one(TypedOutcome::<i32, EntryMissing>::ok(5))
    );
}

#[test]
fn test_fold_map_and_map_err() {
    let rendered = TypedOutcome::<i32, EntryMissing>::ok(5)
        .fold(|n| n.to_string(), |e| e.to_string());
    assert_eq!(rendered, "5");

    let rendered = TypedOutcome::<i32, _>::failed(EntryMissing)
        .fold(|n| n.to_string(), |e| e.to_string());
    assert_eq!(rendered, "entry missing");

    assert_eq!(TypedOutcome::<i32, EntryMissing>::ok(5).map(|n| n * 2), 10);

    let remapped = TypedOutcome::<i32, _>::failed(InvalidDigit { digit: '7' })
        .map_err(|_| EntryMissing);
    assert!(remapped.is_failed());

    let mapped = TypedOutcome::<i32, EntryMissing>::ok(5).map_err(|e| e);
    assert_eq!(mapped, 5, "map_err should pass an ok value through untouched.");
}

#[test]
fn test_result_bridges() {
    let parsed: TypedOutcome<i32, ParseIntError> = "17".parse::<i32>().into();
    assert_eq!(parsed, 17);

    let parsed: TypedOutcome<i32, ParseIntError> = "seventeen".parse::<i32>().into();
    assert!(parsed.is_failed());

    let result: Result<i32, ParseIntError> = parsed.into();
    assert!(result.is_err(), "The typed error should survive the round trip.");
}

#[test]
fn test_widening_conversions() {
    let typed = TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'x' });

    let widened = Outcome::from(typed.clone());
    assert!(widened.is_failed());
    assert_eq!(
        widened.error().map(ToString::to_string).as_deref(),
        Some("invalid digit: x"),
        "Widening should preserve the error object behind the dynamic handle."
    );

    let status = Status::from(typed);
    assert_eq!(status.to_string(), "Error(InvalidDigit): invalid digit: x");

    let ok = TypedOutcome::<i32, EntryMissing>::ok(5);
    assert_eq!(Outcome::from(ok.clone()), 5);
    assert!(Status::from(ok).is_ok());
}

#[test]
fn test_iteration() {
    let collected: Vec<i32> = TypedOutcome::<i32, EntryMissing>::ok(5).into_iter().collect();
    assert_eq!(collected, [5]);

    let collected: Vec<i32> = TypedOutcome::<i32, _>::failed(EntryMissing)
        .into_iter()
        .collect();
    assert_eq!(collected, []);

    let outcome = TypedOutcome::<i32, EntryMissing>::ok(5);
    assert_eq!(outcome.iter().next(), Some(&5));
    assert_eq!((&outcome).into_iter().len(), 1);
}

#[test]
fn test_throw() {
    assert_eq!(TypedOutcome::<i32, EntryMissing>::ok(5).throw(), 5);

    assert_panics!({ TypedOutcome::<i32, _>::failed(EntryMissing).throw() });
}

#[test]
fn test_display() {
    assert_eq!(TypedOutcome::<i32, EntryMissing>::ok(5).to_string(), "Ok(5)");
    assert_eq!(
        TypedOutcome::<i32, _>::failed(InvalidDigit { digit: 'x' }).to_string(),
        "Error(InvalidDigit): invalid digit: x"
    );
}
