use std::cell::Cell;

use outcome_rail::{success, Error, Outcome};

const OUT_OF_RANGE: Error = Error::from_static("Number.OutOfRange", "Number is out of range.");

fn failed() -> Outcome<i32> {
    Outcome::failure_many([Error::empty("A"), Error::empty("B")])
}

#[test]
fn ensure_fails_when_predicate_does_not_hold() {
    assert_eq!(success(5).ensure(|x| *x > 10, OUT_OF_RANGE).errors(), [OUT_OF_RANGE]);
    assert_eq!(success(50).ensure(|x| *x > 10, OUT_OF_RANGE).into_value(), 50);
}

#[test]
fn short_circuit_combinators_skip_their_step_on_failure() {
    let calls = Cell::new(0);
    let step = |x: i32| {
        calls.set(calls.get() + 1);
        x
    };

    let outcome = failed()
        .map(step)
        .and_then(|x| success(step(x)))
        .ensure(|_| {
            calls.set(calls.get() + 1);
            true
        }, OUT_OF_RANGE)
        .on_success(|_| calls.set(calls.get() + 1));

    assert_eq!(calls.get(), 0);
    assert_eq!(outcome.errors(), failed().errors());
}

#[test]
fn ensure_on_failure_keeps_original_errors_only() {
    let outcome = failed().ensure(|_| false, OUT_OF_RANGE);
    assert_eq!(outcome.errors().len(), 2);
    assert!(!outcome.errors().contains(&OUT_OF_RANGE));
}

#[test]
fn ensure_with_builds_error_from_value() {
    let outcome = success(3).ensure_with(|x| *x % 2 == 0, |x| Error::new("Number.Odd", format!("{x} is odd.")));
    assert_eq!(outcome.errors()[0].message(), "3 is odd.");
}

#[test]
fn map_and_and_then_chain_on_success() {
    let outcome = success("21")
        .and_then(|raw| Outcome::from_result_or(raw.parse::<i32>(), Error::invalid_format("Number")))
        .map(|n| n * 2);
    assert_eq!(outcome.into_value(), 42);
}

#[test]
fn on_success_and_on_failure_observe_without_changing() {
    let seen = Cell::new(0);
    let outcome = success(7).on_success(|x| seen.set(*x)).on_failure(|_| seen.set(-1));
    assert_eq!(seen.get(), 7);
    assert_eq!(outcome.into_value(), 7);

    let count = Cell::new(0);
    let outcome = failed().on_failure(|errors| count.set(errors.len()));
    assert_eq!(count.get(), 2);
    assert!(outcome.is_failure());
}

#[test]
fn or_else_recovers_from_failure() {
    let recovered = failed().or_else(|errors| success(errors.len() as i32));
    assert_eq!(recovered.into_value(), 2);
    assert_eq!(success(1).or_else(|_| success(9)).into_value(), 1);
}

#[test]
fn map_errors_rewrites_each_error() {
    let outcome = failed().map_errors(|error| Error::new(format!("Form.{}", error.code()), error.message().to_owned()));
    let codes: Vec<_> = outcome.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["Form.A.Empty", "Form.B.Empty"]);
}

#[test]
fn fold_collapses_both_tracks() {
    let render = |outcome: Outcome<i32>| outcome.fold(|v| v.to_string(), |errors| format!("{} errors", errors.len()));
    assert_eq!(render(success(3)), "3");
    assert_eq!(render(failed()), "2 errors");
}

#[test]
fn untyped_continuations_run_only_after_success() {
    assert_eq!(Outcome::unit().then_map(|| 4).into_value(), 4);
    assert_eq!(Outcome::unit().then(|| success("x")).into_value(), "x");

    let untouched = failed().discard().then_map(|| -> i32 { panic!("must not run") });
    assert_eq!(untouched.errors().len(), 2);
}

#[test]
fn then_carries_the_errors_without_calling_back() {
    let calls = Cell::new(0);
    let chained = failed().discard().then(|| {
        calls.set(calls.get() + 1);
        success("x")
    });

    assert_eq!(chained.errors(), [Error::empty("A"), Error::empty("B")]);
    assert_eq!(calls.get(), 0);
}
