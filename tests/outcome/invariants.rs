use outcome_rail::{Error, InvariantViolation, Outcome};

#[test]
fn from_parts_accepts_consistent_states() {
    assert_eq!(Outcome::from_parts(Some(1), []), Ok(Outcome::success(1)));
    assert_eq!(
        Outcome::<i32>::from_parts(None, [Error::empty("A")]),
        Ok(Outcome::failure(Error::empty("A")))
    );
}

#[test]
fn from_parts_rejects_success_with_errors() {
    let violation = Outcome::from_parts(Some(1), [Error::empty("A"), Error::empty("B")]).unwrap_err();
    assert_eq!(violation, InvariantViolation::SuccessWithErrors { count: 2 });
}

#[test]
fn from_parts_rejects_failure_without_errors() {
    let violation = Outcome::<i32>::from_parts(None, []).unwrap_err();
    assert_eq!(violation, InvariantViolation::FailureWithoutErrors);
}

#[test]
fn try_failure_many_rejects_empty_collection() {
    assert_eq!(
        Outcome::<()>::try_failure_many(Vec::new()),
        Err(InvariantViolation::FailureWithoutErrors)
    );
}

#[test]
#[should_panic(expected = "a failed outcome must carry at least one error")]
fn failure_many_panics_on_empty_collection() {
    let _ = Outcome::<()>::failure_many(Vec::new());
}

#[test]
#[should_panic(expected = "cannot access the value of a failed outcome [User.NotFound]")]
fn value_panics_on_failure() {
    let outcome = Outcome::<i32>::failure(Error::not_found("User"));
    let _ = outcome.value();
}

#[test]
#[should_panic(expected = "cannot access the value of a failed outcome")]
fn into_value_panics_on_failure() {
    let _ = Outcome::<i32>::failure(Error::empty("A")).into_value();
}
