use outcome_rail::{Error, InvalidAccess, InvariantViolation, Outcome};

#[test]
fn invariant_violation_messages_name_the_rule() {
    let with_errors = InvariantViolation::SuccessWithErrors { count: 2 };
    assert!(with_errors.to_string().contains("2 given"));

    let without = InvariantViolation::FailureWithoutErrors;
    assert!(without.to_string().contains("at least one error"));
}

#[test]
fn invalid_access_lists_the_failure_codes() {
    let outcome = Outcome::<u8>::failure_many([Error::empty("A"), Error::invalid_format("B")]);
    let access: InvalidAccess = outcome.try_value().unwrap_err();

    assert_eq!(access.errors(), outcome.errors());
    assert!(access.to_string().contains("[A.Empty, B.InvalidFormat]"));
}
