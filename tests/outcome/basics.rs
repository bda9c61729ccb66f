use outcome_rail::{success, Error, ErrorVec, Outcome};

const NOT_FOUND: Error = Error::from_static("User.NotFound", "User was not found.");

#[test]
fn success_exposes_value_and_no_errors() {
    let outcome = Outcome::success(5);

    assert!(outcome.is_success());
    assert!(!outcome.is_failure());
    assert!(outcome.errors().is_empty());
    assert_eq!(*outcome.value(), 5);
    assert_eq!(outcome.try_value(), Ok(&5));
}

#[test]
fn unit_is_the_untyped_success() {
    let outcome: Outcome = Outcome::unit();
    assert!(outcome.is_success());
    assert_eq!(outcome, success(()));
}

#[test]
fn failure_keeps_errors_in_order() {
    let outcome = Outcome::<i32>::failure_many([Error::empty("A"), Error::empty("B"), Error::empty("A")]);
    let codes: Vec<_> = outcome.errors().iter().map(Error::code).collect();

    assert!(outcome.is_failure());
    assert_eq!(codes, ["A.Empty", "B.Empty", "A.Empty"]);
}

#[test]
fn value_or_default_never_panics() {
    let failed = Outcome::<String>::failure(NOT_FOUND);
    assert_eq!(failed.value_or_default(), "");
    assert_eq!(failed.into_value_or_default(), "");
    assert_eq!(Outcome::success(3).value_or_default(), 3);
}

#[test]
fn equality_compares_state_errors_and_value() {
    assert_eq!(Outcome::success(1), Outcome::success(1));
    assert_ne!(Outcome::success(1), Outcome::success(2));
    assert_eq!(Outcome::<i32>::failure(NOT_FOUND), Outcome::<i32>::failure(NOT_FOUND));
    assert_ne!(Outcome::<i32>::failure(NOT_FOUND), Outcome::<i32>::failure(Error::empty("User")));
    assert_ne!(Outcome::success(1), Outcome::failure(NOT_FOUND));
}

#[test]
fn conversions_to_and_from_std_types() {
    assert_eq!(Outcome::success(1).ok(), Some(1));
    assert_eq!(Outcome::<i32>::failure(NOT_FOUND).ok(), None);

    let result: Result<i32, ErrorVec<Error>> = Outcome::<i32>::failure(NOT_FOUND).into();
    assert_eq!(result.unwrap_err().as_slice(), [NOT_FOUND]);

    let from_err: Outcome<i32> = Err(NOT_FOUND).into();
    assert_eq!(from_err.errors(), [NOT_FOUND]);
    assert_eq!(Outcome::from_result(Ok::<_, Error>(4)).into_value(), 4);

    assert_eq!(Outcome::from_option(None::<i32>, NOT_FOUND).errors(), [NOT_FOUND]);
    assert_eq!(Outcome::from_option(Some(2), NOT_FOUND).into_value(), 2);
}

#[test]
fn from_result_or_drops_technical_detail() {
    let io: Result<(), std::io::Error> = Err(std::io::Error::other("socket closed by peer"));
    let outcome = Outcome::from_result_or(io, NOT_FOUND);

    assert_eq!(outcome.errors(), [NOT_FOUND]);
    assert!(!format!("{outcome:?}").contains("socket closed"));
}

#[test]
fn discard_and_as_ref_keep_the_state() {
    let typed = Outcome::success(String::from("x"));
    assert_eq!(typed.as_ref().map(String::len).into_value(), 1);
    assert!(typed.discard().is_success());

    let failed = Outcome::<String>::failure(NOT_FOUND);
    assert_eq!(failed.discard().errors(), [NOT_FOUND]);
}

#[test]
fn into_errors_is_empty_on_success() {
    assert!(Outcome::success(1).into_errors().is_empty());
    assert_eq!(Outcome::<i32>::failure(NOT_FOUND).into_errors().len(), 1);
}

#[test]
fn debug_shows_the_track() {
    assert_eq!(format!("{:?}", Outcome::success(1)), "Success(1)");
    assert!(format!("{:?}", Outcome::<i32>::failure(NOT_FOUND)).starts_with("Failure(["));
}

#[test]
fn outcome_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Outcome<String>>();
    assert_send_sync::<Error>();
}
