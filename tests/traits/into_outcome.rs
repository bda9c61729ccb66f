use outcome_rail::{success, IntoOutcome, Outcome};

#[test]
fn into_outcome_matches_success() {
    assert_eq!(5_i32.into_outcome(), success(5));
    assert_eq!(vec![1, 2].into_outcome().into_value(), [1, 2]);
}

#[test]
fn into_outcome_feeds_a_chain() {
    let outcome: Outcome<usize> = "ada".into_outcome().map(str::len);
    assert_eq!(outcome.into_value(), 3);
}
