use outcome_rail::{combine, success, Error, Outcome};

#[test]
fn accepts_mixed_value_types_and_trailing_comma() {
    let combined = combine![success(1_u64), success("text"), success(vec![1.5]),];
    assert!(combined.is_success());
}

#[test]
fn borrows_its_inputs() {
    let id = success(7);
    let name = Outcome::<String>::failure(Error::empty("Name"));

    let combined = combine![id, name];

    assert_eq!(combined.errors(), [Error::empty("Name")]);
    assert_eq!(id.into_value(), 7);
    assert!(name.is_failure());
}

#[test]
fn single_input_mirrors_its_state() {
    let failed = combine![Outcome::<()>::failure(Error::conflict("User"))];
    assert_eq!(failed.errors(), [Error::conflict("User")]);
}

#[test]
fn rules_over_the_same_value_all_run() {
    let raw = "";
    let combined = combine![
        success(raw).ensure(|v| !v.is_empty(), Error::empty("Code")),
        success(raw).ensure(|v| v.len() == 6, Error::invalid_format("Code")),
        success(raw).ensure(|v| v.chars().all(|c| c.is_ascii_digit()), Error::invalid_value("Code")),
    ];

    let codes: Vec<_> = combined.errors().iter().map(Error::code).collect();
    assert_eq!(codes, ["Code.Empty", "Code.InvalidFormat"]);
}
