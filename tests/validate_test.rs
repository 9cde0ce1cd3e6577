use datefmt::validate::*;

#[test]
fn test_no_date_inputs_are_valid() {
    assert_eq!(validate(""), Ok(()));
    assert_eq!(validate("0000-00-00"), Ok(()));
    assert_eq!(validate("0000-00-00 00:00:00"), Ok(()));
}

#[test]
fn test_well_formed_inputs_are_valid() {
    assert_eq!(validate("2011-01-02"), Ok(()));
    assert_eq!(validate("2011-01-02 03:04:05"), Ok(()));
    assert_eq!(validate("2024-02-29"), Ok(())); // leap day
    assert_eq!(validate("1956-12-22 23:59:59"), Ok(()));
}

#[test]
fn test_wrong_shape_is_malformed() {
    for input in [
        "2011-1-02",
        "2011/01/02",
        "20110102",
        "2011-01",
        "2011-01-02-03",
        "2011-01-02 3:04:05",
        "2011-01-02 03:04",
        "2011-01-02  03:04:05",
        "abcd-ef-gh",
    ] {
        assert_eq!(
            validate(input),
            Err(DateInputError::Malformed(input.to_string()))
        );
    }
}

#[test]
fn test_calendar_ranges_are_enforced() {
    assert_eq!(
        validate("2011-13-02"),
        Err(DateInputError::OutOfRange {
            field: "month",
            value: 13
        })
    );
    assert_eq!(
        validate("2011-01-32"),
        Err(DateInputError::OutOfRange {
            field: "day",
            value: 32
        })
    );
    // 2023 is not a leap year
    assert_eq!(
        validate("2023-02-29"),
        Err(DateInputError::OutOfRange {
            field: "day",
            value: 29
        })
    );
    assert_eq!(
        validate("2011-01-02 24:00:00"),
        Err(DateInputError::OutOfRange {
            field: "hour",
            value: 24
        })
    );
    assert_eq!(
        validate("2011-01-02 03:60:00"),
        Err(DateInputError::OutOfRange {
            field: "minute",
            value: 60
        })
    );
    assert_eq!(
        validate("2011-01-02 03:04:60"),
        Err(DateInputError::OutOfRange {
            field: "second",
            value: 60
        })
    );
}

#[test]
fn test_lenient_functions_still_accept_what_validate_rejects() {
    // validate is opt-in: the formatting functions keep producing output
    // for input it would reject.
    assert!(validate("2011-13-02").is_err());
    assert!(!datefmt::format_date_cms_publishdate("2011-13-02").is_empty());
}
