use datefmt::calendar::*;

#[test]
fn test_ordinal_suffixes() {
    assert_eq!(ordinal_suffix(1), "st");
    assert_eq!(ordinal_suffix(2), "nd");
    assert_eq!(ordinal_suffix(3), "rd");
    assert_eq!(ordinal_suffix(4), "th");
    assert_eq!(ordinal_suffix(11), "th");
    assert_eq!(ordinal_suffix(12), "th");
    assert_eq!(ordinal_suffix(13), "th");
    assert_eq!(ordinal_suffix(21), "st");
    assert_eq!(ordinal_suffix(22), "nd");
    assert_eq!(ordinal_suffix(23), "rd");
    assert_eq!(ordinal_suffix(31), "st");
}

#[test]
fn test_day_of_week() {
    assert_eq!(day_of_week(2025, 1, 13), Some(1)); // Monday
    assert_eq!(day_of_week(2023, 12, 22), Some(5)); // Friday
    assert_eq!(day_of_week(1956, 12, 22), Some(6)); // Saturday
    assert_eq!(day_of_week(2003, 6, 3), Some(2)); // Tuesday
    assert_eq!(day_of_week(2000, 2, 29), Some(2)); // leap day, Tuesday
}

#[test]
fn test_day_of_week_rejects_bad_month() {
    assert_eq!(day_of_week(2025, 0, 1), None);
    assert_eq!(day_of_week(2025, 13, 1), None);
}

#[test]
fn test_weekday_names() {
    assert_eq!(weekday_name(0), "Sunday");
    assert_eq!(weekday_name(6), "Saturday");
    assert_eq!(weekday_name(7), "");
}

#[test]
fn test_month_names() {
    assert_eq!(month_name(1), "January");
    assert_eq!(month_name(6), "June");
    assert_eq!(month_name(12), "December");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
}

#[test]
fn test_is_leap_year() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000)); // divisible by 400
    assert!(!is_leap_year(1900)); // century, not divisible by 400
    assert!(!is_leap_year(2023));
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(2023, 1), 31);
    assert_eq!(days_in_month(2023, 4), 30);
    assert_eq!(days_in_month(2023, 2), 28);
    assert_eq!(days_in_month(2024, 2), 29);
    assert_eq!(days_in_month(2023, 0), 0);
    assert_eq!(days_in_month(2023, 13), 0);
}
