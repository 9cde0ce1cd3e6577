//! Calendar fact helpers
//!
//! Small pure functions deriving weekday, month name and ordinal suffix from
//! numeric date fields. No date library is involved: out-of-range fields must
//! degrade to blank lookups instead of parse errors.

/// Full English weekday names, Sunday first
const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full English month names
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day-of-week index for a calendar date, 0 = Sunday
///
/// Sakamoto's congruence. Returns `None` when the month is outside `1..=12`;
/// an out-of-range day is not rejected and simply shifts the result.
pub fn day_of_week(year: i32, month: u32, day: u32) -> Option<u32> {
    if !(1..=12).contains(&month) {
        return None;
    }
    const OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let dow = (y + y / 4 - y / 100 + y / 400 + OFFSETS[(month - 1) as usize] + day as i32)
        .rem_euclid(7);
    Some(dow as u32)
}

/// Full weekday name for a 0-based index (0 = Sunday), blank if out of range
pub fn weekday_name(dow: u32) -> &'static str {
    WEEKDAY_NAMES.get(dow as usize).copied().unwrap_or_default()
}

/// Full month name for a 1-based month number, blank if out of range
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// English ordinal suffix for a day number
///
/// 1, 21, 31 take `st`; 2, 22 take `nd`; 3, 23 take `rd`; everything else
/// takes `th`, including 11, 12 and 13.
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11 | 12 | 13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Gregorian leap year test
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a month, 0 for an out-of-range month number
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
