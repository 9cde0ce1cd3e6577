//! Input splitting for the fixed `YYYY-MM-DD[ HH:MM:SS]` layout
//!
//! Every formatting function starts from the same guard: empty and
//! zero-sentinel inputs mean "no date" and format to an empty string, and
//! anything else is split into numeric fields without bounds checking.
//! Malformed input therefore flows through and produces unspecified output
//! rather than an error; callers wanting a hard check can run
//! [`crate::validate::validate`] first.

/// Zero-date sentinel stored by some systems to mean "no date set"
pub const ZERO_DATE: &str = "0000-00-00";

/// Zero-datetime sentinel, the datetime form of [`ZERO_DATE`]
pub const ZERO_DATETIME: &str = "0000-00-00 00:00:00";

/// Numeric fields split out of a date or datetime string
///
/// `has_time` records whether the input carried a time part at all; when it
/// is `false` the hour/minute/second fields are defaulted zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTimeFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub has_time: bool,
}

/// Check whether an input means "no date"
///
/// True for the empty string and for both zero sentinels.
pub fn is_no_date(input: &str) -> bool {
    input.is_empty() || input == ZERO_DATE || input == ZERO_DATETIME
}

/// Split a date or datetime string into its numeric fields
///
/// # Arguments
/// * `input` - Date string in `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS` layout
///
/// # Returns
/// * `Option<DateTimeFields>` - `None` for empty/sentinel input, otherwise
///   the split fields with absent time components defaulted to zero
///
/// Fields are parsed leniently: a missing or non-numeric field becomes `0`,
/// and no range check is applied to any field.
pub fn split_fields(input: &str) -> Option<DateTimeFields> {
    if is_no_date(input) {
        return None;
    }

    let mut parts = input.splitn(2, ' ');
    let date_part = parts.next().unwrap_or_default();
    let time_part = parts.next();

    let mut date_fields = date_part.splitn(3, '-');
    let year = date_fields.next().and_then(|f| f.parse().ok()).unwrap_or(0);
    let month = field(date_fields.next());
    let day = field(date_fields.next());

    let (hour, minute, second) = match time_part {
        Some(time) => {
            let mut time_fields = time.splitn(3, ':');
            (
                field(time_fields.next()),
                field(time_fields.next()),
                field(time_fields.next()),
            )
        }
        None => (0, 0, 0),
    };

    Some(DateTimeFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        has_time: time_part.is_some(),
    })
}

fn field(raw: Option<&str>) -> u32 {
    raw.and_then(|f| f.parse().ok()).unwrap_or(0)
}
