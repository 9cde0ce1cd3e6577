//! Strict input validation
//!
//! The formatting functions are lenient on purpose and never reject input.
//! Callers that want to reject malformed values before formatting can run
//! [`validate`] first; it enforces the documented layout and calendar ranges
//! without changing what the lenient functions accept.

use thiserror::Error;

use crate::calendar::days_in_month;
use crate::fields::is_no_date;

/// Error raised by [`validate`] for input outside the documented layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateInputError {
    /// Wrong shape: missing fields, wrong widths, or non-digit characters
    #[error("expected `YYYY-MM-DD` or `YYYY-MM-DD HH:MM:SS`, got `{0}`")]
    Malformed(String),

    /// Numerically parsed field outside its calendar range
    #[error("{field} {value} is out of range")]
    OutOfRange { field: &'static str, value: u32 },
}

/// Check that an input is empty/sentinel or a well-formed date or datetime
///
/// # Arguments
/// * `input` - Candidate date string
///
/// # Returns
/// * `Result<(), DateInputError>` - `Ok` for "no date" input and for
///   well-formed values; an error naming the first problem otherwise
///
/// Ranges follow the civil calendar: month 1-12, day 1 through the month's
/// length (leap years respected), hour 0-23, minute and second 0-59.
pub fn validate(input: &str) -> Result<(), DateInputError> {
    if is_no_date(input) {
        return Ok(());
    }

    let malformed = || DateInputError::Malformed(input.to_string());

    let mut parts = input.splitn(2, ' ');
    let date_part = parts.next().unwrap_or_default();
    let time_part = parts.next();

    let [year, month, day] = fixed_fields(date_part, '-', [4, 2, 2]).ok_or_else(malformed)?;

    if !(1..=12).contains(&month) {
        return Err(DateInputError::OutOfRange {
            field: "month",
            value: month,
        });
    }
    let month_len = days_in_month(year as i32, month);
    if !(1..=month_len).contains(&day) {
        return Err(DateInputError::OutOfRange {
            field: "day",
            value: day,
        });
    }

    if let Some(time) = time_part {
        let [hour, minute, second] = fixed_fields(time, ':', [2, 2, 2]).ok_or_else(malformed)?;

        if hour > 23 {
            return Err(DateInputError::OutOfRange {
                field: "hour",
                value: hour,
            });
        }
        if minute > 59 {
            return Err(DateInputError::OutOfRange {
                field: "minute",
                value: minute,
            });
        }
        if second > 59 {
            return Err(DateInputError::OutOfRange {
                field: "second",
                value: second,
            });
        }
    }

    Ok(())
}

/// Split into exactly three all-digit fields of the given widths
fn fixed_fields(part: &str, sep: char, widths: [usize; 3]) -> Option<[u32; 3]> {
    let mut fields = part.split(sep);
    let mut out = [0u32; 3];

    for (slot, width) in out.iter_mut().zip(widths) {
        let raw = fields.next()?;
        if raw.len() != width || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = raw.parse().ok()?;
    }

    if fields.next().is_some() {
        return None;
    }
    Some(out)
}
