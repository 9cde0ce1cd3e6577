//! Timezone abbreviation and UTC offset lookup
//!
//! The formatting functions interpret their input as a wall-clock time in an
//! explicit IANA timezone and only need two facts about it: the zone
//! abbreviation (`GMT`, `PST`, ...) and the colon-separated UTC offset
//! (`-08:00`). Both come from chrono-tz here.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::fields::DateTimeFields;

/// Zone abbreviation for a wall-clock instant, e.g. `GMT` or `PST`
///
/// Returns an empty string when the fields do not form a real calendar date,
/// so that lenient garbage input degrades to a blank token.
pub fn zone_abbreviation(tz: Tz, fields: &DateTimeFields) -> String {
    match local_instant(tz, fields) {
        Some(instant) => instant.format("%Z").to_string(),
        None => {
            log::debug!("no instant in {} for {:?}, blank abbreviation", tz, fields);
            String::new()
        }
    }
}

/// Colon-separated UTC offset for a wall-clock instant, e.g. `-08:00`
///
/// The offset is produced as a signed `±HHMM` token and the colon is
/// inserted between its hour and minute components. Empty when the fields do
/// not form a real calendar date.
pub fn utc_offset(tz: Tz, fields: &DateTimeFields) -> String {
    match local_instant(tz, fields) {
        Some(instant) => colonize(&instant.format("%z").to_string()),
        None => {
            log::debug!("no instant in {} for {:?}, blank offset", tz, fields);
            String::new()
        }
    }
}

/// Insert a colon into a `±HHMM` offset token
///
/// Tokens of any other length pass through unchanged.
fn colonize(raw: &str) -> String {
    if raw.len() == 5 && raw.is_char_boundary(3) {
        format!("{}:{}", &raw[..3], &raw[3..])
    } else {
        raw.to_string()
    }
}

/// Resolve split fields to an instant in the given timezone
///
/// The fields are read as a local wall-clock time. An ambiguous local time
/// (DST fold) or a nonexistent one (DST gap) falls back to reading the naive
/// value as UTC.
fn local_instant(tz: Tz, f: &DateTimeFields) -> Option<DateTime<Tz>> {
    let date = NaiveDate::from_ymd_opt(f.year, f.month, f.day)?;
    let time = NaiveTime::from_hms_opt(f.hour, f.minute, f.second)?;
    let naive = NaiveDateTime::new(date, time);

    Some(
        tz.from_local_datetime(&naive)
            .single()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    )
}
