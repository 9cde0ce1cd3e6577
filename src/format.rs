//! Date and datetime formatting functions
//!
//! This module provides the formatting functions for the fixed
//! `YYYY-MM-DD[ HH:MM:SS]` input layout: a sortable integer key, an
//! RSS/email date, two US-English display forms, a CMS list-screen form and
//! a W3C/ISO-8601 string. Empty and zero-sentinel inputs format to an empty
//! string everywhere; see [`crate::fields`] for the shared splitting rules.

use chrono_tz::Tz;

use crate::calendar;
use crate::fields::split_fields;
use crate::zone;

/// Format a datetime as a digit string that sorts chronologically
///
/// # Arguments
/// * `input` - Datetime string in `YYYY-MM-DD HH:MM:SS` layout
///
/// # Returns
/// * `String` - Concatenated `YYYYMMDDHHMMSS` key, e.g. `"20110102030405"`
///
/// Keys of full datetimes compare with each other exactly as the underlying
/// datetimes do. A date-only input yields the shorter `YYYYMMDD` key, which
/// does not compare correctly against full keys; callers building comparison
/// keys must supply full datetimes.
pub fn format_date_integer(input: &str) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    let mut key = format!("{:04}{:02}{:02}", f.year, f.month, f.day);
    if f.has_time {
        key.push_str(&format!("{:02}{:02}{:02}", f.hour, f.minute, f.second));
    }
    key
}

/// Format a datetime as an RSS/email date
///
/// # Arguments
/// * `input` - Datetime string in `YYYY-MM-DD HH:MM:SS` layout
/// * `tz` - Timezone the wall-clock input is read in
///
/// # Returns
/// * `String` - e.g. `"Tue, 03 Jun 2003 09:39:21 GMT"`
///
/// Weekday and month render as the first three letters of their full English
/// names. An out-of-range month propagates as a blank name rather than an
/// error.
pub fn format_date_rss(input: &str, tz: Tz) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    let weekday = calendar::day_of_week(f.year, f.month, f.day)
        .map(calendar::weekday_name)
        .unwrap_or_default();
    let month = calendar::month_name(f.month);

    format!(
        "{}, {:02} {} {} {:02}:{:02}:{:02} {}",
        abbrev(weekday),
        f.day,
        abbrev(month),
        f.year,
        f.hour,
        f.minute,
        f.second,
        zone::zone_abbreviation(tz, &f)
    )
}

/// Format a date in short US-English form, e.g. `"Dec 22nd, 1956"`
pub fn format_date_usenglish(input: &str) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    format!(
        "{} {}{}, {}",
        abbrev(calendar::month_name(f.month)),
        f.day,
        calendar::ordinal_suffix(f.day),
        f.year
    )
}

/// Format a datetime in US-English form with a 12-hour clock
///
/// Same date rendering as [`format_date_usenglish`] followed by the time,
/// e.g. `"Dec 22nd, 1956 09:23 PM"`. The midnight hour displays as `12`.
pub fn format_date_usenglish_long_ampm(input: &str) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    let (hour12, marker) = twelve_hour(f.hour);
    format!(
        "{} {}{}, {} {:02}:{:02} {}",
        abbrev(calendar::month_name(f.month)),
        f.day,
        calendar::ordinal_suffix(f.day),
        f.year,
        hour12,
        f.minute,
        marker
    )
}

/// Format a datetime for CMS list screens, e.g. `"12-22-1956 09:23 PM"`
pub fn format_date_cms_publishdate(input: &str) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    let (hour12, marker) = twelve_hour(f.hour);
    format!(
        "{:02}-{:02}-{} {:02}:{:02} {}",
        f.month, f.day, f.year, hour12, f.minute, marker
    )
}

/// Format a datetime as a W3C/ISO-8601 string with a UTC offset
///
/// # Arguments
/// * `input` - Datetime string in `YYYY-MM-DD HH:MM:SS` layout
/// * `tz` - Timezone the wall-clock input is read in
///
/// # Returns
/// * `String` - e.g. `"2011-01-02T03:04:05-08:00"`
pub fn format_date_w3c(input: &str, tz: Tz) -> String {
    let Some(f) = split_fields(input) else {
        return String::new();
    };

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}",
        f.year,
        f.month,
        f.day,
        f.hour,
        f.minute,
        f.second,
        zone::utc_offset(tz, &f)
    )
}

/// Convert a 24-hour value to its 12-hour display value and AM/PM marker
///
/// Hours 0 and 12 both display as `12`.
fn twelve_hour(hour: u32) -> (u32, &'static str) {
    let (hour12, marker) = if hour >= 12 {
        (hour - 12, "PM")
    } else {
        (hour, "AM")
    };

    if hour12 == 0 {
        (12, marker)
    } else {
        (hour12, marker)
    }
}

/// First three letters of a full weekday or month name
fn abbrev(name: &str) -> &str {
    name.get(..3).unwrap_or(name)
}

/// Formatter bound to a fixed timezone
///
/// Bundles the six formatting functions behind one configured value so that
/// callers resolve their timezone once instead of threading it through every
/// call site. The default formatter reads wall-clock input as UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormatter {
    tz: Tz,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self { tz: Tz::UTC }
    }
}

impl DateFormatter {
    /// Create a formatter for the given timezone
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    /// Timezone this formatter reads wall-clock input in
    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Sortable digit key, see [`format_date_integer`]
    pub fn integer(&self, input: &str) -> String {
        format_date_integer(input)
    }

    /// RSS/email date, see [`format_date_rss`]
    pub fn rss(&self, input: &str) -> String {
        format_date_rss(input, self.tz)
    }

    /// Short US-English date, see [`format_date_usenglish`]
    pub fn usenglish(&self, input: &str) -> String {
        format_date_usenglish(input)
    }

    /// US-English date with 12-hour time, see [`format_date_usenglish_long_ampm`]
    pub fn usenglish_long_ampm(&self, input: &str) -> String {
        format_date_usenglish_long_ampm(input)
    }

    /// CMS list-screen datetime, see [`format_date_cms_publishdate`]
    pub fn cms_publishdate(&self, input: &str) -> String {
        format_date_cms_publishdate(input)
    }

    /// W3C/ISO-8601 datetime with offset, see [`format_date_w3c`]
    pub fn w3c(&self, input: &str) -> String {
        format_date_w3c(input, self.tz)
    }
}
