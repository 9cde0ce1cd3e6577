//! Datefmt - fixed-format date string formatting
//!
//! This library converts date and datetime strings in the fixed
//! `YYYY-MM-DD` / `YYYY-MM-DD HH:MM:SS` layouts into the output shapes a
//! content system needs: RSS/email dates, US-English display forms, a
//! compact sortable key, W3C/ISO-8601 strings and a CMS list-screen form.
//! Empty input and the `0000-00-00` zero sentinels uniformly format to an
//! empty string, and anything else is accepted leniently.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`fields`] - Input sentinels and the shared lenient field splitter
//! * [`calendar`] - Weekday, month-name and ordinal-suffix helpers
//! * [`zone`] - Timezone abbreviation and UTC offset lookup
//! * [`format`] - The formatting functions and the configured [`DateFormatter`]
//! * [`validate`] - Opt-in strict validation of the input layout

/// Calendar fact helpers (weekday, month names, ordinal suffixes)
pub mod calendar;

/// Input sentinels and lenient field splitting
pub mod fields;

/// Date and datetime formatting functions
pub mod format;

/// Opt-in strict validation of the documented input layout
pub mod validate;

/// Timezone abbreviation and UTC offset lookup
pub mod zone;

// Re-export the formatting surface for convenient access
pub use format::{
    format_date_cms_publishdate, format_date_integer, format_date_rss, format_date_usenglish,
    format_date_usenglish_long_ampm, format_date_w3c, DateFormatter,
};
pub use validate::{validate, DateInputError};
