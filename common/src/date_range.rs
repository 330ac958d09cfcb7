//! Date range state and calendar helpers.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::analytics_const::{API_DATE_FORMAT, AXIS_DATE_FORMAT, DEFAULT_RANGE_DAYS, DISPLAY_DATE_FORMAT};

/// Reporting window. Always replaced as a whole, never patched in place.
///
/// `start_date <= end_date` is expected but not enforced: an inverted range is
/// passed through to the data source unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

impl DateRange {
    /// Trailing window ending today: `[today - 29 days 00:00, today 23:59:59.999]`.
    pub fn default_for(today: NaiveDate) -> Self {
        let start = today.checked_sub_days(Days::new((DEFAULT_RANGE_DAYS - 1) as u64)).unwrap_or(today);
        Self {
            start_date: start_of_day(start),
            end_date: end_of_day(today),
        }
    }

    pub fn update(new_start: NaiveDateTime, new_end: NaiveDateTime) -> Self {
        Self { start_date: new_start, end_date: new_end }
    }

    pub fn with_start_day(&self, day: NaiveDate) -> Self {
        Self::update(start_of_day(day), self.end_date)
    }

    pub fn with_end_day(&self, day: NaiveDate) -> Self {
        Self::update(self.start_date, end_of_day(day))
    }

    pub fn is_inverted(&self) -> bool {
        self.start_date > self.end_date
    }

    /// Calendar days covered by the range, ascending. Empty when inverted.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        days_between(self.start_date.date(), self.end_date.date())
    }

    pub fn display_label(&self) -> String {
        format!("{} - {}", format_display_date(&self.start_date), format_display_date(&self.end_date))
    }
}

pub fn start_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::MIN)
}

pub fn end_of_day(day: NaiveDate) -> NaiveDateTime {
    day.and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN))
}

/// Inclusive on both ends.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

pub fn format_date_for_api(date: &NaiveDateTime) -> String {
    date.format(API_DATE_FORMAT).to_string()
}

pub fn format_display_date(date: &NaiveDateTime) -> String {
    date.format(DISPLAY_DATE_FORMAT).to_string()
}

/// Short label for a `yyyy-MM-dd` day string; the input is returned as-is if it does not parse.
pub fn format_axis_date(day: &str) -> String {
    match parse_input_date(day) {
        Ok(day) => day.format(AXIS_DATE_FORMAT).to_string(),
        Err(_) => day.to_string(),
    }
}

pub fn format_tooltip_date(day: &str) -> String {
    match parse_input_date(day) {
        Ok(day) => format_display_date(&start_of_day(day)),
        Err(_) => day.to_string(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DateParseError {
    Empty,
    InvalidFormat { input: String, reason: String },
}

impl std::fmt::Display for DateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "Date is empty"),
            Self::InvalidFormat { input, reason } => write!(f, "Invalid date '{}': {}", input, reason),
        }
    }
}

impl std::error::Error for DateParseError {}

/// Parses the `yyyy-MM-dd` value of a date input (and of API parameters).
pub fn parse_input_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateParseError::Empty);
    }
    NaiveDate::parse_from_str(value, API_DATE_FORMAT).map_err(|e| DateParseError::InvalidFormat {
        input: value.to_string(),
        reason: e.to_string(),
    })
}
