// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar conversions and derived computations.

use chrono::{DateTime, NaiveDate, Utc};

/// Errors produced by the calendar, numeral, reading-cycle and
/// proportional-time operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// The civil date precedes the epoch of the calendar or cycle queried.
    #[error("date {date} is before the epoch {epoch}")]
    DateOutOfRange {
        /// The rejected civil date.
        date: NaiveDate,
        /// First civil date the operation accepts.
        epoch: NaiveDate,
    },

    /// The lunisolar year/month/day triple does not exist.
    #[error("invalid lunisolar date {year}-{month}-{day}")]
    InvalidLunisolarDate {
        /// Lunisolar year.
        year: i32,
        /// Month index in the year's own numbering.
        month: u8,
        /// Day of month.
        day: u8,
    },

    /// Month index outside the months of the given year class.
    #[error("month {month} does not exist in a {} year", year_kind(.is_leap_year))]
    InvalidMonth {
        /// Rejected month index.
        month: u8,
        /// Year class the index was interpreted against.
        is_leap_year: bool,
    },

    /// A caller-supplied leap flag contradicts the 19-year cycle.
    #[error("year {year} leap flag {claimed} contradicts the 19-year cycle")]
    LeapYearMismatch {
        /// Lunisolar year.
        year: i32,
        /// The leap flag that was passed in.
        claimed: bool,
    },

    /// Numeral conversion input outside `1..=9999`.
    #[error("numeral {value} is outside 1..=9999")]
    InvalidNumeral {
        /// Rejected value.
        value: i64,
    },

    /// A configuration value is outside its legal range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Sunrise does not precede sunset.
    #[error("sunrise must precede sunset")]
    DegenerateSolarDay,

    /// The instant is not covered by the supplied sunrise/sunset bounds.
    #[error("{instant} lies outside the solar day")]
    OutsideSolarDay {
        /// The rejected instant, in UTC.
        instant: DateTime<Utc>,
    },

    /// Internal failure in a fail-closed computation.
    #[error("{component} computation failed: {reason}")]
    ComputationFailure {
        /// Component that failed.
        component: &'static str,
        /// Human-readable cause.
        reason: String,
    },
}

fn year_kind(is_leap_year: &bool) -> &'static str {
    if *is_leap_year {
        "leap"
    } else {
        "common"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_out_of_range_message() {
        let e = CalendarError::DateOutOfRange {
            date: NaiveDate::from_ymd_opt(1970, 1, 1).unwrap(),
            epoch: NaiveDate::from_ymd_opt(1975, 6, 24).unwrap(),
        };
        assert_eq!(e.to_string(), "date 1970-01-01 is before the epoch 1975-06-24");
    }

    #[test]
    fn invalid_lunisolar_date_message() {
        let e = CalendarError::InvalidLunisolarDate {
            year: 5784,
            month: 4,
            day: 30,
        };
        assert_eq!(e.to_string(), "invalid lunisolar date 5784-4-30");
    }

    #[test]
    fn invalid_month_message() {
        let e = CalendarError::InvalidMonth {
            month: 13,
            is_leap_year: false,
        };
        assert_eq!(e.to_string(), "month 13 does not exist in a common year");
    }

    #[test]
    fn invalid_numeral_message() {
        let e = CalendarError::InvalidNumeral { value: 10_000 };
        assert_eq!(e.to_string(), "numeral 10000 is outside 1..=9999");
    }

    #[test]
    fn invalid_config_message() {
        let e = CalendarError::InvalidConfig("epoch hours must be < 24, got 30".into());
        assert_eq!(
            e.to_string(),
            "invalid configuration: epoch hours must be < 24, got 30"
        );
    }

    #[test]
    fn outside_solar_day_message() {
        let e = CalendarError::OutsideSolarDay {
            instant: DateTime::from_timestamp(0, 0).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "1970-01-01 00:00:00 UTC lies outside the solar day"
        );
    }

    #[test]
    fn computation_failure_message() {
        let e = CalendarError::ComputationFailure {
            component: "molad",
            reason: "overflow".into(),
        };
        assert_eq!(e.to_string(), "molad computation failed: overflow");
    }

    #[test]
    fn error_is_std_error_send_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
