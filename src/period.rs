// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time period / interval implementation.
//!
//! This module provides:
//! - [`Interval<T>`]: generic half-open interval over any [`TimeInstant`]
//! - [`Period<S>`]: scale-based alias for `Interval<Time<S>>`

use super::instant::days_ratio;
use super::{Time, TimeInstant, TimeScale};
use chrono::{DateTime, Utc};
use qtty::Days;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Represents a half-open interval `[start, end)` between two instants.
///
/// # Examples
///
/// ```
/// use luach::{Interval, JulianDate};
///
/// let start = JulianDate::new(2451545.0);
/// let end = JulianDate::new(2451546.0);
/// let period = Interval::new(start, end);
///
/// assert!(period.contains(JulianDate::new(2451545.5)));
/// assert!(!period.contains(end));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<T: TimeInstant> {
    pub start: T,
    pub end: T,
}

/// Time-scale period alias: `Period<JD>`, `Period<RD>`, …
pub type Period<S> = Interval<Time<S>>;

impl<T: TimeInstant> Interval<T> {
    /// Creates a new interval between two time instants.
    pub fn new(start: T, end: T) -> Self {
        Interval { start, end }
    }

    /// Returns the duration of the interval as the difference between end and start.
    pub fn duration(&self) -> T::Duration {
        self.end.difference(&self.start)
    }

    /// Whether `start < end`.
    pub fn is_proper(&self) -> bool {
        self.start < self.end
    }

    /// Whether `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: T) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl<T: TimeInstant + fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

impl<S: TimeScale> Interval<Time<S>> {
    /// Build a period from two UTC instants.
    pub fn from_utc(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Interval::new(Time::from_utc(start), Time::from_utc(end))
    }

    /// Returns the duration of the period in days.
    ///
    /// ```
    /// use luach::{Interval, RataDie};
    /// use qtty::Days;
    ///
    /// let period = Interval::new(RataDie::new(59000.0), RataDie::new(59001.5));
    /// assert_eq!(period.duration_days(), Days::new(1.5));
    /// ```
    pub fn duration_days(&self) -> Days {
        self.duration()
    }

    /// Fraction of the period elapsed at `instant`.
    ///
    /// `0.0` at `start`, `1.0` at `end`; values outside `[0, 1)` mean the
    /// instant lies outside the period.
    pub fn fraction_at(&self, instant: Time<S>) -> f64 {
        days_ratio(instant - self.start, self.duration())
    }

    /// The instant a given fraction of the way through the period.
    pub fn instant_at(&self, fraction: f64) -> Time<S> {
        self.start + self.duration() * fraction
    }
}

// Serde support for Period<JD> (= Interval<Time<JD>>).
#[cfg(feature = "serde")]
impl Serialize for Interval<crate::JulianDate> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Period", 2)?;
        s.serialize_field("start_jd", &self.start.value())?;
        s.serialize_field("end_jd", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Interval<crate::JulianDate> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            start_jd: f64,
            end_jd: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Interval::new(
            crate::JulianDate::new(raw.start_jd),
            crate::JulianDate::new(raw.end_jd),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{JulianDate, RataDie, JD};
    use chrono::TimeZone;

    #[test]
    fn test_period_creation_jd() {
        let start = JulianDate::new(2451545.0);
        let end = JulianDate::new(2451546.0);
        let period = Period::new(start, end);

        assert_eq!(period.start, start);
        assert_eq!(period.end, end);
        assert!(period.is_proper());
    }

    #[test]
    fn test_period_duration_mjd() {
        let start = RataDie::new(59000.0);
        let end = RataDie::new(59001.5);
        let period = Period::new(start, end);

        assert_eq!(period.duration_days(), Days::new(1.5));
    }

    #[test]
    fn test_contains_is_half_open() {
        let period = Period::new(RataDie::new(0.0), RataDie::new(3.0));
        assert!(period.contains(RataDie::new(0.0)));
        assert!(period.contains(RataDie::new(2.999)));
        assert!(!period.contains(RataDie::new(3.0)));
        assert!(!period.contains(RataDie::new(-0.1)));
    }

    #[test]
    fn test_fraction_and_instant_at() {
        let period = Period::new(RataDie::new(10.0), RataDie::new(14.0));
        assert!((period.fraction_at(RataDie::new(11.0)) - 0.25).abs() < 1e-12);
        assert!((period.instant_at(0.5).value() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_utc_spans_twelve_hours() {
        let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap();
        let sunset = Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap();
        let day = Period::<JD>::from_utc(sunrise, sunset);
        assert!((day.duration_days() - Days::new(0.5)).abs() < Days::new(1e-9));
    }

    #[test]
    fn test_period_display() {
        let period = Period::new(RataDie::new(59000.0), RataDie::new(59001.0));
        let display = format!("{}", period);
        assert!(display.contains("RD 59000"));
        assert!(display.contains("RD 59001"));
        assert!(display.contains("to"));
    }
}
