// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Rata Die (`Time<RD>`) specific extensions.

use chrono::{Datelike, NaiveDate, Weekday};

use super::instant::Time;
use super::scales::RD;

impl Time<RD> {
    /// Civil midnight of `date`.
    #[inline]
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(f64::from(date.num_days_from_ce()))
    }

    /// Civil midnight of fixed day `day`.
    #[inline]
    pub fn from_day_number(day: i64) -> Self {
        Self::new(day as f64)
    }

    /// Whole fixed-day number (the civil date containing this instant).
    #[inline]
    pub fn day_number(&self) -> i64 {
        self.value().floor() as i64
    }

    /// The civil date containing this instant, if chrono can represent it.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let day = i32::try_from(self.day_number()).ok()?;
        NaiveDate::from_num_days_from_ce_opt(day)
    }

    /// Weekday of the civil date containing this instant.
    ///
    /// R.D. 1 is a Monday, so R.D. 0 (and every multiple of 7) is a Sunday.
    pub fn weekday(&self) -> Weekday {
        match self.day_number().rem_euclid(7) {
            0 => Weekday::Sun,
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            _ => Weekday::Sat,
        }
    }
}
