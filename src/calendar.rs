// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil (proleptic Gregorian) ↔ Hebrew lunisolar date conversion.
//!
//! # Year structure
//!
//! Years follow a 19-year cycle of 235 months in which years 3, 6, 8, 11,
//! 14, 17 and 19 are leap years with a second Adar. The first day of a year
//! is the day of the molad of Tishrei, pushed forward by the postponement
//! rules; the resulting year lengths are 353–355 days (common) or 383–385
//! days (leap). The variable-length months are Cheshvan and Kislev, whose
//! lengths follow from the [`YearClass`].
//!
//! # Month numbering
//!
//! Months are numbered by their position in the year starting from
//! Tishrei = 1, so every month after Adar has an index one higher in a leap
//! year:
//!
//! | Index | Common year | Leap year |
//! |-------|-------------|-----------|
//! | 1–5 | Tishrei … Shevat | Tishrei … Shevat |
//! | 6 | Adar | Adar I |
//! | 7 | Nisan | Adar II |
//! | 8–12 | Iyar … Elul | Nisan … Av |
//! | 13 | — | Elul |
//!
//! Day arithmetic is done on fixed-day numbers (see [`RD`](crate::RD)).

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::CalendarError;
use crate::locale::{Bilingual, Language};
use crate::names::month_name;
use crate::numeral::{numeral_to_local_script, year_to_local_script};
use crate::instant::Time;
use crate::scales::RD;

/// Fixed-day number of the calendar epoch, Monday 7 October 3761 BCE
/// (proleptic Julian). 1 Tishrei AM 1 falls on this day.
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Last year whose 1 Tishrei lies within chrono's date range.
pub const MAX_YEAR: i32 = 265_900;

/// Mean year length numerator/denominator (days) used to seed the year search.
const MEAN_YEAR_NUM: i64 = 35_975_351;
const MEAN_YEAR_DEN: i64 = 98_496;

/// Whether `year` has thirteen months.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Number of months in `year` (12 or 13).
#[inline]
pub fn months_in_year(year: i32) -> u8 {
    if is_leap_year(year) {
        13
    } else {
        12
    }
}

/// Months from the epoch molad to the molad of Tishrei of `year`.
#[inline]
pub(crate) fn months_elapsed(year: i64) -> i64 {
    (235 * year - 234).div_euclid(19)
}

/// Days from the epoch to the molad-derived new year, before the
/// year-length correction. Applies the lo ADU Rosh rule.
fn elapsed_days(year: i64) -> i64 {
    let months = months_elapsed(year);
    let parts = 12_084 + 13_753 * months;
    let day = 29 * months + parts.div_euclid(25_920);
    if (3 * (day + 1)).rem_euclid(7) < 3 {
        day + 1
    } else {
        day
    }
}

/// Delay keeping every year length in the six legal values
/// (GaTaRaD and BeTUTaKPaT).
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed-day number of 1 Tishrei of `year`.
pub(crate) fn new_year_fixed(year: i64) -> i64 {
    HEBREW_EPOCH + elapsed_days(year) + year_length_correction(year)
}

/// Number of days in `year`: 353, 354, 355, 383, 384 or 385.
pub fn days_in_year(year: i32) -> u16 {
    let year = i64::from(year);
    (new_year_fixed(year + 1) - new_year_fixed(year)) as u16
}

/// Length class of a year, which fixes the lengths of Cheshvan and Kislev.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum YearClass {
    /// 353 or 383 days: Cheshvan and Kislev both have 29 days.
    Deficient,
    /// 354 or 384 days: Cheshvan 29, Kislev 30.
    Regular,
    /// 355 or 385 days: Cheshvan and Kislev both have 30 days.
    Complete,
}

impl YearClass {
    fn from_length(days: u16) -> Self {
        match days % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

/// Length class of `year`.
pub fn year_class(year: i32) -> YearClass {
    YearClass::from_length(days_in_year(year))
}

/// Length of `month` in a year of the given class, without validation.
fn month_length(month: u8, is_leap: bool, class: YearClass) -> u8 {
    match month {
        1 => 30,
        2 => {
            if class == YearClass::Complete {
                30
            } else {
                29
            }
        }
        3 => {
            if class == YearClass::Deficient {
                29
            } else {
                30
            }
        }
        4 => 29,
        5 => 30,
        // Adar I is a full month; from there the months alternate 29/30.
        6 if is_leap => 30,
        m if is_leap => {
            if m % 2 == 1 {
                29
            } else {
                30
            }
        }
        m => {
            if m % 2 == 0 {
                29
            } else {
                30
            }
        }
    }
}

/// Number of days in `month` of `year`.
///
/// Fails with [`CalendarError::InvalidMonth`] if the year has no such month.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    let is_leap = is_leap_year(year);
    if month == 0 || month > months_in_year(year) {
        return Err(CalendarError::InvalidMonth {
            month,
            is_leap_year: is_leap,
        });
    }
    Ok(month_length(month, is_leap, year_class(year)))
}

/// A validated date in the Hebrew lunisolar calendar.
///
/// Values are only produced by [`civil_to_hebrew`], [`HebrewDate::new`] and
/// the month-stepping helpers, so `month` always exists in `year` and `day`
/// never exceeds the month's length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
    is_leap_year: bool,
}

impl HebrewDate {
    /// Validates and builds a date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let invalid = CalendarError::InvalidLunisolarDate { year, month, day };
        if !(1..=MAX_YEAR).contains(&year) || day == 0 {
            return Err(invalid);
        }
        let length = days_in_month(year, month).map_err(|_| invalid.clone())?;
        if day > length {
            return Err(invalid);
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_year: is_leap_year(year),
        })
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month index in the year's own numbering (Tishrei = 1).
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn is_leap_year(&self) -> bool {
        self.is_leap_year
    }

    /// Number of days in this date's month.
    pub fn month_length(&self) -> u8 {
        month_length(self.month, self.is_leap_year, year_class(self.year))
    }

    /// Name of this date's month.
    pub fn month_name(&self) -> Bilingual {
        // The month was validated on construction, so the lookup cannot miss.
        month_name(self.month, self.is_leap_year).unwrap_or(Bilingual::new("", ""))
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self { day: 1, ..*self }
    }

    /// First day of the following month, rolling over into Tishrei of the
    /// next year after Elul.
    pub fn first_of_next_month(&self) -> Self {
        if self.month < months_in_year(self.year) {
            Self {
                month: self.month + 1,
                day: 1,
                ..*self
            }
        } else {
            Self {
                year: self.year + 1,
                month: 1,
                day: 1,
                is_leap_year: is_leap_year(self.year + 1),
            }
        }
    }

    /// The civil date of this Hebrew date.
    pub fn to_civil(&self) -> Result<NaiveDate, CalendarError> {
        let fixed = self.to_fixed();
        Time::<RD>::from_day_number(fixed).to_date().ok_or(CalendarError::InvalidLunisolarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }

    pub(crate) fn to_fixed(&self) -> i64 {
        let class = year_class(self.year);
        let months_before: i64 = (1..self.month)
            .map(|m| i64::from(month_length(m, self.is_leap_year, class)))
            .sum();
        new_year_fixed(i64::from(self.year)) + months_before + i64::from(self.day) - 1
    }

    /// `"{monthName} {numeral}"`: `"כסלו כ״ה"` / `"Kislev 25"`.
    pub fn month_day_label(&self, language: Language) -> String {
        format!(
            "{} {}",
            self.month_name().get(language),
            self.day_label(language)
        )
    }

    /// Full date: `"כ״ה כסלו תשפ״ד"` / `"25 Kislev 5784"`.
    pub fn display(&self, language: Language) -> String {
        let year = match language {
            Language::Hebrew => {
                year_to_local_script(self.year).unwrap_or_else(|_| self.year.to_string())
            }
            Language::English => self.year.to_string(),
        };
        format!(
            "{} {} {}",
            self.day_label(language),
            self.month_name().get(language),
            year
        )
    }

    fn day_label(&self, language: Language) -> String {
        match language {
            Language::Hebrew => numeral_to_local_script(i64::from(self.day))
                .unwrap_or_else(|_| self.day.to_string()),
            Language::English => self.day.to_string(),
        }
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = if f.alternate() {
            Language::Hebrew
        } else {
            Language::English
        };
        f.write_str(&self.display(language))
    }
}

/// Converts a civil date to the Hebrew calendar.
///
/// Fails with [`CalendarError::DateOutOfRange`] before 1 Tishrei AM 1.
///
/// ```
/// use chrono::NaiveDate;
/// use luach::civil_to_hebrew;
///
/// let rosh_hashanah = NaiveDate::from_ymd_opt(2023, 9, 16).unwrap();
/// let date = civil_to_hebrew(rosh_hashanah).unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (5784, 1, 1));
/// ```
pub fn civil_to_hebrew(date: NaiveDate) -> Result<HebrewDate, CalendarError> {
    let fixed = Time::<RD>::from_date(date).day_number();
    let epoch = new_year_fixed(1);
    if fixed < epoch {
        return Err(CalendarError::DateOutOfRange {
            date,
            epoch: Time::<RD>::from_day_number(epoch)
                .to_date()
                .unwrap_or(NaiveDate::MIN),
        });
    }

    let approx = ((fixed - HEBREW_EPOCH) * MEAN_YEAR_DEN).div_euclid(MEAN_YEAR_NUM) + 1;
    let mut year = (approx - 1) as i32;
    while new_year_fixed(i64::from(year) + 1) <= fixed {
        year += 1;
    }

    let is_leap = is_leap_year(year);
    let class = year_class(year);
    let mut month_start = new_year_fixed(i64::from(year));
    let mut month = 1u8;
    loop {
        let length = i64::from(month_length(month, is_leap, class));
        if fixed < month_start + length || month == months_in_year(year) {
            break;
        }
        month_start += length;
        month += 1;
    }

    Ok(HebrewDate {
        year,
        month,
        day: (fixed - month_start + 1) as u8,
        is_leap_year: is_leap,
    })
}

/// Converts a Hebrew date to the civil calendar.
///
/// Fails with [`CalendarError::InvalidLunisolarDate`] if the month does not
/// exist in `year`, `day` exceeds its length, or `year` lies outside
/// `1..=MAX_YEAR`.
pub fn hebrew_to_civil(year: i32, month: u8, day: u8) -> Result<NaiveDate, CalendarError> {
    HebrewDate::new(year, month, day)?.to_civil()
}

/// Civil date of 1 Tishrei of `year`.
pub fn rosh_hashanah(year: i32) -> Result<NaiveDate, CalendarError> {
    hebrew_to_civil(year, 1, 1)
}

/// Whether `date` falls on the weekly rest day (Saturday).
#[inline]
pub fn is_weekly_rest_day<D: Datelike>(date: &D) -> bool {
    date.weekday() == Weekday::Sat
}
