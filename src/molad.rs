// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Molad (mean lunar conjunction) arithmetic.
//!
//! Time is counted in *parts*: an hour has 1080 parts, so a part is 3⅓
//! seconds and eighteen parts make a minute. The mean synodic month is
//! 29 days 12 hours 793 parts. Every molad is an exact integer number of parts
//! from a reference molad, so nothing here is ever rounded.
//!
//! # Anchor and day-start convention
//!
//! A molad is traditionally quoted as *weekday, hours, parts* where the day
//! begins at 18:00 of the previous civil evening. The reference molad of the
//! calendar (BaHaRaD, "Monday 5h 204p") is quoted in that convention.
//! [`MoladConfig`] keeps the two halves of that statement together: the
//! [`MoladEpoch`] says *what* the anchor is, and [`DayStart`] says in which
//! day-start convention it (and every reported label) is expressed. The
//! default pair reproduces published molad tables; the same instants can be
//! obtained with civil-midnight labels by restating the anchor as
//! "Sunday 23h 204p".
//!
//! # Internal axis
//!
//! Parts are counted from civil midnight starting R.D. 0 on Jerusalem mean
//! time. R.D. 0 is a Sunday, so `parts / PARTS_PER_DAY` is a fixed-day number
//! and its residue modulo seven is the weekday.

use std::fmt;

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use tracing::{debug, instrument};

use crate::calendar::{civil_to_hebrew, HebrewDate, HEBREW_EPOCH};
use crate::error::CalendarError;
use crate::instant::Time;
use crate::locale::{Bilingual, Language};
use crate::names::{gregorian_month_name, weekday_name};
use crate::outcome::{guard, Outcome};
use crate::scales::RD;

// ═══════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════

pub const PARTS_PER_HOUR: i64 = 1080;
pub const PARTS_PER_DAY: i64 = 24 * PARTS_PER_HOUR;
pub const PARTS_PER_WEEK: i64 = 7 * PARTS_PER_DAY;
const PARTS_PER_MINUTE: i64 = 18;

/// Mean synodic month: 29d 12h 793p.
pub const MEAN_MONTH_PARTS: i64 = 29 * PARTS_PER_DAY + 12 * PARTS_PER_HOUR + 793;

/// Months in one 19-year cycle.
pub const MONTHS_PER_CYCLE: i64 = 235;

/// Offset of Jerusalem mean solar time from UTC (35.2354° E), in seconds.
pub const JERUSALEM_MEAN_TIME_OFFSET: i32 = 8_456;

/// Longest admissible lead of a molad before the first day of its month.
const MAX_LEAD_DAYS: i64 = 35;

/// Leap positions of the 19-year cycle (years 3, 6, 8, 11, 14, 17 and 19).
#[rustfmt::skip]
const LEAP_IN_CYCLE: [bool; 19] = [
    false, false, true, false, false, true, false, true, false, false,
    true, false, false, true, false, false, true, false, true,
];

// ═══════════════════════════════════════════════════════════════════════════
// Configuration
// ═══════════════════════════════════════════════════════════════════════════

/// Where a labelled day begins relative to civil midnight.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DayStart {
    /// The day begins at 18:00 of the previous civil day.
    #[default]
    Evening,
    /// The day begins at civil midnight.
    Midnight,
}

impl DayStart {
    /// Parts from civil midnight to the start of the labelled day.
    const fn offset_parts(self) -> i64 {
        match self {
            Self::Evening => -6 * PARTS_PER_HOUR,
            Self::Midnight => 0,
        }
    }
}

/// The reference molad of the epoch week, as weekday + hours + parts.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoladEpoch {
    pub weekday: Weekday,
    pub hours: u8,
    pub parts: u16,
}

impl MoladEpoch {
    /// Monday, 5 hours 204 parts.
    pub const BAHARAD: Self = Self {
        weekday: Weekday::Mon,
        hours: 5,
        parts: 204,
    };

    pub fn validate(&self) -> Result<(), CalendarError> {
        if self.hours >= 24 {
            return Err(CalendarError::InvalidConfig(format!(
                "molad epoch hours must be < 24, got {}",
                self.hours
            )));
        }
        if i64::from(self.parts) >= PARTS_PER_HOUR {
            return Err(CalendarError::InvalidConfig(format!(
                "molad epoch parts must be < {PARTS_PER_HOUR}, got {}",
                self.parts
            )));
        }
        Ok(())
    }
}

impl Default for MoladEpoch {
    fn default() -> Self {
        Self::BAHARAD
    }
}

/// The anchor + day-start pair used for every molad computation.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoladConfig {
    pub epoch: MoladEpoch,
    pub day_start: DayStart,
}

impl MoladConfig {
    pub const fn new(epoch: MoladEpoch, day_start: DayStart) -> Self {
        Self { epoch, day_start }
    }

    pub fn validate(&self) -> Result<(), CalendarError> {
        self.epoch.validate()
    }

    /// Parts from R.D. 0 civil midnight to the epoch molad.
    fn epoch_parts(&self) -> i64 {
        let epoch_weekday = Time::<RD>::from_day_number(HEBREW_EPOCH).weekday();
        let sunday = HEBREW_EPOCH - i64::from(epoch_weekday.num_days_from_sunday());
        let day = sunday + i64::from(self.epoch.weekday.num_days_from_sunday());
        day * PARTS_PER_DAY
            + self.day_start.offset_parts()
            + i64::from(self.epoch.hours) * PARTS_PER_HOUR
            + i64::from(self.epoch.parts)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Month counting
// ═══════════════════════════════════════════════════════════════════════════

/// Months from the epoch molad to Tishrei of `year`, via whole cycles plus
/// the leap table for the remaining years.
fn months_before_year(year: i32) -> i64 {
    let completed = i64::from(year) - 1;
    let cycles = completed.div_euclid(19);
    let remaining = completed.rem_euclid(19) as usize;
    let partial: i64 = LEAP_IN_CYCLE[..remaining]
        .iter()
        .map(|&leap| if leap { 13 } else { 12 })
        .sum();
    cycles * MONTHS_PER_CYCLE + partial
}

// ═══════════════════════════════════════════════════════════════════════════
// Molad
// ═══════════════════════════════════════════════════════════════════════════

/// The molad of one Hebrew month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Molad {
    month: HebrewDate,
    parts: i64,
    instant: DateTime<FixedOffset>,
    day_start: DayStart,
}

impl Molad {
    /// First day of the month this molad belongs to.
    #[inline]
    pub const fn month(&self) -> HebrewDate {
        self.month
    }

    /// Exact parts since R.D. 0 civil midnight (Jerusalem mean time).
    #[inline]
    pub const fn parts(&self) -> i64 {
        self.parts
    }

    /// The molad on Jerusalem mean time.
    #[inline]
    pub const fn instant(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.instant.with_timezone(&Utc)
    }

    /// Civil date (midnight to midnight) on which the molad falls.
    pub fn civil_date(&self) -> NaiveDate {
        self.instant.date_naive()
    }

    /// Parts since the start of the labelled day.
    fn labelled_parts(&self) -> i64 {
        self.parts - self.day_start.offset_parts()
    }

    fn parts_into_day(&self) -> i64 {
        self.labelled_parts().rem_euclid(PARTS_PER_DAY)
    }

    /// Weekday under the configured day-start convention.
    pub fn weekday(&self) -> Weekday {
        let day = self.labelled_parts().div_euclid(PARTS_PER_DAY);
        Time::<RD>::from_day_number(day).weekday()
    }

    pub fn weekday_name(&self) -> Bilingual {
        weekday_name(self.weekday())
    }

    /// Whole hours since the start of the labelled day.
    pub fn hours_from_day_start(&self) -> u8 {
        (self.parts_into_day() / PARTS_PER_HOUR) as u8
    }

    /// Parts past the whole hour, `0..1080`.
    pub fn sub_hour_units(&self) -> u16 {
        (self.parts_into_day() % PARTS_PER_HOUR) as u16
    }

    /// Whole minutes past the hour, `0..60`.
    pub fn minutes_from_hour_start(&self) -> u8 {
        (i64::from(self.sub_hour_units()) / PARTS_PER_MINUTE) as u8
    }

    /// Parts past the whole minute, `0..18`.
    pub fn chalakim(&self) -> u8 {
        (i64::from(self.sub_hour_units()) % PARTS_PER_MINUTE) as u8
    }

    /// `"Tuesday 4:57 and 7 chalakim"` / `"יום שלישי 4:57 ו-7 חלקים"`.
    pub fn describe(&self, language: Language) -> String {
        let (weekday, hours, minutes, chalakim) = (
            self.weekday_name().get(language),
            self.hours_from_day_start(),
            self.minutes_from_hour_start(),
            self.chalakim(),
        );
        match language {
            Language::Hebrew => format!("יום {weekday} {hours}:{minutes:02} ו-{chalakim} חלקים"),
            Language::English => {
                format!("{weekday} {hours}:{minutes:02} and {chalakim} chalakim")
            }
        }
    }
}

impl fmt::Display for Molad {
    /// English description; `{:#}` renders Hebrew.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = if f.alternate() {
            Language::Hebrew
        } else {
            Language::English
        };
        f.write_str(&self.describe(language))
    }
}

/// Molad of `month` (Tishrei = 1) of `year`.
///
/// The weekday and time are obtained by reducing the part count modulo the
/// week, then anchored onto the latest matching weekday on or before the
/// month's first civil day. That anchor is cross-checked against the absolute
/// count; a disagreement means the configured epoch does not describe this
/// calendar and is reported as [`CalendarError::ComputationFailure`].
///
/// ```
/// use luach::{molad, MoladConfig};
///
/// // Molad Nisan 5784 (month 8 of a leap year).
/// let m = molad(5784, 8, &MoladConfig::default()).unwrap();
/// assert_eq!(m.to_string(), "Tuesday 4:57 and 7 chalakim");
/// ```
pub fn molad(year: i32, month: u8, config: &MoladConfig) -> Result<Molad, CalendarError> {
    config.validate()?;
    let first = HebrewDate::new(year, month, 1)?;
    let months = months_before_year(year) + i64::from(month) - 1;
    let parts = config.epoch_parts() + months * MEAN_MONTH_PARTS;

    // Reduce to the week.
    let week_position = parts.rem_euclid(PARTS_PER_WEEK);
    let weekday_index = week_position / PARTS_PER_DAY;
    let within_day = week_position % PARTS_PER_DAY;

    let anchored = anchor_in_window(first.to_fixed(), weekday_index);
    let absolute = parts.div_euclid(PARTS_PER_DAY);
    if anchored != absolute {
        return Err(CalendarError::ComputationFailure {
            component: "molad",
            reason: format!(
                "molad of {year}-{month} anchored on R.D. {anchored} \
                 but the part count gives R.D. {absolute}"
            ),
        });
    }

    let instant = civil_instant(anchored, within_day)?;
    debug!(year, month, parts, %instant, "molad computed");
    Ok(Molad {
        month: first,
        parts,
        instant,
        day_start: config.day_start,
    })
}

fn weekday_of(day: i64) -> i64 {
    i64::from(Time::<RD>::from_day_number(day).weekday().num_days_from_sunday())
}

/// Latest day with weekday `weekday_index` (Sunday = 0) on or before
/// `first_fixed`. The search opens [`MAX_LEAD_DAYS`] before the month and
/// steps forward by whole weeks.
fn anchor_in_window(first_fixed: i64, weekday_index: i64) -> i64 {
    let window_start = first_fixed - MAX_LEAD_DAYS;
    let mut anchored = window_start + (weekday_index - weekday_of(window_start)).rem_euclid(7);
    while anchored + 7 <= first_fixed {
        anchored += 7;
    }
    anchored
}

/// Jerusalem mean time instant `within_day` parts after midnight of `day`.
fn civil_instant(day: i64, within_day: i64) -> Result<DateTime<FixedOffset>, CalendarError> {
    let failure = |reason: &str| CalendarError::ComputationFailure {
        component: "molad",
        reason: reason.to_owned(),
    };
    let offset = FixedOffset::east_opt(JERUSALEM_MEAN_TIME_OFFSET)
        .ok_or_else(|| failure("invalid Jerusalem offset"))?;
    let midnight = Time::<RD>::from_day_number(day)
        .to_date()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| failure("molad date outside the representable range"))?;
    // One part is 10/3 seconds.
    let local = midnight + Duration::nanoseconds(within_day * 10_000_000_000 / 3);
    offset
        .from_local_datetime(&local)
        .single()
        .ok_or_else(|| failure("ambiguous local instant"))
}

// ═══════════════════════════════════════════════════════════════════════════
// Next molad report
// ═══════════════════════════════════════════════════════════════════════════

/// Civil day(s) on which the new month is observed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoshChodesh {
    days: Vec<NaiveDate>,
}

impl RoshChodesh {
    /// One or two days, ascending.
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn is_two_day(&self) -> bool {
        self.days.len() == 2
    }

    /// `"Tuesday & Wednesday"` / `"שלישי ורביעי"`.
    pub fn weekday_labels(&self, language: Language) -> String {
        let names: Vec<&str> = self
            .days
            .iter()
            .map(|d| weekday_name(d.weekday()).get(language))
            .collect();
        match language {
            Language::Hebrew => names.join(" ו"),
            Language::English => names.join(" & "),
        }
    }

    /// Gregorian month(s) covered: `"December–January"` when the days
    /// straddle a month boundary, otherwise a single name.
    pub fn civil_month_label(&self, language: Language) -> String {
        let mut months: Vec<&str> = Vec::with_capacity(2);
        for day in &self.days {
            let name = gregorian_month_name(day.month()).get(language);
            if months.last() != Some(&name) {
                months.push(name);
            }
        }
        months.join("–")
    }
}

/// Everything announced about the coming month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoladReport {
    pub molad: Molad,
    pub rosh_chodesh: RoshChodesh,
    /// Whether the month containing the query date has 30 days.
    pub current_month_has_30_days: bool,
}

impl MoladReport {
    /// Name of the coming month.
    pub fn month_name(&self) -> Bilingual {
        self.molad.month().month_name()
    }
}

/// Molad of the month following the one that contains `date`.
///
/// Never fails: errors and panics become [`Outcome::Unavailable`].
#[instrument(level = "debug", skip(config))]
pub fn next_molad(date: NaiveDate, config: &MoladConfig) -> Outcome<MoladReport> {
    guard("molad", || molad_report(date, config))
}

fn molad_report(date: NaiveDate, config: &MoladConfig) -> Result<MoladReport, CalendarError> {
    let current = civil_to_hebrew(date)?;
    let target = current.first_of_next_month();
    let molad = molad(target.year(), target.month(), config)?;

    let first = target.to_civil()?;
    let current_month_has_30_days = current.month_length() == 30;
    let days = if current_month_has_30_days {
        let thirtieth = first.pred_opt().ok_or(CalendarError::ComputationFailure {
            component: "molad",
            reason: "no civil day precedes the new month".to_owned(),
        })?;
        vec![thirtieth, first]
    } else {
        vec![first]
    };

    Ok(MoladReport {
        molad,
        rosh_chodesh: RoshChodesh { days },
        current_month_has_30_days,
    })
}
