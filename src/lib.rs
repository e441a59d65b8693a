// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew calendar primitives.
//!
//! This crate converts civil dates to and from the Hebrew lunisolar calendar
//! and derives the values built on it.
//!
//! # Components
//!
//! - **Calendar**: [`civil_to_hebrew`], [`hebrew_to_civil`], [`HebrewDate`],
//!   leap-cycle helpers, [`month_name`] and [`numeral_to_local_script`].
//! - **Molad**: [`molad`] and [`next_molad`], exact in 1080-part hours, with
//!   the anchor and day-start convention held in [`MoladConfig`].
//! - **Observances**: [`HolidayIndex`] enumerates festivals and fasts.
//! - **Proportional hours**: [`ProportionalClock`] over an externally
//!   supplied [`SolarDay`].
//! - **Daf Yomi**: [`position_for_date`] over the [`VOLUMES`] table.
//! - **Moon phase**: [`phase_for`] from a mean synodic month.
//! - **Almanac**: [`Almanac::snapshot`] evaluates all of the above for one
//!   refresh tick.
//!
//! # Failure policy
//!
//! Conversions return `Result<_, CalendarError>`. The molad and holiday
//! entry points, and every field of a [`Snapshot`], return [`Outcome`]
//! instead: a failure (or panic) inside them is logged through `tracing` and
//! surfaces as [`Outcome::Unavailable`], so periodic callers keep running.
//!
//! # Time primitives
//!
//! Instants are [`Time<S>`] values tagged by a day-count [`TimeScale`]
//! marker:
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Day |
//! | [`RD`] | Rata Die (fixed day number) |
//!
//! Spans between instants are [`Interval`]s ([`Period<S>`] for a scale).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use luach::{civil_to_hebrew, Language};
//!
//! let date = civil_to_hebrew(NaiveDate::from_ymd_opt(2023, 12, 8).unwrap()).unwrap();
//! assert_eq!(date.display(Language::English), "25 Kislev 5784");
//! assert_eq!(date.display(Language::Hebrew), "כ״ה כסלו תשפ״ד");
//! ```

mod almanac;
mod calendar;
mod config;
mod daf_yomi;
mod error;
mod holidays;
pub(crate) mod instant;
mod locale;
mod molad;
mod moon_phase;
mod names;
mod numeral;
mod outcome;
mod period;
mod proportional;
mod rata_die_ext;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use almanac::{Almanac, Snapshot};
pub use calendar::{
    civil_to_hebrew, days_in_month, days_in_year, hebrew_to_civil, is_leap_year,
    is_weekly_rest_day, months_in_year, rosh_hashanah, year_class, HebrewDate, YearClass, MAX_YEAR,
};
pub use config::LuachConfig;
pub use daf_yomi::{cycle_number, position_for_date, ReadingPosition, Volume, TOTAL_PAGES, VOLUMES};
pub use error::CalendarError;
pub use holidays::{HolidayIndex, Observance, ObservanceKind, Scope, UpcomingObservance};
pub use instant::{Time, TimeInstant, TimeScale};
pub use locale::{Bilingual, Language};
pub use molad::{
    molad, next_molad, DayStart, Molad, MoladConfig, MoladEpoch, MoladReport, RoshChodesh,
    JERUSALEM_MEAN_TIME_OFFSET, MEAN_MONTH_PARTS, MONTHS_PER_CYCLE, PARTS_PER_DAY, PARTS_PER_HOUR,
    PARTS_PER_WEEK,
};
pub use moon_phase::{
    phase_for, phase_fraction, MoonPhase, MoonPhaseReading, REFERENCE_NEW_MOON, SYNODIC_MONTH,
};
pub use names::{month_name, weekday_name};
pub use numeral::{numeral_to_local_script, year_to_local_script};
pub use outcome::{Outcome, Unavailable, SENTINEL};
pub use period::{Interval, Period};
pub use proportional::{ProportionalClock, ProportionalHour, SolarDay, Zman};
pub use scales::{JD, RD};

// ── Type aliases ──────────────────────────────────────────────────────────

/// Julian Day on the civil clock.
pub type JulianDate = Time<JD>;

/// Fixed day number; integral values fall on civil midnight.
pub type RataDie = Time<RD>;
