// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! One refresh tick over every component.
//!
//! [`Almanac::snapshot`] is meant to be called from a periodic loop. Each
//! field is computed independently and fails closed on its own, so a bad
//! molad configuration still leaves the date, the daf and the moon on
//! screen.

use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use tracing::{debug, instrument};

use crate::calendar::{civil_to_hebrew, is_weekly_rest_day, HebrewDate};
use crate::config::LuachConfig;
use crate::daf_yomi::{position_for_date, ReadingPosition};
use crate::error::CalendarError;
use crate::holidays::{HolidayIndex, UpcomingObservance};
use crate::locale::{Bilingual, Language};
use crate::molad::{next_molad, MoladReport};
use crate::moon_phase::{phase_for, MoonPhaseReading};
use crate::outcome::{guard, Outcome};
use crate::proportional::{ProportionalClock, ProportionalHour};

/// Validated configuration plus the derived holiday index.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Almanac {
    config: LuachConfig,
    holidays: HolidayIndex,
}

impl Almanac {
    pub fn new(config: LuachConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        Ok(Self {
            config,
            holidays: HolidayIndex::new(config.scope),
        })
    }

    pub fn config(&self) -> &LuachConfig {
        &self.config
    }

    /// Everything shown for `now`. The civil date is `now`'s date in its own
    /// time zone. `clock` supplies the local sunrise/sunset when a
    /// proportional hour is wanted.
    #[instrument(level = "debug", skip_all, fields(date = %now.date_naive()))]
    pub fn snapshot<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        clock: Option<&ProportionalClock>,
    ) -> Snapshot {
        let civil_date = now.date_naive();
        let snapshot = Snapshot {
            civil_date,
            language: self.config.language,
            is_weekly_rest_day: is_weekly_rest_day(&civil_date),
            hebrew_date: guard("calendar", || civil_to_hebrew(civil_date)),
            molad: next_molad(civil_date, &self.config.molad),
            next_observance: self.holidays.next_observance(civil_date),
            daf_yomi: guard("daf_yomi", || position_for_date(civil_date)),
            moon: phase_for(now),
            proportional_hour: clock
                .map(|c| guard("proportional", || c.hour_at(now.clone()))),
        };
        debug!(
            degraded = snapshot.degraded_fields(),
            "snapshot computed"
        );
        snapshot
    }
}

/// The values of one tick.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub civil_date: NaiveDate,
    pub language: Language,
    pub is_weekly_rest_day: bool,
    pub hebrew_date: Outcome<HebrewDate>,
    pub molad: Outcome<MoladReport>,
    pub next_observance: Outcome<Option<UpcomingObservance>>,
    pub daf_yomi: Outcome<ReadingPosition>,
    pub moon: MoonPhaseReading,
    pub proportional_hour: Option<Outcome<ProportionalHour>>,
}

impl Snapshot {
    /// Number of fields that fell back to the sentinel.
    pub fn degraded_fields(&self) -> usize {
        [
            self.hebrew_date.is_unavailable(),
            self.molad.is_unavailable(),
            self.next_observance.is_unavailable(),
            self.daf_yomi.is_unavailable(),
            self.proportional_hour
                .as_ref()
                .is_some_and(Outcome::is_unavailable),
        ]
        .into_iter()
        .filter(|&degraded| degraded)
        .count()
    }

    fn label(&self, label: Bilingual) -> &'static str {
        label.get(self.language)
    }
}

const MOLAD: Bilingual = Bilingual::new("מולד", "Molad");
const ROSH_CHODESH: Bilingual = Bilingual::new("ראש חודש", "Rosh Chodesh");
const NEXT: Bilingual = Bilingual::new("הבא", "Next");
const NOTHING_UPCOMING: Bilingual = Bilingual::new("אין", "none");
const DAYS: Bilingual = Bilingual::new("ימים", "days");
const DAF_YOMI: Bilingual = Bilingual::new("דף יומי", "Daf Yomi");
const MOON: Bilingual = Bilingual::new("ירח", "Moon");
const HOUR: Bilingual = Bilingual::new("שעה זמנית", "Proportional hour");

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lang = self.language;

        match &self.hebrew_date {
            Outcome::Computed(date) => writeln!(f, "{}", date.display(lang))?,
            Outcome::Unavailable(u) => writeln!(f, "{u}")?,
        }

        match &self.molad {
            Outcome::Computed(report) => {
                writeln!(
                    f,
                    "{} {}: {}",
                    self.label(MOLAD),
                    report.month_name().get(lang),
                    report.molad.describe(lang)
                )?;
                writeln!(
                    f,
                    "{}: {} ({})",
                    self.label(ROSH_CHODESH),
                    report.rosh_chodesh.weekday_labels(lang),
                    report.rosh_chodesh.civil_month_label(lang)
                )?;
            }
            Outcome::Unavailable(u) => writeln!(f, "{}: {u}", self.label(MOLAD))?,
        }

        match &self.next_observance {
            Outcome::Computed(Some(next)) => writeln!(
                f,
                "{}: {} ({} {})",
                self.label(NEXT),
                next.observance.name(lang),
                next.days_until,
                self.label(DAYS)
            )?,
            Outcome::Computed(None) => {
                writeln!(f, "{}: {}", self.label(NEXT), self.label(NOTHING_UPCOMING))?
            }
            Outcome::Unavailable(u) => writeln!(f, "{}: {u}", self.label(NEXT))?,
        }

        match &self.daf_yomi {
            Outcome::Computed(position) => {
                writeln!(f, "{}: {}", self.label(DAF_YOMI), position.display(lang))?
            }
            Outcome::Unavailable(u) => writeln!(f, "{}: {u}", self.label(DAF_YOMI))?,
        }

        write!(
            f,
            "{}: {} {} ({:.1}%)",
            self.label(MOON),
            self.moon.emoji(),
            self.moon.name(lang),
            self.moon.illumination_percent
        )?;

        match &self.proportional_hour {
            Some(Outcome::Computed(hour)) => write!(
                f,
                "\n{}: {} (+{:.0}′)",
                self.label(HOUR),
                hour.hour_index,
                hour.minute_fraction
            ),
            Some(Outcome::Unavailable(u)) => write!(f, "\n{}: {u}", self.label(HOUR)),
            None => Ok(()),
        }
    }
}
