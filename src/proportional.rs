// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proportional ("seasonal") hours.
//!
//! Daylight between sunrise and sunset is split into twelve equal hours,
//! and so is the night between sunset and the next sunrise. Sunrise and
//! sunset are supplied by the caller; nothing here computes solar positions.
//!
//! All spans are [`Period<JD>`] values on the civil Julian Day axis.

use chrono::{DateTime, TimeZone, Utc};
use qtty::Days;

use crate::error::CalendarError;
use crate::locale::Bilingual;
use crate::instant::Time;
use crate::period::Period;
use crate::scales::JD;

const HOURS_PER_HALF: f64 = 12.0;

/// Proportional hours are resolved to ten-millionths (about half a
/// millisecond at the equinox), below the Julian Day's own precision.
const TICKS_PER_HOUR: i64 = 10_000_000;

/// Sunrise and sunset of one civil day.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolarDay {
    daylight: Period<JD>,
}

impl SolarDay {
    /// Fails with [`CalendarError::DegenerateSolarDay`] unless
    /// `sunrise < sunset`.
    pub fn new<Tz: TimeZone>(
        sunrise: DateTime<Tz>,
        sunset: DateTime<Tz>,
    ) -> Result<Self, CalendarError> {
        let daylight = Period::<JD>::from_utc(sunrise.with_timezone(&Utc), sunset.with_timezone(&Utc));
        if !daylight.is_proper() {
            return Err(CalendarError::DegenerateSolarDay);
        }
        Ok(Self { daylight })
    }

    #[inline]
    pub fn daylight(&self) -> Period<JD> {
        self.daylight
    }

    #[inline]
    pub fn sunrise(&self) -> Time<JD> {
        self.daylight.start
    }

    #[inline]
    pub fn sunset(&self) -> Time<JD> {
        self.daylight.end
    }
}

/// Position of an instant inside the proportional day or night.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProportionalHour {
    /// `1..=12`.
    pub hour_index: u8,
    /// Proportional minutes into the hour, `0.0..60.0`.
    pub minute_fraction: f64,
    pub is_daytime: bool,
}

/// Times of day defined in proportional hours after sunrise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Zman {
    /// Latest time for the morning Shema (per the Vilna Gaon).
    EndOfShema,
    EndOfTefillah,
    /// Midday.
    Chatzot,
    MinchaGedolah,
    MinchaKetanah,
    PlagHamincha,
}

impl Zman {
    pub const ALL: [Zman; 6] = [
        Zman::EndOfShema,
        Zman::EndOfTefillah,
        Zman::Chatzot,
        Zman::MinchaGedolah,
        Zman::MinchaKetanah,
        Zman::PlagHamincha,
    ];

    /// Proportional hours after sunrise.
    pub const fn hours(self) -> f64 {
        match self {
            Zman::EndOfShema => 3.0,
            Zman::EndOfTefillah => 4.0,
            Zman::Chatzot => 6.0,
            Zman::MinchaGedolah => 6.5,
            Zman::MinchaKetanah => 9.5,
            Zman::PlagHamincha => 10.75,
        }
    }

    pub const fn name(self) -> Bilingual {
        match self {
            Zman::EndOfShema => Bilingual::new("סוף זמן קריאת שמע", "End of Shema"),
            Zman::EndOfTefillah => Bilingual::new("סוף זמן תפילה", "End of Tefillah"),
            Zman::Chatzot => Bilingual::new("חצות", "Chatzot"),
            Zman::MinchaGedolah => Bilingual::new("מנחה גדולה", "Mincha Gedolah"),
            Zman::MinchaKetanah => Bilingual::new("מנחה קטנה", "Mincha Ketanah"),
            Zman::PlagHamincha => Bilingual::new("פלג המנחה", "Plag HaMincha"),
        }
    }
}

/// Maps civil instants to proportional hours around one [`SolarDay`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ProportionalClock {
    day: SolarDay,
    previous_sunset: Time<JD>,
    next_sunrise: Time<JD>,
}

impl ProportionalClock {
    /// Uses the day's own sunset one day earlier and sunrise one day later
    /// as the bounds of the surrounding nights.
    pub fn new(day: SolarDay) -> Self {
        Self {
            day,
            previous_sunset: day.sunset() - Days::new(1.0),
            next_sunrise: day.sunrise() + Days::new(1.0),
        }
    }

    /// Sets the sunset that opens the night before this day.
    pub fn with_previous_sunset<Tz: TimeZone>(
        mut self,
        sunset: DateTime<Tz>,
    ) -> Result<Self, CalendarError> {
        let sunset = Time::from_utc(sunset.with_timezone(&Utc));
        if sunset >= self.day.sunrise() {
            return Err(CalendarError::DegenerateSolarDay);
        }
        self.previous_sunset = sunset;
        Ok(self)
    }

    /// Sets the sunrise that closes the night after this day.
    pub fn with_next_sunrise<Tz: TimeZone>(
        mut self,
        sunrise: DateTime<Tz>,
    ) -> Result<Self, CalendarError> {
        let sunrise = Time::from_utc(sunrise.with_timezone(&Utc));
        if sunrise <= self.day.sunset() {
            return Err(CalendarError::DegenerateSolarDay);
        }
        self.next_sunrise = sunrise;
        Ok(self)
    }

    #[inline]
    pub fn solar_day(&self) -> SolarDay {
        self.day
    }

    /// Length of one daytime proportional hour.
    pub fn hour_length(&self) -> Days {
        self.day.daylight().duration_days() * (1.0 / HOURS_PER_HALF)
    }

    /// Length of one proportional hour of the night following this day.
    pub fn night_hour_length(&self) -> Days {
        (self.next_sunrise - self.day.sunset()) * (1.0 / HOURS_PER_HALF)
    }

    /// Proportional hour at `instant`.
    ///
    /// Instants from the previous sunset up to the next sunrise are covered;
    /// anything else is [`CalendarError::OutsideSolarDay`].
    ///
    /// The elapsed fraction `f` of the day or night is rounded to 10⁻⁷ of a
    /// proportional hour before `hour_index = 1 + floor(f × 12)` is taken, so
    /// an instant less than about 0.2 ms before an hour boundary (at a
    /// 12-hour day) already reads as the next hour. This absorbs the Julian
    /// Day's own rounding, which would otherwise put exact noon in hour 6.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use luach::{ProportionalClock, SolarDay};
    ///
    /// let day = SolarDay::new(
    ///     Utc.with_ymd_and_hms(2024, 3, 20, 6, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap(),
    /// )
    /// .unwrap();
    /// let noon = Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap();
    /// assert_eq!(ProportionalClock::new(day).hour_at(noon).unwrap().hour_index, 7);
    /// ```
    pub fn hour_at<Tz: TimeZone>(
        &self,
        instant: DateTime<Tz>,
    ) -> Result<ProportionalHour, CalendarError> {
        let utc = instant.with_timezone(&Utc);
        let t = Time::<JD>::from_utc(utc);
        let daylight = self.day.daylight();
        let night_after = Period::new(self.day.sunset(), self.next_sunrise);
        let night_before = Period::new(self.previous_sunset, self.day.sunrise());

        let (span, is_daytime) = if daylight.contains(t) {
            (daylight, true)
        } else if night_after.contains(t) {
            (night_after, false)
        } else if night_before.contains(t) {
            (night_before, false)
        } else {
            return Err(CalendarError::OutsideSolarDay { instant: utc });
        };

        let ticks = (span.fraction_at(t) * HOURS_PER_HALF * TICKS_PER_HOUR as f64).round() as i64;
        let ticks = ticks.clamp(0, 12 * TICKS_PER_HOUR - 1);
        Ok(ProportionalHour {
            hour_index: (1 + ticks / TICKS_PER_HOUR) as u8,
            minute_fraction: (ticks % TICKS_PER_HOUR) as f64 / TICKS_PER_HOUR as f64 * 60.0,
            is_daytime,
        })
    }

    /// Instant `hours` proportional daytime hours after sunrise.
    pub fn instant_at(&self, hours: f64) -> Option<DateTime<Utc>> {
        self.day
            .daylight()
            .instant_at(hours / HOURS_PER_HALF)
            .to_utc()
    }

    pub fn zman(&self, zman: Zman) -> Option<DateTime<Utc>> {
        self.instant_at(zman.hours())
    }
}
