// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mean moon phase from a reference new moon.
//!
//! The phase is the fraction of a mean synodic month elapsed since
//! 2000-01-06T18:14Z. This ignores the lunar orbit's eccentricity, so the
//! principal phases can be off by up to about half a day.

use std::f64::consts::TAU;
use std::fmt;

use chrono::{DateTime, TimeZone, Utc};
use qtty::Days;

use crate::instant::{days_ratio, Time};
use crate::locale::{Bilingual, Language};
use crate::scales::JD;

/// Mean synodic month.
pub const SYNODIC_MONTH: Days = Days::new(29.530_588_853);

/// New moon of 2000-01-06T18:14Z.
pub const REFERENCE_NEW_MOON: Time<JD> = Time::new(2_451_550.5 + (18.0 * 60.0 + 14.0) / 1440.0);

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoonPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// In cycle order, starting at the new moon.
    pub const ALL: [MoonPhase; 8] = [
        MoonPhase::New,
        MoonPhase::WaxingCrescent,
        MoonPhase::FirstQuarter,
        MoonPhase::WaxingGibbous,
        MoonPhase::Full,
        MoonPhase::WaningGibbous,
        MoonPhase::LastQuarter,
        MoonPhase::WaningCrescent,
    ];

    /// Eight equal bands, each centred on its phase: new moon covers
    /// `[15/16, 1/16)`, first quarter `[3/16, 5/16)`, and so on.
    pub fn from_fraction(fraction: f64) -> Self {
        let band = (fraction.rem_euclid(1.0) * 8.0 + 0.5).floor() as usize;
        Self::ALL[band % 8]
    }

    /// Classification by illuminated percentage, split into waxing and
    /// waning halves of the cycle.
    pub fn from_illumination(percent: f64, waxing: bool) -> Self {
        match (percent, waxing) {
            (p, _) if p < 3.0 => MoonPhase::New,
            (p, _) if p > 97.0 => MoonPhase::Full,
            (p, true) if p < 47.0 => MoonPhase::WaxingCrescent,
            (p, true) if p <= 53.0 => MoonPhase::FirstQuarter,
            (_, true) => MoonPhase::WaxingGibbous,
            (p, false) if p < 47.0 => MoonPhase::WaningCrescent,
            (p, false) if p <= 53.0 => MoonPhase::LastQuarter,
            (_, false) => MoonPhase::WaningGibbous,
        }
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            MoonPhase::New => "🌑",
            MoonPhase::WaxingCrescent => "🌒",
            MoonPhase::FirstQuarter => "🌓",
            MoonPhase::WaxingGibbous => "🌔",
            MoonPhase::Full => "🌕",
            MoonPhase::WaningGibbous => "🌖",
            MoonPhase::LastQuarter => "🌗",
            MoonPhase::WaningCrescent => "🌘",
        }
    }

    pub const fn name(self) -> Bilingual {
        match self {
            MoonPhase::New => Bilingual::new("מולד", "New Moon"),
            MoonPhase::WaxingCrescent => Bilingual::new("סהר מתמלא", "Waxing Crescent"),
            MoonPhase::FirstQuarter => Bilingual::new("רבע ראשון", "First Quarter"),
            MoonPhase::WaxingGibbous => Bilingual::new("ירח מתמלא", "Waxing Gibbous"),
            MoonPhase::Full => Bilingual::new("ירח מלא", "Full Moon"),
            MoonPhase::WaningGibbous => Bilingual::new("ירח מתמעט", "Waning Gibbous"),
            MoonPhase::LastQuarter => Bilingual::new("רבע אחרון", "Last Quarter"),
            MoonPhase::WaningCrescent => Bilingual::new("סהר מתמעט", "Waning Crescent"),
        }
    }
}

/// Fraction of the mean synodic month elapsed at `instant`, in `[0, 1)`.
pub fn phase_fraction<Tz: TimeZone>(instant: &DateTime<Tz>) -> f64 {
    let t = Time::<JD>::from_utc(instant.with_timezone(&Utc));
    let fraction = days_ratio(t - REFERENCE_NEW_MOON, SYNODIC_MONTH).rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0.
    if fraction >= 1.0 {
        0.0
    } else {
        fraction
    }
}

/// Phase, illumination and age of the mean moon.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MoonPhaseReading {
    pub phase: MoonPhase,
    pub fraction: f64,
    /// Illuminated percentage of the disc, `0.0..=100.0`.
    pub illumination_percent: f64,
    /// Days since the mean new moon.
    pub age_days: f64,
}

impl MoonPhaseReading {
    pub fn emoji(&self) -> &'static str {
        self.phase.emoji()
    }

    pub fn name(&self, language: Language) -> &'static str {
        self.phase.name().get(language)
    }

    /// Time since the mean new moon.
    pub fn age(&self) -> Days {
        Days::new(self.age_days)
    }

    pub fn is_waxing(&self) -> bool {
        self.fraction < 0.5
    }
}

impl fmt::Display for MoonPhaseReading {
    /// `"🌕 Full Moon (99.8%)"`; `{:#}` uses the Hebrew name.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if f.alternate() {
            self.phase.name().local
        } else {
            self.phase.name().alt
        };
        write!(f, "{} {} ({:.1}%)", self.emoji(), name, self.illumination_percent)
    }
}

/// Mean moon at `instant`.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use luach::{phase_for, MoonPhase};
///
/// let full = Utc.with_ymd_and_hms(2024, 1, 25, 17, 54, 0).unwrap();
/// let reading = phase_for(&full);
/// assert_eq!(reading.phase, MoonPhase::Full);
/// assert!(reading.illumination_percent > 95.0);
/// ```
pub fn phase_for<Tz: TimeZone>(instant: &DateTime<Tz>) -> MoonPhaseReading {
    let fraction = phase_fraction(instant);
    let illumination_percent = 50.0 * (1.0 - (TAU * fraction).cos());
    MoonPhaseReading {
        phase: MoonPhase::from_illumination(illumination_percent, fraction < 0.5),
        fraction,
        illumination_percent,
        age_days: (SYNODIC_MONTH * fraction).value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn reference_new_moon() {
        let reading = phase_for(&utc(2000, 1, 6, 18, 14));
        assert!(reading.illumination_percent < 0.01);
        assert_eq!(reading.phase, MoonPhase::New);
        assert!(reading.age_days < 1e-3 || reading.age_days > 29.5);
    }

    #[test]
    fn published_new_and_full_moons() {
        for instant in [utc(2024, 1, 11, 11, 57)] {
            let reading = phase_for(&instant);
            assert!(reading.illumination_percent < 5.0, "{instant}");
            assert_eq!(reading.phase, MoonPhase::New);
        }
        for instant in [utc(2024, 1, 25, 17, 54), utc(2023, 8, 31, 1, 36)] {
            let reading = phase_for(&instant);
            assert!(reading.illumination_percent > 95.0, "{instant}");
            assert_eq!(reading.phase, MoonPhase::Full);
            assert_eq!(MoonPhase::from_fraction(reading.fraction), MoonPhase::Full);
        }
    }

    #[test]
    fn published_quarters() {
        let first = phase_for(&utc(2024, 1, 18, 3, 53));
        assert!((first.illumination_percent - 50.0).abs() < 10.0);
        assert!(first.is_waxing());
        assert_eq!(MoonPhase::from_fraction(first.fraction), MoonPhase::FirstQuarter);

        let last = phase_for(&utc(2024, 2, 2, 23, 18));
        assert!((last.illumination_percent - 50.0).abs() < 10.0);
        assert!(!last.is_waxing());
        assert_eq!(MoonPhase::from_fraction(last.fraction), MoonPhase::LastQuarter);
    }

    #[test]
    fn fraction_bands_are_centred() {
        assert_eq!(MoonPhase::from_fraction(0.0), MoonPhase::New);
        assert_eq!(MoonPhase::from_fraction(0.06), MoonPhase::New);
        assert_eq!(MoonPhase::from_fraction(0.07), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_fraction(0.25), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_fraction(0.5), MoonPhase::Full);
        assert_eq!(MoonPhase::from_fraction(0.75), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_fraction(0.95), MoonPhase::New);
        assert_eq!(MoonPhase::from_fraction(-0.25), MoonPhase::LastQuarter);
    }

    #[test]
    fn illumination_bands_split_by_cycle_half() {
        assert_eq!(MoonPhase::from_illumination(30.0, true), MoonPhase::WaxingCrescent);
        assert_eq!(MoonPhase::from_illumination(30.0, false), MoonPhase::WaningCrescent);
        assert_eq!(MoonPhase::from_illumination(50.0, true), MoonPhase::FirstQuarter);
        assert_eq!(MoonPhase::from_illumination(50.0, false), MoonPhase::LastQuarter);
        assert_eq!(MoonPhase::from_illumination(80.0, true), MoonPhase::WaxingGibbous);
        assert_eq!(MoonPhase::from_illumination(80.0, false), MoonPhase::WaningGibbous);
        assert_eq!(MoonPhase::from_illumination(1.0, false), MoonPhase::New);
        assert_eq!(MoonPhase::from_illumination(99.0, true), MoonPhase::Full);
    }

    #[test]
    fn reading_stays_in_range_over_a_year() {
        let start = utc(2024, 1, 1, 0, 0);
        for hours in (0..24 * 366).step_by(7) {
            let reading = phase_for(&(start + chrono::Duration::hours(hours)));
            assert!((0.0..1.0).contains(&reading.fraction));
            assert!((0.0..=100.0).contains(&reading.illumination_percent));
            assert!((0.0..=SYNODIC_MONTH.value()).contains(&reading.age_days));
        }
    }

    #[test]
    fn labels() {
        let reading = phase_for(&utc(2024, 1, 25, 17, 54));
        assert_eq!(reading.emoji(), "🌕");
        assert_eq!(reading.name(Language::English), "Full Moon");
        assert_eq!(reading.name(Language::Hebrew), "ירח מלא");
        assert!(reading.to_string().starts_with("🌕 Full Moon ("));
        assert_eq!(MoonPhase::ALL.map(MoonPhase::emoji).concat(), "🌑🌒🌓🌔🌕🌖🌗🌘");
    }
}
