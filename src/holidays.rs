// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Annual observances: festivals, fasts and commemorations.
//!
//! Every observance is a static record placed by `(month, day)` in the
//! Hebrew year. Months are named rather than numbered in the table and
//! resolved against the year's leap flag, so entries after Adar shift by one
//! index in a leap year without the table having to know it. A few entries
//! carry a weekday rule that moves them off (or away from) the weekly rest
//! day.

use chrono::{DateTime, NaiveDate, TimeZone, Weekday};
use tracing::{debug, instrument};

use crate::calendar::{civil_to_hebrew, is_leap_year, HebrewDate};
use crate::error::CalendarError;
use crate::instant::Time;
use crate::locale::{Bilingual, Language};
use crate::outcome::{guard, Outcome};
use crate::scales::RD;

/// Whether the second festival days of the diaspora are kept.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Scope {
    #[default]
    Israel,
    Diaspora,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObservanceKind {
    /// A full festival day.
    Festival,
    /// Intermediate festival day.
    CholHamoed,
    /// Eve of a festival.
    Eve,
    Minor,
    Fast,
    Commemoration,
}

/// One observance on one civil day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Observance {
    pub name: Bilingual,
    pub civil_date: NaiveDate,
    /// The Hebrew date actually observed, after any weekday rule.
    pub hebrew_date: HebrewDate,
    pub kind: ObservanceKind,
    pub is_fast_day: bool,
    pub is_full_day_fast: bool,
}

impl Observance {
    /// Name in `language`.
    pub fn name(&self, language: Language) -> &'static str {
        self.name.get(language)
    }
}

/// An observance and the whole days left until it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpcomingObservance {
    pub observance: Observance,
    pub days_until: i64,
}

// ═══════════════════════════════════════════════════════════════════════════
// Static table
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Month {
    Tishrei,
    Kislev,
    Tevet,
    Shevat,
    /// Adar in a common year, Adar II in a leap year.
    Adar,
    /// Leap years only.
    AdarI,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl Month {
    /// Index in the year's own numbering, or `None` if the year lacks it.
    fn index(self, is_leap: bool) -> Option<u8> {
        let shift = u8::from(is_leap);
        match self {
            Self::Tishrei => Some(1),
            Self::Kislev => Some(3),
            Self::Tevet => Some(4),
            Self::Shevat => Some(5),
            Self::AdarI => is_leap.then_some(6),
            Self::Adar => Some(6 + shift),
            Self::Nisan => Some(7 + shift),
            Self::Iyar => Some(8 + shift),
            Self::Sivan => Some(9 + shift),
            Self::Tammuz => Some(10 + shift),
            Self::Av => Some(11 + shift),
            Self::Elul => Some(12 + shift),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Fast {
    None,
    DawnToDusk,
    FullDay,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Keep {
    Everywhere,
    IsraelOnly,
    DiasporaOnly,
}

impl Keep {
    fn applies(self, scope: Scope) -> bool {
        match self {
            Self::Everywhere => true,
            Self::IsraelOnly => scope == Scope::Israel,
            Self::DiasporaOnly => scope == Scope::Diaspora,
        }
    }
}

/// Weekday rule applied to the nominal civil day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Shift {
    None,
    /// Saturday → Sunday.
    DeferFromRestDay,
    /// Saturday → the preceding Thursday.
    AdvanceFromRestDay,
    /// Friday/Saturday → Thursday, Monday → Tuesday.
    Independence,
    /// The eve of the (possibly moved) Independence day.
    Remembrance,
    /// Friday → Thursday, Sunday → Monday.
    Holocaust,
}

impl Shift {
    fn apply(self, day: i64) -> i64 {
        let weekday = |d: i64| Time::<RD>::from_day_number(d).weekday();
        match self {
            Self::None => day,
            Self::DeferFromRestDay => match weekday(day) {
                Weekday::Sat => day + 1,
                _ => day,
            },
            Self::AdvanceFromRestDay => match weekday(day) {
                Weekday::Sat => day - 2,
                _ => day,
            },
            Self::Independence => match weekday(day) {
                Weekday::Fri => day - 1,
                Weekday::Sat => day - 2,
                Weekday::Mon => day + 1,
                _ => day,
            },
            Self::Remembrance => Self::Independence.apply(day + 1) - 1,
            Self::Holocaust => match weekday(day) {
                Weekday::Fri => day - 1,
                Weekday::Sun => day + 1,
                _ => day,
            },
        }
    }
}

#[derive(Clone, Copy)]
struct Entry {
    name: Bilingual,
    month: Month,
    day: u8,
    /// Days added after resolving `(month, day)`, for runs that cross a month.
    offset: u8,
    kind: ObservanceKind,
    fast: Fast,
    keep: Keep,
    shift: Shift,
}

const fn entry(name: Bilingual, month: Month, day: u8, kind: ObservanceKind) -> Entry {
    Entry {
        name,
        month,
        day,
        offset: 0,
        kind,
        fast: Fast::None,
        keep: Keep::Everywhere,
        shift: Shift::None,
    }
}

const fn fast(name: Bilingual, month: Month, day: u8, fast: Fast, shift: Shift) -> Entry {
    Entry {
        fast,
        shift,
        ..entry(name, month, day, ObservanceKind::Fast)
    }
}

const fn kept(keep: Keep, e: Entry) -> Entry {
    Entry { keep, ..e }
}

const fn chanukah(name: Bilingual, offset: u8) -> Entry {
    Entry {
        offset,
        ..entry(name, Month::Kislev, 25, ObservanceKind::Minor)
    }
}

const fn shifted(shift: Shift, e: Entry) -> Entry {
    Entry { shift, ..e }
}

use Keep::{DiasporaOnly, IsraelOnly};
use Month::*;
use ObservanceKind::{CholHamoed, Commemoration, Eve, Festival, Minor};

const CHOL_HAMOED_SUKKOT: Bilingual = Bilingual::new("חול המועד סוכות", "Chol HaMoed Sukkot");
const CHOL_HAMOED_PESACH: Bilingual = Bilingual::new("חול המועד פסח", "Chol HaMoed Pesach");

#[rustfmt::skip]
static ENTRIES: [Entry; 55] = [
    entry(Bilingual::new("ראש השנה א׳", "Rosh Hashanah I"), Tishrei, 1, Festival),
    entry(Bilingual::new("ראש השנה ב׳", "Rosh Hashanah II"), Tishrei, 2, Festival),
    fast(Bilingual::new("צום גדליה", "Fast of Gedaliah"), Tishrei, 3, Fast::DawnToDusk, Shift::DeferFromRestDay),
    entry(Bilingual::new("ערב יום כיפור", "Erev Yom Kippur"), Tishrei, 9, Eve),
    fast(Bilingual::new("יום כיפור", "Yom Kippur"), Tishrei, 10, Fast::FullDay, Shift::None),
    entry(Bilingual::new("ערב סוכות", "Erev Sukkot"), Tishrei, 14, Eve),
    entry(Bilingual::new("סוכות", "Sukkot"), Tishrei, 15, Festival),
    kept(DiasporaOnly, entry(Bilingual::new("סוכות ב׳", "Sukkot II"), Tishrei, 16, Festival)),
    kept(IsraelOnly, entry(CHOL_HAMOED_SUKKOT, Tishrei, 16, CholHamoed)),
    entry(CHOL_HAMOED_SUKKOT, Tishrei, 17, CholHamoed),
    entry(CHOL_HAMOED_SUKKOT, Tishrei, 18, CholHamoed),
    entry(CHOL_HAMOED_SUKKOT, Tishrei, 19, CholHamoed),
    entry(CHOL_HAMOED_SUKKOT, Tishrei, 20, CholHamoed),
    entry(Bilingual::new("הושענא רבה", "Hoshana Rabbah"), Tishrei, 21, CholHamoed),
    kept(IsraelOnly, entry(Bilingual::new("שמיני עצרת ושמחת תורה", "Shemini Atzeret & Simchat Torah"), Tishrei, 22, Festival)),
    kept(DiasporaOnly, entry(Bilingual::new("שמיני עצרת", "Shemini Atzeret"), Tishrei, 22, Festival)),
    kept(DiasporaOnly, entry(Bilingual::new("שמחת תורה", "Simchat Torah"), Tishrei, 23, Festival)),
    chanukah(Bilingual::new("חנוכה נר א׳", "Chanukah: 1 Candle"), 0),
    chanukah(Bilingual::new("חנוכה נר ב׳", "Chanukah: 2 Candles"), 1),
    chanukah(Bilingual::new("חנוכה נר ג׳", "Chanukah: 3 Candles"), 2),
    chanukah(Bilingual::new("חנוכה נר ד׳", "Chanukah: 4 Candles"), 3),
    chanukah(Bilingual::new("חנוכה נר ה׳", "Chanukah: 5 Candles"), 4),
    chanukah(Bilingual::new("חנוכה נר ו׳", "Chanukah: 6 Candles"), 5),
    chanukah(Bilingual::new("חנוכה נר ז׳", "Chanukah: 7 Candles"), 6),
    chanukah(Bilingual::new("חנוכה נר ח׳", "Chanukah: 8 Candles"), 7),
    fast(Bilingual::new("עשרה בטבת", "Tenth of Tevet"), Tevet, 10, Fast::DawnToDusk, Shift::None),
    entry(Bilingual::new("ט״ו בשבט", "Tu BiShvat"), Shevat, 15, Minor),
    entry(Bilingual::new("פורים קטן", "Purim Katan"), AdarI, 14, Minor),
    fast(Bilingual::new("תענית אסתר", "Fast of Esther"), Adar, 13, Fast::DawnToDusk, Shift::AdvanceFromRestDay),
    entry(Bilingual::new("פורים", "Purim"), Adar, 14, Minor),
    entry(Bilingual::new("שושן פורים", "Shushan Purim"), Adar, 15, Minor),
    fast(Bilingual::new("תענית בכורות", "Fast of the Firstborn"), Nisan, 14, Fast::DawnToDusk, Shift::AdvanceFromRestDay),
    entry(Bilingual::new("ערב פסח", "Erev Pesach"), Nisan, 14, Eve),
    entry(Bilingual::new("פסח", "Pesach"), Nisan, 15, Festival),
    kept(DiasporaOnly, entry(Bilingual::new("פסח ב׳", "Pesach II"), Nisan, 16, Festival)),
    kept(IsraelOnly, entry(CHOL_HAMOED_PESACH, Nisan, 16, CholHamoed)),
    entry(CHOL_HAMOED_PESACH, Nisan, 17, CholHamoed),
    entry(CHOL_HAMOED_PESACH, Nisan, 18, CholHamoed),
    entry(CHOL_HAMOED_PESACH, Nisan, 19, CholHamoed),
    entry(CHOL_HAMOED_PESACH, Nisan, 20, CholHamoed),
    entry(Bilingual::new("שביעי של פסח", "Pesach VII"), Nisan, 21, Festival),
    kept(DiasporaOnly, entry(Bilingual::new("אחרון של פסח", "Pesach VIII"), Nisan, 22, Festival)),
    shifted(Shift::Holocaust, entry(Bilingual::new("יום השואה", "Yom HaShoah"), Nisan, 27, Commemoration)),
    shifted(Shift::Remembrance, entry(Bilingual::new("יום הזיכרון", "Yom HaZikaron"), Iyar, 4, Commemoration)),
    shifted(Shift::Independence, entry(Bilingual::new("יום העצמאות", "Yom HaAtzmaut"), Iyar, 5, Commemoration)),
    entry(Bilingual::new("פסח שני", "Pesach Sheni"), Iyar, 14, Minor),
    entry(Bilingual::new("ל״ג בעומר", "Lag BaOmer"), Iyar, 18, Minor),
    entry(Bilingual::new("יום ירושלים", "Yom Yerushalayim"), Iyar, 28, Commemoration),
    entry(Bilingual::new("ערב שבועות", "Erev Shavuot"), Sivan, 5, Eve),
    entry(Bilingual::new("שבועות", "Shavuot"), Sivan, 6, Festival),
    kept(DiasporaOnly, entry(Bilingual::new("שבועות ב׳", "Shavuot II"), Sivan, 7, Festival)),
    fast(Bilingual::new("שבעה עשר בתמוז", "Seventeenth of Tammuz"), Tammuz, 17, Fast::DawnToDusk, Shift::DeferFromRestDay),
    fast(Bilingual::new("תשעה באב", "Tisha B'Av"), Av, 9, Fast::FullDay, Shift::DeferFromRestDay),
    entry(Bilingual::new("ט״ו באב", "Tu B'Av"), Av, 15, Minor),
    entry(Bilingual::new("ערב ראש השנה", "Erev Rosh Hashanah"), Elul, 29, Eve),
];

// ═══════════════════════════════════════════════════════════════════════════
// Index
// ═══════════════════════════════════════════════════════════════════════════

/// Enumerates observances for one scope.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct HolidayIndex {
    scope: Scope,
}

impl HolidayIndex {
    pub const fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// All observances of Hebrew `year`, sorted by civil date.
    ///
    /// `is_leap_year` must match the year; the month positions of everything
    /// after Adar depend on it.
    pub fn observances_for_year(
        &self,
        year: i32,
        is_leap_year: bool,
    ) -> Result<Vec<Observance>, CalendarError> {
        if is_leap_year != crate::calendar::is_leap_year(year) {
            return Err(CalendarError::LeapYearMismatch {
                year,
                claimed: is_leap_year,
            });
        }

        let mut observances = Vec::with_capacity(ENTRIES.len());
        for e in ENTRIES.iter().filter(|e| e.keep.applies(self.scope)) {
            let Some(month) = e.month.index(is_leap_year) else {
                continue;
            };
            let nominal = HebrewDate::new(year, month, e.day)?.to_fixed() + i64::from(e.offset);
            let observed = e.shift.apply(nominal);
            let civil_date = Time::<RD>::from_day_number(observed).to_date().ok_or_else(|| {
                CalendarError::ComputationFailure {
                    component: "holidays",
                    reason: format!("R.D. {observed} is outside the civil range"),
                }
            })?;
            observances.push(Observance {
                name: e.name,
                civil_date,
                hebrew_date: civil_to_hebrew(civil_date)?,
                kind: e.kind,
                is_fast_day: e.fast != Fast::None,
                is_full_day_fast: e.fast == Fast::FullDay,
            });
        }
        observances.sort_by_key(|o| o.civil_date);
        debug!(year, count = observances.len(), scope = ?self.scope, "observances enumerated");
        Ok(observances)
    }

    /// The first observance strictly after `date`, searching the current
    /// and the following Hebrew year. `Computed(None)` means nothing is
    /// upcoming.
    #[instrument(level = "debug", skip(self), fields(scope = ?self.scope))]
    pub fn next_observance(&self, date: NaiveDate) -> Outcome<Option<UpcomingObservance>> {
        guard("holidays", || self.find_next(date))
    }

    /// Like [`next_observance`](Self::next_observance), dropping the time of
    /// day of `instant` in its own time zone before counting days.
    pub fn next_observance_at<Tz: TimeZone>(
        &self,
        instant: &DateTime<Tz>,
    ) -> Outcome<Option<UpcomingObservance>> {
        self.next_observance(instant.date_naive())
    }

    fn find_next(&self, date: NaiveDate) -> Result<Option<UpcomingObservance>, CalendarError> {
        let year = civil_to_hebrew(date)?.year();
        let mut candidates = self.observances_for_year(year, is_leap_year(year))?;
        candidates.extend(self.observances_for_year(year + 1, is_leap_year(year + 1))?);
        candidates.retain(|o| o.civil_date > date);
        candidates.sort_by_key(|o| o.civil_date);
        Ok(candidates.into_iter().next().map(|observance| UpcomingObservance {
            days_until: (observance.civil_date - date).num_days(),
            observance,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn find(list: &[Observance], alt: &str) -> NaiveDate {
        list.iter()
            .find(|o| o.name.alt == alt)
            .unwrap_or_else(|| panic!("{alt} missing"))
            .civil_date
    }

    fn year(scope: Scope, y: i32) -> Vec<Observance> {
        HolidayIndex::new(scope)
            .observances_for_year(y, is_leap_year(y))
            .unwrap()
    }

    #[test]
    fn known_dates_5784() {
        let list = year(Scope::Israel, 5784);
        assert_eq!(find(&list, "Yom Kippur"), ymd(2023, 9, 25));
        assert_eq!(find(&list, "Chanukah: 1 Candle"), ymd(2023, 12, 8));
        assert_eq!(find(&list, "Purim Katan"), ymd(2024, 2, 23));
        assert_eq!(find(&list, "Purim"), ymd(2024, 3, 24));
        assert_eq!(find(&list, "Pesach"), ymd(2024, 4, 23));
        assert_eq!(find(&list, "Tisha B'Av"), ymd(2024, 8, 13));
        assert_eq!(find(&list, "Erev Rosh Hashanah"), ymd(2024, 10, 2));
    }

    #[test]
    fn known_dates_5785() {
        let list = year(Scope::Israel, 5785);
        assert_eq!(find(&list, "Rosh Hashanah I"), ymd(2024, 10, 3));
        assert_eq!(find(&list, "Yom Kippur"), ymd(2024, 10, 12));
        assert_eq!(find(&list, "Chanukah: 1 Candle"), ymd(2024, 12, 26));
        assert_eq!(find(&list, "Chanukah: 8 Candles"), ymd(2025, 1, 2));
        assert_eq!(find(&list, "Purim"), ymd(2025, 3, 14));
        assert_eq!(find(&list, "Pesach"), ymd(2025, 4, 13));
        assert!(list.iter().all(|o| o.name.alt != "Purim Katan"));
    }

    #[test]
    fn adar_resolves_to_adar_ii_in_leap_years() {
        let list = year(Scope::Israel, 5784);
        let purim = list.iter().find(|o| o.name.alt == "Purim").unwrap();
        assert_eq!(purim.hebrew_date.month(), 7);
        assert_eq!(purim.hebrew_date.month_name().alt, "Adar II");
        let katan = list.iter().find(|o| o.name.alt == "Purim Katan").unwrap();
        assert_eq!(katan.hebrew_date.month_name().alt, "Adar I");
    }

    #[test]
    fn fasts_leave_the_rest_day() {
        // 3 Tishrei 5785 is a Saturday.
        let list = year(Scope::Israel, 5785);
        assert_eq!(find(&list, "Fast of Gedaliah"), ymd(2024, 10, 6));
        // 14 Nisan 5785 is a Saturday.
        assert_eq!(find(&list, "Fast of the Firstborn"), ymd(2025, 4, 10));
        assert_eq!(find(&list, "Erev Pesach"), ymd(2025, 4, 12));
        // 9 Av 5785 is itself a Sunday.
        assert_eq!(find(&list, "Tisha B'Av"), ymd(2025, 8, 3));

        // 13 Adar II 5784 is a Saturday.
        let list = year(Scope::Israel, 5784);
        assert_eq!(find(&list, "Fast of Esther"), ymd(2024, 3, 21));

        for y in 5700..5800 {
            for o in year(Scope::Diaspora, y).iter().filter(|o| o.is_fast_day) {
                let allowed_on_rest_day = o.name.alt == "Yom Kippur";
                assert!(
                    allowed_on_rest_day || o.civil_date.weekday() != Weekday::Sat,
                    "{} {y} on a Saturday",
                    o.name.alt
                );
            }
        }
    }

    #[test]
    fn israeli_memorial_days_move() {
        // 5 Iyar 5784 is a Monday; 27 Nisan 5784 is a Sunday.
        let list = year(Scope::Israel, 5784);
        assert_eq!(find(&list, "Yom HaAtzmaut"), ymd(2024, 5, 14));
        assert_eq!(find(&list, "Yom HaZikaron"), ymd(2024, 5, 13));
        assert_eq!(find(&list, "Yom HaShoah"), ymd(2024, 5, 6));

        // 5 Iyar 5785 is a Saturday; 27 Nisan 5785 is a Friday.
        let list = year(Scope::Israel, 5785);
        assert_eq!(find(&list, "Yom HaAtzmaut"), ymd(2025, 5, 1));
        assert_eq!(find(&list, "Yom HaZikaron"), ymd(2025, 4, 30));
        assert_eq!(find(&list, "Yom HaShoah"), ymd(2025, 4, 24));
    }

    #[test]
    fn fast_flags() {
        let list = year(Scope::Israel, 5785);
        let yk = list.iter().find(|o| o.name.alt == "Yom Kippur").unwrap();
        assert!(yk.is_fast_day && yk.is_full_day_fast);
        let tevet = list.iter().find(|o| o.name.alt == "Tenth of Tevet").unwrap();
        assert!(tevet.is_fast_day && !tevet.is_full_day_fast);
        let purim = list.iter().find(|o| o.name.alt == "Purim").unwrap();
        assert!(!purim.is_fast_day);
    }

    #[test]
    fn scopes_differ_in_second_days() {
        let israel = year(Scope::Israel, 5785);
        let diaspora = year(Scope::Diaspora, 5785);
        assert!(israel.iter().all(|o| o.name.alt != "Sukkot II"));
        assert_eq!(find(&diaspora, "Sukkot II"), ymd(2024, 10, 18));
        assert_eq!(find(&diaspora, "Shemini Atzeret"), ymd(2024, 10, 24));
        assert_eq!(find(&diaspora, "Simchat Torah"), ymd(2024, 10, 25));
        assert_eq!(
            find(&israel, "Shemini Atzeret & Simchat Torah"),
            ymd(2024, 10, 24)
        );
        let chol = |list: &[Observance]| {
            list.iter()
                .filter(|o| o.kind == ObservanceKind::CholHamoed)
                .count()
        };
        assert_eq!(chol(&israel), chol(&diaspora) + 2);
    }

    #[test]
    fn sorted_by_date() {
        for scope in [Scope::Israel, Scope::Diaspora] {
            for y in [5783, 5784, 5785, 5786] {
                let list = year(scope, y);
                assert!(list.len() >= 35);
                assert!(list.windows(2).all(|w| w[0].civil_date <= w[1].civil_date));
                assert!(list.iter().all(|o| o.hebrew_date.year() == y));
            }
        }
    }

    #[test]
    fn leap_flag_must_match() {
        let index = HolidayIndex::default();
        assert_eq!(
            index.observances_for_year(5785, true),
            Err(CalendarError::LeapYearMismatch {
                year: 5785,
                claimed: true
            })
        );
    }

    #[test]
    fn years_beyond_the_civil_range_are_errors() {
        let index = HolidayIndex::default();
        let year = i32::MAX;
        assert!(matches!(
            index.observances_for_year(year, is_leap_year(year)),
            Err(CalendarError::InvalidLunisolarDate { year: i32::MAX, .. })
        ));
        assert!(index.observances_for_year(0, is_leap_year(0)).is_err());
    }

    #[test]
    fn next_observance_from_eve_of_new_year() {
        let next = HolidayIndex::default()
            .next_observance(ymd(2024, 10, 1))
            .into_option()
            .flatten()
            .unwrap();
        assert_eq!(next.observance.name.alt, "Erev Rosh Hashanah");
        assert_eq!(next.days_until, 1);

        let next = HolidayIndex::default()
            .next_observance(ymd(2024, 10, 3))
            .into_option()
            .flatten()
            .unwrap();
        assert_eq!(next.observance.name.alt, "Rosh Hashanah II");
    }

    #[test]
    fn next_observance_strips_time_of_day() {
        let offset = FixedOffset::east_opt(3 * 3600).unwrap();
        let late = offset.with_ymd_and_hms(2024, 10, 1, 23, 59, 0).unwrap();
        let next = HolidayIndex::default()
            .next_observance_at(&late)
            .into_option()
            .flatten()
            .unwrap();
        assert_eq!(next.days_until, 1);
    }

    #[test]
    fn next_observance_is_always_within_a_year() {
        let index = HolidayIndex::new(Scope::Diaspora);
        let mut date = ymd(2023, 1, 1);
        while date < ymd(2026, 1, 1) {
            let next = index.next_observance(date).into_option().flatten().unwrap();
            assert!((0..=365).contains(&next.days_until), "{date}");
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn next_observance_fails_closed_before_epoch() {
        let outcome = HolidayIndex::default().next_observance(NaiveDate::MIN);
        assert!(outcome.is_unavailable());
    }
}
