// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use chrono::{Datelike, FixedOffset, NaiveDate, TimeZone, Utc, Weekday};
use proptest::prelude::*;

use luach::{
    civil_to_hebrew, days_in_month, days_in_year, hebrew_to_civil, is_leap_year, month_name,
    months_in_year, next_molad, position_for_date, rosh_hashanah, year_to_local_script, Almanac,
    HolidayIndex, Language, LuachConfig, MoladConfig, Outcome, Period, ProportionalClock, Scope,
    SolarDay, JulianDate,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

proptest! {
    #[test]
    fn civil_hebrew_roundtrip(days in 1i32..3_600_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(days).unwrap();
        let hebrew = civil_to_hebrew(date).unwrap();
        prop_assert_eq!(hebrew_to_civil(hebrew.year(), hebrew.month(), hebrew.day()).unwrap(), date);
        prop_assert!(hebrew.day() <= days_in_month(hebrew.year(), hebrew.month()).unwrap());
    }

    #[test]
    fn next_day_is_next_hebrew_day(days in 1i32..3_600_000) {
        let date = NaiveDate::from_num_days_from_ce_opt(days).unwrap();
        let today = civil_to_hebrew(date).unwrap();
        let tomorrow = civil_to_hebrew(date.succ_opt().unwrap()).unwrap();
        if tomorrow.day() != 1 {
            prop_assert_eq!(tomorrow.day(), today.day() + 1);
            prop_assert_eq!(tomorrow.month(), today.month());
        } else {
            prop_assert_eq!(today.day(), today.month_length());
        }
    }

    #[test]
    fn year_lengths_are_canonical(year in 2i32..9000) {
        let length = days_in_year(year);
        let allowed: &[u16] = if is_leap_year(year) { &[383, 384, 385] } else { &[353, 354, 355] };
        prop_assert!(allowed.contains(&length));
        let sum: u16 = (1..=months_in_year(year))
            .map(|m| u16::from(days_in_month(year, m).unwrap()))
            .sum();
        prop_assert_eq!(sum, length);
    }
}

#[test]
fn new_year_never_falls_on_sunday_wednesday_or_friday() {
    for year in 2..6000 {
        let weekday = rosh_hashanah(year).unwrap().weekday();
        assert!(
            !matches!(weekday, Weekday::Sun | Weekday::Wed | Weekday::Fri),
            "{year}: {weekday}"
        );
    }
}

#[test]
fn month_names_follow_the_leap_cycle() {
    assert!(is_leap_year(5784));
    assert!(!is_leap_year(5785));
    assert_eq!(month_name(6, true).unwrap().alt, "Adar I");
    assert_eq!(month_name(7, true).unwrap().alt, "Adar II");
    assert_eq!(month_name(6, false).unwrap().alt, "Adar");
    assert_eq!(month_name(7, false).unwrap().alt, "Nisan");
    assert!(month_name(13, false).is_err());
    assert_eq!(year_to_local_script(5784).unwrap(), "תשפ״ד");
}

#[test]
fn adar_in_leap_and_common_years() {
    let purim_katan = civil_to_hebrew(ymd(2024, 2, 23)).unwrap();
    assert_eq!(purim_katan.display(Language::English), "14 Adar I 5784");
    let purim = civil_to_hebrew(ymd(2025, 3, 14)).unwrap();
    assert_eq!(purim.display(Language::English), "14 Adar 5785");
    assert!(hebrew_to_civil(5785, 13, 1).is_err());
    assert!(hebrew_to_civil(5784, 13, 1).is_ok());
}

#[test]
fn next_molad_matches_published_announcement() {
    let report = next_molad(ymd(2024, 3, 20), &MoladConfig::default())
        .into_option()
        .unwrap();
    assert_eq!(report.month_name().alt, "Nisan");
    assert_eq!(report.molad.describe(Language::English), "Tuesday 4:57 and 7 chalakim");
    assert_eq!(report.rosh_chodesh.days(), &[ymd(2024, 4, 9)]);
}

#[test]
fn scopes_agree_on_yom_kippur() {
    for scope in [Scope::Israel, Scope::Diaspora] {
        let next = HolidayIndex::new(scope)
            .next_observance(ymd(2024, 10, 11))
            .into_option()
            .flatten()
            .unwrap();
        assert_eq!(next.observance.civil_date, ymd(2024, 10, 12));
        assert_eq!(next.days_until, 1);
        assert!(next.observance.is_full_day_fast);
    }
}

#[test]
fn daf_yomi_after_cycle_start() {
    assert_eq!(position_for_date(ymd(2020, 1, 6)).unwrap().to_string(), "Berachot 3");
}

#[test]
fn almanac_snapshot_in_local_time() {
    let jerusalem = FixedOffset::east_opt(3 * 3600).unwrap();
    let day = SolarDay::new(
        jerusalem.with_ymd_and_hms(2024, 6, 21, 5, 33, 0).unwrap(),
        jerusalem.with_ymd_and_hms(2024, 6, 21, 19, 47, 0).unwrap(),
    )
    .unwrap();
    let clock = ProportionalClock::new(day);
    let now = jerusalem.with_ymd_and_hms(2024, 6, 21, 23, 30, 0).unwrap();

    let almanac = Almanac::new(LuachConfig::new().with_language(Language::English)).unwrap();
    let snapshot = almanac.snapshot(&now, Some(&clock));
    assert_eq!(snapshot.civil_date, ymd(2024, 6, 21));
    assert_eq!(snapshot.degraded_fields(), 0);
    match snapshot.proportional_hour {
        Some(Outcome::Computed(hour)) => assert!(!hour.is_daytime),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn solar_day_is_a_julian_period() {
    let sunrise = Utc.with_ymd_and_hms(2024, 3, 20, 4, 0, 0).unwrap();
    let sunset = Utc.with_ymd_and_hms(2024, 3, 20, 16, 0, 0).unwrap();
    let day = SolarDay::new(sunrise, sunset).unwrap();
    let period: Period<luach::JD> = day.daylight();
    assert_eq!(period.start, JulianDate::from_utc(sunrise));
    assert!((period.duration_days().value() - 0.5).abs() < 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn serde_snapshot_marks_unavailable_fields() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let snapshot = Almanac::new(LuachConfig::new()).unwrap().snapshot(&now, None);
    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["molad"]["status"], "computed");
    assert_eq!(json["daf_yomi"]["value"]["page_number"], 60);
    assert!(json["proportional_hour"].is_null());
}
