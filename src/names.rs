// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Static label tables: Hebrew months, weekdays and Gregorian months.

use chrono::Weekday;

use crate::error::CalendarError;
use crate::locale::Bilingual;

/// Months of a common (12-month) year, indexed from Tishrei = 1.
#[rustfmt::skip]
static COMMON_YEAR_MONTHS: [Bilingual; 12] = [
    Bilingual::new("תשרי", "Tishrei"),
    Bilingual::new("חשון", "Cheshvan"),
    Bilingual::new("כסלו", "Kislev"),
    Bilingual::new("טבת", "Tevet"),
    Bilingual::new("שבט", "Shevat"),
    Bilingual::new("אדר", "Adar"),
    Bilingual::new("ניסן", "Nisan"),
    Bilingual::new("אייר", "Iyar"),
    Bilingual::new("סיון", "Sivan"),
    Bilingual::new("תמוז", "Tammuz"),
    Bilingual::new("אב", "Av"),
    Bilingual::new("אלול", "Elul"),
];

/// Months of a leap (13-month) year, indexed from Tishrei = 1.
#[rustfmt::skip]
static LEAP_YEAR_MONTHS: [Bilingual; 13] = [
    Bilingual::new("תשרי", "Tishrei"),
    Bilingual::new("חשון", "Cheshvan"),
    Bilingual::new("כסלו", "Kislev"),
    Bilingual::new("טבת", "Tevet"),
    Bilingual::new("שבט", "Shevat"),
    Bilingual::new("אדר א׳", "Adar I"),
    Bilingual::new("אדר ב׳", "Adar II"),
    Bilingual::new("ניסן", "Nisan"),
    Bilingual::new("אייר", "Iyar"),
    Bilingual::new("סיון", "Sivan"),
    Bilingual::new("תמוז", "Tammuz"),
    Bilingual::new("אב", "Av"),
    Bilingual::new("אלול", "Elul"),
];

#[rustfmt::skip]
static WEEKDAYS: [Bilingual; 7] = [
    Bilingual::new("ראשון", "Sunday"),
    Bilingual::new("שני", "Monday"),
    Bilingual::new("שלישי", "Tuesday"),
    Bilingual::new("רביעי", "Wednesday"),
    Bilingual::new("חמישי", "Thursday"),
    Bilingual::new("שישי", "Friday"),
    Bilingual::new("שבת", "Saturday"),
];

#[rustfmt::skip]
static GREGORIAN_MONTHS: [Bilingual; 12] = [
    Bilingual::new("ינואר", "January"),
    Bilingual::new("פברואר", "February"),
    Bilingual::new("מרץ", "March"),
    Bilingual::new("אפריל", "April"),
    Bilingual::new("מאי", "May"),
    Bilingual::new("יוני", "June"),
    Bilingual::new("יולי", "July"),
    Bilingual::new("אוגוסט", "August"),
    Bilingual::new("ספטמבר", "September"),
    Bilingual::new("אוקטובר", "October"),
    Bilingual::new("נובמבר", "November"),
    Bilingual::new("דצמבר", "December"),
];

/// Name of Hebrew month `month` (Tishrei = 1) in a leap or common year.
///
/// The caller passes the index already computed for the right year class:
/// index 7 is Adar II in a leap year but Nisan in a common one.
///
/// ```
/// use luach::month_name;
///
/// assert_eq!(month_name(6, true).unwrap().alt, "Adar I");
/// assert_eq!(month_name(7, false).unwrap().alt, "Nisan");
/// ```
pub fn month_name(month: u8, is_leap_year: bool) -> Result<Bilingual, CalendarError> {
    let table: &[Bilingual] = if is_leap_year {
        &LEAP_YEAR_MONTHS
    } else {
        &COMMON_YEAR_MONTHS
    };
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| table.get(i))
        .copied()
        .ok_or(CalendarError::InvalidMonth {
            month,
            is_leap_year,
        })
}

/// Name of a weekday.
pub fn weekday_name(weekday: Weekday) -> Bilingual {
    WEEKDAYS[weekday.num_days_from_sunday() as usize]
}

/// Name of a Gregorian month, `1..=12`.
pub(crate) fn gregorian_month_name(month: u32) -> Bilingual {
    GREGORIAN_MONTHS[(month.clamp(1, 12) - 1) as usize]
}
