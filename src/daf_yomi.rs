// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daf Yomi: one folio of the Babylonian Talmud per day.
//!
//! The cycle walks the 37 volumes of [`VOLUMES`] in order, one page a day,
//! and restarts after [`TOTAL_PAGES`] days. Folios are numbered from 2, so a
//! volume of `n` pages runs from page 2 to page `n + 1`.

use std::fmt;

use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::locale::{Bilingual, Language};
use crate::numeral::numeral_to_local_script;
use crate::instant::Time;
use crate::scales::RD;

/// A volume and the number of pages read from it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Volume {
    pub name: Bilingual,
    pub pages: u16,
}

const fn volume(local: &'static str, alt: &'static str, pages: u16) -> Volume {
    Volume {
        name: Bilingual::new(local, alt),
        pages,
    }
}

/// The volumes in reading order. Me'ilah includes Kinnim, Tamid and Middot.
#[rustfmt::skip]
pub static VOLUMES: [Volume; 37] = [
    volume("ברכות", "Berachot", 63),
    volume("שבת", "Shabbat", 156),
    volume("עירובין", "Eruvin", 104),
    volume("פסחים", "Pesachim", 120),
    volume("שקלים", "Shekalim", 21),
    volume("יומא", "Yoma", 87),
    volume("סוכה", "Sukkah", 55),
    volume("ביצה", "Beitzah", 39),
    volume("ראש השנה", "Rosh Hashanah", 34),
    volume("תענית", "Taanit", 30),
    volume("מגילה", "Megillah", 31),
    volume("מועד קטן", "Moed Katan", 28),
    volume("חגיגה", "Chagigah", 26),
    volume("יבמות", "Yevamot", 121),
    volume("כתובות", "Ketubot", 111),
    volume("נדרים", "Nedarim", 90),
    volume("נזיר", "Nazir", 65),
    volume("סוטה", "Sotah", 48),
    volume("גיטין", "Gittin", 89),
    volume("קידושין", "Kiddushin", 81),
    volume("בבא קמא", "Bava Kamma", 118),
    volume("בבא מציעא", "Bava Metzia", 118),
    volume("בבא בתרא", "Bava Batra", 175),
    volume("סנהדרין", "Sanhedrin", 112),
    volume("מכות", "Makkot", 23),
    volume("שבועות", "Shevuot", 48),
    volume("עבודה זרה", "Avodah Zarah", 75),
    volume("הוריות", "Horayot", 13),
    volume("זבחים", "Zevachim", 119),
    volume("מנחות", "Menachot", 109),
    volume("חולין", "Chullin", 141),
    volume("בכורות", "Bechorot", 60),
    volume("ערכין", "Arachin", 33),
    volume("תמורה", "Temurah", 33),
    volume("כריתות", "Keritot", 27),
    volume("מעילה", "Meilah", 36),
    volume("נדה", "Niddah", 72),
];

/// Days in one full cycle.
pub const TOTAL_PAGES: u32 = 2711;

/// R.D. of 24 June 1975, first day of the eighth cycle (the first of
/// [`TOTAL_PAGES`] days).
const EPOCH_FIXED: i64 = 721_163;
const EPOCH_CYCLE: u32 = 8;

/// Page read on one day.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReadingPosition {
    pub volume: Bilingual,
    /// Folio number, `2..=pages + 1`.
    pub page_number: u16,
    pub cycle: u32,
}

impl ReadingPosition {
    /// `"Berachot 2"` / `"ברכות ב׳"`.
    pub fn display(&self, language: Language) -> String {
        let page = match language {
            Language::Hebrew => numeral_to_local_script(i64::from(self.page_number))
                .unwrap_or_else(|_| self.page_number.to_string()),
            Language::English => self.page_number.to_string(),
        };
        format!("{} {}", self.volume.get(language), page)
    }
}

impl fmt::Display for ReadingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let language = if f.alternate() {
            Language::Hebrew
        } else {
            Language::English
        };
        f.write_str(&self.display(language))
    }
}

fn days_since_epoch(date: NaiveDate) -> Result<i64, CalendarError> {
    let days = Time::<RD>::from_date(date).day_number() - EPOCH_FIXED;
    if days < 0 {
        return Err(CalendarError::DateOutOfRange {
            date,
            epoch: Time::<RD>::from_day_number(EPOCH_FIXED)
                .to_date()
                .unwrap_or(NaiveDate::MIN),
        });
    }
    Ok(days)
}

/// The page read on `date`.
///
/// ```
/// use chrono::NaiveDate;
/// use luach::position_for_date;
///
/// let start = NaiveDate::from_ymd_opt(2020, 1, 5).unwrap();
/// assert_eq!(position_for_date(start).unwrap().to_string(), "Berachot 2");
/// ```
pub fn position_for_date(date: NaiveDate) -> Result<ReadingPosition, CalendarError> {
    let days = days_since_epoch(date)?;
    let total = i64::from(TOTAL_PAGES);
    let global_page = days % total + 1;
    let cycle = EPOCH_CYCLE + (days / total) as u32;

    let mut cumulative = 0i64;
    for v in &VOLUMES {
        let pages = i64::from(v.pages);
        if global_page <= cumulative + pages {
            return Ok(ReadingPosition {
                volume: v.name,
                page_number: (global_page - cumulative + 1) as u16,
                cycle,
            });
        }
        cumulative += pages;
    }
    Err(CalendarError::ComputationFailure {
        component: "daf_yomi",
        reason: format!("page {global_page} beyond the volume table"),
    })
}

/// Ordinal of the cycle running on `date` (the 1975 cycle is the eighth).
pub fn cycle_number(date: NaiveDate) -> Result<u32, CalendarError> {
    Ok(EPOCH_CYCLE + (days_since_epoch(date)? / i64::from(TOTAL_PAGES)) as u32)
}
