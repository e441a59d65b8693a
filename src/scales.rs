// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Day-numbering scale markers.
//!
//! Each zero-sized type identifies a day count and encodes how values on
//! that count relate to the canonical civil **Julian Day**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day | 0.0 |
//! | [`RD`] | Rata Die (R.D. 1 = 0001-01-01 proleptic Gregorian) | 1 721 424.5 |

use super::instant::TimeScale;
use qtty::Days;

/// Julian Day, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Rata Die: fixed day number, R.D. 1 being Monday 0001-01-01 (proleptic
/// Gregorian) at midnight.
///
/// Integral values fall on civil midnight, which makes this the natural
/// scale for calendar arithmetic. It coincides with
/// `chrono::Datelike::num_days_from_ce`.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct RD;

/// `JD = RD + RD_EPOCH`.
const RD_EPOCH: Days = Days::new(1_721_424.5);

impl TimeScale for RD {
    const LABEL: &'static str = "RD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + RD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - RD_EPOCH
    }
}

#[cfg(test)]
mod tests {
    use super::super::instant::Time;
    use super::*;

    #[test]
    fn rd_one_is_first_gregorian_midnight() {
        let rd = Time::<RD>::new(1.0);
        let jd: Time<JD> = rd.to::<JD>();
        assert!((jd.quantity() - Days::new(1_721_425.5)).abs() < Days::new(1e-10));
    }

    #[test]
    fn hebrew_epoch_in_jd() {
        // 1 Tishrei AM 1 began at the civil midnight of JD 347 997.5.
        let epoch = Time::<RD>::new(-1_373_427.0);
        assert_eq!(epoch.to::<JD>().quantity(), Days::new(347_997.5));
    }

    #[test]
    fn jd_rd_roundtrip() {
        let jd = Time::<JD>::new(2_451_545.0);
        let back: Time<JD> = jd.to::<RD>().to::<JD>();
        assert!((back.quantity() - jd.quantity()).abs() < Days::new(1e-10));
    }
}
