// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hebrew additive numerals (gematria).
//!
//! Each decimal digit group maps to one letter; hundreds above 400 stack
//! ת. Values ending in 15 and 16 are written ט״ו and ט״ז instead of the
//! direct י״ה / י״ו, which would spell a divine name.
//!
//! Punctuation: a lone letter takes a trailing geresh (`׳`), a group of two
//! or more letters takes gershayim (`״`) before its last letter, and the
//! thousands letter is followed by a geresh. An exact multiple of a thousand
//! is written with the word אלפים so that it never collides with the units.

use crate::error::CalendarError;

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';
const THOUSANDS_WORD: &str = "אלפים";

const ONES: [char; 9] = ['א', 'ב', 'ג', 'ד', 'ה', 'ו', 'ז', 'ח', 'ט'];
const TENS: [char; 9] = ['י', 'כ', 'ל', 'מ', 'נ', 'ס', 'ע', 'פ', 'צ'];
const HUNDREDS: [char; 4] = ['ק', 'ר', 'ש', 'ת'];

/// Renders `n` in Hebrew numerals.
///
/// ```
/// use luach::numeral_to_local_script;
///
/// assert_eq!(numeral_to_local_script(5784).unwrap(), "ה׳תשפ״ד");
/// assert_eq!(numeral_to_local_script(15).unwrap(), "ט״ו");
/// assert!(numeral_to_local_script(0).is_err());
/// ```
pub fn numeral_to_local_script(n: i64) -> Result<String, CalendarError> {
    if !(1..=9999).contains(&n) {
        return Err(CalendarError::InvalidNumeral { value: n });
    }
    let thousands = (n / 1000) as usize;
    let rest = (n % 1000) as u16;

    let mut out = String::new();
    if thousands > 0 {
        out.push(ONES[thousands - 1]);
        out.push(GERESH);
        if rest == 0 {
            out.push(' ');
            out.push_str(THOUSANDS_WORD);
            return Ok(out);
        }
    }
    out.push_str(&punctuate(&letters_below_thousand(rest)));
    Ok(out)
}

/// Year display without the thousands: 5784 → תשפ״ד.
pub fn year_to_local_script(year: i32) -> Result<String, CalendarError> {
    match year % 1000 {
        0 => numeral_to_local_script(i64::from(year)),
        rest => numeral_to_local_script(i64::from(rest)),
    }
}

/// Unpunctuated letters for `1..=999`.
fn letters_below_thousand(n: u16) -> Vec<char> {
    let mut letters = Vec::with_capacity(6);
    let mut hundreds = usize::from(n / 100);
    while hundreds > 4 {
        letters.push(HUNDREDS[3]);
        hundreds -= 4;
    }
    if hundreds > 0 {
        letters.push(HUNDREDS[hundreds - 1]);
    }

    match n % 100 {
        15 => letters.extend(['ט', 'ו']),
        16 => letters.extend(['ט', 'ז']),
        tail => {
            let (tens, ones) = (usize::from(tail / 10), usize::from(tail % 10));
            if tens > 0 {
                letters.push(TENS[tens - 1]);
            }
            if ones > 0 {
                letters.push(ONES[ones - 1]);
            }
        }
    }
    letters
}

fn punctuate(letters: &[char]) -> String {
    match letters {
        [] => String::new(),
        [single] => [*single, GERESH].iter().collect(),
        [init @ .., last] => {
            let mut s: String = init.iter().collect();
            s.push(GERSHAYIM);
            s.push(*last);
            s
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn single_letters() {
        assert_eq!(numeral_to_local_script(1).unwrap(), "א׳");
        assert_eq!(numeral_to_local_script(10).unwrap(), "י׳");
        assert_eq!(numeral_to_local_script(400).unwrap(), "ת׳");
    }

    #[test]
    fn compound_values() {
        assert_eq!(numeral_to_local_script(25).unwrap(), "כ״ה");
        assert_eq!(numeral_to_local_script(30).unwrap(), "ל׳");
        assert_eq!(numeral_to_local_script(784).unwrap(), "תשפ״ד");
        assert_eq!(numeral_to_local_script(900).unwrap(), "תת״ק");
        assert_eq!(numeral_to_local_script(999).unwrap(), "תתקצ״ט");
    }

    #[test]
    fn reserved_combinations_use_alternate_forms() {
        assert_eq!(numeral_to_local_script(15).unwrap(), "ט״ו");
        assert_eq!(numeral_to_local_script(16).unwrap(), "ט״ז");
        assert_eq!(numeral_to_local_script(115).unwrap(), "קט״ו");
        assert_eq!(numeral_to_local_script(5716).unwrap(), "ה׳תשט״ז");
        assert_eq!(numeral_to_local_script(17).unwrap(), "י״ז");
    }

    #[test]
    fn thousands() {
        assert_eq!(numeral_to_local_script(5784).unwrap(), "ה׳תשפ״ד");
        assert_eq!(numeral_to_local_script(1001).unwrap(), "א׳א׳");
        assert_eq!(numeral_to_local_script(5000).unwrap(), "ה׳ אלפים");
    }

    #[test]
    fn year_without_thousands() {
        assert_eq!(year_to_local_script(5784).unwrap(), "תשפ״ד");
        assert_eq!(year_to_local_script(5785).unwrap(), "תשפ״ה");
        assert_eq!(year_to_local_script(6000).unwrap(), "ו׳ אלפים");
    }

    #[test]
    fn out_of_range_is_rejected() {
        for n in [0, -3, 10_000, 123_456] {
            assert_eq!(
                numeral_to_local_script(n),
                Err(CalendarError::InvalidNumeral { value: n })
            );
        }
    }

    #[test]
    fn injective_and_deterministic_over_domain() {
        let mut seen = HashSet::with_capacity(9999);
        for n in 1..=9999 {
            let rendered = numeral_to_local_script(n).unwrap();
            assert_eq!(rendered, numeral_to_local_script(n).unwrap());
            assert!(seen.insert(rendered), "duplicate rendering for {n}");
        }
    }
}
