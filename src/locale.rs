// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The two display languages and bilingual label pairs.

use std::fmt;

/// Display language for formatted output.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Language {
    /// Hebrew script, Hebrew numerals.
    #[default]
    Hebrew,
    /// English transliteration, Arabic digits.
    English,
}

/// A label in Hebrew script (`local`) and English transliteration (`alt`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bilingual {
    pub local: &'static str,
    pub alt: &'static str,
}

impl Bilingual {
    pub const fn new(local: &'static str, alt: &'static str) -> Self {
        Self { local, alt }
    }

    /// The label in `language`.
    #[inline]
    pub const fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Hebrew => self.local,
            Language::English => self.alt,
        }
    }
}

impl fmt::Display for Bilingual {
    /// Renders the English form; `{:#}` renders the Hebrew form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.local)
        } else {
            f.write_str(self.alt)
        }
    }
}
