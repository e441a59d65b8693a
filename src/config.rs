// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Settings shared by every component of an [`Almanac`](crate::Almanac).
//!
//! With the `serde` feature the configuration round-trips through any serde
//! format; missing fields take their defaults:
//!
//! ```json
//! { "language": "english", "scope": "diaspora" }
//! ```

use crate::error::CalendarError;
use crate::holidays::Scope;
use crate::locale::Language;
use crate::molad::MoladConfig;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LuachConfig {
    /// Language of formatted output.
    pub language: Language,
    /// Molad anchor and day-start convention.
    pub molad: MoladConfig,
    /// Israel or diaspora observance calendar.
    pub scope: Scope,
}

impl LuachConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_molad(mut self, molad: MoladConfig) -> Self {
        self.molad = molad;
        self
    }

    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// # Errors
    ///
    /// [`CalendarError::InvalidConfig`] if the molad epoch is out of range.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.molad.validate()
    }
}
