// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Fail-closed results for periodic callers.
//!
//! The molad and observance computations are called from refresh loops that
//! must keep running. Their entry points return [`Outcome<T>`] instead of
//! `Result`: an error *or a panic* inside the computation is caught at the
//! boundary, logged, and turned into [`Outcome::Unavailable`]. Callers can
//! tell a degraded value from a computed one without matching on strings.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::error::CalendarError;

/// Text rendered in place of a value that could not be computed.
pub const SENTINEL: &str = "⚠ unavailable";

/// Why a fail-closed computation produced no value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Unavailable {
    pub component: &'static str,
    pub reason: String,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SENTINEL} ({})", self.component)
    }
}

/// A computed value, or a marked sentinel standing in for a suppressed failure.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "status", content = "value", rename_all = "lowercase"))]
pub enum Outcome<T> {
    Computed(T),
    Unavailable(Unavailable),
}

impl<T> Outcome<T> {
    #[inline]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    #[inline]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    /// Borrow the computed value, if any.
    pub fn computed(&self) -> Option<&T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    /// Discard the failure details.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::Unavailable(_) => None,
        }
    }

    /// Re-raise a suppressed failure as [`CalendarError::ComputationFailure`].
    pub fn into_result(self) -> Result<T, CalendarError> {
        match self {
            Self::Computed(value) => Ok(value),
            Self::Unavailable(Unavailable { component, reason }) => {
                Err(CalendarError::ComputationFailure { component, reason })
            }
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Self::Computed(value) => Outcome::Computed(f(value)),
            Self::Unavailable(u) => Outcome::Unavailable(u),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed(value) => value.fmt(f),
            Self::Unavailable(u) => u.fmt(f),
        }
    }
}

/// Runs `f`, converting both `Err` and panics into [`Outcome::Unavailable`].
pub(crate) fn guard<T, F>(component: &'static str, f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, CalendarError>,
{
    // The guarded computations are pure; nothing observable is left
    // half-updated by an unwind.
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Outcome::Computed(value),
        Ok(Err(error)) => {
            warn!(component, %error, "computation failed closed");
            Outcome::Unavailable(Unavailable {
                component,
                reason: error.to_string(),
            })
        }
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_owned())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "panic".to_owned());
            warn!(component, %reason, "computation panicked; failed closed");
            Outcome::Unavailable(Unavailable { component, reason })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_is_computed() {
        let outcome = guard("test", || Ok::<_, CalendarError>(7));
        assert!(outcome.is_computed());
        assert_eq!(outcome.computed(), Some(&7));
        assert_eq!(outcome.to_string(), "7");
        assert_eq!(outcome.into_result(), Ok(7));
    }

    #[test]
    fn error_becomes_sentinel() {
        let outcome: Outcome<u8> = guard("molad", || Err(CalendarError::DegenerateSolarDay));
        assert!(outcome.is_unavailable());
        assert_eq!(outcome.to_string(), "⚠ unavailable (molad)");
        match &outcome {
            Outcome::Unavailable(u) => assert_eq!(u.reason, "sunrise must precede sunset"),
            Outcome::Computed(_) => panic!("expected sentinel"),
        }
        assert!(matches!(
            outcome.into_result(),
            Err(CalendarError::ComputationFailure { component: "molad", .. })
        ));
    }

    #[test]
    fn panic_becomes_sentinel() {
        let outcome: Outcome<u8> = guard("holidays", || panic!("table corrupted"));
        match outcome {
            Outcome::Unavailable(u) => {
                assert_eq!(u.component, "holidays");
                assert_eq!(u.reason, "table corrupted");
            }
            Outcome::Computed(_) => panic!("expected sentinel"),
        }
    }

    #[test]
    fn map_preserves_sentinel() {
        let computed = Outcome::<u8>::Computed(2).map(|v| v * 10);
        assert_eq!(computed.into_option(), Some(20));
        let unavailable: Outcome<u8> = Outcome::Unavailable(Unavailable {
            component: "x",
            reason: "y".into(),
        });
        assert_eq!(unavailable.map(|v| v * 10).into_option(), None);
    }
}
