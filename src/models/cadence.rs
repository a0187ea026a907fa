//! Follow-up cadence type.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static INT_FIRST: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").expect("valid regex"));

/// Desired interval, in days, between follow-ups with a contact.
///
/// Always a positive number of days; a contact with no follow-up schedule
/// carries no cadence at all (`Option<Cadence>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cadence(u32);

impl Cadence {
    /// Creates a cadence from a day count.
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is zero or negative.
    pub fn new(days: i64) -> Result<Self> {
        if days <= 0 {
            return Err(Error::InvalidInput(format!(
                "cadence must be a positive number of days, got {days}"
            )));
        }
        u32::try_from(days)
            .map(Self)
            .map_err(|_| Error::InvalidInput(format!("cadence of {days} days is out of range")))
    }

    /// Returns the interval in days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.0
    }

    /// Extracts the first signed-or-unsigned integer substring from a cell.
    ///
    /// This is the lenient scan used on CSV import: `"every 14 days"`
    /// yields `Some(14)`, `"weekly"` yields `None`.
    #[must_use]
    pub fn find_days(text: &str) -> Option<i64> {
        INT_FIRST.find(text).and_then(|m| m.as_str().parse().ok())
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
