//! Contact record and interaction history types.

use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{Cadence, Role, Tag};

/// Maximum length of an interaction's free-text details.
const MAX_DETAILS_LEN: usize = 500;

/// The kind of interaction logged against a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    /// Phone or video call.
    Call,
    /// Email exchange.
    Email,
    /// In-person or scheduled meeting.
    Meeting,
    /// Free-form note.
    Note,
}

impl InteractionKind {
    /// Returns the kind as a lowercase string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "call",
            Self::Email => "email",
            Self::Meeting => "meeting",
            Self::Note => "note",
        }
    }

    /// Parses an interaction kind, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "call" => Some(Self::Call),
            "email" => Some(Self::Email),
            "meeting" => Some(Self::Meeting),
            "note" => Some(Self::Note),
            _ => None,
        }
    }
}

impl fmt::Display for InteractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One timestamped entry in a contact's interaction history.
///
/// The history is append-only and is never populated by CSV import; on
/// export only the entry count is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// What kind of interaction this was.
    pub kind: InteractionKind,
    /// Free-text detail of what happened.
    pub details: String,
    /// When the interaction took place.
    pub at: DateTime<Utc>,
}

impl Interaction {
    /// Creates a new interaction entry.
    ///
    /// # Errors
    ///
    /// Returns an error if `details` is blank or longer than 500 characters.
    pub fn new(kind: InteractionKind, details: impl Into<String>, at: DateTime<Utc>) -> Result<Self> {
        let details = details.into();
        if details.trim().is_empty() {
            return Err(Error::InvalidInput(
                "interaction details cannot be empty".to_string(),
            ));
        }
        if details.chars().count() > MAX_DETAILS_LEN {
            return Err(Error::InvalidInput(format!(
                "interaction details too long (max {MAX_DETAILS_LEN} characters)"
            )));
        }
        Ok(Self { kind, details, at })
    }
}

/// A contact record.
///
/// Mandatory fields (`name`, `phone`, `email`, `address`, `role`) are
/// guaranteed non-empty by the import path before a `Contact` is handed to
/// the caller; tags, cadence, and interactions are optional. The record is
/// self-contained: displaying or re-serializing it needs no parse context.
///
/// Structural equality covers every field, which is also the definition of
/// a duplicate during import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Display name.
    pub name: String,
    /// Phone number.
    pub phone: String,
    /// Email address.
    pub email: String,
    /// Postal address; may contain commas, quotes, or newlines.
    pub address: String,
    /// Relationship role.
    pub role: Role,
    /// Categorization tags, deduplicated by normalized form.
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    /// Follow-up cadence, if any.
    #[serde(default)]
    pub cadence: Option<Cadence>,
    /// Append-only interaction history.
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}
