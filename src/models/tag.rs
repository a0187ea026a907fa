//! Contact tag labels.

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Maximum tag length in characters.
const MAX_TAG_LEN: usize = 50;

static TAG_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+$").expect("valid regex"));
static NON_ALNUM_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// A short categorization label attached to a contact.
///
/// Tags are restricted to ASCII alphanumerics and underscores. Equality,
/// ordering, and hashing compare the lowercase form, so `VIP` and `vip` are
/// the same tag; the display form is whatever casing the tag was created
/// with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    /// Creates a tag from a raw label.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed label is empty, longer than 50
    /// characters, or contains anything other than alphanumerics and
    /// underscores.
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::InvalidInput("tag cannot be empty".to_string()));
        }
        if trimmed.chars().count() > MAX_TAG_LEN {
            return Err(Error::InvalidInput(format!(
                "tag '{trimmed}' exceeds {MAX_TAG_LEN} characters"
            )));
        }
        if !TAG_SHAPE.is_match(trimmed) {
            return Err(Error::InvalidInput(format!(
                "tag '{trimmed}' may only contain alphanumerics and underscores"
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Creates a tag by sanitizing an arbitrary label.
    ///
    /// Lowercases the input, collapses every run of non-alphanumerics into a
    /// single underscore, and strips leading/trailing underscores. Returns
    /// `None` when nothing usable remains.
    #[must_use]
    pub fn sanitized(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_lowercase();
        let slug = NON_ALNUM_RUN.replace_all(&lowered, "_");
        let slug = slug.trim_matches('_');
        if slug.is_empty() {
            return None;
        }
        Self::new(slug).ok()
    }

    /// Returns the tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercase form used for equality and ordering.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Tag {}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized().cmp(&other.normalized())
    }
}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized().hash(state);
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}
