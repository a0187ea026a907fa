//! Contact role type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The relationship a contact has to the book's owner.
///
/// Parsing is case-insensitive; the canonical display form is capitalized.
/// CSV import additionally accepts the numeric shortcuts 1-4 via
/// [`Role::from_shortcut`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Has invested, or may invest, in the venture.
    Investor,
    /// Business or integration partner.
    Partner,
    /// Paying customer.
    Customer,
    /// Potential customer not yet converted.
    Lead,
}

impl Role {
    /// Returns all role variants in shortcut order (1-4).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Investor, Self::Partner, Self::Customer, Self::Lead]
    }

    /// Returns the canonical display form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Investor => "Investor",
            Self::Partner => "Partner",
            Self::Customer => "Customer",
            Self::Lead => "Lead",
        }
    }

    /// Parses a role from a string, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "investor" => Some(Self::Investor),
            "partner" => Some(Self::Partner),
            "customer" => Some(Self::Customer),
            "lead" => Some(Self::Lead),
            _ => None,
        }
    }

    /// Resolves a numeric role shortcut (1-4) as accepted on CSV import.
    #[must_use]
    pub const fn from_shortcut(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Investor),
            2 => Some(Self::Partner),
            3 => Some(Self::Customer),
            4 => Some(Self::Lead),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
