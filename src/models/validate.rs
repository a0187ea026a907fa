//! Field-level validation seam.
//!
//! The CSV engine does not own the format rules for names, phones, emails,
//! and addresses; it delegates to a [`FieldValidator`] and surfaces whatever
//! rejection reason the validator gives, unmodified. [`StandardValidator`]
//! is the default implementation.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("valid regex"));
static PHONE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{3,}$").expect("valid regex"));
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.\-]+@[A-Za-z0-9.\-]+$").expect("valid regex"));

/// Validates the free-text mandatory fields of a contact.
///
/// Each method accepts the value or rejects it with a human-readable
/// reason. The engine guarantees non-emptiness before calling, so
/// implementations may assume a non-blank input.
pub trait FieldValidator {
    /// Validates a contact name.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the name is not acceptable.
    fn validate_name(&self, name: &str) -> std::result::Result<(), String>;

    /// Validates a phone number.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the phone number is not acceptable.
    fn validate_phone(&self, phone: &str) -> std::result::Result<(), String>;

    /// Validates an email address.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the email is not acceptable.
    fn validate_email(&self, email: &str) -> std::result::Result<(), String>;

    /// Validates a postal address.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason if the address is not acceptable.
    fn validate_address(&self, address: &str) -> std::result::Result<(), String>;
}

/// Default field validation rules.
///
/// Names are alphanumerics and spaces; phones are at least three digits;
/// emails are a light `local@domain` shape; addresses accept any non-blank
/// text, including embedded commas, quotes, and newlines.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardValidator;

impl StandardValidator {
    /// Creates the standard validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FieldValidator for StandardValidator {
    fn validate_name(&self, name: &str) -> std::result::Result<(), String> {
        if NAME_SHAPE.is_match(name) {
            Ok(())
        } else {
            Err("names should only contain alphanumeric characters and spaces".to_string())
        }
    }

    fn validate_phone(&self, phone: &str) -> std::result::Result<(), String> {
        if PHONE_SHAPE.is_match(phone) {
            Ok(())
        } else {
            Err("phone numbers should only contain digits, and be at least 3 digits long"
                .to_string())
        }
    }

    fn validate_email(&self, email: &str) -> std::result::Result<(), String> {
        if EMAIL_SHAPE.is_match(email) {
            Ok(())
        } else {
            Err("emails should be of the form local-part@domain".to_string())
        }
    }

    fn validate_address(&self, address: &str) -> std::result::Result<(), String> {
        if address.trim().is_empty() {
            Err("addresses cannot be blank".to_string())
        } else {
            Ok(())
        }
    }
}
