//! Row-to-contact conversion.
//!
//! One bad optional value degrades gracefully (the value is dropped with a
//! warning); only mandatory-field and domain-validation failures reject the
//! whole row. Third-party CSV exports are assumed dirty.

use std::collections::BTreeSet;

use crate::csv::diagnostics::Diagnostic;
use crate::csv::header::ColumnMap;
use crate::csv::lexer::strip_bom;
use crate::models::{Cadence, Contact, FieldValidator, Role, Tag};

/// Safe trimmed, BOM-stripped cell by mapped index; empty if unmapped or
/// out of range.
fn cell(cells: &[String], idx: Option<usize>) -> String {
    idx.and_then(|i| cells.get(i))
        .map_or_else(String::new, |s| strip_bom(s).trim().to_string())
}

fn parse_role(raw: &str) -> Result<Role, String> {
    // Numeric shortcuts (1-4) are normalized before the enum check so
    // spreadsheet-style role columns are accepted transparently.
    if let Ok(n) = raw.parse::<u8>() {
        if let Some(role) = Role::from_shortcut(n) {
            return Ok(role);
        }
    }
    Role::parse(raw).ok_or_else(|| {
        format!(
            "role must be one of Investor, Partner, Customer, Lead (case-insensitive) \
             or a shortcut 1-4, found \"{raw}\""
        )
    })
}

fn parse_tags(raw: &str, line: usize, diagnostics: &mut Vec<Diagnostic>) -> BTreeSet<Tag> {
    let mut tags = BTreeSet::new();
    for piece in raw.split([',', ';']) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        match Tag::new(piece) {
            Ok(tag) => {
                tags.insert(tag);
            }
            Err(_) => match Tag::sanitized(piece) {
                Some(tag) => {
                    tags.insert(tag);
                }
                None => diagnostics.push(Diagnostic::warning(
                    line,
                    format!("skipping invalid tag after sanitize: {piece}"),
                )),
            },
        }
    }
    tags
}

fn parse_cadence(raw: &str, line: usize, diagnostics: &mut Vec<Diagnostic>) -> Option<Cadence> {
    if raw.is_empty() {
        return None;
    }
    match Cadence::find_days(raw) {
        Some(days) => match Cadence::new(days) {
            Ok(cadence) => Some(cadence),
            Err(_) => {
                diagnostics.push(Diagnostic::warning(
                    line,
                    format!("ignoring invalid cadence (must be positive days): {raw}"),
                ));
                None
            }
        },
        None => {
            diagnostics.push(Diagnostic::warning(
                line,
                format!("ignoring invalid cadence (no integer found): {raw}"),
            ));
            None
        }
    }
}

/// Builds a validated [`Contact`] from one row's cells.
///
/// Warnings about dropped optional values are appended to `diagnostics`
/// with the originating line number.
///
/// # Errors
///
/// Returns the rejection reason when a mandatory field is empty, the role
/// is outside the allowed set, or the field validator rejects a value. The
/// caller treats this as a malformed row, never as a fatal failure.
pub fn build_contact(
    cells: &[String],
    map: ColumnMap,
    validator: &dyn FieldValidator,
    line: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Contact, String> {
    let name = cell(cells, map.name);
    let phone = cell(cells, map.phone);
    let email = cell(cells, map.email);
    let address = cell(cells, map.address);
    let role_raw = cell(cells, map.role);

    let mut empty = Vec::new();
    for (value, label) in [
        (&name, "Name"),
        (&role_raw, "Role"),
        (&address, "Address"),
        (&phone, "Phone"),
        (&email, "Email"),
    ] {
        if value.is_empty() {
            empty.push(label);
        }
    }
    if !empty.is_empty() {
        return Err(format!("row needs non-empty {}", empty.join(", ")));
    }

    let role = parse_role(&role_raw)?;
    validator.validate_name(&name)?;
    validator.validate_phone(&phone)?;
    validator.validate_email(&email)?;
    validator.validate_address(&address)?;

    let tags = parse_tags(&cell(cells, map.tags), line, diagnostics);
    let cadence = parse_cadence(&cell(cells, map.cadence), line, diagnostics);

    // The interactions cell is advisory only: import never fabricates
    // history entries, so its value is checked purely to warn on garbage.
    let interactions_raw = cell(cells, map.interactions);
    if !interactions_raw.is_empty() && interactions_raw.parse::<i64>().is_err() {
        diagnostics.push(Diagnostic::warning(
            line,
            format!("ignoring invalid interactions count (must be an integer): {interactions_raw}"),
        ));
    }

    Ok(Contact {
        name,
        phone,
        email,
        address,
        role,
        tags,
        cadence,
        interactions: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StandardValidator;

    fn full_map() -> ColumnMap {
        ColumnMap::from_cells(
            &["Name", "Phone", "Email", "Address", "Role", "Tags", "Cadence", "Interactions"]
                .map(String::from),
        )
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| (*s).to_string()).collect()
    }

    fn build(cells: &[&str]) -> (Result<Contact, String>, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let result = build_contact(&row(cells), full_map(), &StandardValidator::new(), 2, &mut diags);
        (result, diags)
    }

    #[test]
    fn test_builds_complete_contact() {
        let (result, diags) = build(&[
            "Ada Lovelace",
            "5551234",
            "ada@example.com",
            "12 Analytical Way",
            "Investor",
            "vip;met_2024",
            "30",
            "4",
        ]);
        let contact = result.unwrap();
        assert_eq!(contact.name, "Ada Lovelace");
        assert_eq!(contact.role, Role::Investor);
        assert_eq!(contact.tags.len(), 2);
        assert_eq!(contact.cadence.unwrap().days(), 30);
        assert!(contact.interactions.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_missing_mandatory_lists_fields() {
        let (result, _) = build(&["", "5551234", "ada@example.com", "Somewhere", ""]);
        let reason = result.unwrap_err();
        assert!(reason.contains("Name"));
        assert!(reason.contains("Role"));
        assert!(!reason.contains("Phone"));
    }

    #[test]
    fn test_role_shortcut_2_is_partner() {
        let (result, _) = build(&["Bo", "5551234", "bo@x.io", "Somewhere", "2"]);
        assert_eq!(result.unwrap().role, Role::Partner);
    }

    #[test]
    fn test_role_case_insensitive() {
        let (result, _) = build(&["Bo", "5551234", "bo@x.io", "Somewhere", "lEaD"]);
        assert_eq!(result.unwrap().role, Role::Lead);
    }

    #[test]
    fn test_role_out_of_enum_rejects_row() {
        let (result, _) = build(&["Bo", "5551234", "bo@x.io", "Somewhere", "Vendor"]);
        assert!(result.unwrap_err().contains("Vendor"));

        let (result, _) = build(&["Bo", "5551234", "bo@x.io", "Somewhere", "5"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_validator_reason_surfaced_unmodified() {
        let (result, _) = build(&["Bo", "call me", "bo@x.io", "Somewhere", "Lead"]);
        assert_eq!(
            result.unwrap_err(),
            "phone numbers should only contain digits, and be at least 3 digits long"
        );
    }

    #[test]
    fn test_tag_sanitization_example() {
        let (result, diags) = build(&[
            "Bo",
            "5551234",
            "bo@x.io",
            "Somewhere",
            "Lead",
            "VIP!!, -- , Key Client",
        ]);
        let contact = result.unwrap();
        let tags: Vec<_> = contact.tags.iter().map(Tag::normalized).collect();
        assert_eq!(tags, vec!["key_client", "vip"]);
        // "--" sanitizes to nothing and is dropped with a warning.
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("--"));
    }

    #[test]
    fn test_unparsable_cadence_warns_but_row_succeeds() {
        let (result, diags) = build(&[
            "Bo", "5551234", "bo@x.io", "Somewhere", "Lead", "", "soonish",
        ]);
        let contact = result.unwrap();
        assert!(contact.cadence.is_none());
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("cadence"));
    }

    #[test]
    fn test_cadence_extracted_from_noise() {
        let (result, _) = build(&[
            "Bo", "5551234", "bo@x.io", "Somewhere", "Lead", "", "every 14 days",
        ]);
        assert_eq!(result.unwrap().cadence.unwrap().days(), 14);
    }

    #[test]
    fn test_negative_cadence_dropped() {
        let (result, diags) = build(&[
            "Bo", "5551234", "bo@x.io", "Somewhere", "Lead", "", "-7",
        ]);
        assert!(result.unwrap().cadence.is_none());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_interactions_cell_is_advisory() {
        let (result, diags) = build(&[
            "Bo", "5551234", "bo@x.io", "Somewhere", "Lead", "", "", "lots",
        ]);
        let contact = result.unwrap();
        assert!(contact.interactions.is_empty());
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("interactions"));
    }

    #[test]
    fn test_short_row_missing_cells_reads_empty() {
        // Row shorter than the header: unmapped trailing cells read as empty.
        let (result, _) = build(&["Bo", "5551234", "bo@x.io", "Somewhere", "Lead"]);
        let contact = result.unwrap();
        assert!(contact.tags.is_empty());
        assert!(contact.cadence.is_none());
    }
}
