//! Header recognition and column mapping.
//!
//! Columns are bound by name, not position: a [`ColumnMap`] is built once
//! per file from the header cells and passed by value into the row builder,
//! so no name lookup happens per row.

use crate::csv::lexer::strip_bom;
use crate::{Error, Result};

const H_NAME: &str = "name";
const H_PHONE: &str = "phone";
const H_EMAIL: &str = "email";
const H_ADDRESS: &str = "address";
const H_TAGS: &str = "tags";
const H_ROLE: &str = "role";
const H_CADENCE: &str = "cadence";
const H_INTERACTIONS: &str = "interactions";

/// Display names of the columns every import requires.
pub const MANDATORY_COLUMNS: [&str; 5] = ["Name", "Role", "Address", "Phone", "Email"];

/// Maps recognized column names to their positions for one parse session.
///
/// Built once per file; never persisted. Unknown columns are dropped so
/// files carrying extra vendor columns import cleanly, and the first
/// occurrence of a duplicated header wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMap {
    /// Position of the Name column.
    pub name: Option<usize>,
    /// Position of the Phone column.
    pub phone: Option<usize>,
    /// Position of the Email column.
    pub email: Option<usize>,
    /// Position of the Address column.
    pub address: Option<usize>,
    /// Position of the Tags column.
    pub tags: Option<usize>,
    /// Position of the Role column.
    pub role: Option<usize>,
    /// Position of the Cadence column.
    pub cadence: Option<usize>,
    /// Position of the Interactions column.
    pub interactions: Option<usize>,
}

fn canonical(cell: &str) -> String {
    strip_bom(cell).trim().to_lowercase()
}

impl ColumnMap {
    /// Builds a column map from header cells.
    #[must_use]
    pub fn from_cells(cells: &[String]) -> Self {
        let mut map = Self::default();
        for (i, cell) in cells.iter().enumerate() {
            let slot = match canonical(cell).as_str() {
                H_NAME => &mut map.name,
                H_PHONE => &mut map.phone,
                H_EMAIL => &mut map.email,
                H_ADDRESS => &mut map.address,
                H_TAGS => &mut map.tags,
                H_ROLE => &mut map.role,
                H_CADENCE => &mut map.cadence,
                H_INTERACTIONS => &mut map.interactions,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(i);
            }
        }
        map
    }

    /// Verifies every mandatory column is mapped.
    ///
    /// Runs once per file, not per row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumns`] listing every absent mandatory
    /// column by display name.
    pub fn require_mandatory(&self) -> Result<()> {
        let mut missing = Vec::new();
        for (idx, display) in [
            (self.name, "Name"),
            (self.role, "Role"),
            (self.address, "Address"),
            (self.phone, "Phone"),
            (self.email, "Email"),
        ] {
            if idx.is_none() {
                missing.push(display.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingColumns { columns: missing })
        }
    }
}

/// Tests whether a cell sequence looks like the contact header row.
///
/// True iff, case-insensitively and order-independently, the cells contain
/// all five mandatory column names. Extra cells are irrelevant.
#[must_use]
pub fn looks_like_header(cells: &[String]) -> bool {
    let mut seen = [false; 5];
    for cell in cells {
        match canonical(cell).as_str() {
            H_NAME => seen[0] = true,
            H_ROLE => seen[1] = true,
            H_ADDRESS => seen[2] = true,
            H_PHONE => seen[3] = true,
            H_EMAIL => seen[4] = true,
            _ => {}
        }
    }
    seen.iter().all(|&s| s)
}
