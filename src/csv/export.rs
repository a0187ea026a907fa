//! Export: field escaping, row writing, and export orchestration.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::models::Contact;
use crate::{Error, Result};

/// Delimiter used for all exported files.
pub const EXPORT_DELIMITER: char = ',';

/// Escapes one cell for CSV output.
///
/// The cell is wrapped in double quotes, with internal quotes doubled, iff
/// it contains the active delimiter, a quote, or any newline character.
/// Escaping must be applied exactly once per write; it is not idempotent.
#[must_use]
pub fn escape(cell: &str, delim: char) -> String {
    let needs_quotes = cell.contains(delim)
        || cell.contains('"')
        || cell.contains('\n')
        || cell.contains('\r');
    if needs_quotes {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Writes one row: escaped cells joined by the delimiter plus exactly one
/// trailing newline.
///
/// # Errors
///
/// Returns any error from the sink.
pub fn write_row<W: Write>(cells: &[String], delim: char, out: &mut W) -> std::io::Result<()> {
    let mut rendered = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            rendered.push(delim);
        }
        rendered.push_str(&escape(cell, delim));
    }
    rendered.push('\n');
    out.write_all(rendered.as_bytes())
}

/// Writes a header row. Header cells go through the same escaping as data.
///
/// # Errors
///
/// Returns any error from the sink.
pub fn write_header<W: Write>(columns: &[String], delim: char, out: &mut W) -> std::io::Result<()> {
    write_row(columns, delim, out)
}

/// Named subset of columns to emit on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportProfile {
    /// Name, Phone, Email, Address, Role.
    Standard,
    /// Standard plus Tags, Cadence, and an Interactions count.
    Full,
}

impl ExportProfile {
    /// Parses a profile name, case-insensitively.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "full" => Some(Self::Full),
            _ => None,
        }
    }

    /// Returns the column headers this profile emits.
    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        match self {
            Self::Standard => &["Name", "Phone", "Email", "Address", "Role"],
            Self::Full => &[
                "Name",
                "Phone",
                "Email",
                "Address",
                "Role",
                "Tags",
                "Cadence",
                "Interactions",
            ],
        }
    }

    /// Renders a contact's cells for this profile, unescaped.
    ///
    /// Tags are joined with `;`, cadence is a bare day count or empty, and
    /// interactions are rendered as a count only, never raw details.
    #[must_use]
    pub fn render_cells(&self, contact: &Contact) -> Vec<String> {
        let mut cells = vec![
            contact.name.clone(),
            contact.phone.clone(),
            contact.email.clone(),
            contact.address.clone(),
            contact.role.as_str().to_string(),
        ];
        if *self == Self::Full {
            let tags: Vec<&str> = contact.tags.iter().map(crate::models::Tag::as_str).collect();
            cells.push(tags.join(";"));
            cells.push(
                contact
                    .cadence
                    .map_or_else(String::new, |c| c.to_string()),
            );
            cells.push(contact.interactions.len().to_string());
        }
        cells
    }
}

impl std::fmt::Display for ExportProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Full => write!(f, "full"),
        }
    }
}

/// What one export call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Rows were written to the given path.
    Written {
        /// Resolved output path.
        path: PathBuf,
        /// Number of contact rows written (excluding the header).
        count: usize,
    },
    /// The record set was empty; no file was created.
    NothingToExport,
}

/// Service for exporting contacts to CSV files.
///
/// The caller supplies the (already filtered) contact set; this service
/// owns column selection, filename resolution, and the collision policy.
#[derive(Debug, Clone)]
pub struct ExportService {
    out_dir: PathBuf,
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportService {
    /// Creates an export service writing into the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out_dir: PathBuf::from("."),
        }
    }

    /// Sets the directory exported files are written into.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Exports contacts to a file.
    ///
    /// When `filename` is absent one is synthesized from the current
    /// timestamp; `.csv` is appended if missing; an existing target gets a
    /// `_1`, `_2`, … suffix rather than being overwritten. An empty contact
    /// set yields [`ExportOutcome::NothingToExport`] and writes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the resolved path cannot be created or written.
    pub fn export_records(
        &self,
        contacts: &[Contact],
        profile: ExportProfile,
        filename: Option<&str>,
    ) -> Result<ExportOutcome> {
        if contacts.is_empty() {
            debug!("nothing to export");
            return Ok(ExportOutcome::NothingToExport);
        }

        let path = self.resolve_path(filename);
        let io_err = |e: std::io::Error| Error::Io {
            path: path.display().to_string(),
            cause: e.to_string(),
        };

        let file = File::create(&path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        let count = self
            .export_to_writer(contacts, profile, &mut out)
            .map_err(io_err)?;
        out.flush().map_err(io_err)?;

        info!(path = %path.display(), count, %profile, "exported contacts");
        Ok(ExportOutcome::Written { path, count })
    }

    /// Streams header and contact rows into any sink; returns rows written.
    ///
    /// # Errors
    ///
    /// Returns any error from the sink.
    pub fn export_to_writer<W: Write>(
        &self,
        contacts: &[Contact],
        profile: ExportProfile,
        out: &mut W,
    ) -> std::io::Result<usize> {
        let columns: Vec<String> = profile.columns().iter().map(|c| (*c).to_string()).collect();
        write_header(&columns, EXPORT_DELIMITER, out)?;
        for contact in contacts {
            write_row(&profile.render_cells(contact), EXPORT_DELIMITER, out)?;
        }
        Ok(contacts.len())
    }

    /// Resolves the output path: default name, extension, collision suffix.
    fn resolve_path(&self, filename: Option<&str>) -> PathBuf {
        let name = filename.map_or_else(
            || {
                chrono::Local::now()
                    .format("contacts_%Y%m%d_%H%M%S")
                    .to_string()
            },
            ToString::to_string,
        );
        let name = if name.to_lowercase().ends_with(".csv") {
            name
        } else {
            format!("{name}.csv")
        };

        let candidate = self.out_dir.join(&name);
        if !candidate.exists() {
            return candidate;
        }

        let stem = Path::new(&name)
            .file_stem()
            .map_or_else(|| name.clone(), |s| s.to_string_lossy().to_string());
        let mut n = 1;
        loop {
            let next = self.out_dir.join(format!("{stem}_{n}.csv"));
            if !next.exists() {
                return next;
            }
            n += 1;
        }
    }
}
