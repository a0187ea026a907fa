//! Import orchestration.
//!
//! Drives header detection, column mapping, and row building across a whole
//! source. The only fatal failures are file-level: an unreadable source, no
//! header row, or a header missing a mandatory column. Everything below
//! that is absorbed row by row into the returned summary and diagnostics.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::csv::diagnostics::Diagnostic;
use crate::csv::header::{looks_like_header, ColumnMap};
use crate::csv::lexer::{detect_delimiter, is_blank_row, split_line, strip_bom};
use crate::csv::row::build_contact;
use crate::models::{Contact, FieldValidator, StandardValidator};
use crate::store::ContactStore;
use crate::{Error, Result};

/// Counts of what happened to each row of one import call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Rows converted into contacts and returned.
    pub imported: usize,
    /// Rows excluded as structural duplicates of existing contacts.
    pub duplicates: usize,
    /// Rows skipped because they failed a mandatory-field or validation check.
    pub malformed: usize,
}

/// Everything one import call produced.
#[derive(Debug)]
pub struct ImportOutcome {
    /// The surviving contacts, in file order. The caller inserts them.
    pub contacts: Vec<Contact>,
    /// Row accounting.
    pub summary: ImportSummary,
    /// Per-line warnings and skip reasons, in file order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Header detection result: delimiter, header cells, and line number.
struct HeaderInfo {
    delimiter: char,
    cells: Vec<String>,
    line_no: usize,
}

/// Service for importing contacts from CSV sources.
pub struct ImportService {
    validator: Box<dyn FieldValidator>,
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportService {
    /// Creates an import service with the standard field validator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_validator(Box::new(StandardValidator::new()))
    }

    /// Creates an import service with a caller-supplied field validator.
    #[must_use]
    pub fn with_validator(validator: Box<dyn FieldValidator>) -> Self {
        Self { validator }
    }

    /// Imports contacts from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be read, no header row is
    /// located, or the header lacks a mandatory column. Row-level problems
    /// never fail the call.
    pub fn import_path(&self, path: &Path, store: &dyn ContactStore) -> Result<ImportOutcome> {
        let file = File::open(path).map_err(|e| Error::Io {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;
        let outcome = self.import_from_reader(BufReader::new(file), store)?;
        info!(
            path = %path.display(),
            imported = outcome.summary.imported,
            duplicates = outcome.summary.duplicates,
            malformed = outcome.summary.malformed,
            "parsed contacts from csv"
        );
        Ok(outcome)
    }

    /// Imports contacts from any buffered reader.
    ///
    /// Duplicate detection compares each built contact against the store
    /// snapshot taken at call time, after all rows are built; two identical
    /// new rows within the same file are both imported.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::import_path`], with read errors
    /// attributed to `<input>`.
    pub fn import_from_reader<R: BufRead>(
        &self,
        reader: R,
        store: &dyn ContactStore,
    ) -> Result<ImportOutcome> {
        let mut lines = reader.lines();
        let mut line_no = 0;

        let header = find_header(&mut lines, &mut line_no)?;
        let map = ColumnMap::from_cells(&header.cells);
        map.require_mandatory()?;
        debug!(
            line = header.line_no,
            delimiter = %header.delimiter.escape_debug(),
            "detected csv header"
        );

        let mut diagnostics = Vec::new();
        let mut summary = ImportSummary::default();
        let mut built = Vec::new();

        for line in lines {
            line_no += 1;
            let raw = line.map_err(read_error)?;
            if raw.trim().is_empty() {
                continue;
            }
            let cells = split_line(&raw, header.delimiter);
            if is_blank_row(&cells) {
                continue;
            }
            match build_contact(&cells, map, self.validator.as_ref(), line_no, &mut diagnostics) {
                Ok(contact) => built.push(contact),
                Err(reason) => {
                    warn!(line = line_no, %reason, "skipping malformed row");
                    summary.malformed += 1;
                    diagnostics.push(Diagnostic::error(
                        line_no,
                        format!("skipping malformed row: {reason}"),
                    ));
                }
            }
        }

        let mut contacts = Vec::with_capacity(built.len());
        for contact in built {
            if store.contains(&contact) {
                summary.duplicates += 1;
            } else {
                summary.imported += 1;
                contacts.push(contact);
            }
        }

        Ok(ImportOutcome {
            contacts,
            summary,
            diagnostics,
        })
    }
}

fn read_error(e: std::io::Error) -> Error {
    Error::Io {
        path: "<input>".to_string(),
        cause: e.to_string(),
    }
}

/// Scans forward until a header-like line is found, discarding preamble.
fn find_header<R: BufRead>(
    lines: &mut std::io::Lines<R>,
    line_no: &mut usize,
) -> Result<HeaderInfo> {
    for line in lines {
        *line_no += 1;
        let raw = line.map_err(read_error)?;
        if raw.trim().is_empty() {
            continue;
        }
        let candidate = strip_bom(&raw);
        let delimiter = detect_delimiter(&candidate);
        let cells = split_line(&candidate, delimiter);
        if looks_like_header(&cells) {
            return Ok(HeaderInfo {
                delimiter,
                cells,
                line_no: *line_no,
            });
        }
    }
    Err(Error::HeaderNotFound)
}
