//! # Dealbook
//!
//! Tolerant CSV import/export engine for a contact book.
//!
//! Dealbook converts loosely structured tabular text into validated
//! [`Contact`] records and writes them back losslessly. It is built for
//! real-world exports from third-party tools: unknown column order, mixed
//! delimiters, embedded quotes and newlines, stray BOM markers, and partial
//! or garbage rows are all absorbed without aborting the batch.
//!
//! ## Features
//!
//! - Delimiter auto-detection (comma, tab, semicolon) per file
//! - Header located by content, not position (decorative preamble tolerated)
//! - Row-level recovery: one bad row is skipped and accounted, never fatal
//! - Structured diagnostics (line, severity, message) returned to the caller
//! - RFC 4180 quoting on export, with deterministic collision-free filenames
//!
//! ## Example
//!
//! ```rust,ignore
//! use dealbook::{ImportService, InMemoryStore};
//!
//! let store = InMemoryStore::new();
//! let outcome = ImportService::new().import_path("contacts.csv".as_ref(), &store)?;
//! println!(
//!     "imported {} ({} duplicates, {} malformed)",
//!     outcome.summary.imported, outcome.summary.duplicates, outcome.summary.malformed
//! );
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod csv;
pub mod models;
pub mod report;
pub mod store;

// Re-exports for convenience
pub use csv::{
    build_contact, detect_delimiter, escape, split_line, write_row, ColumnMap, Diagnostic,
    ExportOutcome, ExportProfile, ExportService, ImportOutcome, ImportService, ImportSummary,
    Severity, EXPORT_DELIMITER,
};
pub use models::{
    Cadence, Contact, FieldValidator, Interaction, InteractionKind, Role, StandardValidator, Tag,
};
pub use report::{tag_stats, TagCount};
pub use store::{ContactStore, InMemoryStore};

/// Error type for dealbook operations.
///
/// Only file-level failures surface here; row-level problems during import
/// are absorbed into [`ImportSummary`] and reported as [`Diagnostic`]s.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidInput` | A value fails construction-time validation |
/// | `Io` | The source cannot be read or the sink cannot be written |
/// | `HeaderNotFound` | No qualifying header row exists in the input |
/// | `MissingColumns` | A header was found but lacks mandatory columns |
#[derive(Debug, ThisError)]
pub enum Error {
    /// Invalid input was provided.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An I/O operation on the given path failed.
    #[error("i/o error on '{path}': {cause}")]
    Io {
        /// The path that was being read or written.
        path: String,
        /// The underlying cause.
        cause: String,
    },

    /// No line in the input qualified as a header row.
    ///
    /// A header row must contain, case-insensitively and in any order, the
    /// columns Name, Role, Address, Phone, and Email.
    #[error(
        "no valid header row found: the file must contain a header with at least \
         Name, Role, Address, Phone, and Email (case-insensitive)"
    )]
    HeaderNotFound,

    /// A header row was found but mandatory columns are absent.
    #[error("csv header missing mandatory column(s): {}", .columns.join(", "))]
    MissingColumns {
        /// Display names of the missing columns.
        columns: Vec<String>,
    },
}

/// Result type alias for dealbook operations.
pub type Result<T> = std::result::Result<T, Error>;
