//! CSV import/export engine.
//!
//! A tolerant, format-detecting parser paired with a deterministic writer.
//! Data flows one way per direction:
//!
//! - import: text → [`detect_delimiter`]/header scan → [`ColumnMap`] →
//!   row builder → [`Contact`](crate::models::Contact)s
//! - export: contacts → [`escape`]/[`write_row`] → text
//!
//! # Error tiers
//!
//! | Tier | Examples | Effect |
//! |------|----------|--------|
//! | File-level | unreadable source, no header, missing mandatory column | the call fails |
//! | Row-level | empty mandatory field, bad role, unparsable optional | row skipped, batch continues |
//!
//! Row-level events are returned as [`Diagnostic`]s with line numbers, and
//! aggregated into an [`ImportSummary`]; the caller decides how to surface
//! them.

mod diagnostics;
mod export;
mod header;
mod import;
mod lexer;
mod row;

pub use diagnostics::{Diagnostic, Severity};
pub use export::{
    escape, write_header, write_row, ExportOutcome, ExportProfile, ExportService,
    EXPORT_DELIMITER,
};
pub use header::{looks_like_header, ColumnMap, MANDATORY_COLUMNS};
pub use import::{ImportOutcome, ImportService, ImportSummary};
pub use lexer::{detect_delimiter, is_blank_row, split_line, strip_bom};
pub use row::build_contact;
