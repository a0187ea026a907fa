//! Data models for dealbook.
//!
//! This module contains the domain value types produced and consumed by the
//! CSV engine, plus the field-validation seam the engine delegates to.

mod cadence;
mod contact;
mod role;
mod tag;
mod validate;

pub use cadence::Cadence;
pub use contact::{Contact, Interaction, InteractionKind};
pub use role::Role;
pub use tag::Tag;
pub use validate::{FieldValidator, StandardValidator};
