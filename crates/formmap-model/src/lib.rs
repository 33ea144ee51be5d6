//! Data model for PDF form-field mapping resolution.
//!
//! Logical fields (application-level names) are reconciled against physical
//! fields (PDF form field identifiers) into a [`MappingTable`]; the
//! [`CoverageReport`] measures how much of the document the table claims.

pub mod field;
pub mod mapping;
pub mod report;

pub use field::{FieldKind, LogicalField, PhysicalField};
pub use mapping::{EntryKind, MappingEntry, MappingTable, OverrideConfig};
pub use report::CoverageReport;
