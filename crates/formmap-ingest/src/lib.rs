//! Input collaborators for mapping resolution.
//!
//! This crate owns the only fatal failure surface of the subsystem: loading
//! the physical field list produced by PDF inspection, extracting logical
//! field names from application form source, and reading override
//! configuration. Everything downstream is pure computation over the loaded
//! data.

pub mod bindings;
pub mod error;
pub mod fields;
pub mod overrides;

pub use bindings::{extract_logical_fields, load_logical_fields};
pub use error::{IngestError, Result};
pub use fields::load_physical_fields;
pub use overrides::{load_mapping_table, load_overrides};
