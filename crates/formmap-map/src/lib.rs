//! Form-field mapping resolution.
//!
//! Reconciles logical application field names against the raw field
//! identifiers of a PDF document: normalization and scoring pick the best
//! physical candidate per logical field, override layers refine the picks,
//! and the coverage analyzer measures what the resulting table claims.
//! Problems are surfaced as data (unmapped/invalid sets, suggestion
//! buckets), never as failures; this is a reconciliation tool for a human
//! review step.

#![deny(unsafe_code)]

pub mod coverage;
pub mod normalize;
pub mod repository;
pub mod resolver;
pub mod score;
pub mod suggest;

pub use coverage::analyze;
pub use normalize::{normalize, tokenize};
pub use repository::{MappingRepository, StoredMappingTable, StoredTableInfo};
pub use resolver::resolve;
pub use score::score;
pub use suggest::{SuggestionCategory, SuggestionRules, suggest};
