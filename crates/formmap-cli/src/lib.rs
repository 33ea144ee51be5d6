//! CLI library components for the form-field mapping resolver.

pub mod logging;
