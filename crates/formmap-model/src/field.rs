//! Field types for the two sides of a mapping.
//!
//! A [`PhysicalField`] is a field identifier embedded in a PDF document with
//! its document-native type tag. A [`LogicalField`] is an application-level,
//! semantically named data slot independent of any document format.

use serde::{Deserialize, Serialize};

/// Document-native type of a physical PDF field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    /// Free-text input (`/FT` tag `Tx`).
    Text,
    /// Button widget: checkbox or radio button (`/FT` tag `Btn`).
    Button,
    /// Choice widget: dropdown or list box (`/FT` tag `Ch`).
    Choice,
    /// Any other or missing type tag.
    Unknown,
}

impl FieldKind {
    /// Parses a PDF field type tag as reported by the inspection capability.
    ///
    /// Accepts the tag with or without the leading slash (`"Btn"` / `"/Btn"`).
    /// Unrecognized tags map to [`FieldKind::Unknown`] rather than failing:
    /// the tag only influences the default entry kind, never validity.
    #[must_use]
    pub fn from_type_tag(tag: &str) -> Self {
        match tag.trim().trim_start_matches('/') {
            "Tx" => Self::Text,
            "Btn" => Self::Button,
            "Ch" => Self::Choice,
            _ => Self::Unknown,
        }
    }

    /// Returns the canonical PDF type tag for display.
    #[must_use]
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Text => "Tx",
            Self::Button => "Btn",
            Self::Choice => "Ch",
            Self::Unknown => "?",
        }
    }
}

/// A field embedded in the PDF document.
///
/// The name is unique, case-sensitive, and the source of truth for mapping
/// targets. Physical fields are loaded once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicalField {
    /// Raw field name as it appears in the document.
    pub name: String,
    /// Document-native type.
    pub kind: FieldKind,
}

impl PhysicalField {
    /// Creates a physical field from a name and a raw type tag.
    pub fn new(name: impl Into<String>, type_tag: &str) -> Self {
        Self {
            name: name.into(),
            kind: FieldKind::from_type_tag(type_tag),
        }
    }
}

/// An application-level data slot, named by the form definition.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LogicalField {
    /// Logical name, unique within a form definition.
    pub name: String,
}

impl LogicalField {
    /// Creates a logical field.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tags_parse() {
        assert_eq!(FieldKind::from_type_tag("Tx"), FieldKind::Text);
        assert_eq!(FieldKind::from_type_tag("/Btn"), FieldKind::Button);
        assert_eq!(FieldKind::from_type_tag(" Ch "), FieldKind::Choice);
        assert_eq!(FieldKind::from_type_tag("Sig"), FieldKind::Unknown);
        assert_eq!(FieldKind::from_type_tag(""), FieldKind::Unknown);
    }

    #[test]
    fn physical_field_keeps_raw_name() {
        let field = PhysicalField::new("First Name Business Name", "Tx");
        assert_eq!(field.name, "First Name Business Name");
        assert_eq!(field.kind, FieldKind::Text);
    }
}
