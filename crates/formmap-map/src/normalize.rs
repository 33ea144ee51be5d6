//! Name canonicalization for comparison.
//!
//! Normalization is used only for comparison; original names are always
//! preserved for output and for mapping targets.

use std::collections::BTreeSet;

/// Canonicalizes a field name: lowercase, then keep only ASCII lowercase
/// letters and digits. Pure, total, and idempotent.
#[must_use]
pub fn normalize(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Splits a raw name into its lowercase alphanumeric runs.
///
/// Tokens are taken from the raw name, not the normalized form:
/// normalization strips exactly the separators the split needs, so
/// `"Email Address"` tokenizes to `{"email", "address"}` while its
/// normalized form is the single run `"emailaddress"`.
#[must_use]
pub fn tokenize(name: &str) -> BTreeSet<String> {
    name.split(|ch: char| !ch.is_ascii_alphanumeric())
        .filter(|run| !run.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_separators_and_case() {
        assert_eq!(normalize("Email Address"), "emailaddress");
        assert_eq!(normalize("first_name"), "firstname");
        assert_eq!(normalize("Tax-Resident (US)"), "taxresidentus");
        assert_eq!(normalize("Telephone Number Residence"), "telephonenumberresidence");
    }

    #[test]
    fn normalize_handles_empty_and_symbol_only_names() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("___"), "");
        assert_eq!(normalize("  !!  "), "");
    }

    #[test]
    fn normalize_keeps_digits() {
        assert_eq!(normalize("City_2"), "city2");
        assert_eq!(normalize("$25,000-$49,999"), "2500049999");
    }

    #[test]
    fn tokenize_splits_on_separators() {
        let tokens = tokenize("Email Address");
        assert!(tokens.contains("email"));
        assert!(tokens.contains("address"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn tokenize_deduplicates() {
        let tokens = tokenize("name name NAME");
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn tokenize_of_empty_name_is_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("--").is_empty());
    }
}
