//! Advisory classification of unmapped physical fields.
//!
//! The engine shortens a human reviewer's triage by bucketing unmapped names
//! with independent lexical predicates. It never touches the mapping table
//! and never auto-populates anything; a name may land in several buckets.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Triage bucket for an unmapped physical field.
///
/// Adding a category means adding one predicate in [`suggest`]; the existing
/// predicates are untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionCategory {
    /// Range-valued buttons, e.g. income brackets.
    RangeControls,
    /// Ordinal or qualitative buttons, e.g. risk levels.
    LevelControls,
    /// Grouped-choice buttons occupying a secondary/joint slot.
    GroupedChoices,
    /// One instance of a repeating structural group.
    StructuralRepeats,
    /// Fields that likely need a new form input added to the application.
    NeedsFormField,
}

impl SuggestionCategory {
    /// Human-readable heading for report rendering.
    #[must_use]
    pub fn heading(&self) -> &'static str {
        match self {
            Self::RangeControls => "Range-valued buttons (need radio_group mapping)",
            Self::LevelControls => "Level buttons (need radio_group mapping)",
            Self::GroupedChoices => "Grouped-choice checkboxes (joint slot)",
            Self::StructuralRepeats => "Repeated structural fields",
            Self::NeedsFormField => "Fields that may need new form inputs",
        }
    }
}

/// Lexical heuristics driving the suggestion predicates.
///
/// Every set is configurable; the defaults reflect the KYC onboarding form
/// the tool was first built for.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionRules {
    /// Case-sensitive substrings marking numeric-range or magnitude buttons.
    pub range_tokens: Vec<String>,
    /// Case-insensitive level words marking ordinal/qualitative buttons.
    pub level_words: Vec<String>,
    /// Case-sensitive category labels for grouped-choice controls.
    pub group_labels: Vec<String>,
    /// Positional suffix denoting the secondary/joint slot of a group.
    pub group_suffix: String,
    /// Prefixes denoting one instance of a repeating structural group.
    pub structural_prefixes: Vec<String>,
    /// Case-insensitive keywords hinting a missing application form field.
    pub form_field_keywords: Vec<String>,
    /// Suffixes of known structural repeats, excluded from the
    /// needs-form-field bucket.
    pub repeat_suffixes: Vec<String>,
}

impl Default for SuggestionRules {
    fn default() -> Self {
        Self {
            range_tokens: string_vec(&["25000", "49999", "Million"]),
            level_words: string_vec(&[
                "low",
                "medium",
                "high",
                "novice",
                "fair",
                "good",
                "sophisticated",
            ]),
            group_labels: string_vec(&[
                "Bonds",
                "Stocks",
                "Mutual Funds",
                "Term Deposits",
                "Real Estate",
            ]),
            group_suffix: "_2".to_string(),
            structural_prefixes: string_vec(&["Province_", "City_"]),
            form_field_keywords: string_vec(&["signature", "agent", "date_", "joint"]),
            repeat_suffixes: string_vec(&["_2", "_3"]),
        }
    }
}

impl SuggestionRules {
    /// Loads rules from a JSON file; absent keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read suggestion rules: {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("malformed suggestion rules: {}", path.display()))
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Buckets unmapped names with independent, non-exclusive predicates.
///
/// Input order is preserved within each bucket; empty buckets are omitted.
#[must_use]
pub fn suggest(
    unmapped: &[String],
    rules: &SuggestionRules,
) -> BTreeMap<SuggestionCategory, Vec<String>> {
    let mut buckets: BTreeMap<SuggestionCategory, Vec<String>> = BTreeMap::new();
    for name in unmapped {
        for category in categorize(name, rules) {
            buckets.entry(category).or_default().push(name.clone());
        }
    }
    buckets
}

fn categorize(name: &str, rules: &SuggestionRules) -> Vec<SuggestionCategory> {
    let lower = name.to_lowercase();
    let mut categories = Vec::new();

    if rules.range_tokens.iter().any(|token| name.contains(token)) {
        categories.push(SuggestionCategory::RangeControls);
    }
    if rules.level_words.iter().any(|word| lower.contains(word)) {
        categories.push(SuggestionCategory::LevelControls);
    }
    if rules.group_labels.iter().any(|label| name.contains(label))
        && name.ends_with(&rules.group_suffix)
    {
        categories.push(SuggestionCategory::GroupedChoices);
    }
    if rules
        .structural_prefixes
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        categories.push(SuggestionCategory::StructuralRepeats);
    }
    if rules
        .form_field_keywords
        .iter()
        .any(|keyword| lower.contains(keyword))
        && !rules
            .repeat_suffixes
            .iter()
            .any(|suffix| name.ends_with(suffix))
    {
        categories.push(SuggestionCategory::NeedsFormField);
    }
    categories
}
