use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use formmap_ingest::{
    load_logical_fields, load_mapping_table, load_overrides, load_physical_fields,
};
use formmap_map::{MappingRepository, SuggestionRules, analyze, resolve, suggest};
use formmap_model::{LogicalField, OverrideConfig};

use crate::cli::{AnalyzeArgs, FieldsArgs, ResolveArgs};
use crate::summary::{print_coverage, print_fields, print_mapping, print_suggestions};

pub fn run_resolve(args: &ResolveArgs) -> Result<()> {
    let span = info_span!("resolve", fields = %args.fields.display());
    let _guard = span.enter();

    let physical = load_physical_fields(&args.fields)?;
    let mut logical = load_logical_fields(&args.form_source)?;
    let overrides = match &args.overrides {
        Some(path) => load_overrides(path)?,
        None => OverrideConfig::default(),
    };
    append_configured_fields(&mut logical, &overrides);
    if !overrides.is_empty() {
        info!(
            renames = overrides.renames.len(),
            manual = overrides.manual.len(),
            extra_fields = overrides.logical_fields.len(),
            "overrides configured"
        );
    }
    info!(
        physical = physical.len(),
        logical = logical.len(),
        "inputs loaded"
    );

    let table = resolve(&logical, &physical, &overrides);
    let report = analyze(&table, &physical);
    info!(
        entries = table.len(),
        coverage_pct = report.coverage_pct,
        "mapping resolved"
    );

    print_mapping(&table);
    print_coverage(&report);

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&table).context("serialize mapping table")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write mapping table to {}", path.display()))?;
        println!("Mapping table written to {}", path.display());
    }
    if let (Some(repo_dir), Some(form_id)) = (&args.repo, &args.form_id) {
        let repo = MappingRepository::new(repo_dir)?;
        let path = repo.save(form_id, &table)?;
        println!("Mapping table stored at {}", path.display());
    }
    Ok(())
}

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let span = info_span!("analyze", fields = %args.fields.display());
    let _guard = span.enter();

    let physical = load_physical_fields(&args.fields)?;
    let table = load_mapping_table(&args.mapping)?;
    let rules = match &args.rules {
        Some(path) => SuggestionRules::from_file(path)?,
        None => SuggestionRules::default(),
    };

    let report = analyze(&table, &physical);
    info!(
        entries = table.len(),
        unmapped = report.unmapped.len(),
        invalid = report.invalid.len(),
        "coverage recomputed"
    );

    print_coverage(&report);
    let buckets = suggest(&report.unmapped, &rules);
    print_suggestions(&buckets);
    Ok(())
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let physical = load_physical_fields(&args.fields)?;
    print_fields(&physical);
    Ok(())
}

/// Appends configured logical names after the extracted ones, keeping
/// first-occurrence order.
fn append_configured_fields(logical: &mut Vec<LogicalField>, overrides: &OverrideConfig) {
    let mut seen: BTreeSet<&str> = logical.iter().map(|field| field.name.as_str()).collect();
    let mut extra = Vec::new();
    for name in &overrides.logical_fields {
        if seen.insert(name) {
            extra.push(LogicalField::new(name.clone()));
        }
    }
    logical.extend(extra);
}

#[cfg(test)]
mod tests {
    use formmap_model::MappingTable;

    use super::*;

    #[test]
    fn resolve_writes_the_mapping_table_to_the_output_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let fields = dir.path().join("fields.json");
        fs::write(
            &fields,
            r#"[{"name": "Email Address", "type": "Tx"}, {"name": "City", "type": "Tx"}]"#,
        )
        .expect("write field list");
        let form_source = dir.path().join("form.tsx");
        fs::write(&form_source, "register('email') register('city')").expect("write form source");
        let output = dir.path().join("mapping.json");

        let args = ResolveArgs {
            fields,
            form_source,
            overrides: None,
            output: Some(output.clone()),
            repo: None,
            form_id: None,
        };
        run_resolve(&args).expect("resolve");

        let written = fs::read_to_string(&output).expect("read written table");
        let table: MappingTable = serde_json::from_str(&written).expect("parse written table");
        assert_eq!(table["email"].target, "Email Address");
        assert_eq!(table["city"].target, "City");
    }

    #[test]
    fn configured_fields_append_without_duplicates() {
        let mut logical = vec![LogicalField::new("email"), LogicalField::new("city")];
        let overrides = OverrideConfig {
            logical_fields: vec!["city".to_string(), "title".to_string()],
            ..OverrideConfig::default()
        };
        append_configured_fields(&mut logical, &overrides);
        let names: Vec<&str> = logical.iter().map(|field| field.name.as_str()).collect();
        assert_eq!(names, vec!["email", "city", "title"]);
    }
}
