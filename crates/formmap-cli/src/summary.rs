use std::collections::BTreeMap;
use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use formmap_map::SuggestionCategory;
use formmap_model::{CoverageReport, EntryKind, MappingTable, PhysicalField};

/// How many names to enumerate before truncating a list for display.
const DISPLAY_LIMIT: usize = 50;

pub fn print_fields(fields: &[PhysicalField]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Type"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, field) in fields.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&field.name),
            Cell::new(field.kind.type_tag()),
        ]);
    }
    println!("Found {} fields:", fields.len());
    println!("{table}");
}

pub fn print_mapping(mapping: &MappingTable) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Logical field"),
        header_cell("Kind"),
        header_cell("Target"),
        header_cell("Claims"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for (logical, entry) in mapping.iter().take(DISPLAY_LIMIT) {
        table.add_row(vec![
            Cell::new(logical),
            Cell::new(kind_label(entry.kind)),
            Cell::new(&entry.target),
            Cell::new(entry.claimed_names().count()),
        ]);
    }
    println!("Resolved {} logical fields:", mapping.len());
    println!("{table}");
    if mapping.len() > DISPLAY_LIMIT {
        println!("  ... and {} more", mapping.len() - DISPLAY_LIMIT);
    }
}

pub fn print_coverage(report: &CoverageReport) {
    println!();
    print!("{}", render_coverage(report));
}

/// Renders the coverage block as text. Writing to a `String` is infallible,
/// so the `writeln!` results are discarded.
fn render_coverage(report: &CoverageReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total PDF fields: {}", report.total_physical);
    let _ = writeln!(out, "Claimed names: {}", report.mapped_count);
    let _ = writeln!(out, "Coverage: {:.1}%", report.coverage_pct);
    if report.is_clean() {
        let _ = writeln!(
            out,
            "Every physical field is claimed and every claim is valid."
        );
        return out;
    }
    if !report.invalid.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "Invalid mappings ({} fields don't exist in the PDF):",
            report.invalid_count()
        );
        for line in name_list_lines(&report.invalid) {
            let _ = writeln!(out, "{line}");
        }
    }
    if !report.unmapped.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Unmapped PDF fields ({}):", report.unmapped_count());
        for line in name_list_lines(&report.unmapped) {
            let _ = writeln!(out, "{line}");
        }
    }
    out
}

pub fn print_suggestions(buckets: &BTreeMap<SuggestionCategory, Vec<String>>) {
    if buckets.is_empty() {
        return;
    }
    println!();
    println!("Mapping suggestions:");
    for (category, names) in buckets {
        println!();
        println!("{}:", category.heading());
        print_name_list(names);
    }
}

fn print_name_list(names: &[String]) {
    for line in name_list_lines(names) {
        println!("{line}");
    }
}

fn name_list_lines(names: &[String]) -> Vec<String> {
    let (shown, hidden) = truncate_for_display(names);
    let mut lines: Vec<String> = shown.iter().map(|name| format!("  - {name}")).collect();
    if hidden > 0 {
        lines.push(format!("  ... and {hidden} more"));
    }
    lines
}

/// Splits a list into the displayed prefix and the hidden remainder count.
fn truncate_for_display(names: &[String]) -> (&[String], usize) {
    if names.len() > DISPLAY_LIMIT {
        (&names[..DISPLAY_LIMIT], names.len() - DISPLAY_LIMIT)
    } else {
        (names, 0)
    }
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Text => "text",
        EntryKind::Checkbox => "checkbox",
        EntryKind::RadioGroup => "radio_group",
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lists_are_not_truncated() {
        let names = vec!["City".to_string(), "Province".to_string()];
        let (shown, hidden) = truncate_for_display(&names);
        assert_eq!(shown.len(), 2);
        assert_eq!(hidden, 0);
    }

    #[test]
    fn long_lists_truncate_at_the_display_limit() {
        let names: Vec<String> = (0..75).map(|index| format!("Field {index}")).collect();
        let (shown, hidden) = truncate_for_display(&names);
        assert_eq!(shown.len(), DISPLAY_LIMIT);
        assert_eq!(hidden, 25);
    }

    #[test]
    fn clean_reports_render_a_clean_status_line() {
        let report = CoverageReport {
            total_physical: 2,
            mapped_count: 2,
            unmapped: vec![],
            invalid: vec![],
            coverage_pct: 100.0,
        };
        let rendered = render_coverage(&report);
        assert!(rendered.contains("Coverage: 100.0%"));
        assert!(rendered.contains("every claim is valid"));
        assert!(!rendered.contains("Unmapped"));
    }

    #[test]
    fn gap_reports_render_counted_sections() {
        let report = CoverageReport {
            total_physical: 3,
            mapped_count: 2,
            unmapped: vec!["City".to_string(), "Province".to_string()],
            invalid: vec!["Stale".to_string()],
            coverage_pct: 33.3,
        };
        let rendered = render_coverage(&report);
        assert!(rendered.contains("Invalid mappings (1"));
        assert!(rendered.contains("Unmapped PDF fields (2):"));
        assert!(rendered.contains("  - Stale"));
        assert!(!rendered.contains("every claim is valid"));
    }
}
