//! Success summary printed after rendering.
//!
//! The per-case table shows identifiers and counts only; clinical
//! narrative and patient IDs stay out of terminal output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use casebook_model::CaseRecord;

use crate::commands::{OutputMode, RunResult};

/// Print the confirmation line and, for batch output, the per-case table.
pub fn print_summary(result: &RunResult) {
    match result.mode {
        OutputMode::Single => {
            println!("Case summary written: {}", result.output_path.display());
        }
        OutputMode::Batch => {
            println!(
                "All {} case summaries written: {}",
                result.records.len(),
                result.output_path.display()
            );
            if !result.records.is_empty() {
                print_case_table(&result.records);
            }
        }
    }
}

fn print_case_table(records: &[CaseRecord]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Case"),
        header_cell("Designated"),
        header_cell("Sections"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Right);

    for record in records {
        table.add_row(vec![
            Cell::new(id_text(record.field_number.as_ref())),
            Cell::new(id_text(record.case_number.as_ref())),
            Cell::new(if record.is_designated_disease { "○" } else { "" }),
            Cell::new(record.section_count()),
        ]);
    }
    println!("{table}");
}

fn id_text(value: Option<&casebook_model::CaseId>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
