//! Table and JSON rendering.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use imobench_model::{AnswerProblem, GradingEntry, ProofProblem};

use crate::commands::DatasetCount;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn counts_table(counts: &[DatasetCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Dataset"),
        header_cell("File"),
        header_cell("Records"),
    ]);
    apply_table_style(&mut table);
    for count in counts {
        table.add_row(vec![
            Cell::new(count.dataset.name()),
            Cell::new(count.path.display()),
            Cell::new(count.records),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

pub fn answers_table(problems: &[AnswerProblem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Problem ID"),
        header_cell("Category"),
        header_cell("Subcategory"),
        header_cell("Source"),
        header_cell("Short Answer"),
    ]);
    apply_table_style(&mut table);
    for problem in problems {
        table.add_row(vec![
            &problem.problem_id,
            &problem.category,
            &problem.subcategory,
            &problem.source,
            &problem.short_answer,
        ]);
    }
    table
}

pub fn proofs_table(problems: &[ProofProblem]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Problem ID"),
        header_cell("Category"),
        header_cell("Level"),
        header_cell("Source"),
    ]);
    apply_table_style(&mut table);
    for problem in problems {
        table.add_row(vec![
            &problem.problem_id,
            &problem.category,
            &problem.level,
            &problem.source,
        ]);
    }
    table
}

pub fn gradings_table(entries: &[GradingEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Grading ID"),
        header_cell("Problem ID"),
        header_cell("Points"),
        header_cell("Reward"),
        header_cell("Problem Source"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(&entry.grading_id),
            Cell::new(&entry.problem_id),
            Cell::new(entry.points),
            Cell::new(&entry.reward),
            Cell::new(&entry.problem_source),
        ]);
    }
    align_column(&mut table, 2, CellAlignment::Right);
    table
}

/// Pretty-printed JSON array of records.
pub fn to_json<T: Serialize>(records: &[T]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
