//! Run summary printed after a successful processing run.

use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::consts::XLSX_MIME;

#[derive(Debug)]
pub(crate) struct RunSummary {
    /// Processing date, ISO-formatted.
    pub(crate) date: String,
    pub(crate) latest_rows: usize,
    pub(crate) dropped: usize,
    pub(crate) deduped: usize,
    pub(crate) cleaned_rows: usize,
    pub(crate) previous_keys: usize,
    pub(crate) new_rows: usize,
    pub(crate) cleaned_file: String,
    pub(crate) new_file: String,
    pub(crate) elapsed_ms: f64,
}

fn header_cell(text: &str, use_color: bool) -> Cell {
    if use_color {
        Cell::new(text)
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(text)
    }
}

fn count_cell(n: usize) -> Cell {
    Cell::new(format_count(n)).set_alignment(CellAlignment::Right)
}

/// Group digits in threes: 1234567 -> "1,234,567"
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

pub(crate) fn print_summary(summary: &RunSummary, use_color: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Stage", use_color),
        header_cell("Rows", use_color),
        header_cell("Output", use_color),
    ]);

    table.add_row(vec![
        Cell::new("Latest snapshot"),
        count_cell(summary.latest_rows),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Dropped (blank/aggregate)"),
        count_cell(summary.dropped),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(summary.deduped),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Cleaned"),
        count_cell(summary.cleaned_rows),
        Cell::new(&summary.cleaned_file),
    ]);
    table.add_row(vec![
        Cell::new("Previous keys"),
        count_cell(summary.previous_keys),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("New records"),
        count_cell(summary.new_rows),
        Cell::new(&summary.new_file),
    ]);

    println!("{table}");
    let stats_text = format!(
        "{} cleaned rows, {} new ({})",
        format_count(summary.cleaned_rows),
        format_count(summary.new_rows),
        summary.date
    );
    if use_color {
        println!("\n  {} | \x1b[36m{:.0}ms\x1b[0m\n", stats_text, summary.elapsed_ms);
    } else {
        println!("\n  {} | {:.0}ms\n", stats_text, summary.elapsed_ms);
    }
}

pub(crate) fn summary_json(summary: &RunSummary) -> String {
    let value = serde_json::json!({
        "date": summary.date,
        "latest_rows": summary.latest_rows,
        "rows_dropped": summary.dropped,
        "duplicates_removed": summary.deduped,
        "cleaned_rows": summary.cleaned_rows,
        "previous_keys": summary.previous_keys,
        "new_rows": summary.new_rows,
        "outputs": [
            {
                "path": summary.cleaned_file,
                "rows": summary.cleaned_rows,
                "content_type": XLSX_MIME,
            },
            {
                "path": summary.new_file,
                "rows": summary.new_rows,
                "content_type": XLSX_MIME,
            },
        ],
    });
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
}
