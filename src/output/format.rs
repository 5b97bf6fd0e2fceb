use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table, TableComponent,
    presets::NOTHING,
};

use crate::consts::BANNER_WIDTH;

pub(crate) fn compare_price(a: f64, b: f64) -> std::cmp::Ordering {
    use std::cmp::Ordering;
    if a.is_nan() && b.is_nan() {
        Ordering::Equal
    } else if a.is_nan() {
        Ordering::Greater
    } else if b.is_nan() {
        Ordering::Less
    } else {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

/// `$` plus two decimals, or an empty cell when the price is absent
pub(super) fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("${p:.2}"),
        None => String::new(),
    }
}

/// Summary range cell: zero or missing ranges read as `N/A`
pub(super) fn format_range_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p > 0.0 => format!("${p:.2}"),
        _ => "N/A".to_string(),
    }
}

pub(super) fn header_cell(text: &str, alignment: CellAlignment, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).set_alignment(alignment);
    if use_color {
        cell = cell.fg(Color::Cyan).add_attribute(Attribute::Bold);
    }
    cell
}

pub(super) fn right_cell(text: &str) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Borderless table: `|` between columns and a `-+-` rule under the header.
pub(super) fn create_plain_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_style(TableComponent::VerticalLines, '|')
        .set_style(TableComponent::HeaderLines, '-')
        .set_style(TableComponent::MiddleHeaderIntersections, '+');
    if use_color {
        table.enforce_styling();
    }
    table
}

/// Drop the padding on the table's outer edges so lines start at column 0.
/// Call after the header and rows are in place.
pub(super) fn trim_outer_padding(table: &mut Table) {
    let count = table.column_count();
    if count == 0 {
        return;
    }
    if let Some(first) = table.column_mut(0) {
        first.set_padding((0, 1));
    }
    if let Some(last) = table.column_mut(count - 1) {
        let left = if count == 1 { 0 } else { 1 };
        last.set_padding((left, 0));
    }
}

/// Section heading framed by `=` rules, preceded by a blank line
pub(super) fn banner(title: &str) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    format!("\n{rule}\n{title}\n{rule}")
}
