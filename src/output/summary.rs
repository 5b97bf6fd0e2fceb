use std::fmt::Write;

use comfy_table::{Cell, CellAlignment};

use crate::core::ProviderSummary;
use crate::output::format::{
    create_plain_table, format_range_price, header_cell, right_cell, trim_outer_padding,
};

const RULE_EXTRA: usize = 50;

/// Provider overview printed before the interactive prompt
pub(crate) fn render_provider_summary(summaries: &[ProviderSummary<'_>], use_color: bool) -> String {
    let name_width = summaries.iter().map(|s| s.name.chars().count()).max().unwrap_or(0);
    let id_width = summaries.iter().map(|s| s.id.chars().count()).max().unwrap_or(0);
    let rule = "=".repeat(name_width + id_width + RULE_EXTRA);

    let mut table = create_plain_table(use_color);
    table.set_header(vec![
        header_cell("Name", CellAlignment::Left, use_color),
        header_cell("ID", CellAlignment::Left, use_color),
        header_cell("Models", CellAlignment::Right, use_color),
        header_cell("Min Price", CellAlignment::Right, use_color),
        header_cell("Max Price", CellAlignment::Right, use_color),
    ]);
    for summary in summaries {
        table.add_row(vec![
            Cell::new(summary.name),
            Cell::new(summary.id),
            right_cell(&summary.model_count.to_string()),
            right_cell(&format_range_price(summary.min_price)),
            right_cell(&format_range_price(summary.max_price)),
        ]);
    }
    trim_outer_padding(&mut table);

    let mut out = String::new();
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Available Providers:");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{table}");
    let _ = writeln!(out, "{rule}");
    out
}
