//! Price table rendering
//!
//! Rendering runs in three steps: pick the active columns, turn every row
//! into one text cell per column, then let comfy-table size each column to
//! its widest cell (header included) and lay the lines out.

use comfy_table::{Cell, CellAlignment, Table};

use crate::core::PriceRow;
use crate::output::format::{create_plain_table, format_price, header_cell, trim_outer_padding};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PriceColumn {
    Provider,
    Name,
    Input,
    Write,
    Read,
    Out,
    Model,
}

impl PriceColumn {
    const BASE: [PriceColumn; 6] = [
        PriceColumn::Name,
        PriceColumn::Input,
        PriceColumn::Write,
        PriceColumn::Read,
        PriceColumn::Out,
        PriceColumn::Model,
    ];

    fn label(self) -> &'static str {
        match self {
            PriceColumn::Provider => "Provider",
            PriceColumn::Name => "Name",
            PriceColumn::Input => "Input",
            PriceColumn::Write => "Write",
            PriceColumn::Read => "Read",
            PriceColumn::Out => "Out",
            PriceColumn::Model => "Model",
        }
    }

    fn alignment(self) -> CellAlignment {
        match self {
            PriceColumn::Provider | PriceColumn::Name | PriceColumn::Model => CellAlignment::Left,
            _ => CellAlignment::Right,
        }
    }

    fn text(self, row: &PriceRow<'_>) -> String {
        let prices = &row.model.prices;
        match self {
            PriceColumn::Provider => row.provider_name.unwrap_or_default().to_string(),
            PriceColumn::Name => row.model.display_name().to_string(),
            PriceColumn::Input => format_price(prices.input_mtok),
            PriceColumn::Write => format_price(prices.cache_write_mtok),
            PriceColumn::Read => format_price(prices.cache_read_mtok),
            PriceColumn::Out => format_price(prices.output_mtok),
            PriceColumn::Model => row.model.id.clone(),
        }
    }
}

/// The provider column is shown only when some row carries a provider name
fn active_columns(rows: &[PriceRow<'_>]) -> Vec<PriceColumn> {
    let mut columns = Vec::with_capacity(PriceColumn::BASE.len() + 1);
    if rows.iter().any(|r| r.provider_name.is_some()) {
        columns.push(PriceColumn::Provider);
    }
    columns.extend(PriceColumn::BASE);
    columns
}

/// Build the table for `rows`; `None` when there is nothing to show.
pub(crate) fn build_price_table(rows: &[PriceRow<'_>], use_color: bool) -> Option<Table> {
    if rows.is_empty() {
        return None;
    }

    let columns = active_columns(rows);

    let mut table = create_plain_table(use_color);
    table.set_header(
        columns
            .iter()
            .map(|c| header_cell(c.label(), c.alignment(), use_color))
            .collect::<Vec<_>>(),
    );
    for row in rows {
        table.add_row(
            columns
                .iter()
                .map(|c| Cell::new(c.text(row)).set_alignment(c.alignment()))
                .collect::<Vec<_>>(),
        );
    }
    trim_outer_padding(&mut table);

    Some(table)
}
