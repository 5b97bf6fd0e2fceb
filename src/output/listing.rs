use std::fmt::Write;

use crate::core::{Filter, PriceRow, group_by_provider};
use crate::data::Provider;
use crate::output::format::banner;
use crate::output::table::build_price_table;

/// One banner and table per provider that produced rows, in source order
pub(crate) fn render_grouped(
    providers: &[Provider],
    rows: &[PriceRow<'_>],
    use_color: bool,
) -> String {
    let mut out = String::new();
    for group in group_by_provider(rows) {
        let Some(provider) = group.first().and_then(|r| providers.get(r.provider_index)) else {
            continue;
        };
        let title = format!("Provider: {} ({})", provider.name, provider.id);
        let _ = writeln!(out, "{}", banner(&title));
        if let Some(table) = build_price_table(group, use_color) {
            let _ = writeln!(out, "{table}");
        }
    }
    out
}

/// A single combined table; the banner is printed even with no rows
pub(crate) fn render_sorted(rows: &[PriceRow<'_>], use_color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", banner("All Models Sorted by Price (Input + Output)"));
    if let Some(table) = build_price_table(rows, use_color) {
        let _ = writeln!(out, "{table}");
    }
    out
}

pub(crate) fn no_match_message(filter: &Filter) -> String {
    format!(
        "\nNo providers or models matching '{}' found.",
        filter.as_str()
    )
}
