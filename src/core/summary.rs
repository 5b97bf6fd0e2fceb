use crate::data::Provider;

/// Per-provider overview shown before the interactive prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ProviderSummary<'a> {
    pub(crate) name: &'a str,
    pub(crate) id: &'a str,
    pub(crate) model_count: usize,
    /// Cheapest input + output sum among priced models
    pub(crate) min_price: Option<f64>,
    pub(crate) max_price: Option<f64>,
}

/// Summarize every provider. Models without a positive input or output
/// price are counted but left out of the min/max range.
pub(crate) fn summarize_providers(providers: &[Provider]) -> Vec<ProviderSummary<'_>> {
    providers
        .iter()
        .map(|provider| {
            let (min_price, max_price) = provider
                .models
                .iter()
                .filter(|m| m.prices.is_priced())
                .map(|m| m.prices.price_sum())
                .fold((None, None), |(min, max): (Option<f64>, Option<f64>), sum| {
                    (
                        Some(min.map_or(sum, |m| m.min(sum))),
                        Some(max.map_or(sum, |m| m.max(sum))),
                    )
                });
            ProviderSummary {
                name: &provider.name,
                id: &provider.id,
                model_count: provider.models.len(),
                min_price,
                max_price,
            }
        })
        .collect()
}
