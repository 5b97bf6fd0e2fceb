//! Flattening of the provider tree into displayable rows

use crate::data::{Model, Provider};
use crate::output::compare_price;

use super::filter::Filter;

/// One model selected for display, borrowed from the dataset
#[derive(Debug, Clone, Copy)]
pub(crate) struct PriceRow<'a> {
    /// Position of the owning provider in the source list
    pub(crate) provider_index: usize,
    pub(crate) model: &'a Model,
    /// input + output price, the sort key
    pub(crate) price_sum: f64,
    /// Provider name shown in the combined sorted table
    pub(crate) provider_name: Option<&'a str>,
}

impl<'a> PriceRow<'a> {
    fn new(provider_index: usize, model: &'a Model) -> Self {
        PriceRow {
            provider_index,
            model,
            price_sum: model.prices.price_sum(),
            provider_name: None,
        }
    }
}

/// Select rows in source order.
///
/// A matching provider contributes all of its models; otherwise each model
/// is tested against the filter on its own.
pub(crate) fn select_rows<'a>(providers: &'a [Provider], filter: &Filter) -> Vec<PriceRow<'a>> {
    let mut rows = Vec::new();
    for (index, provider) in providers.iter().enumerate() {
        let provider_matches = filter.matches_provider(provider);
        rows.extend(
            provider
                .models
                .iter()
                .filter(|model| provider_matches || filter.matches_model(model))
                .map(|model| PriceRow::new(index, model)),
        );
    }
    rows
}

/// Stable ascending sort by price sum; equal sums keep encounter order.
pub(crate) fn sort_by_price(rows: &mut [PriceRow<'_>]) {
    rows.sort_by(|a, b| compare_price(a.price_sum, b.price_sum));
}

/// Label each row with a provider name by looking its model id up in the
/// dataset.
///
/// The first provider listing a model with that id wins, so a model id that
/// appears under several providers is always attributed to the earliest one.
pub(crate) fn attribute_providers<'a>(rows: &mut [PriceRow<'a>], providers: &'a [Provider]) {
    for row in rows.iter_mut() {
        row.provider_name = providers
            .iter()
            .find(|p| p.models.iter().any(|m| m.id == row.model.id))
            .map(|p| p.name.as_str());
    }
}

/// Split unsorted rows into one run per provider, in source order
pub(crate) fn group_by_provider<'r, 'a>(
    rows: &'r [PriceRow<'a>],
) -> impl Iterator<Item = &'r [PriceRow<'a>]> {
    rows.chunk_by(|a, b| a.provider_index == b.provider_index)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::data::types::Prices;

    fn priced(id: &str, name: Option<&str>, input: f64, output: f64) -> Model {
        Model {
            id: id.to_string(),
            name: name.map(str::to_string),
            prices: Prices {
                input_mtok: Some(input),
                output_mtok: Some(output),
                ..Prices::default()
            },
        }
    }

    fn provider(id: &str, name: &str, models: Vec<Model>) -> Provider {
        Provider {
            id: id.to_string(),
            name: name.to_string(),
            models,
        }
    }

    fn dataset() -> Vec<Provider> {
        vec![
            provider(
                "anthropic",
                "Anthropic",
                vec![
                    priced("claude-3-haiku", Some("Claude Haiku"), 0.25, 1.25),
                    priced("claude-3-opus", Some("Claude Opus"), 15.0, 75.0),
                ],
            ),
            provider(
                "openai",
                "OpenAI",
                vec![
                    priced("gpt-4o", None, 2.5, 10.0),
                    priced("gpt-4o-mini", Some("GPT-4o mini"), 0.15, 0.6),
                ],
            ),
        ]
    }

    fn model_ids<'a>(rows: &[PriceRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.model.id.as_str()).collect()
    }

    #[test]
    fn matching_provider_includes_all_models() {
        let data = dataset();
        let rows = select_rows(&data, &Filter::new("anthropic"));
        assert_eq!(model_ids(&rows), ["claude-3-haiku", "claude-3-opus"]);
    }

    #[test]
    fn non_matching_provider_filters_models() {
        let data = dataset();
        let rows = select_rows(&data, &Filter::new("mini"));
        assert_eq!(model_ids(&rows), ["gpt-4o-mini"]);
        assert_eq!(rows[0].provider_index, 1);
    }

    #[test]
    fn model_filter_spans_providers() {
        let data = dataset();
        let rows = select_rows(&data, &Filter::new("O"));
        // "o" is in "anthropic" and "openai", so every model is listed
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn all_filter_equals_empty_filter() {
        let data = dataset();
        let all = select_rows(&data, &Filter::new("ALL"));
        let empty = select_rows(&data, &Filter::new(""));
        assert_eq!(model_ids(&all), model_ids(&empty));
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn no_match_yields_no_rows() {
        let data = dataset();
        assert!(select_rows(&data, &Filter::new("zzz-nonexistent")).is_empty());
    }

    #[test]
    fn price_sum_excludes_cache_and_absent_prices() {
        let data = vec![provider(
            "p",
            "P",
            vec![Model {
                id: "unpriced".to_string(),
                ..Model::default()
            }],
        )];
        let rows = select_rows(&data, &Filter::new(""));
        assert_eq!(rows[0].price_sum, 0.0);
    }

    #[test]
    fn sort_is_ascending_and_stable() {
        let data = vec![
            provider(
                "a",
                "A",
                vec![
                    priced("five", None, 2.0, 3.0),
                    priced("tie-first", None, 1.0, 0.0),
                ],
            ),
            provider(
                "b",
                "B",
                vec![priced("tie-second", None, 0.5, 0.5), priced("zero", None, 0.0, 0.0)],
            ),
        ];
        let mut rows = select_rows(&data, &Filter::new(""));
        sort_by_price(&mut rows);
        assert_eq!(model_ids(&rows), ["zero", "tie-first", "tie-second", "five"]);
        assert!(rows.windows(2).all(|w| w[0].price_sum <= w[1].price_sum));
    }

    #[test]
    fn attribute_providers_labels_rows() {
        let data = dataset();
        let mut rows = select_rows(&data, &Filter::new(""));
        sort_by_price(&mut rows);
        attribute_providers(&mut rows, &data);
        assert_eq!(rows[0].model.id, "gpt-4o-mini");
        assert_eq!(rows[0].provider_name, Some("OpenAI"));
        assert_eq!(rows[1].provider_name, Some("Anthropic"));
    }

    #[test]
    fn attribute_providers_first_match_wins_for_duplicate_ids() {
        let data = vec![
            provider("first", "First", vec![priced("shared", None, 5.0, 0.0)]),
            provider("second", "Second", vec![priced("shared", None, 1.0, 0.0)]),
        ];
        let mut rows = select_rows(&data, &Filter::new(""));
        attribute_providers(&mut rows, &data);
        assert_eq!(rows[1].provider_index, 1);
        assert_eq!(rows[1].provider_name, Some("First"));
    }

    #[test]
    fn group_by_provider_splits_runs() {
        let data = dataset();
        let rows = select_rows(&data, &Filter::new("claude-3-opus"));
        let groups: Vec<_> = group_by_provider(&rows).collect();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0][0].provider_index, 0);

        let rows = select_rows(&data, &Filter::new(""));
        let sizes: Vec<_> = group_by_provider(&rows).map(<[_]>::len).collect();
        assert_eq!(sizes, [2, 2]);
    }
}
