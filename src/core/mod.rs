//! Core module - filtering, flattening and summarizing the price dataset

mod filter;
mod rows;
mod summary;

pub(crate) use filter::Filter;
pub(crate) use rows::{PriceRow, attribute_providers, group_by_provider, select_rows, sort_by_price};
pub(crate) use summary::{ProviderSummary, summarize_providers};
