mod format;
mod listing;
mod summary;
mod table;

pub(crate) use format::compare_price;
pub(crate) use listing::{no_match_message, render_grouped, render_sorted};
pub(crate) use summary::render_provider_summary;
