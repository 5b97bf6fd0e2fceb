use crate::consts::ALL_FILTER;
use crate::data::{Model, Provider};

/// Case-insensitive substring filter over provider and model identifiers.
///
/// An empty filter, or the token `all` in any case, matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Filter {
    raw: String,
    needle: String,
}

impl Filter {
    pub(crate) fn new(raw: &str) -> Self {
        let raw = if raw.eq_ignore_ascii_case(ALL_FILTER) {
            ""
        } else {
            raw
        };
        Filter {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        }
    }

    /// The filter text as given, after `all` normalization
    pub(crate) fn as_str(&self) -> &str {
        &self.raw
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    fn matches_text(&self, text: &str) -> bool {
        self.is_empty() || text.to_lowercase().contains(&self.needle)
    }

    pub(crate) fn matches_provider(&self, provider: &Provider) -> bool {
        self.matches_text(&provider.id) || self.matches_text(&provider.name)
    }

    pub(crate) fn matches_model(&self, model: &Model) -> bool {
        self.matches_text(&model.id)
            || model.name.as_deref().is_some_and(|name| self.matches_text(name))
    }
}
