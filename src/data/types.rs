//! Price dataset records
//!
//! The JSON source is loosely shaped, so every field carries a defaulting
//! rule that is applied once while deserializing. Downstream code never
//! sees a missing or mistyped field, only empty strings and absent prices.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::utils::debug_enabled;

/// An organization offering one or more priced models
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Provider {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) name: String,
    #[serde(default, deserialize_with = "lenient_models")]
    pub(crate) models: Vec<Model>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Model {
    #[serde(default, deserialize_with = "lenient_string")]
    pub(crate) id: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) prices: Prices,
}

impl Model {
    /// Name shown in tables, falling back to the id when unnamed
    pub(crate) fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Per-million-token prices; `None` means absent or unusable in the source
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct Prices {
    pub(crate) input_mtok: Option<f64>,
    pub(crate) output_mtok: Option<f64>,
    pub(crate) cache_write_mtok: Option<f64>,
    pub(crate) cache_read_mtok: Option<f64>,
}

impl Prices {
    pub(crate) fn from_value(value: &Value) -> Self {
        let Value::Object(map) = value else {
            if debug_enabled() && !value.is_null() {
                eprintln!(
                    "[DEBUG] Ignoring prices given as {}, model treated as unpriced",
                    value_kind(value)
                );
            }
            return Self::default();
        };

        let field = |key: &str| map.get(key).and_then(price_value);
        Prices {
            input_mtok: field("input_mtok"),
            output_mtok: field("output_mtok"),
            cache_write_mtok: field("cache_write_mtok"),
            cache_read_mtok: field("cache_read_mtok"),
        }
    }

    /// Sort key: input + output, cache prices excluded
    pub(crate) fn price_sum(&self) -> f64 {
        self.input_mtok.unwrap_or(0.0) + self.output_mtok.unwrap_or(0.0)
    }

    /// True when input or output carries a positive price
    pub(crate) fn is_priced(&self) -> bool {
        self.input_mtok.is_some_and(|p| p > 0.0) || self.output_mtok.is_some_and(|p| p > 0.0)
    }
}

impl<'de> Deserialize<'de> for Prices {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Prices::from_value(&value))
    }
}

/// Extract a usable price from a raw JSON value.
///
/// Numbers and numeric strings are accepted; everything else, including
/// non-finite results, is absent.
pub(crate) fn price_value(value: &Value) -> Option<f64> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    if parsed.is_finite() {
        Some(parsed)
    } else {
        None
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Null => Ok(None),
        other => {
            if debug_enabled() {
                eprintln!("[DEBUG] Ignoring {} where a string was expected", value_kind(&other));
            }
            Ok(None)
        }
    }
}

fn lenient_models<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Model>, D::Error> {
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        if debug_enabled() {
            eprintln!("[DEBUG] Ignoring non-list models field");
        }
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Model>(item) {
            Ok(model) => Some(model),
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Skipping malformed model entry: {e}");
                }
                None
            }
        })
        .collect())
}
