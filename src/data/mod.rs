pub(crate) mod loader;
pub(crate) mod types;

pub(crate) use loader::{load_providers, resolve_data_path};
pub(crate) use types::{Model, Provider};
