use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::consts::{DEFAULT_DATA_DIR, DEFAULT_DATA_FILE};
use crate::error::AppError;

use super::types::Provider;

/// `prices/data.json` next to the running executable
fn default_data_path() -> Result<PathBuf, AppError> {
    let exe = std::env::current_exe().map_err(AppError::ExeDir)?;
    let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
    Ok(dir.join(DEFAULT_DATA_DIR).join(DEFAULT_DATA_FILE))
}

/// Use the explicitly configured dataset path (`--data`, `LLM_PRICES_DATA`
/// or `data_path` in the config file), else the default beside the executable.
pub(crate) fn resolve_data_path(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_data_path(),
    }
}

pub(crate) fn parse_providers(content: &str) -> Result<Vec<Provider>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Read and normalize the whole dataset. The file is closed before any
/// filtering starts.
pub(crate) fn load_providers(path: &Path, debug: bool) -> Result<Vec<Provider>, AppError> {
    let start = Instant::now();

    let content = fs::read_to_string(path).map_err(|source| AppError::DataRead {
        path: path.to_path_buf(),
        source,
    })?;
    let providers = parse_providers(&content).map_err(|source| AppError::DataParse {
        path: path.to_path_buf(),
        source,
    })?;

    if debug {
        let models: usize = providers.iter().map(|p| p.models.len()).sum();
        eprintln!(
            "[DEBUG] Loaded {} providers ({} models) from {} ({:.2}ms)",
            providers.len(),
            models,
            path.display(),
            start.elapsed().as_secs_f64() * 1000.0
        );
    }

    Ok(providers)
}
