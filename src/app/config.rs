//! Configuration loading.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, CONFIG_FILE, StencilConfig, parse_config_content};

/// Load configuration from an explicit path, else from `stencil.toml` in the
/// template directory, else fall back to defaults.
pub fn load_config(
    explicit: Option<&Path>,
    template_dir: &Path,
) -> Result<StencilConfig, AppError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        return parse_config_content(&fs::read_to_string(path)?);
    }

    let candidate = template_dir.join(CONFIG_FILE);
    if candidate.is_file() {
        return parse_config_content(&fs::read_to_string(candidate)?);
    }

    Ok(StencilConfig::default())
}
