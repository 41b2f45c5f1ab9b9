use std::fs;
use std::path::{Path, PathBuf};

use super::shared::constants::DEFAULT_OUTPUT_DIR;
use super::shared::env::get_env_variable;

/// The directory converted artifacts are written to. `OUTPUT_DIR` overrides
/// the default; the value is read-only after startup.
pub fn output_dir() -> PathBuf {
    PathBuf::from(get_env_variable("OUTPUT_DIR").unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()))
}

fn create_dir_if_nonexistent(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
        tracing::info!("created output folder at {:?}", path);
    }
    Ok(())
}

/// Create the output directory if absent. Runs once at process start.
pub fn create_necessary_directories() -> anyhow::Result<()> {
    create_dir_if_nonexistent(&output_dir())
}
