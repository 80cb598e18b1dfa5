mod snapshot;
mod store;

pub use snapshot::Snapshot;
pub use store::Store;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/focusshield[-dev]/` based on FOCUSSHIELD_ENV.
///
/// Set FOCUSSHIELD_ENV=dev to use the development data directory, or
/// FOCUSSHIELD_DATA_DIR to point somewhere else entirely (tests use
/// this to stay hermetic).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    if let Ok(dir) = std::env::var("FOCUSSHIELD_DATA_DIR") {
        let dir = PathBuf::from(dir);
        std::fs::create_dir_all(&dir).map_err(|e| StoreError::NoDataDir(e.to_string()))?;
        return Ok(dir);
    }

    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSSHIELD_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusshield-dev")
    } else {
        base_dir.join("focusshield")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::NoDataDir(e.to_string()))?;
    Ok(dir)
}
