use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Reads the credential list: one opaque session-init token per line,
/// trimmed, blank lines dropped, order preserved.
///
/// A missing file is a configuration error the caller reports before
/// exiting cleanly with zero accounts attempted.
pub fn read_credentials(path: &Path) -> Result<Vec<String>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        msg: e.to_string(),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
