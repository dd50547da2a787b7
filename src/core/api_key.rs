//! API key storage: optional file fallback for OPENROUTER_API_KEY.
//!
//! `textscrub config --set-key` writes the key to a dedicated file in the
//! config directory (0o600 on Unix); config loading falls back to it when
//! the environment variable is absent.

use std::fs;
use std::io;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::core::paths;

const KEY_FILE: &str = "api-key";

/// Errors when storing the API key.
#[derive(Debug, thiserror::Error)]
pub enum ApiKeyError {
    #[error("No config directory available")]
    NoConfigDir,
    #[error("Failed to store API key: {0}")]
    Io(#[from] io::Error),
}

/// Path to the API key file in the config directory.
pub fn credentials_path() -> Option<PathBuf> {
    paths::config_dir().map(|d| d.join(KEY_FILE))
}

/// Load the API key from the key file.
/// Returns `None` if the file is absent, empty, or unreadable.
pub fn load_api_key() -> Option<String> {
    let content = fs::read_to_string(credentials_path()?).ok()?;
    let key = content.trim();
    (!key.is_empty()).then(|| key.to_string())
}

/// Store the API key in the config directory, creating it if needed.
/// Returns the path the key was written to.
pub fn store_api_key(key: &str) -> Result<PathBuf, ApiKeyError> {
    let path = credentials_path().ok_or(ApiKeyError::NoConfigDir)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, format!("{}\n", key.trim()))?;

    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::{load_api_key, store_api_key};

    #[test]
    fn store_then_load_trims_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        unsafe { std::env::set_var("TEST_CONFIG_DIR", dir.path()) };

        let path = store_api_key("  sk-or-test-123\n").unwrap();
        assert!(path.ends_with("api-key"));
        assert_eq!(load_api_key().as_deref(), Some("sk-or-test-123"));

        unsafe { std::env::remove_var("TEST_CONFIG_DIR") };
    }
}
