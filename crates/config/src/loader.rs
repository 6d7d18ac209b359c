//! Configuration file resolution and loading.
//!
//! Responsibilities:
//! - Resolve the UI config path (CLI arg > env var > platform config dir).
//! - Parse the JSON config file into `UiConfig`.
//!
//! Does NOT handle:
//! - CLI argument parsing (see the tui crate's `cli` module).
//! - Defaulting of individual descriptor fields (serde defaults in `types`).
//!
//! Invariants:
//! - A missing config file is not an error: the built-in sample config is
//!   used so the binary runs out of the box.
//! - An existing but unreadable or malformed file IS an error; silently
//!   ignoring a config the user wrote would be worse than failing.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::types::UiConfig;

/// Environment variable naming the UI config file.
pub const CONFIG_PATH_ENV: &str = "COHORT_CONFIG";

/// File name looked up inside the platform config directory.
const CONFIG_FILE_NAME: &str = "ui.json";

/// Errors surfaced while loading the UI configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Load `.env` if present. Errors are ignored: a missing `.env` is normal.
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Resolve the config file path.
///
/// Precedence: explicit CLI path > `COHORT_CONFIG` env var > `ui.json` in
/// the platform config directory (only when it exists).
pub fn resolve_config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = cli_path {
        if !path.as_os_str().is_empty() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        if !env_path.trim().is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    if let Some(dirs) = ProjectDirs::from("", "", "cohort-tui") {
        let candidate = dirs.config_dir().join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }
    }

    None
}

/// Load the UI configuration.
///
/// When no config file resolves, returns the built-in sample config and
/// logs where a file would have been picked up.
pub fn load_ui_config(cli_path: Option<&Path>) -> Result<UiConfig, ConfigError> {
    match resolve_config_path(cli_path) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading UI config");
            let raw = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse { path, source })
        }
        None => {
            tracing::info!(
                "no UI config found (set {} or pass --config-path); using built-in sample",
                CONFIG_PATH_ENV
            );
            Ok(UiConfig::sample())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    #[serial]
    fn test_cli_path_takes_precedence_over_env() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/from-env.json"), || {
            let resolved = resolve_config_path(Some(Path::new("/tmp/from-cli.json")));
            assert_eq!(resolved, Some(PathBuf::from("/tmp/from-cli.json")));
        });
    }

    #[test]
    #[serial]
    fn test_env_var_used_when_no_cli_path() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("/tmp/from-env.json"), || {
            let resolved = resolve_config_path(None);
            assert_eq!(resolved, Some(PathBuf::from("/tmp/from-env.json")));
        });
    }

    #[test]
    #[serial]
    fn test_blank_env_var_is_ignored() {
        temp_env::with_var(CONFIG_PATH_ENV, Some("  "), || {
            // May still resolve via the platform config dir; it must not
            // resolve to the blank env value.
            let resolved = resolve_config_path(None);
            assert_ne!(resolved, Some(PathBuf::from("  ")));
        });
    }

    #[test]
    #[serial]
    fn test_load_missing_config_falls_back_to_sample() {
        temp_env::with_var(CONFIG_PATH_ENV, None::<&str>, || {
            // Point the CLI path at nothing so the platform dir (which may
            // exist on a dev machine) is bypassed via explicit empty check.
            let config = load_ui_config(None);
            // Either the sample config (no file anywhere) or a real parse;
            // in CI there is no platform config, so assert the sample shape.
            if let Ok(config) = config {
                assert!(!config.dropdowns.is_empty() || !config.members.is_empty());
            }
        });
    }

    #[test]
    #[serial]
    fn test_load_valid_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "dropdowns": [{{ "id": "course" }}], "members": [] }}"#
        )
        .unwrap();

        let config = load_ui_config(Some(file.path())).unwrap();
        assert_eq!(config.dropdowns.len(), 1);
        assert_eq!(config.dropdowns[0].id, "course");
        assert!(config.members.is_empty());
    }

    #[test]
    #[serial]
    fn test_load_malformed_config_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_ui_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    #[serial]
    fn test_load_unreadable_path_is_an_error() {
        let err = load_ui_config(Some(Path::new("/nonexistent/dir/ui.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
