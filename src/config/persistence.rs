//! Configuration file persistence for linkpaste
//!
//! This module handles loading and saving the settings file in the
//! platform-specific config directory, with graceful fallback to defaults.

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "linkpaste";

/// Configuration file name
const CONFIG_FILE_NAME: &str = "config.json";

/// Extension appended to the config file name during atomic writes
const BACKUP_EXTENSION: &str = "bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific configuration directory for the application.
///
/// - **Windows**: `%APPDATA%\linkpaste\`
/// - **macOS**: `~/Library/Application Support/linkpaste/`
/// - **Linux**: `~/.config/linkpaste/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the config directory cannot be determined.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Get the full path to the configuration file.
pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

// ─────────────────────────────────────────────────────────────────────────────
// Load Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Load configuration from the default config file location.
///
/// A missing, empty or corrupted file yields default settings; the
/// corrupted case is logged as a warning.
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load configuration from an explicit path.
///
/// # Errors
///
/// - `Error::ConfigLoad`: the file exists but cannot be read
/// - `Error::ConfigParse`: the file is not valid settings JSON
pub fn load_config_from(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        debug!(
            "Config file not found at {}, using defaults",
            config_path.display()
        );
        return Ok(Settings::default());
    }

    debug!("Loading config from: {}", config_path.display());

    let contents = fs::read_to_string(config_path).map_err(|e| Error::ConfigLoad {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("Config file is empty, using defaults");
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!(
            "Config file at {} contains invalid JSON: {}",
            config_path.display(),
            e
        );
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    if let Err(e) = settings.validate() {
        warn!("{}; matching with that pattern is disabled", e);
    }

    info!(
        "Configuration loaded successfully from {}",
        config_path.display()
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Save configuration to the default config file location.
pub fn save_config(settings: &Settings) -> Result<()> {
    save_config_to(&get_config_file_path()?, settings)
}

/// Save configuration to an explicit path.
///
/// Writes a backup file next to the target and renames it into place, so a
/// crash mid-write never leaves a truncated config behind. Missing parent
/// directories are created.
pub fn save_config_to(config_path: &Path, settings: &Settings) -> Result<()> {
    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            debug!("Creating config directory: {}", dir.display());
            fs::create_dir_all(dir).map_err(|e| Error::ConfigSave {
                path: dir.to_path_buf(),
                source: Box::new(e),
            })?;
        }
    }

    let backup_path = config_path.with_extension(BACKUP_EXTENSION);
    debug!("Saving config to: {}", config_path.display());

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::ConfigSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, config_path).map_err(|e| Error::ConfigSave {
        path: config_path.to_path_buf(),
        source: Box::new(e),
    })?;

    info!(
        "Configuration saved successfully to {}",
        config_path.display()
    );
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NothingSelected;
    use tempfile::TempDir;

    /// Helper to create a test environment with a temporary config directory.
    struct TestEnv {
        _temp_dir: TempDir,
        config_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().expect("Failed to create temp dir");
            let config_file = temp_dir.path().join(APP_NAME).join(CONFIG_FILE_NAME);
            Self {
                _temp_dir: temp_dir,
                config_file,
            }
        }

        fn write_config(&self, content: &str) {
            let dir = self.config_file.parent().unwrap();
            fs::create_dir_all(dir).expect("Failed to create config dir");
            fs::write(&self.config_file, content).expect("Failed to write config");
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Platform directory tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_file_path_names() {
        // Not every CI environment has a config directory
        if let Ok(path) = get_config_file_path() {
            assert!(path.to_string_lossy().contains(APP_NAME));
            assert!(path.ends_with(CONFIG_FILE_NAME));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Load tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let env = TestEnv::new();
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_config_uses_defaults() {
        let env = TestEnv::new();
        env.write_config("   \n");
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_config() {
        let env = TestEnv::new();
        env.write_config(r#"{"nothing_selected": "auto_select"}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.nothing_selected, NothingSelected::AutoSelectWord);
        assert!(settings.paste_url_onto_selection);
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let env = TestEnv::new();
        env.write_config("{ invalid json }");

        let result = load_config_from(&env.config_file);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_unknown_behavior_returns_error() {
        let env = TestEnv::new();
        env.write_config(r#"{"nothing_selected": "paste_twice"}"#);

        let result = load_config_from(&env.config_file);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_keeps_invalid_regex() {
        // An invalid pattern is reported, not replaced; matching fails closed
        let env = TestEnv::new();
        env.write_config(r#"{"url_regex": "(("}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.url_regex, "((");
        assert!(settings.validate().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Save tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_creates_directory_and_file() {
        let env = TestEnv::new();
        save_config_to(&env.config_file, &Settings::default()).unwrap();

        assert!(env.config_file.exists());
        assert!(!env.config_file.with_extension(BACKUP_EXTENSION).exists());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let env = TestEnv::new();
        let original = Settings {
            nothing_selected: NothingSelected::InsertInlineImageSkeleton,
            convert_selection_to_hyperlink: false,
            url_regex: "^www\\.".to_string(),
            ..Settings::default()
        };

        save_config_to(&env.config_file, &original).unwrap();
        let loaded = load_config_from(&env.config_file).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_overwrites_existing() {
        let env = TestEnv::new();
        env.write_config("{ stale }");

        save_config_to(&env.config_file, &Settings::default()).unwrap();
        assert_eq!(
            load_config_from(&env.config_file).unwrap(),
            Settings::default()
        );
    }

    #[test]
    fn test_load_config_graceful_fallback() {
        // Always returns usable settings, whatever is on disk
        let settings = load_config();
        let _ = settings.nothing_selected.label();
    }
}
