//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use ladderview::{LadderError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for LadderError {
    fn from(err: ConfigError) -> Self {
        LadderError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (ladderview/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, LadderError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("ladderview/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "ladderview", "ladderview") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file doesn't exist, cannot be read, is not a
/// valid configuration, or holds values the layout cannot draw.
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, LadderError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig =
        toml::from_str(&content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[layout]\nelement_width = 100\npadding = 20\n\n[style]\nstroke_color = \"#333\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();

        assert_eq!(config.layout().element_width(), 100.0);
        assert_eq!(config.layout().padding(), 20.0);
        assert_eq!(config.layout().branch_spacing(), 30.0);
        assert!(config.style().stroke_color().is_ok());
    }

    #[test]
    fn test_missing_explicit_config() {
        let result = load_config(Some("does/not/exist.toml"));

        assert!(matches!(result, Err(LadderError::Io(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[layout\nelement_width = ").unwrap();

        let err = load_config(Some(file.path())).unwrap_err();

        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_invalid_layout_values() {
        let cases = [
            ("[layout]\nbranch_spacing = -30", "branch_spacing"),
            ("[layout]\nelement_width = 10", "symbol_width"),
            ("[layout]\npadding = -1.0", "padding"),
            ("[layout]\nelement_width = nan", "element_width"),
            ("[style]\nstroke_width = -2", "stroke_width"),
        ];

        for (content, field) in cases {
            let mut file = NamedTempFile::new().unwrap();
            writeln!(file, "{content}").unwrap();

            let err = load_config(Some(file.path())).unwrap_err().to_string();

            assert!(err.contains("Validation error"), "{content}: {err}");
            assert!(err.contains(field), "{content}: {err}");
        }
    }
}
