//! Frontend configuration loaded from a TOML file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failures while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file was read but is not valid configuration TOML.
    #[error("failed to parse config {path}: {source}")]
    Parse {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
}

/// Colour theme selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// High-contrast palette for dark terminals.
    #[default]
    Dark,
    /// Palette for light terminals.
    Light,
}

/// Coordinates pinned from configuration instead of a live lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedLocation {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

/// Top-level frontend configuration.
///
/// Every field has a default, so a missing file and an empty file both give
/// a working setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Colour theme for the interface.
    pub theme: ThemeChoice,
    /// File that receives tracing output while the interface owns the tty.
    pub log_path: PathBuf,
    /// Pinned position; when set, no environment lookup happens.
    pub location: Option<FixedLocation>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeChoice::default(),
            log_path: PathBuf::from("clutch-tui.log"),
            location: None,
        }
    }
}

impl Config {
    /// Loads configuration from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_path, PathBuf::from("clutch-tui.log"));
    }

    #[test]
    fn full_file_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clutch.toml");
        fs::write(
            &path,
            r#"
theme = "light"
log_path = "/tmp/clutch.log"

[location]
latitude = 51.5074
longitude = -0.1278
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.log_path, PathBuf::from("/tmp/clutch.log"));
        let location = config.location.unwrap();
        assert!((location.latitude - 51.5074).abs() < f64::EPSILON);
        assert!((location.longitude + 0.1278).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clutch.toml");
        fs::write(&path, "theme = \"light\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.theme, ThemeChoice::Light);
        assert_eq!(config.log_path, PathBuf::from("clutch-tui.log"));
        assert_eq!(config.location, None);
    }

    #[test]
    fn invalid_toml_reports_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clutch.toml");
        fs::write(&path, "theme = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config"));
    }
}
