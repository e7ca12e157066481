//! Roster configuration.
//!
//! Loaded from `--config`, `.roster.yml` or `~/.config/roster/roster.yml`.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use roster::domain::Locale;

/// Default directory file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "roster.csv";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory file to read and write.
    #[serde(rename = "data-file")]
    pub data_file: PathBuf,

    /// Header language for newly created files.
    pub locale: Locale,

    /// Clear the terminal before each menu redraw.
    #[serde(rename = "clear-screen")]
    pub clear_screen: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            locale: Locale::En,
            clear_screen: true,
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. .roster.yml in current directory
    /// 3. ~/.config/roster/roster.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_config = PathBuf::from(".roster.yml");
        if project_config.exists() {
            match Self::load_from_file(&project_config) {
                Ok(config) => {
                    log::info!("Loaded config from .roster.yml");
                    return Ok(config);
                }
                Err(e) => {
                    log::warn!("Failed to load .roster.yml: {}", e);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("roster").join("roster.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => {
                        log::info!("Loaded config from {}", user_config.display());
                        return Ok(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;
        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.data_file.as_os_str().is_empty() {
            eyre::bail!("data-file must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("roster.csv"));
        assert_eq!(config.locale, Locale::En);
        assert!(config.clear_screen);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r#"
data-file: aprendices.csv
locale: es
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.data_file, PathBuf::from("aprendices.csv"));
        assert_eq!(config.locale, Locale::Es);
        // Other fields should have defaults
        assert!(config.clear_screen);
    }

    #[test]
    fn test_invalid_config() {
        let config = Config {
            data_file: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.yml");
        fs::write(&path, "clear-screen: false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.clear_screen);
        assert_eq!(config.data_file, PathBuf::from(DEFAULT_DATA_FILE));
    }

    #[test]
    fn test_load_explicit_path_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_rejects_unknown_locale() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("roster.yml");
        fs::write(&path, "locale: fr\n").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }
}
