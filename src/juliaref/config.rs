use crate::error::{JuliarefError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WIDTH: usize = 80;

/// When to emit colour escapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        };
        f.write_str(name)
    }
}

impl FromStr for ColorChoice {
    type Err = JuliarefError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(JuliarefError::Config(format!(
                "color must be one of auto, always, never (got `{}`)",
                other
            ))),
        }
    }
}

/// Configuration for juliaref, stored in `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JuliarefConfig {
    /// Width used when none is given and the terminal size is unknown
    #[serde(default = "default_width")]
    pub default_width: usize,

    #[serde(default)]
    pub color: ColorChoice,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}

impl Default for JuliarefConfig {
    fn default() -> Self {
        Self {
            default_width: DEFAULT_WIDTH,
            color: ColorChoice::default(),
        }
    }
}

/// Keys accepted by the `config` command.
pub const CONFIG_KEYS: [&str; 2] = ["default-width", "color"];

impl JuliarefConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: JuliarefConfig = serde_json::from_str(&content)?;
        if config.default_width == 0 {
            return Err(JuliarefError::Config(
                "default_width must be at least 1".to_string(),
            ));
        }
        debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Reads one key as display text.
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "default-width" => Ok(self.default_width.to_string()),
            "color" => Ok(self.color.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Parses and sets one key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-width" => {
                let width: usize = value.trim().parse().map_err(|_| {
                    JuliarefError::Config(format!("default-width must be a number (got `{}`)", value))
                })?;
                if width == 0 {
                    return Err(JuliarefError::Config(
                        "default-width must be at least 1".to_string(),
                    ));
                }
                self.default_width = width;
            }
            "color" => self.color = value.parse()?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> JuliarefError {
    JuliarefError::Config(format!(
        "unknown key `{}` (expected one of: {})",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JuliarefConfig::default();
        assert_eq!(config.default_width, 80);
        assert_eq!(config.color, ColorChoice::Auto);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = JuliarefConfig::load(dir.path()).unwrap();
        assert_eq!(config, JuliarefConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");

        let mut config = JuliarefConfig::default();
        config.set("default-width", "120").unwrap();
        config.set("color", "Never").unwrap();
        config.save(&nested).unwrap();

        let loaded = JuliarefConfig::load(&nested).unwrap();
        assert_eq!(loaded.default_width, 120);
        assert_eq!(loaded.color, ColorChoice::Never);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"color":"always"}"#).unwrap();

        let config = JuliarefConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_width, 80);
        assert_eq!(config.color, ColorChoice::Always);
    }

    #[test]
    fn test_zero_width_in_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"default_width":0}"#).unwrap();
        assert!(matches!(
            JuliarefConfig::load(dir.path()),
            Err(JuliarefError::Config(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(matches!(
            JuliarefConfig::load(dir.path()),
            Err(JuliarefError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = JuliarefConfig::default();
        assert!(config.set("default-width", "0").is_err());
        assert!(config.set("default-width", "wide").is_err());
        assert!(config.set("color", "sometimes").is_err());
        assert!(config.set("file-ext", ".md").is_err());
        assert_eq!(config, JuliarefConfig::default());
    }

    #[test]
    fn test_get_keys() {
        let config = JuliarefConfig::default();
        assert_eq!(config.get("default-width").unwrap(), "80");
        assert_eq!(config.get("color").unwrap(), "auto");
        assert!(config.get("nope").is_err());
    }
}
