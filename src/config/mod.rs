pub mod error;

pub use error::ConfigError;

use crate::theme::Theme;
use crate::units::LengthUnit;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = "unit-converter.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    // Preset the theme starts from
    #[serde(default = "default_theme_name")]
    pub theme: String,

    // Initial form state
    #[serde(default)]
    pub defaults: FormDefaults,

    // Partial theme merged over the preset
    #[serde(default)]
    pub theme_overrides: toml::Table,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormDefaults {
    #[serde(default = "default_value")]
    pub value: String,

    #[serde(default = "default_from_unit")]
    pub from: LengthUnit,

    #[serde(default = "default_to_unit")]
    pub to: LengthUnit,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            value: default_value(),
            from: default_from_unit(),
            to: default_to_unit(),
        }
    }
}

fn default_theme_name() -> String {
    "classic".to_string()
}

fn default_value() -> String {
    "0".to_string()
}

fn default_from_unit() -> LengthUnit {
    LengthUnit::Metre
}

fn default_to_unit() -> LengthUnit {
    LengthUnit::Foot
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::load_from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Load `path` if given, else the default file if present, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    Self::load_from_file(fallback)
                } else {
                    debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::empty())
                }
            }
        }
    }

    pub fn empty() -> Self {
        Self {
            theme: default_theme_name(),
            defaults: FormDefaults::default(),
            theme_overrides: toml::Table::new(),
        }
    }

    /// Build the configured theme: preset first, then overrides
    pub fn resolve_theme(&self) -> Result<Theme, ConfigError> {
        self.resolve_theme_named(&self.theme)
    }

    /// Like `resolve_theme` but starting from another preset
    pub fn resolve_theme_named(&self, name: &str) -> Result<Theme, ConfigError> {
        let preset = Theme::preset(name)?;
        Ok(preset.with_overrides(&self.theme_overrides)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}
