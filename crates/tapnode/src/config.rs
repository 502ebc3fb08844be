//! Button configuration.
//!
//! [`ButtonConfig`] collects the defaults a [`Button`](crate::node::nodes::Button)
//! is built with. It can be written by hand or loaded from TOML; every
//! field is optional in the file and falls back to its default.
//!
//! ```toml
//! cancel-behavior = "silent"
//!
//! [label]
//! font-name = "Avenir-Heavy"
//! font-size = 24.0
//! color = "#ffcc00"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use tapnode_core::logging::targets;
use tapnode_render::{Color, Font};

/// Errors that can occur while loading a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has the wrong shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A field has a value outside its allowed range.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// What a button does when the system cancels a touch sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CancelBehavior {
    /// Behave as if the touch ended outside the button: deselect and fire
    /// `TouchUp`, never `TouchUpInside`.
    #[default]
    EndOutside,
    /// Deselect without firing any action.
    Silent,
}

/// Defaults for the label every button owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct LabelConfig {
    /// Font family name.
    pub font_name: String,
    /// Font size in points.
    pub font_size: f32,
    /// Text color, as a hex string in files.
    #[serde(with = "hex_color")]
    pub color: Color,
    /// How far above the button the label is drawn; must be positive.
    pub z_offset: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_name: "Helvetica".to_string(),
            font_size: 32.0,
            color: Color::WHITE,
            z_offset: 1.0,
        }
    }
}

impl LabelConfig {
    /// The configured font.
    pub fn font(&self) -> Font {
        Font::new(self.font_name.clone(), self.font_size)
    }
}

/// Configuration for building buttons.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ButtonConfig {
    /// Touch cancellation handling.
    pub cancel_behavior: CancelBehavior,
    /// Label defaults.
    pub label: LabelConfig,
}

impl ButtonConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            font = %config.label.font_name,
            cancel = ?config.cancel_behavior,
            "loaded button config"
        );
        Ok(config)
    }

    /// Serialize to TOML text.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check that every field is in range.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.label.font_size.is_finite() && self.label.font_size > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "label.font-size",
                reason: format!("must be a positive number, got {}", self.label.font_size),
            });
        }
        if self.label.font_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "label.font-name",
                reason: "must not be empty".to_string(),
            });
        }
        if !(self.label.z_offset.is_finite() && self.label.z_offset > 0.0) {
            return Err(ConfigError::InvalidValue {
                field: "label.z-offset",
                reason: format!(
                    "must be a positive number so the label draws above the button, got {}",
                    self.label.z_offset
                ),
            });
        }
        Ok(())
    }
}

mod hex_color {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use tapnode_render::Color;

    pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::from_hex(&text).ok_or_else(|| D::Error::custom(format!("invalid hex color `{text}`")))
    }
}
