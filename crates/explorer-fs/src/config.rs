//! Format-agnostic configuration loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Serialization format of a settings file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &NormalizedPath) -> Result<Self> {
        let extension = path.extension().unwrap_or("");
        match extension.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(Error::UnsupportedFormat {
                extension: extension.to_string(),
            }),
        }
    }

    /// Human-readable name used in error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Toml => "TOML",
            Self::Yaml => "YAML",
        }
    }
}

/// Format-agnostic configuration store.
///
/// Detects format from the file extension and handles
/// serialization/deserialization transparently. Saves are atomic.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        let content = io::read_text(path)?;
        Self::parse(path, format, &content)
    }

    /// Load configuration, returning `T::default()` when the file is absent.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        let format = ConfigFormat::from_path(path)?;
        match io::read_text_if_exists(path)? {
            Some(content) => Self::parse(path, format, &content),
            None => {
                tracing::debug!(%path, "No config file, using defaults");
                Ok(T::default())
            }
        }
    }

    /// Save configuration to a file, replacing it wholesale.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let format = ConfigFormat::from_path(path)?;
        let serialize_err = |message: String| Error::ConfigSerialize {
            path: path.to_native(),
            format: format.label().into(),
            message,
        };

        let content = match format {
            ConfigFormat::Json => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?
            }
            ConfigFormat::Toml => {
                toml::to_string_pretty(value).map_err(|e| serialize_err(e.to_string()))?
            }
            ConfigFormat::Yaml => {
                serde_yaml::to_string(value).map_err(|e| serialize_err(e.to_string()))?
            }
        };

        io::write_text(path, &content)
    }

    fn parse<T: DeserializeOwned>(
        path: &NormalizedPath,
        format: ConfigFormat,
        content: &str,
    ) -> Result<T> {
        let parsed = match format {
            ConfigFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            ConfigFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };
        parsed.map_err(|message| Error::ConfigParse {
            path: path.to_native(),
            format: format.label().into(),
            message,
        })
    }
}
