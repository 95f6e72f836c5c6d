use anyhow::{Context, Result};
use risc_core::export::DEFAULT_EXPORT_PATH;
use serde::Deserialize;
use std::fs;

/// Application settings read from an optional YAML file. Command-line flags take
/// precedence over these values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where `export` writes when no path is given.
    pub output_path: String,
    /// Registry file overriding the built-in parameter defaults.
    pub registry_path: Option<String>,
    /// Whether the form offers the contaminant list section.
    pub contaminant_section: bool,
    /// Initially selected chemical. Defaults to the first entry of the table.
    pub default_chemical: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_path: DEFAULT_EXPORT_PATH.to_string(),
            registry_path: None,
            contaminant_section: true,
            default_chemical: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path))
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }
}
