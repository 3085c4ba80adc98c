use crate::config::ClientSettings;
use crate::core::TimeDisplay;
use crate::utils::error::{IssError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file passed with `--config`.
///
/// ```toml
/// [api]
/// base_url = "http://api.open-notify.org"
///
/// [output]
/// local_time = true
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub api: Option<ApiConfig>,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub local_time: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| IssError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| IssError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn base_url(&self) -> Option<&str> {
        self.api.as_ref().and_then(|api| api.base_url.as_deref())
    }

    pub fn time_display(&self) -> Option<TimeDisplay> {
        self.output
            .as_ref()
            .and_then(|output| output.local_time)
            .map(|local| if local { TimeDisplay::Local } else { TimeDisplay::Utc })
    }

    /// Overlay the values this file sets onto `settings`.
    pub fn apply_to(&self, settings: &mut ClientSettings) {
        if let Some(base_url) = self.base_url() {
            settings.api_base = base_url.to_string();
        }
        if let Some(display) = self.time_display() {
            settings.time_display = display;
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = self.base_url() {
            validate_url("api.base_url", base_url)?;
        }
        Ok(())
    }
}
