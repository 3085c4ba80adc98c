#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_BASE;
use crate::core::TimeDisplay;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};

/// Effective settings after merging defaults, the config file and the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base: String,
    pub time_display: TimeDisplay,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            time_display: TimeDisplay::default(),
        }
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_url("api_base", &self.api_base)
    }
}
