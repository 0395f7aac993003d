//! `.cvss.toml` settings for the calculator binary

pub mod loader;

use crate::formatting::ColorMode;
use crate::output::OutputFormat;
use crate::standard::Standard;
use serde::Deserialize;

pub use loader::{load_config, load_config_from, parse_and_validate_config, CONFIG_FILE_NAME};

/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalculatorConfig {
    /// "2", "3.0", "3.1" or "4.0"
    #[serde(default)]
    pub default_version: Option<String>,

    #[serde(default)]
    pub color: Option<ColorMode>,

    /// Ask for every metric in interactive mode, not just mandatory ones
    #[serde(default)]
    pub all_metrics: Option<bool>,

    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl CalculatorConfig {
    /// Configured version, or v3.1 when unset or unrecognized
    pub fn standard(&self) -> Standard {
        self.default_version
            .as_deref()
            .and_then(|version| version.parse().ok())
            .unwrap_or_default()
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color.unwrap_or_default()
    }

    pub fn all_metrics(&self) -> bool {
        self.all_metrics.unwrap_or(false)
    }

    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
