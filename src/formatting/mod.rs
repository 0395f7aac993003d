use crate::severity::Severity;
use colored::*;
use serde::Deserialize;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto, // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Start from `color` and let the environment override it
    pub fn from_env_with(color: ColorMode) -> Self {
        let mut config = Self::new(color);

        // Check NO_COLOR environment variable (per no-color.org standard)
        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    pub fn formatter(&self) -> Box<dyn OutputFormatter> {
        if self.color.should_use_color() {
            Box::new(ColoredFormatter::new(*self))
        } else {
            Box::new(PlainFormatter)
        }
    }
}

pub trait OutputFormatter {
    fn header(&self, text: &str) -> String;
    fn severity(&self, text: &str, severity: Severity) -> String;
    /// Letter hint inside a value name, e.g. the `(N)` of `(N)etwork`
    fn hint(&self, text: &str) -> String;
    fn separator(&self, text: &str) -> String;
}

pub struct ColoredFormatter {
    config: FormattingConfig,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        colored::control::set_override(config.color.should_use_color());
        Self { config }
    }

    fn enabled(&self) -> bool {
        self.config.color.should_use_color()
    }
}

impl OutputFormatter for ColoredFormatter {
    fn header(&self, text: &str) -> String {
        if self.enabled() {
            text.blue().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn severity(&self, text: &str, severity: Severity) -> String {
        if !self.enabled() {
            return text.to_string();
        }
        match severity {
            Severity::None => text.to_string(),
            Severity::Low => text.green().to_string(),
            Severity::Medium => text.yellow().to_string(),
            Severity::High => text.red().to_string(),
            Severity::Critical => text.bright_red().bold().to_string(),
        }
    }

    fn hint(&self, text: &str) -> String {
        if self.enabled() {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn separator(&self, text: &str) -> String {
        if self.enabled() {
            text.bright_blue().bold().to_string()
        } else {
            text.to_string()
        }
    }
}

pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn severity(&self, text: &str, _severity: Severity) -> String {
        text.to_string()
    }

    fn hint(&self, text: &str) -> String {
        text.to_string()
    }

    fn separator(&self, text: &str) -> String {
        text.to_string()
    }
}

fn detect_color_support() -> bool {
    // Check if we're in a dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    std::io::stdout().is_terminal()
}
