//! Front-end configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Display settings for the terminal front-end.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// Color name for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color name for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Background color name for the winning line.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// `tracing` filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_x_color() -> String {
    "red".to_string()
}

fn default_o_color() -> String {
    "blue".to_string()
}

fn default_highlight_color() -> String {
    "lightred".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            log_filter: default_log_filter(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    ///
    /// Runs before tracing is installed, so it does not log; call
    /// [`TuiConfig::log_loaded`] once the subscriber is up.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.palette()?;
        Ok(config)
    }

    /// Records which config is in effect.
    pub fn log_loaded(&self, path: Option<&Path>) {
        match path {
            Some(path) => info!(
                path = %path.display(),
                x_color = %self.x_color,
                o_color = %self.o_color,
                highlight_color = %self.highlight_color,
                "Config loaded from file"
            ),
            None => info!("Using default config"),
        }
    }

    /// Loads from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Resolves the configured color names.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            x: parse_color("x_color", &self.x_color)?,
            o: parse_color("o_color", &self.o_color)?,
            highlight: parse_color("highlight_color", &self.highlight_color)?,
        })
    }
}

fn parse_color(field: &str, name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name)
        .map_err(|_| ConfigError::new(format!("Unknown color {:?} for {}", name, field)))
}

/// Resolved colors used when drawing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Foreground for X marks.
    pub x: Color,
    /// Foreground for O marks.
    pub o: Color,
    /// Background for the winning line.
    pub highlight: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            x: Color::Red,
            o: Color::Blue,
            highlight: Color::LightRed,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
