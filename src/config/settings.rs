//! Configuration settings for focustrack.
//!
//! Settings are loaded once at startup from `~/.focustrack/config.yaml` and
//! passed around by reference; nothing mutates them afterwards.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::FocusError;

/// Longest duration a preset may select, in minutes.
pub const MAX_PRESET_MINUTES: u32 = 24 * 60;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer screen settings.
    pub timer: TimerConfig,
    /// Report screen settings.
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Ring the terminal bell for alert-level feedback.
    #[serde(default = "default_true")]
    pub haptics: bool,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TimerConfig {
    /// Duration selected when the timer screen opens, in minutes.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
    /// Preset durations offered on the timer screen, in minutes.
    #[serde(default = "default_presets")]
    pub presets: Vec<u32>,
    /// Categories a session can be filed under.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
    /// Tick period in milliseconds. One second outside of demos.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

/// Report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Category chart colors as `#RRGGBB`, assigned cyclically.
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_true() -> bool {
    true
}

const fn default_minutes() -> u32 {
    25
}

fn default_presets() -> Vec<u32> {
    vec![15, 25, 45, 60]
}

fn default_categories() -> Vec<String> {
    ["Study", "Coding", "Reading", "Project"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

const fn default_tick_millis() -> u64 {
    1000
}

fn default_palette() -> Vec<String> {
    ["#FF9F0A", "#FF453A", "#0A84FF", "#BF5AF2", "#32D74B"]
        .iter()
        .map(ToString::to_string)
        .collect()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            haptics: default_true(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
            presets: default_presets(),
            categories: default_categories(),
            tick_millis: default_tick_millis(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            palette: default_palette(),
        }
    }
}

impl TimerConfig {
    /// Tick period as a `std::time::Duration`.
    #[must_use]
    pub const fn tick_period(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_millis)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed or is invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), FocusError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| FocusError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, FocusError> {
        serde_yaml::to_string(self)
            .map_err(|e| FocusError::Config(format!("Failed to serialize config: {e}")))
    }

    /// Check the settings the timer and report rely on.
    ///
    /// # Errors
    ///
    /// Returns `FocusError::Config` describing the first invalid setting.
    pub fn validate(&self) -> Result<(), FocusError> {
        let timer = &self.timer;

        if timer.categories.is_empty() {
            return Err(FocusError::Config(
                "timer.categories must list at least one category".to_string(),
            ));
        }
        if timer.categories.iter().any(|c| c.trim().is_empty()) {
            return Err(FocusError::Config(
                "timer.categories must not contain blank names".to_string(),
            ));
        }

        for minutes in timer.presets.iter().chain(std::iter::once(&timer.default_minutes)) {
            if *minutes == 0 || *minutes > MAX_PRESET_MINUTES {
                return Err(FocusError::Config(format!(
                    "timer durations must be between 1 and {MAX_PRESET_MINUTES} minutes, got {minutes}"
                )));
            }
        }

        if timer.tick_millis == 0 {
            return Err(FocusError::Config(
                "timer.tick_millis must be greater than zero".to_string(),
            ));
        }

        if self.report.palette.is_empty() {
            return Err(FocusError::Config(
                "report.palette must list at least one color".to_string(),
            ));
        }
        for color in &self.report.palette {
            if parse_hex_color(color).is_none() {
                return Err(FocusError::Config(format!(
                    "report.palette entry {color:?} is not a #RRGGBB color"
                )));
            }
        }

        Ok(())
    }
}

/// Parse a `#RRGGBB` color into its components.
#[must_use]
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}
