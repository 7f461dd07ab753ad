//! Configuration management for focustrack.
//!
//! This module handles loading configuration from `~/.focustrack/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    parse_hex_color, Config, GeneralConfig, ReportConfig, TimerConfig, MAX_PRESET_MINUTES,
};
