//! Configuration management for studyfocus.
//!
//! This module handles loading configuration from `~/.studyfocus/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    ColorSetting, Config, FocusConfig, GeneralConfig, LoggingConfig, NegativeDurationPolicy,
};
