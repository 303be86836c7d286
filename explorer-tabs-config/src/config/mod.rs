//! Core `Config` struct definition and validation.
//!
//! Style constants and drag thresholds are grouped into sub-structs with
//! `#[serde(flatten)]`, so they are serialised at the top level of the YAML
//! file, indistinguishable from direct fields.

mod persistence;

use crate::error::ConfigError;
use crate::types::{DragConfig, LogLevel, TabBarStyle};
use serde::{Deserialize, Serialize};

/// Address bar tab configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    // ========================================================================
    // Tab Sizing
    // ========================================================================
    /// Size tabs to their title text (clamped to min/max width) instead of
    /// using `tab_fixed_width`
    #[serde(default = "crate::defaults::tab_auto_size")]
    pub tab_auto_size: bool,

    /// Tab width in pixels when auto-size is off
    #[serde(default = "crate::defaults::tab_fixed_width")]
    pub tab_fixed_width: u32,

    /// Tab (and row) height in pixels
    #[serde(default = "crate::defaults::tab_fixed_height")]
    pub tab_fixed_height: u32,

    // ========================================================================
    // Style & Drag
    // ========================================================================
    #[serde(flatten)]
    pub style: TabBarStyle,

    #[serde(flatten)]
    pub drag: DragConfig,

    // ========================================================================
    // Debug Logging
    // ========================================================================
    /// Verbosity of the debug log file
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tab_auto_size: crate::defaults::tab_auto_size(),
            tab_fixed_width: crate::defaults::tab_fixed_width(),
            tab_fixed_height: crate::defaults::tab_fixed_height(),
            style: TabBarStyle::default(),
            drag: DragConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Check field values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tab_fixed_width == 0 {
            return Err(ConfigError::Validation(
                "tab_fixed_width must be greater than 0".to_string(),
            ));
        }
        if self.tab_fixed_height == 0 {
            return Err(ConfigError::Validation(
                "tab_fixed_height must be greater than 0".to_string(),
            ));
        }
        if self.style.max_rows == 0 {
            return Err(ConfigError::Validation(
                "max_rows must be at least 1".to_string(),
            ));
        }
        if self.style.min_tab_width > self.style.max_tab_width {
            return Err(ConfigError::Validation(format!(
                "min_tab_width ({}) exceeds max_tab_width ({})",
                self.style.min_tab_width, self.style.max_tab_width
            )));
        }
        Ok(())
    }
}
