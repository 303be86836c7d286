//! Configuration system for the explorer-tabs address bar engine.
//!
//! - Tab sizing policy (auto-size vs. fixed width/height)
//! - Tab bar style constants and drag thresholds
//! - Group colours and the default palette
//! - YAML persistence and validation
//! - Configuration file watching for settings reload

pub mod config;
pub mod defaults;
pub mod error;
mod types;
#[cfg(feature = "watcher")]
pub mod watcher;

pub use config::Config;
pub use error::ConfigError;
pub use types::{
    DEFAULT_GROUP_PALETTE, DragConfig, GroupColor, LogLevel, TabBarStyle, palette_color,
};
#[cfg(feature = "watcher")]
pub use watcher::{ConfigReloadEvent, ConfigWatcher};
