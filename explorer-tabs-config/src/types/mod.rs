//! Configuration types and enums.
//!
//! - `color`    : Group colours and the default palette
//! - `log_level`: Debug log verbosity
//! - `tab_bar`  : Tab bar style constants and drag thresholds

pub mod color;
pub mod log_level;
pub mod tab_bar;

pub use color::{DEFAULT_GROUP_PALETTE, GroupColor, palette_color};
pub use log_level::LogLevel;
pub use tab_bar::{DragConfig, TabBarStyle};
