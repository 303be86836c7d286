//! Default value functions for configuration.
//!
//! Each sub-module groups related `default_*` free functions used as
//! `#[serde(default = "crate::defaults::...")]` attributes on config fields.
//! Everything is re-exported from this module.

mod drag;
mod tab_bar;

// ── Tab sizing & style ─────────────────────────────────────────────────────
pub use tab_bar::{
    group_handle_width, group_spacing, max_rows, max_tab_width, min_tab_width, row_spacing,
    tab_auto_size, tab_fixed_height, tab_fixed_width, tab_margin, tab_padding_x, tab_padding_y,
    tab_spacing,
};

// ── Pointer drag behaviour ─────────────────────────────────────────────────
pub use drag::{detach_threshold, drag_threshold_x, drag_threshold_y};
