//! Tab bar style and pointer drag configuration types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Tab Bar Style
// ============================================================================

/// Spacing, padding and sizing constants for the tab bar layout.
///
/// Flattened into [`crate::Config`], so every field appears at the top level
/// of the YAML file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabBarStyle {
    /// Horizontal padding added on each side of a tab's measured title
    #[serde(default = "crate::defaults::tab_padding_x")]
    pub tab_padding_x: u32,

    /// Vertical padding between a tab's edge and its title
    #[serde(default = "crate::defaults::tab_padding_y")]
    pub tab_padding_y: u32,

    /// Gap between adjacent tabs inside a group
    #[serde(default = "crate::defaults::tab_spacing")]
    pub tab_spacing: u32,

    /// Gap between adjacent groups on the same row
    #[serde(default = "crate::defaults::group_spacing")]
    pub group_spacing: u32,

    /// Width of the reorder handle at the leading edge of each group
    #[serde(default = "crate::defaults::group_handle_width")]
    pub group_handle_width: u32,

    /// Outer margin around the whole bar
    #[serde(default = "crate::defaults::tab_margin")]
    pub tab_margin: u32,

    /// Vertical gap between wrapped rows
    #[serde(default = "crate::defaults::row_spacing")]
    pub row_spacing: u32,

    /// Narrowest a tab may be laid out
    #[serde(default = "crate::defaults::min_tab_width")]
    pub min_tab_width: u32,

    /// Widest a tab may be laid out
    #[serde(default = "crate::defaults::max_tab_width")]
    pub max_tab_width: u32,

    /// Row cap; once reached, groups overflow past the right edge instead of wrapping
    #[serde(default = "crate::defaults::max_rows")]
    pub max_rows: u32,
}

impl Default for TabBarStyle {
    fn default() -> Self {
        Self {
            tab_padding_x: crate::defaults::tab_padding_x(),
            tab_padding_y: crate::defaults::tab_padding_y(),
            tab_spacing: crate::defaults::tab_spacing(),
            group_spacing: crate::defaults::group_spacing(),
            group_handle_width: crate::defaults::group_handle_width(),
            tab_margin: crate::defaults::tab_margin(),
            row_spacing: crate::defaults::row_spacing(),
            min_tab_width: crate::defaults::min_tab_width(),
            max_tab_width: crate::defaults::max_tab_width(),
            max_rows: crate::defaults::max_rows(),
        }
    }
}

// ============================================================================
// Drag Behaviour
// ============================================================================

/// Pointer drag thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragConfig {
    /// Platform drag-start distance on the x axis; half of it promotes a click to a drag
    #[serde(default = "crate::defaults::drag_threshold_x")]
    pub drag_threshold_x: u32,

    /// Platform drag-start distance on the y axis; half of it promotes a click to a drag
    #[serde(default = "crate::defaults::drag_threshold_y")]
    pub drag_threshold_y: u32,

    /// Distance outside the bar's vertical bounds that arms tab detach
    #[serde(default = "crate::defaults::detach_threshold")]
    pub detach_threshold: u32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            drag_threshold_x: crate::defaults::drag_threshold_x(),
            drag_threshold_y: crate::defaults::drag_threshold_y(),
            detach_threshold: crate::defaults::detach_threshold(),
        }
    }
}
