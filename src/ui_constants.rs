//! Named constants for the tab bar that are not exposed as settings.
//!
//! Sizes the user can tune (tab width, spacing, drag thresholds) live in
//! `explorer_tabs_config`. What remains here is fixed by the host band
//! contract or by the look of the bar.

use explorer_tabs_config::GroupColor;

// ---------------------------------------------------------------------------
// Host band sizing  (src/tab_bar_ui/mod.rs)
// ---------------------------------------------------------------------------

/// Width the bar asks the host band for.
pub const DESIRED_BAR_WIDTH: i32 = 600;

// ---------------------------------------------------------------------------
// Tab titles  (src/tab/manager.rs, src/traits.rs)
// ---------------------------------------------------------------------------

/// Title used when the host cannot name a location.
pub const FALLBACK_TAB_TITLE: &str = "Tab";
/// Average glyph width used by `CharWidthMeasure`.
pub const AVERAGE_GLYPH_WIDTH: i32 = 7;

// ---------------------------------------------------------------------------
// Colours  (src/tab_bar_ui/tab_rendering.rs)
// ---------------------------------------------------------------------------

pub const BAR_BACKGROUND: GroupColor = GroupColor::rgb(245, 246, 247);
pub const TAB_BORDER: GroupColor = GroupColor::rgb(160, 160, 160);
pub const TAB_TEXT: GroupColor = GroupColor::rgb(40, 40, 40);
pub const DROP_HOVER_OUTLINE: GroupColor = GroupColor::rgb(30, 120, 215);
/// Drag ghost fill, blended at `GHOST_ALPHA`.
pub const GHOST_FILL: GroupColor = GroupColor::rgb(120, 120, 120);
pub const GHOST_ALPHA: u8 = 150;
/// Fill factor for the active tab.
pub const ACTIVE_TAB_BRIGHTEN: f64 = 1.2;
/// Fill factor for group handles.
pub const HANDLE_DARKEN: f64 = 0.8;
