//! Tab groups for an Explorer-style address bar.
//!
//! The crate owns the tab/group model, lays it out into row-wrapped
//! rectangles, resolves pointer hits, runs the click/drag/detach state machine
//! and accepts files dropped from other windows. Painting, shell navigation,
//! file transfers and window launches belong to the host, which plugs in
//! through the traits in [`traits`].
//!
//! Everything runs on the thread that owns the bar's window; nothing here
//! locks or spawns.

/// Library version, for hosts that report it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[macro_use]
pub mod debug;

pub mod config {
    //! Settings re-exported from the `explorer-tabs-config` sub-crate.
    pub use explorer_tabs_config::*;
}
pub mod geometry;
pub mod tab;
pub mod tab_bar_ui;
pub mod traits;
pub mod ui_constants;

pub use geometry::{Point, Rect};
pub use tab::{Location, Tab, TabGroup, TabGroupManager};
pub use tab_bar_ui::{DragOutcome, DropEffect, HitTarget, RenderFrame, TabBar};
pub use traits::{Modifiers, ShellHost, TransferMode};
