//! Tab bar engine: layout, hit-testing and pointer interaction for grouped tabs.
//!
//! ## Module layout
//!
//! - [`state`]: `TabBar` struct definition and constructor.
//! - [`layout`]: Row-wrapped placement of groups and tabs.
//! - [`hit_test`]: Pointer position to handle/tab classification.
//! - [`drag_drop`]: Click vs. drag, in-bar reorder and tab detach.
//! - [`external_drop`]: Files and shell items dropped from other windows.
//! - [`context_menu`]: Group colour and tab menus.
//! - [`tab_rendering`]: Paint list for the host's renderer.
//!
//! Model mutations re-run layout immediately; anything else that reads
//! rectangles lays out first when the cache is dirty.

pub mod context_menu;
pub mod drag_drop;
pub mod external_drop;
pub mod layout;
mod state;
pub mod tab_rendering;

pub use context_menu::{ContextMenu, GroupCommand, MenuItem, TabCommand};
pub use drag_drop::{DragKind, DragOutcome, DragSession, DropTarget};
pub use external_drop::{DataPayload, DropEffect, DropHover, DropPayload, ShellItemList};
pub use hit_test::HitTarget;
pub use layout::{LayoutMetrics, LayoutParams};
pub use state::TabBar;
pub use tab_rendering::{DrawCommand, RenderFrame, TabVisual};

use crate::geometry::{Point, Rect};
use crate::tab::{Location, Tab};
use crate::traits::ShellHost;
use crate::ui_constants::{DESIRED_BAR_WIDTH, FALLBACK_TAB_TITLE};
use explorer_tabs_config::{Config, GroupColor, palette_color};

impl<H: ShellHost> TabBar<H> {
    // ========================================================================
    // Setup
    // ========================================================================

    /// Ensure the default group exists, mirror the host's current location
    /// and lay out.
    pub fn initialize(&mut self) {
        self.model.ensure_default_group();
        self.on_explorer_navigate();
        self.relayout();
        log::info!(
            "Tab bar initialized with {} tab(s) in {} group(s)",
            self.model.tab_count(),
            self.model.group_count()
        );
    }

    /// Reload sizing policy, style and drag thresholds.
    pub fn apply_config(&mut self, config: &Config) {
        self.params = LayoutParams::from_config(config);
        self.drag_config = config.drag;
        log::info!(
            "Applied tab bar settings (auto_size={}, fixed={}x{})",
            config.tab_auto_size,
            config.tab_fixed_width,
            config.tab_fixed_height
        );
        self.relayout();
    }

    /// The bar window was resized.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.client = Rect::new(0, 0, width.max(0), height.max(0));
        self.relayout();
    }

    /// Screen position of the client origin, used for external drags.
    pub fn set_screen_origin(&mut self, origin: Point) {
        self.screen_origin = origin;
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Recompute every rectangle and the required height.
    pub fn layout(&mut self) {
        let metrics = layout::layout_groups(
            self.model.groups_mut(),
            self.client,
            &self.params,
            self.measure.as_ref(),
        );
        self.model.refresh_active_flags();
        self.total_height = metrics.total_height;
        self.layout_dirty = false;
        crate::debug_log!(
            "LAYOUT",
            "Laid out {} group(s) in {} row(s), height {}",
            self.model.group_count(),
            metrics.rows,
            metrics.total_height
        );
    }

    pub fn layout_if_needed(&mut self) {
        if self.layout_dirty {
            self.layout();
        }
    }

    pub fn is_layout_dirty(&self) -> bool {
        self.layout_dirty
    }

    /// Height required by the last layout pass.
    pub fn total_height(&self) -> i32 {
        self.total_height
    }

    /// Size to request from the host band.
    pub fn desired_size(&self) -> (i32, i32) {
        let minimum = self.params.row_height + 2 * self.params.margin;
        (DESIRED_BAR_WIDTH, self.total_height.max(minimum))
    }

    /// Classify `pt` against the current rectangles.
    pub fn hit_test(&self, pt: Point) -> HitTarget {
        hit_test::hit_test(self.model.groups(), self.params.handle_width, pt)
    }

    pub(super) fn relayout(&mut self) {
        self.layout_dirty = true;
        self.layout();
    }

    // ========================================================================
    // Model operations
    // ========================================================================

    /// Add a tab for `location` to the active group.
    ///
    /// The title comes from the host, falling back to "Tab". `color` is
    /// adopted by the group when it has no tabs yet. `navigate` only takes
    /// effect together with `activate`.
    pub fn add_tab_for_location(
        &mut self,
        location: Location,
        activate: bool,
        navigate: bool,
        color: Option<GroupColor>,
    ) -> (usize, usize) {
        let title = self
            .host
            .display_name(&location)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_TAB_TITLE.to_string());
        let position = self.model.add_tab(Tab::new(location, title), activate, color);
        // Navigation follows activation; an inactive add never browses
        if activate && navigate {
            self.navigate_active();
        }
        self.relayout();
        position
    }

    pub fn close_tab(&mut self, group: usize, tab: usize) -> bool {
        let closed = self.model.remove_tab(group, tab).is_some();
        if closed {
            self.relayout();
        }
        closed
    }

    pub fn move_tab_to_new_group(&mut self, group: usize, tab: usize) -> Option<(usize, usize)> {
        let moved = self.model.move_tab_to_new_group(group, tab)?;
        self.relayout();
        Some(moved)
    }

    pub fn set_group_color(&mut self, group: usize, color: GroupColor) -> bool {
        let changed = self.model.set_group_color(group, color);
        if changed {
            self.relayout();
        }
        changed
    }

    /// Restore a group's colour to the default palette entry.
    pub fn reset_group_color(&mut self, group: usize) -> bool {
        self.set_group_color(group, palette_color(0))
    }

    /// Make `(group, tab)` active, optionally browsing the host to it.
    pub fn activate_tab(&mut self, group: usize, tab: usize, navigate: bool) -> bool {
        if !self.model.activate(group, tab) {
            return false;
        }
        if navigate {
            self.navigate_active();
        }
        self.relayout();
        true
    }

    /// Make `group` active, optionally browsing to its active tab.
    pub fn activate_group(&mut self, group: usize, navigate: bool) -> bool {
        if !self.model.activate_group(group) {
            return false;
        }
        if navigate {
            self.navigate_active();
        }
        self.relayout();
        true
    }

    /// Activate the first tab showing `location`, without navigating.
    pub fn activate_by_location(&mut self, location: &Location) -> Option<(usize, usize)> {
        let found = self.model.activate_by_location(location)?;
        self.relayout();
        Some(found)
    }

    /// The host browsed somewhere; select the matching tab or add one.
    ///
    /// Unknown locations become a new active tab in the active group without
    /// navigating, so the bar follows the view rather than steering it.
    pub fn on_explorer_navigate(&mut self) {
        let Some(location) = self.host.current_location() else {
            crate::debug_log!("TAB", "Host reported no current location");
            return;
        };
        if self.activate_by_location(&location).is_some() {
            return;
        }
        let color = self.model.active_group().map(|g| g.color);
        self.add_tab_for_location(location, true, false, color);
    }

    /// Open a tab's location in a new window, keeping the tab.
    pub fn open_in_new_window(&mut self, group: usize, tab: usize) -> bool {
        let Some(location) = self.model.tab(group, tab).map(|t| t.location.clone()) else {
            return false;
        };
        let Some(path) = self.host.resolve_path(&location) else {
            log::warn!("Cannot open {} in a new window: no filesystem path", location);
            return false;
        };
        if let Err(e) = self.host.open_new_window(&path) {
            log::error!("Failed to open new window at {}: {:#}", path.display(), e);
        }
        true
    }

    fn navigate_active(&mut self) {
        let Some(location) = self.model.active_tab().map(|t| t.location.clone()) else {
            return;
        };
        if let Err(e) = self.host.navigate_to(&location) {
            log::warn!("Navigation to {} failed: {:#}", location, e);
        }
    }
}
