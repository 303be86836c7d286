//! Group collection and active-selection bookkeeping.
//!
//! Every public mutator leaves the manager in a consistent state:
//! - at least one group exists
//! - no group is empty unless it is the only group
//! - the active `(group, tab)` pair points at a real tab whenever any tab exists
//!
//! Out-of-range indices are ignored (the call returns `None`/`false`).

use super::{Location, Tab, TabGroup, group_name};
use explorer_tabs_config::{GroupColor, palette_color};

/// Owns the tab groups of one bar and tracks which tab is active.
#[derive(Debug, Clone)]
pub struct TabGroupManager {
    groups: Vec<TabGroup>,
    active_group: usize,
    active_tab: usize,
}

impl TabGroupManager {
    /// Create a manager holding the empty default group
    pub fn new() -> Self {
        Self {
            groups: vec![TabGroup::default_group()],
            active_group: 0,
            active_tab: 0,
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn groups(&self) -> &[TabGroup] {
        &self.groups
    }

    /// Mutable access for layout, which writes cached rectangles.
    pub(crate) fn groups_mut(&mut self) -> &mut [TabGroup] {
        &mut self.groups
    }

    pub fn group(&self, group: usize) -> Option<&TabGroup> {
        self.groups.get(group)
    }

    pub fn tab(&self, group: usize, tab: usize) -> Option<&Tab> {
        self.groups.get(group)?.tabs.get(tab)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of tabs across all groups
    pub fn tab_count(&self) -> usize {
        self.groups.iter().map(TabGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(TabGroup::is_empty)
    }

    /// Active `(group, tab)` indices. The tab index is only meaningful when
    /// the active group has tabs.
    pub fn active_indices(&self) -> (usize, usize) {
        (self.active_group, self.active_tab)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tab(self.active_group, self.active_tab)
    }

    pub fn active_group(&self) -> Option<&TabGroup> {
        self.groups.get(self.active_group)
    }

    /// First tab whose location equals `location`, in display order
    pub fn find_location(&self, location: &Location) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(g, group)| {
            group
                .tabs
                .iter()
                .position(|t| &t.location == location)
                .map(|t| (g, t))
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Make `(group, tab)` the active tab
    pub fn activate(&mut self, group: usize, tab: usize) -> bool {
        if self.tab(group, tab).is_none() {
            return false;
        }
        self.active_group = group;
        self.active_tab = tab;
        log::debug!("Activated tab ({}, {})", group, tab);
        true
    }

    /// Make `group` the active group, keeping the active tab index where it fits
    pub fn activate_group(&mut self, group: usize) -> bool {
        if group >= self.groups.len() {
            return false;
        }
        self.active_group = group;
        self.clamp_active();
        log::debug!("Activated group {}", group);
        true
    }

    /// Activate the first tab showing `location`
    pub fn activate_by_location(&mut self, location: &Location) -> Option<(usize, usize)> {
        let (group, tab) = self.find_location(location)?;
        self.activate(group, tab);
        Some((group, tab))
    }

    /// Recompute every tab's `is_active` flag from the selection
    pub fn refresh_active_flags(&mut self) {
        let (active_group, active_tab) = (self.active_group, self.active_tab);
        for (g, group) in self.groups.iter_mut().enumerate() {
            for (t, tab) in group.tabs.iter_mut().enumerate() {
                tab.is_active = g == active_group && t == active_tab;
            }
        }
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Append `tab` to the active group and return its position.
    ///
    /// When the active group has no tabs yet it adopts `color`, if given.
    /// With `activate == false` the selection only moves when the bar was empty.
    pub fn add_tab(
        &mut self,
        tab: Tab,
        activate: bool,
        color: Option<GroupColor>,
    ) -> (usize, usize) {
        self.ensure_default_group();
        let group_index = self.active_group;
        let group = &mut self.groups[group_index];
        if group.is_empty()
            && let Some(color) = color
        {
            group.color = color;
        }
        log::info!(
            "Added tab '{}' to group {} (tabs in group: {})",
            tab.title,
            group_index,
            group.len() + 1
        );
        group.tabs.push(tab);
        let tab_index = group.len() - 1;

        if activate {
            self.active_tab = tab_index;
        }
        self.clamp_active();
        (group_index, tab_index)
    }

    /// Remove and return the tab at `(group, tab)`
    pub fn remove_tab(&mut self, group: usize, tab: usize) -> Option<Tab> {
        let removed = {
            let g = self.groups.get_mut(group)?;
            if tab >= g.len() {
                return None;
            }
            g.tabs.remove(tab)
        };
        log::info!("Closed tab '{}' at ({}, {})", removed.title, group, tab);

        // Keep the selection on the same tab when an earlier one goes away
        if group == self.active_group && tab < self.active_tab {
            self.active_tab -= 1;
        }
        self.prune_empty_groups();
        Some(removed)
    }

    /// Move the tab at `(group, tab)` into a fresh group right after its own.
    ///
    /// Returns the tab's new position, which is also the new selection.
    pub fn move_tab_to_new_group(&mut self, group: usize, tab: usize) -> Option<(usize, usize)> {
        self.tab(group, tab)?;
        let moved = self.groups[group].tabs.remove(tab);

        // Colour and name count the groups left once the source is pruned
        let source_pruned = self.groups[group].is_empty() && self.groups.len() > 1;
        let remaining = self.groups.len() - usize::from(source_pruned);
        let mut new_group = TabGroup::new(group_name(remaining + 1), palette_color(remaining));
        new_group.tabs.push(moved);
        self.groups.insert(group + 1, new_group);
        self.active_group = group + 1;
        self.active_tab = 0;
        log::info!("Moved tab ({}, {}) to new group {}", group, tab, group + 1);

        self.prune_empty_groups();
        Some(self.active_indices())
    }

    pub fn set_group_color(&mut self, group: usize, color: GroupColor) -> bool {
        let Some(g) = self.groups.get_mut(group) else {
            return false;
        };
        g.color = color;
        log::info!("Group {} colour set to {:?}", group, color.to_array());
        true
    }

    /// Move the tab at `(src_group, src_tab)` so it lands before `dst_tab` in
    /// `dst_group` (indices as seen before the move).
    ///
    /// Returns the tab's final position, which becomes the selection.
    pub fn reorder_tab(
        &mut self,
        src_group: usize,
        src_tab: usize,
        dst_group: usize,
        dst_tab: usize,
    ) -> Option<(usize, usize)> {
        self.tab(src_group, src_tab)?;
        let moved = self.groups[src_group].tabs.remove(src_tab);

        let mut dst_group = dst_group;
        let mut dst_tab = dst_tab;
        if dst_group == src_group && dst_tab > src_tab {
            dst_tab -= 1;
        }

        if self.groups[src_group].is_empty() && self.groups.len() > 1 && dst_group != src_group {
            self.groups.remove(src_group);
            if dst_group > src_group {
                dst_group -= 1;
            }
        }

        dst_group = dst_group.min(self.groups.len() - 1);
        let target = &mut self.groups[dst_group];
        dst_tab = dst_tab.min(target.len());
        target.tabs.insert(dst_tab, moved);

        self.active_group = dst_group;
        self.active_tab = dst_tab;
        log::info!(
            "Moved tab ({}, {}) to ({}, {})",
            src_group,
            src_tab,
            dst_group,
            dst_tab
        );
        Some((dst_group, dst_tab))
    }

    /// Move group `src` so it lands before the group currently at `dst`.
    ///
    /// Returns the group's final index, which becomes the active group.
    pub fn reorder_group(&mut self, src: usize, dst: usize) -> Option<usize> {
        if src >= self.groups.len() {
            return None;
        }
        let moved = self.groups.remove(src);
        let mut dst = dst;
        if dst > src {
            dst -= 1;
        }
        dst = dst.min(self.groups.len());
        self.groups.insert(dst, moved);

        self.active_group = dst;
        self.clamp_active();
        log::info!("Moved group {} to {}", src, dst);
        Some(dst)
    }

    // ========================================================================
    // Invariant maintenance
    // ========================================================================

    /// Recreate the default group if every group is gone
    pub fn ensure_default_group(&mut self) {
        if self.groups.is_empty() {
            self.groups.push(TabGroup::default_group());
            self.active_group = 0;
            self.active_tab = 0;
        }
    }

    /// Drop empty groups, keeping at least one, then re-clamp the selection
    pub fn prune_empty_groups(&mut self) {
        if self.groups.len() > 1 {
            let removed_at_or_before = self
                .groups
                .iter()
                .take(self.active_group + 1)
                .filter(|g| g.is_empty())
                .count();

            let before = self.groups.len();
            let mut kept: Vec<TabGroup> = Vec::with_capacity(before);
            let mut first_empty = None;
            for group in self.groups.drain(..) {
                if group.is_empty() {
                    first_empty.get_or_insert(group);
                } else {
                    kept.push(group);
                }
            }
            if kept.is_empty()
                && let Some(group) = first_empty
            {
                kept.push(group);
            }
            self.groups = kept;

            if self.groups.len() < before {
                log::debug!(
                    "Pruned {} empty group(s), {} left",
                    before - self.groups.len(),
                    self.groups.len()
                );
                self.active_group = self.active_group.saturating_sub(removed_at_or_before);
            }
        }
        self.clamp_active();
    }

    fn clamp_active(&mut self) {
        self.ensure_default_group();
        self.active_group = self.active_group.min(self.groups.len() - 1);
        let tabs = self.groups[self.active_group].len();
        self.active_tab = self.active_tab.min(tabs.saturating_sub(1));
    }
}

impl Default for TabGroupManager {
    fn default() -> Self {
        Self::new()
    }
}
