//! Files and shell items dragged onto the bar from outside.
//!
//! Payloads are accepted when they carry a file list or a shell item list.
//! While the drag hovers, the group and tab under the pointer are tracked for
//! highlighting. A drop copies (or, with Shift, moves) the dragged paths into
//! the folder of the tab under the pointer via [`FileOperations`].
//!
//! [`FileOperations`]: crate::traits::FileOperations

use std::path::PathBuf;

use super::TabBar;
use super::hit_test::{group_at, hit_test_tab};
use crate::geometry::Point;
use crate::tab::Location;
use crate::traits::{LocationResolver, Modifiers, ShellHost, TransferMode};

/// Items in a shell folder, identified relative to that folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellItemList {
    pub folder: Location,
    pub items: Vec<String>,
}

/// Decoded view of an external drag payload.
pub trait DropPayload {
    fn has_file_list(&self) -> bool;
    fn has_shell_item_list(&self) -> bool;
    /// Absolute paths from the file-list representation
    fn file_list(&self) -> Option<Vec<PathBuf>>;
    fn shell_item_list(&self) -> Option<ShellItemList>;

    fn is_acceptable(&self) -> bool {
        self.has_file_list() || self.has_shell_item_list()
    }
}

/// A payload built from already decoded data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataPayload {
    pub files: Option<Vec<PathBuf>>,
    pub shell_items: Option<ShellItemList>,
}

impl DataPayload {
    pub fn from_files<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: Some(paths.into_iter().map(Into::into).collect()),
            shell_items: None,
        }
    }

    pub fn from_shell_items<I, S>(folder: Location, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: None,
            shell_items: Some(ShellItemList {
                folder,
                items: items.into_iter().map(Into::into).collect(),
            }),
        }
    }
}

impl DropPayload for DataPayload {
    fn has_file_list(&self) -> bool {
        self.files.is_some()
    }

    fn has_shell_item_list(&self) -> bool {
        self.shell_items.is_some()
    }

    fn file_list(&self) -> Option<Vec<PathBuf>> {
        self.files.clone()
    }

    fn shell_item_list(&self) -> Option<ShellItemList> {
        self.shell_items.clone()
    }
}

/// Effect reported back to the drag source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DropEffect {
    #[default]
    None,
    Copy,
    Move,
}

impl DropEffect {
    /// Move with Shift held, copy otherwise.
    pub fn for_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.contains(Modifiers::SHIFT) {
            DropEffect::Move
        } else {
            DropEffect::Copy
        }
    }
}

impl From<TransferMode> for DropEffect {
    fn from(mode: TransferMode) -> Self {
        match mode {
            TransferMode::Copy => DropEffect::Copy,
            TransferMode::Move => DropEffect::Move,
        }
    }
}

/// Group (and tab, when over one) under an external drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropHover {
    pub group: usize,
    pub tab: Option<usize>,
}

/// Absolute filesystem paths carried by `payload`.
///
/// The file list wins when present and non-empty. Otherwise shell items are
/// resolved against their folder; items without a filesystem path are skipped.
pub fn extract_paths(payload: &dyn DropPayload, resolver: &impl LocationResolver) -> Vec<PathBuf> {
    if let Some(files) = payload.file_list()
        && !files.is_empty()
    {
        return files;
    }
    let Some(list) = payload.shell_item_list() else {
        return Vec::new();
    };
    list.items
        .iter()
        .filter_map(|item| resolver.child_filesystem_path(&list.folder, item))
        .filter(|path| !path.as_os_str().is_empty())
        .collect()
}

impl<H: ShellHost> TabBar<H> {
    /// Client coordinates of a screen point.
    pub fn screen_to_client(&self, screen: Point) -> Point {
        Point::new(screen.x - self.screen_origin.x, screen.y - self.screen_origin.y)
    }

    /// External drag entered the bar.
    pub fn drag_enter(
        &mut self,
        payload: &dyn DropPayload,
        screen: Point,
        modifiers: Modifiers,
    ) -> DropEffect {
        self.external_drag_accepted = payload.is_acceptable();
        if !self.external_drag_accepted {
            crate::debug_log!("DROP", "Rejected external drag payload");
            self.drop_hover = None;
            return DropEffect::None;
        }
        self.update_drop_hover(screen);
        DropEffect::for_modifiers(modifiers)
    }

    /// External drag moved over the bar.
    pub fn drag_over(&mut self, screen: Point, modifiers: Modifiers) -> DropEffect {
        if !self.external_drag_accepted {
            return DropEffect::None;
        }
        self.update_drop_hover(screen);
        DropEffect::for_modifiers(modifiers)
    }

    /// External drag left the bar.
    pub fn drag_leave(&mut self) {
        self.external_drag_accepted = false;
        self.drop_hover = None;
    }

    /// External drop. Returns the effect performed, `DropEffect::None` when
    /// nothing was transferred.
    pub fn drop(
        &mut self,
        payload: &dyn DropPayload,
        screen: Point,
        modifiers: Modifiers,
    ) -> DropEffect {
        let effect = self.perform_drop(payload, screen, modifiers);
        self.drag_leave();
        effect
    }

    pub fn drop_hover(&self) -> Option<DropHover> {
        self.drop_hover
    }

    fn update_drop_hover(&mut self, screen: Point) {
        self.layout_if_needed();
        let pt = self.screen_to_client(screen);
        let groups = self.model.groups();
        let hover = group_at(groups, pt).map(|group| DropHover {
            group,
            tab: groups[group]
                .tabs
                .iter()
                .position(|tab| tab.bounds.contains(pt)),
        });
        if hover != self.drop_hover {
            crate::debug_trace!("DROP", "Hover {:?} at ({}, {})", hover, pt.x, pt.y);
        }
        self.drop_hover = hover;
    }

    fn perform_drop(
        &mut self,
        payload: &dyn DropPayload,
        screen: Point,
        modifiers: Modifiers,
    ) -> DropEffect {
        if !payload.is_acceptable() {
            return DropEffect::None;
        }
        let paths = extract_paths(payload, &self.host);
        if paths.is_empty() {
            crate::debug_log!("DROP", "Drop carried no filesystem paths");
            return DropEffect::None;
        }

        self.layout_if_needed();
        let pt = self.screen_to_client(screen);
        let Some((group, tab)) = self.drop_destination(pt) else {
            return DropEffect::None;
        };
        let Some(location) = self.model.tab(group, tab).map(|t| t.location.clone()) else {
            return DropEffect::None;
        };
        let Some(destination) = self.host.resolve_path(&location) else {
            log::warn!("Drop target {} has no filesystem path", location);
            return DropEffect::None;
        };

        let shift = modifiers.contains(Modifiers::SHIFT)
            || self.host.modifiers_now().contains(Modifiers::SHIFT);
        let mode = if shift {
            TransferMode::Move
        } else {
            TransferMode::Copy
        };

        log::info!(
            "Dropping {} item(s) onto tab ({}, {}) -> {} ({:?})",
            paths.len(),
            group,
            tab,
            destination.display(),
            mode
        );
        if let Err(e) = self.host.transfer(&paths, &destination, mode) {
            log::error!("File operation into {} failed: {:#}", destination.display(), e);
        }
        mode.into()
    }

    /// Tab under `pt`, else the group under `pt` at the active tab index,
    /// else the active tab.
    fn drop_destination(&self, pt: Point) -> Option<(usize, usize)> {
        let groups = self.model.groups();
        if let Some(hit) = hit_test_tab(groups, pt) {
            return Some(hit);
        }
        let (active_group, active_tab) = self.model.active_indices();
        if let Some(group) = group_at(groups, pt) {
            let last = groups[group].len().saturating_sub(1);
            return Some((group, active_tab.min(last)));
        }
        self.model
            .active_tab()
            .map(|_| (active_group, active_tab))
    }
}
