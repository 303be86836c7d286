//! In-bar pointer drags: click vs. drag, tab/group reorder and tab detach.
//!
//! A press over a tab or group handle opens a [`DragSession`] as a click
//! candidate. Moving past half the platform drag distance on either axis turns
//! it into an active drag, which tracks a provisional drop target and, for
//! tabs, whether the pointer has left the bar far enough to detach. Release
//! commits; losing pointer capture cancels. The session is cleared either way.

use std::path::PathBuf;

use super::TabBar;
use super::hit_test::{HitTarget, group_at};
use crate::geometry::{Point, Rect};
use crate::tab::TabGroup;
use crate::traits::{Modifiers, ShellHost};
use explorer_tabs_config::DragConfig;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragKind {
    Tab { group: usize, tab: usize },
    Group { group: usize },
}

/// Where a drag would land if released now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropTarget {
    /// Insert the dragged group before the group at `index`
    Group { index: usize },
    /// Insert the dragged tab before tab `index` of `group`
    Tab { group: usize, index: usize },
}

/// A pointer drag in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub kind: DragKind,
    /// Pointer position at button-down
    pub start: Point,
    /// Latest pointer position
    pub current: Point,
    /// Still within the drag threshold; releasing is a click
    pub click_candidate: bool,
    /// Pointer is outside the detach margin
    pub detach_pending: bool,
    pub target: Option<DropTarget>,
    /// Rectangle of the dragged tab or group at button-down
    pub origin: Rect,
}

impl DragSession {
    pub fn begin(kind: DragKind, origin: Rect, pt: Point) -> Self {
        Self {
            kind,
            start: pt,
            current: pt,
            click_candidate: true,
            detach_pending: false,
            target: None,
            origin,
        }
    }

    /// True once `pt` is more than half the drag distance away on either axis.
    pub fn exceeds_threshold(&self, pt: Point, config: &DragConfig) -> bool {
        let (dx, dy) = pt.offset_from(self.start);
        let half_x = px(config.drag_threshold_x) / 2;
        let half_y = px(config.drag_threshold_y) / 2;
        dx.abs() > half_x || dy.abs() > half_y
    }

    /// Floating rectangle that follows the pointer during an active drag.
    pub fn ghost(&self) -> Option<Rect> {
        if self.click_candidate {
            return None;
        }
        let (dx, dy) = self.current.offset_from(self.start);
        Some(self.origin.translate(dx, dy))
    }
}

/// How a release was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// No drag was in progress
    None,
    /// Click on a tab: activated and navigated
    Activated { group: usize, tab: usize },
    /// Click on a group handle: group activated
    GroupActivated { group: usize },
    /// Tab reordered; its final position
    TabMoved { group: usize, tab: usize },
    /// Group reordered; its final index
    GroupMoved { group: usize },
    /// Tab removed and opened in a new window at `path`
    Detached { path: PathBuf },
    /// Drag ended without changing anything
    Cancelled,
}

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Provisional drop target for a drag of `kind` with the pointer at `pt`.
pub fn provisional_target(kind: DragKind, groups: &[TabGroup], pt: Point) -> Option<DropTarget> {
    let index = group_at(groups, pt)?;
    let group = &groups[index];
    match kind {
        DragKind::Group { .. } => {
            let index = if pt.x < group.bounds.center_x() {
                index
            } else {
                index + 1
            };
            Some(DropTarget::Group { index })
        }
        DragKind::Tab { .. } => {
            let tab_index = group
                .tabs
                .iter()
                .position(|tab| pt.x <= tab.bounds.center_x())
                .unwrap_or(group.tabs.len());
            Some(DropTarget::Tab {
                group: index,
                index: tab_index,
            })
        }
    }
}

impl<H: ShellHost> TabBar<H> {
    /// Button-down. Returns `true` when a drag session opened and the host
    /// should capture the pointer.
    pub fn on_pointer_down(&mut self, pt: Point, _modifiers: Modifiers) -> bool {
        self.layout_if_needed();
        self.drag = None;

        let started = match self.hit_test(pt) {
            HitTarget::GroupHandle { group } => self
                .model
                .group(group)
                .map(|g| (DragKind::Group { group }, g.bounds)),
            HitTarget::Tab { group, tab } => self
                .model
                .tab(group, tab)
                .map(|t| (DragKind::Tab { group, tab }, t.bounds)),
            HitTarget::None => None,
        };
        let Some((kind, origin)) = started else {
            return false;
        };

        crate::debug_log!("DRAG", "Pointer down on {:?} at ({}, {})", kind, pt.x, pt.y);
        self.drag = Some(DragSession::begin(kind, origin, pt));
        true
    }

    /// Pointer move while a session is open.
    pub fn on_pointer_move(&mut self, pt: Point) {
        let config = self.drag_config;
        let client = self.client;
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        session.current = pt;

        if session.click_candidate {
            if !session.exceeds_threshold(pt, &config) {
                return;
            }
            session.click_candidate = false;
            crate::debug_log!("DRAG", "Drag of {:?} started", session.kind);
        }

        // Only tabs detach; group drags never arm it
        if matches!(session.kind, DragKind::Tab { .. }) {
            let margin = px(config.detach_threshold);
            let outside = pt.y < client.top - margin || pt.y > client.bottom + margin;
            if outside != session.detach_pending {
                crate::debug_log!("DRAG", "Detach pending: {}", outside);
            }
            session.detach_pending = outside;
        }

        if !session.detach_pending {
            session.target = provisional_target(session.kind, self.model.groups(), pt);
        }
        crate::debug_trace!(
            "DRAG",
            "Move to ({}, {}) target={:?}",
            pt.x,
            pt.y,
            session.target
        );
    }

    /// Button-up: commit the session and clear it.
    pub fn on_pointer_up(&mut self, pt: Point) -> DragOutcome {
        let Some(mut session) = self.drag.take() else {
            return DragOutcome::None;
        };
        session.current = pt;

        let outcome = self.commit_drag(&session);
        self.relayout();
        crate::debug_info!("DRAG", "Drag finished: {:?}", outcome);
        outcome
    }

    /// Pointer capture was taken away; drop the session without changes.
    pub fn on_capture_lost(&mut self) {
        self.cancel_drag();
    }

    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            crate::debug_log!("DRAG", "Drag of {:?} cancelled", session.kind);
        }
    }

    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Ghost rectangle of the active drag, if any.
    pub fn ghost_rect(&self) -> Option<Rect> {
        self.drag.as_ref().and_then(DragSession::ghost)
    }

    fn commit_drag(&mut self, session: &DragSession) -> DragOutcome {
        if session.click_candidate {
            let activated = match session.kind {
                DragKind::Tab { group, tab } => self
                    .activate_tab(group, tab, true)
                    .then_some(DragOutcome::Activated { group, tab }),
                DragKind::Group { group } => self
                    .activate_group(group, true)
                    .then_some(DragOutcome::GroupActivated { group }),
            };
            return activated.unwrap_or(DragOutcome::Cancelled);
        }

        match (session.kind, session.target) {
            (DragKind::Tab { group, tab }, _) if session.detach_pending => {
                self.detach_tab(group, tab)
            }
            (DragKind::Tab { group, tab }, Some(DropTarget::Tab { group: dst, index })) => self
                .model
                .reorder_tab(group, tab, dst, index)
                .map_or(DragOutcome::Cancelled, |(group, tab)| {
                    DragOutcome::TabMoved { group, tab }
                }),
            (DragKind::Group { group }, Some(DropTarget::Group { index })) => self
                .model
                .reorder_group(group, index)
                .map_or(DragOutcome::Cancelled, |group| DragOutcome::GroupMoved {
                    group,
                }),
            _ => DragOutcome::Cancelled,
        }
    }

    /// Remove a tab and open its location in a new window.
    ///
    /// A tab whose location has no filesystem path stays in the bar.
    fn detach_tab(&mut self, group: usize, tab: usize) -> DragOutcome {
        let Some(location) = self.model.tab(group, tab).map(|t| t.location.clone()) else {
            return DragOutcome::Cancelled;
        };
        let Some(path) = self.host.resolve_path(&location) else {
            log::warn!("Not detaching tab for {}: no filesystem path", location);
            return DragOutcome::Cancelled;
        };

        self.model.remove_tab(group, tab);
        log::info!("Detached tab ({}, {}) to {}", group, tab, path.display());
        if let Err(e) = self.host.open_new_window(&path) {
            log::error!("Failed to open new window at {}: {:#}", path.display(), e);
        }
        DragOutcome::Detached { path }
    }
}
