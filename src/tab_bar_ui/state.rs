//! `TabBar` struct definition and constructor.

use super::drag_drop::DragSession;
use super::external_drop::DropHover;
use super::layout::LayoutParams;
use crate::geometry::{Point, Rect};
use crate::tab::TabGroupManager;
use crate::traits::{CharWidthMeasure, ShellHost, TextMeasure};
use explorer_tabs_config::{Config, DragConfig};

/// Tab bar engine state.
///
/// Owns the group model, the layout cache, the in-bar drag session, the
/// external drop hover state and the host for the lifetime of the bar. All
/// methods run on the thread that owns the bar's window.
pub struct TabBar<H: ShellHost> {
    /// Host collaborator (navigation, new windows, file operations, paths)
    pub(super) host: H,
    /// Groups, tabs and the active selection
    pub(super) model: TabGroupManager,
    /// Sizing policy and style in pixels
    pub(super) params: LayoutParams,
    /// Drag thresholds
    pub(super) drag_config: DragConfig,
    /// Title measurement for auto-sized tabs
    pub(super) measure: Box<dyn TextMeasure>,
    /// Client rectangle of the bar window
    pub(super) client: Rect,
    /// Screen position of the client origin
    pub(super) screen_origin: Point,
    /// Height required by the last layout pass
    pub(super) total_height: i32,
    /// Set by mutations, cleared by layout
    pub(super) layout_dirty: bool,
    /// In-progress pointer drag, if any
    pub(super) drag: Option<DragSession>,
    /// Whether the current external drag payload was accepted on enter
    pub(super) external_drag_accepted: bool,
    /// Group/tab highlighted during an external drag
    pub(super) drop_hover: Option<DropHover>,
}

impl<H: ShellHost> TabBar<H> {
    /// Create a tab bar holding the empty default group.
    ///
    /// Call [`TabBar::initialize`] once the host can report its location.
    pub fn new(host: H, config: &Config) -> Self {
        let params = LayoutParams::from_config(config);
        Self {
            host,
            model: TabGroupManager::new(),
            params,
            drag_config: config.drag,
            measure: Box::new(CharWidthMeasure::default()),
            client: Rect::default(),
            screen_origin: Point::default(),
            total_height: params.height_for_rows(1),
            layout_dirty: true,
            drag: None,
            external_drag_accepted: false,
            drop_hover: None,
        }
    }

    /// Replace the text measurer used for auto-sized tabs
    pub fn with_text_measure(mut self, measure: Box<dyn TextMeasure>) -> Self {
        self.measure = measure;
        self.layout_dirty = true;
        self
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn model(&self) -> &TabGroupManager {
        &self.model
    }

    pub fn client_rect(&self) -> Rect {
        self.client
    }

    pub fn layout_params(&self) -> &LayoutParams {
        &self.params
    }
}
