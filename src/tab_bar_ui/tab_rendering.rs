//! Paint list for the external renderer.
//!
//! The bar never touches pixels. [`TabBar::render_frame`] turns the laid-out
//! model into an ordered list of primitives; the host paints them front to
//! back with its own drawing backend.

use super::TabBar;
use super::external_drop::DropHover;
use super::hit_test::handle_rect;
use super::layout::LayoutParams;
use crate::geometry::Rect;
use crate::tab::TabGroup;
use crate::traits::ShellHost;
use crate::ui_constants::{
    ACTIVE_TAB_BRIGHTEN, BAR_BACKGROUND, DROP_HOVER_OUTLINE, GHOST_ALPHA, GHOST_FILL,
    HANDLE_DARKEN, TAB_BORDER, TAB_TEXT,
};
use explorer_tabs_config::GroupColor;

/// Everything needed to paint one tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabVisual {
    pub bounds: Rect,
    pub fill: GroupColor,
    pub border: GroupColor,
    pub title: String,
    pub text_color: GroupColor,
    /// Title area: the tab inset by its padding
    pub text_rect: Rect,
    pub active: bool,
}

/// One paint primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    FillRect { rect: Rect, color: GroupColor },
    Tab(TabVisual),
    /// Unfilled rectangle
    Outline { rect: Rect, color: GroupColor },
    /// Translucent fill
    BlendRect { rect: Rect, color: GroupColor, alpha: u8 },
}

/// Ordered paint list for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderFrame {
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    /// Tabs in paint order
    pub fn tabs(&self) -> impl Iterator<Item = &TabVisual> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Tab(tab) => Some(tab),
            _ => None,
        })
    }
}

/// Build the paint list from already laid-out groups.
pub fn build_frame(
    groups: &[TabGroup],
    client: Rect,
    params: &LayoutParams,
    hover: Option<DropHover>,
    ghost: Option<Rect>,
) -> RenderFrame {
    let mut commands = vec![DrawCommand::FillRect {
        rect: client,
        color: BAR_BACKGROUND,
    }];

    for group in groups.iter().filter(|g| !g.is_empty()) {
        commands.push(DrawCommand::FillRect {
            rect: handle_rect(group, params.handle_width),
            color: group.color.adjust(HANDLE_DARKEN),
        });
        commands.extend(group.tabs.iter().map(|tab| {
            let fill = if tab.is_active {
                group.color.adjust(ACTIVE_TAB_BRIGHTEN)
            } else {
                group.color
            };
            DrawCommand::Tab(TabVisual {
                bounds: tab.bounds,
                fill,
                border: TAB_BORDER,
                title: tab.title.clone(),
                text_color: TAB_TEXT,
                text_rect: tab.bounds.inset(params.padding_x, params.padding_y),
                active: tab.is_active,
            })
        }));
    }

    if let Some(hover) = hover
        && let Some(group) = groups.get(hover.group)
    {
        let rect = hover
            .tab
            .and_then(|t| group.tabs.get(t))
            .map_or(group.bounds, |tab| tab.bounds);
        commands.push(DrawCommand::Outline {
            rect,
            color: DROP_HOVER_OUTLINE,
        });
    }

    if let Some(rect) = ghost.filter(|r| !r.is_empty()) {
        commands.push(DrawCommand::BlendRect {
            rect,
            color: GHOST_FILL,
            alpha: GHOST_ALPHA,
        });
    }

    RenderFrame { commands }
}

impl<H: ShellHost> TabBar<H> {
    /// Lay out if needed and describe the frame to paint.
    pub fn render_frame(&mut self) -> RenderFrame {
        self.layout_if_needed();
        build_frame(
            self.model.groups(),
            self.client,
            &self.params,
            self.drop_hover,
            self.ghost_rect(),
        )
    }
}
