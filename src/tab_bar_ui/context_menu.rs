//! Right-click menus for group handles and tabs.
//!
//! The bar only describes the menu. The host shows it with whatever widget
//! toolkit it has and feeds the picked command back through
//! [`TabBar::apply_group_command`] or [`TabBar::apply_tab_command`].

use super::TabBar;
use super::hit_test::HitTarget;
use crate::geometry::Point;
use crate::traits::ShellHost;
use explorer_tabs_config::{DEFAULT_GROUP_PALETTE, GroupColor};

/// Commands offered on a group handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupCommand {
    SetColor(GroupColor),
    /// Back to the first palette colour
    ResetColor,
}

/// Commands offered on a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    Close,
    MoveToNewGroup,
    OpenInNewWindow,
}

/// One menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<C> {
    pub label: String,
    pub command: C,
    pub checked: bool,
}

impl<C> MenuItem<C> {
    fn new(label: impl Into<String>, command: C) -> Self {
        Self {
            label: label.into(),
            command,
            checked: false,
        }
    }
}

/// Menu for whatever was right-clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextMenu {
    Group {
        group: usize,
        items: Vec<MenuItem<GroupCommand>>,
    },
    Tab {
        group: usize,
        tab: usize,
        items: Vec<MenuItem<TabCommand>>,
    },
}

/// Colour menu for a group whose colour is `current`.
pub fn group_color_menu(current: GroupColor) -> Vec<MenuItem<GroupCommand>> {
    let mut items: Vec<_> = DEFAULT_GROUP_PALETTE
        .iter()
        .enumerate()
        .map(|(idx, color)| MenuItem {
            label: format!("Color {}", idx + 1),
            command: GroupCommand::SetColor(*color),
            checked: *color == current,
        })
        .collect();
    items.push(MenuItem::new("Reset color", GroupCommand::ResetColor));
    items
}

pub fn tab_menu() -> Vec<MenuItem<TabCommand>> {
    vec![
        MenuItem::new("Close tab", TabCommand::Close),
        MenuItem::new("Move to new group", TabCommand::MoveToNewGroup),
        MenuItem::new("Open in new window", TabCommand::OpenInNewWindow),
    ]
}

impl<H: ShellHost> TabBar<H> {
    /// Menu for a right-click at `pt` (client coordinates); `None` over empty space.
    pub fn context_menu_at(&mut self, pt: Point) -> Option<ContextMenu> {
        self.layout_if_needed();
        match self.hit_test(pt) {
            HitTarget::GroupHandle { group } => {
                let color = self.model.group(group)?.color;
                Some(ContextMenu::Group {
                    group,
                    items: group_color_menu(color),
                })
            }
            HitTarget::Tab { group, tab } => Some(ContextMenu::Tab {
                group,
                tab,
                items: tab_menu(),
            }),
            HitTarget::None => None,
        }
    }

    pub fn apply_group_command(&mut self, group: usize, command: GroupCommand) -> bool {
        match command {
            GroupCommand::SetColor(color) => self.set_group_color(group, color),
            GroupCommand::ResetColor => self.reset_group_color(group),
        }
    }

    pub fn apply_tab_command(&mut self, group: usize, tab: usize, command: TabCommand) -> bool {
        match command {
            TabCommand::Close => self.close_tab(group, tab),
            TabCommand::MoveToNewGroup => self.move_tab_to_new_group(group, tab).is_some(),
            TabCommand::OpenInNewWindow => self.open_in_new_window(group, tab),
        }
    }
}
