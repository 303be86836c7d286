//! Tab and group data model.
//!
//! - `Location`: opaque shell location owned by a tab
//! - `Tab`: one navigable location plus its cached layout rectangle
//! - `TabGroup`: an ordered, coloured run of tabs with a drag handle
//! - `TabGroupManager`: the group collection, active selection and mutators

mod location;
mod manager;

pub use location::Location;
pub use manager::TabGroupManager;

use crate::geometry::Rect;
use explorer_tabs_config::{GroupColor, palette_color};

/// A single tab in the bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab {
    /// Location the tab browses to
    pub location: Location,
    /// Display title, fixed when the tab is created
    pub title: String,
    /// Rectangle from the last layout pass
    pub bounds: Rect,
    /// Whether this is the active tab, refreshed by layout
    pub is_active: bool,
}

impl Tab {
    pub fn new(location: Location, title: impl Into<String>) -> Self {
        Self {
            location,
            title: title.into(),
            bounds: Rect::default(),
            is_active: false,
        }
    }
}

/// An ordered run of tabs sharing a colour and a drag handle.
#[derive(Debug, Clone, PartialEq)]
pub struct TabGroup {
    /// Label shown in menus
    pub name: String,
    pub color: GroupColor,
    /// Tabs in display order
    pub tabs: Vec<Tab>,
    /// Rectangle covering the handle and every tab, from the last layout pass
    pub bounds: Rect,
}

impl TabGroup {
    pub fn new(name: impl Into<String>, color: GroupColor) -> Self {
        Self {
            name: name.into(),
            color,
            tabs: Vec::new(),
            bounds: Rect::default(),
        }
    }

    /// The group every bar starts with.
    pub fn default_group() -> Self {
        Self::new(group_name(1), palette_color(0))
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }
}

/// Menu label for the `number`-th group.
pub fn group_name(number: usize) -> String {
    format!("Group {}", number)
}
