//! Row-wrapped placement of groups and tabs.
//!
//! Groups are laid out left to right in collection order. Each group starts
//! with its handle and continues with its tabs, packed with `tab_spacing`.
//! A group that would cross the right margin wraps to a new row while rows
//! remain below `max_rows`; past that it overflows. Empty groups take no space
//! and get an empty rectangle.

use crate::geometry::Rect;
use crate::tab::TabGroup;
use crate::traits::TextMeasure;
use explorer_tabs_config::Config;

fn px(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

/// Sizing policy and style resolved to pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutParams {
    pub auto_size: bool,
    pub fixed_width: i32,
    /// Height of every tab and row
    pub row_height: i32,
    pub padding_x: i32,
    pub padding_y: i32,
    pub tab_spacing: i32,
    pub group_spacing: i32,
    pub handle_width: i32,
    pub margin: i32,
    pub row_spacing: i32,
    pub min_tab_width: i32,
    pub max_tab_width: i32,
    pub max_rows: i32,
}

impl LayoutParams {
    pub fn from_config(config: &Config) -> Self {
        let style = &config.style;
        Self {
            auto_size: config.tab_auto_size,
            fixed_width: px(config.tab_fixed_width),
            row_height: px(config.tab_fixed_height),
            padding_x: px(style.tab_padding_x),
            padding_y: px(style.tab_padding_y),
            tab_spacing: px(style.tab_spacing),
            group_spacing: px(style.group_spacing),
            handle_width: px(style.group_handle_width),
            margin: px(style.tab_margin),
            row_spacing: px(style.row_spacing),
            min_tab_width: px(style.min_tab_width),
            max_tab_width: px(style.max_tab_width),
            max_rows: px(style.max_rows).max(1),
        }
    }

    /// Width of a tab with the given title, clamped to the min/max range.
    pub fn tab_width(&self, title: &str, measure: &dyn TextMeasure) -> i32 {
        let width = if self.auto_size {
            measure
                .text_width(title)
                .saturating_add(self.padding_x.saturating_mul(2))
        } else {
            self.fixed_width
        };
        // min wins over max when the range is inverted
        width.min(self.max_tab_width).max(self.min_tab_width)
    }

    /// Bar height for `rows` rows of tabs.
    pub fn height_for_rows(&self, rows: i32) -> i32 {
        let rows = rows.max(1);
        rows * self.row_height + 2 * self.margin + (rows - 1) * self.row_spacing
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Outcome of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutMetrics {
    /// Rows in use, at least 1
    pub rows: i32,
    pub total_height: i32,
}

/// Assign `bounds` to every group and tab for a bar occupying `client`.
pub fn layout_groups(
    groups: &mut [TabGroup],
    client: Rect,
    params: &LayoutParams,
    measure: &dyn TextMeasure,
) -> LayoutMetrics {
    let row_start = client.left + params.margin;
    let right_limit = client.right - params.margin;
    let mut x = row_start;
    let mut y = client.top + params.margin;
    let mut row = 0;

    for group in groups.iter_mut() {
        if group.is_empty() {
            group.bounds = Rect::default();
            continue;
        }

        let widths: Vec<i32> = group
            .tabs
            .iter()
            .map(|tab| params.tab_width(&tab.title, measure))
            .collect();
        let gaps = i32::try_from(widths.len() - 1).unwrap_or(0) * params.tab_spacing;
        let group_width = params.handle_width + widths.iter().sum::<i32>() + gaps;

        // Wrapping a group that already starts a row would leave that row empty
        let first_on_row = x == row_start;
        if !first_on_row && x + group_width > right_limit && row < params.max_rows - 1 {
            row += 1;
            x = row_start;
            y += params.row_height + params.row_spacing;
        }

        group.bounds = Rect::from_origin_size(x, y, group_width, params.row_height);

        let mut tab_x = x + params.handle_width;
        for (tab, width) in group.tabs.iter_mut().zip(widths) {
            tab.bounds = Rect::from_origin_size(tab_x, y, width, params.row_height);
            tab_x += width + params.tab_spacing;
        }

        x = group.bounds.right + params.group_spacing;
    }

    LayoutMetrics {
        rows: row + 1,
        total_height: params.height_for_rows(row + 1),
    }
}
