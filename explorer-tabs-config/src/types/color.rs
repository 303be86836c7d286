//! Group colours and the default group palette.

use serde::{Deserialize, Serialize};

// ============================================================================
// Group Colour
// ============================================================================

/// An opaque RGB colour assigned to a tab group.
///
/// Serialised as a plain `[r, g, b]` array so YAML stays readable:
///
/// ```yaml
/// [180, 200, 235]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct GroupColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl GroupColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, clamping into `0..=255`.
    ///
    /// Factors above 1.0 brighten (active tabs), below 1.0 darken (group handles).
    pub fn adjust(self, factor: f64) -> Self {
        let scale = |channel: u8| -> u8 { (f64::from(channel) * factor).clamp(0.0, 255.0) as u8 };
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for GroupColor {
    fn from(rgb: [u8; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }
}

impl From<GroupColor> for [u8; 3] {
    fn from(color: GroupColor) -> Self {
        color.to_array()
    }
}

impl Default for GroupColor {
    fn default() -> Self {
        DEFAULT_GROUP_PALETTE[0]
    }
}

// ============================================================================
// Palette
// ============================================================================

/// Colours offered by the group colour menu and used, in rotation, for
/// groups created by "move to new group". Entry 0 is the default group colour.
pub const DEFAULT_GROUP_PALETTE: [GroupColor; 8] = [
    GroupColor::rgb(180, 200, 235),
    GroupColor::rgb(190, 220, 180),
    GroupColor::rgb(230, 205, 175),
    GroupColor::rgb(210, 185, 230),
    GroupColor::rgb(200, 200, 200),
    GroupColor::rgb(180, 215, 215),
    GroupColor::rgb(235, 190, 190),
    GroupColor::rgb(200, 210, 165),
];

/// Palette colour for a rotating index (wraps around the palette length).
pub fn palette_color(index: usize) -> GroupColor {
    DEFAULT_GROUP_PALETTE[index % DEFAULT_GROUP_PALETTE.len()]
}
