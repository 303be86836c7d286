//! Contracts between the tab bar engine and its host.
//!
//! The engine never talks to the shell, the filesystem or the window system
//! directly. Everything it needs from the outside world goes through the traits
//! below, which the host implements (and tests mock, see `tests/common`).
//!
//! Requests that act on the world (`navigate_to`, `open_new_window`,
//! `transfer`) return `anyhow::Result<()>`. The engine logs a failure and moves
//! on: a failed navigation or copy never changes the tab model.

use crate::tab::Location;
use anyhow::Result;
use bitflags::bitflags;
use std::path::{Path, PathBuf};
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Modifier keys held during a pointer or drag event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
    }
}

/// Move or copy for an external drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferMode {
    Copy,
    Move,
}

// ── Navigation ──────────────────────────────────────────────────────────────

/// The browser view the bar is attached to.
pub trait Navigator {
    /// Browse the attached view to `location` in place.
    fn navigate_to(&mut self, location: &Location) -> Result<()>;

    /// The location the view currently shows, if it can be determined.
    fn current_location(&self) -> Option<Location>;
}

/// Launches a new top-level browser window.
pub trait WindowLauncher {
    fn open_new_window(&mut self, path: &Path) -> Result<()>;
}

/// Performs file transfers for external drops.
///
/// The call may block for the duration of the copy.
pub trait FileOperations {
    fn transfer(&mut self, sources: &[PathBuf], destination: &Path, mode: TransferMode)
    -> Result<()>;
}

// ── Location resolution ─────────────────────────────────────────────────────

/// Converts opaque locations into names and paths.
///
/// Every method returns `None` when the location cannot be resolved; callers
/// treat that as "abort quietly".
pub trait LocationResolver {
    /// Human readable name used as the tab title.
    fn display_name(&self, location: &Location) -> Option<String>;

    /// Direct filesystem path form of the location.
    fn filesystem_path(&self, location: &Location) -> Option<PathBuf>;

    /// Desktop-absolute parsing form, tried when there is no direct path.
    fn parsing_path(&self, location: &Location) -> Option<PathBuf>;

    /// Filesystem path of `item`, a relative item identifier inside `folder`.
    fn child_filesystem_path(&self, folder: &Location, item: &str) -> Option<PathBuf>;

    /// Filesystem path of a tab's location: direct form first, then the
    /// parsing form. Empty paths count as unresolved.
    fn resolve_path(&self, location: &Location) -> Option<PathBuf> {
        self.filesystem_path(location)
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| self.parsing_path(location))
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Live keyboard state, queried at drop time.
pub trait ModifierSource {
    fn modifiers_now(&self) -> Modifiers {
        Modifiers::empty()
    }
}

/// Everything the tab bar needs from its host.
pub trait ShellHost:
    Navigator + WindowLauncher + FileOperations + LocationResolver + ModifierSource
{
}

impl<T> ShellHost for T where
    T: Navigator + WindowLauncher + FileOperations + LocationResolver + ModifierSource
{
}

// ── Text measurement ────────────────────────────────────────────────────────

/// Measures tab titles for auto-sized tabs.
pub trait TextMeasure {
    /// Width of `text` in pixels.
    fn text_width(&self, text: &str) -> i32;
}

/// Estimates text width from terminal column counts and a fixed glyph width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharWidthMeasure {
    pub glyph_width: i32,
}

impl Default for CharWidthMeasure {
    fn default() -> Self {
        Self {
            glyph_width: crate::ui_constants::AVERAGE_GLYPH_WIDTH,
        }
    }
}

impl TextMeasure for CharWidthMeasure {
    fn text_width(&self, text: &str) -> i32 {
        let columns = i32::try_from(text.width()).unwrap_or(i32::MAX);
        columns.saturating_mul(self.glyph_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_width_counts_wide_glyphs_twice() {
        let measure = CharWidthMeasure::default();
        assert_eq!(measure.text_width("Docs"), 28);
        assert_eq!(measure.text_width("文書"), 28);
        assert_eq!(measure.text_width(""), 0);
    }

    struct PathsOnly;

    impl LocationResolver for PathsOnly {
        fn display_name(&self, _: &Location) -> Option<String> {
            None
        }
        fn filesystem_path(&self, location: &Location) -> Option<PathBuf> {
            location.as_str().starts_with('/').then(|| PathBuf::from(location.as_str()))
        }
        fn parsing_path(&self, location: &Location) -> Option<PathBuf> {
            (location.as_str() == "::desktop").then(|| PathBuf::from("/home/user/Desktop"))
        }
        fn child_filesystem_path(&self, _: &Location, _: &str) -> Option<PathBuf> {
            None
        }
    }

    #[test]
    fn resolve_path_prefers_filesystem_form() {
        let resolver = PathsOnly;
        assert_eq!(
            resolver.resolve_path(&Location::new("/srv")),
            Some(PathBuf::from("/srv"))
        );
        assert_eq!(
            resolver.resolve_path(&Location::new("::desktop")),
            Some(PathBuf::from("/home/user/Desktop"))
        );
        assert_eq!(resolver.resolve_path(&Location::new("::network")), None);
    }
}
