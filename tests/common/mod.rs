//! Shared integration test helpers.
//!
//! Include with `mod common;` at the top of a test file. `#[allow(dead_code)]`
//! covers helpers a given test binary doesn't use.

#![allow(dead_code)]

use anyhow::{Result, bail};
use explorer_tabs::config::Config;
use explorer_tabs::tab::{Location, TabGroupManager};
use explorer_tabs::traits::{
    FileOperations, LocationResolver, ModifierSource, Modifiers, Navigator, TransferMode,
    WindowLauncher,
};
use explorer_tabs::{Point, TabBar};
use std::path::{Path, PathBuf};

/// Width used by `bar_with_tabs`; wide enough for five fixed-size tabs per row.
pub const BAR_WIDTH: i32 = 1000;

/// One file operation the bar asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    pub sources: Vec<PathBuf>,
    pub destination: PathBuf,
    pub mode: TransferMode,
}

/// Host double that records every outbound request.
///
/// Locations are plain strings. Ones starting with `/` are their own
/// filesystem path; `::`-prefixed ones are virtual and have none, unless
/// listed in `parsing_paths`.
#[derive(Debug, Default)]
pub struct MockHost {
    pub current: Option<Location>,
    pub navigations: Vec<Location>,
    pub new_windows: Vec<PathBuf>,
    pub transfers: Vec<Transfer>,
    pub parsing_paths: Vec<(Location, PathBuf)>,
    pub live_modifiers: Modifiers,
    pub fail_requests: bool,
}

impl MockHost {
    pub fn at(location: &str) -> Self {
        Self {
            current: Some(Location::new(location)),
            ..Self::default()
        }
    }
}

impl Navigator for MockHost {
    fn navigate_to(&mut self, location: &Location) -> Result<()> {
        self.navigations.push(location.clone());
        if self.fail_requests {
            bail!("navigation refused");
        }
        self.current = Some(location.clone());
        Ok(())
    }

    fn current_location(&self) -> Option<Location> {
        self.current.clone()
    }
}

impl WindowLauncher for MockHost {
    fn open_new_window(&mut self, path: &Path) -> Result<()> {
        self.new_windows.push(path.to_path_buf());
        if self.fail_requests {
            bail!("launch failed");
        }
        Ok(())
    }
}

impl FileOperations for MockHost {
    fn transfer(
        &mut self,
        sources: &[PathBuf],
        destination: &Path,
        mode: TransferMode,
    ) -> Result<()> {
        self.transfers.push(Transfer {
            sources: sources.to_vec(),
            destination: destination.to_path_buf(),
            mode,
        });
        if self.fail_requests {
            bail!("access denied");
        }
        Ok(())
    }
}

impl LocationResolver for MockHost {
    fn display_name(&self, location: &Location) -> Option<String> {
        let name = location.as_str().trim_end_matches('/').rsplit('/').next()?;
        (!name.is_empty() && !name.starts_with("::")).then(|| name.to_string())
    }

    fn filesystem_path(&self, location: &Location) -> Option<PathBuf> {
        location
            .as_str()
            .starts_with('/')
            .then(|| PathBuf::from(location.as_str()))
    }

    fn parsing_path(&self, location: &Location) -> Option<PathBuf> {
        self.parsing_paths
            .iter()
            .find(|(loc, _)| loc == location)
            .map(|(_, path)| path.clone())
    }

    fn child_filesystem_path(&self, folder: &Location, item: &str) -> Option<PathBuf> {
        let base = self.filesystem_path(folder)?;
        (!item.starts_with("::")).then(|| base.join(item))
    }
}

impl ModifierSource for MockHost {
    fn modifiers_now(&self) -> Modifiers {
        self.live_modifiers
    }
}

/// Config with fixed 180x32 tabs so rectangles are predictable.
pub fn fixed_config() -> Config {
    Config {
        tab_auto_size: false,
        ..Config::default()
    }
}

/// A bar laid out at `BAR_WIDTH` with one group per entry of `groups`.
///
/// Each name `n` becomes location `/n`. Selection ends on the first tab.
/// With fixed sizing the first group's tabs start at x = 14, each 180 wide
/// with 6 px gaps; every row spans y = 6..38.
pub fn bar_with_tabs(groups: &[&[&str]]) -> TabBar<MockHost> {
    let mut bar = TabBar::new(MockHost::default(), &fixed_config());
    bar.resize(BAR_WIDTH, 44);
    for (g, names) in groups.iter().enumerate() {
        for (t, name) in names.iter().enumerate() {
            let location = Location::new(format!("/{}", name));
            if t == 0 && g > 0 {
                // Start a new group holding this tab
                let (group, tab) = bar.add_tab_for_location(location, true, false, None);
                bar.move_tab_to_new_group(group, tab);
            } else {
                bar.add_tab_for_location(location, true, false, None);
            }
        }
    }
    if !bar.model().is_empty() {
        bar.activate_tab(0, 0, false);
    }
    bar.host_mut().navigations.clear();
    bar
}

/// Titles per group.
pub fn titles(bar: &TabBar<MockHost>) -> Vec<Vec<String>> {
    titles_of(bar.model())
}

pub fn titles_of(model: &TabGroupManager) -> Vec<Vec<String>> {
    model
        .groups()
        .iter()
        .map(|g| g.tabs.iter().map(|t| t.title.clone()).collect())
        .collect()
}

/// Centre of tab `(group, tab)` from the last layout.
pub fn tab_center(bar: &TabBar<MockHost>, group: usize, tab: usize) -> Point {
    let rect = bar.model().groups()[group].tabs[tab].bounds;
    Point::new(rect.left + rect.width() / 2, rect.top + rect.height() / 2)
}

/// A point inside the handle of `group`.
pub fn handle_point(bar: &TabBar<MockHost>, group: usize) -> Point {
    let rect = bar.model().groups()[group].bounds;
    Point::new(rect.left + 2, rect.top + 5)
}

/// Check the model invariants, describing the first violation.
pub fn check_invariants(model: &TabGroupManager) -> std::result::Result<(), String> {
    let groups = model.groups();
    if groups.is_empty() {
        return Err("no groups".to_string());
    }
    if groups.len() > 1
        && let Some(idx) = groups.iter().position(|g| g.tabs.is_empty())
    {
        return Err(format!("group {} is empty but not the only group", idx));
    }
    if !model.is_empty() && model.active_tab().is_none() {
        return Err(format!(
            "active selection {:?} does not resolve",
            model.active_indices()
        ));
    }
    Ok(())
}
