//! Loading settings from disk and feeding them into a live bar.

mod common;

use common::{MockHost, bar_with_tabs};
use explorer_tabs::TabBar;
use explorer_tabs::config::{Config, ConfigError, LogLevel};
use explorer_tabs::tab::Location;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, yaml: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    path
}

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert!(config.tab_auto_size);
    assert_eq!(config.tab_fixed_width, 180);
    assert_eq!(config.tab_fixed_height, 32);
    assert_eq!(config.style.tab_padding_x, 14);
    assert_eq!(config.style.min_tab_width, 120);
    assert_eq!(config.style.max_tab_width, 280);
    assert_eq!(config.drag.drag_threshold_x, 4);
    assert_eq!(config.log_level, LogLevel::Off);
}

#[test]
fn test_loaded_config_drives_layout() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &temp_dir,
        "tab_auto_size: false\ntab_fixed_width: 150\ntab_fixed_height: 24\ntab_margin: 4\n",
    );
    let config = Config::load_from(&path).expect("load");

    let mut bar = TabBar::new(MockHost::default(), &config);
    bar.resize(1000, 32);
    bar.add_tab_for_location(Location::new("/A"), true, false, None);

    let tab = &bar.model().groups()[0].tabs[0];
    assert_eq!(tab.bounds.width(), 150);
    assert_eq!(tab.bounds.height(), 24);
    assert_eq!(tab.bounds.top, 4);
    assert_eq!(bar.total_height(), 32);
}

#[test]
fn test_fixed_width_is_clamped_to_range() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&temp_dir, "tab_auto_size: false\ntab_fixed_width: 400\n");
    let config = Config::load_from(&path).expect("load");

    let mut bar = bar_with_tabs(&[&["A"]]);
    bar.apply_config(&config);
    assert_eq!(bar.model().groups()[0].tabs[0].bounds.width(), 280);
}

#[test]
fn test_auto_size_follows_title_length() {
    let mut bar = TabBar::new(MockHost::default(), &Config::default());
    bar.resize(2000, 44);
    // 20 glyphs * 7 px + 2 * 14 px padding
    bar.add_tab_for_location(Location::new("/abcdefghijklmnopqrst"), true, false, None);
    assert_eq!(bar.model().groups()[0].tabs[0].bounds.width(), 168);

    let long = format!("/{}", "x".repeat(60));
    bar.add_tab_for_location(Location::new(long), true, false, None);
    assert_eq!(bar.model().groups()[0].tabs[1].bounds.width(), 280);
}

#[test]
fn test_invalid_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&temp_dir, "min_tab_width: 300\nmax_tab_width: 100\n");

    let err = Config::load_from(&path).expect_err("inverted range must fail");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Validation(msg)) if msg.contains("min_tab_width")
    ));
}

#[test]
fn test_missing_file_reports_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = Config::load_from(&temp_dir.path().join("absent.yaml")).expect_err("missing");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Io(_))
    ));
}

#[test]
fn test_save_and_reload_through_bar() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("settings").join("config.yaml");

    let mut config = Config::default();
    config.tab_auto_size = false;
    config.style.group_spacing = 30;
    config.drag.detach_threshold = 10;
    config.log_level = LogLevel::Debug;
    config.save_to(&path).expect("save");

    let contents = fs::read_to_string(&path).expect("read back");
    assert!(contents.contains("group_spacing: 30"));
    assert!(contents.contains("log_level: debug"));

    let loaded = Config::load_from(&path).expect("reload");
    assert_eq!(loaded, config);

    let mut bar = bar_with_tabs(&[&["A"], &["B"]]);
    bar.apply_config(&loaded);
    assert_eq!(bar.layout_params().group_spacing, 30);
    // Group 0 ends at 194; group 1 starts after the wider gap
    assert_eq!(bar.model().groups()[1].bounds.left, 224);
}
