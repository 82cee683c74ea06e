//! Integration tests for settings persistence and startup restore
//!
//! Persistence tests redirect the config home into a temporary
//! directory through `SIGVIEW_CONFIG_DIR` and therefore run serially.

use serial_test::serial;
use sigview::frame::geometry::{centered_rect, restore_plan, Rect, RestorePlan};
use sigview::utils::config::FrameOptions;
use sigview::utils::Config;
use sigview_integration_tests::ConfigHome;

#[test]
#[serial]
fn first_run_loads_defaults() {
    let _home = ConfigHome::new().unwrap();

    let config = Config::load().unwrap();
    assert!(!config.frame.has_saved_geometry());
    assert!(!config.frame.is_max);
    assert_eq!(config.window.min_width, 800);
    assert_eq!(config.general.log_level, "info");
}

#[test]
#[serial]
fn saved_geometry_round_trips() {
    let home = ConfigHome::new().unwrap();

    let mut config = Config::load().unwrap();
    config.frame = FrameOptions {
        left: 120,
        top: 80,
        right: 1320,
        bottom: 880,
        is_max: false,
        language: 31,
    };
    config.save().unwrap();
    assert!(home.config_file().exists());

    let reloaded = Config::load().unwrap();
    assert_eq!(reloaded.frame.left, 120);
    assert_eq!(reloaded.frame.top, 80);
    assert_eq!(reloaded.frame.right, 1320);
    assert_eq!(reloaded.frame.bottom, 880);
    assert_eq!(reloaded.frame.language, 31);
}

#[test]
#[serial]
fn environment_overrides_language() {
    let _home = ConfigHome::new().unwrap();

    std::env::set_var("SIGVIEW_LANGUAGE", "25");
    let config = Config::load().unwrap();
    std::env::remove_var("SIGVIEW_LANGUAGE");

    assert_eq!(config.frame.language, 25);
}

#[test]
#[serial]
fn malformed_config_degrades_to_defaults() {
    let home = ConfigHome::new().unwrap();
    std::fs::write(home.config_file(), "not = [valid").unwrap();

    let config = Config::load().unwrap();
    assert!(!config.frame.has_saved_geometry());
    assert_eq!(config.window.min_width, 800);
}

#[test]
#[serial]
fn geometry_updates_stay_in_memory_until_flushed() {
    let home = ConfigHome::new().unwrap();

    // A drag updates the owned config without touching the disk
    let mut config = Config::load().unwrap();
    config.frame.left = 50;
    config.frame.top = 60;
    config.frame.right = 900;
    config.frame.bottom = 700;
    assert!(!home.config_file().exists());

    // Minimize/close flush the settings
    config.save().unwrap();
    let reloaded = Config::load().unwrap();
    assert_eq!(reloaded.frame.right, 900);
}

#[test]
fn startup_with_no_geometry_centers_the_window() {
    let available = Rect::new(0, 0, 1920, 1080);
    let plan = restore_plan(&FrameOptions::default(), available);

    let RestorePlan::Centered(rect) = plan else {
        panic!("expected centered plan, got {:?}", plan);
    };
    assert_eq!(rect, centered_rect(available));
    assert_eq!(rect.width(), 960);
    assert_eq!(rect.height(), 720);
    assert_eq!(rect.left, 480);
    assert_eq!(rect.top, 180);
}

#[test]
fn startup_with_saved_maximized_ignores_the_rectangle() {
    let available = Rect::new(0, 0, 1920, 1080);
    let frame = FrameOptions {
        left: 5,
        top: 5,
        right: 10,
        bottom: 10,
        is_max: true,
        language: 0,
    };

    assert_eq!(restore_plan(&frame, available), RestorePlan::Maximized);
}

#[test]
fn startup_with_saved_rectangle_restores_it_exactly() {
    let available = Rect::new(0, 0, 1920, 1080);
    let frame = FrameOptions {
        left: 10,
        top: 20,
        right: 910,
        bottom: 620,
        is_max: false,
        language: 0,
    };

    assert_eq!(
        restore_plan(&frame, available),
        RestorePlan::Exact(Rect::new(10, 20, 910, 620))
    );
}

#[test]
fn startup_on_offset_monitor_centers_within_it() {
    let available = Rect::new(1920, 0, 1920 + 2560, 1440);
    let plan = restore_plan(&FrameOptions::default(), available);

    let RestorePlan::Centered(rect) = plan else {
        panic!("expected centered plan, got {:?}", plan);
    };
    assert_eq!(rect.width(), 1280);
    assert_eq!(rect.height(), 960);
    assert_eq!(rect.left, 1920 + 640);
    assert_eq!(rect.top, 240);
}
