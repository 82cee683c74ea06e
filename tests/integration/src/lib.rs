//! Integration test utilities for Sigview
//!
//! This module provides common utilities for integration testing:
//! - An isolated config home redirecting settings persistence
//! - Drag simulation over the resize controller
//! - A recording content view

use anyhow::Result;
use sigview::frame::geometry::Rect;
use sigview::frame::{FrameMetrics, HitBorder, ResizeController};
use sigview::session::ContentView;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

/// Isolated config home for persistence tests
///
/// Points `SIGVIEW_CONFIG_DIR` at a temporary directory for the
/// lifetime of the guard. Tests using it must run serially.
pub struct ConfigHome {
    temp_dir: TempDir,
}

impl ConfigHome {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        std::env::set_var("SIGVIEW_CONFIG_DIR", temp_dir.path());
        Ok(Self { temp_dir })
    }

    /// Path to the temporary config directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Path the config file will be written to
    pub fn config_file(&self) -> std::path::PathBuf {
        self.temp_dir.path().join("config.toml")
    }
}

impl Drop for ConfigHome {
    fn drop(&mut self) {
        std::env::remove_var("SIGVIEW_CONFIG_DIR");
    }
}

/// A controller prepared for simulated drags: no debounce, hovering
/// over the given window-relative position
pub fn controller_over(x: f64, y: f64, metrics: &FrameMetrics) -> ResizeController {
    let mut ctl = ResizeController::with_interval(Duration::ZERO);
    ctl.hover(x, y, metrics);
    ctl
}

/// Run a full drag: press on the current rectangle, move through each
/// pointer position, release. Returns the final rectangle.
pub fn run_drag(
    ctl: &mut ResizeController,
    start: Rect,
    min: (i32, i32),
    pointers: &[(i32, i32)],
) -> Rect {
    let mut current = start;
    ctl.press(start);
    for &pointer in pointers {
        if let Some(next) = ctl.motion(pointer, current, min) {
            current = next;
        }
    }
    ctl.release();
    current
}

/// Window metrics matching a rectangle, for hover classification
pub fn metrics_for(rect: Rect) -> FrameMetrics {
    FrameMetrics {
        width: rect.width() as u32,
        height: rect.height() as u32,
        ..FrameMetrics::default()
    }
}

/// A window-relative hover position inside the given border region
pub fn hover_point(region: HitBorder, metrics: &FrameMetrics) -> (f64, f64) {
    let w = metrics.width as f64;
    let h = metrics.height as f64;
    let b = metrics.border_width as f64 / 2.0;

    match region {
        HitBorder::TopLeft => (b, b),
        HitBorder::Top => (w / 2.0, b),
        HitBorder::TopRight => (w - b, b),
        HitBorder::Left => (b, h / 2.0),
        HitBorder::Right => (w - b, h / 2.0),
        HitBorder::BottomLeft => (b, h - b),
        HitBorder::Bottom => (w / 2.0, h - b),
        HitBorder::BottomRight => (w - b, h - b),
    }
}

/// Content view that records every collaborator call
#[derive(Default)]
pub struct RecordingView {
    pub calls: Vec<String>,
    pub language: i32,
}

impl ContentView for RecordingView {
    fn restore_dock(&mut self) {
        self.calls.push("restore_dock".to_string());
    }

    fn switch_language(&mut self, language: i32) {
        self.calls.push(format!("switch_language({})", language));
        self.language = language;
    }

    fn save_session(&mut self) -> sigview::utils::Result<()> {
        self.calls.push("save_session".to_string());
        Ok(())
    }

    fn open_document(&self) -> sigview::utils::Result<()> {
        Ok(())
    }
}
