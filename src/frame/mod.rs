//! Window frame module for Sigview
//!
//! The acquisition shell runs as a borderless top-level window, so the
//! chrome the window system would normally provide is built here: a
//! custom title bar, eight invisible border regions used as resize
//! handles, and the drag state machine that turns pointer events on
//! those regions into geometry changes.

use winit::window::CursorIcon;

pub mod geometry;
pub mod resize;
pub mod shell;
pub mod titlebar;

pub use geometry::{centered_rect, resize_rect, restore_plan, Rect, RestorePlan};
pub use resize::ResizeController;
pub use shell::FrameShell;
pub use titlebar::TitleBar;

/// One of the eight invisible border regions of the frameless window
///
/// "No region" is expressed as `Option::None` at the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitBorder {
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl HitBorder {
    /// The resize cursor shown while this region is active
    pub fn cursor_icon(&self) -> CursorIcon {
        match self {
            HitBorder::Top | HitBorder::Bottom => CursorIcon::NsResize,
            HitBorder::Left | HitBorder::Right => CursorIcon::EwResize,
            HitBorder::TopLeft | HitBorder::BottomRight => CursorIcon::NwseResize,
            HitBorder::TopRight | HitBorder::BottomLeft => CursorIcon::NeswResize,
        }
    }

    /// Classify a window-relative pointer position against the border
    /// strips. Corner squares take priority over the edge strips they
    /// overlap.
    pub fn region_at(x: f64, y: f64, metrics: &FrameMetrics) -> Option<HitBorder> {
        let width = metrics.width as f64;
        let height = metrics.height as f64;
        let border = metrics.border_width as f64;

        if x < 0.0 || y < 0.0 || x > width || y > height {
            return None;
        }

        if x <= border && y <= border {
            return Some(HitBorder::TopLeft);
        }
        if x >= width - border && y <= border {
            return Some(HitBorder::TopRight);
        }
        if x <= border && y >= height - border {
            return Some(HitBorder::BottomLeft);
        }
        if x >= width - border && y >= height - border {
            return Some(HitBorder::BottomRight);
        }

        if x <= border {
            return Some(HitBorder::Left);
        }
        if x >= width - border {
            return Some(HitBorder::Right);
        }
        if y <= border {
            return Some(HitBorder::Top);
        }
        if y >= height - border {
            return Some(HitBorder::Bottom);
        }

        None
    }
}

/// Window metrics for hit testing and layout
#[derive(Debug, Clone, Copy)]
pub struct FrameMetrics {
    /// Total window width in physical pixels
    pub width: u32,

    /// Total window height in physical pixels
    pub height: u32,

    /// Title bar height, below the top border strip
    pub titlebar_height: u32,

    /// Thickness of the border hit regions
    pub border_width: u32,

    /// DPI scale factor
    pub scale_factor: f64,
}

impl Default for FrameMetrics {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            titlebar_height: 32,
            border_width: 8,
            scale_factor: 1.0,
        }
    }
}
