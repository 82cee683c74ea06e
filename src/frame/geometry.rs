//! Frame geometry math
//!
//! Pure functions behind the manual resize chrome: rectangle type,
//! per-region resize arithmetic, and startup placement. Keeping this
//! free of any windowing types makes the anchoring and minimum-size
//! rules directly testable.

use crate::frame::HitBorder;
use crate::utils::config::FrameOptions;

/// Window rectangle in physical screen pixels
///
/// Half-open convention: `width = right - left`, `height = bottom - top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Build a rectangle from an origin and a size
    pub fn from_origin_size(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Compute the rectangle for one debounced resize step
///
/// `start` is the rectangle captured at drag start, `current` the
/// rectangle as of the previous step, `pointer` the global pointer
/// position, `min` the minimum width/height floor.
///
/// Corner regions adjust both dimensions; the dragged origin follows
/// the pointer only while the new dimension strictly exceeds the
/// minimum, so the window does not jump once shrunk to the floor.
/// Edge regions adjust a single dimension and return `None` unless it
/// strictly exceeds the minimum, leaving the geometry untouched.
pub fn resize_rect(
    region: HitBorder,
    start: Rect,
    current: Rect,
    pointer: (i32, i32),
    min: (i32, i32),
) -> Option<Rect> {
    let (px, py) = pointer;
    let (min_w, min_h) = min;

    match region {
        HitBorder::TopLeft => {
            let new_width = (start.right - px).max(min_w);
            let new_height = (start.bottom - py).max(min_h);
            let new_left = if new_width > min_w { px } else { current.left };
            let new_top = if new_height > min_h { py } else { current.top };
            Some(Rect::from_origin_size(new_left, new_top, new_width, new_height))
        }

        HitBorder::BottomLeft => {
            let new_width = (start.right - px).max(min_w);
            let new_height = (py - start.top).max(min_h);
            let new_left = if new_width > min_w { px } else { current.left };
            Some(Rect::from_origin_size(new_left, start.top, new_width, new_height))
        }

        HitBorder::TopRight => {
            let new_width = (px - start.left).max(min_w);
            let new_height = (start.bottom - py).max(min_h);
            let new_top = if new_height > min_h { py } else { current.top };
            Some(Rect::from_origin_size(start.left, new_top, new_width, new_height))
        }

        HitBorder::BottomRight => {
            let new_width = (px - start.left).max(min_w);
            let new_height = (py - start.top).max(min_h);
            Some(Rect::from_origin_size(start.left, start.top, new_width, new_height))
        }

        HitBorder::Left => {
            let new_width = start.right - px;
            (new_width > min_w)
                .then(|| Rect::from_origin_size(px, start.top, new_width, current.height()))
        }

        HitBorder::Right => {
            let new_width = px - start.left;
            (new_width > min_w)
                .then(|| Rect::from_origin_size(start.left, start.top, new_width, current.height()))
        }

        HitBorder::Top => {
            let new_height = start.bottom - py;
            (new_height > min_h)
                .then(|| Rect::from_origin_size(start.left, py, current.width(), new_height))
        }

        HitBorder::Bottom => {
            let new_height = py - start.top;
            (new_height > min_h)
                .then(|| Rect::from_origin_size(start.left, start.top, current.width(), new_height))
        }
    }
}

/// First-run placement: half the available width, two thirds of the
/// available height, centered, with the origin clamped at the screen
/// origin.
pub fn centered_rect(available: Rect) -> Rect {
    let width = available.width() / 2;
    let height = available.height() * 2 / 3;
    let x = available.left + ((available.width() - width) / 2).max(0);
    let y = available.top + ((available.height() - height) / 2).max(0);
    Rect::from_origin_size(x, y, width, height)
}

/// How to place the window at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePlan {
    /// No saved geometry: use the computed centered default
    Centered(Rect),

    /// Saved maximized: maximize regardless of the saved rectangle
    Maximized,

    /// Restore the exact saved rectangle
    Exact(Rect),
}

/// Decide the startup placement from the persisted frame options
pub fn restore_plan(frame: &FrameOptions, available: Rect) -> RestorePlan {
    if !frame.has_saved_geometry() {
        RestorePlan::Centered(centered_rect(available))
    } else if frame.is_max {
        RestorePlan::Maximized
    } else {
        RestorePlan::Exact(Rect::new(frame.left, frame.top, frame.right, frame.bottom))
    }
}
