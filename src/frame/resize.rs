//! Border drag state machine
//!
//! Tracks which border region the pointer is over, the drag in
//! progress, and the debounce clock that limits how often geometry is
//! recomputed and persisted while a drag is running.

use crate::frame::geometry::{resize_rect, Rect};
use crate::frame::{FrameMetrics, HitBorder};
use std::time::{Duration, Instant};
use winit::window::CursorIcon;

/// Minimum time between successive geometry applications during a drag
pub const DEBOUNCE_INTERVAL: Duration = Duration::from_millis(50);

/// Controller for the manual resize chrome
pub struct ResizeController {
    /// Active border region under the pointer, if any
    hit: Option<HitBorder>,

    /// Whether a border drag is in progress
    dragging: bool,

    /// Cleared while the window is maximized
    enabled: bool,

    /// Instant of the last applied geometry change
    last_apply: Option<Instant>,

    /// Debounce interval between applications
    interval: Duration,

    /// Window rectangle captured at drag start
    drag_start: Option<Rect>,
}

impl ResizeController {
    pub fn new() -> Self {
        Self::with_interval(DEBOUNCE_INTERVAL)
    }

    /// Create a controller with an explicit debounce interval
    pub fn with_interval(interval: Duration) -> Self {
        Self {
            hit: None,
            dragging: false,
            enabled: true,
            last_apply: None,
            interval,
            drag_start: None,
        }
    }

    /// Enable or disable the border regions
    ///
    /// Maximizing disables them (no manual resize is possible then);
    /// restoring re-enables them. Disabling resets any in-flight drag.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Classify a hover position and pick the matching cursor
    ///
    /// Only meaningful while no mouse button is pressed; during a drag
    /// the active region is frozen and the cursor kept as-is.
    pub fn hover(&mut self, x: f64, y: f64, metrics: &FrameMetrics) -> CursorIcon {
        if self.dragging {
            return self
                .hit
                .map(|r| r.cursor_icon())
                .unwrap_or(CursorIcon::Default);
        }

        self.hit = if self.enabled {
            HitBorder::region_at(x, y, metrics)
        } else {
            None
        };

        self.hit
            .map(|r| r.cursor_icon())
            .unwrap_or(CursorIcon::Default)
    }

    /// Pointer left the window: clear the active region unless a drag
    /// is in progress.
    pub fn pointer_left(&mut self) -> CursorIcon {
        if !self.dragging {
            self.hit = None;
        }
        CursorIcon::Default
    }

    /// Left button pressed: capture the drag-start rectangle and reset
    /// the debounce clock. Returns whether a border drag started.
    pub fn press(&mut self, current: Rect) -> bool {
        self.drag_start = Some(current);
        self.last_apply = None;
        self.dragging = self.enabled && self.hit.is_some();
        self.dragging
    }

    /// Pointer moved with the left button held
    ///
    /// Returns the rectangle to apply, or `None` when not dragging,
    /// inside the debounce window, or when the active edge would fall
    /// below the minimum size.
    pub fn motion(
        &mut self,
        pointer: (i32, i32),
        current: Rect,
        min: (i32, i32),
    ) -> Option<Rect> {
        if !self.dragging {
            return None;
        }

        if let Some(last) = self.last_apply {
            if last.elapsed() < self.interval {
                return None;
            }
        }

        let region = self.hit?;
        let start = self.drag_start?;
        let rect = resize_rect(region, start, current, pointer, min)?;
        self.last_apply = Some(Instant::now());
        Some(rect)
    }

    /// Left button released: end the drag
    pub fn release(&mut self) {
        self.dragging = false;
        self.last_apply = None;
        self.drag_start = None;
    }

    /// Clear all drag state, keeping the enabled flag
    pub fn reset(&mut self) {
        self.hit = None;
        self.dragging = false;
        self.last_apply = None;
        self.drag_start = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn current_region(&self) -> Option<HitBorder> {
        self.hit
    }
}

impl Default for ResizeController {
    fn default() -> Self {
        Self::new()
    }
}
