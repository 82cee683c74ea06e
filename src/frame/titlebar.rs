//! Custom title bar for the frameless window
//!
//! The title bar owns the caption-drag state used to move the window
//! and the hit zones for the minimize / maximize / close controls. The
//! frame controller consults `is_moving` to suppress border resizing
//! while a caption drag is in progress.

use crate::frame::FrameMetrics;

/// Width of one title bar control button in pixels
pub const CONTROL_SIZE: u32 = 46;

/// Title bar control buttons, right-aligned in the caption row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleButton {
    Minimize,
    Maximize,
    Close,
}

/// State of the custom title bar
pub struct TitleBar {
    /// Caption text
    title: String,

    /// Whether a caption drag is moving the window
    moving: bool,

    /// Whether the maximize control shows its "restore" face
    restore: bool,

    /// Global pointer position when the caption drag started
    drag_start_pointer: Option<(i32, i32)>,

    /// Window origin when the caption drag started
    drag_start_origin: Option<(i32, i32)>,
}

impl TitleBar {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            moving: false,
            restore: false,
            drag_start_pointer: None,
            drag_start_origin: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Whether the window is currently being moved by its caption
    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Switch the maximize control between its maximize and restore faces
    pub fn set_restore_button(&mut self, restore: bool) {
        self.restore = restore;
    }

    pub fn restore_button(&self) -> bool {
        self.restore
    }

    /// The control button under a window-relative position, if any
    pub fn button_at(&self, x: f64, y: f64, metrics: &FrameMetrics) -> Option<TitleButton> {
        if !self.in_caption_row(y, metrics) {
            return None;
        }

        let width = metrics.width as f64;
        let control = CONTROL_SIZE as f64;

        let close_x = width - metrics.border_width as f64 - control;
        if x >= close_x {
            return Some(TitleButton::Close);
        }

        let max_x = close_x - control;
        if x >= max_x {
            return Some(TitleButton::Maximize);
        }

        let min_x = max_x - control;
        if x >= min_x {
            return Some(TitleButton::Minimize);
        }

        None
    }

    /// Whether a position lies in the draggable caption area (the
    /// caption row excluding the control buttons and border strips)
    pub fn in_caption_area(&self, x: f64, y: f64, metrics: &FrameMetrics) -> bool {
        if !self.in_caption_row(y, metrics) {
            return false;
        }

        if x < metrics.border_width as f64 {
            return false;
        }

        self.button_at(x, y, metrics).is_none()
    }

    fn in_caption_row(&self, y: f64, metrics: &FrameMetrics) -> bool {
        let top = metrics.border_width as f64;
        y > top && y <= top + metrics.titlebar_height as f64
    }

    /// Begin a caption drag from the given global pointer position and
    /// window origin
    pub fn start_move(&mut self, pointer: (i32, i32), origin: (i32, i32)) {
        self.moving = true;
        self.drag_start_pointer = Some(pointer);
        self.drag_start_origin = Some(origin);
    }

    /// New window origin for the current global pointer position
    pub fn move_to(&mut self, pointer: (i32, i32)) -> Option<(i32, i32)> {
        if !self.moving {
            return None;
        }

        let start = self.drag_start_pointer?;
        let origin = self.drag_start_origin?;
        Some((
            origin.0 + (pointer.0 - start.0),
            origin.1 + (pointer.1 - start.1),
        ))
    }

    /// End the caption drag
    pub fn end_move(&mut self) {
        self.moving = false;
        self.drag_start_pointer = None;
        self.drag_start_origin = None;
    }
}
