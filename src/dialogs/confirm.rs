//! Modal yes/no confirmation dialog
//!
//! A minimal parameter dialog: a title, a message, and two buttons.
//! The result is delivered through a single-shot callback that fires
//! exactly once per show, and is also retained on the dialog for the
//! caller to read after dismissal.

/// One-shot result callback
pub type ResultCallback = Box<dyn FnOnce(bool)>;

/// Dialog panel width in pixels
const PANEL_WIDTH: f64 = 360.0;

/// Dialog panel height in pixels
const PANEL_HEIGHT: f64 = 140.0;

/// Button width / height / spacing inside the panel
const BUTTON_WIDTH: f64 = 96.0;
const BUTTON_HEIGHT: f64 = 28.0;
const BUTTON_GAP: f64 = 12.0;

/// A rectangle in window coordinates, used for button hit testing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ButtonRect {
    fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Modal yes/no confirmation dialog
pub struct ConfirmDialog {
    title: String,
    message: String,
    on_result: Option<ResultCallback>,
    result: Option<bool>,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            on_result: None,
            result: None,
        }
    }

    /// Attach the single-shot result callback
    pub fn on_result(mut self, callback: impl FnOnce(bool) + 'static) -> Self {
        self.on_result = Some(Box::new(callback));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Dismiss with the given answer
    ///
    /// The first call records the result and fires the callback; any
    /// further call is ignored, so the callback runs exactly once.
    pub fn dismiss(&mut self, accepted: bool) {
        if self.result.is_some() {
            return;
        }

        self.result = Some(accepted);
        if let Some(callback) = self.on_result.take() {
            callback(accepted);
        }
    }

    pub fn is_dismissed(&self) -> bool {
        self.result.is_some()
    }

    /// The recorded answer, once dismissed
    pub fn result(&self) -> Option<bool> {
        self.result
    }

    /// Button rectangles (yes, no) for a panel centered in a window of
    /// the given size
    pub fn button_rects(&self, window_width: f64, window_height: f64) -> (ButtonRect, ButtonRect) {
        let panel_x = (window_width - PANEL_WIDTH) / 2.0;
        let panel_y = (window_height - PANEL_HEIGHT) / 2.0;

        let no = ButtonRect {
            x: panel_x + PANEL_WIDTH - BUTTON_GAP - BUTTON_WIDTH,
            y: panel_y + PANEL_HEIGHT - BUTTON_GAP - BUTTON_HEIGHT,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };
        let yes = ButtonRect {
            x: no.x - BUTTON_GAP - BUTTON_WIDTH,
            y: no.y,
            width: BUTTON_WIDTH,
            height: BUTTON_HEIGHT,
        };

        (yes, no)
    }

    /// The answer a click at a window position corresponds to, if it
    /// lands on either button
    pub fn button_at(&self, x: f64, y: f64, window_width: f64, window_height: f64) -> Option<bool> {
        let (yes, no) = self.button_rects(window_width, window_height);
        if yes.contains(x, y) {
            Some(true)
        } else if no.contains(x, y) {
            Some(false)
        } else {
            None
        }
    }
}
