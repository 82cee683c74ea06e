//! Winit shell for the frameless window
//!
//! `FrameShell` owns the top-level window and wires pointer, keyboard
//! and window-state events into the chrome components: modal dialogs
//! first, then the title bar, then the border resize controller. It
//! also owns the configuration object and is the only writer of the
//! persisted frame geometry.

use crate::dialogs::ConfirmDialog;
use crate::frame::geometry::{restore_plan, Rect, RestorePlan};
use crate::frame::resize::ResizeController;
use crate::frame::titlebar::{TitleBar, TitleButton};
use crate::frame::FrameMetrics;
use crate::session::ContentView;
use crate::utils::config::Config;
use crate::utils::error::{IntoShellError, Result};
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Fallback screen area when no monitor can be queried
const FALLBACK_SCREEN: Rect = Rect {
    left: 0,
    top: 0,
    right: 1920,
    bottom: 1080,
};

/// The borderless main window and its chrome
pub struct FrameShell {
    /// Owned configuration, flushed on minimize and close
    config: Config,

    /// Embedded analyzer view
    content: Box<dyn ContentView>,

    titlebar: TitleBar,
    resize: ResizeController,

    /// Active modal dialog; while set, input goes nowhere else
    modal: Option<ConfirmDialog>,

    window: Option<Window>,
    metrics: FrameMetrics,

    /// Window origin in screen coordinates, tracked from Moved events
    origin: (i32, i32),

    /// Last window-relative cursor position
    cursor: (f64, f64),

    /// Whether the left button is currently held
    left_down: bool,

    /// Mirror of the window's maximized state
    maximized: bool,
}

impl FrameShell {
    pub fn new(config: Config, content: Box<dyn ContentView>) -> Self {
        let titlebar = TitleBar::new(config.window.title.clone());
        let metrics = FrameMetrics {
            titlebar_height: config.window.titlebar_height,
            border_width: config.window.border_width,
            ..FrameMetrics::default()
        };

        Self {
            config,
            content,
            titlebar,
            resize: ResizeController::new(),
            modal: None,
            window: None,
            metrics,
            origin: (0, 0),
            cursor: (0.0, 0.0),
            left_down: false,
            maximized: false,
        }
    }

    /// Run the shell until the window closes
    pub fn run(mut self) -> Result<()> {
        let event_loop = EventLoop::new().window_err("Failed to create event loop")?;
        event_loop.set_control_flow(ControlFlow::Wait);
        event_loop
            .run_app(&mut self)
            .window_err("Event loop error")?;
        Ok(())
    }

    fn min_size(&self) -> (i32, i32) {
        (
            self.config.window.min_width as i32,
            self.config.window.min_height as i32,
        )
    }

    /// Current outer rectangle from the tracked origin and metrics
    fn current_rect(&self) -> Rect {
        Rect::from_origin_size(
            self.origin.0,
            self.origin.1,
            self.metrics.width as i32,
            self.metrics.height as i32,
        )
    }

    /// Cursor position in screen coordinates
    fn global_pointer(&self) -> (i32, i32) {
        (
            self.origin.0 + self.cursor.0 as i32,
            self.origin.1 + self.cursor.1 as i32,
        )
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attributes = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_decorations(false)
            .with_resizable(true)
            .with_min_inner_size(PhysicalSize::new(
                self.config.window.min_width,
                self.config.window.min_height,
            ))
            .with_inner_size(PhysicalSize::new(
                self.config.window.min_width,
                self.config.window.min_height,
            ));

        let window = event_loop
            .create_window(attributes)
            .window_err("Failed to create window")?;

        self.metrics.scale_factor = window.scale_factor();
        self.window = Some(window);
        Ok(())
    }

    /// Available screen rectangle of the primary monitor
    fn available_screen(&self, event_loop: &ActiveEventLoop) -> Rect {
        event_loop
            .primary_monitor()
            .map(|monitor| {
                let pos = monitor.position();
                let size = monitor.size();
                Rect::from_origin_size(pos.x, pos.y, size.width as i32, size.height as i32)
            })
            .unwrap_or(FALLBACK_SCREEN)
    }

    /// Apply a rectangle to the window and the tracked state
    fn apply_rect(&mut self, rect: Rect) {
        if let Some(window) = &self.window {
            window.set_outer_position(PhysicalPosition::new(rect.left, rect.top));
            let _ = window.request_inner_size(PhysicalSize::new(
                rect.width() as u32,
                rect.height() as u32,
            ));
        }
        self.origin = (rect.left, rect.top);
        self.metrics.width = rect.width() as u32;
        self.metrics.height = rect.height() as u32;
    }

    /// Record the current rectangle in the config (not flushed)
    fn save_window_region(&mut self) {
        let rect = self.current_rect();
        self.config.frame.left = rect.left;
        self.config.frame.top = rect.top;
        self.config.frame.right = rect.right;
        self.config.frame.bottom = rect.bottom;
    }

    /// Flush settings to storage
    fn write_settings(&mut self) {
        self.config.frame.is_max = self.maximized;
        if !self.maximized && self.config.general.remember_window_state {
            self.save_window_region();
        }

        if let Err(e) = self.config.save() {
            log::warn!("Failed to save settings: {}", e);
        }
    }

    /// Restore language, geometry, docks and chrome state at startup
    fn read_settings(&mut self, event_loop: &ActiveEventLoop) {
        if self.config.frame.language > 0 {
            self.content.switch_language(self.config.frame.language);
        }

        let available = self.available_screen(event_loop);
        match restore_plan(&self.config.frame, available) {
            RestorePlan::Centered(rect) => {
                log::info!(
                    "No saved geometry, centering {}x{}",
                    rect.width(),
                    rect.height()
                );
                self.apply_rect(rect);
            }
            RestorePlan::Maximized => {
                log::info!("Restoring maximized window");
                self.set_maximized(true);
            }
            RestorePlan::Exact(rect) => {
                log::info!(
                    "Restoring saved geometry ({},{}) {}x{}",
                    rect.left,
                    rect.top,
                    rect.width(),
                    rect.height()
                );
                self.apply_rect(rect);
            }
        }

        self.content.restore_dock();
        self.titlebar.set_restore_button(self.config.frame.is_max);

        if self.config.general.show_documents {
            self.modal = Some(
                ConfirmDialog::new("Document", "Open the user guide?")
                    .on_result(|yes| log::debug!("User guide prompt answered: {}", yes)),
            );
        }
    }

    /// Switch the maximized state and the chrome that depends on it
    fn set_maximized(&mut self, maximized: bool) {
        self.maximized = maximized;
        self.resize.set_enabled(!maximized);
        self.titlebar.set_restore_button(maximized);
        if let Some(window) = &self.window {
            window.set_maximized(maximized);
        }
    }

    fn minimize(&mut self) {
        // Settings are flushed before the window goes away
        self.write_settings();
        if let Some(window) = &self.window {
            window.set_minimized(true);
        }
    }

    fn close(&mut self, event_loop: &ActiveEventLoop) {
        self.write_settings();
        if let Err(e) = self.content.save_session() {
            log::warn!("Failed to save session: {}", e);
        }
        event_loop.exit();
    }

    fn on_title_button(&mut self, button: TitleButton, event_loop: &ActiveEventLoop) {
        match button {
            TitleButton::Minimize => self.minimize(),
            TitleButton::Maximize => self.set_maximized(!self.maximized),
            TitleButton::Close => self.close(event_loop),
        }
    }

    /// Resolve the modal dialog with the given answer
    fn dismiss_modal(&mut self, accepted: bool) {
        let Some(mut dialog) = self.modal.take() else {
            return;
        };
        dialog.dismiss(accepted);

        // Startup document prompt: open on yes, stop asking on no
        if accepted {
            if let Err(e) = self.content.open_document() {
                log::warn!("{}", e);
            }
        } else {
            self.config.general.show_documents = false;
        }
    }

    fn on_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);

        if self.modal.is_some() {
            return;
        }

        if self.titlebar.is_moving() {
            if let Some(origin) = self.titlebar.move_to(self.global_pointer()) {
                if let Some(window) = &self.window {
                    window.set_outer_position(PhysicalPosition::new(origin.0, origin.1));
                }
                self.origin = origin;
                self.save_window_region();
            }
            return;
        }

        if self.left_down && self.resize.is_dragging() {
            let pointer = self.global_pointer();
            let current = self.current_rect();
            let min = self.min_size();
            if let Some(rect) = self.resize.motion(pointer, current, min) {
                self.apply_rect(rect);
                self.save_window_region();
            }
            return;
        }

        if !self.left_down {
            let icon = self.resize.hover(x, y, &self.metrics);
            if let Some(window) = &self.window {
                window.set_cursor(icon);
            }
        }
    }

    fn on_left_pressed(&mut self, event_loop: &ActiveEventLoop) {
        self.left_down = true;
        let (x, y) = self.cursor;

        if let Some(dialog) = &self.modal {
            let answer = dialog.button_at(x, y, self.metrics.width as f64, self.metrics.height as f64);
            if let Some(accepted) = answer {
                self.dismiss_modal(accepted);
            }
            return;
        }

        if let Some(button) = self.titlebar.button_at(x, y, &self.metrics) {
            self.on_title_button(button, event_loop);
            return;
        }

        if self.resize.press(self.current_rect()) {
            return;
        }

        if !self.maximized && self.titlebar.in_caption_area(x, y, &self.metrics) {
            self.titlebar.start_move(self.global_pointer(), self.origin);
        }
    }

    fn on_left_released(&mut self) {
        self.left_down = false;
        self.resize.release();
        self.titlebar.end_move();
    }

    fn on_key_pressed(&mut self, code: KeyCode) {
        if self.modal.is_none() {
            return;
        }

        match code {
            KeyCode::Enter | KeyCode::NumpadEnter | KeyCode::KeyY => self.dismiss_modal(true),
            KeyCode::Escape | KeyCode::KeyN => self.dismiss_modal(false),
            _ => {}
        }
    }
}

impl ApplicationHandler for FrameShell {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("{}", e);
            event_loop.exit();
            return;
        }

        self.read_settings(event_loop);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => self.close(event_loop),

            WindowEvent::Resized(size) => {
                self.metrics.width = size.width;
                self.metrics.height = size.height;

                let maximized = self
                    .window
                    .as_ref()
                    .map(|w| w.is_maximized())
                    .unwrap_or(false);
                if maximized != self.maximized {
                    self.maximized = maximized;
                    self.resize.set_enabled(!maximized);
                }
                self.titlebar.set_restore_button(maximized);
            }

            WindowEvent::Moved(position) => {
                self.origin = (position.x, position.y);
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.on_cursor_moved(position.x, position.y);
            }

            WindowEvent::CursorLeft { .. } => {
                let icon = self.resize.pointer_left();
                if !self.resize.is_dragging() {
                    if let Some(window) = &self.window {
                        window.set_cursor(icon);
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if button == MouseButton::Left {
                    match state {
                        ElementState::Pressed => self.on_left_pressed(event_loop),
                        ElementState::Released => self.on_left_released(),
                    }
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    if let PhysicalKey::Code(code) = event.physical_key {
                        self.on_key_pressed(code);
                    }
                }
            }

            WindowEvent::Focused(false) => {
                // A drag cannot continue without the pointer grab
                self.resize.release();
                self.titlebar.end_move();
                self.left_down = false;
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.metrics.scale_factor = scale_factor;
            }

            _ => {}
        }
    }
}
