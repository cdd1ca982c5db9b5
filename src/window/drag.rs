//! Click-drag window movement
//!
//! Used where the native frame hooks are not available. A primary-button
//! press anywhere in the client region of a restored window hands the move
//! over to the window manager.

use crate::hit_test::WindowRegion;
use crate::window::MouseButton;
use log::debug;
use winit::window::Window as WinitWindow;

/// Handler for window dragging functionality
#[derive(Debug, Default)]
pub struct DragHandler {
    /// Number of moves handed to the window manager
    drags_started: u64,
}

impl DragHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press should start a move-drag
    pub fn should_drag(button: MouseButton, region: WindowRegion, maximized: bool) -> bool {
        button == MouseButton::Left && region.is_client() && !maximized
    }

    /// Handle a button press; returns true when a drag was started
    pub fn handle_press(
        &mut self,
        button: MouseButton,
        region: WindowRegion,
        window: &WinitWindow,
    ) -> bool {
        if !Self::should_drag(button, region, window.is_maximized()) {
            return false;
        }

        match window.drag_window() {
            Ok(()) => {
                self.drags_started += 1;
                true
            }
            Err(e) => {
                debug!("drag_window unsupported: {}", e);
                false
            }
        }
    }

    pub fn drags_started(&self) -> u64 {
        self.drags_started
    }
}
