//! Edge resize handling for borderless windows
//!
//! This module tracks which border region the cursor is over, keeps the
//! cursor icon in sync and starts an interactive resize on press. Used where
//! the native frame hooks are not available.

use crate::geometry::{Point, Size};
use crate::hit_test::{self, WindowRegion};
use crate::window::MouseButton;
use log::debug;
use winit::window::{CursorIcon, ResizeDirection, Window as WinitWindow};

/// Handler for window resizing functionality
#[derive(Debug)]
pub struct ResizeHandler {
    /// Border width for edge detection (in pixels)
    border_width: i32,

    /// Region under the cursor
    current_region: WindowRegion,
}

impl ResizeHandler {
    pub fn new(border_width: i32) -> Self {
        Self {
            border_width,
            current_region: WindowRegion::Client,
        }
    }

    /// Region at `position` in the window's current state
    pub fn region_at(&self, position: Point, size: Size, maximized: bool) -> WindowRegion {
        if maximized {
            WindowRegion::Client
        } else {
            hit_test::classify(position, size, self.border_width)
        }
    }

    /// Track the cursor; returns the icon to show
    pub fn handle_cursor_moved(
        &mut self,
        position: Point,
        size: Size,
        maximized: bool,
    ) -> CursorIcon {
        self.current_region = self.region_at(position, size, maximized);
        self.current_region.cursor_icon()
    }

    pub fn handle_cursor_left(&mut self) {
        self.current_region = WindowRegion::Client;
    }

    /// Reclassify a press against the window as it is now
    ///
    /// The window may have been maximized or resized since the cursor last
    /// moved, so the tracked region is replaced.
    pub fn press_region(&mut self, position: Point, size: Size, maximized: bool) -> WindowRegion {
        self.current_region = self.region_at(position, size, maximized);
        self.current_region
    }

    /// Direction to resize in if `button` is pressed over `region`
    pub fn press_direction(button: MouseButton, region: WindowRegion) -> Option<ResizeDirection> {
        if button != MouseButton::Left {
            return None;
        }
        region.resize_direction()
    }

    /// Handle a button press; returns true when a resize was started
    pub fn handle_press(
        &mut self,
        button: MouseButton,
        region: WindowRegion,
        window: &WinitWindow,
    ) -> bool {
        let Some(direction) = Self::press_direction(button, region) else {
            return false;
        };

        match window.drag_resize_window(direction) {
            Ok(()) => true,
            Err(e) => {
                debug!("drag_resize_window unsupported: {}", e);
                false
            }
        }
    }

    /// Get current region
    pub fn current_region(&self) -> WindowRegion {
        self.current_region
    }
}
