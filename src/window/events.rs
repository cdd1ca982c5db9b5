//! Event handling for the winit window
//!
//! This module converts winit events to Chromeless WindowEvent types.

use crate::geometry::{Point, Size};
use crate::window::{Key, MouseButton, WindowEvent};
use winit::event::{
    ElementState, MouseButton as WinitMouseButton, WindowEvent as WinitWindowEvent,
};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Event handler for converting winit events to Chromeless events
#[derive(Debug, Default)]
pub struct EventHandler {
    /// Last known cursor position in client coordinates
    cursor_position: Option<Point>,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a winit window event and convert to a Chromeless event
    pub fn handle_event(&mut self, event: &WinitWindowEvent) -> Option<WindowEvent> {
        match event {
            WinitWindowEvent::CloseRequested => Some(WindowEvent::CloseRequested),

            WinitWindowEvent::Resized(size) => Some(WindowEvent::Resized((*size).into())),

            WinitWindowEvent::Moved(position) => {
                Some(WindowEvent::Moved(Point::new(position.x, position.y)))
            }

            WinitWindowEvent::Focused(focused) => Some(WindowEvent::Focused(*focused)),

            WinitWindowEvent::CursorMoved { position, .. } => {
                let point = Point::new(position.x.floor() as i32, position.y.floor() as i32);
                self.cursor_position = Some(point);
                Some(WindowEvent::CursorMoved(point))
            }

            WinitWindowEvent::CursorLeft { .. } => {
                self.cursor_position = None;
                Some(WindowEvent::CursorLeft)
            }

            WinitWindowEvent::MouseInput { state: ElementState::Pressed, button, .. } => {
                let button = convert_mouse_button(*button)?;
                Some(WindowEvent::MouseDown {
                    position: self.cursor_position?,
                    button,
                })
            }

            WinitWindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed =>
            {
                match event.physical_key {
                    PhysicalKey::Code(keycode) => {
                        Some(WindowEvent::KeyPressed(convert_key_code(keycode)))
                    }
                    PhysicalKey::Unidentified(_) => None,
                }
            }

            WinitWindowEvent::RedrawRequested => Some(WindowEvent::RedrawRequested),

            _ => None,
        }
    }

    /// Get last known cursor position
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor_position
    }
}

/// Convert winit mouse button to Chromeless mouse button
fn convert_mouse_button(button: WinitMouseButton) -> Option<MouseButton> {
    match button {
        WinitMouseButton::Left => Some(MouseButton::Left),
        WinitMouseButton::Right => Some(MouseButton::Right),
        WinitMouseButton::Middle => Some(MouseButton::Middle),
        _ => None,
    }
}

fn convert_key_code(keycode: KeyCode) -> Key {
    match keycode {
        KeyCode::Escape => Key::Escape,
        _ => Key::Other,
    }
}

/// Size helper for winit's inner size
pub fn inner_size(window: &winit::window::Window) -> Size {
    window.inner_size().into()
}
