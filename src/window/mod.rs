//! Window management module for Chromeless
//!
//! This module owns the single undecorated top-level window and the winit
//! event loop. On Windows the native frame hooks take over hit testing,
//! sizing and dragging; elsewhere the portable drag and resize handlers
//! drive the window manager through winit.

use crate::geometry::{Point, Size};

pub mod app;
pub mod drag;
pub mod events;
pub mod resize;
pub mod surface;

pub use app::{run, ChromelessApp};

/// Window events that the application reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    /// Window close requested
    CloseRequested,

    /// Window resized to a new inner size
    Resized(Size),

    /// Window moved to a new outer position
    Moved(Point),

    /// Window gained or lost focus
    Focused(bool),

    /// Cursor moved to a position in client coordinates
    CursorMoved(Point),

    /// Cursor left the window
    CursorLeft,

    /// Mouse button pressed at the last known cursor position
    MouseDown { position: Point, button: MouseButton },

    /// Key pressed
    KeyPressed(Key),

    /// The window contents need repainting
    RedrawRequested,
}

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Keys the window reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}
