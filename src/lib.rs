//! Chromeless - a borderless top-level window without standard chrome
//!
//! The window keeps what the window manager normally provides through the
//! title bar and borders: resizing from every edge and corner, moving by
//! dragging, maximizing and the frame shadow.

pub mod frame;
pub mod geometry;
pub mod panel;
pub mod platform;
pub mod utils;
pub mod window;

pub use frame::{FrameHost, FrameProc, Message, Outcome};
pub use geometry::{Point, Rect, Size};
pub use hit_test::{classify, AxisPart, WindowRegion};
pub use panel::PanelProc;
