//! Content panel covering the frame's client area
//!
//! The panel reports itself as transparent to hit testing so that mouse
//! input over it reaches the frame, which decides between resizing and
//! dragging.

use crate::frame::{Message, Outcome};
use crate::hit_test::codes;

/// Text shown in the middle of the panel
pub const GREETING: &str = "Hello";

/// Label of the button that closes the frame
pub const CLOSE_LABEL: &str = "Close";

#[derive(Debug, Clone, Copy, Default)]
pub struct PanelProc;

impl PanelProc {
    pub fn handle(&self, message: Message<'_>) -> Outcome {
        match message {
            Message::NcHitTest(_) => Outcome::Handled(codes::HT_TRANSPARENT as isize),
            _ => Outcome::Default,
        }
    }
}
