//! Non-client message handling for the chrome-less frame
//!
//! The frame overrides three native messages: hit testing, non-client size
//! calculation and primary button down. Everything native goes through
//! [`FrameHost`] so the dispatch logic stays platform independent.

use crate::geometry::{Point, Rect, Size};
use crate::hit_test::{self, codes, WindowRegion};

/// A window message, decoded from its native parameters
#[derive(Debug, PartialEq, Eq)]
pub enum Message<'a> {
    /// Primary mouse button pressed in the client area
    LButtonDown,

    /// Non-client size calculation with the proposed window rectangle
    NcCalcSize(&'a mut Rect),

    /// Non-client hit test at a point in screen coordinates
    NcHitTest(Point),

    /// Anything the frame does not intercept
    Other,
}

/// Result of offering a message to a window procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The message was handled and this value must be returned
    Handled(isize),

    /// Let the default window procedure run
    Default,
}

/// Native operations the frame needs from its window
pub trait FrameHost {
    fn is_maximized(&self) -> bool;

    fn client_size(&self) -> Size;

    fn screen_to_client(&self, point: Point) -> Point;

    /// Resize border thickness from the system metrics at the window's DPI
    fn border_thickness(&self) -> i32;

    /// Run the default non-client size calculation on `rect`
    fn default_calc_size(&mut self, rect: &mut Rect);

    fn release_capture(&mut self);

    /// Post a caption button-down so the window manager starts a move
    fn send_caption_button_down(&mut self);
}

/// Window procedure logic of the chrome-less frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameProc {
    border_override: Option<i32>,
}

impl FrameProc {
    pub fn new(border_override: Option<i32>) -> Self {
        Self { border_override }
    }

    pub fn handle<H: FrameHost + ?Sized>(&self, host: &mut H, message: Message<'_>) -> Outcome {
        match message {
            Message::LButtonDown => {
                // Dragging is only allowed from a restored window
                if host.is_maximized() {
                    return Outcome::Default;
                }
                host.release_capture();
                host.send_caption_button_down();
                Outcome::Handled(0)
            }

            Message::NcCalcSize(rect) => {
                Self::calc_size(host, rect);
                Outcome::Handled(0)
            }

            Message::NcHitTest(screen) => {
                let region = if host.is_maximized() {
                    WindowRegion::Client
                } else {
                    self.hit_test(host, screen)
                };
                Outcome::Handled(region.hit_code() as isize)
            }

            Message::Other => Outcome::Default,
        }
    }

    /// Classify a screen point for a restored window
    pub fn hit_test<H: FrameHost + ?Sized>(&self, host: &H, screen: Point) -> WindowRegion {
        let client = host.screen_to_client(screen);
        let border = self.border_override.unwrap_or_else(|| host.border_thickness());
        hit_test::classify(client, host.client_size(), border)
    }

    // The default handling has side effects that tiling and cascading rely
    // on, but its shrunken rectangle is discarded.
    fn calc_size<H: FrameHost + ?Sized>(host: &mut H, rect: &mut Rect) {
        let original = *rect;
        host.default_calc_size(rect);
        *rect = original;
    }
}

/// Hit-test value of the caption, used for synthetic drags
pub const CAPTION_HIT_CODE: i32 = codes::HT_CAPTION;
