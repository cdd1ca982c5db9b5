//! Background fill for the portable window
//!
//! Without the native panel nothing else draws into the window, and some
//! compositors (Wayland) only map a window once a buffer is attached.

use crate::geometry::Size;
use crate::utils::error::{IntoChromelessError, Result};
use softbuffer::{Context, Surface};
use std::num::NonZeroU32;
use std::sync::Arc;
use winit::event_loop::{ActiveEventLoop, OwnedDisplayHandle};
use winit::window::Window as WinitWindow;

/// Window background, 0RGB
pub const BACKGROUND: u32 = 0x00F0_F0F0;

pub struct BackgroundSurface {
    _context: Context<OwnedDisplayHandle>,
    surface: Surface<OwnedDisplayHandle, Arc<WinitWindow>>,
}

impl BackgroundSurface {
    pub fn new(event_loop: &ActiveEventLoop, window: Arc<WinitWindow>) -> Result<Self> {
        let context = Context::new(event_loop.owned_display_handle())
            .window_err("Failed to create drawing context")?;
        let surface = Surface::new(&context, window)
            .window_err("Failed to create window surface")?;

        Ok(Self {
            _context: context,
            surface,
        })
    }

    /// Fill the whole window with [`BACKGROUND`] and present it
    ///
    /// A zero-sized window (minimized on some platforms) is skipped.
    pub fn fill(&mut self, size: Size) -> Result<()> {
        let Some((width, height)) = buffer_size(size) else {
            return Ok(());
        };

        self.surface
            .resize(width, height)
            .window_err("Failed to resize surface")?;

        self.surface.window().pre_present_notify();
        let mut buffer = self
            .surface
            .buffer_mut()
            .window_err("Failed to map surface buffer")?;
        buffer.fill(BACKGROUND);
        buffer.present().window_err("Failed to present surface")
    }
}

fn buffer_size(size: Size) -> Option<(NonZeroU32, NonZeroU32)> {
    let width = NonZeroU32::new(u32::try_from(size.width).ok()?)?;
    let height = NonZeroU32::new(u32::try_from(size.height).ok()?)?;
    Some((width, height))
}
