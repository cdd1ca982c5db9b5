//! Win32 integration of the chrome-less frame
//!
//! winit creates the window and runs the message loop; this module
//! subclasses its window procedure so that hit testing, non-client sizing
//! and button-down dragging go through [`FrameProc`](crate::frame::FrameProc),
//! turns on the DWM frame shadow and adds the content panel.

mod host;
mod panel;
mod shadow;
mod subclass;

use crate::frame::FrameProc;
use crate::utils::config::FrameConfig;
use crate::utils::error::{ChromelessError, IntoChromelessError, Result};
use log::info;
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use windows::Win32::Foundation::{HWND, LPARAM};
use winit::window::Window as WinitWindow;

pub fn install(window: &WinitWindow, config: &FrameConfig) -> Result<()> {
    let hwnd = hwnd_of(window)?;

    if config.shadow {
        shadow::extend_frame(hwnd);
    }

    let panel = panel::create(hwnd)?;
    if let Err(e) = subclass::install(hwnd, FrameProc::new(config.border_override), panel) {
        panel::destroy(panel);
        return Err(e);
    }

    info!("Installed chrome-less frame on {:?}", hwnd);
    Ok(())
}

fn hwnd_of(window: &WinitWindow) -> Result<HWND> {
    let handle = window
        .window_handle()
        .platform_err("Reading window handle")?;

    match handle.as_raw() {
        RawWindowHandle::Win32(h) => Ok(HWND(h.hwnd.get() as *mut _)),
        other => Err(ChromelessError::Platform(format!(
            "Unexpected window handle {:?}",
            other
        ))),
    }
}

// GET_X_LPARAM / GET_Y_LPARAM: signed, multi-monitor setups have negative coordinates
pub(crate) fn x_of(lparam: LPARAM) -> i32 {
    (lparam.0 & 0xFFFF) as i16 as i32
}

pub(crate) fn y_of(lparam: LPARAM) -> i32 {
    ((lparam.0 >> 16) & 0xFFFF) as i16 as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lparam_coordinates_are_signed() {
        let lparam = LPARAM(((200u32 << 16) | 0xFFF6) as isize);
        assert_eq!(x_of(lparam), -10);
        assert_eq!(y_of(lparam), 200);
    }
}
