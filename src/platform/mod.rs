//! Platform specific frame integration
//!
//! Only Windows exposes the non-client messages the chrome-less frame hooks
//! into. Other platforms report that no native frame is installed and the
//! window falls back to the portable handlers.

use crate::utils::config::FrameConfig;
use crate::utils::error::Result;
use winit::window::Window as WinitWindow;

#[cfg(windows)]
mod win32;

/// Install the native frame hooks on `window`
///
/// Returns `Ok(false)` where the platform has no native hooks.
pub fn install(window: &WinitWindow, config: &FrameConfig) -> Result<bool> {
    #[cfg(windows)]
    {
        win32::install(window, config)?;
        Ok(true)
    }

    #[cfg(not(windows))]
    {
        let _ = (window, config);
        log::debug!("No native frame hooks on this platform");
        Ok(false)
    }
}
