//! DWM frame shadow for the borderless window

use log::debug;
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Dwm::{
    DwmExtendFrameIntoClientArea, DwmSetWindowAttribute, DWMNCRP_ENABLED,
    DWMWA_NCRENDERING_POLICY,
};
use windows::Win32::UI::Controls::MARGINS;

/// Give the window the smallest frame that still shows the shadow
///
/// Failures only cost the shadow, so they are logged and ignored.
pub fn extend_frame(hwnd: HWND) {
    let margins = MARGINS {
        cyTopHeight: 1,
        ..Default::default()
    };

    if let Err(e) = unsafe { DwmExtendFrameIntoClientArea(hwnd, &margins) } {
        debug!("DwmExtendFrameIntoClientArea failed with error {:08x}.", e.code().0);
    }

    let policy = DWMNCRP_ENABLED;
    let result = unsafe {
        DwmSetWindowAttribute(
            hwnd,
            DWMWA_NCRENDERING_POLICY,
            &policy as *const _ as *const _,
            std::mem::size_of_val(&policy) as u32,
        )
    };
    if let Err(e) = result {
        debug!(
            "DwmSetWindowAttribute(DWMWA_NCRENDERING_POLICY) failed with error {:08x}.",
            e.code().0
        );
    }
}
