//! [`FrameHost`] over a native window handle

use crate::frame::{FrameHost, CAPTION_HIT_CODE};
use crate::geometry::{Point, Rect, Size};
use log::debug;
use windows::Win32::Foundation::{HWND, LPARAM, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::HiDpi::{GetDpiForWindow, GetSystemMetricsForDpi};
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    CallWindowProcW, GetClientRect, IsZoomed, SendMessageW, SM_CXFRAME, SM_CXPADDEDBORDER,
    WM_NCCALCSIZE, WM_NCLBUTTONDOWN, WNDPROC,
};

/// The frame window while one message is being dispatched
pub struct Win32Host {
    pub hwnd: HWND,

    /// Procedure the window had before it was subclassed
    pub original: WNDPROC,

    pub wparam: WPARAM,
    pub lparam: LPARAM,
}

impl FrameHost for Win32Host {
    fn is_maximized(&self) -> bool {
        unsafe { IsZoomed(self.hwnd).as_bool() }
    }

    fn client_size(&self) -> Size {
        let mut rect = RECT::default();
        if let Err(e) = unsafe { GetClientRect(self.hwnd, &mut rect) } {
            debug!("GetClientRect failed: {}", e);
        }
        from_native(rect).size()
    }

    fn screen_to_client(&self, point: Point) -> Point {
        let mut native = POINT { x: point.x, y: point.y };
        let _ = unsafe { ScreenToClient(self.hwnd, &mut native) };
        Point::new(native.x, native.y)
    }

    fn border_thickness(&self) -> i32 {
        unsafe {
            let dpi = GetDpiForWindow(self.hwnd);
            GetSystemMetricsForDpi(SM_CXFRAME, dpi) + GetSystemMetricsForDpi(SM_CXPADDEDBORDER, dpi)
        }
    }

    fn default_calc_size(&mut self, rect: &mut Rect) {
        // lParam points at a RECT for both forms of WM_NCCALCSIZE
        let native = self.lparam.0 as *mut RECT;
        unsafe {
            *native = to_native(*rect);
            CallWindowProcW(self.original, self.hwnd, WM_NCCALCSIZE, self.wparam, self.lparam);
            *rect = from_native(*native);
        }
    }

    fn release_capture(&mut self) {
        if let Err(e) = unsafe { ReleaseCapture() } {
            debug!("ReleaseCapture failed: {}", e);
        }
    }

    fn send_caption_button_down(&mut self) {
        unsafe {
            SendMessageW(
                self.hwnd,
                WM_NCLBUTTONDOWN,
                Some(WPARAM(CAPTION_HIT_CODE as usize)),
                Some(LPARAM(0)),
            );
        }
    }
}

pub fn from_native(rect: RECT) -> Rect {
    Rect::new(rect.left, rect.top, rect.right, rect.bottom)
}

pub fn to_native(rect: Rect) -> RECT {
    RECT {
        left: rect.left,
        top: rect.top,
        right: rect.right,
        bottom: rect.bottom,
    }
}
