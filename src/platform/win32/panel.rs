//! Content panel child window
//!
//! Fills the frame's client area, paints the greeting and hosts the Close
//! button. Hit testing is delegated to [`PanelProc`] which makes the panel
//! transparent, so the frame underneath sees the mouse.

use super::{x_of, y_of};
use crate::frame::{Message, Outcome};
use crate::geometry::Point;
use crate::panel::{PanelProc, CLOSE_LABEL, GREETING};
use crate::utils::error::Result;
use log::debug;
use std::cell::Cell;
use windows::core::{w, HSTRING};
use windows::Win32::Foundation::{
    GetLastError, ERROR_CLASS_ALREADY_EXISTS, HINSTANCE, HWND, LPARAM, LRESULT, RECT, WPARAM,
};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreateFontIndirectW, DeleteObject, DrawTextW, EndPaint, GetStockObject,
    SelectObject, SetBkMode, COLOR_WINDOW, DT_CENTER, DT_SINGLELINE, DT_VCENTER, FW_BOLD,
    HBRUSH, HGDIOBJ, LOGFONTW, PAINTSTRUCT, TRANSPARENT, DEFAULT_GUI_FONT,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::HiDpi::GetDpiForWindow;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetClientRect, GetDlgItem, GetParent,
    LoadCursorW, MoveWindow, PostMessageW, RegisterClassW, SendMessageW,
    SystemParametersInfoForDpi, BS_PUSHBUTTON, HMENU, IDC_ARROW, SPI_GETICONTITLELOGFONT,
    WINDOW_EX_STYLE, WINDOW_STYLE, WM_CLOSE, WM_COMMAND, WM_NCHITTEST, WM_PAINT, WM_SETFONT,
    WM_SIZE, WNDCLASSW, WS_CHILD, WS_CLIPCHILDREN, WS_TABSTOP, WS_VISIBLE,
};

const CLASS_NAME: windows::core::PCWSTR = w!("ChromelessPanel");
const ID_CLOSE: i32 = 101;
const BUTTON_WIDTH: i32 = 96;
const BUTTON_HEIGHT: i32 = 28;
const SPACING: i32 = 8;

thread_local! {
    static REGISTERED: Cell<bool> = const { Cell::new(false) };
}

/// Register the panel window class once per thread
///
/// The class is process wide, so a class left by another thread counts.
fn register_class(instance: HINSTANCE) -> Result<()> {
    if REGISTERED.with(|r| r.get()) {
        return Ok(());
    }

    let wc = WNDCLASSW {
        lpfnWndProc: Some(panel_proc),
        hInstance: instance,
        hCursor: unsafe { LoadCursorW(None, IDC_ARROW)? },
        hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut _),
        lpszClassName: CLASS_NAME,
        ..Default::default()
    };
    if unsafe { RegisterClassW(&wc) } == 0 {
        let error = unsafe { GetLastError() };
        if error != ERROR_CLASS_ALREADY_EXISTS {
            return Err(windows::core::Error::from(error).into());
        }
    }

    REGISTERED.with(|r| r.set(true));
    Ok(())
}

/// Create the panel as a child of `parent`, sized to its client area
pub fn create(parent: HWND) -> Result<HWND> {
    unsafe {
        let instance: HINSTANCE = GetModuleHandleW(None)?.into();
        register_class(instance)?;

        let mut client = RECT::default();
        GetClientRect(parent, &mut client)?;

        let panel = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            CLASS_NAME,
            None,
            WS_CHILD | WS_VISIBLE | WS_CLIPCHILDREN,
            0,
            0,
            client.right,
            client.bottom,
            Some(parent),
            None,
            Some(instance),
            None,
        )?;

        let button = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            w!("BUTTON"),
            &HSTRING::from(CLOSE_LABEL),
            WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_PUSHBUTTON as u32),
            0,
            0,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            Some(panel),
            Some(HMENU(ID_CLOSE as isize as *mut _)),
            Some(instance),
            None,
        )?;
        let font = GetStockObject(DEFAULT_GUI_FONT);
        SendMessageW(button, WM_SETFONT, Some(WPARAM(font.0 as usize)), Some(LPARAM(1)));

        fit(panel, client.right, client.bottom);
        debug!("Created content panel {:?}", panel);
        Ok(panel)
    }
}

/// Destroy a panel whose frame could not be set up
pub fn destroy(panel: HWND) {
    if let Err(e) = unsafe { DestroyWindow(panel) } {
        debug!("Failed to destroy content panel: {}", e);
    }
}

/// Resize the panel to cover a client area of `width` x `height`
pub fn fit(panel: HWND, width: i32, height: i32) {
    unsafe {
        let _ = MoveWindow(panel, 0, 0, width, height, true);
    }
}

fn layout(panel: HWND, width: i32, height: i32) {
    unsafe {
        if let Ok(button) = GetDlgItem(Some(panel), ID_CLOSE) {
            let x = (width - BUTTON_WIDTH) / 2;
            let y = height / 2 + SPACING;
            let _ = MoveWindow(button, x, y, BUTTON_WIDTH, BUTTON_HEIGHT, true);
        }
    }
}

/// Greeting in the theme font, bold and twice the size
fn paint(panel: HWND) {
    unsafe {
        let mut ps = PAINTSTRUCT::default();
        let hdc = BeginPaint(panel, &mut ps);

        let mut font = LOGFONTW::default();
        let loaded = SystemParametersInfoForDpi(
            SPI_GETICONTITLELOGFONT.0,
            std::mem::size_of::<LOGFONTW>() as u32,
            Some(&mut font as *mut LOGFONTW as *mut _),
            0,
            GetDpiForWindow(panel),
        )
        .is_ok();

        let mut previous = HGDIOBJ::default();
        let bold = if loaded {
            font.lfHeight *= 2;
            font.lfWeight = FW_BOLD.0 as i32;
            let bold = CreateFontIndirectW(&font);
            previous = SelectObject(hdc, bold.into());
            Some(bold)
        } else {
            None
        };

        let mut client = RECT::default();
        let _ = GetClientRect(panel, &mut client);
        let mut text_rect = RECT {
            bottom: client.bottom / 2 - SPACING,
            top: client.bottom / 2 - SPACING - 2 * BUTTON_HEIGHT,
            ..client
        };

        SetBkMode(hdc, TRANSPARENT);
        let mut text: Vec<u16> = GREETING.encode_utf16().collect();
        DrawTextW(hdc, &mut text, &mut text_rect, DT_CENTER | DT_VCENTER | DT_SINGLELINE);

        if let Some(bold) = bold {
            SelectObject(hdc, previous);
            let _ = DeleteObject(bold.into());
        }
        let _ = EndPaint(panel, &ps);
    }
}

unsafe extern "system" fn panel_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_NCHITTEST => {
            let point = Point::new(x_of(lparam), y_of(lparam));
            match PanelProc.handle(Message::NcHitTest(point)) {
                Outcome::Handled(value) => LRESULT(value),
                Outcome::Default => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
            }
        }
        WM_SIZE => {
            let width = (lparam.0 & 0xFFFF) as i32;
            let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
            layout(hwnd, width, height);
            LRESULT(0)
        }
        WM_PAINT => {
            paint(hwnd);
            LRESULT(0)
        }
        WM_COMMAND if (wparam.0 & 0xFFFF) as i32 == ID_CLOSE => {
            if let Ok(frame) = unsafe { GetParent(hwnd) } {
                let _ = unsafe { PostMessageW(Some(frame), WM_CLOSE, WPARAM(0), LPARAM(0)) };
            }
            LRESULT(0)
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}
