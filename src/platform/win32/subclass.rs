//! Replacement window procedure for the winit-created frame window
//!
//! Messages the frame does not handle are forwarded to winit's procedure.
//! The state lives in a thread local: the window belongs to the UI thread
//! and there is only one frame.

use super::host::{from_native, to_native, Win32Host};
use super::{panel, x_of, y_of};
use crate::frame::{FrameProc, Message, Outcome};
use crate::geometry::Point;
use crate::utils::error::Result;
use log::{debug, warn};
use std::cell::Cell;
use windows::Win32::Foundation::{
    GetLastError, SetLastError, HWND, LPARAM, LRESULT, RECT, WIN32_ERROR, WPARAM,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CallWindowProcW, DefWindowProcW, SetWindowLongPtrW, SetWindowPos, GWLP_WNDPROC,
    SWP_FRAMECHANGED, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, WM_LBUTTONDOWN,
    WM_NCCALCSIZE, WM_NCDESTROY, WM_NCHITTEST, WM_SIZE, WNDPROC,
};

#[derive(Clone, Copy)]
struct FrameState {
    hwnd: HWND,
    original: WNDPROC,
    proc: FrameProc,
    panel: HWND,
}

thread_local! {
    static FRAME: Cell<Option<FrameState>> = const { Cell::new(None) };
}

pub fn install(hwnd: HWND, proc: FrameProc, panel: HWND) -> Result<()> {
    let original = unsafe {
        SetLastError(WIN32_ERROR(0));
        let previous = SetWindowLongPtrW(hwnd, GWLP_WNDPROC, frame_proc as usize as isize);
        if previous == 0 && GetLastError().0 != 0 {
            return Err(windows::core::Error::from_win32().into());
        }
        std::mem::transmute::<isize, WNDPROC>(previous)
    };

    let state = FrameState { hwnd, original, proc, panel };
    FRAME.with(|frame| frame.set(Some(state)));

    // The window already exists, so the size calculation that happened at
    // creation has to be redone through the new procedure.
    let refreshed = unsafe {
        SetWindowPos(
            hwnd,
            None,
            0,
            0,
            0,
            0,
            SWP_FRAMECHANGED | SWP_NOMOVE | SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
        )
    };
    if let Err(e) = refreshed {
        restore(&state);
        return Err(e.into());
    }

    debug!("Subclassed frame window {:?}", hwnd);
    Ok(())
}

fn current(hwnd: HWND) -> Option<FrameState> {
    FRAME.with(|frame| frame.get()).filter(|state| state.hwnd == hwnd)
}

unsafe extern "system" fn frame_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let Some(state) = current(hwnd) else {
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    };

    match msg {
        WM_SIZE => {
            let width = (lparam.0 & 0xFFFF) as i32;
            let height = ((lparam.0 >> 16) & 0xFFFF) as i32;
            panel::fit(state.panel, width, height);
        }
        WM_NCDESTROY => {
            restore(&state);
        }
        _ => {}
    }

    let mut host = Win32Host {
        hwnd,
        original: state.original,
        wparam,
        lparam,
    };

    let outcome = match msg {
        WM_LBUTTONDOWN => state.proc.handle(&mut host, Message::LButtonDown),

        WM_NCCALCSIZE if lparam.0 != 0 => {
            let native = lparam.0 as *mut RECT;
            let mut rect = from_native(unsafe { *native });
            let outcome = state.proc.handle(&mut host, Message::NcCalcSize(&mut rect));
            unsafe { *native = to_native(rect) };
            outcome
        }

        WM_NCHITTEST => {
            let screen = Point::new(x_of(lparam), y_of(lparam));
            state.proc.handle(&mut host, Message::NcHitTest(screen))
        }

        _ => state.proc.handle(&mut host, Message::Other),
    };

    match outcome {
        Outcome::Handled(value) => LRESULT(value),
        Outcome::Default => unsafe {
            CallWindowProcW(state.original, hwnd, msg, wparam, lparam)
        },
    }
}

/// Put the original procedure back and forget the frame
fn restore(state: &FrameState) {
    if let Some(original) = state.original {
        let result =
            unsafe { SetWindowLongPtrW(state.hwnd, GWLP_WNDPROC, original as usize as isize) };
        if result == 0 {
            warn!("Failed to restore the original window procedure");
        }
    }
    FRAME.with(|frame| frame.set(None));
    debug!("Removed frame subclass from {:?}", state.hwnd);
}
