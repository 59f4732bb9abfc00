//! Win32 window source built on `EnumWindows`.

use std::ffi::c_void;

use tracing::{debug, info};
use windows::Win32::Foundation::{BOOL, HWND, LPARAM, RECT, TRUE};
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MONITOR_DEFAULTTONEAREST, MONITORINFO, MONITORINFOEXW, MonitorFromWindow,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GetClassNameW, GetWindowRect, GetWindowTextLengthW, GetWindowTextW,
    GetWindowThreadProcessId, IsWindowVisible,
};

use crate::process;
use crate::window::errors::WindowError;
use crate::window::traits::WindowSource;
use crate::window::types::{Bounds, RawWindow, WindowHandle};

/// Longest window class name Win32 allows, plus the terminator.
const CLASS_NAME_CAPACITY: usize = 257;

impl From<WindowHandle> for HWND {
    fn from(handle: WindowHandle) -> Self {
        HWND(handle.raw() as usize as *mut c_void)
    }
}

fn window_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle::new(hwnd.0 as usize as u64)
}

#[derive(Debug, Default)]
pub struct Win32WindowSource;

impl Win32WindowSource {
    pub fn new() -> Self {
        Self
    }
}

unsafe extern "system" fn collect_handle(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the `Vec<HWND>` passed by `list_top_level_windows`,
    // which outlives the synchronous EnumWindows call.
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
    handles.push(hwnd);
    TRUE
}

fn read_window_text(hwnd: HWND) -> String {
    let length = unsafe { GetWindowTextLengthW(hwnd) };
    if length <= 0 {
        return String::new();
    }

    let mut buffer = vec![0u16; length as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buffer) };
    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn read_class_name(hwnd: HWND) -> String {
    let mut buffer = [0u16; CLASS_NAME_CAPACITY];
    let copied = unsafe { GetClassNameW(hwnd, &mut buffer) };
    String::from_utf16_lossy(&buffer[..copied.max(0) as usize])
}

fn read_bounds(hwnd: HWND) -> Bounds {
    let mut rect = RECT::default();
    match unsafe { GetWindowRect(hwnd, &mut rect) } {
        Ok(()) => Bounds::new(rect.left, rect.top, rect.right, rect.bottom),
        Err(e) => {
            debug!(
                event = "core.window.rect_unavailable",
                handle = hwnd.0 as usize,
                error = %e
            );
            Bounds::default()
        }
    }
}

fn read_raw_window(hwnd: HWND) -> RawWindow {
    let mut process_id = 0u32;
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut process_id)) };

    RawWindow {
        handle: window_handle(hwnd),
        visible: unsafe { IsWindowVisible(hwnd) }.as_bool(),
        title: read_window_text(hwnd),
        class_name: read_class_name(hwnd),
        bounds: read_bounds(hwnd),
        owner_process_id: process_id,
    }
}

impl WindowSource for Win32WindowSource {
    fn list_top_level_windows(&self) -> Result<Vec<RawWindow>, WindowError> {
        let mut handles: Vec<HWND> = Vec::new();

        unsafe {
            EnumWindows(
                Some(collect_handle),
                LPARAM(&mut handles as *mut Vec<HWND> as isize),
            )
        }
        .map_err(|e| WindowError::EnumerationFailed {
            message: e.to_string(),
        })?;

        info!(event = "core.window.native_list_completed", count = handles.len());
        Ok(handles.into_iter().map(read_raw_window).collect())
    }

    fn monitor_device_name(&self, handle: WindowHandle) -> Option<String> {
        let monitor = unsafe { MonitorFromWindow(HWND::from(handle), MONITOR_DEFAULTTONEAREST) };
        if monitor.is_invalid() {
            return None;
        }

        let mut info = MONITORINFOEXW::default();
        info.monitorInfo.cbSize = std::mem::size_of::<MONITORINFOEXW>() as u32;
        let found =
            unsafe { GetMonitorInfoW(monitor, &mut info.monitorInfo as *mut MONITORINFO) };
        if !found.as_bool() {
            return None;
        }

        let length = info
            .szDevice
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(info.szDevice.len());
        Some(String::from_utf16_lossy(&info.szDevice[..length]))
    }

    fn process_image_path(&self, process_id: u32) -> Option<String> {
        process::resolve_image_path(process_id)
    }
}
