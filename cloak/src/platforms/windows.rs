use crate::platforms::DesktopEngine;
use crate::types::{CaptureMode, ClipRect, ScreenPoint, WindowHandle};
use crate::ControlError;
use tracing::debug;

// Windows API imports
use windows::Win32::Foundation::HWND;
use windows::Win32::Foundation::POINT;
use windows::Win32::Foundation::RECT;

use windows::Win32::UI::WindowsAndMessaging::ClipCursor;
use windows::Win32::UI::WindowsAndMessaging::GetClipCursor;
use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;
use windows::Win32::UI::WindowsAndMessaging::GetWindowDisplayAffinity;
use windows::Win32::UI::WindowsAndMessaging::SetCursorPos;
use windows::Win32::UI::WindowsAndMessaging::SetWindowDisplayAffinity;
use windows::Win32::UI::WindowsAndMessaging::ShowCursor;
use windows::Win32::UI::WindowsAndMessaging::WINDOW_DISPLAY_AFFINITY;

fn to_hwnd(window: WindowHandle) -> HWND {
    HWND(window.raw() as *mut std::ffi::c_void)
}

impl From<ClipRect> for RECT {
    fn from(rect: ClipRect) -> Self {
        RECT {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

impl From<RECT> for ClipRect {
    fn from(rect: RECT) -> Self {
        ClipRect {
            left: rect.left,
            top: rect.top,
            right: rect.right,
            bottom: rect.bottom,
        }
    }
}

/// Desktop engine backed by user32.
///
/// Stateless: the display counter and clip rectangle live in the OS and are
/// shared with every other process on the machine.
#[derive(Debug, Default)]
pub struct WindowsEngine;

impl WindowsEngine {
    pub fn new() -> Self {
        Self
    }

    /// Current clip rectangle. Without confinement this is the virtual screen.
    pub fn clip_rect(&self) -> Result<ClipRect, ControlError> {
        let mut rect = RECT::default();
        unsafe { GetClipCursor(&mut rect)? };
        Ok(rect.into())
    }

    /// Raw display affinity currently applied to `window`
    pub fn display_affinity(&self, window: WindowHandle) -> Result<u32, ControlError> {
        let mut affinity = 0u32;
        unsafe { GetWindowDisplayAffinity(to_hwnd(window), &mut affinity)? };
        Ok(affinity)
    }
}

impl DesktopEngine for WindowsEngine {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn exclude_from_capture(&self, window: WindowHandle, mode: CaptureMode) -> Result<(), ControlError> {
        unsafe {
            SetWindowDisplayAffinity(to_hwnd(window), WINDOW_DISPLAY_AFFINITY(mode.affinity())).map_err(|e| {
                ControlError::PlatformError(format!(
                    "SetWindowDisplayAffinity failed for window {}: {}",
                    window, e
                ))
            })
        }
    }

    fn hide_cursor(&self) -> i32 {
        let count = unsafe { ShowCursor(false) };
        debug!(display_count = count, "ShowCursor(FALSE)");
        count
    }

    fn show_cursor(&self) -> i32 {
        let count = unsafe { ShowCursor(true) };
        debug!(display_count = count, "ShowCursor(TRUE)");
        count
    }

    fn clip_cursor(&self, rect: ClipRect) -> Result<(), ControlError> {
        let native: RECT = rect.into();
        unsafe {
            ClipCursor(Some(&native as *const RECT))
                .map_err(|e| ControlError::PlatformError(format!("ClipCursor failed: {}", e)))
        }
    }

    fn unclip_cursor(&self) -> Result<(), ControlError> {
        unsafe {
            ClipCursor(None).map_err(|e| ControlError::PlatformError(format!("ClipCursor(NULL) failed: {}", e)))
        }
    }

    fn set_cursor_pos(&self, point: ScreenPoint) -> Result<(), ControlError> {
        unsafe {
            SetCursorPos(point.x, point.y).map_err(|e| {
                ControlError::PlatformError(format!(
                    "SetCursorPos({}, {}) failed: {}",
                    point.x, point.y, e
                ))
            })
        }
    }

    fn cursor_pos(&self) -> Result<ScreenPoint, ControlError> {
        let mut point = POINT::default();
        unsafe { GetCursorPos(&mut point)? };
        Ok(ScreenPoint::new(point.x, point.y))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
