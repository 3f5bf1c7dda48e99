use crate::types::{CaptureMode, ClipRect, ScreenPoint, WindowHandle};
use crate::ControlError;
use std::sync::Arc;

/// The capability set every desktop backend must provide.
///
/// Each method maps onto one OS call. Engines report OS failures as
/// `ControlError::PlatformError`; deciding whether to surface them is left to
/// the caller.
pub trait DesktopEngine: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Apply the capture-exclusion display affinity to a window
    fn exclude_from_capture(&self, window: WindowHandle, mode: CaptureMode) -> Result<(), ControlError>;

    /// Decrement the global cursor display counter and return the new value.
    /// The cursor is hidden while the counter is negative.
    fn hide_cursor(&self) -> i32;

    /// Increment the global cursor display counter and return the new value
    fn show_cursor(&self) -> i32;

    /// Confine cursor movement to `rect`
    fn clip_cursor(&self, rect: ClipRect) -> Result<(), ControlError>;

    /// Remove any cursor confinement
    fn unclip_cursor(&self) -> Result<(), ControlError>;

    /// Move the cursor to `point`
    fn set_cursor_pos(&self, point: ScreenPoint) -> Result<(), ControlError>;

    /// Current cursor position
    fn cursor_pos(&self) -> Result<ScreenPoint, ControlError>;

    /// Enable downcasting to concrete engine types
    fn as_any(&self) -> &dyn std::any::Any;
}

pub mod fallback;
pub mod mock;
#[cfg(target_os = "windows")]
pub mod windows;
#[cfg(all(target_os = "windows", test))]
pub mod windows_tests;

pub use fallback::FallbackEngine;
pub use mock::{MockCall, MockEngine};

/// Create the native engine for the current platform
pub fn create_engine() -> Result<Arc<dyn DesktopEngine>, ControlError> {
    #[cfg(target_os = "windows")]
    {
        Ok(Arc::new(windows::WindowsEngine::new()))
    }
    #[cfg(not(target_os = "windows"))]
    {
        Err(ControlError::UnsupportedPlatform(
            "cursor and capture control is only implemented for Windows".to_string(),
        ))
    }
}
