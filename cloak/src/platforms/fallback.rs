use crate::platforms::DesktopEngine;
use crate::types::{CaptureMode, ClipRect, ScreenPoint, WindowHandle};
use crate::ControlError;
use tracing::info;

/// Engine used where no native backend exists. Logs each request and does nothing.
#[derive(Debug, Default)]
pub struct FallbackEngine;

impl FallbackEngine {
    pub fn new() -> Self {
        Self
    }
}

impl DesktopEngine for FallbackEngine {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn exclude_from_capture(&self, window: WindowHandle, mode: CaptureMode) -> Result<(), ControlError> {
        info!(%window, ?mode, "Fallback: setWindowHiddenFromCapture");
        Ok(())
    }

    fn hide_cursor(&self) -> i32 {
        info!("Fallback: hide cursor");
        0
    }

    fn show_cursor(&self) -> i32 {
        info!("Fallback: show cursor");
        0
    }

    fn clip_cursor(&self, rect: ClipRect) -> Result<(), ControlError> {
        info!(?rect, "Fallback: clip cursor");
        Ok(())
    }

    fn unclip_cursor(&self) -> Result<(), ControlError> {
        info!("Fallback: unclip cursor");
        Ok(())
    }

    fn set_cursor_pos(&self, point: ScreenPoint) -> Result<(), ControlError> {
        info!(x = point.x, y = point.y, "Fallback: set cursor position");
        Ok(())
    }

    fn cursor_pos(&self) -> Result<ScreenPoint, ControlError> {
        Err(ControlError::UnsupportedPlatform(
            "the fallback engine cannot read the cursor position".to_string(),
        ))
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
