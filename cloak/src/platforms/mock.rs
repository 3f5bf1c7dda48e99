//! In-memory desktop engine for tests.
//!
//! Models the pieces of OS state the control surface touches: the cursor
//! display counter, the clip rectangle, the cursor position and per-window
//! display affinity. Clamping follows the OS: a clipped cursor cannot leave
//! the clip rectangle, an unclipped one cannot leave the screen.

use crate::platforms::DesktopEngine;
use crate::types::{CaptureMode, ClipRect, ScreenPoint, WindowHandle};
use crate::ControlError;
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard};

const DEFAULT_SCREEN: ClipRect = ClipRect {
    left: 0,
    top: 0,
    right: 1920,
    bottom: 1080,
};

/// One call made against a [`MockEngine`], in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ExcludeFromCapture { window: WindowHandle, affinity: u32 },
    HideCursor,
    ShowCursor,
    ClipCursor(ClipRect),
    UnclipCursor,
    SetCursorPos(ScreenPoint),
}

#[derive(Debug)]
struct MockState {
    screen: ClipRect,
    display_count: i32,
    clip: Option<ClipRect>,
    cursor: ScreenPoint,
    windows: HashSet<WindowHandle>,
    affinities: HashMap<WindowHandle, u32>,
    calls: Vec<MockCall>,
}

impl MockState {
    fn bounds(&self) -> ClipRect {
        self.clip.unwrap_or(self.screen)
    }
}

#[derive(Debug)]
pub struct MockEngine {
    state: Mutex<MockState>,
}

impl Default for MockEngine {
    fn default() -> Self {
        Self::with_screen(DEFAULT_SCREEN)
    }
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_screen(screen: ClipRect) -> Self {
        Self {
            state: Mutex::new(MockState {
                screen,
                display_count: 0,
                clip: None,
                cursor: ScreenPoint::new(screen.left, screen.top),
                windows: HashSet::new(),
                affinities: HashMap::new(),
                calls: Vec::new(),
            }),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Make `window` a live window; affinity requests for unknown handles fail
    pub fn register_window(&self, window: WindowHandle) {
        self.state().windows.insert(window);
    }

    pub fn destroy_window(&self, window: WindowHandle) {
        let mut state = self.state();
        state.windows.remove(&window);
        state.affinities.remove(&window);
    }

    pub fn display_count(&self) -> i32 {
        self.state().display_count
    }

    pub fn cursor_visible(&self) -> bool {
        self.state().display_count >= 0
    }

    pub fn clip_rect(&self) -> Option<ClipRect> {
        self.state().clip
    }

    pub fn affinity(&self, window: WindowHandle) -> Option<u32> {
        self.state().affinities.get(&window).copied()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    /// Simulate pointer motion from outside the control surface (user or another
    /// process). The result is clamped exactly like `set_cursor_pos`.
    pub fn move_cursor(&self, point: ScreenPoint) -> ScreenPoint {
        let mut state = self.state();
        let clamped = state.bounds().clamp(point);
        state.cursor = clamped;
        clamped
    }
}

impl DesktopEngine for MockEngine {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn exclude_from_capture(&self, window: WindowHandle, mode: CaptureMode) -> Result<(), ControlError> {
        let mut state = self.state();
        let affinity = mode.affinity();
        state.calls.push(MockCall::ExcludeFromCapture { window, affinity });
        if !state.windows.contains(&window) {
            return Err(ControlError::PlatformError(format!(
                "invalid window handle {}",
                window
            )));
        }
        state.affinities.insert(window, affinity);
        Ok(())
    }

    fn hide_cursor(&self) -> i32 {
        let mut state = self.state();
        state.calls.push(MockCall::HideCursor);
        state.display_count -= 1;
        state.display_count
    }

    fn show_cursor(&self) -> i32 {
        let mut state = self.state();
        state.calls.push(MockCall::ShowCursor);
        state.display_count += 1;
        state.display_count
    }

    fn clip_cursor(&self, rect: ClipRect) -> Result<(), ControlError> {
        let mut state = self.state();
        state.calls.push(MockCall::ClipCursor(rect));
        state.clip = Some(rect);
        state.cursor = rect.clamp(state.cursor);
        Ok(())
    }

    fn unclip_cursor(&self) -> Result<(), ControlError> {
        let mut state = self.state();
        state.calls.push(MockCall::UnclipCursor);
        state.clip = None;
        Ok(())
    }

    fn set_cursor_pos(&self, point: ScreenPoint) -> Result<(), ControlError> {
        let mut state = self.state();
        state.calls.push(MockCall::SetCursorPos(point));
        state.cursor = state.bounds().clamp(point);
        Ok(())
    }

    fn cursor_pos(&self) -> Result<ScreenPoint, ControlError> {
        Ok(self.state().cursor)
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }
}
