//! Typed values passed across the control surface.
//!
//! Host runtimes hand us plain numbers. Everything here converts those numbers
//! into native values explicitly, rejecting what cannot be represented instead
//! of letting a cast silently wrap.

use crate::errors::ControlError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Largest integer a host `f64` can carry without losing precision.
const MAX_EXACT_HANDLE: f64 = 9_007_199_254_740_992.0; // 2^53

/// Opaque OS window identity.
///
/// No ownership is taken. The caller keeps the window alive; a stale or
/// bogus handle makes the underlying OS call fail silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowHandle(isize);

impl WindowHandle {
    pub fn new(raw: isize) -> Self {
        Self(raw)
    }

    /// Convert a host number into a handle.
    ///
    /// `0` is accepted and forwarded as the null handle.
    pub fn from_f64(value: f64) -> Result<Self, ControlError> {
        if !value.is_finite() {
            return Err(ControlError::InvalidArgument(format!(
                "window handle must be a finite number, got {}",
                value
            )));
        }
        if value < 0.0 {
            return Err(ControlError::InvalidArgument(format!(
                "window handle must not be negative, got {}",
                value
            )));
        }
        if value.fract() != 0.0 {
            return Err(ControlError::InvalidArgument(format!(
                "window handle must be an integer, got {}",
                value
            )));
        }
        if value > MAX_EXACT_HANDLE {
            return Err(ControlError::InvalidArgument(format!(
                "window handle {} exceeds the exactly representable range",
                value
            )));
        }
        let raw = isize::try_from(value as i64).map_err(|_| {
            ControlError::InvalidArgument(format!(
                "window handle {} does not fit a native pointer",
                value
            ))
        })?;
        Ok(Self(raw))
    }

    pub fn raw(&self) -> isize {
        self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// A pixel in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Truncate host coordinates toward zero.
    ///
    /// Values outside the monitor layout are kept as-is; only values that do
    /// not fit the native integer type are rejected.
    pub fn from_coordinates(x: f64, y: f64) -> Result<Self, ControlError> {
        Ok(Self {
            x: truncate_coordinate("x", x)?,
            y: truncate_coordinate("y", y)?,
        })
    }
}

fn truncate_coordinate(axis: &str, value: f64) -> Result<i32, ControlError> {
    if !value.is_finite() {
        return Err(ControlError::InvalidArgument(format!(
            "{} coordinate must be a finite number, got {}",
            axis, value
        )));
    }
    let truncated = value.trunc();
    if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
        return Err(ControlError::InvalidArgument(format!(
            "{} coordinate {} is outside the screen coordinate range",
            axis, value
        )));
    }
    Ok(truncated as i32)
}

/// Cursor clip rectangle. `right` and `bottom` are exclusive, as in Win32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ClipRect {
    /// The one-pixel square anchored at `point`.
    pub fn single_pixel(point: ScreenPoint) -> Self {
        Self {
            left: point.x,
            top: point.y,
            right: point.x.saturating_add(1),
            bottom: point.y.saturating_add(1),
        }
    }

    pub fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Pull `point` inside the rectangle the way the OS clamps a clipped cursor.
    pub fn clamp(&self, point: ScreenPoint) -> ScreenPoint {
        let max_x = self.right.saturating_sub(1).max(self.left);
        let max_y = self.bottom.saturating_sub(1).max(self.top);
        ScreenPoint {
            x: point.x.clamp(self.left, max_x),
            y: point.y.clamp(self.top, max_y),
        }
    }
}

/// Display affinity applied when a window is hidden from capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    /// `WDA_MONITOR`: the window renders black in captures.
    #[default]
    Monitor,
    /// `WDA_EXCLUDEFROMCAPTURE`: the window is left out of captures entirely.
    /// Needs Windows 10 version 2004 or later.
    #[serde(alias = "exclude")]
    ExcludeFromCapture,
}

impl CaptureMode {
    /// Raw `WINDOW_DISPLAY_AFFINITY` value.
    pub fn affinity(&self) -> u32 {
        match self {
            CaptureMode::Monitor => 0x0000_0001,
            CaptureMode::ExcludeFromCapture => 0x0000_0011,
        }
    }
}

impl FromStr for CaptureMode {
    type Err = ControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monitor" => Ok(CaptureMode::Monitor),
            "exclude" | "exclude_from_capture" => Ok(CaptureMode::ExcludeFromCapture),
            other => Err(ControlError::Config(format!(
                "unknown capture mode '{}', expected 'monitor' or 'exclude'",
                other
            ))),
        }
    }
}
