//! Capture exclusion and cursor locking for desktop hosts
//!
//! This crate exposes three primitives: hide a window from screen capture,
//! hide the cursor while pinning it to a single pixel, and undo the pin. Every
//! operation is a synchronous pass-through to the OS through a
//! [`platforms::DesktopEngine`], so the OS-global cursor state can be swapped
//! for a fake in tests.
//!
//! The cursor display counter is not compensated. Each
//! [`DesktopControl::hide_and_lock_cursor`] decrements it once and each
//! [`DesktopControl::restore_cursor`] increments it once, exactly like the
//! underlying OS calls. Two hides followed by one restore leave the cursor
//! unclipped but still hidden.

use std::sync::Arc;
use std::time::Instant;
use tracing::{info, instrument, warn};

pub mod config;
pub mod errors;
pub mod platforms;
#[cfg(test)]
mod tests;
pub mod types;

pub use config::ControlConfig;
pub use errors::ControlError;
pub use platforms::DesktopEngine;
pub use types::{CaptureMode, ClipRect, ScreenPoint, WindowHandle};

/// The main entry point for cursor and capture control
pub struct DesktopControl {
    engine: Arc<dyn DesktopEngine>,
    config: ControlConfig,
}

impl DesktopControl {
    /// Create a controller backed by the native engine for this platform.
    ///
    /// When no native engine exists and `config.allow_fallback` is set, a
    /// logging no-op engine is used instead.
    #[instrument(skip(config))]
    pub fn new(config: ControlConfig) -> Result<Self, ControlError> {
        let start = Instant::now();
        info!("Initializing desktop control engine");

        let engine = match platforms::create_engine() {
            Ok(engine) => engine,
            Err(ControlError::UnsupportedPlatform(reason)) if config.allow_fallback => {
                warn!(
                    reason = reason.as_str(),
                    "Native engine unavailable, cursor hiding and capture protection are disabled"
                );
                Arc::new(platforms::FallbackEngine::new()) as Arc<dyn DesktopEngine>
            }
            Err(e) => return Err(e),
        };

        let duration = start.elapsed();
        info!(
            duration_ms = duration.as_millis(),
            engine = engine.name(),
            capture_mode = ?config.capture_mode,
            "Desktop control engine initialized"
        );

        Ok(Self { engine, config })
    }

    pub fn with_engine(engine: Arc<dyn DesktopEngine>, config: ControlConfig) -> Self {
        Self { engine, config }
    }

    pub fn engine(&self) -> &Arc<dyn DesktopEngine> {
        &self.engine
    }

    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Ask the compositor to leave `window` out of screen capture and remote output.
    ///
    /// Fire-and-forget: an invalid handle or an OS that does not support the
    /// configured affinity is logged and otherwise ignored.
    #[instrument(skip(self))]
    pub fn set_window_hidden_from_capture(&self, window: WindowHandle) {
        let start = Instant::now();
        info!(%window, "Hiding window from capture");

        if let Err(e) = self.engine.exclude_from_capture(window, self.config.capture_mode) {
            warn!(%window, error = %e, "Capture exclusion request was not applied");
        }

        let duration = start.elapsed();
        info!(duration_ms = duration.as_millis(), "Capture exclusion requested");
    }

    /// Validate a host number as a window handle, then hide that window from capture
    pub fn set_window_hidden_from_capture_raw(&self, handle: f64) -> Result<(), ControlError> {
        let window = WindowHandle::from_f64(handle)?;
        self.set_window_hidden_from_capture(window);
        Ok(())
    }

    /// Hide the cursor, clip it to the pixel at `point` and move it there.
    ///
    /// The three OS calls are not atomic. Repeated calls stack on the display
    /// counter and need the same number of restores to reveal the cursor.
    #[instrument(skip(self))]
    pub fn hide_and_lock_cursor(&self, point: ScreenPoint) {
        let start = Instant::now();
        info!(x = point.x, y = point.y, "Hiding and locking cursor");

        let display_count = self.engine.hide_cursor();

        let rect = ClipRect::single_pixel(point);
        if let Err(e) = self.engine.clip_cursor(rect) {
            warn!(error = %e, "Failed to clip cursor");
        }
        if let Err(e) = self.engine.set_cursor_pos(point) {
            warn!(error = %e, "Failed to move cursor");
        }

        let duration = start.elapsed();
        info!(
            duration_ms = duration.as_millis(),
            display_count,
            "Cursor hidden and locked"
        );
    }

    /// Truncate host coordinates to a screen pixel, then hide and lock the cursor there
    pub fn hide_and_lock_cursor_at(&self, x: f64, y: f64) -> Result<(), ControlError> {
        let point = ScreenPoint::from_coordinates(x, y)?;
        self.hide_and_lock_cursor(point);
        Ok(())
    }

    /// Show the cursor once and remove any clip rectangle.
    ///
    /// Clearing the clip is idempotent. Showing is not: calling this without a
    /// matching hide pushes the display counter above its resting value.
    #[instrument(skip(self))]
    pub fn restore_cursor(&self) {
        let start = Instant::now();
        info!("Restoring cursor");

        let display_count = self.engine.show_cursor();
        if let Err(e) = self.engine.unclip_cursor() {
            warn!(error = %e, "Failed to release cursor clip");
        }

        let duration = start.elapsed();
        info!(
            duration_ms = duration.as_millis(),
            display_count,
            "Cursor restored"
        );
    }
}
